use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";

const DEFAULT_TICK_MS: u64 = 250;
const MIN_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the stats API, without a trailing slash.
    pub api_url: String,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: None,
        }
    }
}

impl Config {
    /// Reads the process environment. `.env` files are expected to be loaded already.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("BF4_API_URL")
            .as_deref()
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let tick_ms = lookup("BF4_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);
        let log_file = lookup("BF4_LOG_FILE")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        Self {
            api_url,
            tick_rate: Duration::from_millis(tick_ms),
            log_file,
        }
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
