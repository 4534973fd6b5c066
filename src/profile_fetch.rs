use std::thread;

use anyhow::Result;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use urlencoding::encode;

use crate::config::Config;
use crate::error::FetchError;
use crate::http_client::http_client;
use crate::model::{History, PlayerDocument, parse_history_json, parse_player_document};
use crate::routes::ProfileTarget;

/// Network seam for the two player endpoints. Implementations return the raw
/// response body of a successful request.
pub trait PlayerSource {
    fn fetch_full(&self, target: &ProfileTarget) -> Result<String, FetchError>;
    fn fetch_history(&self, target: &ProfileTarget) -> Result<String, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub document: PlayerDocument,
    pub history: Option<History>,
}

pub struct HttpPlayerSource {
    client: &'static Client,
    base_url: String,
}

impl HttpPlayerSource {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: config.api_url.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        check_status(resp.status())?;
        resp.text()
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}

impl PlayerSource for HttpPlayerSource {
    fn fetch_full(&self, target: &ProfileTarget) -> Result<String, FetchError> {
        self.get(&full_url(&self.base_url, target))
    }

    fn fetch_history(&self, target: &ProfileTarget) -> Result<String, FetchError> {
        self.get(&history_url(&self.base_url, target))
    }
}

/// Any non-2xx answer means the player could not be served.
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::NotFound {
            status: status.as_u16(),
        })
    }
}

pub fn full_url(base_url: &str, target: &ProfileTarget) -> String {
    format!("{}/full", player_url(base_url, target))
}

pub fn history_url(base_url: &str, target: &ProfileTarget) -> String {
    format!("{}/history", player_url(base_url, target))
}

fn player_url(base_url: &str, target: &ProfileTarget) -> String {
    format!(
        "{}/api/player/{}/{}",
        base_url.trim_end_matches('/'),
        encode(&target.platform),
        encode(&target.name)
    )
}

/// Requests `/full` and `/history` together and waits for both.
///
/// The full document is required: any failure there fails the whole load.
/// History is best-effort and any failure leaves it `None`.
pub fn load_profile<S>(source: &S, target: &ProfileTarget) -> Result<LoadedProfile, FetchError>
where
    S: PlayerSource + Sync + ?Sized,
{
    validate_target(target)?;

    let (full, history) = thread::scope(|scope| {
        let history = scope.spawn(|| source.fetch_history(target));
        let full = source.fetch_full(target);
        (full, history.join())
    });

    let document = full
        .and_then(|body| parse_player_document(&body))
        .inspect_err(|err| {
            tracing::warn!(player = %target, error = %err, "player load failed");
        })?;

    let history = match history {
        Ok(Ok(body)) => match parse_history_json(&body) {
            Ok(history) => Some(history),
            Err(err) => {
                tracing::debug!(player = %target, error = %err, "history body ignored");
                None
            }
        },
        Ok(Err(err)) => {
            tracing::debug!(player = %target, error = %err, "history unavailable");
            None
        }
        Err(_) => {
            tracing::warn!(player = %target, "history worker panicked");
            None
        }
    };

    tracing::info!(
        player = %target,
        weapons = document.weapons.len(),
        history = history.is_some(),
        "player loaded"
    );
    Ok(LoadedProfile { document, history })
}

fn validate_target(target: &ProfileTarget) -> Result<(), FetchError> {
    if target.platform.trim().is_empty() {
        return Err(FetchError::InvalidTarget("missing platform".to_string()));
    }
    if target.name.trim().is_empty() {
        return Err(FetchError::InvalidTarget("missing player name".to_string()));
    }
    Ok(())
}
