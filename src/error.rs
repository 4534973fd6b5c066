use thiserror::Error;

/// Failure while loading a player document. The display text is what the
/// profile screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid player target: {0}")]
    InvalidTarget(String),

    #[error("Player not found")]
    NotFound { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("invalid player json: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn not_found_hides_status_in_message() {
        let err = FetchError::NotFound { status: 502 };
        assert_eq!(err.to_string(), "Player not found");
    }

    #[test]
    fn transport_shows_underlying_text() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
