use thiserror::Error;

/// Outcome of a failed call against the analysis service.
///
/// Carries no partial data; callers decide how to degrade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("record not found")]
    NotFound,

    #[error("service returned HTTP {status}")]
    Service { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            FetchError::NotFound
        } else {
            FetchError::Service {
                status: status.as_u16(),
            }
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return FetchError::Decode(e.to_string());
        }
        match e.status() {
            Some(status) => FetchError::from_status(status),
            None => FetchError::Transport(e.to_string()),
        }
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Analysis service: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_404_is_not_found() {
        assert_eq!(
            FetchError::from_status(StatusCode::NOT_FOUND),
            FetchError::NotFound
        );
    }

    #[test]
    fn other_statuses_are_service_errors() {
        assert_eq!(
            FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            FetchError::Service { status: 500 }
        );
        assert_eq!(
            FetchError::from_status(StatusCode::BAD_GATEWAY),
            FetchError::Service { status: 502 }
        );
    }
}
