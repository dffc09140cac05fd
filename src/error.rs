use reqwest::StatusCode;
use thiserror::Error;

/// Message shown in the table whenever a refresh fails, whatever the cause.
pub const USER_ERROR_MESSAGE: &str = "데이터를 불러올 수 없습니다. 새로고침 후 다시 시도하세요.";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint could not be reached, or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Network(e) => e.status(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "HTTP error! status: 404 Not Found");
        assert_eq!(err.user_message(), USER_ERROR_MESSAGE);
    }
}
