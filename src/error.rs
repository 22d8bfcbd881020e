//! Fetch Errors
//!
//! One variant per way a records request can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport could not complete the request
    #[error("Network error: {0}")]
    Network(String),
    /// Response arrived with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Body is not JSON or not the expected shape
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_contains_code() {
        let err = FetchError::Status(500);
        assert!(err.to_string().contains("500"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}
