//! Darwin client error types.

use std::fmt;

/// Errors from fetching a departure board.
#[derive(Debug)]
pub enum DarwinError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// API key cannot be sent as a header
    InvalidApiKey,

    /// Mock board data missing or unreadable
    MockData(String),
}

impl DarwinError {
    /// Whether the board could not be reached at all, as opposed to the
    /// service answering with an error.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, DarwinError::Http(_))
    }
}

impl fmt::Display for DarwinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarwinError::Http(e) => write!(f, "HTTP error: {e}"),
            DarwinError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DarwinError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DarwinError::RateLimited => write!(f, "rate limited by Darwin API"),
            DarwinError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            DarwinError::InvalidApiKey => write!(f, "API key is not a valid header value"),
            DarwinError::MockData(msg) => write!(f, "mock data: {msg}"),
        }
    }
}

impl std::error::Error for DarwinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DarwinError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DarwinError {
    fn from(err: reqwest::Error) -> Self {
        DarwinError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DarwinError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DarwinError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected string (body: {})"
        );

        let err = DarwinError::MockData("no board for BTN".into());
        assert_eq!(err.to_string(), "mock data: no board for BTN");
    }

    #[test]
    fn upstream_errors_are_not_connectivity() {
        assert!(!DarwinError::Unauthorized.is_connectivity());
        assert!(!DarwinError::RateLimited.is_connectivity());
        assert!(
            !DarwinError::ApiError {
                status: 503,
                message: String::new()
            }
            .is_connectivity()
        );
    }
}
