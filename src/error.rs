//! Crate-level error types.
//!
//! [`TwapError`] unifies every failure source (transport, exchange
//! rejection, JSON decoding, configuration) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

use std::time::Duration;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TwapError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TwapError {
    /// Configuration or credentials could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP call failed before a complete response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange answered with a non-success HTTP status.
    ///
    /// `code` and `msg` are taken from the exchange's error body when it has
    /// the usual `{"code":..,"msg":..}` shape, otherwise `code` is the HTTP
    /// status and `msg` the raw body text.
    #[error("api error (http {status}): code={code}, msg={msg}")]
    Api { status: u16, code: i64, msg: String },

    /// The response body could not be decoded into the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request parameters could not be form-encoded.
    #[error("parameter encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The per-call deadline expired before the response arrived.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The local clock cannot produce a valid request timestamp.
    #[error("clock error: {0}")]
    Clock(String),
}

impl TwapError {
    /// Returns the exchange error code if this is an [`TwapError::Api`] error.
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = TwapError::Api {
            status: 400,
            code: -1121,
            msg: "Invalid symbol.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "api error (http 400): code=-1121, msg=Invalid symbol."
        );
        assert_eq!(err.api_code(), Some(-1121));
    }

    #[test]
    fn json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TwapError = json_err.into();
        assert!(matches!(err, TwapError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
        assert_eq!(err.api_code(), None);
    }

    #[test]
    fn timeout_display() {
        let err = TwapError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "request timed out after 250ms");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TwapError>();
    }
}
