//! Request descriptors and per-call options.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;

use crate::Result;

/// Where the operation parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPlacement {
    Query,
    /// `application/x-www-form-urlencoded` request body.
    Body,
}

/// A fully specified signed request: method, endpoint and encoded
/// parameters. The client adds the API key header, `timestamp` and
/// `signature` when it is sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    endpoint: &'static str,
    params: String,
}

impl ApiRequest {
    #[must_use]
    pub fn signed(method: Method, endpoint: &'static str) -> Self {
        Self {
            method,
            endpoint,
            params: String::new(),
        }
    }

    /// Form-encodes `params` as the operation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TwapError::Encode`](crate::TwapError::Encode) if `params`
    /// is not a flat key/value structure.
    pub fn with_params<P: Serialize>(mut self, params: &P) -> Result<Self> {
        self.params = serde_urlencoded::to_string(params)?;
        Ok(self)
    }

    /// Mutating calls carry their parameters in the body, reads in the query.
    pub fn placement(&self) -> ParamPlacement {
        if self.method == Method::GET || self.method == Method::HEAD {
            ParamPlacement::Query
        } else {
            ParamPlacement::Body
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// The encoded operation parameters, without timestamp or signature.
    pub fn params(&self) -> &str {
        &self.params
    }
}

/// Per-call overrides applied on top of the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) recv_window: Option<u64>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `recvWindow` (milliseconds) for this call.
    #[must_use]
    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }

    /// Adds an extra HTTP header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Aborts the call with [`TwapError::Timeout`](crate::TwapError::Timeout)
    /// if no complete response arrives within `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Params {
        symbol: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
    }

    #[test]
    fn placement_follows_method() {
        let get = ApiRequest::signed(Method::GET, "/x");
        let post = ApiRequest::signed(Method::POST, "/x");
        let delete = ApiRequest::signed(Method::DELETE, "/x");

        assert_eq!(get.placement(), ParamPlacement::Query);
        assert_eq!(post.placement(), ParamPlacement::Body);
        assert_eq!(delete.placement(), ParamPlacement::Body);
    }

    #[test]
    fn with_params_encodes_and_skips_unset() {
        let request = ApiRequest::signed(Method::GET, "/x")
            .with_params(&Params {
                symbol: "BTCUSDT",
                page: None,
            })
            .unwrap();

        assert_eq!(request.params(), "symbol=BTCUSDT");
    }

    #[test]
    fn with_params_rejects_nested_values() {
        #[derive(Serialize)]
        struct Nested {
            inner: Vec<Vec<u8>>,
        }

        let result = ApiRequest::signed(Method::GET, "/x").with_params(&Nested {
            inner: vec![vec![1]],
        });
        assert!(matches!(result, Err(crate::TwapError::Encode(_))));
    }

    #[test]
    fn options_accumulate() {
        let options = RequestOptions::new()
            .with_recv_window(5000)
            .with_header("X-Trace", "abc")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(options.recv_window, Some(5000));
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "abc".to_string())]);
        assert_eq!(options.timeout, Some(Duration::from_secs(2)));
    }
}
