//! Async REST client for the Binance SAPI.
//!
//! This module is organized by concern:
//! - [`request`] - Request descriptors and per-call options
//! - [`twap`] - TWAP algo order operations
//!
//! Every operation goes through the same pipeline: encode parameters,
//! sign, send, then decode the body strictly into the typed result.

mod request;
mod twap;

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use zeroize::Zeroizing;

use crate::auth::{API_KEY_HEADER, HmacSha256Signer, RequestSigner, timestamp_ms};
use crate::config::BinanceConfig;
use crate::{Result, TwapError};

// Re-export submodule items at the module level for convenience
pub use request::{ApiRequest, ParamPlacement, RequestOptions};
pub use twap::{
    CANCEL_ORDER_PATH, HISTORICAL_ORDERS_PATH, NEW_ORDER_TWAP_PATH, OPEN_ORDERS_PATH,
    cancel_twap_order, historical_twap_orders, new_twap_order, open_twap_orders,
};

/// Response header reporting the IP's request weight used in the current minute.
pub const USED_WEIGHT_HEADER: &str = "x-sapi-used-ip-weight-1m";

/// Signed REST client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Arc<Zeroizing<String>>,
    signer: Arc<dyn RequestSigner>,
    recv_window: Option<u64>,
    time_offset_ms: i64,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("recv_window", &self.recv_window)
            .field("time_offset_ms", &self.time_offset_ms)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Body and headers of a successful (2xx) response, untouched.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Parses the [`USED_WEIGHT_HEADER`] value, if present.
    pub fn used_weight(&self) -> Option<u32> {
        self.headers
            .get(USED_WEIGHT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }
}

/// A decoded result plus the rate-limit metadata of the response that
/// carried it. The metadata is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub used_weight: Option<u32>,
}

impl<T> ApiResponse<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Decodes a raw response body into `T`.
///
/// # Errors
///
/// Returns [`TwapError::Json`] if the body is not valid JSON of the
/// expected shape; nothing is partially decoded.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<ApiResponse<T>> {
    let data = serde_json::from_slice(&raw.body)?;
    Ok(ApiResponse {
        data,
        used_weight: raw.used_weight(),
    })
}

/// Error body returned by the exchange alongside a non-2xx status.
#[derive(Deserialize)]
struct ExchangeError {
    code: i64,
    msg: String,
}

/// The wire form of a request after authentication was applied.
#[derive(Debug)]
struct PreparedRequest {
    url: String,
    headers: HeaderMap,
    body: Option<String>,
}

impl RestClient {
    /// Creates a client for `base_url` that authenticates with `api_key`
    /// and signs with `signer`.
    ///
    /// # Errors
    ///
    /// Returns [`TwapError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: &str,
        signer: impl RequestSigner + 'static,
    ) -> Result<Self> {
        // A 3xx must surface as an error, never as a re-sent signed call.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Arc::new(Zeroizing::new(api_key.to_string())),
            signer: Arc::new(signer),
            recv_window: None,
            time_offset_ms: 0,
            timeout: None,
        })
    }

    /// Creates an HMAC-SHA256 signing client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TwapError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &BinanceConfig) -> Result<Self> {
        let signer = HmacSha256Signer::new(config.api_secret.as_str());
        let client = Self::new(&config.base_url, &config.api_key, signer)?;
        Ok(match config.recv_window {
            Some(recv_window) => client.with_recv_window(recv_window),
            None => client,
        })
    }

    /// Default `recvWindow` (milliseconds) for signed calls.
    #[must_use]
    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }

    /// Milliseconds the local clock runs ahead of the exchange clock;
    /// subtracted from every `timestamp`.
    #[must_use]
    pub fn with_time_offset(mut self, offset_ms: i64) -> Self {
        self.time_offset_ms = offset_ms;
        self
    }

    /// Default deadline for every call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Authenticates and sends `request`, returning the raw response.
    ///
    /// No retries: every failure is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`TwapError::Transport`] if the call fails on the network
    /// - [`TwapError::Api`] if the status is not 2xx (redirects included)
    /// - [`TwapError::Clock`] if no valid timestamp can be produced
    /// - [`TwapError::Timeout`] if the deadline expires first
    /// - [`TwapError::InvalidHeader`] if an extra header is not valid HTTP
    pub async fn execute(
        &self,
        request: ApiRequest,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        match options.timeout.or(self.timeout) {
            Some(limit) => tokio::time::timeout(limit, self.send(request, options))
                .await
                .unwrap_or(Err(TwapError::Timeout(limit))),
            None => self.send(request, options).await,
        }
    }

    async fn send(&self, request: ApiRequest, options: &RequestOptions) -> Result<RawResponse> {
        let prepared = self.prepare(&request, options)?;

        debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            "Sending request"
        );

        let mut builder = self
            .http
            .request(request.method().clone(), &prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        let raw = RawResponse {
            status,
            headers,
            body,
        };

        debug!(
            endpoint = request.endpoint(),
            status = status.as_u16(),
            used_weight = ?raw.used_weight(),
            "Received response"
        );

        if !status.is_success() {
            return Err(api_error(status, &raw.body));
        }

        Ok(raw)
    }

    /// Places parameters, adds authentication and builds the final URL.
    fn prepare(&self, request: &ApiRequest, options: &RequestOptions) -> Result<PreparedRequest> {
        let (mut query, body) = match request.placement() {
            ParamPlacement::Query => (request.params().to_string(), String::new()),
            ParamPlacement::Body => (String::new(), request.params().to_string()),
        };

        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            insert_header(&mut headers, name, value, false)?;
        }

        insert_header(&mut headers, API_KEY_HEADER, &self.api_key, true)?;

        if let Some(recv_window) = options.recv_window.or(self.recv_window) {
            append_param(&mut query, "recvWindow", &recv_window.to_string());
        }
        append_param(
            &mut query,
            "timestamp",
            &timestamp_ms(self.time_offset_ms)?.to_string(),
        );
        let signature = self.signer.sign(&format!("{query}{body}"));
        append_param(&mut query, "signature", &signature);

        let url = format!("{}{}?{}", self.base_url, request.endpoint(), query);

        Ok(PreparedRequest {
            url,
            headers,
            body: (!body.is_empty()).then_some(body),
        })
    }
}

/// Appends `key=value` to an already-encoded query string.
fn append_param(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(key);
    query.push('=');
    query.push_str(value);
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str, sensitive: bool) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| TwapError::InvalidHeader(format!("{name:?}: {e}")))?;
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| TwapError::InvalidHeader(format!("value for {name}: {e}")))?;
    value.set_sensitive(sensitive);
    headers.insert(name, value);
    Ok(())
}

/// Maps a non-2xx response to [`TwapError::Api`].
fn api_error(status: StatusCode, body: &[u8]) -> TwapError {
    match serde_json::from_slice::<ExchangeError>(body) {
        Ok(err) => TwapError::Api {
            status: status.as_u16(),
            code: err.code,
            msg: err.msg,
        },
        Err(_) => TwapError::Api {
            status: status.as_u16(),
            code: i64::from(status.as_u16()),
            msg: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
