//! Application configuration loaded from environment variables.
//!
//! Credentials **must** be provided via environment variables:
//! - `BINANCE_API_KEY`: API key sent in the `X-MBX-APIKEY` header
//! - `BINANCE_API_SECRET`: secret used to sign requests
//!
//! Optional overrides:
//! - `BINANCE_BASE_URL`: REST endpoint (defaults to `https://api.binance.com`)
//! - `BINANCE_RECV_WINDOW`: default `recvWindow` in milliseconds

use zeroize::Zeroizing;

/// Default REST endpoint serving the `/sapi` routes.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub binance: BinanceConfig,
}

/// Binance-specific configuration values.
pub struct BinanceConfig {
    pub base_url: String,
    pub api_key: Zeroizing<String>,
    pub api_secret: Zeroizing<String>,
    pub recv_window: Option<u64>,
}

impl std::fmt::Debug for BinanceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TwapError::Config`](crate::TwapError::Config) if either
/// credential variable is missing or `BINANCE_RECV_WINDOW` is not an
/// integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("BINANCE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api_key = non_empty_var("BINANCE_API_KEY");
    let api_secret = non_empty_var("BINANCE_API_SECRET");

    let (api_key, api_secret) = match (api_key, api_secret) {
        (Some(key), Some(secret)) => (key, secret),
        (Some(_), None) => {
            return Err(crate::TwapError::Config(
                "BINANCE_API_KEY is set but BINANCE_API_SECRET is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::TwapError::Config(
                "BINANCE_API_SECRET is set but BINANCE_API_KEY is missing".to_string(),
            ));
        }
        (None, None) => {
            return Err(crate::TwapError::Config(
                "BINANCE_API_KEY and BINANCE_API_SECRET are required".to_string(),
            ));
        }
    };

    let recv_window = non_empty_var("BINANCE_RECV_WINDOW")
        .map(|raw| {
            raw.parse::<u64>().map_err(|e| {
                crate::TwapError::Config(format!("invalid BINANCE_RECV_WINDOW {raw:?}: {e}"))
            })
        })
        .transpose()?;

    Ok(AppConfig {
        binance: BinanceConfig {
            base_url,
            api_key: Zeroizing::new(api_key),
            api_secret: Zeroizing::new(api_secret),
            recv_window,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
