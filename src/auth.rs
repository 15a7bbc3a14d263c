//! Request signing for the Binance SAPI.
//!
//! Signed endpoints (every TWAP endpoint is one) require a `timestamp`
//! parameter and a `signature` computed over the exact query string and
//! form body that go on the wire. The signing step is expressed as the
//! [`RequestSigner`] trait so the HTTP pipeline never touches the secret
//! directly and tests can substitute a deterministic signer.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::{Result, TwapError};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key on authenticated requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Computes the signature of a canonical request payload.
///
/// The payload is the encoded query string immediately followed by the
/// encoded form body (no separator). The returned string is appended to
/// the query as `signature=<value>` and must therefore be URL-safe.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, payload: &str) -> String;
}

/// HMAC-SHA256 signer keyed with the account's API secret, hex output.
pub struct HmacSha256Signer {
    secret: Zeroizing<String>,
}

impl HmacSha256Signer {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }
}

impl std::fmt::Debug for HmacSha256Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha256Signer")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl RequestSigner for HmacSha256Signer {
    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Returns the current wall-clock time in milliseconds minus `offset_ms`.
///
/// `offset_ms` is the local clock's lead over the exchange clock; a
/// positive value moves the timestamp back.
///
/// # Errors
///
/// Returns [`TwapError::Clock`] if the system clock is before the UNIX
/// epoch or too far in the future to fit in an `i64`.
pub fn timestamp_ms(offset_ms: i64) -> Result<i64> {
    Ok(epoch_millis(SystemTime::now())? - offset_ms)
}

fn epoch_millis(now: SystemTime) -> Result<i64> {
    let elapsed = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TwapError::Clock("system clock before UNIX epoch".into()))?;
    i64::try_from(elapsed.as_millis())
        .map_err(|_| TwapError::Clock("timestamp overflows i64 milliseconds".into()))
}
