//! Secure credential storage via the OS keychain.
//!
//! Reads the Binance API key and secret from the system keychain. At startup,
//! [`populate_env_from_keychain`] copies any stored credentials into
//! environment variables so [`fetch_config`](crate::config::fetch_config)
//! picks them up transparently.

use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Keychain service name used for all stored credentials.
const SERVICE: &str = "twap-algo";

/// Known API credential keys managed by this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKey {
    BinanceApiKey,
    BinanceApiSecret,
}

impl CredentialKey {
    /// Returns the keychain entry identifier.
    pub fn keyring_id(self) -> &'static str {
        match self {
            Self::BinanceApiKey => "binance_api_key",
            Self::BinanceApiSecret => "binance_api_secret",
        }
    }

    /// Returns the environment variable name for this credential.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::BinanceApiKey => "BINANCE_API_KEY",
            Self::BinanceApiSecret => "BINANCE_API_SECRET",
        }
    }

    /// All credential keys.
    pub const ALL: [CredentialKey; 2] = [Self::BinanceApiKey, Self::BinanceApiSecret];
}

/// Loads a credential from the keychain, returning `None` if not set.
pub fn load(key: CredentialKey) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id()).ok()?;
    match entry.get_password() {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key = key.keyring_id(), error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Populates environment variables from the keychain for any
/// credentials not already set in the environment.
///
/// Call this at startup before [`crate::config::fetch_config`] and before
/// spawning any task, since it mutates the process environment.
pub fn populate_env_from_keychain() {
    for key in CredentialKey::ALL {
        if std::env::var(key.env_var()).is_err()
            && let Some(value) = load(key)
        {
            debug!(key = key.env_var(), "loaded credential from keychain");
            // SAFETY: no other thread touches the environment yet; the runtime's
            // workers are idle and nothing has been spawned.
            unsafe {
                std::env::set_var(key.env_var(), value.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_match_config_loader() {
        assert_eq!(CredentialKey::BinanceApiKey.env_var(), "BINANCE_API_KEY");
        assert_eq!(
            CredentialKey::BinanceApiSecret.env_var(),
            "BINANCE_API_SECRET"
        );
    }

    #[test]
    fn keyring_ids_are_distinct() {
        let ids: Vec<_> = CredentialKey::ALL.iter().map(|k| k.keyring_id()).collect();
        assert_eq!(ids, ["binance_api_key", "binance_api_secret"]);
    }
}
