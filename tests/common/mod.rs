//! Shared test utilities and constants.

use std::sync::{Arc, Mutex};

use twap_algo::auth::RequestSigner;
use twap_algo::rest::RestClient;

/// API key every test client sends.
pub const API_KEY: &str = "test-api-key";

/// Signature returned by [`FakeSigner`].
pub const SIGNATURE: &str = "fakesig";

/// Query string of a signed call without operation parameters.
pub const SIGNED_ONLY_QUERY: &str = r"^timestamp=\d+&signature=fakesig$";

/// Deterministic signer that records every payload it was asked to sign.
#[derive(Clone, Default)]
pub struct FakeSigner {
    payloads: Arc<Mutex<Vec<String>>>,
}

impl FakeSigner {
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }
}

impl RequestSigner for FakeSigner {
    fn sign(&self, payload: &str) -> String {
        self.payloads.lock().unwrap().push(payload.to_string());
        SIGNATURE.to_string()
    }
}

/// Builds a client pointed at `base_url` plus a handle on its signer.
pub fn test_client(base_url: &str) -> (RestClient, FakeSigner) {
    let signer = FakeSigner::default();
    let client =
        RestClient::new(base_url, API_KEY, signer.clone()).expect("failed to build client");
    (client, signer)
}
