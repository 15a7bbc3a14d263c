//! Cancel TWAP order models.
//!
//! `DELETE /sapi/v1/algo/futures/order` cancels a running TWAP order by
//! its exchange-assigned `algoId`.

use serde::{Deserialize, Serialize};

/// Parameters for cancelling a TWAP order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelTwapOrderRequest {
    algo_id: String,
}

impl CancelTwapOrderRequest {
    #[must_use]
    pub fn new(algo_id: &str) -> Self {
        Self {
            algo_id: algo_id.to_string(),
        }
    }

    /// Creates a request from the numeric id found in order listings.
    #[must_use]
    pub fn from_algo_id(algo_id: i64) -> Self {
        Self {
            algo_id: algo_id.to_string(),
        }
    }

    pub fn algo_id(&self) -> &str {
        &self.algo_id
    }
}

/// Response to a cancel request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelTwapOrderResponse {
    pub algo_id: i64,
    pub success: bool,
    pub code: i64,
    pub msg: String,
}
