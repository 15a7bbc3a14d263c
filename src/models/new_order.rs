//! New TWAP order models.
//!
//! `POST /sapi/v1/algo/futures/newOrderTwap` places a TWAP order that the
//! exchange then works over `duration` seconds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PositionSide, Side};

/// Parameters for placing a TWAP order.
///
/// Nothing is checked locally: a `duration` outside the exchange's
/// 300..=86400 second range or a quantity below the symbol's minimum is
/// reported by the server as an [`Api`](crate::TwapError::Api) error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTwapOrderRequest {
    symbol: String,
    side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    position_side: Option<PositionSide>,
    quantity: Decimal,
    duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_algo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_price: Option<Decimal>,
}

impl NewTwapOrderRequest {
    /// Creates a request with the required fields; `duration_secs` is the
    /// execution window in seconds.
    #[must_use]
    pub fn new(symbol: &str, side: Side, quantity: Decimal, duration_secs: u64) -> Self {
        Self {
            symbol: symbol.to_string(),
            side,
            position_side: None,
            quantity,
            duration: duration_secs,
            client_algo_id: None,
            reduce_only: None,
            limit_price: None,
        }
    }

    /// Sets the position side (required by the exchange in hedge mode).
    #[must_use]
    pub fn with_position_side(mut self, position_side: PositionSide) -> Self {
        self.position_side = Some(position_side);
        self
    }

    /// Sets the caller's reference token, echoed back in listings.
    #[must_use]
    pub fn with_client_algo_id(mut self, client_algo_id: &str) -> Self {
        self.client_algo_id = Some(client_algo_id.to_string());
        self
    }

    /// Sets the reduce-only flag.
    #[must_use]
    pub fn with_reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = Some(reduce_only);
        self
    }

    /// Caps the price of each child order.
    #[must_use]
    pub fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position_side(&self) -> Option<PositionSide> {
        self.position_side
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration
    }
}

/// Response to a new TWAP order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTwapOrderResponse {
    pub client_algo_id: String,
    pub success: bool,
    pub code: i64,
    pub msg: String,
}
