//! Request and response models for the Binance futures TWAP algo endpoints.
//!
//! Request types are plain configuration values: a constructor takes the
//! required fields and `with_*` setters fill optional ones. They serialize
//! (camelCase, unset options skipped) into the form/query parameters that
//! go on the wire. Response types decode the exchange's JSON strictly.

pub mod cancel_order;
pub mod historical_orders;
pub mod new_order;
pub mod open_orders;

pub use cancel_order::{CancelTwapOrderRequest, CancelTwapOrderResponse};
pub use historical_orders::{HistoricalOrdersRequest, HistoricalOrdersResponse};
pub use new_order::{NewTwapOrderRequest, NewTwapOrderResponse};
pub use open_orders::{OpenOrdersRequest, OpenOrdersResponse};

use serde::{Deserialize, Serialize};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the wire token expected by the exchange.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

/// Futures position side. `Both` applies to one-way mode, `Long`/`Short`
/// to hedge mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Both,
    Long,
    Short,
}

impl PositionSide {
    /// Returns the wire token expected by the exchange.
    pub fn as_str(self) -> &'static str {
        match self {
            PositionSide::Both => "BOTH",
            PositionSide::Long => "LONG",
            PositionSide::Short => "SHORT",
        }
    }
}

/// A TWAP order as reported by the open and historical order listings.
///
/// Quantities and prices stay strings exactly as the exchange formats them;
/// status-like fields are passed through without normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwapOrder {
    pub algo_id: i64,
    pub symbol: String,
    pub side: String,
    pub position_side: String,
    pub total_qty: String,
    pub executed_qty: String,
    pub executed_amt: String,
    pub avg_price: String,
    pub client_algo_id: String,
    /// Creation time, epoch milliseconds.
    pub book_time: i64,
    /// Completion time, epoch milliseconds (`0` while still running).
    pub end_time: i64,
    pub algo_status: String,
    pub algo_type: String,
    pub urgency: String,
}

/// A page of TWAP orders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TwapOrderList {
    pub total: u64,
    pub orders: Vec<TwapOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_tokens_match_serde() {
        for side in [Side::Buy, Side::Sell] {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side.as_str()));
        }
    }

    #[test]
    fn position_side_tokens_match_serde() {
        for side in [PositionSide::Both, PositionSide::Long, PositionSide::Short] {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side.as_str()));
        }
    }

    #[test]
    fn order_list_requires_every_order_field() {
        let json = r#"{"total":1,"orders":[{"algoId":1,"symbol":"BTCUSDT"}]}"#;
        let result: Result<TwapOrderList, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn empty_order_list() {
        let list: TwapOrderList = serde_json::from_str(r#"{"total":0,"orders":[]}"#).unwrap();
        assert_eq!(list.total, 0);
        assert!(list.orders.is_empty());
    }
}
