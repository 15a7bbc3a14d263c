//! Historical TWAP order listing.
//!
//! `GET /sapi/v1/algo/futures/historicalOrders` pages through finished
//! and cancelled TWAP orders for a symbol.

use serde::Serialize;

use super::{Side, TwapOrderList};

/// Query for historical TWAP orders.
///
/// Unset paging fields fall back to the exchange defaults (page 1, 100 per
/// page; page sizes are capped at 100 server-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOrdersRequest {
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl HistoricalOrdersRequest {
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            side: None,
            start_time: None,
            end_time: None,
            page: None,
            page_size: None,
        }
    }

    /// Restricts the listing to one side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Sets the inclusive lower bound, epoch milliseconds.
    #[must_use]
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the inclusive upper bound, epoch milliseconds.
    #[must_use]
    pub fn with_end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Response to a historical order query.
pub type HistoricalOrdersResponse = TwapOrderList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_only() {
        let request = HistoricalOrdersRequest::new("BTCUSDT");
        assert_eq!(serde_urlencoded::to_string(&request).unwrap(), "symbol=BTCUSDT");
    }

    #[test]
    fn full_query() {
        let request = HistoricalOrdersRequest::new("BTCUSDT")
            .with_side(Side::Sell)
            .with_start_time(1_700_000_000_000)
            .with_end_time(1_700_086_400_000)
            .with_page(2)
            .with_page_size(50);

        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCUSDT&side=SELL&startTime=1700000000000&endTime=1700086400000&page=2&pageSize=50"
        );
    }

    #[test]
    fn zero_values_are_present_not_absent() {
        let request = HistoricalOrdersRequest::new("BTCUSDT")
            .with_start_time(0)
            .with_page(0);

        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCUSDT&startTime=0&page=0"
        );
    }
}
