//! Open TWAP order listing.
//!
//! `GET /sapi/v1/algo/futures/openOrders` returns every TWAP order of the
//! account that is still working. The endpoint takes no parameters beyond
//! the signature.

use serde::Serialize;

use super::TwapOrderList;

/// Query for open TWAP orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpenOrdersRequest {}

impl OpenOrdersRequest {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Response to an open order query.
pub type OpenOrdersResponse = TwapOrderList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_to_empty_parameter_set() {
        assert_eq!(
            serde_urlencoded::to_string(OpenOrdersRequest::new()).unwrap(),
            ""
        );
    }
}
