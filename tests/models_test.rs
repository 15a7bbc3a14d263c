//! Deserialization tests for the TWAP response models.

use twap_algo::models::{
    CancelTwapOrderResponse, HistoricalOrdersResponse, NewTwapOrderResponse, OpenOrdersResponse,
    TwapOrder,
};

const HISTORICAL_ORDERS_JSON: &str = include_str!("fixtures/historical_orders.json");
const OPEN_ORDERS_JSON: &str = include_str!("fixtures/open_orders.json");
const NEW_ORDER_JSON: &str = include_str!("fixtures/new_order.json");
const CANCEL_ORDER_JSON: &str = include_str!("fixtures/cancel_order.json");

#[test]
fn test_historical_orders_response_deserializes() {
    let response: HistoricalOrdersResponse = serde_json::from_str(HISTORICAL_ORDERS_JSON)
        .expect("Failed to deserialize historical orders response");

    assert_eq!(response.total, 1);
    assert_eq!(response.orders.len(), 1);

    let order: &TwapOrder = &response.orders[0];
    assert_eq!(order.algo_id, 123);
    assert_eq!(order.symbol, "BTCUSDT");
    assert_eq!(order.side, "BUY");
    assert_eq!(order.position_side, "BOTH");
    assert_eq!(order.total_qty, "0.45");
    assert_eq!(order.executed_qty, "0.45");
    assert_eq!(order.executed_amt, "27000");
    assert_eq!(order.avg_price, "60000");
    assert_eq!(order.client_algo_id, "abc");
    assert_eq!(order.book_time, 1000);
    assert_eq!(order.end_time, 2000);
    assert_eq!(order.algo_status, "FINISHED");
    assert_eq!(order.algo_type, "TWAP");
    assert_eq!(order.urgency, "LOW");
}

#[test]
fn test_open_orders_preserve_decimal_strings() {
    let response: OpenOrdersResponse =
        serde_json::from_str(OPEN_ORDERS_JSON).expect("Failed to deserialize open orders response");

    assert_eq!(response.total, 2);
    let first = &response.orders[0];
    assert_eq!(first.algo_id, 14517);
    assert_eq!(first.total_qty, "5.000");
    assert_eq!(first.executed_amt, "0.00000000");
    assert_eq!(first.avg_price, "0.00");
    assert_eq!(first.end_time, 0);
    assert_eq!(first.algo_status, "WORKING");

    let second = &response.orders[1];
    assert_eq!(second.executed_amt, "9012.34500000");
    assert_eq!(second.avg_price, "60082.30");
}

#[test]
fn test_new_order_response_deserializes() {
    let response: NewTwapOrderResponse =
        serde_json::from_str(NEW_ORDER_JSON).expect("Failed to deserialize new order response");

    assert!(response.success);
    assert_eq!(response.code, 0);
    assert_eq!(response.msg, "OK");
    assert_eq!(response.client_algo_id, "65ace3d6d7594b2da86e5bb8b1fd5a24");
}

#[test]
fn test_cancel_order_response_deserializes() {
    let response: CancelTwapOrderResponse = serde_json::from_str(CANCEL_ORDER_JSON)
        .expect("Failed to deserialize cancel order response");

    assert_eq!(response.algo_id, 14511);
    assert!(response.success);
}

#[test]
fn test_numeric_decimal_field_is_rejected() {
    let json = HISTORICAL_ORDERS_JSON.replace("\"totalQty\": \"0.45\"", "\"totalQty\": 0.45");
    let result: Result<HistoricalOrdersResponse, _> = serde_json::from_str(&json);
    assert!(result.is_err(), "float quantity must not decode into a string field");
}

#[test]
fn test_truncated_body_is_rejected() {
    let truncated = &OPEN_ORDERS_JSON[..OPEN_ORDERS_JSON.len() / 2];
    let result: Result<OpenOrdersResponse, _> = serde_json::from_str(truncated);
    assert!(result.is_err());
}
