//! TWAP algo order operations.
//!
//! Each function is a single signed round trip: it encodes the request
//! value, sends it through [`RestClient::execute`] and decodes the body.

use reqwest::Method;
use tracing::info;

use super::{ApiRequest, ApiResponse, RequestOptions, RestClient, decode};
use crate::Result;
use crate::models::{
    CancelTwapOrderRequest, CancelTwapOrderResponse, HistoricalOrdersRequest,
    HistoricalOrdersResponse, NewTwapOrderRequest, NewTwapOrderResponse, OpenOrdersRequest,
    OpenOrdersResponse, PositionSide,
};

pub const NEW_ORDER_TWAP_PATH: &str = "/sapi/v1/algo/futures/newOrderTwap";
pub const HISTORICAL_ORDERS_PATH: &str = "/sapi/v1/algo/futures/historicalOrders";
pub const CANCEL_ORDER_PATH: &str = "/sapi/v1/algo/futures/order";
pub const OPEN_ORDERS_PATH: &str = "/sapi/v1/algo/futures/openOrders";

/// Places a TWAP order.
///
/// # Errors
///
/// Returns a [`TwapError`](crate::TwapError) if the call fails, the
/// exchange rejects it, or the response cannot be decoded.
pub async fn new_twap_order(
    client: &RestClient,
    request: NewTwapOrderRequest,
    options: &RequestOptions,
) -> Result<ApiResponse<NewTwapOrderResponse>> {
    let api_request = ApiRequest::signed(Method::POST, NEW_ORDER_TWAP_PATH).with_params(&request)?;
    let raw = client.execute(api_request, options).await?;
    let response: ApiResponse<NewTwapOrderResponse> = decode(&raw)?;

    info!(
        method = "newOrderTwap",
        symbol = request.symbol(),
        side = request.side().as_str(),
        position_side = request.position_side().map(PositionSide::as_str),
        quantity = %request.quantity(),
        duration_secs = request.duration_secs(),
        client_algo_id = %response.data.client_algo_id,
        success = response.data.success,
        "Placed TWAP order"
    );

    Ok(response)
}

/// Lists historical TWAP orders for a symbol, one page at a time.
///
/// # Errors
///
/// Returns a [`TwapError`](crate::TwapError) if the call fails, the
/// exchange rejects it, or the response cannot be decoded.
pub async fn historical_twap_orders(
    client: &RestClient,
    request: HistoricalOrdersRequest,
    options: &RequestOptions,
) -> Result<ApiResponse<HistoricalOrdersResponse>> {
    let api_request =
        ApiRequest::signed(Method::GET, HISTORICAL_ORDERS_PATH).with_params(&request)?;
    let raw = client.execute(api_request, options).await?;
    let response: ApiResponse<HistoricalOrdersResponse> = decode(&raw)?;

    info!(
        method = "historicalOrders",
        symbol = request.symbol(),
        total = response.data.total,
        returned = response.data.orders.len(),
        used_weight = ?response.used_weight,
        "Fetched historical TWAP orders"
    );

    Ok(response)
}

/// Cancels a running TWAP order.
///
/// # Errors
///
/// Returns a [`TwapError`](crate::TwapError) if the call fails, the
/// exchange rejects it, or the response cannot be decoded.
pub async fn cancel_twap_order(
    client: &RestClient,
    request: CancelTwapOrderRequest,
    options: &RequestOptions,
) -> Result<ApiResponse<CancelTwapOrderResponse>> {
    let api_request = ApiRequest::signed(Method::DELETE, CANCEL_ORDER_PATH).with_params(&request)?;
    let raw = client.execute(api_request, options).await?;
    let response: ApiResponse<CancelTwapOrderResponse> = decode(&raw)?;

    info!(
        method = "cancelOrder",
        algo_id = request.algo_id(),
        success = response.data.success,
        "Cancelled TWAP order"
    );

    Ok(response)
}

/// Lists the account's open TWAP orders.
///
/// # Errors
///
/// Returns a [`TwapError`](crate::TwapError) if the call fails, the
/// exchange rejects it, or the response cannot be decoded.
pub async fn open_twap_orders(
    client: &RestClient,
    request: OpenOrdersRequest,
    options: &RequestOptions,
) -> Result<ApiResponse<OpenOrdersResponse>> {
    let api_request = ApiRequest::signed(Method::GET, OPEN_ORDERS_PATH).with_params(&request)?;
    let raw = client.execute(api_request, options).await?;
    let response: ApiResponse<OpenOrdersResponse> = decode(&raw)?;

    info!(
        method = "openOrders",
        total = response.data.total,
        "Fetched open TWAP orders"
    );

    Ok(response)
}
