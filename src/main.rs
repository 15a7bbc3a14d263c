use tracing::info;
use twap_algo::TwapError;
use twap_algo::config::fetch_config;
use twap_algo::credentials::populate_env_from_keychain;
use twap_algo::models::OpenOrdersRequest;
use twap_algo::rest::{RequestOptions, RestClient, open_twap_orders};

#[tokio::main]
async fn main() -> Result<(), TwapError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    populate_env_from_keychain();
    let app_config = fetch_config()?;

    let client = RestClient::from_config(&app_config.binance)?;
    let open = open_twap_orders(&client, OpenOrdersRequest::new(), &RequestOptions::new()).await?;

    for order in &open.data.orders {
        info!(
            algo_id = order.algo_id,
            symbol = %order.symbol,
            side = %order.side,
            total_qty = %order.total_qty,
            executed_qty = %order.executed_qty,
            status = %order.algo_status,
            "Open TWAP order"
        );
    }
    info!(total = open.data.total, used_weight = ?open.used_weight, "Done");

    Ok(())
}
