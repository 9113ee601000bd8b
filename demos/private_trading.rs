//! Example: Signed trading and account endpoints.
//!
//! Orders are validated with the test endpoint only, nothing is placed.
//! Set `BINANCE_TESTNET=1` to run against the Spot testnet.
//!
//! Run with: cargo run --example private_trading

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use binance_api_client::auth::StaticCredentials;
use binance_api_client::spot::rest::private::{
    AllOrdersRequest, CancelOrderRequest, NewOrder, OrderRequest,
};
use binance_api_client::spot::rest::{BINANCE_TESTNET_URL, SpotRestClient};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let (api_key, api_secret) = match (env::var("BINANCE_API_KEY"), env::var("BINANCE_API_SECRET"))
    {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            println!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let mut builder = SpotRestClient::builder()
        .credentials(Arc::new(StaticCredentials::new(api_key, api_secret)))
        .recv_window(5_000);
    if env::var("BINANCE_TESTNET").is_ok() {
        builder = builder.base_url(BINANCE_TESTNET_URL);
    }
    let client = builder.build()?;

    let account = client.get_account()?;
    println!("Can trade: {}", account.can_trade);
    let btc = account.asset_balance("BTC");
    println!("BTC: free {}, locked {}", btc.free, btc.locked);

    // Validate-only order (won't be submitted).
    let order = NewOrder::limit_buy(
        "LTCBTC",
        Decimal::from_str("1")?,
        Decimal::from_str("0.001")?,
    );
    client.new_order_test(&order)?;
    println!("Test order accepted");

    let open = client.get_open_orders(&OrderRequest::new("LTCBTC"))?;
    println!("Open LTCBTC orders: {}", open.len());

    let recent = client.get_all_orders(&AllOrdersRequest::new("LTCBTC").limit(5))?;
    for order in &recent {
        println!(
            "  #{} {} {} {} @ {}",
            order.order_id, order.side, order.status, order.orig_qty, order.price
        );
    }

    if let Ok(id) = env::var("BINANCE_CANCEL_ORDER_ID") {
        let request = CancelOrderRequest::by_order_id("LTCBTC", id.parse()?);
        client.cancel_order(&request)?;
        println!("Cancelled order {id}");
    } else {
        println!("Set BINANCE_CANCEL_ORDER_ID to cancel a specific order.");
    }

    let listen_key = client.start_user_data_stream()?;
    println!("Listen key: {listen_key}");
    client.keep_alive_user_data_stream(&listen_key)?;
    client.close_user_data_stream(&listen_key)?;

    Ok(())
}
