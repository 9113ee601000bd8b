//! Example: Fetching public market data from Binance.
//!
//! This example uses the blocking REST client to fetch publicly available
//! market data without authentication.
//!
//! Run with: RUST_LOG=binance_api_client=debug cargo run --example public_data

use binance_api_client::spot::rest::SpotRestClient;
use binance_api_client::spot::rest::public::CandlestickRequest;
use binance_api_client::types::CandlestickInterval;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = SpotRestClient::new()?;

    println!("=== Connectivity ===");
    client.ping()?;
    println!("Server time: {}", client.get_server_time()?);

    println!("\n=== Order Book (BNBBTC, depth=5) ===");
    let book = client.get_order_book("BNBBTC", Some(5))?;
    println!("Last update ID: {}", book.last_update_id);
    for bid in &book.bids {
        println!("  Bid: {} @ {}", bid.qty, bid.price);
    }
    for ask in &book.asks {
        println!("  Ask: {} @ {}", ask.qty, ask.price);
    }

    println!("\n=== Aggregate Trades (BNBBTC) ===");
    let trades = client.get_agg_trades("BNBBTC")?;
    for trade in trades.iter().rev().take(3) {
        println!(
            "  #{}: {} @ {} (buyer maker: {})",
            trade.aggregated_trade_id, trade.quantity, trade.price, trade.is_buyer_maker
        );
    }

    println!("\n=== Candlesticks (BNBBTC, 5m, last 3) ===");
    let request = CandlestickRequest::new("BNBBTC", CandlestickInterval::FiveMinutes).limit(3);
    for bar in client.get_candlestick_bars_with(&request)? {
        println!(
            "  Open time: {}, O: {}, H: {}, L: {}, C: {}, Vol: {}",
            bar.open_time, bar.open, bar.high, bar.low, bar.close, bar.volume
        );
    }

    println!("\n=== 24h Statistics (BNBBTC) ===");
    let stats = client.get_24hr_price_statistics("BNBBTC")?;
    println!(
        "Last: {}, change: {}%",
        stats.last_price, stats.price_change_percent
    );

    println!("\n=== Prices and Book Tickers ===");
    let prices = client.get_all_prices()?;
    println!("{} symbols priced", prices.len());
    if let Some(ticker) = client.get_book_tickers()?.first() {
        println!(
            "{}: bid {} / ask {} (spread {})",
            ticker.symbol,
            ticker.bid_price,
            ticker.ask_price,
            ticker.spread()
        );
    }

    Ok(())
}
