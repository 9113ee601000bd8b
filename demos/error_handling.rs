//! Example: Working with BinanceError and ApiError.
//!
//! Run with: cargo run --example error_handling

use binance_api_client::error::{ApiError, error_codes};
use binance_api_client::spot::rest::SpotRestClient;
use binance_api_client::{BinanceError, ErrorKind};

fn main() {
    let api_error = ApiError::new(error_codes::BAD_SYMBOL, "Invalid symbol.", 400);
    println!("API error: {}", api_error);
    println!("Is invalid symbol: {}", api_error.is_invalid_symbol());
    println!("Is rate limit: {}", api_error.is_rate_limit());

    let err = BinanceError::Api(api_error);
    match err.kind() {
        ErrorKind::Remote => println!("Rejected by the exchange: {err}"),
        ErrorKind::Transport => println!("No usable answer: {err}"),
        ErrorKind::Configuration => println!("Client misconfigured: {err}"),
    }

    // Signed calls on a client without credentials fail before any request is sent.
    match SpotRestClient::new().and_then(|client| client.get_account()) {
        Err(BinanceError::MissingCredentials) => println!("Credentials are required"),
        Err(other) => println!("Unexpected error: {other}"),
        Ok(_) => println!("Unexpected success"),
    }

    // Invalid base URLs are rejected when the client is built.
    if let Err(err) = SpotRestClient::builder().base_url("not a url").build() {
        println!("Build failed ({:?}): {err}", err.kind());
    }
}
