//! # Binance Client
//!
//! A blocking Rust client library for the Binance Spot REST API.
//!
//! ## Features
//!
//! - One method per REST endpoint: general, market data, trading, account and user data stream
//! - HMAC-SHA256 request signing with injectable timestamp source
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_api_client::spot::rest::SpotRestClient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new()?;
//!     let time = client.get_server_time()?;
//!     println!("Server time: {}", time);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BinanceError, ErrorKind};
pub use types::common::{CandlestickInterval, OrderSide, OrderStatus, OrderType, TimeInForce};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
