//! Binance Spot REST API client.
//!
//! Provides blocking access to the public market data, signed trading and
//! account, and user data stream endpoints.
//!
//! # Trait-based API
//!
//! The [`BinanceApi`] trait abstracts all REST API operations, enabling
//! mock implementations for testing and wrapping implementations.
//!
//! ```rust,no_run
//! use binance_api_client::spot::rest::{BinanceApi, SpotRestClient};
//!
//! fn use_client<C: BinanceApi>(client: &C) -> Result<(), binance_api_client::BinanceError> {
//!     let time = client.get_server_time()?;
//!     println!("Server time: {time}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod marshal;
pub mod private;
pub mod public;
mod traits;
mod user_stream;

pub use client::{SpotRestClient, SpotRestClientBuilder};
pub use endpoints::*;
pub use traits::BinanceApi;
pub use user_stream::ListenKey;
