//! Binance Spot trading API client.
//!
//! - [`rest`] - blocking REST API client for HTTP-based requests

pub mod rest;

pub use rest::SpotRestClient;
