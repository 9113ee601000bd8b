//! Common types used across the Binance client library.

pub mod common;

pub use common::*;
