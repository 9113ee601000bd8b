//! Trait definition for the Binance REST API client.
//!
//! `BinanceApi` abstracts every facade operation so callers can depend on
//! the trait and substitute a mock or a wrapping implementation in tests.
//! All methods are blocking and the trait is object safe.
//!
//! # Example
//!
//! ```rust,no_run
//! use binance_api_client::spot::rest::{BinanceApi, SpotRestClient};
//!
//! fn print_time(api: &dyn BinanceApi) -> Result<(), binance_api_client::BinanceError> {
//!     let time = api.get_server_time()?;
//!     println!("Server time: {time}");
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new()?;
//!     print_time(&client)?;
//!     Ok(())
//! }
//! ```

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::private::{
    Account, AllOrdersRequest, CancelOrderRequest, NewOrder, NewOrderResponse, Order,
    OrderRequest, OrderStatusRequest,
};
use crate::spot::rest::public::{
    AggTrade, AggTradesRequest, BookTicker, Candlestick, CandlestickRequest, OrderBook,
    TickerPrice, TickerStatistics,
};
use crate::types::CandlestickInterval;

/// Blocking Binance REST API operations.
pub trait BinanceApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Test connectivity.
    fn ping(&self) -> Result<(), BinanceError>;

    /// Get the server time in milliseconds.
    fn get_server_time(&self) -> Result<u64, BinanceError>;

    /// Get the order book for a symbol.
    fn get_order_book(&self, symbol: &str, limit: Option<u16>) -> Result<OrderBook, BinanceError>;

    /// Get the most recent aggregate trades.
    fn get_agg_trades(&self, symbol: &str) -> Result<Vec<AggTrade>, BinanceError>;

    /// Get aggregate trades with filters.
    fn get_agg_trades_with(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError>;

    /// Get the most recent candlestick bars.
    fn get_candlestick_bars(
        &self,
        symbol: &str,
        interval: CandlestickInterval,
    ) -> Result<Vec<Candlestick>, BinanceError>;

    /// Get candlestick bars with filters.
    fn get_candlestick_bars_with(
        &self,
        request: &CandlestickRequest,
    ) -> Result<Vec<Candlestick>, BinanceError>;

    /// Get 24 hour statistics for a symbol.
    fn get_24hr_price_statistics(&self, symbol: &str) -> Result<TickerStatistics, BinanceError>;

    /// Get the latest price for every symbol.
    fn get_all_prices(&self) -> Result<Vec<TickerPrice>, BinanceError>;

    /// Get the best bid/ask for every symbol.
    fn get_book_tickers(&self) -> Result<Vec<BookTicker>, BinanceError>;

    // ========== Signed Endpoints ==========

    /// Place a new order.
    fn new_order(&self, order: &NewOrder) -> Result<NewOrderResponse, BinanceError>;

    /// Validate a new order without placing it.
    fn new_order_test(&self, order: &NewOrder) -> Result<(), BinanceError>;

    /// Get the status of an order.
    fn get_order_status(&self, request: &OrderStatusRequest) -> Result<Order, BinanceError>;

    /// Cancel an active order.
    fn cancel_order(&self, request: &CancelOrderRequest) -> Result<(), BinanceError>;

    /// Get open orders on a symbol.
    fn get_open_orders(&self, request: &OrderRequest) -> Result<Vec<Order>, BinanceError>;

    /// Get all orders on a symbol.
    fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError>;

    /// Get account information.
    fn get_account(&self) -> Result<Account, BinanceError>;

    /// Get account information with explicit receive window and timestamp.
    fn get_account_with(&self, recv_window: u64, timestamp: u64)
    -> Result<Account, BinanceError>;

    // ========== User Data Stream ==========

    /// Start a user data stream.
    fn start_user_data_stream(&self) -> Result<String, BinanceError>;

    /// Keep a user data stream alive.
    fn keep_alive_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError>;

    /// Close a user data stream.
    fn close_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError>;
}

impl BinanceApi for SpotRestClient {
    fn ping(&self) -> Result<(), BinanceError> {
        SpotRestClient::ping(self)
    }

    fn get_server_time(&self) -> Result<u64, BinanceError> {
        SpotRestClient::get_server_time(self)
    }

    fn get_order_book(&self, symbol: &str, limit: Option<u16>) -> Result<OrderBook, BinanceError> {
        SpotRestClient::get_order_book(self, symbol, limit)
    }

    fn get_agg_trades(&self, symbol: &str) -> Result<Vec<AggTrade>, BinanceError> {
        SpotRestClient::get_agg_trades(self, symbol)
    }

    fn get_agg_trades_with(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        SpotRestClient::get_agg_trades_with(self, request)
    }

    fn get_candlestick_bars(
        &self,
        symbol: &str,
        interval: CandlestickInterval,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        SpotRestClient::get_candlestick_bars(self, symbol, interval)
    }

    fn get_candlestick_bars_with(
        &self,
        request: &CandlestickRequest,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        SpotRestClient::get_candlestick_bars_with(self, request)
    }

    fn get_24hr_price_statistics(&self, symbol: &str) -> Result<TickerStatistics, BinanceError> {
        SpotRestClient::get_24hr_price_statistics(self, symbol)
    }

    fn get_all_prices(&self) -> Result<Vec<TickerPrice>, BinanceError> {
        SpotRestClient::get_all_prices(self)
    }

    fn get_book_tickers(&self) -> Result<Vec<BookTicker>, BinanceError> {
        SpotRestClient::get_book_tickers(self)
    }

    fn new_order(&self, order: &NewOrder) -> Result<NewOrderResponse, BinanceError> {
        SpotRestClient::new_order(self, order)
    }

    fn new_order_test(&self, order: &NewOrder) -> Result<(), BinanceError> {
        SpotRestClient::new_order_test(self, order)
    }

    fn get_order_status(&self, request: &OrderStatusRequest) -> Result<Order, BinanceError> {
        SpotRestClient::get_order_status(self, request)
    }

    fn cancel_order(&self, request: &CancelOrderRequest) -> Result<(), BinanceError> {
        SpotRestClient::cancel_order(self, request)
    }

    fn get_open_orders(&self, request: &OrderRequest) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_open_orders(self, request)
    }

    fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_all_orders(self, request)
    }

    fn get_account(&self) -> Result<Account, BinanceError> {
        SpotRestClient::get_account(self)
    }

    fn get_account_with(
        &self,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Account, BinanceError> {
        SpotRestClient::get_account_with(self, recv_window, timestamp)
    }

    fn start_user_data_stream(&self) -> Result<String, BinanceError> {
        SpotRestClient::start_user_data_stream(self)
    }

    fn keep_alive_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError> {
        SpotRestClient::keep_alive_user_data_stream(self, listen_key)
    }

    fn close_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError> {
        SpotRestClient::close_user_data_stream(self, listen_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime(u64);

    // Only connectivity and time are answered; everything else fails.
    impl BinanceApi for FixedTime {
        fn ping(&self) -> Result<(), BinanceError> {
            Ok(())
        }
        fn get_server_time(&self) -> Result<u64, BinanceError> {
            Ok(self.0)
        }
        fn get_order_book(&self, _: &str, _: Option<u16>) -> Result<OrderBook, BinanceError> {
            Err(unsupported())
        }
        fn get_agg_trades(&self, _: &str) -> Result<Vec<AggTrade>, BinanceError> {
            Err(unsupported())
        }
        fn get_agg_trades_with(&self, _: &AggTradesRequest) -> Result<Vec<AggTrade>, BinanceError> {
            Err(unsupported())
        }
        fn get_candlestick_bars(
            &self,
            _: &str,
            _: CandlestickInterval,
        ) -> Result<Vec<Candlestick>, BinanceError> {
            Err(unsupported())
        }
        fn get_candlestick_bars_with(
            &self,
            _: &CandlestickRequest,
        ) -> Result<Vec<Candlestick>, BinanceError> {
            Err(unsupported())
        }
        fn get_24hr_price_statistics(&self, _: &str) -> Result<TickerStatistics, BinanceError> {
            Err(unsupported())
        }
        fn get_all_prices(&self) -> Result<Vec<TickerPrice>, BinanceError> {
            Ok(Vec::new())
        }
        fn get_book_tickers(&self) -> Result<Vec<BookTicker>, BinanceError> {
            Ok(Vec::new())
        }
        fn new_order(&self, _: &NewOrder) -> Result<NewOrderResponse, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn new_order_test(&self, _: &NewOrder) -> Result<(), BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn get_order_status(&self, _: &OrderStatusRequest) -> Result<Order, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn cancel_order(&self, _: &CancelOrderRequest) -> Result<(), BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn get_open_orders(&self, _: &OrderRequest) -> Result<Vec<Order>, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn get_all_orders(&self, _: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn get_account(&self) -> Result<Account, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn get_account_with(&self, _: u64, _: u64) -> Result<Account, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn start_user_data_stream(&self) -> Result<String, BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn keep_alive_user_data_stream(&self, _: &str) -> Result<(), BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
        fn close_user_data_stream(&self, _: &str) -> Result<(), BinanceError> {
            Err(BinanceError::MissingCredentials)
        }
    }

    fn unsupported() -> BinanceError {
        BinanceError::InvalidResponse("not available".to_string())
    }

    fn clock_skew(api: &dyn BinanceApi, local_ms: u64) -> Result<i64, BinanceError> {
        let server = api.get_server_time()?;
        Ok(server as i64 - local_ms as i64)
    }

    #[test]
    fn test_trait_object_usage() {
        let api: Box<dyn BinanceApi> = Box::new(FixedTime(1_499_827_319_559));
        assert_eq!(clock_skew(api.as_ref(), 1_499_827_319_000).unwrap(), 559);
        assert!(api.ping().is_ok());
        assert!(api.get_all_prices().unwrap().is_empty());
    }

    #[test]
    fn test_mock_signed_calls_surface_errors() {
        let api = FixedTime(0);
        let err = api.get_account().unwrap_err();
        assert!(matches!(err, BinanceError::MissingCredentials));
    }

    #[test]
    fn test_spot_client_is_binance_api() {
        fn assert_impl<T: BinanceApi>() {}
        assert_impl::<SpotRestClient>();
    }
}
