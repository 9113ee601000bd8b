//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::Endpoint;
use crate::types::CandlestickInterval;

/// Empty JSON object answer, e.g. from `ping`.
#[derive(serde::Deserialize)]
struct Empty {}

impl SpotRestClient {
    /// Test connectivity to the REST API.
    pub fn ping(&self) -> Result<(), BinanceError> {
        let _: Empty = self.public_get(Endpoint::Ping)?;
        Ok(())
    }

    /// Get the server time in milliseconds since the UNIX epoch.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::spot::rest::SpotRestClient;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new()?;
    ///     let server_time = client.get_server_time()?;
    ///     println!("Server time: {server_time}");
    ///     Ok(())
    /// }
    /// ```
    pub fn get_server_time(&self) -> Result<u64, BinanceError> {
        let time: ServerTime = self.public_get(Endpoint::Time)?;
        Ok(time.server_time)
    }

    /// Get the order book for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Trading symbol, e.g. "BTCUSDT".
    /// * `limit` - Depth limit; the service default applies when `None`.
    pub fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u16>,
    ) -> Result<OrderBook, BinanceError> {
        let request = OrderBookRequest {
            symbol: symbol.to_string(),
            limit,
        };
        self.public_get_with_params(Endpoint::Depth, &request)
    }

    /// Get the most recent aggregate trades for a symbol.
    ///
    /// Equivalent to [`get_agg_trades_with`](Self::get_agg_trades_with) with
    /// every filter unset.
    pub fn get_agg_trades(&self, symbol: &str) -> Result<Vec<AggTrade>, BinanceError> {
        self.get_agg_trades_with(&AggTradesRequest::new(symbol))
    }

    /// Get aggregate trades with optional ID, limit and time filters.
    pub fn get_agg_trades_with(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        self.public_get_with_params(Endpoint::AggTrades, request)
    }

    /// Get the most recent kline/candlestick bars for a symbol.
    pub fn get_candlestick_bars(
        &self,
        symbol: &str,
        interval: CandlestickInterval,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        self.get_candlestick_bars_with(&CandlestickRequest::new(symbol, interval))
    }

    /// Get kline/candlestick bars with optional limit and time filters.
    pub fn get_candlestick_bars_with(
        &self,
        request: &CandlestickRequest,
    ) -> Result<Vec<Candlestick>, BinanceError> {
        self.public_get_with_params(Endpoint::Klines, request)
    }

    /// Get 24 hour price change statistics for a symbol.
    pub fn get_24hr_price_statistics(
        &self,
        symbol: &str,
    ) -> Result<TickerStatistics, BinanceError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
        }
        self.public_get_with_params(Endpoint::Ticker24hr, &Params { symbol })
    }

    /// Get the latest price for every symbol.
    pub fn get_all_prices(&self) -> Result<Vec<TickerPrice>, BinanceError> {
        self.public_get(Endpoint::TickerPrice)
    }

    /// Get the best bid/ask for every symbol.
    pub fn get_book_tickers(&self) -> Result<Vec<BookTicker>, BinanceError> {
        self.public_get(Endpoint::BookTicker)
    }
}
