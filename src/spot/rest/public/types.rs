//! Types for public REST API endpoints.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CandlestickInterval;

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Server time in milliseconds since the UNIX epoch.
    #[serde(rename = "serverTime")]
    pub server_time: u64,
}

/// Request parameters for order book depth.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Trading symbol (e.g. "BTCUSDT").
    pub symbol: String,
    /// Depth limit (default 100, max 5000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl OrderBookRequest {
    /// Create a new order book request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the depth limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Order book data.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Last update ID of the book.
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: u64,
    /// Bid side entries, best first.
    pub bids: Vec<OrderBookEntry>,
    /// Ask side entries, best first.
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Best bid, if any.
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }

    /// Best ask, if any.
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }
}

/// Single order book entry.
/// Format: [price, qty]; trailing elements are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBookEntry {
    /// Price level.
    pub price: Decimal,
    /// Quantity at this level.
    pub qty: Decimal,
}

impl<'de> Deserialize<'de> for OrderBookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = OrderBookEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array [price, qty, ...]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let price = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let qty = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(OrderBookEntry { price, qty })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// Request parameters for aggregate trades.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Aggregate trade ID to fetch from (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    /// Number of trades (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Start of the time range in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End of the time range in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

impl AggTradesRequest {
    /// Create a new request for a symbol with every filter unset.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Fetch from this aggregate trade ID.
    pub fn from_id(mut self, from_id: impl Into<String>) -> Self {
        self.from_id = Some(from_id.into());
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict to a time range in milliseconds.
    pub fn time_range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }
}

/// Compressed/aggregate trade.
#[derive(Debug, Clone, Deserialize)]
pub struct AggTrade {
    /// Aggregate trade ID.
    #[serde(rename = "a")]
    pub aggregated_trade_id: u64,
    /// Price.
    #[serde(rename = "p")]
    pub price: Decimal,
    /// Quantity.
    #[serde(rename = "q")]
    pub quantity: Decimal,
    /// First trade ID.
    #[serde(rename = "f")]
    pub first_breakdown_trade_id: u64,
    /// Last trade ID.
    #[serde(rename = "l")]
    pub last_breakdown_trade_id: u64,
    /// Trade time in milliseconds.
    #[serde(rename = "T")]
    pub trade_time: u64,
    /// Was the buyer the maker?
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    /// Was the trade the best price match?
    #[serde(rename = "M", default)]
    pub is_best_match: bool,
}

/// Request parameters for kline/candlestick bars.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Bar interval.
    pub interval: CandlestickInterval,
    /// Number of bars (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Start of the time range in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End of the time range in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

impl CandlestickRequest {
    /// Create a new request for a symbol and interval.
    pub fn new(symbol: impl Into<String>, interval: CandlestickInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start time in milliseconds.
    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end time in milliseconds.
    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Single kline/candlestick bar.
/// Format: [open time, open, high, low, close, volume, close time,
/// quote asset volume, number of trades, taker buy base volume,
/// taker buy quote volume, ignore]
#[derive(Debug, Clone)]
pub struct Candlestick {
    /// Open time in milliseconds.
    pub open_time: u64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
    /// Close time in milliseconds.
    pub close_time: u64,
    /// Quote asset volume.
    pub quote_asset_volume: Decimal,
    /// Number of trades.
    pub number_of_trades: u64,
    /// Taker buy base asset volume.
    pub taker_buy_base_asset_volume: Decimal,
    /// Taker buy quote asset volume.
    pub taker_buy_quote_asset_volume: Decimal,
}

impl<'de> Deserialize<'de> for Candlestick {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: (
            u64,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            u64,
            Decimal,
            u64,
            Decimal,
            Decimal,
            IgnoredAny,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(Candlestick {
            open_time: arr.0,
            open: arr.1,
            high: arr.2,
            low: arr.3,
            close: arr.4,
            volume: arr.5,
            close_time: arr.6,
            quote_asset_volume: arr.7,
            number_of_trades: arr.8,
            taker_buy_base_asset_volume: arr.9,
            taker_buy_quote_asset_volume: arr.10,
        })
    }
}

/// 24 hour rolling window price change statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStatistics {
    /// Trading symbol.
    #[serde(default)]
    pub symbol: String,
    /// Absolute price change.
    pub price_change: Decimal,
    /// Relative price change in percent.
    pub price_change_percent: Decimal,
    /// Weighted average price.
    pub weighted_avg_price: Decimal,
    /// Close price of the previous window.
    #[serde(default)]
    pub prev_close_price: Option<Decimal>,
    /// Last price.
    pub last_price: Decimal,
    /// Last traded quantity.
    #[serde(default)]
    pub last_qty: Option<Decimal>,
    /// Best bid price.
    pub bid_price: Decimal,
    /// Best bid quantity.
    #[serde(default)]
    pub bid_qty: Option<Decimal>,
    /// Best ask price.
    pub ask_price: Decimal,
    /// Best ask quantity.
    #[serde(default)]
    pub ask_qty: Option<Decimal>,
    /// Open price.
    pub open_price: Decimal,
    /// High price.
    pub high_price: Decimal,
    /// Low price.
    pub low_price: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
    /// Quote asset volume.
    #[serde(default)]
    pub quote_volume: Option<Decimal>,
    /// Window open time in milliseconds.
    pub open_time: u64,
    /// Window close time in milliseconds.
    pub close_time: u64,
    /// First trade ID.
    pub first_id: i64,
    /// Last trade ID.
    pub last_id: i64,
    /// Number of trades.
    pub count: u64,
}

/// Latest price for a symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    /// Trading symbol.
    pub symbol: String,
    /// Latest price.
    pub price: Decimal,
}

/// Best price/quantity on the order book for a symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    /// Trading symbol.
    pub symbol: String,
    /// Best bid price.
    pub bid_price: Decimal,
    /// Best bid quantity.
    pub bid_qty: Decimal,
    /// Best ask price.
    pub ask_price: Decimal,
    /// Best ask quantity.
    pub ask_qty: Decimal,
}

impl BookTicker {
    /// Ask minus bid.
    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }
}
