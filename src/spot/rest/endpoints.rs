//! Binance Spot REST API endpoint descriptors.

use reqwest::Method;

/// Base URL for the Binance Spot REST API.
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Base URL for the Binance Spot testnet.
pub const BINANCE_TESTNET_URL: &str = "https://testnet.binance.vision";

/// Default `recvWindow` in milliseconds when a signed request leaves it unset.
pub const DEFAULT_RECV_WINDOW: u64 = 60_000;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// How an endpoint authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Security {
    /// Public endpoint, no key and no signature.
    None,
    /// Requires the `X-MBX-APIKEY` header only.
    ApiKey,
    /// Requires the API key header, `recvWindow`, `timestamp` and `signature`.
    Signed,
}

/// Every remote operation the client can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Test connectivity.
    Ping,
    /// Current server time.
    Time,
    /// Order book depth.
    Depth,
    /// Compressed/aggregate trades.
    AggTrades,
    /// Kline/candlestick bars.
    Klines,
    /// 24 hour rolling window price change statistics.
    Ticker24hr,
    /// Latest price for all symbols.
    TickerPrice,
    /// Best bid/ask for all symbols.
    BookTicker,
    /// Place a new order.
    NewOrder,
    /// Validate a new order without sending it to the matching engine.
    NewOrderTest,
    /// Query an order's status.
    QueryOrder,
    /// Cancel an active order.
    CancelOrder,
    /// Open orders for a symbol.
    OpenOrders,
    /// All orders for a symbol: active, canceled or filled.
    AllOrders,
    /// Account information.
    Account,
    /// Start a user data stream.
    StartUserDataStream,
    /// Keep a user data stream alive.
    KeepAliveUserDataStream,
    /// Close a user data stream.
    CloseUserDataStream,
}

impl Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: &'static [Endpoint] = &[
        Endpoint::Ping,
        Endpoint::Time,
        Endpoint::Depth,
        Endpoint::AggTrades,
        Endpoint::Klines,
        Endpoint::Ticker24hr,
        Endpoint::TickerPrice,
        Endpoint::BookTicker,
        Endpoint::NewOrder,
        Endpoint::NewOrderTest,
        Endpoint::QueryOrder,
        Endpoint::CancelOrder,
        Endpoint::OpenOrders,
        Endpoint::AllOrders,
        Endpoint::Account,
        Endpoint::StartUserDataStream,
        Endpoint::KeepAliveUserDataStream,
        Endpoint::CloseUserDataStream,
    ];

    /// HTTP method.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::NewOrder | Endpoint::NewOrderTest | Endpoint::StartUserDataStream => {
                Method::POST
            }
            Endpoint::KeepAliveUserDataStream => Method::PUT,
            Endpoint::CancelOrder | Endpoint::CloseUserDataStream => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Request path relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Ping => "/api/v3/ping",
            Endpoint::Time => "/api/v3/time",
            Endpoint::Depth => "/api/v3/depth",
            Endpoint::AggTrades => "/api/v3/aggTrades",
            Endpoint::Klines => "/api/v3/klines",
            Endpoint::Ticker24hr => "/api/v3/ticker/24hr",
            Endpoint::TickerPrice => "/api/v3/ticker/price",
            Endpoint::BookTicker => "/api/v3/ticker/bookTicker",
            Endpoint::NewOrder | Endpoint::QueryOrder | Endpoint::CancelOrder => "/api/v3/order",
            Endpoint::NewOrderTest => "/api/v3/order/test",
            Endpoint::OpenOrders => "/api/v3/openOrders",
            Endpoint::AllOrders => "/api/v3/allOrders",
            Endpoint::Account => "/api/v3/account",
            Endpoint::StartUserDataStream
            | Endpoint::KeepAliveUserDataStream
            | Endpoint::CloseUserDataStream => "/api/v3/userDataStream",
        }
    }

    /// Authentication class.
    pub fn security(&self) -> Security {
        match self {
            Endpoint::Ping
            | Endpoint::Time
            | Endpoint::Depth
            | Endpoint::AggTrades
            | Endpoint::Klines
            | Endpoint::Ticker24hr
            | Endpoint::TickerPrice
            | Endpoint::BookTicker => Security::None,
            Endpoint::StartUserDataStream
            | Endpoint::KeepAliveUserDataStream
            | Endpoint::CloseUserDataStream => Security::ApiKey,
            Endpoint::NewOrder
            | Endpoint::NewOrderTest
            | Endpoint::QueryOrder
            | Endpoint::CancelOrder
            | Endpoint::OpenOrders
            | Endpoint::AllOrders
            | Endpoint::Account => Security::Signed,
        }
    }

    /// Whether the endpoint needs a signature.
    pub fn is_signed(&self) -> bool {
        self.security() == Security::Signed
    }

    /// Parameter names the endpoint accepts, in transmission order.
    ///
    /// Signed endpoints list `recvWindow` and `timestamp` last; `signature`
    /// is never listed since it is derived from the others.
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Ping | Endpoint::Time | Endpoint::StartUserDataStream => &[],
            Endpoint::Depth => &["symbol", "limit"],
            Endpoint::AggTrades => &["symbol", "fromId", "limit", "startTime", "endTime"],
            Endpoint::Klines => &["symbol", "interval", "limit", "startTime", "endTime"],
            Endpoint::Ticker24hr => &["symbol"],
            Endpoint::TickerPrice | Endpoint::BookTicker => &[],
            Endpoint::NewOrder | Endpoint::NewOrderTest => &[
                "symbol",
                "side",
                "type",
                "timeInForce",
                "quantity",
                "price",
                "stopPrice",
                "icebergQty",
                "recvWindow",
                "timestamp",
            ],
            Endpoint::QueryOrder => &[
                "symbol",
                "orderId",
                "origClientOrderId",
                "recvWindow",
                "timestamp",
            ],
            Endpoint::CancelOrder => &[
                "symbol",
                "orderId",
                "origClientOrderId",
                "newClientOrderId",
                "recvWindow",
                "timestamp",
            ],
            Endpoint::OpenOrders => &["symbol", "recvWindow", "timestamp"],
            Endpoint::AllOrders => &["symbol", "orderId", "limit", "recvWindow", "timestamp"],
            Endpoint::Account => &["recvWindow", "timestamp"],
            Endpoint::KeepAliveUserDataStream | Endpoint::CloseUserDataStream => &["listenKey"],
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
