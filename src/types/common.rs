//! Common domain types for the Binance API.
//!
//! Every enum here travels as a fixed wire string. The mapping is an explicit
//! per-variant table, so renaming a Rust variant never changes what is sent.

use serde::{Deserialize, Serialize};

/// Declares the wire-string table for an enum and derives `as_str`, `ALL`,
/// `Display`, `FromStr` and the serde conversions from it.
macro_rules! wire_strings {
    ($name:ident, $label:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string Binance uses for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(format!(concat!("Invalid ", $label, ": {}"), s)),
                }
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> &'static str {
                value.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

wire_strings!(OrderSide, "order side" {
    Buy => "BUY",
    Sell => "SELL",
});

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderType {
    /// Limit order - execute at specified price or better
    Limit,
    /// Market order - execute immediately at best available price
    Market,
    /// Stop-loss order - trigger market order when price reaches stop price
    StopLoss,
    /// Stop-loss limit - trigger limit order when price reaches stop price
    StopLossLimit,
    /// Take-profit order - trigger market order when price reaches profit target
    TakeProfit,
    /// Take-profit limit - trigger limit order when price reaches profit target
    TakeProfitLimit,
    /// Limit order rejected if it would immediately match as a taker
    LimitMaker,
}

wire_strings!(OrderType, "order type" {
    Limit => "LIMIT",
    Market => "MARKET",
    StopLoss => "STOP_LOSS",
    StopLossLimit => "STOP_LOSS_LIMIT",
    TakeProfit => "TAKE_PROFIT",
    TakeProfitLimit => "TAKE_PROFIT_LIMIT",
    LimitMaker => "LIMIT_MAKER",
});

/// Time in force for orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum TimeInForce {
    /// Good till canceled (default)
    #[default]
    Gtc,
    /// Immediate or cancel - fill what's possible immediately, cancel rest
    Ioc,
    /// Fill or kill - fill completely or not at all
    Fok,
}

wire_strings!(TimeInForce, "time in force" {
    Gtc => "GTC",
    Ioc => "IOC",
    Fok => "FOK",
});

/// Status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderStatus {
    /// Accepted by the engine
    New,
    /// Part of the order has been filled
    PartiallyFilled,
    /// Order has been completely filled
    Filled,
    /// Order has been canceled by the user
    Canceled,
    /// Currently unused by the exchange
    PendingCancel,
    /// Order was not accepted by the engine
    Rejected,
    /// Order was canceled according to the order type's rules
    Expired,
    /// Order expired by self-trade prevention
    ExpiredInMatch,
}

wire_strings!(OrderStatus, "order status" {
    New => "NEW",
    PartiallyFilled => "PARTIALLY_FILLED",
    Filled => "FILLED",
    Canceled => "CANCELED",
    PendingCancel => "PENDING_CANCEL",
    Rejected => "REJECTED",
    Expired => "EXPIRED",
    ExpiredInMatch => "EXPIRED_IN_MATCH",
});

impl OrderStatus {
    /// Whether the order can still trade.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::PartiallyFilled)
    }
}

/// Kline/candlestick chart interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum CandlestickInterval {
    /// 1 minute
    OneMinute,
    /// 3 minutes
    ThreeMinutes,
    /// 5 minutes
    FiveMinutes,
    /// 15 minutes
    FifteenMinutes,
    /// 30 minutes
    HalfHourly,
    /// 1 hour
    Hourly,
    /// 2 hours
    TwoHourly,
    /// 4 hours
    FourHourly,
    /// 6 hours
    SixHourly,
    /// 8 hours
    EightHourly,
    /// 12 hours
    TwelveHourly,
    /// 1 day
    Daily,
    /// 3 days
    ThreeDaily,
    /// 1 week
    Weekly,
    /// 1 month
    Monthly,
}

wire_strings!(CandlestickInterval, "candlestick interval" {
    OneMinute => "1m",
    ThreeMinutes => "3m",
    FiveMinutes => "5m",
    FifteenMinutes => "15m",
    HalfHourly => "30m",
    Hourly => "1h",
    TwoHourly => "2h",
    FourHourly => "4h",
    SixHourly => "6h",
    EightHourly => "8h",
    TwelveHourly => "12h",
    Daily => "1d",
    ThreeDaily => "3d",
    Weekly => "1w",
    Monthly => "1M",
});
