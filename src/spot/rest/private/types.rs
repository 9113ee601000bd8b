//! Types for signed REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::spot::rest::marshal::SignedRequest;
use crate::types::{OrderSide, OrderStatus, OrderType, TimeInForce};

macro_rules! signed_request {
    ($($name:ident),+ $(,)?) => {
        $(
            impl SignedRequest for $name {
                fn requested_recv_window(&self) -> Option<u64> {
                    self.recv_window
                }

                fn requested_timestamp(&self) -> Option<u64> {
                    self.timestamp
                }
            }

            impl $name {
                /// Set the receive window in milliseconds.
                pub fn recv_window(mut self, recv_window: u64) -> Self {
                    self.recv_window = Some(recv_window);
                    self
                }

                /// Set an explicit request timestamp in milliseconds.
                pub fn timestamp(mut self, timestamp: u64) -> Self {
                    self.timestamp = Some(timestamp);
                    self
                }
            }
        )+
    };
}

signed_request!(
    NewOrder,
    OrderStatusRequest,
    CancelOrderRequest,
    OrderRequest,
    AllOrdersRequest,
    AccountRequest,
);

/// A new order.
///
/// `recv_window` and `timestamp` are filled by the client when unset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Trading symbol.
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Order quantity.
    pub quantity: Decimal,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Stop price for stop and take-profit orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Visible quantity for iceberg orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<Decimal>,
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

impl NewOrder {
    /// Create a new order with only the mandatory fields.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            time_in_force: None,
            quantity,
            price: None,
            stop_price: None,
            iceberg_qty: None,
            recv_window: None,
            timestamp: None,
        }
    }

    /// Good-till-canceled limit buy.
    pub fn limit_buy(symbol: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self::new(symbol, OrderSide::Buy, OrderType::Limit, quantity)
            .time_in_force(TimeInForce::Gtc)
            .price(price)
    }

    /// Good-till-canceled limit sell.
    pub fn limit_sell(symbol: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self::new(symbol, OrderSide::Sell, OrderType::Limit, quantity)
            .time_in_force(TimeInForce::Gtc)
            .price(price)
    }

    /// Market buy.
    pub fn market_buy(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(symbol, OrderSide::Buy, OrderType::Market, quantity)
    }

    /// Market sell.
    pub fn market_sell(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(symbol, OrderSide::Sell, OrderType::Market, quantity)
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the stop price.
    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Set the iceberg quantity.
    pub fn iceberg_qty(mut self, iceberg_qty: Decimal) -> Self {
        self.iceberg_qty = Some(iceberg_qty);
        self
    }
}

/// Response to a placed order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    /// Trading symbol.
    pub symbol: String,
    /// Exchange-assigned order ID.
    pub order_id: u64,
    /// Client order ID.
    pub client_order_id: String,
    /// Transaction time in milliseconds.
    pub transact_time: u64,
    /// Limit price, in RESULT and FULL responses.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Original quantity, in RESULT and FULL responses.
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    /// Executed quantity, in RESULT and FULL responses.
    #[serde(default)]
    pub executed_qty: Option<Decimal>,
    /// Order status, in RESULT and FULL responses.
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Time in force, in RESULT and FULL responses.
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Order type, in RESULT and FULL responses.
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    /// Side, in RESULT and FULL responses.
    #[serde(default)]
    pub side: Option<OrderSide>,
}

/// Request to query a single order.
///
/// Set exactly one of `order_id` or `orig_client_order_id`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Exchange-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Client-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

impl OrderStatusRequest {
    /// Look up an order by its exchange-assigned ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            ..Default::default()
        }
    }

    /// Look up an order by its client-assigned ID.
    pub fn by_client_order_id(
        symbol: impl Into<String>,
        orig_client_order_id: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            orig_client_order_id: Some(orig_client_order_id.into()),
            ..Default::default()
        }
    }
}

/// Request to cancel an active order.
///
/// Set exactly one of `order_id` or `orig_client_order_id`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Exchange-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Client-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// New client ID for the cancel itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

impl CancelOrderRequest {
    /// Cancel an order by its exchange-assigned ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            ..Default::default()
        }
    }

    /// Cancel an order by its client-assigned ID.
    pub fn by_client_order_id(
        symbol: impl Into<String>,
        orig_client_order_id: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            orig_client_order_id: Some(orig_client_order_id.into()),
            ..Default::default()
        }
    }

    /// Set the client ID assigned to the cancel.
    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }
}

/// Request for open orders of a symbol.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

impl OrderRequest {
    /// Create a new request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}

/// Request for all orders of a symbol.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Return orders with an ID at or above this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Number of orders (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

impl AllOrdersRequest {
    /// Create a new request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Start from this order ID.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request for account information. Carries only the signing window.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountRequest {
    /// Receive window in milliseconds.
    #[serde(skip)]
    pub recv_window: Option<u64>,
    /// Request timestamp in milliseconds.
    #[serde(skip)]
    pub timestamp: Option<u64>,
}

/// Order details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Trading symbol.
    pub symbol: String,
    /// Exchange-assigned order ID.
    pub order_id: u64,
    /// Client order ID.
    pub client_order_id: String,
    /// Limit price.
    pub price: Decimal,
    /// Original quantity.
    pub orig_qty: Decimal,
    /// Executed quantity.
    pub executed_qty: Decimal,
    /// Cumulative quote quantity.
    #[serde(default, rename = "cummulativeQuoteQty")]
    pub cumulative_quote_qty: Option<Decimal>,
    /// Status of the order.
    pub status: OrderStatus,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Buy or sell.
    pub side: OrderSide,
    /// Stop price.
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Iceberg quantity.
    #[serde(default)]
    pub iceberg_qty: Option<Decimal>,
    /// Creation time in milliseconds.
    pub time: u64,
    /// Last update time in milliseconds.
    #[serde(default)]
    pub update_time: Option<u64>,
    /// Whether the order is on the book.
    #[serde(default)]
    pub is_working: Option<bool>,
}

/// Account information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Maker commission in basis points.
    pub maker_commission: i32,
    /// Taker commission in basis points.
    pub taker_commission: i32,
    /// Buyer commission in basis points.
    pub buyer_commission: i32,
    /// Seller commission in basis points.
    pub seller_commission: i32,
    /// Trading permission.
    pub can_trade: bool,
    /// Withdrawal permission.
    pub can_withdraw: bool,
    /// Deposit permission.
    pub can_deposit: bool,
    /// Last account update in milliseconds.
    #[serde(default)]
    pub update_time: Option<u64>,
    /// Per-asset balances.
    pub balances: Vec<AssetBalance>,
}

impl Account {
    /// Balance of a single asset.
    ///
    /// An asset absent from the account reports zero free and locked.
    pub fn asset_balance(&self, asset: &str) -> AssetBalance {
        self.balances
            .iter()
            .find(|balance| balance.asset == asset)
            .cloned()
            .unwrap_or_else(|| AssetBalance {
                asset: asset.to_string(),
                free: Decimal::ZERO,
                locked: Decimal::ZERO,
            })
    }
}

/// Balance of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetBalance {
    /// Asset symbol.
    pub asset: String,
    /// Available amount.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

impl AssetBalance {
    /// Free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}
