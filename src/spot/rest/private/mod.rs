//! Signed REST API endpoints (trading and account).
//!
//! These endpoints require API credentials to be configured on the client.
//! Requests that leave `recv_window` or `timestamp` unset get the client's
//! default receive window and the current time from its timestamp provider.

mod types;

pub use types::*;

use serde::de::IgnoredAny;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::Endpoint;

impl SpotRestClient {
    /// Place a new order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::spot::rest::SpotRestClient;
    /// use binance_api_client::spot::rest::private::NewOrder;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::with_credentials("key", "secret")?;
    ///
    ///     let order = NewOrder::limit_buy("LTCBTC", "1".parse()?, "0.1".parse()?);
    ///     let response = client.new_order(&order)?;
    ///     println!("Placed order {}", response.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub fn new_order(&self, order: &NewOrder) -> Result<NewOrderResponse, BinanceError> {
        self.signed_request(Endpoint::NewOrder, order)
    }

    /// Validate a new order without placing it.
    pub fn new_order_test(&self, order: &NewOrder) -> Result<(), BinanceError> {
        let _: IgnoredAny = self.signed_request(Endpoint::NewOrderTest, order)?;
        Ok(())
    }

    /// Get the status of an order.
    pub fn get_order_status(&self, request: &OrderStatusRequest) -> Result<Order, BinanceError> {
        self.signed_request(Endpoint::QueryOrder, request)
    }

    /// Cancel an active order.
    pub fn cancel_order(&self, request: &CancelOrderRequest) -> Result<(), BinanceError> {
        let _: IgnoredAny = self.signed_request(Endpoint::CancelOrder, request)?;
        Ok(())
    }

    /// Get all open orders on a symbol.
    pub fn get_open_orders(&self, request: &OrderRequest) -> Result<Vec<Order>, BinanceError> {
        self.signed_request(Endpoint::OpenOrders, request)
    }

    /// Get all account orders on a symbol: active, canceled, or filled.
    pub fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        self.signed_request(Endpoint::AllOrders, request)
    }

    /// Get current account information.
    ///
    /// Uses the client's default receive window and the current time from
    /// its timestamp provider.
    pub fn get_account(&self) -> Result<Account, BinanceError> {
        self.signed_request(Endpoint::Account, &AccountRequest::default())
    }

    /// Get current account information with an explicit receive window and timestamp.
    pub fn get_account_with(
        &self,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Account, BinanceError> {
        let request = AccountRequest {
            recv_window: Some(recv_window),
            timestamp: Some(timestamp),
        };
        self.signed_request(Endpoint::Account, &request)
    }
}
