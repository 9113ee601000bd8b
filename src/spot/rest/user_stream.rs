//! User data stream endpoints.
//!
//! These need the API key header but no signature. The listen key they
//! manage identifies a server-side event stream session.

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::Endpoint;
use crate::spot::rest::marshal::QueryString;

/// Listen key returned when a stream is started.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenKey {
    /// Opaque stream token.
    #[serde(rename = "listenKey")]
    pub listen_key: String,
}

impl SpotRestClient {
    /// Start a new user data stream and return its listen key.
    ///
    /// The stream closes after 60 minutes unless kept alive.
    pub fn start_user_data_stream(&self) -> Result<String, BinanceError> {
        let key: ListenKey =
            self.api_key_request(Endpoint::StartUserDataStream, &QueryString::new())?;
        Ok(key.listen_key)
    }

    /// Extend a user data stream's validity by 60 minutes.
    pub fn keep_alive_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError> {
        let query = QueryString::new().with("listenKey", listen_key);
        let _: IgnoredAny = self.api_key_request(Endpoint::KeepAliveUserDataStream, &query)?;
        Ok(())
    }

    /// Close a user data stream.
    pub fn close_user_data_stream(&self, listen_key: &str) -> Result<(), BinanceError> {
        let query = QueryString::new().with("listenKey", listen_key);
        let _: IgnoredAny = self.api_key_request(Endpoint::CloseUserDataStream, &query)?;
        Ok(())
    }
}
