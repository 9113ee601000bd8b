//! Query string construction for Binance REST requests.
//!
//! Request types serialize through `serde_urlencoded`, which keeps struct
//! field order and drops every field marked
//! `skip_serializing_if = "Option::is_none"`. Signed requests then get
//! `recvWindow`, `timestamp` and finally `signature` appended.

use std::fmt::Display;

use serde::Serialize;
use url::form_urlencoded;

use crate::error::BinanceError;

/// An ordered, URL-encoded `key=value&...` parameter string.
///
/// The string is exactly what goes on the wire, which makes it the canonical
/// input for request signing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Serialize a request type into its parameter string.
    pub fn from_params<P>(params: &P) -> Result<Self, BinanceError>
    where
        P: Serialize + ?Sized,
    {
        Ok(Self(serde_urlencoded::to_string(params)?))
    }

    /// Append one pair. Values use their `Display` form.
    pub fn push(&mut self, key: &str, value: impl Display) {
        if !self.0.is_empty() {
            self.0.push('&');
        }
        self.0.extend(form_urlencoded::byte_serialize(key.as_bytes()));
        self.0.push('=');
        self.0
            .extend(form_urlencoded::byte_serialize(value.to_string().as_bytes()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// The encoded parameter string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decoded pairs in transmission order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.0.as_bytes())
            .into_owned()
            .collect()
    }

    /// Decoded value of the first pair named `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        form_urlencoded::parse(self.0.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Whether a pair named `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl Display for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters common to every signed request.
///
/// Implementors leave `recvWindow` and `timestamp` out of their serialized
/// form; the client appends them after the endpoint parameters.
pub trait SignedRequest: Serialize {
    /// Receive window the caller set, if any.
    fn requested_recv_window(&self) -> Option<u64>;

    /// Timestamp the caller set, if any.
    fn requested_timestamp(&self) -> Option<u64>;
}

/// Serialize a signed request and append its receive window and timestamp.
///
/// `default_recv_window` and `now` fill whichever of the two the request
/// leaves unset. The result is ready to sign.
pub fn signed_query<R>(
    request: &R,
    default_recv_window: u64,
    now: impl FnOnce() -> u64,
) -> Result<QueryString, BinanceError>
where
    R: SignedRequest + ?Sized,
{
    let mut query = QueryString::from_params(request)?;
    query.push("recvWindow", request.requested_recv_window().unwrap_or(default_recv_window));
    query.push("timestamp", request.requested_timestamp().unwrap_or_else(now));
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        from_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        price: Option<Decimal>,
        #[serde(skip)]
        recv_window: Option<u64>,
        #[serde(skip)]
        timestamp: Option<u64>,
    }

    impl SignedRequest for Sample {
        fn requested_recv_window(&self) -> Option<u64> {
            self.recv_window
        }

        fn requested_timestamp(&self) -> Option<u64> {
            self.timestamp
        }
    }

    fn sample() -> Sample {
        Sample {
            symbol: "BTCUSDT".to_string(),
            from_id: None,
            price: None,
            recv_window: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let query = QueryString::from_params(&sample()).unwrap();
        assert_eq!(query.as_str(), "symbol=BTCUSDT");
        assert!(!query.contains_key("fromId"));
        assert!(!query.contains_key("price"));
        assert!(!query.as_str().contains("null"));
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let mut request = sample();
        request.from_id = Some(42);
        request.price = Some("0.00001".parse().unwrap());
        let query = QueryString::from_params(&request).unwrap();
        assert_eq!(query.as_str(), "symbol=BTCUSDT&fromId=42&price=0.00001");
    }

    #[test]
    fn test_push_encodes_values() {
        let query = QueryString::new()
            .with("listenKey", "a b+c")
            .with("limit", 10);
        assert_eq!(query.as_str(), "listenKey=a+b%2Bc&limit=10");
        assert_eq!(query.get("listenKey").as_deref(), Some("a b+c"));
    }

    #[test]
    fn test_signed_query_uses_defaults() {
        let query = signed_query(&sample(), 60_000, || 1_499_827_319_559).unwrap();
        assert_eq!(
            query.as_str(),
            "symbol=BTCUSDT&recvWindow=60000&timestamp=1499827319559"
        );
    }

    #[test]
    fn test_signed_query_prefers_explicit_values() {
        let mut request = sample();
        request.recv_window = Some(5_000);
        request.timestamp = Some(1);
        let query = signed_query(&request, 60_000, || panic!("clock must not be read")).unwrap();
        assert_eq!(query.get("recvWindow").as_deref(), Some("5000"));
        assert_eq!(query.get("timestamp").as_deref(), Some("1"));
    }

    #[test]
    fn test_empty_signed_request_still_has_window_and_timestamp() {
        #[derive(Serialize)]
        struct Empty {}

        impl SignedRequest for Empty {
            fn requested_recv_window(&self) -> Option<u64> {
                None
            }

            fn requested_timestamp(&self) -> Option<u64> {
                None
            }
        }

        let query = signed_query(&Empty {}, 5_000, || 7).unwrap();
        assert_eq!(query.as_str(), "recvWindow=5000&timestamp=7");
    }
}
