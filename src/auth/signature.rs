//! HMAC-SHA256 signature generation for Binance API authentication.
//!
//! Binance `SIGNED` endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(query_string, api_secret))
//! ```
//!
//! where `query_string` is the exact, already URL-encoded parameter string that
//! is sent. The signature is then appended as the last `signature` parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a query string for Binance's signed endpoints.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `query` - The encoded parameters exactly as transmitted, without `signature`
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use binance_api_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_query(&credentials, "symbol=BTCUSDT&recvWindow=5000&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, query: &str) -> Result<String, BinanceError> {
    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BinanceError::Config(format!("Invalid HMAC key: {e}")))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Example key pair from the Binance Spot API documentation.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    #[test]
    fn test_documented_signature() {
        let credentials = Credentials::new("key", DOC_SECRET);
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        let signature = sign_query(&credentials, query).unwrap();

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_known_hmac_vector() {
        let credentials = Credentials::new("key", "secret");
        let signature = sign_query(&credentials, "message").unwrap();
        assert_eq!(
            signature,
            "8b5f48702995c1598c573db1e21866a9b825d4a794d169d7060a03605796360b"
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        let sig2 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_is_order_sensitive() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_query(&credentials, "symbol=BTCUSDT&timestamp=12345").unwrap();
        let sig2 = sign_query(&credentials, "timestamp=12345&symbol=BTCUSDT").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let a = sign_query(&Credentials::new("key", "secret_a"), "timestamp=1").unwrap();
        let b = sign_query(&Credentials::new("key", "secret_b"), "timestamp=1").unwrap();
        assert_ne!(a, b);
    }
}
