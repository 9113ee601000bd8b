//! Error types for the Binance client library.

use thiserror::Error;

/// The main error type for all Binance client operations.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed (connection refused, TLS failure, body read error)
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// Query string encoding failed
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Binance rejected the request with a structured error body
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// Non-2xx response whose body is not a Binance error object
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,
}

impl From<reqwest::Error> for BinanceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BinanceError::Timeout
        } else {
            BinanceError::Http(err)
        }
    }
}

/// Coarse classification of a [`BinanceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The client was built or used with invalid configuration.
    Configuration,
    /// The request did not produce a usable answer from the service.
    Transport,
    /// The service answered and rejected the request.
    Remote,
}

impl BinanceError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinanceError::Config(_) | BinanceError::MissingCredentials | BinanceError::Url(_) => {
                ErrorKind::Configuration
            }
            BinanceError::Api(_) => ErrorKind::Remote,
            BinanceError::Http(_)
            | BinanceError::Encode(_)
            | BinanceError::UnexpectedStatus { .. }
            | BinanceError::InvalidResponse(_)
            | BinanceError::Timeout => ErrorKind::Transport,
        }
    }

    /// The remote error, if the service rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BinanceError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Binance API error codes and messages.
///
/// These are errors returned by Binance itself in a non-2xx response body,
/// e.g. `{"code": -1121, "msg": "Invalid symbol."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric error code from Binance (e.g., -1121)
    pub code: i64,
    /// Human-readable error message
    pub message: String,
    /// HTTP status the error arrived with
    pub status: u16,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code, message and HTTP status.
    pub fn new(code: i64, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }

    /// Check if this is a request weight or order rate limit error.
    ///
    /// HTTP 429 and 418 (IP ban) are both rate limit answers.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
            || self.status == 418
            || self.code == error_codes::TOO_MANY_REQUESTS
            || self.code == error_codes::TOO_MANY_ORDERS
    }

    /// Check if the request timestamp fell outside the receive window.
    pub fn is_invalid_timestamp(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if this is an invalid symbol error.
    pub fn is_invalid_symbol(&self) -> bool {
        self.code == error_codes::BAD_SYMBOL
    }

    /// Check if the API key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        self.code == error_codes::BAD_API_KEY_FMT || self.code == error_codes::REJECTED_MBX_KEY
    }

    /// Check if the referenced order does not exist.
    pub fn is_order_not_found(&self) -> bool {
        self.code == error_codes::NO_SUCH_ORDER
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    /// General server or network errors
    pub const UNKNOWN: i64 = -1000;
    pub const DISCONNECTED: i64 = -1001;
    pub const UNAUTHORIZED: i64 = -1002;
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    pub const UNEXPECTED_RESP: i64 = -1006;
    pub const TIMEOUT: i64 = -1007;
    pub const TOO_MANY_ORDERS: i64 = -1015;
    pub const INVALID_TIMESTAMP: i64 = -1021;
    pub const INVALID_SIGNATURE: i64 = -1022;

    /// Request issues
    pub const ILLEGAL_CHARS: i64 = -1100;
    pub const TOO_MANY_PARAMETERS: i64 = -1101;
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    pub const UNKNOWN_PARAM: i64 = -1103;
    pub const BAD_PRECISION: i64 = -1111;
    pub const INVALID_ORDER_TYPE: i64 = -1116;
    pub const INVALID_SIDE: i64 = -1117;
    pub const BAD_SYMBOL: i64 = -1121;
    pub const INVALID_LISTEN_KEY: i64 = -1125;

    /// Order and key errors
    pub const NEW_ORDER_REJECTED: i64 = -2010;
    pub const CANCEL_REJECTED: i64 = -2011;
    pub const NO_SUCH_ORDER: i64 = -2013;
    pub const BAD_API_KEY_FMT: i64 = -2014;
    pub const REJECTED_MBX_KEY: i64 = -2015;
}
