//! Timestamp sources for signed Binance requests.
//!
//! Every signed request carries a `timestamp` (milliseconds since the UNIX
//! epoch) that Binance compares against its own clock and the request's
//! `recvWindow`.

use time::OffsetDateTime;

/// Trait for providing the `timestamp` parameter of signed requests.
///
/// The client only consults the provider when a request leaves its
/// timestamp unset.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn timestamp_ms(&self) -> u64;
}

/// Wall-clock timestamps, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemClock {
    fn timestamp_ms(&self) -> u64 {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        u64::try_from(nanos / 1_000_000).unwrap_or_default()
    }
}

/// A timestamp provider that always returns the same value.
///
/// Useful for deterministic request construction in tests or for callers
/// that synchronize against the server time themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp_ms(&self) -> u64 {
        self.0
    }
}
