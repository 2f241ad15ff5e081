//! # Timestamp Value Object
//!
//! DateTime wrapper with wallet-specific helpers.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::Timestamp;
//!
//! let now = Timestamp::now();
//! let unlock = now.add_days(30);
//! assert!(unlock.is_after(&now));
//! assert_eq!(now.days_until(&unlock), 30);
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>` with helpers for stake durations and
/// transient UI flags.
///
/// # Invariants
///
/// - Always in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the Unix timestamp in seconds.
    #[inline]
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns a new timestamp `secs` seconds later.
    #[must_use]
    pub fn add_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Returns a new timestamp `days` days later.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns true if this timestamp is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns whole seconds elapsed from `earlier` to `self`.
    ///
    /// Negative if `earlier` is in the future relative to `self`.
    #[must_use]
    pub fn secs_since(&self, earlier: &Self) -> i64 {
        (self.0 - earlier.0).num_seconds()
    }

    /// Returns whole days from `self` until `later`, clamped at zero.
    #[must_use]
    pub fn days_until(&self, later: &Self) -> i64 {
        (later.0 - self.0).num_days().max(0)
    }

    /// Formats as an ISO-8601 date (`YYYY-MM-DD`), used on receipts.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
