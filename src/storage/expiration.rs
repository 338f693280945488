//! Expiration Module
//!
//! Turns a declarative expiration intent into a concrete expiry instant.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one day, used by [`StorageExpiration::Days`].
pub const SECONDS_PER_DAY: i64 = 86_400;

// == Storage Expiration ==
/// How long a stored entry stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageExpiration {
    /// The entry never expires
    Never,
    /// The entry expires this many seconds after it is stored
    Seconds(i64),
    /// The entry expires this many days after it is stored
    Days(i64),
    /// The entry expires at a fixed instant
    Date(DateTime<Utc>),
}

impl StorageExpiration {
    // == Estimated Expiration ==
    /// Returns the expiry instant for an entry created at `reference`.
    ///
    /// `Never` yields the maximum representable instant and `Date` ignores
    /// the reference. Duration variants saturate at the representable
    /// bounds instead of overflowing.
    pub fn estimated_expiration_since(&self, reference: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            StorageExpiration::Never => DateTime::<Utc>::MAX_UTC,
            StorageExpiration::Seconds(_) | StorageExpiration::Days(_) => {
                let span = self.span();
                reference.checked_add_signed(span).unwrap_or(if span < TimeDelta::zero() {
                    DateTime::<Utc>::MIN_UTC
                } else {
                    DateTime::<Utc>::MAX_UTC
                })
            }
            StorageExpiration::Date(date) => *date,
        }
    }

    /// Same as [`Self::estimated_expiration_since`] with the current time.
    pub fn estimated_expiration_since_now(&self) -> DateTime<Utc> {
        self.estimated_expiration_since(Utc::now())
    }

    // == Time Interval ==
    /// Returns the span this expiration represents, measured from now.
    ///
    /// For `Date` the span is negative once the instant has passed.
    pub fn time_interval(&self) -> TimeDelta {
        self.time_interval_since(Utc::now())
    }

    /// Returns the span this expiration represents, measured from `now`.
    ///
    /// Only `Date` depends on `now`; duration variants report their declared
    /// span and `Never` reports `TimeDelta::MAX`.
    pub fn time_interval_since(&self, now: DateTime<Utc>) -> TimeDelta {
        match self {
            StorageExpiration::Never => TimeDelta::MAX,
            StorageExpiration::Seconds(_) | StorageExpiration::Days(_) => self.span(),
            StorageExpiration::Date(date) => date.signed_duration_since(now),
        }
    }

    fn span(&self) -> TimeDelta {
        match self {
            StorageExpiration::Seconds(secs) => seconds_delta(*secs),
            StorageExpiration::Days(days) => match days.checked_mul(SECONDS_PER_DAY) {
                Some(secs) => seconds_delta(secs),
                None => saturated(*days),
            },
            StorageExpiration::Never => TimeDelta::MAX,
            StorageExpiration::Date(_) => TimeDelta::zero(),
        }
    }
}

// == Expiration Extending ==
/// What a read access does to the expiry of the entry it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpirationExtending {
    /// Leave the expiry untouched
    None,
    /// Re-apply the entry's own expiration from the access instant
    #[default]
    CacheTime,
    /// Apply a new expiration from the access instant
    ExpirationTime(StorageExpiration),
}

// == Expiry Predicate ==
/// Returns true once `now` has reached `expiry`.
///
/// An entry expiring exactly at `now` is already expired.
pub fn is_expired(expiry: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expiry <= now
}

fn seconds_delta(secs: i64) -> TimeDelta {
    TimeDelta::try_seconds(secs).unwrap_or_else(|| saturated(secs))
}

fn saturated(sign: i64) -> TimeDelta {
    if sign < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    }
}
