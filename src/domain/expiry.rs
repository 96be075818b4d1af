//! Expiry tokens and expiration date arithmetic.
//!
//! Duration tokens use calendar arithmetic: adding a month or a year keeps the
//! day of month and clamps it to the last day of a shorter month, so
//! Jan 31 + `1m` is Feb 28 (or 29) and Feb 29 + `1y` is Feb 28.

use chrono::{DateTime, Months, TimeDelta, Utc};

/// Symbolic lifetime of a short URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiry {
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
    #[default]
    Lifetime,
}

impl Expiry {
    /// Maps a token to an expiry. Unknown or absent tokens mean [`Expiry::Lifetime`].
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("1h") => Self::OneHour,
            Some("1d") => Self::OneDay,
            Some("1w") => Self::OneWeek,
            Some("1m") => Self::OneMonth,
            Some("1y") => Self::OneYear,
            _ => Self::Lifetime,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::OneYear => "1y",
            Self::Lifetime => "lifetime",
        }
    }

    /// Absolute expiration instant relative to `now`, or `None` for no expiry.
    pub fn expiration_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::OneHour => now.checked_add_signed(TimeDelta::hours(1)),
            Self::OneDay => now.checked_add_signed(TimeDelta::days(1)),
            Self::OneWeek => now.checked_add_signed(TimeDelta::weeks(1)),
            Self::OneMonth => now.checked_add_months(Months::new(1)),
            Self::OneYear => now.checked_add_months(Months::new(12)),
            Self::Lifetime => None,
        }
    }
}
