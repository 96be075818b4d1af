//! Short URL entity mapping a code to a long URL.

use chrono::{DateTime, Utc};

/// A shortened URL with its optional expiry.
///
/// Records are immutable after creation. An expired record is kept in the
/// store and refused at resolution time (passive expiry).
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub custom_url: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Returns true if the expiration instant lies strictly before `now`.
    ///
    /// Records without an expiration date never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|e| e < now)
    }

    /// Returns true if the record has expired as of the current instant.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if `code` is either lookup key of this record.
    pub fn matches_code(&self, code: &str) -> bool {
        self.short_url == code || self.custom_url.as_deref() == Some(code)
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_url: String,
    pub custom_url: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}
