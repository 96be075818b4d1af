//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Its shape is checked by the service.
    pub original_url: String,

    /// Expiry token: `1h`, `1d`, `1w`, `1m`, `1y` or `lifetime`.
    /// Unknown or missing tokens mean the link never expires.
    #[serde(default)]
    pub expiry: Option<String>,

    /// Optional alternate code the link also resolves under.
    #[serde(default)]
    #[validate(length(min = 1, max = 10, message = "Custom URL must be 1-10 characters"))]
    pub custom_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The generated six-character code.
    pub short_url: String,
}
