//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names follow the wire format expected by the
//! frontend, which mixes `snake_case` and `camelCase`.

pub mod clipboard;
pub mod health;
pub mod link_list;
pub mod shorten;
