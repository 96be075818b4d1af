//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and the expiry model independent
//! of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`expiry`] - Expiry tokens and expiration date arithmetic
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod expiry;
pub mod repositories;
