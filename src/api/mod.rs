//! REST API layer for HTTP request/response handling.
//!
//! Translates requests into service calls and shapes the JSON the frontend
//! expects.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON body extractor with enveloped rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
