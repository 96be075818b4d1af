//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`unique_code`] - Collision-free code resolution with insert retry
//! - [`url_validator`] - Syntactic URL sanity check

pub mod code_generator;
pub mod unique_code;
pub mod url_validator;
