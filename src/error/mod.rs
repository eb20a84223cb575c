//! Error handling
//!
//! Defines the error types raised while building resource trees and running
//! the inspector. Resource handles themselves never fail.

pub mod handlers;
pub mod types;

pub use types::*;
pub use handlers::{exit_code, handle_error};
