//! Utility functions
//!
//! Provides logging setup for the inspector.

pub mod logging;
