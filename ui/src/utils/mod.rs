//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: CSS class and style helpers for live field feedback

pub mod console_macros;
pub mod validation;

pub use validation::*;
