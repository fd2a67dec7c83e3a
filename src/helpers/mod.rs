//! Helper Utilities
//!
//! Common utilities used across the application.

mod fs;
mod number;

pub use fs::*;
pub use number::*;
