//! Stratus Common Library
//!
//! Shared types and error handling for the Stratus emulator and its
//! resource providers.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Arn, Tag};

/// Stratus version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
