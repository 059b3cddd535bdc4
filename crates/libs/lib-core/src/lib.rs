//! # Core Library
//!
//! Configuration and the web-facing error type shared by the server and the terminal.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{ChainConfig, MetadataConfig};
pub use error::{AppError, Result};
