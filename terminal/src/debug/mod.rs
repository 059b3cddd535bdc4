//! # Debugging and Tracing Infrastructure
//!
//! File-based structured logging for the desktop client.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `terminal=debug,lib_chain=debug`)
//! - `TERMINAL_LOG_DIR`: Log directory (default: `logs`)
//! - `TERMINAL_LOG_FILE`: Base name of the daily log file (default: `terminal-debug.log`)
//! - `TERMINAL_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;

/// Initialize the debugging system from the environment.
///
/// Call once at startup, before the window opens.
pub fn init() -> DebugConfig {
    let config = DebugConfig::from_env();
    logger::init(&config);
    config
}
