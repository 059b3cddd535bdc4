//! Debug configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "terminal=info,lib_chain=info,warn";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Base name of the rotating log file
    pub log_file: String,
    /// Log level filter (e.g., "terminal=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_dir: lookup("TERMINAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_file: lookup("TERMINAL_LOG_FILE").unwrap_or_else(|| "terminal-debug.log".to_string()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_to_stderr: lookup("TERMINAL_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file, "terminal-debug.log");
        assert!(!config.is_debug_enabled());
        assert!(!config.log_to_stderr);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("TERMINAL_LOG_DIR", "/tmp/nft"),
            ("RUST_LOG", "terminal=debug"),
            ("TERMINAL_LOG_STDERR", "1"),
        ]
        .into_iter()
        .collect();

        let config = DebugConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/nft"));
        assert!(config.is_debug_enabled());
        assert!(config.log_to_stderr);
    }
}
