//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! - **NetworkMismatch**: the wallet is on another chain; the action stops and the user is alerted
//! - **NotConnected**: an accessor was requested before the wallet connected
//! - **Wallet**: the wallet answered, but not usefully (no accounts)
//! - **Chain**: any [`ChainError`] from the node or wallet (rejections, reverts, transport)
//! - **Config**: startup configuration problems
//!
//! The `Display` text of `NetworkMismatch` is the alert shown to the user:
//!
//! ```rust
//! use terminal::core::error::AppError;
//!
//! let err = AppError::NetworkMismatch { expected: 4, actual: 1, network: "Rinkeby".to_string() };
//! assert_eq!(err.to_string(), "Change the network to Rinkeby");
//! ```

use lib_chain::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The wallet's active chain is not the one the contracts live on.
    #[error("Change the network to {network}")]
    NetworkMismatch { expected: u64, actual: u64, network: String },

    #[error("Wallet not connected")]
    NotConnected,

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True when the user declined the wallet prompt.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, AppError::Chain(err) if err.is_user_rejection())
    }
}

impl From<lib_core::AppError> for AppError {
    fn from(err: lib_core::AppError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_detected_through_chain_error() {
        assert!(AppError::from(ChainError::UserRejected).is_user_rejection());
        assert!(!AppError::from(ChainError::Reverted("Presale is not running".into())).is_user_rejection());
        assert!(!AppError::NotConnected.is_user_rejection());
    }

    #[test]
    fn test_chain_error_display_passes_through() {
        let err = AppError::from(ChainError::Reverted("Max supply reached".into()));
        assert_eq!(err.to_string(), "Execution reverted: Max supply reached");
    }
}
