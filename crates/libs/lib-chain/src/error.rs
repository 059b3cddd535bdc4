//! # Chain Errors
//!
//! Every failure a wallet or node call can produce, classified the way the terminal
//! needs to react to it: a user cancellation is not the same as a revert.

use alloy_primitives::B256;
use thiserror::Error;

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Geth's code for `execution reverted` during `eth_call` / gas estimation.
pub const EXECUTION_REVERTED_CODE: i64 = 3;

/// Convenience type alias for `Result<T, ChainError>`.
pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The HTTP request to the wallet bridge failed (connection, timeout, 5xx).
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON-RPC error object returned by the wallet or node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The user dismissed the wallet prompt.
    #[error("Request rejected by user")]
    UserRejected,

    /// The call or transaction reverted on chain.
    #[error("Execution reverted: {0}")]
    Reverted(String),

    /// Response could not be decoded (bad JSON or bad ABI data).
    #[error("Decoding error: {0}")]
    Decode(String),

    /// No receipt appeared before the configured timeout.
    #[error("Timed out waiting for receipt of {0}")]
    ReceiptTimeout(B256),
}

impl ChainError {
    /// Classify a JSON-RPC error object.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == USER_REJECTED_CODE {
            ChainError::UserRejected
        } else if code == EXECUTION_REVERTED_CODE || message.contains("revert") {
            ChainError::Reverted(message)
        } else {
            ChainError::Rpc { code, message }
        }
    }

    /// True when the failure came from the user declining, not from the chain.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ChainError::UserRejected)
    }
}

impl From<reqwest::Error> for ChainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChainError::Decode(err.to_string())
        } else {
            ChainError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::Decode(format!("JSON error: {}", err))
    }
}

impl From<alloy_sol_types::Error> for ChainError {
    fn from(err: alloy_sol_types::Error) -> Self {
        ChainError::Decode(format!("ABI error: {}", err))
    }
}
