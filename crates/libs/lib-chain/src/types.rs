//! # Wire Types
//!
//! JSON-RPC request and response objects. Quantities and byte strings use the
//! `0x`-hex encoding provided by `alloy-primitives`' serde support.

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Read-only call object for `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

/// Transaction object for `eth_sendTransaction`. The wallet fills in gas, nonce
/// and fees, then asks the user to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

/// Subset of the receipt the terminal cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `0x1` success, `0x0` reverted; absent on pre-Byzantium receipts
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status.map_or(true, |status| status != U64::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_transaction_request_wire_format() {
        let tx = TransactionRequest {
            from: address!("0000000000000000000000000000000000000001"),
            to: address!("0000000000000000000000000000000000000002"),
            data: Bytes::from(vec![0x1f, 0x2e]),
            value: Some(U256::from(10_000_000_000_000_000u64)),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["data"], "0x1f2e");
        assert_eq!(json["value"], "0x2386f26fc10000");
        assert!(json["from"].as_str().unwrap().starts_with("0x"));
    }

    #[test]
    fn test_transaction_request_omits_missing_value() {
        let tx = TransactionRequest {
            from: Address::ZERO,
            to: Address::ZERO,
            data: Bytes::new(),
            value: None,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_receipt_status() {
        let ok: TransactionReceipt = serde_json::from_str(
            r#"{"transactionHash":"0x1111111111111111111111111111111111111111111111111111111111111111","blockNumber":"0x10","status":"0x1"}"#,
        )
        .unwrap();
        assert!(ok.succeeded());
        assert_eq!(ok.block_number, Some(U64::from(16)));

        let reverted: TransactionReceipt = serde_json::from_str(
            r#"{"transactionHash":"0x1111111111111111111111111111111111111111111111111111111111111111","status":"0x0"}"#,
        )
        .unwrap();
        assert!(!reverted.succeeded());
    }
}
