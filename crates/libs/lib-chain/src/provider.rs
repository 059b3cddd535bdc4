//! # Wallet Provider
//!
//! The capability surface an injected wallet exposes (EIP-1193 `request`), narrowed to
//! the five calls the terminal makes. [`HttpWalletProvider`] speaks it over JSON-RPC;
//! tests substitute scripted implementations.

use crate::error::{ChainError, Result};
use crate::rpc::JsonRpcClient;
use crate::types::{CallRequest, TransactionReceipt, TransactionRequest};
use alloy_primitives::{Address, Bytes, B256, U256, U64};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access; the first entry is the selected account.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Network the wallet is currently on.
    async fn chain_id(&self) -> Result<u64>;

    /// Read-only contract call against the latest block.
    async fn call(&self, request: CallRequest) -> Result<Bytes>;

    /// Hand a transaction to the wallet for signing and broadcast.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256>;

    /// `None` until the transaction is mined.
    async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>>;
}

/// Wallet reached through a JSON-RPC bridge (Frame, a local signer, ...).
pub struct HttpWalletProvider {
    rpc: JsonRpcClient,
}

impl HttpWalletProvider {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            rpc: JsonRpcClient::new(url)?,
        })
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        self.rpc.request("eth_requestAccounts", json!([])).await
    }

    async fn chain_id(&self) -> Result<u64> {
        let id: U64 = self.rpc.request("eth_chainId", json!([])).await?;
        Ok(id.to::<u64>())
    }

    async fn call(&self, request: CallRequest) -> Result<Bytes> {
        self.rpc.request("eth_call", json!([request, "latest"])).await
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256> {
        tracing::debug!(to = %request.to, "Requesting transaction signature from {}", self.rpc.url());
        self.rpc.request("eth_sendTransaction", json!([request])).await
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        self.rpc.request("eth_getTransactionReceipt", json!([hash])).await
    }
}

/// ABI-encode `call`, run it with `eth_call` and decode the return values.
pub async fn call_contract<C: SolCall>(wallet: &dyn WalletProvider, to: Address, call: C) -> Result<C::Return> {
    let data = Bytes::from(call.abi_encode());
    let raw = wallet.call(CallRequest { to, data }).await?;
    Ok(C::abi_decode_returns(&raw, true)?)
}

/// ABI-encode `call` and submit it as a transaction from `from`, returning the hash.
pub async fn send_contract_call<C: SolCall>(
    wallet: &dyn WalletProvider,
    from: Address,
    to: Address,
    call: C,
    value: Option<U256>,
) -> Result<B256> {
    let request = TransactionRequest {
        from,
        to,
        data: Bytes::from(call.abi_encode()),
        value,
    };
    wallet.send_transaction(request).await
}

/// Poll for the receipt of `hash` until it is mined or `timeout` elapses.
///
/// A mined receipt with failed status is reported as [`ChainError::Reverted`].
pub async fn wait_for_receipt(
    wallet: &dyn WalletProvider,
    hash: B256,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<TransactionReceipt> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(receipt) = wallet.transaction_receipt(hash).await? {
            if receipt.succeeded() {
                tracing::info!(tx = %hash, block = ?receipt.block_number, "Transaction confirmed");
                return Ok(receipt);
            }
            tracing::warn!(tx = %hash, "Transaction mined but reverted");
            return Err(ChainError::Reverted(format!("transaction {} reverted", hash)));
        }

        if Instant::now() >= deadline {
            return Err(ChainError::ReceiptTimeout(hash));
        }

        tokio::time::sleep(poll_interval).await;
    }
}
