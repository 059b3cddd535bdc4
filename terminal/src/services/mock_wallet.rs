//! In-process wallet for tests: scripted `eth_call` answers keyed by selector.

use alloy_primitives::{address, Address, Bytes, B256, U64};
use async_trait::async_trait;
use lib_chain::{CallRequest, ChainError, TransactionReceipt, TransactionRequest, WalletProvider};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

pub(crate) const ACCOUNT: Address = address!("1111111111111111111111111111111111111111");

pub(crate) struct MockWallet {
    pub chain_id: AtomicU64,
    pub accounts: Mutex<Vec<Address>>,
    responses: Mutex<HashMap<[u8; 4], Vec<u8>>>,
    pub reject_sends: AtomicBool,
    pub revert_receipts: AtomicBool,
    pub sent: Mutex<Vec<TransactionRequest>>,
    pub account_requests: AtomicUsize,
    pub chain_id_requests: AtomicUsize,
}

impl MockWallet {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id: AtomicU64::new(chain_id),
            accounts: Mutex::new(vec![ACCOUNT]),
            responses: Mutex::new(HashMap::new()),
            reject_sends: AtomicBool::new(false),
            revert_receipts: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
            account_requests: AtomicUsize::new(0),
            chain_id_requests: AtomicUsize::new(0),
        }
    }

    /// Answer calls to `selector` with `encoded` return data.
    pub fn respond(&self, selector: [u8; 4], encoded: Vec<u8>) {
        self.responses.lock().insert(selector, encoded);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> lib_chain::Result<Vec<Address>> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.lock().clone())
    }

    async fn chain_id(&self) -> lib_chain::Result<u64> {
        self.chain_id_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain_id.load(Ordering::SeqCst))
    }

    async fn call(&self, request: CallRequest) -> lib_chain::Result<Bytes> {
        let selector: [u8; 4] = request
            .data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| ChainError::Decode("call data shorter than a selector".into()))?;

        self.responses
            .lock()
            .get(&selector)
            .cloned()
            .map(Bytes::from)
            .ok_or_else(|| ChainError::Reverted("no scripted response".into()))
    }

    async fn send_transaction(&self, request: TransactionRequest) -> lib_chain::Result<B256> {
        if self.reject_sends.load(Ordering::SeqCst) {
            return Err(ChainError::UserRejected);
        }
        let mut sent = self.sent.lock();
        sent.push(request);
        Ok(B256::with_last_byte(sent.len() as u8))
    }

    async fn transaction_receipt(&self, hash: B256) -> lib_chain::Result<Option<TransactionReceipt>> {
        let status = if self.revert_receipts.load(Ordering::SeqCst) { 0u64 } else { 1 };
        Ok(Some(TransactionReceipt {
            transaction_hash: hash,
            block_number: Some(U64::from(1)),
            status: Some(U64::from(status)),
        }))
    }
}
