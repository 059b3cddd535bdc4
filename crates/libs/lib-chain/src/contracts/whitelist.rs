use crate::error::Result;
use crate::provider::{call_contract, send_contract_call, WalletProvider};
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IWhitelist {
        function addAddressToWhitelist() external;
        function maxWhitelistedAddresses() external view returns (uint8);
        function numAddressesWhitelisted() external view returns (uint256);
        function whitelistedAddresses(address account) external view returns (bool);
    }
}

/// Allowlist with a fixed capacity; each account may join once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitelistContract {
    pub address: Address,
}

impl WhitelistContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    pub async fn joined_count(&self, wallet: &dyn WalletProvider) -> Result<U256> {
        let ret = call_contract(wallet, self.address, IWhitelist::numAddressesWhitelistedCall {}).await?;
        Ok(ret._0)
    }

    pub async fn capacity(&self, wallet: &dyn WalletProvider) -> Result<u8> {
        let ret = call_contract(wallet, self.address, IWhitelist::maxWhitelistedAddressesCall {}).await?;
        Ok(ret._0)
    }

    pub async fn is_allowlisted(&self, wallet: &dyn WalletProvider, account: Address) -> Result<bool> {
        let ret = call_contract(wallet, self.address, IWhitelist::whitelistedAddressesCall { account }).await?;
        Ok(ret._0)
    }

    pub async fn join(&self, wallet: &dyn WalletProvider, from: Address) -> Result<B256> {
        send_contract_call(wallet, from, self.address, IWhitelist::addAddressToWhitelistCall {}, None).await
    }
}
