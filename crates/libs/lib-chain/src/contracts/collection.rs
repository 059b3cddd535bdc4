use crate::error::Result;
use crate::provider::{call_contract, send_contract_call, WalletProvider};
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface INeighbors {
        function owner() external view returns (address);
        function presaleStarted() external view returns (bool);
        /// Unix timestamp (seconds) at which the presale window closes
        function presaleEnded() external view returns (uint256);
        function startPresale() external;
        function presaleMint() external payable;
        function mint() external payable;
        function tokenIds() external view returns (uint256);
        function maxTokenIds() external view returns (uint256);
    }
}

/// The NFT collection: sale phase, supply counters and the mint entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionContract {
    pub address: Address,
}

impl CollectionContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    pub async fn owner(&self, wallet: &dyn WalletProvider) -> Result<Address> {
        let ret = call_contract(wallet, self.address, INeighbors::ownerCall {}).await?;
        Ok(ret._0)
    }

    pub async fn presale_started(&self, wallet: &dyn WalletProvider) -> Result<bool> {
        let ret = call_contract(wallet, self.address, INeighbors::presaleStartedCall {}).await?;
        Ok(ret._0)
    }

    /// Presale end as a unix timestamp in seconds. Zero before the presale starts.
    pub async fn presale_end(&self, wallet: &dyn WalletProvider) -> Result<U256> {
        let ret = call_contract(wallet, self.address, INeighbors::presaleEndedCall {}).await?;
        Ok(ret._0)
    }

    pub async fn minted(&self, wallet: &dyn WalletProvider) -> Result<U256> {
        let ret = call_contract(wallet, self.address, INeighbors::tokenIdsCall {}).await?;
        Ok(ret._0)
    }

    pub async fn max_supply(&self, wallet: &dyn WalletProvider) -> Result<U256> {
        let ret = call_contract(wallet, self.address, INeighbors::maxTokenIdsCall {}).await?;
        Ok(ret._0)
    }

    pub async fn start_presale(&self, wallet: &dyn WalletProvider, from: Address) -> Result<B256> {
        send_contract_call(wallet, from, self.address, INeighbors::startPresaleCall {}, None).await
    }

    pub async fn presale_mint(&self, wallet: &dyn WalletProvider, from: Address, price: U256) -> Result<B256> {
        send_contract_call(wallet, from, self.address, INeighbors::presaleMintCall {}, Some(price)).await
    }

    pub async fn public_mint(&self, wallet: &dyn WalletProvider, from: Address, price: U256) -> Result<B256> {
        send_contract_call(wallet, from, self.address, INeighbors::mintCall {}, Some(price)).await
    }
}
