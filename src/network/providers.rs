//! Provider setup and account wiring

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use crate::{
    config::Config,
    errors::{ScaffoldError, ScaffoldResult},
    ConcreteProvider,
};

/// An RPC connection plus the wallet that signs writes, when one is configured.
#[derive(Clone)]
pub struct Connection {
    pub provider: Arc<ConcreteProvider>,
    pub wallet: Option<EthereumWallet>,
    pub account: Option<Address>,
    pub chain_id: u64,
}

impl Connection {
    pub fn require_account(&self) -> ScaffoldResult<Address> {
        self.account
            .ok_or_else(|| ScaffoldError::Config("PRIVATE_KEY is required to send transactions".to_string()))
    }
}

fn network_error(message: String, e: impl Into<anyhow::Error>) -> ScaffoldError {
    ScaffoldError::Network {
        message,
        source: Some(e.into()),
    }
}

/// HTTP provider for reads and `eth_call` queries.
pub fn read_provider(rpc_url: &str) -> ScaffoldResult<Arc<ConcreteProvider>> {
    let url = rpc_url
        .parse()
        .map_err(|e| ScaffoldError::Config(format!("Invalid RPC_URL {}: {}", rpc_url, e)))?;
    Ok(Arc::new(ProviderBuilder::new().on_http(url).boxed()))
}

/// Wraps the read provider with the recommended fillers and `wallet`.
pub fn signing_provider(provider: ConcreteProvider, wallet: EthereumWallet) -> impl Provider {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_provider(provider)
}

pub async fn connect(config: &Config) -> ScaffoldResult<Connection> {
    let provider = read_provider(&config.rpc_url)?;

    let (wallet, account) = match &config.private_key {
        Some(pk) => {
            let signer = PrivateKeySigner::from_str(pk.trim())
                .map_err(|e| ScaffoldError::Config(format!("Failed to parse private key: {}", e)))?;
            let account = signer.address();
            (Some(EthereumWallet::from(signer)), Some(account))
        }
        None => (None, None),
    };

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| network_error(format!("Failed to get chain id from {}", config.rpc_url), e))?;
    let block = provider
        .get_block_number()
        .await
        .map_err(|e| network_error("Failed to get block number".to_string(), e))?;

    info!("🔗 Connected to {} (chain {}) at block {}", config.network, chain_id, block);
    if let Some(account) = account {
        info!("👛 Signing as {}", account);
    }

    Ok(Connection { provider, wallet, account, chain_id })
}
