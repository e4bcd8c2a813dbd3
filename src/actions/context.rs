//! Everything an action needs besides its own request

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::Provider,
};
use chrono::Utc;
use std::sync::Arc;
use crate::{
    config::Config,
    errors::{ScaffoldError, ScaffoldResult},
    network::{Connection, signing_provider},
    ConcreteProvider,
};

#[derive(Clone)]
pub struct ActionContext {
    pub provider: Arc<ConcreteProvider>,
    pub wallet: Option<EthereumWallet>,
    pub account: Option<Address>,
    pub vault: Address,
    pub router: Address,
    pub permit2: Address,
    pub slippage_bps: u32,
    pub deadline_secs: u64,
    pub confirmation_timeout_secs: u64,
    pub permit2_expiration_secs: u64,
}

impl ActionContext {
    pub fn new(connection: &Connection, config: &Config, router: Option<Address>) -> ScaffoldResult<Self> {
        let router = router.or(config.router).ok_or_else(|| {
            ScaffoldError::Config("router address missing: set ROUTER_ADDRESS or pass --router".to_string())
        })?;
        Ok(Self {
            provider: connection.provider.clone(),
            wallet: connection.wallet.clone(),
            account: connection.account,
            vault: config.vault,
            router,
            permit2: config.permit2,
            slippage_bps: config.slippage_bps,
            deadline_secs: config.deadline_secs,
            confirmation_timeout_secs: config.confirmation_timeout_secs,
            permit2_expiration_secs: config.permit2_expiration_secs,
        })
    }

    /// Address queries simulate as; zero when no account is configured.
    pub fn sender(&self) -> Address {
        self.account.unwrap_or(Address::ZERO)
    }

    /// Provider that signs with the configured wallet.
    pub fn signer(&self) -> ScaffoldResult<impl Provider> {
        let wallet = self
            .wallet
            .clone()
            .ok_or_else(|| ScaffoldError::Config("PRIVATE_KEY is required to send transactions".to_string()))?;
        Ok(signing_provider(self.provider.as_ref().clone(), wallet))
    }

    pub fn deadline(&self) -> U256 {
        U256::from(Utc::now().timestamp().max(0) as u64 + self.deadline_secs)
    }
}
