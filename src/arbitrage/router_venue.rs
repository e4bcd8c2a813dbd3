//! Uniswap-V2-style router as an arbitrage venue

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::Provider,
};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use crate::{
    actions::confirm,
    arbitrage::DexVenue,
    contracts::{IERC20, IUniswapV2Router02},
    errors::{ScaffoldError, ScaffoldResult},
    network::signing_provider,
    pools::{contract_error, get_token_balance},
    ConcreteProvider,
};

pub struct RouterVenue {
    name: String,
    router: Address,
    provider: Arc<ConcreteProvider>,
    wallet: Option<EthereumWallet>,
    recipient: Address,
    deadline_secs: u64,
    confirmation_timeout_secs: u64,
}

impl RouterVenue {
    pub fn new(
        name: &str,
        router: Address,
        provider: Arc<ConcreteProvider>,
        wallet: Option<EthereumWallet>,
        recipient: Address,
        deadline_secs: u64,
        confirmation_timeout_secs: u64,
    ) -> Self {
        Self {
            name: name.to_string(),
            router,
            provider,
            wallet,
            recipient,
            deadline_secs,
            confirmation_timeout_secs,
        }
    }

    fn signer(&self) -> ScaffoldResult<impl Provider> {
        let wallet = self.wallet.clone().ok_or_else(|| {
            ScaffoldError::Config(format!("{}: PRIVATE_KEY is required to trade", self.name))
        })?;
        Ok(signing_provider(self.provider.as_ref().clone(), wallet))
    }

    async fn ensure_allowance(&self, token: Address, amount: U256) -> ScaffoldResult<()> {
        let allowance = IERC20::new(token, self.provider.as_ref())
            .allowance(self.recipient, self.router)
            .call()
            .await
            .map_err(contract_error(token, "allowance"))?
            ._0;
        if allowance >= amount {
            return Ok(());
        }

        info!("🔓 {}: approving {} of {}", self.name, amount, token);
        let signer = self.signer()?;
        let pending = IERC20::new(token, &signer)
            .approve(self.router, amount)
            .send()
            .await
            .map_err(|e| ScaffoldError::transaction("approve", e))?;
        confirm(pending, "approve", self.confirmation_timeout_secs).await?;
        Ok(())
    }
}

#[async_trait]
impl DexVenue for RouterVenue {
    fn name(&self) -> &str {
        &self.name
    }

    async fn quote(&self, token_in: Address, token_out: Address, amount_in: U256) -> ScaffoldResult<U256> {
        let amounts = IUniswapV2Router02::new(self.router, self.provider.as_ref())
            .getAmountsOut(amount_in, vec![token_in, token_out])
            .call()
            .await
            .map_err(|e| ScaffoldError::query(&format!("{} quote", self.name), e))?
            .amounts;
        amounts.last().copied().ok_or_else(|| ScaffoldError::Query {
            operation: format!("{} quote", self.name),
            message: "router returned no amounts".to_string(),
        })
    }

    async fn swap(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        min_amount_out: U256,
    ) -> ScaffoldResult<U256> {
        self.ensure_allowance(token_in, amount_in).await?;
        let provider = self.provider.as_ref();
        let before = get_token_balance(provider, token_out, self.recipient).await?;

        let deadline = U256::from(Utc::now().timestamp().max(0) as u64 + self.deadline_secs);
        let signer = self.signer()?;
        let pending = IUniswapV2Router02::new(self.router, &signer)
            .swapExactTokensForTokens(amount_in, min_amount_out, vec![token_in, token_out], self.recipient, deadline)
            .send()
            .await
            .map_err(|e| ScaffoldError::transaction(&format!("{} swap", self.name), e))?;
        confirm(pending, &format!("{} swap", self.name), self.confirmation_timeout_secs).await?;

        let after = get_token_balance(provider, token_out, self.recipient).await?;
        Ok(after.saturating_sub(before))
    }
}
