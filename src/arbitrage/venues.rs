//! DEX venues the arbitrage bot can quote and trade on

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;
use crate::errors::{ScaffoldError, ScaffoldResult};

/// 1e18, the fixed-point unit for mock exchange rates.
pub const RATE_ONE: u128 = 1_000_000_000_000_000_000;

#[async_trait]
pub trait DexVenue: Send + Sync {
    fn name(&self) -> &str;

    /// Output amount for selling `amount_in` of `token_in`.
    async fn quote(&self, token_in: Address, token_out: Address, amount_in: U256) -> ScaffoldResult<U256>;

    /// Executes the trade, returning the amount actually received.
    async fn swap(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        min_amount_out: U256,
    ) -> ScaffoldResult<U256>;
}

/// In-memory venue with scripted exchange rates.
pub struct MockDex {
    name: String,
    rates: RwLock<HashMap<(Address, Address), U256>>,
    swaps: AtomicU64,
}

impl MockDex {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rates: RwLock::new(HashMap::new()),
            swaps: AtomicU64::new(0),
        }
    }

    /// `rate` is output per unit input, 18-decimal fixed point.
    pub async fn set_rate(&self, token_in: Address, token_out: Address, rate: U256) {
        self.rates.write().await.insert((token_in, token_out), rate);
    }

    pub fn swaps_executed(&self) -> u64 {
        self.swaps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DexVenue for MockDex {
    fn name(&self) -> &str {
        &self.name
    }

    async fn quote(&self, token_in: Address, token_out: Address, amount_in: U256) -> ScaffoldResult<U256> {
        let rate = self
            .rates
            .read()
            .await
            .get(&(token_in, token_out))
            .copied()
            .ok_or_else(|| ScaffoldError::Query {
                operation: format!("{} quote", self.name),
                message: format!("no market for {} -> {}", token_in, token_out),
            })?;
        Ok(amount_in.saturating_mul(rate) / U256::from(RATE_ONE))
    }

    async fn swap(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        min_amount_out: U256,
    ) -> ScaffoldResult<U256> {
        let amount_out = self.quote(token_in, token_out, amount_in).await?;
        if amount_out < min_amount_out {
            return Err(ScaffoldError::Transaction {
                operation: format!("{} swap", self.name),
                message: "Insufficient output amount".to_string(),
            });
        }
        self.swaps.fetch_add(1, Ordering::SeqCst);
        debug!("{}: swapped {} -> {}", self.name, amount_in, amount_out);
        Ok(amount_out)
    }
}
