//! Arbitrage harness types

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Round-trip comparison of two venues: buy on `buy_venue`, sell back on `sell_venue`.
#[derive(Debug, Clone, Serialize)]
pub struct ArbitrageQuote {
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub buy_venue: String,
    pub sell_venue: String,
    /// Which configured venue takes the buy leg; names need not be unique.
    pub dex_a_first: bool,
    pub intermediate_amount: U256,
    pub final_amount: U256,
}

impl ArbitrageQuote {
    /// Positive spread only; `None` when the round trip does not return more than it spends.
    pub fn profit(&self) -> Option<U256> {
        (self.final_amount > self.amount_in).then(|| self.final_amount - self.amount_in)
    }
}

/// Emitted to subscribers after both legs settle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArbitrageExecuted {
    pub id: String,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub profit: U256,
    pub timestamp: DateTime<Utc>,
}
