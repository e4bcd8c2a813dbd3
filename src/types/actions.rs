//! Swap / join / exit request, quote and receipt types

use alloy::primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwapKind {
    ExactIn,
    ExactOut,
}

/// Ephemeral swap request as entered by the user.
#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub token_in_index: usize,
    pub token_out_index: usize,
    pub kind: SwapKind,
    /// Human-entered amount of the given side (in for exact-in, out for exact-out).
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwapQuote {
    pub pool: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub kind: SwapKind,
    pub given_amount: U256,
    /// Calculated side: amount out for exact-in, amount in for exact-out.
    pub expected_amount: U256,
    /// Minimum out for exact-in, maximum in for exact-out.
    pub limit: U256,
}

impl SwapQuote {
    /// Upper bound on what the router may pull from the sender.
    pub fn max_amount_in(&self) -> U256 {
        match self.kind {
            SwapKind::ExactIn => self.given_amount,
            SwapKind::ExactOut => self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub enum JoinConfig {
    /// One human amount per pool token, in pool token order.
    Unbalanced { amounts: Vec<String> },
    Proportional { bpt_amount: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct JoinQuote {
    pub pool: Address,
    pub proportional: bool,
    pub tokens: Vec<Address>,
    pub amounts_in: Vec<U256>,
    pub max_amounts_in: Vec<U256>,
    pub bpt_out: U256,
    pub min_bpt_out: U256,
}

#[derive(Debug, Clone)]
pub enum ExitConfig {
    Proportional { bpt_amount: String },
    SingleToken { bpt_amount: String, token_out_index: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitQuote {
    pub pool: Address,
    pub bpt_in: U256,
    pub tokens: Vec<Address>,
    /// Expected amounts, zero for tokens not received in a single-token exit.
    pub amounts_out: Vec<U256>,
    pub min_amounts_out: Vec<U256>,
    pub single_token_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApprovalKind {
    /// ERC-20 `approve(spender, amount)`: Permit2 for router pulls, the router for BPT burns.
    Erc20,
    /// Permit2 `approve(token, router, amount, expiration)` sent to the `permit2` contract.
    Permit2 { permit2: Address, expiration: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalStep {
    pub token: Address,
    pub spender: Address,
    pub amount: U256,
    pub kind: ApprovalKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SettledAmounts {
    Swap { amount_in: U256, amount_out: U256 },
    Liquidity { amounts: Vec<U256>, total_supply: U256 },
    /// The receipt carried no vault event for this pool.
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionReceipt {
    pub action: String,
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub settled: SettledAmounts,
    pub timestamp: DateTime<Utc>,
}
