//! Pool view-model assembled from on-chain reads

use alloy::primitives::{Address, U256};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PoolToken {
    pub address: Address,
    pub balance: U256,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LiquidityManagement {
    pub disable_unbalanced_liquidity: bool,
    pub enable_add_liquidity_custom: bool,
    pub enable_remove_liquidity_custom: bool,
    pub enable_donation: bool,
}

/// Vault-side pool configuration. Fee percentages are 18-decimal fixed point.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolConfig {
    pub liquidity_management: LiquidityManagement,
    pub static_swap_fee_percentage: U256,
    pub aggregate_swap_fee_percentage: U256,
    pub aggregate_yield_fee_percentage: U256,
    pub pause_window_end_time: u32,
    pub is_pool_registered: bool,
    pub is_pool_initialized: bool,
    pub is_pool_paused: bool,
    pub is_pool_in_recovery_mode: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HooksConfig {
    pub enable_hook_adjusted_amounts: bool,
    pub should_call_before_initialize: bool,
    pub should_call_after_initialize: bool,
    pub should_call_compute_dynamic_swap_fee: bool,
    pub should_call_before_swap: bool,
    pub should_call_after_swap: bool,
    pub should_call_before_add_liquidity: bool,
    pub should_call_after_add_liquidity: bool,
    pub should_call_before_remove_liquidity: bool,
    pub should_call_after_remove_liquidity: bool,
    pub hooks_contract: Address,
}

impl HooksConfig {
    /// Names of the callbacks this pool's hook contract is wired for.
    pub fn enabled_callbacks(&self) -> Vec<&'static str> {
        [
            (self.should_call_before_initialize, "beforeInitialize"),
            (self.should_call_after_initialize, "afterInitialize"),
            (self.should_call_compute_dynamic_swap_fee, "computeDynamicSwapFee"),
            (self.should_call_before_swap, "beforeSwap"),
            (self.should_call_after_swap, "afterSwap"),
            (self.should_call_before_add_liquidity, "beforeAddLiquidity"),
            (self.should_call_after_add_liquidity, "afterAddLiquidity"),
            (self.should_call_before_remove_liquidity, "beforeRemoveLiquidity"),
            (self.should_call_after_remove_liquidity, "afterRemoveLiquidity"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }

    pub fn has_hooks(&self) -> bool {
        self.hooks_contract != Address::ZERO
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Pool {
    pub address: Address,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub vault_address: Address,
    /// BPT held by the connected account, zero without one.
    pub user_balance: U256,
    pub pool_tokens: Vec<PoolToken>,
    pub pool_config: Option<PoolConfig>,
    pub hooks_config: Option<HooksConfig>,
}

impl Pool {
    pub fn is_registered(&self) -> bool {
        self.pool_config.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.pool_config.as_ref().is_some_and(|c| c.is_pool_paused)
    }

    pub fn allows_unbalanced_liquidity(&self) -> bool {
        self.pool_config
            .as_ref()
            .is_some_and(|c| !c.liquidity_management.disable_unbalanced_liquidity)
    }

    pub fn token(&self, index: usize) -> Option<&PoolToken> {
        self.pool_tokens.get(index)
    }
}
