//! Vault return structs mapped onto the view-model types

use crate::{
    contracts::IVault,
    types::{HooksConfig, LiquidityManagement, PoolConfig},
};

impl From<IVault::PoolConfig> for PoolConfig {
    fn from(raw: IVault::PoolConfig) -> Self {
        let lm = raw.liquidityManagement;
        Self {
            liquidity_management: LiquidityManagement {
                disable_unbalanced_liquidity: lm.disableUnbalancedLiquidity,
                enable_add_liquidity_custom: lm.enableAddLiquidityCustom,
                enable_remove_liquidity_custom: lm.enableRemoveLiquidityCustom,
                enable_donation: lm.enableDonation,
            },
            static_swap_fee_percentage: raw.staticSwapFeePercentage,
            aggregate_swap_fee_percentage: raw.aggregateSwapFeePercentage,
            aggregate_yield_fee_percentage: raw.aggregateYieldFeePercentage,
            pause_window_end_time: raw.pauseWindowEndTime,
            is_pool_registered: raw.isPoolRegistered,
            is_pool_initialized: raw.isPoolInitialized,
            is_pool_paused: raw.isPoolPaused,
            is_pool_in_recovery_mode: raw.isPoolInRecoveryMode,
        }
    }
}

impl From<IVault::HooksConfig> for HooksConfig {
    fn from(raw: IVault::HooksConfig) -> Self {
        Self {
            enable_hook_adjusted_amounts: raw.enableHookAdjustedAmounts,
            should_call_before_initialize: raw.shouldCallBeforeInitialize,
            should_call_after_initialize: raw.shouldCallAfterInitialize,
            should_call_compute_dynamic_swap_fee: raw.shouldCallComputeDynamicSwapFee,
            should_call_before_swap: raw.shouldCallBeforeSwap,
            should_call_after_swap: raw.shouldCallAfterSwap,
            should_call_before_add_liquidity: raw.shouldCallBeforeAddLiquidity,
            should_call_after_add_liquidity: raw.shouldCallAfterAddLiquidity,
            should_call_before_remove_liquidity: raw.shouldCallBeforeRemoveLiquidity,
            should_call_after_remove_liquidity: raw.shouldCallAfterRemoveLiquidity,
            hooks_contract: raw.hooksContract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, aliases::U40};

    #[test]
    fn pool_config_flags_carry_over() {
        let raw = IVault::PoolConfig {
            liquidityManagement: IVault::LiquidityManagement {
                disableUnbalancedLiquidity: true,
                enableAddLiquidityCustom: false,
                enableRemoveLiquidityCustom: false,
                enableDonation: true,
            },
            staticSwapFeePercentage: U256::from(10_000_000_000_000_000u64),
            aggregateSwapFeePercentage: U256::ZERO,
            aggregateYieldFeePercentage: U256::ZERO,
            tokenDecimalDiffs: U40::ZERO,
            pauseWindowEndTime: 1_900_000_000,
            isPoolRegistered: true,
            isPoolInitialized: true,
            isPoolPaused: false,
            isPoolInRecoveryMode: true,
        };
        let config = PoolConfig::from(raw);
        assert!(config.liquidity_management.disable_unbalanced_liquidity);
        assert!(config.liquidity_management.enable_donation);
        assert!(config.is_pool_in_recovery_mode);
        assert_eq!(config.pause_window_end_time, 1_900_000_000);
        assert_eq!(config.static_swap_fee_percentage, U256::from(10_000_000_000_000_000u64));
    }
}
