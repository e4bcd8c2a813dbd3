//! Request-level validation: indices, amounts and limits

use alloy::primitives::U256;
use crate::{
    errors::{ScaffoldError, ScaffoldResult},
    types::{ExitConfig, JoinConfig, Pool, SwapConfig, SwapKind},
    utils::to_raw_amount,
    validation::{ensure_pool_operable, ensure_token_index, ensure_unbalanced_allowed},
};

/// Parses under `field`'s name, keeping the parse failure's reason.
fn raw_amount(amount: &str, decimals: u8, field: &str) -> ScaffoldResult<U256> {
    to_raw_amount(amount, decimals).map_err(|e| match e {
        ScaffoldError::InvalidInput { reason, .. } => ScaffoldError::invalid(field, reason),
        other => other,
    })
}

fn positive_amount(amount: &str, decimals: u8, field: &str) -> ScaffoldResult<U256> {
    let raw = raw_amount(amount, decimals, field)?;
    if raw.is_zero() {
        return Err(ScaffoldError::invalid(field, "must be greater than zero"));
    }
    Ok(raw)
}

/// Returns the raw given amount, scaled by the given side's decimals.
pub fn validate_swap(pool: &Pool, config: &SwapConfig) -> ScaffoldResult<U256> {
    ensure_pool_operable(pool)?;
    ensure_token_index(pool, config.token_in_index, "token in")?;
    ensure_token_index(pool, config.token_out_index, "token out")?;
    if config.token_in_index == config.token_out_index {
        return Err(ScaffoldError::invalid("token out", "must differ from token in"));
    }

    let given_index = match config.kind {
        SwapKind::ExactIn => config.token_in_index,
        SwapKind::ExactOut => config.token_out_index,
    };
    let given = &pool.pool_tokens[given_index];
    let raw = positive_amount(&config.amount, given.decimals, "swap amount")?;

    if config.kind == SwapKind::ExactOut && raw >= given.balance {
        return Err(ScaffoldError::invalid(
            "swap amount",
            format!("exceeds pool balance of {}", given.symbol),
        ));
    }
    Ok(raw)
}

pub enum ValidatedJoin {
    Unbalanced(Vec<U256>),
    Proportional(U256),
}

pub fn validate_join(pool: &Pool, config: &JoinConfig) -> ScaffoldResult<ValidatedJoin> {
    ensure_pool_operable(pool)?;
    match config {
        JoinConfig::Unbalanced { amounts } => {
            ensure_unbalanced_allowed(pool, "Unbalanced join")?;
            if amounts.len() != pool.pool_tokens.len() {
                return Err(ScaffoldError::invalid(
                    "join amounts",
                    format!("expected {} amounts, got {}", pool.pool_tokens.len(), amounts.len()),
                ));
            }
            let raw = amounts
                .iter()
                .zip(pool.pool_tokens.iter())
                .map(|(amount, token)| raw_amount(amount, token.decimals, &format!("{} amount", token.symbol)))
                .collect::<ScaffoldResult<Vec<_>>>()?;
            if raw.iter().all(|a| a.is_zero()) {
                return Err(ScaffoldError::invalid("join amounts", "at least one amount must be greater than zero"));
            }
            Ok(ValidatedJoin::Unbalanced(raw))
        }
        JoinConfig::Proportional { bpt_amount } => {
            Ok(ValidatedJoin::Proportional(positive_amount(bpt_amount, pool.decimals, "BPT amount")?))
        }
    }
}

/// Returns the raw BPT amount to burn.
pub fn validate_exit(pool: &Pool, config: &ExitConfig, bpt_balance: Option<U256>) -> ScaffoldResult<U256> {
    ensure_pool_operable(pool)?;
    let bpt_amount = match config {
        ExitConfig::Proportional { bpt_amount } => bpt_amount,
        ExitConfig::SingleToken { bpt_amount, token_out_index } => {
            ensure_unbalanced_allowed(pool, "Single token exit")?;
            ensure_token_index(pool, *token_out_index, "token out")?;
            bpt_amount
        }
    };
    let raw = positive_amount(bpt_amount, pool.decimals, "BPT amount")?;
    if let Some(balance) = bpt_balance {
        if raw > balance {
            return Err(ScaffoldError::invalid("BPT amount", "exceeds your BPT balance"));
        }
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, address};
    use crate::types::{PoolConfig, PoolToken};

    fn token(symbol: &str, decimals: u8, balance: u64) -> PoolToken {
        PoolToken {
            address: Address::repeat_byte(symbol.as_bytes()[0]),
            balance: U256::from(balance),
            decimals,
            name: symbol.to_string(),
            symbol: symbol.to_string(),
        }
    }

    fn pool() -> Pool {
        Pool {
            address: address!("5555555555555555555555555555555555555555"),
            decimals: 18,
            name: "Constant Sum Pool".to_string(),
            symbol: "CSP".to_string(),
            total_supply: U256::from(1_000u64),
            vault_address: Address::ZERO,
            user_balance: U256::ZERO,
            pool_tokens: vec![token("A", 6, 1_000_000_000), token("B", 18, 5_000_000)],
            pool_config: Some(PoolConfig {
                is_pool_registered: true,
                is_pool_initialized: true,
                ..Default::default()
            }),
            hooks_config: None,
        }
    }

    fn swap(token_in_index: usize, token_out_index: usize, kind: SwapKind, amount: &str) -> SwapConfig {
        SwapConfig { token_in_index, token_out_index, kind, amount: amount.to_string() }
    }

    #[test]
    fn exact_in_uses_token_in_decimals() {
        let raw = validate_swap(&pool(), &swap(0, 1, SwapKind::ExactIn, "2.5")).unwrap();
        assert_eq!(raw, U256::from(2_500_000u64));
    }

    #[test]
    fn swap_rejects_same_token_and_out_of_range() {
        assert!(validate_swap(&pool(), &swap(0, 0, SwapKind::ExactIn, "1")).is_err());
        assert!(validate_swap(&pool(), &swap(0, 2, SwapKind::ExactIn, "1")).is_err());
        assert!(validate_swap(&pool(), &swap(0, 1, SwapKind::ExactIn, "0")).is_err());
    }

    #[test]
    fn exact_out_cannot_drain_pool() {
        // token B balance is 5e6 raw = 0.000000000005 B
        assert!(validate_swap(&pool(), &swap(0, 1, SwapKind::ExactOut, "1")).is_err());
    }

    #[test]
    fn unregistered_and_paused_pools_are_rejected() {
        let mut unregistered = pool();
        unregistered.pool_config = None;
        assert!(matches!(
            validate_swap(&unregistered, &swap(0, 1, SwapKind::ExactIn, "1")),
            Err(ScaffoldError::PoolNotRegistered { .. })
        ));

        let mut paused = pool();
        paused.pool_config.as_mut().unwrap().is_pool_paused = true;
        assert!(matches!(
            validate_swap(&paused, &swap(0, 1, SwapKind::ExactIn, "1")),
            Err(ScaffoldError::PoolPaused { .. })
        ));
    }

    #[test]
    fn unbalanced_join_needs_pool_support() {
        let config = JoinConfig::Unbalanced { amounts: vec!["1".into(), "0".into()] };
        assert!(matches!(validate_join(&pool(), &config), Ok(ValidatedJoin::Unbalanced(_))));

        let mut strict = pool();
        strict
            .pool_config
            .as_mut()
            .unwrap()
            .liquidity_management
            .disable_unbalanced_liquidity = true;
        assert!(validate_join(&strict, &config).is_err());
        assert!(validate_join(&strict, &JoinConfig::Proportional { bpt_amount: "1".into() }).is_ok());
    }

    #[test]
    fn join_amount_count_must_match_tokens() {
        let config = JoinConfig::Unbalanced { amounts: vec!["1".into()] };
        assert!(validate_join(&pool(), &config).is_err());
        let zeros = JoinConfig::Unbalanced { amounts: vec!["0".into(), "0".into()] };
        assert!(validate_join(&pool(), &zeros).is_err());
    }

    #[test]
    fn unbalanced_join_reports_why_an_amount_is_bad() {
        let precise = JoinConfig::Unbalanced { amounts: vec!["0.0000001".into(), "1".into()] };
        match validate_join(&pool(), &precise) {
            Err(ScaffoldError::InvalidInput { field, reason }) => {
                assert_eq!(field, "A amount");
                assert!(reason.contains("more than 6 decimal places"), "{}", reason);
            }
            other => panic!("expected invalid input, got {:?}", other.map(|_| ())),
        }

        let garbled = JoinConfig::Unbalanced { amounts: vec!["1".into(), "1,5".into()] };
        match validate_join(&pool(), &garbled) {
            Err(ScaffoldError::InvalidInput { field, reason }) => {
                assert_eq!(field, "B amount");
                assert!(reason.contains("not a decimal number"), "{}", reason);
            }
            other => panic!("expected invalid input, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn exit_is_capped_by_balance() {
        let config = ExitConfig::Proportional { bpt_amount: "1".into() };
        let one = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(validate_exit(&pool(), &config, Some(one)).unwrap(), one);
        assert!(validate_exit(&pool(), &config, Some(U256::from(1u64))).is_err());

        let single = ExitConfig::SingleToken { bpt_amount: "1".into(), token_out_index: 3 };
        assert!(validate_exit(&pool(), &single, None).is_err());
    }
}
