//! Pool state checks shared by every action

use crate::{
    errors::{ScaffoldError, ScaffoldResult},
    types::Pool,
};

pub fn ensure_pool_operable(pool: &Pool) -> ScaffoldResult<()> {
    if !pool.is_registered() {
        return Err(ScaffoldError::PoolNotRegistered { pool: pool.address });
    }
    if pool.is_paused() {
        return Err(ScaffoldError::PoolPaused { pool: pool.address });
    }
    Ok(())
}

pub fn ensure_unbalanced_allowed(pool: &Pool, operation: &str) -> ScaffoldResult<()> {
    if !pool.allows_unbalanced_liquidity() {
        return Err(ScaffoldError::invalid(
            "operation",
            format!("{} requires unbalanced liquidity, which this pool disables", operation),
        ));
    }
    Ok(())
}

pub fn ensure_token_index(pool: &Pool, index: usize, field: &str) -> ScaffoldResult<()> {
    if index >= pool.pool_tokens.len() {
        return Err(ScaffoldError::invalid(
            field,
            format!("index {} out of range for {} pool tokens", index, pool.pool_tokens.len()),
        ));
    }
    Ok(())
}
