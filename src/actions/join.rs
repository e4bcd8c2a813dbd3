//! Adding liquidity: unbalanced exact-in and proportional exact-BPT-out

use alloy::primitives::{Bytes, U256};
use tracing::info;
use crate::{
    actions::{ActionContext, action_receipt, confirm, settled_join},
    contracts::IRouter,
    errors::{ScaffoldError, ScaffoldResult},
    types::{ActionReceipt, JoinConfig, JoinQuote, Pool},
    utils::{apply_slippage_down, apply_slippage_up},
    validation::{ValidatedJoin, validate_join},
};

pub async fn query_join(ctx: &ActionContext, pool: &Pool, config: &JoinConfig) -> ScaffoldResult<JoinQuote> {
    let validated = validate_join(pool, config)?;
    let tokens: Vec<_> = pool.pool_tokens.iter().map(|t| t.address).collect();
    let router = IRouter::new(ctx.router, ctx.provider.as_ref());

    let quote = match validated {
        ValidatedJoin::Unbalanced(amounts_in) => {
            let bpt_out = router
                .queryAddLiquidityUnbalanced(pool.address, amounts_in.clone(), ctx.sender(), Bytes::new())
                .call()
                .await
                .map_err(|e| ScaffoldError::query("add liquidity query", e))?
                .bptAmountOut;
            JoinQuote {
                pool: pool.address,
                proportional: false,
                tokens,
                max_amounts_in: amounts_in.clone(),
                amounts_in,
                bpt_out,
                min_bpt_out: apply_slippage_down(bpt_out, ctx.slippage_bps),
            }
        }
        ValidatedJoin::Proportional(bpt_out) => {
            let amounts_in = router
                .queryAddLiquidityProportional(pool.address, bpt_out, ctx.sender(), Bytes::new())
                .call()
                .await
                .map_err(|e| ScaffoldError::query("add liquidity query", e))?
                .amountsIn;
            JoinQuote {
                pool: pool.address,
                proportional: true,
                tokens,
                max_amounts_in: amounts_in
                    .iter()
                    .map(|a| apply_slippage_up(*a, ctx.slippage_bps))
                    .collect(),
                amounts_in,
                bpt_out,
                min_bpt_out: bpt_out,
            }
        }
    };

    info!(
        "🔎 Join query ({}): {:?} in → {} BPT (min {})",
        if quote.proportional { "proportional" } else { "unbalanced" },
        quote.amounts_in, quote.bpt_out, quote.min_bpt_out
    );
    Ok(quote)
}

/// Token inputs the router will pull, for approval planning.
pub fn join_inputs(quote: &JoinQuote) -> Vec<(alloy::primitives::Address, U256)> {
    quote.tokens.iter().copied().zip(quote.max_amounts_in.iter().copied()).collect()
}

pub async fn execute_join(ctx: &ActionContext, quote: &JoinQuote) -> ScaffoldResult<ActionReceipt> {
    let signer = ctx.signer()?;
    let router = IRouter::new(ctx.router, &signer);

    let pending = if quote.proportional {
        router
            .addLiquidityProportional(quote.pool, quote.max_amounts_in.clone(), quote.bpt_out, false, Bytes::new())
            .send()
            .await
    } else {
        router
            .addLiquidityUnbalanced(quote.pool, quote.amounts_in.clone(), quote.min_bpt_out, false, Bytes::new())
            .send()
            .await
    }
    .map_err(|e| ScaffoldError::transaction("add liquidity", e))?;

    let receipt = confirm(pending, "add liquidity", ctx.confirmation_timeout_secs).await?;
    let settled = settled_join(receipt.inner.logs(), ctx.vault, quote.pool);
    Ok(action_receipt("join", &receipt, settled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;

    #[test]
    fn join_inputs_pairs_tokens_with_max_amounts() {
        let quote = JoinQuote {
            pool: Address::ZERO,
            proportional: true,
            tokens: vec![Address::with_last_byte(1), Address::with_last_byte(2)],
            amounts_in: vec![U256::from(100u64), U256::from(200u64)],
            max_amounts_in: vec![U256::from(101u64), U256::from(201u64)],
            bpt_out: U256::from(10u64),
            min_bpt_out: U256::from(10u64),
        };
        assert_eq!(
            join_inputs(&quote),
            vec![
                (Address::with_last_byte(1), U256::from(101u64)),
                (Address::with_last_byte(2), U256::from(201u64)),
            ]
        );
    }
}
