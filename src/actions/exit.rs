//! Removing liquidity: proportional and single-token exact-BPT-in

use alloy::primitives::{Bytes, U256};
use tracing::info;
use crate::{
    actions::{ActionContext, action_receipt, confirm, settled_exit},
    contracts::IRouter,
    errors::{ScaffoldError, ScaffoldResult},
    types::{ActionReceipt, ExitConfig, ExitQuote, Pool},
    utils::apply_slippage_down,
    validation::validate_exit,
};

pub async fn query_exit(ctx: &ActionContext, pool: &Pool, config: &ExitConfig) -> ScaffoldResult<ExitQuote> {
    let bpt_balance = ctx.account.map(|_| pool.user_balance);
    let bpt_in = validate_exit(pool, config, bpt_balance)?;
    let tokens: Vec<_> = pool.pool_tokens.iter().map(|t| t.address).collect();
    let router = IRouter::new(ctx.router, ctx.provider.as_ref());

    let (amounts_out, single_token_index) = match config {
        ExitConfig::Proportional { .. } => {
            let amounts_out = router
                .queryRemoveLiquidityProportional(pool.address, bpt_in, ctx.sender(), Bytes::new())
                .call()
                .await
                .map_err(|e| ScaffoldError::query("remove liquidity query", e))?
                .amountsOut;
            (amounts_out, None)
        }
        ExitConfig::SingleToken { token_out_index, .. } => {
            let amount_out = router
                .queryRemoveLiquiditySingleTokenExactIn(
                    pool.address,
                    bpt_in,
                    tokens[*token_out_index],
                    ctx.sender(),
                    Bytes::new(),
                )
                .call()
                .await
                .map_err(|e| ScaffoldError::query("remove liquidity query", e))?
                .amountOut;
            let mut amounts_out = vec![U256::ZERO; tokens.len()];
            amounts_out[*token_out_index] = amount_out;
            (amounts_out, Some(*token_out_index))
        }
    };

    let min_amounts_out = amounts_out
        .iter()
        .map(|a| apply_slippage_down(*a, ctx.slippage_bps))
        .collect();

    info!("🔎 Exit query: {} BPT → {:?}", bpt_in, amounts_out);
    Ok(ExitQuote {
        pool: pool.address,
        bpt_in,
        tokens,
        amounts_out,
        min_amounts_out,
        single_token_index,
    })
}

pub async fn execute_exit(ctx: &ActionContext, quote: &ExitQuote) -> ScaffoldResult<ActionReceipt> {
    let signer = ctx.signer()?;
    let router = IRouter::new(ctx.router, &signer);

    let pending = match quote.single_token_index {
        None => router
            .removeLiquidityProportional(quote.pool, quote.bpt_in, quote.min_amounts_out.clone(), false, Bytes::new())
            .send()
            .await,
        Some(index) => router
            .removeLiquiditySingleTokenExactIn(
                quote.pool,
                quote.bpt_in,
                quote.tokens[index],
                quote.min_amounts_out[index],
                false,
                Bytes::new(),
            )
            .send()
            .await,
    }
    .map_err(|e| ScaffoldError::transaction("remove liquidity", e))?;

    let receipt = confirm(pending, "remove liquidity", ctx.confirmation_timeout_secs).await?;
    let settled = settled_exit(receipt.inner.logs(), ctx.vault, quote.pool);
    Ok(action_receipt("exit", &receipt, settled))
}
