//! Single-token swaps through the Balancer v3 router

use alloy::primitives::Bytes;
use tracing::info;
use crate::{
    actions::{ActionContext, action_receipt, confirm, settled_swap},
    contracts::IRouter,
    errors::{ScaffoldError, ScaffoldResult},
    types::{ActionReceipt, Pool, SwapConfig, SwapKind, SwapQuote},
    utils::{apply_slippage_down, apply_slippage_up},
    validation::validate_swap,
};

/// Simulates the swap against current pool state.
pub async fn query_swap(ctx: &ActionContext, pool: &Pool, config: &SwapConfig) -> ScaffoldResult<SwapQuote> {
    let given_amount = validate_swap(pool, config)?;
    let token_in = pool.pool_tokens[config.token_in_index].address;
    let token_out = pool.pool_tokens[config.token_out_index].address;
    let router = IRouter::new(ctx.router, ctx.provider.as_ref());

    let expected_amount = match config.kind {
        SwapKind::ExactIn => router
            .querySwapSingleTokenExactIn(pool.address, token_in, token_out, given_amount, ctx.sender(), Bytes::new())
            .call()
            .await
            .map_err(|e| ScaffoldError::query("swap query", e))?
            .amountCalculated,
        SwapKind::ExactOut => router
            .querySwapSingleTokenExactOut(pool.address, token_in, token_out, given_amount, ctx.sender(), Bytes::new())
            .call()
            .await
            .map_err(|e| ScaffoldError::query("swap query", e))?
            .amountCalculated,
    };

    let limit = match config.kind {
        SwapKind::ExactIn => apply_slippage_down(expected_amount, ctx.slippage_bps),
        SwapKind::ExactOut => apply_slippage_up(expected_amount, ctx.slippage_bps),
    };

    info!(
        "🔎 Swap query {:?}: given {} → expected {} (limit {})",
        config.kind, given_amount, expected_amount, limit
    );

    Ok(SwapQuote {
        pool: pool.address,
        token_in,
        token_out,
        kind: config.kind,
        given_amount,
        expected_amount,
        limit,
    })
}

/// Sends the swap built from a quote. Approvals must already be in place.
pub async fn execute_swap(ctx: &ActionContext, quote: &SwapQuote) -> ScaffoldResult<ActionReceipt> {
    let signer = ctx.signer()?;
    let router = IRouter::new(ctx.router, &signer);
    let deadline = ctx.deadline();

    let pending = match quote.kind {
        SwapKind::ExactIn => router
            .swapSingleTokenExactIn(
                quote.pool,
                quote.token_in,
                quote.token_out,
                quote.given_amount,
                quote.limit,
                deadline,
                false,
                Bytes::new(),
            )
            .send()
            .await,
        SwapKind::ExactOut => router
            .swapSingleTokenExactOut(
                quote.pool,
                quote.token_in,
                quote.token_out,
                quote.given_amount,
                quote.limit,
                deadline,
                false,
                Bytes::new(),
            )
            .send()
            .await,
    }
    .map_err(|e| ScaffoldError::transaction("swap", e))?;

    let receipt = confirm(pending, "swap", ctx.confirmation_timeout_secs).await?;
    let settled = settled_swap(receipt.inner.logs(), ctx.vault, quote.pool);
    Ok(action_receipt("swap", &receipt, settled))
}
