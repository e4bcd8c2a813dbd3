//! End-to-end flows: load pool, query, plan approvals, and optionally execute + refetch

use alloy::primitives::{Address, B256};
use tracing::info;
use crate::{
    actions::{
        ActionContext, execute_approvals, execute_exit, execute_join, execute_swap, join_inputs,
        plan_bpt_approval, plan_input_approvals, query_exit, query_join, query_swap,
    },
    errors::ScaffoldResult,
    pools::read_pool,
    types::{
        ActionReceipt, ApprovalStep, ExitConfig, ExitQuote, JoinConfig, JoinQuote, Pool, SwapConfig,
        SwapQuote,
    },
};

#[derive(Debug, Clone)]
pub struct ActionOutcome<Q> {
    /// Pool state the quote was made against.
    pub pool: Pool,
    pub quote: Q,
    /// Approvals required before execution; already sent when `receipt` is set.
    pub approvals: Vec<ApprovalStep>,
    pub approval_hashes: Vec<B256>,
    pub receipt: Option<ActionReceipt>,
    /// Pool state re-read after the transaction confirmed.
    pub refreshed_pool: Option<Pool>,
}

impl<Q> ActionOutcome<Q> {
    /// Latest known pool state: refreshed after execution, otherwise as quoted.
    pub fn current_pool(&self) -> &Pool {
        self.refreshed_pool.as_ref().unwrap_or(&self.pool)
    }

    fn quoted(pool: Pool, quote: Q, approvals: Vec<ApprovalStep>) -> Self {
        Self {
            pool,
            quote,
            approvals,
            approval_hashes: Vec::new(),
            receipt: None,
            refreshed_pool: None,
        }
    }
}

pub async fn load_pool(ctx: &ActionContext, pool: Address) -> ScaffoldResult<Pool> {
    read_pool(ctx.provider.as_ref(), ctx.vault, pool, ctx.account).await
}

pub async fn run_swap(
    ctx: &ActionContext,
    pool_address: Address,
    config: &SwapConfig,
    execute: bool,
) -> ScaffoldResult<ActionOutcome<SwapQuote>> {
    let pool = load_pool(ctx, pool_address).await?;
    let quote = query_swap(ctx, &pool, config).await?;
    let approvals = match ctx.account {
        Some(owner) => plan_input_approvals(ctx, owner, &[(quote.token_in, quote.max_amount_in())]).await?,
        None => Vec::new(),
    };
    let mut outcome = ActionOutcome::quoted(pool, quote, approvals);
    if !execute {
        return Ok(outcome);
    }

    outcome.approval_hashes = execute_approvals(ctx, &outcome.approvals).await?;
    let receipt = execute_swap(ctx, &outcome.quote).await?;
    info!("💱 Swap settled: {:?}", receipt.settled);
    outcome.receipt = Some(receipt);
    outcome.refreshed_pool = Some(load_pool(ctx, pool_address).await?);
    Ok(outcome)
}

pub async fn run_join(
    ctx: &ActionContext,
    pool_address: Address,
    config: &JoinConfig,
    execute: bool,
) -> ScaffoldResult<ActionOutcome<JoinQuote>> {
    let pool = load_pool(ctx, pool_address).await?;
    let quote = query_join(ctx, &pool, config).await?;
    let approvals = match ctx.account {
        Some(owner) => plan_input_approvals(ctx, owner, &join_inputs(&quote)).await?,
        None => Vec::new(),
    };
    let mut outcome = ActionOutcome::quoted(pool, quote, approvals);
    if !execute {
        return Ok(outcome);
    }

    outcome.approval_hashes = execute_approvals(ctx, &outcome.approvals).await?;
    let receipt = execute_join(ctx, &outcome.quote).await?;
    info!("🏊 Join settled: {:?}", receipt.settled);
    outcome.receipt = Some(receipt);
    outcome.refreshed_pool = Some(load_pool(ctx, pool_address).await?);
    Ok(outcome)
}

pub async fn run_exit(
    ctx: &ActionContext,
    pool_address: Address,
    config: &ExitConfig,
    execute: bool,
) -> ScaffoldResult<ActionOutcome<ExitQuote>> {
    let pool = load_pool(ctx, pool_address).await?;
    let quote = query_exit(ctx, &pool, config).await?;
    let approvals = match ctx.account {
        Some(owner) => plan_bpt_approval(ctx, owner, pool_address, quote.bpt_in)
            .await?
            .into_iter()
            .collect(),
        None => Vec::new(),
    };
    let mut outcome = ActionOutcome::quoted(pool, quote, approvals);
    if !execute {
        return Ok(outcome);
    }

    outcome.approval_hashes = execute_approvals(ctx, &outcome.approvals).await?;
    let receipt = execute_exit(ctx, &outcome.quote).await?;
    info!("🚪 Exit settled: {:?}", receipt.settled);
    outcome.receipt = Some(receipt);
    outcome.refreshed_pool = Some(load_pool(ctx, pool_address).await?);
    Ok(outcome)
}
