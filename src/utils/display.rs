//! Display and printing utilities

use alloy::primitives::{Address, U256};
use tracing::{error, info, warn};
use crate::{
    config::Deployments,
    errors::ScaffoldError,
    types::{
        ActionReceipt, ApprovalKind, ApprovalStep, ArbitrageExecuted, ArbitrageQuote, ExitQuote,
        HookInfo, JoinQuote, Pool, SettledAmounts, SwapKind, SwapQuote,
    },
    utils::{fixed_point_to_percent, format_raw_amount},
};

fn token_label(pool: &Pool, token: Address) -> (String, u8) {
    pool.pool_tokens
        .iter()
        .find(|t| t.address == token)
        .map(|t| (t.symbol.clone(), t.decimals))
        .unwrap_or_else(|| (format!("{}", token), 18))
}

fn fmt(pool: &Pool, token: Address, amount: U256) -> String {
    let (symbol, decimals) = token_label(pool, token);
    format!("{} {}", format_raw_amount(amount, decimals), symbol)
}

pub fn print_pool(pool: &Pool) {
    info!("\n🏊 {} ({})", pool.name, pool.symbol);
    info!("📍 Address: {}", pool.address);
    info!("🏦 Vault:   {}", pool.vault_address);
    info!("   Total Supply: {} BPT", format_raw_amount(pool.total_supply, pool.decimals));
    info!("   Your Balance: {} BPT", format_raw_amount(pool.user_balance, pool.decimals));

    if pool.pool_tokens.is_empty() {
        info!("   Tokens: none reported");
    } else {
        info!("   Tokens:");
        for (i, token) in pool.pool_tokens.iter().enumerate() {
            info!(
                "     [{}] {} ({}) {} | {}",
                i, token.symbol, token.name,
                format_raw_amount(token.balance, token.decimals),
                token.address
            );
        }
    }

    match &pool.pool_config {
        Some(config) => {
            info!("⚙️  Pool Config:");
            info!("   Static Swap Fee:    {:.4}%", fixed_point_to_percent(config.static_swap_fee_percentage));
            info!("   Aggregate Swap Fee: {:.4}%", fixed_point_to_percent(config.aggregate_swap_fee_percentage));
            info!("   Aggregate Yield Fee: {:.4}%", fixed_point_to_percent(config.aggregate_yield_fee_percentage));
            info!("   Initialized: {} | Paused: {} | Recovery Mode: {}",
                config.is_pool_initialized, config.is_pool_paused, config.is_pool_in_recovery_mode);
            info!("   Pause Window Ends: {}", config.pause_window_end_time);
            let lm = &config.liquidity_management;
            info!("   Liquidity: unbalanced {} | custom add {} | custom remove {} | donation {}",
                if lm.disable_unbalanced_liquidity { "disabled" } else { "enabled" },
                lm.enable_add_liquidity_custom,
                lm.enable_remove_liquidity_custom,
                lm.enable_donation
            );
        }
        None => warn!("⚠️  Pool is not registered with the vault"),
    }

    if let Some(hooks) = &pool.hooks_config {
        if hooks.has_hooks() {
            info!("🪝 Hooks: {}", hooks.hooks_contract);
            info!("   Callbacks: {}", hooks.enabled_callbacks().join(", "));
            info!("   Hook-adjusted amounts: {}", hooks.enable_hook_adjusted_amounts);
        } else {
            info!("🪝 Hooks: none");
        }
    }
}

pub fn print_swap_quote(pool: &Pool, quote: &SwapQuote) {
    info!("\n🔁 SWAP QUOTE ({:?})", quote.kind);
    match quote.kind {
        SwapKind::ExactIn => {
            info!("   Sell:        {}", fmt(pool, quote.token_in, quote.given_amount));
            info!("   Expected:    {}", fmt(pool, quote.token_out, quote.expected_amount));
            info!("   Minimum Out: {}", fmt(pool, quote.token_out, quote.limit));
        }
        SwapKind::ExactOut => {
            info!("   Buy:         {}", fmt(pool, quote.token_out, quote.given_amount));
            info!("   Expected In: {}", fmt(pool, quote.token_in, quote.expected_amount));
            info!("   Maximum In:  {}", fmt(pool, quote.token_in, quote.limit));
        }
    }
}

pub fn print_join_quote(pool: &Pool, quote: &JoinQuote) {
    info!("\n➕ JOIN QUOTE ({})", if quote.proportional { "proportional" } else { "unbalanced" });
    for ((token, amount), max) in quote.tokens.iter().zip(&quote.amounts_in).zip(&quote.max_amounts_in) {
        info!("   In: {} (max {})", fmt(pool, *token, *amount), format_raw_amount(*max, token_label(pool, *token).1));
    }
    info!("   BPT Out: {} (min {})",
        format_raw_amount(quote.bpt_out, pool.decimals),
        format_raw_amount(quote.min_bpt_out, pool.decimals));
}

pub fn print_exit_quote(pool: &Pool, quote: &ExitQuote) {
    info!("\n➖ EXIT QUOTE ({})", if quote.single_token_index.is_some() { "single token" } else { "proportional" });
    info!("   BPT In: {}", format_raw_amount(quote.bpt_in, pool.decimals));
    for ((token, amount), min) in quote.tokens.iter().zip(&quote.amounts_out).zip(&quote.min_amounts_out) {
        if amount.is_zero() {
            continue;
        }
        info!("   Out: {} (min {})", fmt(pool, *token, *amount), format_raw_amount(*min, token_label(pool, *token).1));
    }
}

pub fn print_approvals(steps: &[ApprovalStep]) {
    if steps.is_empty() {
        info!("✅ Allowances sufficient, no approval needed");
        return;
    }
    warn!("🔐 {} approval(s) required:", steps.len());
    for step in steps {
        match step.kind {
            ApprovalKind::Erc20 => warn!("   ERC-20 approve {} of {} → {}", step.amount, step.token, step.spender),
            ApprovalKind::Permit2 { expiration, .. } => warn!(
                "   Permit2 approve {} of {} → {} (expires {})",
                step.amount, step.token, step.spender, expiration
            ),
        }
    }
}

pub fn print_receipt(pool: &Pool, receipt: &ActionReceipt) {
    warn!("\n✅ {} CONFIRMED", receipt.action.to_uppercase());
    warn!("   Tx Hash: {}", receipt.tx_hash);
    if let Some(block) = receipt.block_number {
        warn!("   Block: {}", block);
    }
    match &receipt.settled {
        SettledAmounts::Swap { amount_in, amount_out } => {
            warn!("   Settled In:  {}", amount_in);
            warn!("   Settled Out: {}", amount_out);
        }
        SettledAmounts::Liquidity { amounts, total_supply } => {
            for (token, amount) in pool.pool_tokens.iter().zip(amounts) {
                warn!("   {}: {}", token.symbol, format_raw_amount(*amount, token.decimals));
            }
            warn!("   Pool Total Supply: {} BPT", format_raw_amount(*total_supply, pool.decimals));
        }
        SettledAmounts::Unknown => warn!("   Settled amounts not found in receipt logs"),
    }
}

pub fn print_hooks(hooks: &[&HookInfo]) {
    info!("\n🪝 {} hook(s)", hooks.len());
    for hook in hooks {
        info!("   #{} {} {}", hook.id, hook.title, if hook.audited { "(audited)" } else { "" });
        if !hook.description.is_empty() {
            info!("      {}", hook.description);
        }
        if !hook.categories.is_empty() {
            info!("      Categories: {}", hook.categories.join(", "));
        }
        if !hook.created_by.is_empty() {
            info!("      By: {}", hook.created_by);
        }
        if !hook.github.is_empty() {
            info!("      {}", hook.github);
        }
    }
}

pub fn print_arbitrage_quote(quote: &ArbitrageQuote) {
    info!("\n⚖️  ARBITRAGE CHECK");
    info!("   Buy on {} → Sell on {}", quote.buy_venue, quote.sell_venue);
    info!("   In: {} | Intermediate: {} | Back: {}", quote.amount_in, quote.intermediate_amount, quote.final_amount);
    match quote.profit() {
        Some(profit) => warn!("   💰 Profit: {}", profit),
        None => info!("   No profitable spread"),
    }
}

pub fn print_arbitrage_executed(event: &ArbitrageExecuted) {
    warn!("\n🎯 ARBITRAGE EXECUTED #{}", event.id);
    warn!("   {} → {} → {}", event.token_in, event.token_out, event.token_in);
    warn!("   Amount In: {}", event.amount_in);
    warn!("   Profit:    {}", event.profit);
}

pub fn print_deployments(deployments: &Deployments) {
    info!("\n📦 {} deployed contract(s){}", deployments.len(),
        deployments.chain_id.map(|id| format!(" on chain {}", id)).unwrap_or_default());
    for (name, address) in deployments.iter() {
        info!("   {:<32} {}", name, address);
    }
}

pub fn print_error(err: &ScaffoldError) {
    let label = if err.is_query_error() {
        "Query error"
    } else if err.is_transaction_error() {
        "Transaction error"
    } else {
        "Error"
    };
    error!("❌ {}: {}", label, err.user_message());
}
