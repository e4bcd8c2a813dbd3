//! Balancer v3 scaffold - command-line entry point

use alloy::primitives::Address;
use anyhow::Result;
use balancer_v3_scaffold::{
    actions::{self, ActionContext},
    arbitrage::{ArbitrageBot, DexVenue, RouterVenue},
    config::{Deployments, resolve_address},
    network,
    pools,
    utils,
    *,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};

mod cli;

use cli::{ArbArgs, Cli, Command, ExitArgs, JoinArgs, SwapArgs};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let logging_guard = utils::setup_logging(cli.verbose)?;

    // Load configuration
    let config = CONFIG.clone().with_slippage_bps(cli.slippage_bps);
    debug!("Configuration: network={} rpc={} slippage={}bps", config.network, config.rpc_url, config.slippage_bps);

    let deployments_path = cli.deployments.clone().or_else(|| config.deployments_path.clone());
    let deployments = deployments_path.as_deref().map(Deployments::load).transpose();

    let result = match deployments {
        Ok(deployments) => run(cli.command, &config, deployments.as_ref()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        utils::print_error(&e);
        // flush the file appender before exiting
        drop(logging_guard);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: &Config, deployments: Option<&Deployments>) -> ScaffoldResult<()> {
    match command {
        Command::Pool { pool } => {
            let pool = resolve_address(&pool, deployments)?;
            let connection = network::connect(config).await?;
            let pool = pools::read_pool(connection.provider.as_ref(), config.vault, pool, connection.account).await?;
            utils::print_pool(&pool);
        }
        Command::Swap(args) => run_swap(args, config, deployments).await?,
        Command::Join(args) => run_join(args, config, deployments).await?,
        Command::Exit(args) => run_exit(args, config, deployments).await?,
        Command::Hooks { url, category } => {
            let url = url.or_else(|| config.hooks_catalog_url.clone()).ok_or_else(|| {
                ScaffoldError::Config("hooks catalog URL missing: set HOOKS_CATALOG_URL or pass --url".to_string())
            })?;
            let hooks = network::fetch_hooks_catalog(&url).await?;
            utils::print_hooks(&network::filter_hooks(&hooks, category.as_deref()));
        }
        Command::Arb(args) => run_arbitrage(args, config, deployments).await?,
        Command::Deployments => {
            let deployments = deployments.ok_or_else(|| {
                ScaffoldError::Config("no deployments file: set DEPLOYMENTS_PATH or pass --deployments".to_string())
            })?;
            utils::print_deployments(deployments);
        }
    }
    Ok(())
}

async fn action_context(
    config: &Config,
    deployments: Option<&Deployments>,
    router: Option<&str>,
) -> ScaffoldResult<ActionContext> {
    let router = router.map(|r| resolve_address(r, deployments)).transpose()?;
    let connection = network::connect(config).await?;
    let ctx = ActionContext::new(&connection, config, router)?;
    if ctx.account.is_none() {
        info!("No PRIVATE_KEY configured: quoting only");
    }
    Ok(ctx)
}

async fn run_swap(args: SwapArgs, config: &Config, deployments: Option<&Deployments>) -> ScaffoldResult<()> {
    let pool = resolve_address(&args.target.pool, deployments)?;
    let ctx = action_context(config, deployments, args.target.router.as_deref()).await?;
    let swap = SwapConfig {
        token_in_index: args.token_in,
        token_out_index: args.token_out,
        kind: if args.exact_out { SwapKind::ExactOut } else { SwapKind::ExactIn },
        amount: args.amount,
    };

    let outcome = actions::run_swap(&ctx, pool, &swap, args.target.execute).await?;
    let shown = outcome.current_pool();
    utils::print_swap_quote(shown, &outcome.quote);
    utils::print_approvals(&outcome.approvals);
    if let Some(receipt) = &outcome.receipt {
        utils::print_receipt(shown, receipt);
        utils::print_pool(shown);
    }
    Ok(())
}

async fn run_join(args: JoinArgs, config: &Config, deployments: Option<&Deployments>) -> ScaffoldResult<()> {
    let pool = resolve_address(&args.target.pool, deployments)?;
    let join = match (args.amounts, args.bpt) {
        (Some(amounts), None) => JoinConfig::Unbalanced { amounts },
        (None, Some(bpt_amount)) => JoinConfig::Proportional { bpt_amount },
        _ => return Err(ScaffoldError::invalid("join", "pass either --amounts or --bpt")),
    };
    let ctx = action_context(config, deployments, args.target.router.as_deref()).await?;

    let outcome = actions::run_join(&ctx, pool, &join, args.target.execute).await?;
    let shown = outcome.current_pool();
    utils::print_join_quote(shown, &outcome.quote);
    utils::print_approvals(&outcome.approvals);
    if let Some(receipt) = &outcome.receipt {
        utils::print_receipt(shown, receipt);
        utils::print_pool(shown);
    }
    Ok(())
}

async fn run_exit(args: ExitArgs, config: &Config, deployments: Option<&Deployments>) -> ScaffoldResult<()> {
    let pool = resolve_address(&args.target.pool, deployments)?;
    let exit = match args.token_out {
        Some(token_out_index) => ExitConfig::SingleToken { bpt_amount: args.bpt, token_out_index },
        None => ExitConfig::Proportional { bpt_amount: args.bpt },
    };
    let ctx = action_context(config, deployments, args.target.router.as_deref()).await?;

    let outcome = actions::run_exit(&ctx, pool, &exit, args.target.execute).await?;
    let shown = outcome.current_pool();
    utils::print_exit_quote(shown, &outcome.quote);
    utils::print_approvals(&outcome.approvals);
    if let Some(receipt) = &outcome.receipt {
        utils::print_receipt(shown, receipt);
        utils::print_pool(shown);
    }
    Ok(())
}

async fn run_arbitrage(args: ArbArgs, config: &Config, deployments: Option<&Deployments>) -> ScaffoldResult<()> {
    let token_in = resolve_address(&args.token_in, deployments)?;
    let token_out = resolve_address(&args.token_out, deployments)?;
    let router = |arg: Option<&str>, fallback: Option<Address>, name: &str| -> ScaffoldResult<Address> {
        match arg {
            Some(value) => resolve_address(value, deployments),
            None => fallback.ok_or_else(|| ScaffoldError::Config(format!("{} router missing", name))),
        }
    };
    let dex_a = router(args.dex_a.as_deref(), config.dex_a_router, "DEX A")?;
    let dex_b = router(args.dex_b.as_deref(), config.dex_b_router, "DEX B")?;

    let connection = network::connect(config).await?;
    let decimals = pools::get_token_metadata(connection.provider.as_ref(), token_in).await?.decimals;
    let amount_in = utils::to_raw_amount(&args.amount, decimals)?;
    let recipient = connection.account.unwrap_or(Address::ZERO);

    let venue = |name: &str, router: Address| -> Arc<dyn DexVenue> {
        Arc::new(RouterVenue::new(
            name,
            router,
            connection.provider.clone(),
            connection.wallet.clone(),
            recipient,
            config.deadline_secs,
            config.confirmation_timeout_secs,
        ))
    };
    let bot = ArbitrageBot::new(venue("DEX A", dex_a), venue("DEX B", dex_b), config.slippage_bps);

    let quote = bot.compare(token_in, token_out, amount_in).await?;
    utils::print_arbitrage_quote(&quote);
    if !args.execute {
        return Ok(());
    }

    connection.require_account()?;
    let event = bot.execute_arbitrage(token_in, token_out, amount_in).await?;
    utils::print_arbitrage_executed(&event);
    Ok(())
}
