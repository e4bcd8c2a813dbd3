//! Command-line surface

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "balancer-scaffold", version, about = "Balancer v3 pool explorer and action client")]
pub struct Cli {
    /// Debug-level console logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override slippage tolerance in basis points
    #[arg(long, global = true)]
    pub slippage_bps: Option<u32>,

    /// Hardhat deployments export (JSON) for resolving contract names
    #[arg(long, global = true, env = "DEPLOYMENTS_PATH")]
    pub deployments: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a pool's tokens, balances, config and hooks
    Pool {
        /// Pool address or deployment name
        pool: String,
    },
    /// Swap one pool token for another
    Swap(SwapArgs),
    /// Add liquidity
    Join(JoinArgs),
    /// Remove liquidity
    Exit(ExitArgs),
    /// Browse the pool hooks catalog
    Hooks {
        /// Catalog URL, defaults to HOOKS_CATALOG_URL
        #[arg(long)]
        url: Option<String>,
        /// Only hooks in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Compare two DEX routers for a round-trip arbitrage
    Arb(ArbArgs),
    /// List contracts from the deployments file
    Deployments,
}

#[derive(Debug, Args)]
pub struct ActionTarget {
    /// Pool address or deployment name
    #[arg(long)]
    pub pool: String,

    /// Router address or deployment name, defaults to ROUTER_ADDRESS
    #[arg(long)]
    pub router: Option<String>,

    /// Send approvals and the transaction instead of only quoting
    #[arg(long)]
    pub execute: bool,
}

#[derive(Debug, Args)]
pub struct SwapArgs {
    #[command(flatten)]
    pub target: ActionTarget,

    /// Index of the token sold
    #[arg(long)]
    pub token_in: usize,

    /// Index of the token bought
    #[arg(long)]
    pub token_out: usize,

    /// Amount of token in, or of token out with --exact-out
    #[arg(long)]
    pub amount: String,

    #[arg(long)]
    pub exact_out: bool,
}

#[derive(Debug, Args)]
pub struct JoinArgs {
    #[command(flatten)]
    pub target: ActionTarget,

    /// Comma-separated amounts, one per pool token (unbalanced join)
    #[arg(long, value_delimiter = ',', conflicts_with = "bpt")]
    pub amounts: Option<Vec<String>>,

    /// Exact BPT to receive (proportional join)
    #[arg(long)]
    pub bpt: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExitArgs {
    #[command(flatten)]
    pub target: ActionTarget,

    /// Exact BPT to burn
    #[arg(long)]
    pub bpt: String,

    /// Receive only this token index instead of a proportional share
    #[arg(long)]
    pub token_out: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ArbArgs {
    /// Token spent and returned (address or deployment name)
    #[arg(long)]
    pub token_in: String,

    /// Intermediate token (address or deployment name)
    #[arg(long)]
    pub token_out: String,

    /// Human amount of token in
    #[arg(long)]
    pub amount: String,

    /// First venue router, defaults to DEX_A_ROUTER
    #[arg(long)]
    pub dex_a: Option<String>,

    /// Second venue router, defaults to DEX_B_ROUTER
    #[arg(long)]
    pub dex_b: Option<String>,

    /// Trade the spread if profitable
    #[arg(long)]
    pub execute: bool,
}
