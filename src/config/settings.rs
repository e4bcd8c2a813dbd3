//! Scaffold configuration settings and environment variable handling

use alloy::primitives::Address;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use crate::types::{BALANCER_V3_VAULT, PERMIT2};

// Configuration constants
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50; // 0.5%
pub const MAX_SLIPPAGE_BPS: u32 = 5_000; // 50%
pub const BPS_DENOMINATOR: u32 = 10_000;

// Transaction constants
pub const DEFAULT_DEADLINE_SECS: u64 = 1_200;
pub const CONFIRMATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PERMIT2_EXPIRATION_SECS: u64 = 30 * 24 * 60 * 60;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub private_key: Option<String>,
    pub network: String,
    // Balancer v3 contracts
    pub vault: Address,
    pub router: Option<Address>,
    pub permit2: Address,
    // Action settings
    pub slippage_bps: u32,
    pub deadline_secs: u64,
    pub confirmation_timeout_secs: u64,
    pub permit2_expiration_secs: u64,
    // Hooks catalog
    pub hooks_catalog_url: Option<String>,
    // Hardhat deploy output
    pub deployments_path: Option<PathBuf>,
    // Arbitrage harness
    pub dex_a_router: Option<Address>,
    pub dex_b_router: Option<Address>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            private_key: None,
            network: "localhost".to_string(),
            vault: BALANCER_V3_VAULT,
            router: None,
            permit2: PERMIT2,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_secs: DEFAULT_DEADLINE_SECS,
            confirmation_timeout_secs: CONFIRMATION_TIMEOUT_SECS,
            permit2_expiration_secs: DEFAULT_PERMIT2_EXPIRATION_SECS,
            hooks_catalog_url: None,
            deployments_path: None,
            dex_a_router: None,
            dex_b_router: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: env::var("RPC_URL").unwrap_or(defaults.rpc_url),
            private_key: env::var("PRIVATE_KEY").ok(),
            network: env::var("NETWORK").unwrap_or(defaults.network),
            vault: env_address("VAULT_ADDRESS").unwrap_or(defaults.vault),
            router: env_address("ROUTER_ADDRESS"),
            permit2: env_address("PERMIT2_ADDRESS").unwrap_or(defaults.permit2),
            slippage_bps: env::var("SLIPPAGE_BPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SLIPPAGE_BPS)
                .min(MAX_SLIPPAGE_BPS),
            deadline_secs: env::var("DEADLINE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DEADLINE_SECS),
            confirmation_timeout_secs: env::var("CONFIRMATION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONFIRMATION_TIMEOUT_SECS),
            permit2_expiration_secs: env::var("PERMIT2_EXPIRATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PERMIT2_EXPIRATION_SECS),
            hooks_catalog_url: env::var("HOOKS_CATALOG_URL").ok(),
            deployments_path: env::var("DEPLOYMENTS_PATH").ok().map(PathBuf::from),
            dex_a_router: env_address("DEX_A_ROUTER"),
            dex_b_router: env_address("DEX_B_ROUTER"),
        }
    }

    /// Clamp a per-invocation slippage override the same way the env value is.
    pub fn with_slippage_bps(mut self, bps: Option<u32>) -> Self {
        if let Some(bps) = bps {
            self.slippage_bps = bps.min(MAX_SLIPPAGE_BPS);
        }
        self
    }
}

fn env_address(key: &str) -> Option<Address> {
    env::var(key).ok().and_then(|s| Address::from_str(s.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slippage_override_is_clamped() {
        let config = Config::default().with_slippage_bps(Some(20_000));
        assert_eq!(config.slippage_bps, MAX_SLIPPAGE_BPS);

        let config = Config::default().with_slippage_bps(None);
        assert_eq!(config.slippage_bps, DEFAULT_SLIPPAGE_BPS);
    }

    #[test]
    fn defaults_point_at_canonical_contracts() {
        let config = Config::default();
        assert_eq!(config.vault, BALANCER_V3_VAULT);
        assert_eq!(config.permit2, PERMIT2);
        assert!(config.router.is_none());
    }
}
