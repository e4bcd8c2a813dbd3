//! Balancer v3 scaffold - pool explorer, swap/join/exit client and arbitrage harness
//!
//! Reads Balancer v3 pools into a single view-model, simulates swaps and
//! liquidity changes through the router's query functions, plans the
//! Permit2 approvals they need, and executes them. Also carries a
//! two-venue arbitrage harness and a client for the public hooks catalog.

pub mod config;
pub mod contracts;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod validation;
pub mod actions;
pub mod arbitrage;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{ScaffoldError, ScaffoldResult};
pub use types::*;

// Type alias for the read provider; writes wrap it with a wallet
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
