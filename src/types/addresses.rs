//! Canonical contract addresses

use alloy::primitives::{Address, address};

// Balancer v3 Vault, same address on every supported chain
pub const BALANCER_V3_VAULT: Address = address!("bA1333333333a1BA1108E8412f11850A5C319bA9");

// Uniswap Permit2, used by the v3 routers to pull tokens
pub const PERMIT2: Address = address!("000000000022D473030F116dDEE9F6B43aC78BA3");
