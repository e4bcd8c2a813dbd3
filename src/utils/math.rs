//! Fixed-point amount conversion and slippage helpers

use alloy::primitives::{U256, utils::{format_units, parse_units}};
use rust_decimal::prelude::*;
use crate::{
    config::BPS_DENOMINATOR,
    errors::{ScaffoldError, ScaffoldResult},
};

/// Scale of an 18-decimal fraction read as a percentage.
const PERCENT_SCALE: u32 = 16;

/// Converts a human-entered decimal string into a raw token amount.
pub fn to_raw_amount(amount: &str, decimals: u8) -> ScaffoldResult<U256> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(ScaffoldError::invalid("amount", "empty"));
    }

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    let digits_ok = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !digits_ok(whole) || !digits_ok(fraction) {
        return Err(ScaffoldError::invalid("amount", format!("'{}' is not a decimal number", amount)));
    }
    if fraction.len() > decimals as usize {
        return Err(ScaffoldError::invalid(
            "amount",
            format!("'{}' has more than {} decimal places", amount, decimals),
        ));
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    parse_units(&normalized, decimals)
        .map(|units| units.get_absolute())
        .map_err(|e| ScaffoldError::invalid("amount", e.to_string()))
}

/// Raw amount rendered with the token's decimals, trailing zeros trimmed.
pub fn format_raw_amount(raw: U256, decimals: u8) -> String {
    match format_units(raw, decimals) {
        Ok(s) if s.contains('.') => {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            trimmed.to_string()
        }
        Ok(s) => s,
        Err(_) => raw.to_string(),
    }
}

/// Minimum acceptable amount: rounds down.
pub fn apply_slippage_down(amount: U256, slippage_bps: u32) -> U256 {
    let bps = slippage_bps.min(BPS_DENOMINATOR);
    amount.saturating_mul(U256::from(BPS_DENOMINATOR - bps)) / U256::from(BPS_DENOMINATOR)
}

/// Maximum acceptable amount: rounds up.
pub fn apply_slippage_up(amount: U256, slippage_bps: u32) -> U256 {
    let numerator = amount.saturating_mul(U256::from(BPS_DENOMINATOR + slippage_bps));
    let denominator = U256::from(BPS_DENOMINATOR);
    numerator.div_ceil(denominator)
}

/// 18-decimal fixed-point fraction (1e18 = 100%) as a percentage.
pub fn fixed_point_to_percent(value: U256) -> Decimal {
    i128::try_from(value)
        .ok()
        .and_then(|v| Decimal::try_from_i128_with_scale(v, PERCENT_SCALE).ok())
        .unwrap_or(Decimal::MAX)
}
