use alloy::primitives::U256;
use balancer_v3_scaffold::utils::{apply_slippage_down, apply_slippage_up, format_raw_amount, to_raw_amount};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slippage_bounds_bracket_the_expected_amount(amount in any::<u128>(), bps in 0u32..=5_000) {
        let amount = U256::from(amount);
        let min = apply_slippage_down(amount, bps);
        let max = apply_slippage_up(amount, bps);
        prop_assert!(min <= amount);
        prop_assert!(amount <= max);
        if bps == 0 {
            prop_assert_eq!(min, amount);
            prop_assert_eq!(max, amount);
        }
    }

    #[test]
    fn formatted_amounts_parse_back(raw in any::<u64>(), decimals in 0u8..=18) {
        let raw = U256::from(raw);
        let shown = format_raw_amount(raw, decimals);
        prop_assert_eq!(to_raw_amount(&shown, decimals).unwrap(), raw);
    }

    #[test]
    fn excess_precision_is_rejected(whole in 0u32..1_000_000, decimals in 0u8..=8) {
        let amount = format!("{}.{}1", whole, "0".repeat(decimals as usize));
        prop_assert!(to_raw_amount(&amount, decimals).is_err());
    }
}
