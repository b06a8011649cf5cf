use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Unit multiplier for a small drink.
pub const SMALL_MULTIPLIER: Decimal = dec!(1.0);

/// Unit multiplier for a medium drink.
pub const MEDIUM_MULTIPLIER: Decimal = dec!(1.5);

/// Unit multiplier for a large drink.
pub const LARGE_MULTIPLIER: Decimal = dec!(2.0);

/// Upper bound for any custom-size unit multiplier.
pub const MAX_CUSTOM_UNITS: Decimal = dec!(100);

/// Added when a dairy recipe is switched to a non-dairy milk.
pub const NON_DAIRY_SURCHARGE: Decimal = dec!(0.40);

/// Taken off any drink ordered decaf.
pub const DECAF_DISCOUNT: Decimal = dec!(0.40);

/// Symbol printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "£";

/// Format an amount to two places with the currency symbol.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY_SYMBOL, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(1.65)), "£1.65");
        assert_eq!(format_money(dec!(0.4)), "£0.40");
        assert_eq!(format_money(dec!(2)), "£2.00");
        assert_eq!(format_money(dec!(0.125)), "£0.13");
        assert_eq!(format_money(dec!(-0.4)), "£-0.40");
    }
}
