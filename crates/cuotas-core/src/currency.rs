//! Display-currency formatting, kept behind a trait so the arithmetic core
//! stays independent of locale conventions.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::types::Money;

/// Formats a monetary amount for display.
pub trait CurrencyFormatter {
    fn format(&self, amount: Money) -> String;
}

/// Argentine peso formatting: `$` symbol, `.` thousands grouping, decimal
/// comma, always two decimals (`$ 1.076,00`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ArsFormatter;

impl CurrencyFormatter for ArsFormatter {
    fn format(&self, amount: Money) -> String {
        let rounded = amount.round_dp(2);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let abs = rounded.abs();
        let units = abs.trunc().to_u128().unwrap_or_default();
        let cents = (abs.fract() * dec!(100)).to_u128().unwrap_or_default();

        format!(
            "{}$ {},{:02}",
            sign,
            units.to_formatted_string(&Locale::es_AR),
            cents
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_with_dots_and_uses_decimal_comma() {
        assert_eq!(ArsFormatter.format(dec!(1076)), "$ 1.076,00");
        assert_eq!(ArsFormatter.format(dec!(1234567.89)), "$ 1.234.567,89");
    }

    #[test]
    fn always_shows_two_decimals() {
        assert_eq!(ArsFormatter.format(dec!(0.5)), "$ 0,50");
        assert_eq!(ArsFormatter.format(dec!(12)), "$ 12,00");
    }

    #[test]
    fn rounds_to_cents() {
        // 358.666... rounds up to 358,67
        assert_eq!(ArsFormatter.format(dec!(1076) / dec!(3)), "$ 358,67");
    }

    #[test]
    fn negative_amounts_carry_the_sign() {
        assert_eq!(ArsFormatter.format(dec!(-1500.25)), "-$ 1.500,25");
    }
}
