//! Payment-plan computation: the pure transform from a principal amount
//! and the configured tier table to the ordered list of installment plans.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::currency::CurrencyFormatter;
use crate::error::CuotasError;
use crate::types::{Money, PaymentPlan, RateEntry};
use crate::CuotasResult;

const ONE_HUNDRED: Decimal = dec!(100);

/// Parse free-form principal-amount text.
///
/// Accepts plain decimal input (`1234.56`) as well as es-AR formatted text
/// (`$ 1.234,56`). Empty or malformed text parses as zero, which the
/// calculator renders as "nothing to show".
pub fn parse_principal(raw: &str) -> Money {
    let trimmed = raw.trim().trim_start_matches('$').trim_start();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    // With a comma present, '.' groups thousands and ',' marks decimals.
    let normalised = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalised.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Stateless payment-plan calculator.
///
/// Holds the fixed tier table and the display-currency strategy; every
/// computation is a pure function of the principal argument, so identical
/// inputs always produce identical results.
pub struct PaymentPlanCalculator {
    table: Vec<RateEntry>,
    formatter: Box<dyn CurrencyFormatter>,
}

impl std::fmt::Debug for PaymentPlanCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentPlanCalculator")
            .field("table", &self.table)
            .finish()
    }
}

impl PaymentPlanCalculator {
    pub fn new(
        table: Vec<RateEntry>,
        formatter: Box<dyn CurrencyFormatter>,
    ) -> CuotasResult<Self> {
        validate_table(&table)?;
        Ok(Self { table, formatter })
    }

    /// Entry point for input-change events: parse the raw text and
    /// recompute. Non-numeric text computes as zero.
    pub fn on_amount_changed(&self, raw: &str) -> Vec<PaymentPlan> {
        self.compute(parse_principal(raw))
    }

    /// Compute one plan per configured tier, in table order.
    ///
    /// A non-positive principal yields an empty list; absence of results
    /// is the "nothing to show" state, not a fault.
    pub fn compute(&self, principal: Money) -> Vec<PaymentPlan> {
        if principal <= Decimal::ZERO {
            return Vec::new();
        }

        self.table
            .iter()
            .map(|entry| {
                let total_amount = principal * (Decimal::ONE + entry.rate);
                let monthly_payment = total_amount / Decimal::from(entry.installments);
                let interest_amount = total_amount - principal;

                PaymentPlan {
                    installments: entry.installments,
                    rate: entry.rate,
                    label: entry.label.clone(),
                    total_amount,
                    monthly_payment,
                    interest_amount,
                    description: self.describe(entry, total_amount),
                }
            })
            .collect()
    }

    // The single-payment tier states only the rate; every other tier also
    // shows the formatted total.
    fn describe(&self, entry: &RateEntry, total_amount: Money) -> String {
        let pct = format!("{:.1}", entry.rate * ONE_HUNDRED);
        if entry.installments == 1 {
            format!("Includes {pct}% interest")
        } else {
            format!(
                "Total: {} | Interest: {pct}%",
                self.formatter.format(total_amount)
            )
        }
    }
}

fn validate_table(table: &[RateEntry]) -> CuotasResult<()> {
    for entry in table {
        if entry.installments == 0 {
            return Err(CuotasError::InvalidInput {
                field: "installments".into(),
                reason: format!("Tier '{}' has zero installments.", entry.label),
            });
        }
        if entry.rate.is_sign_negative() {
            return Err(CuotasError::InvalidInput {
                field: "rate".into(),
                reason: format!("Tier '{}' has a negative rate.", entry.label),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::ArsFormatter;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_and_formatted_amounts() {
        assert_eq!(parse_principal("1234.56"), dec!(1234.56));
        assert_eq!(parse_principal("  1000 "), dec!(1000));
        assert_eq!(parse_principal("$ 1.234,56"), dec!(1234.56));
        assert_eq!(parse_principal("1,5"), dec!(1.5));
    }

    #[test]
    fn malformed_text_parses_as_zero() {
        assert_eq!(parse_principal(""), Decimal::ZERO);
        assert_eq!(parse_principal("   "), Decimal::ZERO);
        assert_eq!(parse_principal("abc"), Decimal::ZERO);
        assert_eq!(parse_principal("12abc"), Decimal::ZERO);
    }

    #[test]
    fn rejects_zero_installment_tier() {
        let table = vec![RateEntry {
            installments: 0,
            rate: dec!(0.1),
            label: "broken".into(),
        }];
        let err = PaymentPlanCalculator::new(table, Box::new(ArsFormatter)).unwrap_err();
        match err {
            CuotasError::InvalidInput { field, .. } => assert_eq!(field, "installments"),
        }
    }

    #[test]
    fn rejects_negative_rate_tier() {
        let table = vec![RateEntry {
            installments: 3,
            rate: dec!(-0.1),
            label: "broken".into(),
        }];
        let err = PaymentPlanCalculator::new(table, Box::new(ArsFormatter)).unwrap_err();
        match err {
            CuotasError::InvalidInput { field, .. } => assert_eq!(field, "rate"),
        }
    }

    #[test]
    fn zero_rate_tier_charges_no_interest() {
        let table = vec![RateEntry {
            installments: 2,
            rate: Decimal::ZERO,
            label: "2 Cuotas de".into(),
        }];
        let calculator = PaymentPlanCalculator::new(table, Box::new(ArsFormatter)).unwrap();
        let plans = calculator.compute(dec!(500));
        assert_eq!(plans[0].total_amount, dec!(500));
        assert_eq!(plans[0].interest_amount, Decimal::ZERO);
        assert_eq!(plans[0].monthly_payment, dec!(250));
        assert_eq!(plans[0].description, "Total: $ 500,00 | Interest: 0.0%");
    }
}
