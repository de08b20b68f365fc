use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.076 = 7.6%). Never as percentages.
pub type Rate = Decimal;

/// A configured installment tier: payment count, total interest rate over
/// the life of the plan, and the display label for its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Number of payments the total is divided across.
    pub installments: u32,
    /// Total interest over the life of the plan, not per period.
    pub rate: Rate,
    /// Display name, e.g. "3 Cuotas de".
    pub label: String,
}

/// One computed payment plan.
///
/// Ephemeral: recomputed on every amount change, never cached or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub installments: u32,
    pub rate: Rate,
    pub label: String,
    /// principal × (1 + rate)
    pub total_amount: Money,
    /// total_amount / installments
    pub monthly_payment: Money,
    /// total_amount − principal
    pub interest_amount: Money,
    /// Human-readable summary for the card footer.
    pub description: String,
}
