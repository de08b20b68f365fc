//! Interest-rate configuration for the six plan tiers.
//!
//! Rates are read once at startup from `CUOTAS_RATE_*` environment
//! variables; a variable that is absent or fails to parse falls back
//! silently to the tier's documented default. The calculator receives the
//! resulting table explicitly and never reads the environment itself.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::env;

use crate::types::{Rate, RateEntry};

/// Default rate for the single-payment tier (`CUOTAS_RATE_1`).
const DEFAULT_RATE_1: Decimal = dec!(0.200);
/// Default rate for the 2-installment tier (`CUOTAS_RATE_2`).
const DEFAULT_RATE_2: Decimal = dec!(0.052);
/// Default rate for the 3-installment tier (`CUOTAS_RATE_3`).
const DEFAULT_RATE_3: Decimal = dec!(0.076);
/// Default rate for the 6-installment tier (`CUOTAS_RATE_6`).
const DEFAULT_RATE_6: Decimal = dec!(0.135);
/// Default rate for the 9-installment tier (`CUOTAS_RATE_9`).
const DEFAULT_RATE_9: Decimal = dec!(0.196);
/// Default rate for the 12-installment tier (`CUOTAS_RATE_12`).
const DEFAULT_RATE_12: Decimal = dec!(0.255);

/// Total interest rate per tier, one named field per installment count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    pub rate_1: Rate,
    pub rate_2: Rate,
    pub rate_3: Rate,
    pub rate_6: Rate,
    pub rate_9: Rate,
    pub rate_12: Rate,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            rate_1: DEFAULT_RATE_1,
            rate_2: DEFAULT_RATE_2,
            rate_3: DEFAULT_RATE_3,
            rate_6: DEFAULT_RATE_6,
            rate_9: DEFAULT_RATE_9,
            rate_12: DEFAULT_RATE_12,
        }
    }
}

impl RateConfig {
    /// Load rates from the environment, reading a `.env` file first if one
    /// is present. Missing or unparsable values fall back per field; this
    /// is a recovery policy, not a reported error.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            rate_1: rate_or_default("CUOTAS_RATE_1", DEFAULT_RATE_1),
            rate_2: rate_or_default("CUOTAS_RATE_2", DEFAULT_RATE_2),
            rate_3: rate_or_default("CUOTAS_RATE_3", DEFAULT_RATE_3),
            rate_6: rate_or_default("CUOTAS_RATE_6", DEFAULT_RATE_6),
            rate_9: rate_or_default("CUOTAS_RATE_9", DEFAULT_RATE_9),
            rate_12: rate_or_default("CUOTAS_RATE_12", DEFAULT_RATE_12),
        }
    }

    /// The ordered tier table. Table order is display order: 1, 2, 3, 6,
    /// 9, 12 payments, never sorted by rate.
    pub fn rate_table(&self) -> Vec<RateEntry> {
        vec![
            RateEntry {
                installments: 1,
                rate: self.rate_1,
                label: "En un pago".into(),
            },
            RateEntry {
                installments: 2,
                rate: self.rate_2,
                label: "2 Cuotas de".into(),
            },
            RateEntry {
                installments: 3,
                rate: self.rate_3,
                label: "3 Cuotas de".into(),
            },
            RateEntry {
                installments: 6,
                rate: self.rate_6,
                label: "6 Cuotas de".into(),
            },
            RateEntry {
                installments: 9,
                rate: self.rate_9,
                label: "9 Cuotas de".into(),
            },
            RateEntry {
                installments: 12,
                rate: self.rate_12,
                label: "12 Cuotas de".into(),
            },
        ]
    }
}

/// A rate must parse as a non-negative decimal; anything else counts as
/// absent and takes the default.
fn rate_or_default(var: &str, default: Rate) -> Rate {
    env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<Decimal>().ok())
        .filter(|r| !r.is_sign_negative())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_rates_match_documented_values() {
        let config = RateConfig::default();
        assert_eq!(config.rate_1, dec!(0.200));
        assert_eq!(config.rate_2, dec!(0.052));
        assert_eq!(config.rate_3, dec!(0.076));
        assert_eq!(config.rate_6, dec!(0.135));
        assert_eq!(config.rate_9, dec!(0.196));
        assert_eq!(config.rate_12, dec!(0.255));
    }

    #[test]
    fn rate_table_preserves_display_order() {
        let table = RateConfig::default().rate_table();
        let counts: Vec<u32> = table.iter().map(|e| e.installments).collect();
        assert_eq!(counts, vec![1, 2, 3, 6, 9, 12]);
        assert_eq!(table[0].label, "En un pago");
        assert_eq!(table[2].label, "3 Cuotas de");
    }

    // All environment mutation stays inside this one test; the default
    // tests above must not observe it.
    #[test]
    fn from_env_overrides_and_fallbacks() {
        let vars = [
            "CUOTAS_RATE_1",
            "CUOTAS_RATE_2",
            "CUOTAS_RATE_3",
            "CUOTAS_RATE_6",
            "CUOTAS_RATE_9",
            "CUOTAS_RATE_12",
        ];
        for var in vars {
            env::remove_var(var);
        }

        // Configuration absent: every tier takes its default.
        assert_eq!(RateConfig::from_env(), RateConfig::default());

        // A valid override applies to its tier only.
        env::set_var("CUOTAS_RATE_3", "0.10");
        let config = RateConfig::from_env();
        assert_eq!(config.rate_3, dec!(0.10));
        assert_eq!(config.rate_1, dec!(0.200));

        // Non-numeric and negative values fall back silently.
        env::set_var("CUOTAS_RATE_6", "not-a-number");
        env::set_var("CUOTAS_RATE_9", "-0.5");
        let config = RateConfig::from_env();
        assert_eq!(config.rate_6, dec!(0.135));
        assert_eq!(config.rate_9, dec!(0.196));

        for var in vars {
            env::remove_var(var);
        }
    }
}
