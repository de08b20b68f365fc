use clap::Args;
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, BufRead, Write};

use cuotas_core::config::RateConfig;
use cuotas_core::currency::ArsFormatter;
use cuotas_core::plans::{parse_principal, PaymentPlanCalculator};

use crate::input;
use crate::output::cards;

/// Arguments for payment-plan computation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PlansArgs {
    /// Principal amount (free text; `$`-prefixed and `1.234,56` values accepted)
    #[arg(long)]
    pub amount: Option<String>,

    /// Override the single-payment rate (e.g. 0.2 for 20%)
    #[arg(long)]
    pub rate_1: Option<Decimal>,

    /// Override the 2-installment rate
    #[arg(long)]
    pub rate_2: Option<Decimal>,

    /// Override the 3-installment rate
    #[arg(long)]
    pub rate_3: Option<Decimal>,

    /// Override the 6-installment rate
    #[arg(long)]
    pub rate_6: Option<Decimal>,

    /// Override the 9-installment rate
    #[arg(long)]
    pub rate_9: Option<Decimal>,

    /// Override the 12-installment rate
    #[arg(long)]
    pub rate_12: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// JSON input shape for `--input` and piped stdin. Decimal values are
/// strings; when `rates` is present it replaces the whole table.
#[derive(Deserialize)]
struct PlansRequest {
    amount: String,
    #[serde(default)]
    rates: Option<RateConfig>,
}

pub fn run_plans(args: PlansArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (raw_amount, config) = if let Some(ref path) = args.input {
        let request: PlansRequest = input::file::read_json(path)?;
        (request.amount, request.rates.unwrap_or_else(RateConfig::from_env))
    } else if let Some(data) = input::stdin::read_stdin()? {
        let request: PlansRequest = serde_json::from_value(data)?;
        (request.amount, request.rates.unwrap_or_else(RateConfig::from_env))
    } else {
        let raw = args
            .amount
            .clone()
            .ok_or("--amount is required (or provide --input)")?;
        (raw, config_from_args(&args))
    };

    let calculator = PaymentPlanCalculator::new(config.rate_table(), Box::new(ArsFormatter))?;
    let plans = calculator.on_amount_changed(&raw_amount);

    Ok(serde_json::json!({
        "principal": parse_principal(&raw_amount).to_string(),
        "plans": serde_json::to_value(&plans)?,
    }))
}

/// Line-oriented session: re-render the plan cards on every entered
/// amount, placeholder on invalid input. `q` or EOF exits.
pub fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let config = RateConfig::from_env();
    let calculator = PaymentPlanCalculator::new(config.rate_table(), Box::new(ArsFormatter))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} $ ", "Ingrese monto".bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let entered = line.trim();
        if entered.eq_ignore_ascii_case("q") {
            break;
        }

        cards::render_plans(&calculator.on_amount_changed(entered));
        println!();
    }

    Ok(())
}

fn config_from_args(args: &PlansArgs) -> RateConfig {
    let mut config = RateConfig::from_env();
    if let Some(rate) = args.rate_1 {
        config.rate_1 = rate;
    }
    if let Some(rate) = args.rate_2 {
        config.rate_2 = rate;
    }
    if let Some(rate) = args.rate_3 {
        config.rate_3 = rate;
    }
    if let Some(rate) = args.rate_6 {
        config.rate_6 = rate;
    }
    if let Some(rate) = args.rate_9 {
        config.rate_9 = rate;
    }
    if let Some(rate) = args.rate_12 {
        config.rate_12 = rate;
    }
    config
}
