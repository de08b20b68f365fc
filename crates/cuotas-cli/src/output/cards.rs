use colored::{Color, Colorize};
use serde_json::Value;

use cuotas_core::currency::{ArsFormatter, CurrencyFormatter};
use cuotas_core::types::PaymentPlan;

const HEADING: &str = "Opciones de Pago";
const EMPTY_PLACEHOLDER: &str = "Ingrese el monto para ver las opciones de pago";

/// Render the plans envelope as cards. Falls back to raw JSON when the
/// value is not a plan list.
pub fn print_cards(value: &Value) {
    let plans_value = value.get("plans").cloned().unwrap_or_else(|| value.clone());
    match serde_json::from_value::<Vec<PaymentPlan>>(plans_value) {
        Ok(plans) => render_plans(&plans),
        Err(_) => println!("{}", value),
    }
}

/// One card per plan: label, formatted monthly payment, description.
/// An empty list renders the placeholder instead.
pub fn render_plans(plans: &[PaymentPlan]) {
    if plans.is_empty() {
        println!("{}", EMPTY_PLACEHOLDER.dimmed());
        return;
    }

    println!("{}", HEADING.bold());
    for plan in plans {
        print_card(plan);
    }
}

fn print_card(plan: &PaymentPlan) {
    let amount = ArsFormatter.format(plan.monthly_payment);
    let width = [&plan.label, &amount, &plan.description]
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let accent = tier_color(plan.installments);
    let bar = "│".color(accent);
    let pad = |line: &str| format!("{:<width$}", line);

    println!("{}", format!("┌{}┐", "─".repeat(width + 2)).color(accent));
    println!("{} {} {}", bar, pad(&plan.label).bold(), bar);
    println!("{} {} {}", bar, pad(&amount), bar);
    println!("{} {} {}", bar, pad(&plan.description).dimmed(), bar);
    println!("{}", format!("└{}┘", "─".repeat(width + 2)).color(accent));
}

// Accent colour per tier: white, blue/cyan, green, then the grey family.
fn tier_color(installments: u32) -> Color {
    match installments {
        1 => Color::White,
        2 => Color::Cyan,
        3 => Color::Green,
        6 => Color::BrightBlack,
        9 => Color::Blue,
        _ => Color::Magenta,
    }
}
