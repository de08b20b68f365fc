mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::plans::PlansArgs;

/// Installment payment-plan calculator
#[derive(Parser)]
#[command(
    name = "cuotas",
    version,
    about = "Installment payment-plan calculator",
    long_about = "Computes fixed installment plans (1, 2, 3, 6, 9 and 12 payments) for a \
                  principal amount with decimal precision, formatted as Argentine pesos. \
                  Rates come from CUOTAS_RATE_* environment variables, with documented \
                  defaults when unset."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute payment plans for a principal amount
    Plans(PlansArgs),
    /// Recompute and render plans on every entered amount
    Interactive,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Cards,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Plans(args) => commands::plans::run_plans(args),
        Commands::Interactive => match commands::plans::run_interactive() {
            Ok(()) => return,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
        },
        Commands::Version => {
            println!("cuotas {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
