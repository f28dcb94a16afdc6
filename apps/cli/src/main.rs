//! dimcalc - Dimensional Formula Calculator
//!
//! Evaluates expressions such as `FORCE/AREA` to their dimensional formula
//! and inspects the built-in quantity table.

mod config;
mod logging;
mod output;
mod repl;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dimcalc_dimensions::{DimensionVector, Error, Evaluator, QuantityTable};

use crate::config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "dimcalc", version, about = "Dimensional formula calculator")]
struct Cli {
    /// Output format (overrides `output.format`)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (overrides `logging.level`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression, e.g. `MASS*ACCELERATION`
    Eval {
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
    /// Show the exponents of a dimensional formula, e.g. `M¹L⁻¹T⁻²`
    Parse { formula: String },
    /// Show the formula of a named quantity
    Lookup { name: String },
    /// List every known quantity
    List,
    /// Read expressions interactively from stdin
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }
    if cli.log_json {
        config.logging.json = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;
    tracing::debug!(command = ?cli.command, "Starting dimcalc");

    run(cli.command, &config)
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let table = QuantityTable::builtin();
    let format = config.output.format;

    match command {
        Command::Eval { expression } => {
            let expression = expression.join(" ");
            let eval = Evaluator::new(&table).evaluate(&expression)?;
            println!("{}", output::evaluation(&eval, format)?);
        }
        Command::Parse { formula } => {
            let dims = DimensionVector::parse(&formula);
            println!("{}", output::dimensions(dims, format)?);
        }
        Command::Lookup { name } => {
            let name = name.trim().to_uppercase();
            let formula = table
                .lookup(&name)
                .ok_or_else(|| Error::UnknownQuantity(name.clone()))?;
            println!("{}", output::quantity(&name, formula, format)?);
        }
        Command::List => {
            println!("{}", output::quantities(&table.entries(), format)?);
        }
        Command::Repl => {
            let evaluator = Evaluator::new(&table);
            let stdin = std::io::stdin();
            repl::run(
                &evaluator,
                &config.repl.prompt,
                format,
                stdin.lock(),
                std::io::stdout(),
            )?;
        }
    }

    Ok(())
}
