use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use calcpoc::commands::{run_batch, run_calc, run_demo, run_eval, run_sum};
use calcpoc::core::{load_config, resolve_config_dir};
use calcpoc::models::{Operation, OutputFormat};

/// calcpoc - integer calculator for exercising a CI pipeline
#[derive(Parser)]
#[command(name = "calcpoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides calcpoc.toml)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Directory containing calcpoc.toml (defaults to current directory)
    #[arg(short = 'C', long = "dir", global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstration banner with sample calculations
    Demo {
        /// Wait for Enter before exiting
        #[arg(long)]
        pause: bool,
    },

    /// Apply a single operation
    Calc {
        /// Operation to apply
        #[arg(value_enum)]
        operation: Operation,

        /// Operands (one for cube, two otherwise)
        #[arg(allow_negative_numbers = true, num_args = 1..=2, required = true)]
        operands: Vec<i32>,
    },

    /// Evaluate an expression such as "10 / 3" or "cube -2"
    Eval {
        /// Expression to evaluate
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Sum a list of numbers
    Sum {
        /// Values to sum
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Evaluate a file with one expression per line
    Batch {
        /// Path to the expressions file
        file: PathBuf,

        /// Stop at the first line that fails
        #[arg(long)]
        stop_on_error: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging; RUST_LOG takes precedence over --verbose
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dir = resolve_config_dir(cli.dir)?;
    let pause = matches!(cli.command, Commands::Demo { pause: true });
    let config = load_config(&dir, cli.format, pause)
        .with_context(|| format!("Failed to load configuration from {}", dir.display()))?;

    match cli.command {
        Commands::Demo { .. } => run_demo(&config)?,
        Commands::Calc {
            operation,
            operands,
        } => {
            run_calc(&config, operation, operands)?;
        }
        Commands::Eval { expression } => {
            run_eval(&config, &expression)?;
        }
        Commands::Sum { values } => {
            run_sum(&config, &values)?;
        }
        Commands::Batch {
            file,
            stop_on_error,
        } => {
            run_batch(&config, &file, stop_on_error)?;
        }
    }

    Ok(())
}
