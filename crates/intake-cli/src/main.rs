use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::validate::Field;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Intake CLI - question previews, answer scoring and candidate reports", long_about = None)]
struct Cli {
    /// Settings file (defaults to $INTAKE_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the questions a candidate would be asked
    Questions {
        /// Comma-separated tech stack, e.g. "Python, SQL"
        #[arg(long)]
        stack: String,

        /// Years of experience
        #[arg(long, default_value_t = 0.0)]
        years: f64,

        /// Override the configured question cap
        #[arg(long)]
        max: Option<usize>,
    },
    /// List technologies with dedicated questions
    Technologies,
    /// Check a value with one of the field validators
    Validate {
        #[arg(value_enum)]
        field: Field,
        value: String,
    },
    /// Score a free-text answer
    Analyze {
        text: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summary statistics over stored candidates
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export stored candidates as a JSON bundle
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = commands::utils::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Questions { stack, years, max } => {
            commands::questions::run(&settings, &stack, years, max)?
        }
        Commands::Technologies => commands::technologies::run(&settings),
        Commands::Validate { field, value } => commands::validate::run(field, &value)?,
        Commands::Analyze { text, json } => commands::analyze::run(&settings, &text, json)?,
        Commands::Stats { json } => commands::report::stats(&settings, json).await?,
        Commands::Export { output } => commands::report::export(&settings, output.as_deref()).await?,
    }

    Ok(())
}
