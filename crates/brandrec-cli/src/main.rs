//! `brandrec`: rank television brands for a set of product attributes.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use brandrec_core::config::BrandrecConfig;
use brandrec_core::constants::CONFIG_ENV_VAR;
use clap::{Args, Parser, Subcommand};

/// Exit code for a rejected request (bad category or number).
pub const EXIT_INPUT_ERROR: u8 = 2;
/// Exit code for everything else: config, artifacts, inference.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Parser)]
#[command(name = "brandrec", version, about = "Recommend television brands from product attributes")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank brands for one set of attributes.
    Recommend(RecommendArgs),
    /// List the accepted values of every categorical attribute.
    Categories,
    /// Rank brands for every request in a JSON array of form submissions.
    Batch {
        /// JSON file holding an array of requests.
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
struct RecommendArgs {
    /// Star rating, e.g. 4 or 4.3.
    #[arg(long)]
    stars: String,
    /// Price as a whole number.
    #[arg(long)]
    price: String,
    /// Operating system, e.g. "Android".
    #[arg(long)]
    os: String,
    /// Speaker output, e.g. "20 W Speaker Output".
    #[arg(long)]
    speaker: String,
    /// Refresh rate, e.g. "60 Hz Refresh Rate".
    #[arg(long)]
    frequency: String,
    /// Picture quality, e.g. "Full HD".
    #[arg(long = "picture-quality")]
    picture_quality: String,
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    brandrec_observability::init_tracing(&config.observability);

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend(&config, args),
        Command::Categories => commands::categories(),
        Command::Batch { file } => commands::batch(&config, &file),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<BrandrecConfig> {
    match path {
        Some(path) => Ok(BrandrecConfig::from_file(path)?),
        None => {
            let config = BrandrecConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}
