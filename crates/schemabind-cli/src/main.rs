//! schemabind CLI - XML binding source generator
//!
//! Commands:
//! - `schemabind generate` - Generate Java classes and descriptors from a type model
//! - `schemabind strategies` - List the conflict strategies a configuration registers
//! - `schemabind check` - Validate a schemabind.toml configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod dialog;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "schemabind")]
#[command(author, version, about = "XML binding source generator", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from a JSON type model
    Generate {
        /// Path to the type model (one type or an array of types)
        #[arg(short, long)]
        model: PathBuf,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: PathBuf,

        /// Path to schemabind.toml (default: built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Conflict strategy to use instead of the configured one
        #[arg(short, long)]
        strategy: Option<String>,

        /// Overwrite existing files without consulting the strategy
        #[arg(short, long)]
        force: bool,
    },

    /// List the conflict strategies registered by a configuration
    Strategies {
        /// Path to schemabind.toml (default: built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a schemabind.toml configuration
    Check {
        /// Path to schemabind.toml
        #[arg(short, long, default_value = "schemabind.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            output,
            config,
            strategy,
            force,
        } => {
            let mut config = config::load(config.as_deref())?;
            if let Some(strategy) = strategy {
                config.conflict_strategy = strategy;
            }
            logging::init(&config.log_level, cli.verbose);

            let options = generate::GenerateOptions {
                model: &model,
                output: &output,
                force,
            };
            let mut dialog = dialog::TerminalDialog::stdio();
            let summary = generate::run(&options, config, &mut dialog)?;
            summary.print(&output);
        }
        Commands::Strategies { config } => {
            let config = config::load(config.as_deref())?;
            logging::init(&config.log_level, cli.verbose);
            check::list_strategies(&config)?;
        }
        Commands::Check { config } => {
            logging::init(logging::DEFAULT_LEVEL, cli.verbose);
            check::run(&config)?;
        }
    }

    Ok(())
}
