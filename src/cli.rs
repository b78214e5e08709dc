//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use depex::config::DEFAULT_CONFIG_FILE;
use depex::output::OutputMode;

/// depex - Group/artifact exclusions for dependency management
#[derive(Parser, Debug)]
#[command(
    name = "depex",
    version,
    about = "Group/artifact exclusions for dependency management",
    long_about = "Inspect dependency exclusions.\n\n\
                  An exclusion is a group:artifact pair a resolver leaves out of\n\
                  the graph. '*' in either position matches any value."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a group:artifact coordinate and show its normalized form
    Show {
        /// Coordinate to parse (e.g. org.springframework:spring-core)
        coordinate: String,
    },

    /// Check whether a candidate is excluded for a dependency
    Check {
        /// Dependency id the candidate is reached through
        dependency: String,

        /// Candidate group:artifact
        candidate: String,

        /// Exclusion config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// List configured exclusions
    List {
        /// Exclusion config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Show { coordinate }) => commands::show(&coordinate, output_mode),
        Some(Command::Check {
            dependency,
            candidate,
            config,
        }) => commands::check(&dependency, &candidate, &config, output_mode),
        Some(Command::List { config }) => commands::list(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("depex v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("depex v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'depex --help' for usage");
            }
            Ok(())
        },
    }
}
