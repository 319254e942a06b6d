//! Command-line interface for docchat.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use commands::ask::AskArgs;

#[derive(Parser, Debug)]
#[command(name = "docchat", version, about = "Answer questions from a plain-text document")]
pub struct Cli {
    /// Configuration file (replaces .docchat/config.yaml and .docchat/local.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Corpus file to load
    #[arg(long, global = true, value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Alphabet size and vector dimension
    #[arg(long, global = true, value_name = "N")]
    pub dimensions: Option<usize>,

    /// Output as JSON
    #[arg(long, short, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Commands {
    /// Interactive question-and-answer session
    #[default]
    Chat,

    /// Answer a single question and exit
    Ask(AskArgs),

    /// List the chunks loaded from the corpus
    Chunks,

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// The command to run, defaulting to an interactive session
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };

        self.apply_overrides(&mut config);
        ConfigLoader::validate(&config).context("Invalid command-line override")?;
        Ok(config)
    }

    /// Apply `--corpus` and `--dimensions` on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(corpus) = &self.corpus {
            config.corpus.path.clone_from(corpus);
        }
        if let Some(dimensions) = self.dimensions {
            config.embedding.dimensions = dimensions;
        }
    }
}

/// Run the selected command.
pub fn run(command: &Commands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        Commands::Chat => commands::chat::execute(config),
        Commands::Ask(args) => commands::ask::execute(args, config, json_mode),
        Commands::Chunks => commands::chunks::execute(config, json_mode),
        Commands::Config => commands::config::execute(config, json_mode),
    }
}

/// Report a failed command and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold().for_stderr());
    }
    std::process::exit(1);
}
