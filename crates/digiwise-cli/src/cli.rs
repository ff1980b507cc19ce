use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "digiwise", version, about = "Score DigiWise digital wellness assessments")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "DIGIWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a completed answer set
    Score {
        /// JSON file holding the answers
        answers: PathBuf,

        /// Catalog JSON file; defaults to the configured built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Examinee name shown in the text report
        #[arg(long, default_value = "Examinee")]
        name: String,
    },

    /// List built-in catalogs, or print one as JSON
    Catalog { id: Option<String> },

    /// Print the effective configuration
    Config {
        /// Write a default config file instead
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
