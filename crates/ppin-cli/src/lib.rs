//! PPIN CLI Library
//!
//! Command-line interface for protein-protein interaction network analysis.
//!
//! # Overview
//!
//! - **One-shot analysis**: fetch, build, score and render (`ppin analyze`)
//! - **Interactive session**: prompt-driven query loop (`ppin interactive`)
//! - **Configuration**: show resolved settings (`ppin config show`)

pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use ppin_sources::{Database, DEFAULT_BIOGRID_URL, DEFAULT_STRING_URL, HUMAN_TAXONOMY_ID};
use std::path::PathBuf;

/// PPIN - Protein-Protein Interaction Network analyzer
#[derive(Parser, Debug)]
#[command(name = "ppin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// BioGRID interaction search endpoint
    #[arg(long, env = "PPIN_BIOGRID_URL", default_value = DEFAULT_BIOGRID_URL, global = true)]
    pub biogrid_url: String,

    /// STRING network endpoint
    #[arg(long, env = "PPIN_STRING_URL", default_value = DEFAULT_STRING_URL, global = true)]
    pub string_url: String,

    /// NCBI taxonomy id of the organism to query
    #[arg(long, env = "PPIN_SPECIES", default_value_t = HUMAN_TAXONOMY_ID, global = true)]
    pub species: u32,

    /// BioGRID access key
    #[arg(long, env = "BIOGRID_ACCESS_KEY", hide_env_values = true, global = true)]
    pub biogrid_access_key: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "PPIN_HTTP_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Print the CLI reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch interactions for a protein and report network centralities
    Analyze(AnalyzeArgs),

    /// Prompt for proteins and databases in a loop
    Interactive,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `ppin analyze`
#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Protein identifier (gene symbol or database id), e.g. TP53
    pub protein: String,

    /// Interaction database to query (biogrid, string)
    #[arg(short, long, default_value = "biogrid")]
    pub database: Database,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interaction rows shown in the table view (0 shows all)
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Entries listed per centrality metric
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// PageRank damping factor, between 0 and 1 exclusive
    #[arg(long, default_value_t = 0.85, value_parser = parse_damping)]
    pub damping: f64,

    /// Write the network diagram as SVG
    #[arg(long)]
    pub diagram: Option<PathBuf>,

    /// Open the diagram in the system viewer after writing it
    #[arg(long, requires = "diagram")]
    pub open: bool,
}

/// Output formats for `ppin analyze`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Interaction table followed by the summary and centrality columns
    Table,
    /// Full report as JSON
    Json,
    /// Raw interaction table as CSV
    Csv,
    /// Raw interaction table as TSV
    Tsv,
    /// Interaction graph in Graphviz DOT
    Dot,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show all configuration
    Show,
}

fn parse_damping(value: &str) -> std::result::Result<f64, String> {
    let damping: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if damping > 0.0 && damping < 1.0 {
        Ok(damping)
    } else {
        Err(format!("damping must be between 0 and 1 exclusive, got {damping}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["ppin", "analyze", "TP53"]).unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };

        assert_eq!(args.protein, "TP53");
        assert_eq!(args.database, Database::BioGrid);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.top, 5);
        assert_eq!(args.damping, 0.85);
    }

    #[test]
    fn test_analyze_string_database() {
        let cli = Cli::try_parse_from(["ppin", "analyze", "TP53", "--database", "STRING"]).unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.database, Database::String);
    }

    #[test]
    fn test_rejects_unknown_database() {
        let err = Cli::try_parse_from(["ppin", "analyze", "TP53", "-d", "intact"]).unwrap_err();
        assert!(err.to_string().contains("Unknown database 'intact'"));
    }

    #[test]
    fn test_damping_bounds() {
        assert_eq!(parse_damping("0.5"), Ok(0.5));
        assert!(parse_damping("1").is_err());
        assert!(parse_damping("0").is_err());
        assert!(parse_damping("abc").is_err());
    }

    #[test]
    fn test_open_requires_diagram() {
        assert!(Cli::try_parse_from(["ppin", "analyze", "TP53", "--open"]).is_err());
    }
}
