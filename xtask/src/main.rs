//! Build automation tasks for PPIN
//!
//! - `generate-cli-docs`: render the CLI reference to Markdown

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for PPIN", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<ppin_cli::Cli>();

    let content = format!(
        r#"# PPIN CLI Reference

Generated from the CLI definitions on {}.

## Overview

`ppin` fetches protein-protein interactions for a protein from BioGRID or
STRING, builds the interaction network and reports degree, betweenness,
closeness, eigenvector and PageRank centrality.

## Quick Start

```bash
# BioGRID needs an access key (https://webservice.thebiogrid.org/)
export BIOGRID_ACCESS_KEY=...

# Analyze TP53 with BioGRID
ppin analyze TP53

# Use STRING and write the network diagram
ppin analyze TP53 --database string --diagram tp53.svg --open

# Full report as JSON
ppin analyze TP53 --database string --format json --output tp53.json

# Prompt-driven session
ppin interactive
```

## Exit Codes

| Code | Meaning                                   |
|------|-------------------------------------------|
| 0    | Success                                   |
| 1    | Retrieval, schema or I/O failure          |
| 2    | Usage error                               |
| 3    | Query succeeded but found no interactions |

## Commands

{}

## Environment Variables

{}

---

*Generated by `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown,
        ppin_cli::config::ENV_VARS
            .iter()
            .map(|(name, description)| format!("- `{name}` - {description}"))
            .collect::<Vec<_>>()
            .join("\n")
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
