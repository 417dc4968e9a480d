//! `ppin interactive` command implementation
//!
//! Prompt-driven session: ask for a protein and a database, run one analysis,
//! render it, and offer another round. Failures are shown and the session
//! returns to waiting for input.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::pipeline::{self, Analysis, AnalysisRequest};
use crate::progress::create_spinner;
use crate::render::{self, RenderOptions};
use crate::OutputFormat;
use colored::Colorize;
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Select, Text};
use ppin_sources::Database;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the session is in its request/render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Waiting for the next query
    Idle,
    /// A query is being fetched, analyzed and rendered
    Rendering { protein: String, database: Database },
}

impl ShellState {
    /// Idle → Rendering
    pub fn begin(self, protein: &str, database: Database) -> Self {
        debug!(from = ?self, %protein, %database, "Shell state → Rendering");
        ShellState::Rendering {
            protein: protein.to_string(),
            database,
        }
    }

    /// Rendering → Idle, whatever the outcome
    pub fn finish(self) -> Self {
        debug!(from = ?self, "Shell state → Idle");
        ShellState::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ShellState::Idle)
    }
}

/// Run the interactive session
pub async fn run(config: &Config) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(CliError::config(
            "Interactive mode needs a terminal. Use 'ppin analyze <PROTEIN>' instead",
        ));
    }

    println!("{}", "Protein-Protein Interaction (PPI) Network".cyan().bold());
    println!();

    let mut state = ShellState::Idle;
    loop {
        let Some((protein, database)) = prompt_query()? else {
            break;
        };

        state = state.begin(&protein, database);
        run_cycle(config, &protein, database).await;
        state = state.finish();

        match Confirm::new("Run another query?").with_default(true).prompt() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }

    debug!(idle = state.is_idle(), "Interactive session ended");
    Ok(())
}

/// Ask for protein id and database; `None` when the user cancels
fn prompt_query() -> Result<Option<(String, Database)>> {
    let protein = Text::new("Enter Protein ID:")
        .with_help_message("Gene symbol or database identifier, e.g. TP53")
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("Protein ID cannot be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt();
    let protein = match protein {
        Ok(p) => p.trim().to_string(),
        Err(e) if is_cancel(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let database = match Select::new("Select Database", Database::ALL.to_vec()).prompt() {
        Ok(db) => db,
        Err(e) if is_cancel(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some((protein, database)))
}

/// One request/compute/render cycle; errors are shown, not returned
async fn run_cycle(config: &Config, protein: &str, database: Database) {
    let request = AnalysisRequest::new(protein, database);
    let spinner = create_spinner(&format!("Retrieving PPI data from {database}..."));
    let result = pipeline::run(config, &request).await;
    spinner.finish_and_clear();

    print!("{}", render_outcome(result, &diagram_path(protein, database)));
}

/// Per-query diagram file in the working directory, e.g. `TP53-string.svg`
fn diagram_path(protein: &str, database: Database) -> PathBuf {
    let stem: String = protein
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!("{stem}-{}.svg", database.slug()))
}

/// Text for one cycle's outcome
///
/// A successful analysis also draws its diagram to `diagram`. Failures render
/// as a single line with no network or centrality output.
fn render_outcome(result: Result<Analysis>, diagram: &Path) -> String {
    let analysis = match result {
        Ok(analysis) => analysis,
        Err(e) => return format_failure(&e),
    };

    let (written, note) = match render::draw_diagram(&analysis, diagram) {
        Ok(()) => (Some(diagram), String::new()),
        Err(e) => {
            warn!(error = %e, path = %diagram.display(), "Failed to draw diagram");
            (None, format_failure(&e))
        },
    };

    let options = RenderOptions {
        diagram: written,
        diagram_hint: "not written",
        ..RenderOptions::default()
    };
    match render::render(&analysis, OutputFormat::Table, &options) {
        Ok(text) => format!("{note}{text}"),
        Err(e) => format_failure(&e),
    }
}

fn format_failure(error: &CliError) -> String {
    if error.is_notice() {
        format!("{} {}\n", "⚠".yellow(), error)
    } else {
        format!("{} {}\n", "✗".red(), error)
    }
}

fn is_cancel(error: &InquireError) -> bool {
    matches!(
        error,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
