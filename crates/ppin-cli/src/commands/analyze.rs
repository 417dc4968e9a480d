//! `ppin analyze` command implementation
//!
//! One non-interactive fetch/build/score/render cycle.

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{self, AnalysisRequest};
use crate::progress::create_spinner;
use crate::render::{self, RenderOptions};
use crate::AnalyzeArgs;
use colored::Colorize;
use tracing::{info, warn};

/// Run the analyze command
pub async fn run(config: &Config, args: &AnalyzeArgs) -> Result<()> {
    info!(protein = %args.protein, database = %args.database, format = ?args.format, "Running analyze command");

    let mut request = AnalysisRequest::new(args.protein.as_str(), args.database);
    request.centrality.damping = args.damping;

    let spinner = create_spinner(&format!(
        "Querying {} for {}...",
        args.database, args.protein
    ));
    let result = pipeline::run(config, &request).await;
    spinner.finish_and_clear();
    let analysis = result?;

    if let Some(path) = &args.diagram {
        render::write_diagram(&analysis, path)?;
        if args.open {
            if let Err(e) = open::that(path) {
                warn!(error = %e, path = %path.display(), "Failed to open diagram");
                eprintln!("{} Could not open diagram: {}", "✗".red(), e);
            }
        }
    }

    let options = RenderOptions {
        rows: args.rows,
        top: args.top,
        diagram: args.diagram.as_deref(),
        ..RenderOptions::default()
    };
    let rendered = render::render(&analysis, args.format, &options)?;
    render::output(&rendered, args.output.as_deref())
}
