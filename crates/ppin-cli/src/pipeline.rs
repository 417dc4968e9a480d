//! Fetch, build, score and lay out one protein's interaction network
//!
//! ```text
//! protein id ──► InteractionSource::fetch ──► InteractionTable
//!                                               │ empty → NoInteractions
//!                                               ▼
//!                                    InteractionGraph::from_table
//!                                               ▼
//!                               compute_all + spring_layout ──► Analysis
//! ```
//!
//! Every stage is awaited in sequence; nothing is kept between runs.

use crate::config::Config;
use crate::error::{CliError, Result};
use ppin_common::InteractionTable;
use ppin_network::{
    compute_all, spring_layout, CentralityOptions, CentralityReport, InteractionGraph, Layout,
    LayoutOptions,
};
use ppin_sources::{source_for, Database};
use tracing::{info, instrument};

/// What to analyze
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub protein: String,
    pub database: Database,
    pub centrality: CentralityOptions,
    pub layout: LayoutOptions,
}

impl AnalysisRequest {
    pub fn new(protein: impl Into<String>, database: Database) -> Self {
        Self {
            protein: protein.into(),
            database,
            centrality: CentralityOptions::default(),
            layout: LayoutOptions::default(),
        }
    }
}

/// Everything produced for one protein
#[derive(Debug, Clone)]
pub struct Analysis {
    pub protein: String,
    pub database: Database,
    pub table: InteractionTable,
    pub graph: InteractionGraph,
    pub centralities: CentralityReport,
    pub layout: Layout,
}

/// Run the full pipeline
///
/// Retrieval and schema failures abort the run. A successful query with no
/// rows is reported as [`CliError::NoInteractions`]. Individual centrality
/// failures are carried inside the report.
#[instrument(skip(config, request), fields(protein = %request.protein, database = %request.database))]
pub async fn run(config: &Config, request: &AnalysisRequest) -> Result<Analysis> {
    let protein = request.protein.trim();
    if protein.is_empty() {
        return Err(CliError::config("Protein identifier cannot be empty"));
    }

    let source = source_for(request.database, config.source_settings(), config.http_client()?)?;
    let table = source.fetch(protein).await?;

    if table.is_empty() {
        info!("Query returned no interactions");
        return Err(CliError::NoInteractions {
            protein: protein.to_string(),
            database: request.database,
        });
    }

    let graph = InteractionGraph::from_table(&table)?;
    let centralities = compute_all(&graph, &request.centrality);
    let layout = spring_layout(&graph, &request.layout);

    info!(
        rows = table.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        failed_metrics = centralities.failures().count(),
        "Analysis complete"
    );

    Ok(Analysis {
        protein: protein.to_string(),
        database: request.database,
        table,
        graph,
        centralities,
        layout,
    })
}
