//! Analysis report rendering
//!
//! The terminal view mirrors the two-column layout: network information on
//! the left, per-metric top-k lists on the right. The JSON form carries the
//! same content plus the full score maps and node positions.

use crate::pipeline::Analysis;
use crate::render::RenderOptions;
use chrono::{SecondsFormat, Utc};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Table};
use ppin_network::{CentralityError, Metric, MetricOutcome, Scores};
use ppin_sources::Database;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Two-column summary: network information | centrality measures
pub fn format_two_column(analysis: &Analysis, options: &RenderOptions<'_>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["PPI Data Information", "Centrality Measures"]);

    table.add_row(vec![
        Cell::new(network_information(analysis, options.diagram, options.diagram_hint)),
        Cell::new(centrality_measures(analysis, options.top)),
    ]);

    format!("{table}\n")
}

fn network_information(analysis: &Analysis, diagram: Option<&Path>, hint: &str) -> String {
    let graph = &analysis.graph;
    let mut lines = vec![
        format!("Protein: {}", analysis.protein),
        format!("Database: {}", analysis.database),
        format!("Interactions retrieved: {}", analysis.table.len()),
        String::new(),
        format!("Number of edges: {}", graph.edge_count()),
        format!("Number of nodes: {}", graph.node_count()),
        format!("Connected components: {}", graph.component_count()),
    ];

    if let Some(schema) = graph.schema() {
        let (a, b) = schema.columns();
        lines.push(format!("Endpoint columns: {a} / {b}"));
    }

    lines.push(String::new());
    match diagram {
        Some(path) => lines.push(format!("Diagram: {}", path.display())),
        None => lines.push(format!("Diagram: {hint}")),
    }

    lines.join("\n")
}

fn centrality_measures(analysis: &Analysis, top: usize) -> String {
    let blocks: Vec<String> = analysis
        .centralities
        .iter()
        .map(|outcome| {
            let mut block = vec![outcome.metric.name().to_string()];
            match &outcome.result {
                Ok(scores) => {
                    for (rank, (node, score)) in scores.top(top).into_iter().enumerate() {
                        block.push(format!("  {}. {node:<12} {score:.6}", rank + 1));
                    }
                },
                Err(e) => block.push(format!("  ✗ {}", failure_reason(e))),
            }
            block.join("\n")
        })
        .collect();

    blocks.join("\n\n")
}

/// Short failure text for the metric column
fn failure_reason(error: &CentralityError) -> String {
    match error {
        CentralityError::EmptyGraph { .. } => "undefined for an empty graph".to_string(),
        CentralityError::Undefined { reason, .. } => format!("undefined: {reason}"),
        CentralityError::NonConvergence { iterations, .. } => {
            format!("did not converge in {iterations} iterations")
        },
        CentralityError::InvalidParameter { name, value, .. } => {
            format!("invalid {name} = {value}")
        },
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    protein: &'a str,
    database: Database,
    generated_at: String,
    summary: JsonSummary,
    centralities: Vec<JsonMetric<'a>>,
    layout: Map<String, Value>,
    interactions: Vec<Map<String, Value>>,
}

#[derive(Serialize)]
struct JsonSummary {
    rows: usize,
    nodes: usize,
    edges: usize,
    components: usize,
    schema: Option<ppin_network::EndpointSchema>,
}

#[derive(Serialize)]
struct JsonMetric<'a> {
    metric: Metric,
    name: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top: Vec<JsonRank<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<&'a Scores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonRank<'a> {
    node: &'a str,
    score: f64,
}

impl<'a> JsonMetric<'a> {
    fn from_outcome(outcome: &'a MetricOutcome, top: usize) -> Self {
        match &outcome.result {
            Ok(scores) => Self {
                metric: outcome.metric,
                name: outcome.metric.name(),
                status: "ok",
                top: scores
                    .top(top)
                    .into_iter()
                    .map(|(node, score)| JsonRank { node, score })
                    .collect(),
                scores: Some(scores),
                error: None,
            },
            Err(e) => Self {
                metric: outcome.metric,
                name: outcome.metric.name(),
                status: "failed",
                top: Vec::new(),
                scores: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Full report as pretty JSON
pub fn format_as_json(analysis: &Analysis, top: usize) -> serde_json::Result<String> {
    let graph = &analysis.graph;

    let layout = analysis
        .layout
        .nodes
        .iter()
        .map(|(name, point)| (name.clone(), json!({"x": point.x, "y": point.y})))
        .collect();

    let interactions = analysis
        .table
        .rows()
        .map(|row| {
            let mut record = Map::new();
            record.insert("index".to_string(), Value::String(row.label.to_string()));
            for (column, value) in analysis.table.columns().iter().zip(row.values()) {
                record.insert(column.clone(), value.clone());
            }
            record
        })
        .collect();

    let report = JsonReport {
        protein: &analysis.protein,
        database: analysis.database,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        summary: JsonSummary {
            rows: analysis.table.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: graph.component_count(),
            schema: graph.schema(),
        },
        centralities: analysis
            .centralities
            .iter()
            .map(|outcome| JsonMetric::from_outcome(outcome, top))
            .collect(),
        layout,
        interactions,
    };

    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
