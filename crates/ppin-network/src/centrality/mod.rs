//! Centrality engine
//!
//! Computes five node-importance metrics over an [`InteractionGraph`]. Each
//! metric runs on its own and reports its own outcome, so a metric that is
//! undefined for the graph (eigenvector centrality on a disconnected graph)
//! does not hide the others.
//!
//! | Metric      | Range  | Normalization                              |
//! |-------------|--------|--------------------------------------------|
//! | Degree      | [0, 1] | degree / (n - 1)                           |
//! | Betweenness | [0, 1] | 1 / ((n - 1)(n - 2)) over ordered pairs    |
//! | Closeness   | [0, 1] | Wasserman-Faust reachability scaling       |
//! | Eigenvector | [0, 1] | unit L2 norm                               |
//! | PageRank    | [0, 1] | scores sum to 1                            |

mod betweenness;
mod closeness;
mod degree;
mod eigenvector;
mod pagerank;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::degree_centrality;
pub use eigenvector::eigenvector_centrality;
pub use pagerank::pagerank;

use crate::error::CentralityError;
use crate::graph::InteractionGraph;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use tracing::{debug, info};

/// Result of a single metric
pub type MetricResult = std::result::Result<Scores, CentralityError>;

/// The five reported centrality metrics, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Degree,
    Betweenness,
    Closeness,
    Eigenvector,
    #[serde(rename = "pagerank")]
    PageRank,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Degree,
        Metric::Betweenness,
        Metric::Closeness,
        Metric::Eigenvector,
        Metric::PageRank,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Metric::Degree => "Degree Centrality",
            Metric::Betweenness => "Betweenness Centrality",
            Metric::Closeness => "Closeness Centrality",
            Metric::Eigenvector => "Eigenvector Centrality",
            Metric::PageRank => "PageRank Centrality",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tuning for the iterative metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralityOptions {
    /// PageRank damping factor, strictly between 0 and 1
    pub damping: f64,
    /// Per-node L1 convergence tolerance
    pub tolerance: f64,
    /// Power-iteration cap
    pub max_iterations: usize,
}

impl Default for CentralityOptions {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1.0e-6,
            max_iterations: 100,
        }
    }
}

/// Node scores in graph insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scores {
    entries: Vec<(String, f64)>,
}

impl Scores {
    /// Pair node names with values; both in graph node order
    pub(crate) fn from_values(graph: &InteractionGraph, values: Vec<f64>) -> Self {
        Self {
            entries: graph.node_names().map(str::to_string).zip(values).collect(),
        }
    }

    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of a node
    pub fn get(&self, node: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == node)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Sum over all nodes
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, score)| score).sum()
    }

    /// The `k` highest scores, descending; ties keep node order
    pub fn top(&self, k: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

/// Outcome of one metric
#[derive(Debug, Clone)]
pub struct MetricOutcome {
    pub metric: Metric,
    pub result: MetricResult,
}

/// Outcomes for all five metrics, in [`Metric::ALL`] order
#[derive(Debug, Clone)]
pub struct CentralityReport {
    outcomes: Vec<MetricOutcome>,
}

impl CentralityReport {
    pub fn iter(&self) -> impl Iterator<Item = &MetricOutcome> {
        self.outcomes.iter()
    }

    /// Outcome of a specific metric
    pub fn get(&self, metric: Metric) -> Option<&MetricResult> {
        self.outcomes
            .iter()
            .find(|o| o.metric == metric)
            .map(|o| &o.result)
    }

    /// Metrics that failed
    pub fn failures(&self) -> impl Iterator<Item = &CentralityError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }
}

/// Compute a single metric
pub fn compute(metric: Metric, graph: &InteractionGraph, options: &CentralityOptions) -> MetricResult {
    match metric {
        Metric::Degree => degree_centrality(graph),
        Metric::Betweenness => betweenness_centrality(graph),
        Metric::Closeness => closeness_centrality(graph),
        Metric::Eigenvector => eigenvector_centrality(graph, options),
        Metric::PageRank => pagerank(graph, options),
    }
}

/// Compute every metric independently
pub fn compute_all(graph: &InteractionGraph, options: &CentralityOptions) -> CentralityReport {
    let outcomes = Metric::ALL
        .into_iter()
        .map(|metric| {
            let result = compute(metric, graph, options);
            match &result {
                Ok(scores) => debug!(%metric, nodes = scores.len(), "Computed centrality"),
                Err(e) => info!(%metric, error = %e, "Centrality metric failed"),
            }
            MetricOutcome { metric, result }
        })
        .collect();

    CentralityReport { outcomes }
}
