//! Error types for graph construction and centrality analysis

use crate::centrality::Metric;
use thiserror::Error;

/// The interaction table cannot be read as an edge list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Neither known endpoint column pair is present
    #[error(
        "No recognized interaction columns. Expected (OFFICIAL_SYMBOL_A, OFFICIAL_SYMBOL_B) or (preferredName_A, preferredName_B), found [{}]",
        found.join(", ")
    )]
    UnrecognizedColumns { found: Vec<String> },

    /// An endpoint cell is null or not a scalar
    #[error("Row '{row}' has no usable identifier in column '{column}'")]
    InvalidEndpoint { row: String, column: String },
}

/// A single centrality metric could not be computed
///
/// Each metric fails independently; the other metrics are still reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CentralityError {
    #[error("{metric} is undefined for a graph with no nodes")]
    EmptyGraph { metric: Metric },

    #[error("{metric} is undefined for this graph: {reason}")]
    Undefined { metric: Metric, reason: String },

    #[error("{metric} did not converge within {iterations} iterations")]
    NonConvergence { metric: Metric, iterations: usize },

    #[error("{metric} parameter {name} = {value} is out of range")]
    InvalidParameter {
        metric: Metric,
        name: &'static str,
        value: f64,
    },
}

impl CentralityError {
    /// Metric that failed
    pub fn metric(&self) -> Metric {
        match self {
            CentralityError::EmptyGraph { metric }
            | CentralityError::Undefined { metric, .. }
            | CentralityError::NonConvergence { metric, .. }
            | CentralityError::InvalidParameter { metric, .. } => *metric,
        }
    }
}
