//! PPIN Network Analysis
//!
//! Turns an [`InteractionTable`](ppin_common::InteractionTable) into an
//! undirected interaction graph and scores its nodes.
//!
//! # Overview
//!
//! - **Graph**: endpoint column detection and graph construction
//! - **Centrality**: degree, betweenness, closeness, eigenvector, PageRank
//! - **Layout**: seeded spring layout for network diagrams
//!
//! # Example
//!
//! ```
//! use ppin_network::{compute_all, CentralityOptions, InteractionGraph, Metric};
//!
//! let graph = InteractionGraph::from_edges(vec![("TP53", "MDM2"), ("TP53", "EP300")]);
//! let report = compute_all(&graph, &CentralityOptions::default());
//!
//! let degree = report.get(Metric::Degree).and_then(|r| r.as_ref().ok());
//! assert_eq!(degree.and_then(|s| s.get("TP53")), Some(1.0));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod centrality;
pub mod error;
pub mod graph;
pub mod layout;

pub use centrality::{
    compute, compute_all, CentralityOptions, CentralityReport, Metric, MetricOutcome,
    MetricResult, Scores,
};
pub use error::{CentralityError, SchemaError};
pub use graph::{EndpointSchema, InteractionGraph};
pub use layout::{spring_layout, Layout, LayoutOptions, Point};
