//! Interaction graph construction
//!
//! ## Pipeline
//!
//! ```text
//! InteractionTable
//!        ↓  EndpointSchema::resolve()
//! (column A, column B)
//!        ↓  InteractionGraph::from_table()
//! InteractionGraph (undirected, simple, self-loops kept)
//! ```
//!
//! Nodes keep first-seen order: row order, endpoint A before endpoint B.
//! Centrality results and top-k tie breaking rely on that order.

use crate::error::SchemaError;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use ppin_common::InteractionTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Known endpoint column layouts, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointSchema {
    /// `OFFICIAL_SYMBOL_A` / `OFFICIAL_SYMBOL_B`
    #[serde(rename = "biogrid")]
    BioGrid,
    /// `preferredName_A` / `preferredName_B`
    String,
}

impl EndpointSchema {
    pub const ALL: [EndpointSchema; 2] = [EndpointSchema::BioGrid, EndpointSchema::String];

    /// The (A, B) column names for this schema
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            EndpointSchema::BioGrid => ("OFFICIAL_SYMBOL_A", "OFFICIAL_SYMBOL_B"),
            EndpointSchema::String => ("preferredName_A", "preferredName_B"),
        }
    }

    /// First schema whose both columns exist in `table`
    pub fn resolve(table: &InteractionTable) -> Result<Self, SchemaError> {
        Self::ALL
            .into_iter()
            .find(|schema| {
                let (a, b) = schema.columns();
                table.has_column(a) && table.has_column(b)
            })
            .ok_or_else(|| SchemaError::UnrecognizedColumns {
                found: table.columns().to_vec(),
            })
    }
}

/// Edge payload: how many table rows reported this interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Support {
    pub rows: usize,
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rows)
    }
}

/// Undirected, unweighted interaction graph keyed by participant name
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    graph: UnGraph<String, Support>,
    lookup: HashMap<String, NodeIndex>,
    schema: Option<EndpointSchema>,
}

impl InteractionGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an interaction table
    ///
    /// Fails if no endpoint schema matches or an endpoint cell is not a scalar.
    pub fn from_table(table: &InteractionTable) -> Result<Self, SchemaError> {
        let schema = EndpointSchema::resolve(table)?;
        let (column_a, column_b) = schema.columns();
        let (index_a, index_b) = match (table.column_index(column_a), table.column_index(column_b))
        {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(SchemaError::UnrecognizedColumns {
                    found: table.columns().to_vec(),
                })
            },
        };

        let mut graph = Self {
            schema: Some(schema),
            ..Self::default()
        };

        for row in table.rows() {
            let a = endpoint(row.get(index_a), row.label, column_a)?;
            let b = endpoint(row.get(index_b), row.label, column_b)?;
            graph.add_interaction(&a, &b);
        }

        debug!(
            ?schema,
            rows = table.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built interaction graph"
        );

        Ok(graph)
    }

    /// Build a graph directly from name pairs
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_interaction(a.as_ref(), b.as_ref());
        }
        graph
    }

    /// Add a node if it is not present yet
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.lookup.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.lookup.insert(name.to_string(), index);
        index
    }

    /// Add an undirected edge; repeated pairs collapse into one edge
    pub fn add_interaction(&mut self, a: &str, b: &str) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge].rows += 1,
            None => {
                self.graph.add_edge(a, b, Support { rows: 1 });
            },
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Schema the graph was built with, if it came from a table
    pub fn schema(&self) -> Option<EndpointSchema> {
        self.schema
    }

    /// Node names in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|i| self.graph[i].as_str())
    }

    /// Check whether a node exists
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Edges as name pairs in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
            )
        })
    }

    /// True when every node can reach every other node
    ///
    /// An empty graph is not connected.
    pub fn is_connected(&self) -> bool {
        petgraph::algo::connected_components(&self.graph) == 1
    }

    /// Number of connected components
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Index-based neighbor view for the centrality algorithms
    pub fn adjacency(&self) -> Adjacency {
        let n = self.graph.node_count();
        let mut neighbors = vec![Vec::new(); n];
        let mut self_loops = vec![0; n];

        for edge in self.graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            if a == b {
                neighbors[a].push(a);
                self_loops[a] += 1;
            } else {
                neighbors[a].push(b);
                neighbors[b].push(a);
            }
        }

        Adjacency {
            neighbors,
            self_loops,
        }
    }

    /// Graphviz DOT rendering of the graph
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}

/// Neighbor lists indexed by node position
///
/// A self-loop appears once in its node's neighbor list but counts twice
/// toward that node's degree.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbors: Vec<Vec<usize>>,
    self_loops: Vec<usize>,
}

impl Adjacency {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }

    /// Edge-end count, self-loops counted twice
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len() + self.self_loops[node]
    }
}

/// Read an endpoint cell as a node name
///
/// Any string, including the empty one, is taken verbatim.
fn endpoint(cell: Option<&Value>, row: &str, column: &str) -> Result<String, SchemaError> {
    match cell {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(SchemaError::InvalidEndpoint {
            row: row.to_string(),
            column: column.to_string(),
        }),
    }
}
