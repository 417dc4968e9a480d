use super::{Metric, MetricResult, Scores};
use crate::error::CentralityError;
use crate::graph::InteractionGraph;

/// Degree centrality: degree / (n - 1)
///
/// A single isolated node scores 0.
pub fn degree_centrality(graph: &InteractionGraph) -> MetricResult {
    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::EmptyGraph {
            metric: Metric::Degree,
        });
    }

    let adjacency = graph.adjacency();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    let values = (0..n)
        .map(|node| adjacency.degree(node) as f64 * scale)
        .collect();

    Ok(Scores::from_values(graph, values))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_star_degree() {
        let graph = InteractionGraph::from_edges(vec![("H", "a"), ("H", "b"), ("H", "c")]);
        let scores = degree_centrality(&graph).unwrap();

        assert_eq!(scores.get("H"), Some(1.0));
        assert!((scores.get("a").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_node_has_zero_degree() {
        let mut graph = InteractionGraph::new();
        graph.add_node("TP53");

        let scores = degree_centrality(&graph).unwrap();
        assert_eq!(scores.get("TP53"), Some(0.0));
    }
}
