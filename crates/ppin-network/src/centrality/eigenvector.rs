use super::{CentralityOptions, Metric, MetricResult, Scores};
use crate::error::CentralityError;
use crate::graph::InteractionGraph;

/// Eigenvector centrality by power iteration
///
/// Iterates on `A + I` starting from the uniform vector and normalizes each
/// step to unit L2 norm. The principal eigenvector is only meaningful for a
/// connected graph, so disconnected graphs are rejected up front instead of
/// returning scores that depend on the starting vector.
pub fn eigenvector_centrality(graph: &InteractionGraph, options: &CentralityOptions) -> MetricResult {
    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::EmptyGraph {
            metric: Metric::Eigenvector,
        });
    }
    if !graph.is_connected() {
        return Err(CentralityError::Undefined {
            metric: Metric::Eigenvector,
            reason: format!(
                "the graph has {} disconnected components",
                graph.component_count()
            ),
        });
    }

    let adjacency = graph.adjacency();
    let mut x = vec![1.0 / n as f64; n];

    for _ in 0..options.max_iterations {
        let last = x.clone();
        for (node, &weight) in last.iter().enumerate() {
            for &neighbor in adjacency.neighbors(node) {
                x[neighbor] += weight;
            }
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm == 0.0 { 1.0 } else { norm };
        for value in &mut x {
            *value /= norm;
        }

        let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * options.tolerance {
            return Ok(Scores::from_values(graph, x));
        }
    }

    Err(CentralityError::NonConvergence {
        metric: Metric::Eigenvector,
        iterations: options.max_iterations,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_star_center_dominates() {
        let graph = InteractionGraph::from_edges(vec![("H", "a"), ("H", "b"), ("H", "c")]);
        let scores = eigenvector_centrality(&graph, &CentralityOptions::default()).unwrap();

        let center = scores.get("H").unwrap();
        assert!((center - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-4, "{center}");
        for leaf in ["a", "b", "c"] {
            assert!(scores.get(leaf).unwrap() < center);
        }

        let norm: f64 = scores.iter().map(|(_, s)| s * s).sum();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disconnected_graph_is_undefined() {
        let graph = InteractionGraph::from_edges(vec![("A", "B"), ("C", "D")]);
        let err = eigenvector_centrality(&graph, &CentralityOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            CentralityError::Undefined {
                metric: Metric::Eigenvector,
                ..
            }
        ));
        assert!(err.to_string().contains("2 disconnected components"));
    }

    #[test]
    fn test_single_node() {
        let mut graph = InteractionGraph::new();
        graph.add_node("TP53");

        let scores = eigenvector_centrality(&graph, &CentralityOptions::default()).unwrap();
        assert!((scores.get("TP53").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let graph = InteractionGraph::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D")]);
        let options = CentralityOptions {
            max_iterations: 1,
            ..CentralityOptions::default()
        };

        let err = eigenvector_centrality(&graph, &options).unwrap_err();
        assert_eq!(
            err,
            CentralityError::NonConvergence {
                metric: Metric::Eigenvector,
                iterations: 1
            }
        );
    }
}
