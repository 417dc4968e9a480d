use super::{CentralityOptions, Metric, MetricResult, Scores};
use crate::error::CentralityError;
use crate::graph::InteractionGraph;

/// PageRank with uniform teleportation
///
/// Each undirected edge is walked in both directions; a self-loop is a
/// single arc back to its node. Rank held by nodes with no arcs is spread
/// uniformly over the graph every step, so the scores always sum to 1.
pub fn pagerank(graph: &InteractionGraph, options: &CentralityOptions) -> MetricResult {
    let damping = options.damping;
    if !(damping > 0.0 && damping < 1.0) {
        return Err(CentralityError::InvalidParameter {
            metric: Metric::PageRank,
            name: "damping",
            value: damping,
        });
    }

    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::EmptyGraph {
            metric: Metric::PageRank,
        });
    }

    let adjacency = graph.adjacency();
    let uniform = 1.0 / n as f64;
    let dangling: Vec<usize> = (0..n)
        .filter(|&node| adjacency.neighbors(node).is_empty())
        .collect();

    let mut x = vec![uniform; n];
    for _ in 0..options.max_iterations {
        let last = std::mem::replace(&mut x, vec![0.0; n]);
        let dangling_sum = damping * dangling.iter().map(|&node| last[node]).sum::<f64>();

        for (node, &rank) in last.iter().enumerate() {
            let arcs = adjacency.neighbors(node);
            if arcs.is_empty() {
                continue;
            }
            let share = damping * rank / arcs.len() as f64;
            for &neighbor in arcs {
                x[neighbor] += share;
            }
        }

        let base = dangling_sum * uniform + (1.0 - damping) * uniform;
        for value in &mut x {
            *value += base;
        }

        let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * options.tolerance {
            return Ok(Scores::from_values(graph, x));
        }
    }

    Err(CentralityError::NonConvergence {
        metric: Metric::PageRank,
        iterations: options.max_iterations,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_sum_to_one() {
        let graph = InteractionGraph::from_edges(vec![
            ("TP53", "MDM2"),
            ("TP53", "EP300"),
            ("MDM2", "MDM4"),
            ("TP53", "TP53"),
        ]);
        let scores = pagerank(&graph, &CentralityOptions::default()).unwrap();

        assert!((scores.total() - 1.0).abs() < 1e-6);
        let top = scores.top(1);
        assert_eq!(top[0].0, "TP53");
    }

    #[test]
    fn test_symmetric_pairs_are_uniform() {
        let graph = InteractionGraph::from_edges(vec![("A", "B"), ("C", "D")]);
        let scores = pagerank(&graph, &CentralityOptions::default()).unwrap();

        for (_, score) in scores.iter() {
            assert!((score - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_node_holds_all_rank() {
        let mut graph = InteractionGraph::new();
        graph.add_node("TP53");

        let scores = pagerank(&graph, &CentralityOptions::default()).unwrap();
        assert!((scores.get("TP53").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_node_rank_is_redistributed() {
        let mut graph = InteractionGraph::from_edges(vec![("A", "B")]);
        graph.add_node("Z");

        let scores = pagerank(&graph, &CentralityOptions::default()).unwrap();
        assert!((scores.total() - 1.0).abs() < 1e-6);
        assert!(scores.get("Z").unwrap() < scores.get("A").unwrap());
    }

    #[test]
    fn test_damping_out_of_range() {
        let graph = InteractionGraph::from_edges(vec![("A", "B")]);
        for damping in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let options = CentralityOptions {
                damping,
                ..CentralityOptions::default()
            };
            let err = pagerank(&graph, &options).unwrap_err();
            assert!(
                matches!(err, CentralityError::InvalidParameter { name: "damping", .. }),
                "damping {damping} should be rejected"
            );
        }
    }
}
