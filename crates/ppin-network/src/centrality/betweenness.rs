use super::{Metric, MetricResult, Scores};
use crate::error::CentralityError;
use crate::graph::InteractionGraph;
use std::collections::VecDeque;

/// Betweenness centrality (Brandes, unweighted)
///
/// Accumulates over ordered source/target pairs and rescales by
/// 1 / ((n - 1)(n - 2)), which equals the fraction of unordered pairs not
/// involving the node. Graphs with two or fewer nodes are left unscaled, and
/// every score there is 0.
pub fn betweenness_centrality(graph: &InteractionGraph) -> MetricResult {
    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::EmptyGraph {
            metric: Metric::Betweenness,
        });
    }

    let adjacency = graph.adjacency();
    let mut centrality = vec![0.0_f64; n];

    for source in 0..n {
        let mut stack = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut distance: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::new();

        sigma[source] = 1.0;
        distance[source] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let Some(dv) = distance[v] else { continue };
            for &w in adjacency.neighbors(v) {
                if distance[w].is_none() {
                    distance[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if distance[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != source {
                centrality[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in &mut centrality {
            *value *= scale;
        }
    }

    Ok(Scores::from_values(graph, centrality))
}
