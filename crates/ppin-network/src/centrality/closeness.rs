use super::{Metric, MetricResult, Scores};
use crate::error::CentralityError;
use crate::graph::{Adjacency, InteractionGraph};
use std::collections::VecDeque;

/// Closeness centrality with the Wasserman-Faust correction
///
/// For a node reaching `r` nodes (itself included) at total distance `d`:
/// `(r - 1) / d * (r - 1) / (n - 1)`. Nodes that reach nothing score 0.
pub fn closeness_centrality(graph: &InteractionGraph) -> MetricResult {
    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::EmptyGraph {
            metric: Metric::Closeness,
        });
    }

    let adjacency = graph.adjacency();
    let values = (0..n)
        .map(|node| {
            let (reachable, total_distance) = bfs_distances(&adjacency, node);
            if total_distance == 0 || n == 1 {
                return 0.0;
            }
            let others = (reachable - 1) as f64;
            (others / total_distance as f64) * (others / (n - 1) as f64)
        })
        .collect();

    Ok(Scores::from_values(graph, values))
}

/// Count of reachable nodes (including `source`) and their summed hop distance
fn bfs_distances(adjacency: &Adjacency, source: usize) -> (usize, usize) {
    let mut distance: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut queue = VecDeque::from([source]);
    distance[source] = Some(0);

    let mut reachable = 0;
    let mut total = 0;
    while let Some(v) = queue.pop_front() {
        let Some(dv) = distance[v] else { continue };
        reachable += 1;
        total += dv;
        for &w in adjacency.neighbors(v) {
            if distance[w].is_none() {
                distance[w] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }

    (reachable, total)
}
