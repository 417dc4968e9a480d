//! Force-directed node placement for network diagrams
//!
//! Fruchterman-Reingold spring embedding: every pair of nodes repels, every
//! edge attracts, and a cooling step size bounds how far a node moves per
//! iteration. Positions start from a seeded RNG so the same graph always
//! produces the same picture.

use crate::graph::InteractionGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum pairwise distance used in force calculations
const MIN_DISTANCE: f64 = 0.01;
/// Early exit once the mean per-node move falls below this
const CONVERGENCE_THRESHOLD: f64 = 1.0e-4;

/// Layout tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub seed: u64,
    pub iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            seed: 123,
            iterations: 50,
        }
    }
}

/// A position in the unit square centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node positions in graph insertion order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<(String, Point)>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|(node, _)| node == name)
            .map(|(_, point)| *point)
    }
}

/// Compute a spring layout; coordinates are rescaled into [-1, 1]
pub fn spring_layout(graph: &InteractionGraph, options: &LayoutOptions) -> Layout {
    let n = graph.node_count();
    let names = graph.node_names().map(str::to_string);

    let positions = match n {
        0 => Vec::new(),
        1 => vec![Point::default()],
        _ => {
            let mut positions = fruchterman_reingold(graph, options);
            rescale(&mut positions);
            positions
        },
    };

    debug!(nodes = n, seed = options.seed, "Computed spring layout");

    Layout {
        nodes: names.zip(positions).collect(),
    }
}

fn fruchterman_reingold(graph: &InteractionGraph, options: &LayoutOptions) -> Vec<Point> {
    let n = graph.node_count();
    let adjacency = graph.adjacency();
    let mut connected = vec![vec![false; n]; n];
    for (i, row) in connected.iter_mut().enumerate() {
        for &j in adjacency.neighbors(i) {
            row[j] = true;
        }
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.gen::<f64>(),
            y: rng.gen::<f64>(),
        })
        .collect();

    let k = (1.0 / n as f64).sqrt();
    let span = |axis: fn(&Point) -> f64| {
        let (lo, hi) = pos
            .iter()
            .map(axis)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        hi - lo
    };
    let mut temperature = span(|p| p.x).max(span(|p| p.y)) * 0.1;
    let cooling = temperature / (options.iterations as f64 + 1.0);

    for _ in 0..options.iterations {
        let mut moves = Vec::with_capacity(n);
        for i in 0..n {
            let (mut dx, mut dy) = (0.0, 0.0);
            for j in 0..n {
                let delta_x = pos[i].x - pos[j].x;
                let delta_y = pos[i].y - pos[j].y;
                let distance = delta_x.hypot(delta_y).max(MIN_DISTANCE);
                let attraction = if connected[i][j] { distance / k } else { 0.0 };
                let force = k * k / (distance * distance) - attraction;
                dx += delta_x * force;
                dy += delta_y * force;
            }
            let length = dx.hypot(dy);
            let length = if length < MIN_DISTANCE { 0.1 } else { length };
            moves.push((dx * temperature / length, dy * temperature / length));
        }

        let mut total = 0.0;
        for (point, (dx, dy)) in pos.iter_mut().zip(&moves) {
            point.x += dx;
            point.y += dy;
            total += dx * dx + dy * dy;
        }
        temperature -= cooling;

        if total.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    pos
}

/// Center on the origin and scale so the largest coordinate is 1
fn rescale(positions: &mut [Point]) {
    let n = positions.len() as f64;
    let mean_x = positions.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = positions.iter().map(|p| p.y).sum::<f64>() / n;

    let mut limit: f64 = 0.0;
    for point in positions.iter_mut() {
        point.x -= mean_x;
        point.y -= mean_y;
        limit = limit.max(point.x.abs()).max(point.y.abs());
    }

    if limit > 0.0 {
        for point in positions.iter_mut() {
            point.x /= limit;
            point.y /= limit;
        }
    }
}
