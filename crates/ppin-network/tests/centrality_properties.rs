//! Graph and centrality properties over generated interaction tables

use ppin_common::InteractionTable;
use ppin_network::centrality::degree_centrality;
use ppin_network::{compute_all, CentralityError, CentralityOptions, InteractionGraph, Metric};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashSet;

fn biogrid_table(pairs: &[(String, String)]) -> InteractionTable {
    InteractionTable::from_records(pairs.iter().enumerate().map(|(i, (a, b))| {
        let mut record = Map::new();
        record.insert("OFFICIAL_SYMBOL_A".to_string(), Value::String(a.clone()));
        record.insert("OFFICIAL_SYMBOL_B".to_string(), Value::String(b.clone()));
        record.insert("EXPERIMENTAL_SYSTEM".to_string(), json!("Two-hybrid"));
        ((1000 + i).to_string(), record)
    }))
}

fn protein() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "TP53", "MDM2", "MDM4", "EP300", "CREBBP", "ATM", "CHEK2", "BRCA1",
    ])
    .prop_map(str::to_string)
}

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((protein(), protein()), 1..24)
}

fn without_self_loops() -> impl Strategy<Value = Vec<(String, String)>> {
    pairs().prop_map(|p| p.into_iter().filter(|(a, b)| a != b).collect())
}

proptest! {
    #[test]
    fn node_set_is_union_of_endpoints(pairs in pairs()) {
        let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();

        let expected: HashSet<&str> = pairs
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .collect();
        let actual: HashSet<&str> = graph.node_names().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn degree_sum_is_twice_edge_count(pairs in pairs()) {
        let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
        let n = graph.node_count();
        let scores = degree_centrality(&graph).unwrap();

        if n > 1 {
            let degree_sum = scores.total() * (n - 1) as f64;
            prop_assert!((degree_sum - 2.0 * graph.edge_count() as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn degree_is_normalized_without_self_loops(pairs in without_self_loops()) {
        prop_assume!(!pairs.is_empty());
        let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
        for (_, score) in degree_centrality(&graph).unwrap().iter() {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn pagerank_sums_to_one(pairs in pairs()) {
        let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
        let report = compute_all(&graph, &CentralityOptions::default());

        let scores = report.get(Metric::PageRank).unwrap().as_ref().unwrap();
        prop_assert!((scores.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn analysis_is_idempotent(pairs in pairs()) {
        let table = biogrid_table(&pairs);
        let options = CentralityOptions::default();

        let first = compute_all(&InteractionGraph::from_table(&table).unwrap(), &options);
        let second = compute_all(&InteractionGraph::from_table(&table).unwrap(), &options);

        for metric in Metric::ALL {
            prop_assert_eq!(first.get(metric), second.get(metric));
        }
    }

    #[test]
    fn scores_cover_every_node(pairs in pairs()) {
        let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
        let report = compute_all(&graph, &CentralityOptions::default());

        for outcome in report.iter() {
            if let Ok(scores) = &outcome.result {
                prop_assert_eq!(scores.len(), graph.node_count());
            }
        }
    }
}

fn assert_all_close(scores: &ppin_network::Scores, expected: f64) {
    for (node, score) in scores.iter() {
        assert!(
            (score - expected).abs() < 1e-9,
            "{node}: {score} != {expected}"
        );
    }
}

#[test]
fn two_disjoint_interactions() {
    let pairs = vec![
        ("A".to_string(), "B".to_string()),
        ("C".to_string(), "D".to_string()),
    ];
    let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
    let report = compute_all(&graph, &CentralityOptions::default());

    let ok = |metric: Metric| report.get(metric).unwrap().as_ref().unwrap();
    assert_all_close(ok(Metric::Degree), 1.0 / 3.0);
    assert_all_close(ok(Metric::Betweenness), 0.0);
    assert_all_close(ok(Metric::Closeness), 1.0 / 3.0);
    assert_all_close(ok(Metric::PageRank), 0.25);
    assert!(matches!(
        report.get(Metric::Eigenvector),
        Some(Err(CentralityError::Undefined { .. }))
    ));
}

#[test]
fn single_self_interaction() {
    let pairs = vec![("TP53".to_string(), "TP53".to_string())];
    let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);

    let report = compute_all(&graph, &CentralityOptions::default());
    let ok = |metric: Metric| report.get(metric).unwrap().as_ref().unwrap();
    assert_all_close(ok(Metric::Degree), 0.0);
    assert_all_close(ok(Metric::Betweenness), 0.0);
    assert_all_close(ok(Metric::Closeness), 0.0);
    assert_all_close(ok(Metric::PageRank), 1.0);
}

#[test]
fn star_around_query_protein() {
    let pairs: Vec<(String, String)> = ["MDM2", "EP300", "ATM"]
        .iter()
        .map(|p| ("TP53".to_string(), p.to_string()))
        .collect();
    let graph = InteractionGraph::from_table(&biogrid_table(&pairs)).unwrap();
    let report = compute_all(&graph, &CentralityOptions::default());

    for metric in Metric::ALL {
        let scores = report.get(metric).unwrap().as_ref().unwrap();
        assert_eq!(scores.top(1)[0].0, "TP53", "{metric}");
    }

    let eigenvector = report.get(Metric::Eigenvector).unwrap().as_ref().unwrap();
    assert!((eigenvector.get("TP53").unwrap() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-4);
}
