// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for crystal graph construction and export.

mod common;

use common::{all_weights, rows_are_semistandard, shape, weight};
use crystal_search::config::CrystalConfig;
use crystal_search::crystal::{CrystalOperator, OperatorRange};
use crystal_search::graph::{CrystalGraph, CrystalGraphBuilder};
use crystal_search::state::Counters;
use std::collections::HashSet;

fn assert_well_formed(graph: &CrystalGraph) {
    for (position, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id, position);
        assert!(rows_are_semistandard(&node.tableau.to_rows()));
        assert_eq!(graph.id_of(&node.tableau), Some(node.id));
    }
    let distinct: HashSet<_> = graph.nodes().iter().map(|n| &n.tableau).collect();
    assert_eq!(distinct.len(), graph.nodes().len());

    for edge in graph.edges() {
        assert!(graph.node(edge.source).is_some());
        assert!(graph.node(edge.target).is_some());
    }
}

#[test]
fn test_default_weight_graph() {
    let config = CrystalConfig::default();
    let graph = config
        .builder()
        .unwrap()
        .build_union(&config.weights().unwrap())
        .unwrap();

    assert!(!graph.nodes().is_empty());
    assert_well_formed(&graph);

    // Every lowered tableau has another weight, so none is a node.
    assert!(graph.edges().is_empty());
    let stats = graph.statistics();
    assert_eq!(stats.get(Counters::Tableaux), graph.nodes().len() as u64);
    assert_eq!(stats.get(Counters::UnresolvedTargets), stats.get(Counters::Lowered));
    assert_eq!(
        stats.get(Counters::Lowered)
            + stats.get(Counters::NoUncancelledPlus)
            + stats.get(Counters::BreaksSemistandard),
        graph.nodes().len() as u64 * 11
    );
}

#[test]
fn test_union_of_every_weight_is_closed() {
    let s = shape(2, 2);
    let alphabet_size = 3;
    let builder = CrystalGraphBuilder::new(s, OperatorRange::full(alphabet_size).unwrap());
    let graph = builder
        .build_union(&all_weights(s.cell_count() as u32, alphabet_size as usize))
        .unwrap();
    assert_well_formed(&graph);

    // 2x2 tableaux over {1,2,3}: [[1,1],[2,2]], [[1,1],[2,3]], [[1,1],[3,3]],
    // [[1,2],[2,3]], [[1,2],[3,3]], [[2,2],[3,3]].
    assert_eq!(graph.nodes().len(), 6);

    // Every lowered result is itself a node.
    let stats = graph.statistics();
    assert_eq!(stats.get(Counters::UnresolvedTargets), 0);
    assert_eq!(stats.get(Counters::Edges), graph.edges().len() as u64);
    assert_eq!(stats.get(Counters::Lowered), graph.edges().len() as u64);

    for edge in graph.edges() {
        let operator = CrystalOperator::new(edge.index, alphabet_size).unwrap();
        let source = &graph.nodes()[edge.source].tableau;
        let target = &graph.nodes()[edge.target].tableau;
        assert_eq!(operator.apply(source).tableau(), Some(target));
    }

    // f_i is a partial function: at most one edge per node and operator.
    let mut seen = HashSet::new();
    for edge in graph.edges() {
        assert!(seen.insert((edge.source, edge.index)));
    }
}

#[test]
fn test_limited_operator_range() {
    let s = shape(1, 2);
    let weights = all_weights(2, 3);
    let builder = CrystalGraphBuilder::new(s, OperatorRange::new(2, 2, 3).unwrap());
    let graph = builder.build_union(&weights).unwrap();

    assert!(graph.edges().iter().all(|e| e.index == 2));
    // [1,2] -> [1,3] and [2,2] -> [2,3]
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn test_json_export() {
    let builder = CrystalGraphBuilder::new(shape(1, 2), OperatorRange::full(3).unwrap());
    let graph = builder.build_union(&all_weights(2, 3)).unwrap();

    let text = graph.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    let links = value["links"].as_array().unwrap();
    assert_eq!(nodes.len(), graph.nodes().len());
    assert_eq!(links.len(), graph.edges().len());

    for (node, json) in graph.nodes().iter().zip(nodes) {
        assert_eq!(json["id"], node.id);
        let rows: Vec<Vec<u32>> = serde_json::from_value(json["tableau"].clone()).unwrap();
        assert_eq!(rows, node.tableau.to_rows());
    }
    for link in links {
        let operator = link["operator"].as_str().unwrap();
        assert!(operator == "f_1" || operator == "f_2", "{}", operator);
    }

    let mut written = Vec::new();
    graph.write_json(&mut written).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), text);
}

#[test]
fn test_configured_graph() {
    let config = CrystalConfig::from_json(
        r#"{"rows": 1, "cols": 2, "alphabet_size": 3,
            "weights": [[2], [1, 1], [1, 0, 1], [0, 2], [0, 1, 1], [0, 0, 2]]}"#,
    )
    .unwrap();
    let weights = config.weights().unwrap();
    assert_eq!(weights[0], weight(&[2, 0, 0]));

    let graph = config.builder().unwrap().build_union(&weights).unwrap();
    assert_eq!(graph.nodes().len(), 6);
    assert_eq!(graph.edges().len(), 4);
}
