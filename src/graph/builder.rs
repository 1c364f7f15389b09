// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-phase crystal graph construction.

use crate::crystal::{OperatorOutcome, OperatorRange, UndefinedReason};
use crate::error::{CrystalError, Result};
use crate::generator::generate;
use crate::graph::{CrystalGraph, Edge};
use crate::state::Counters;
use crate::tableau::{Shape, Weight};
use log::{debug, trace};

/// Builds crystal graphs for one shape and one range of operators.
///
/// Since `f_i` moves an entry from `i` to `i + 1`, a lowered tableau never
/// has the weight of its source. A graph over a single weight therefore has
/// no edges; every lowered result is an unresolved target. Use
/// `build_union` to link several weight spaces.
#[derive(Debug, Clone, Copy)]
pub struct CrystalGraphBuilder {
    shape: Shape,
    operators: OperatorRange,
}

impl CrystalGraphBuilder {
    pub fn new(shape: Shape, operators: OperatorRange) -> Self {
        Self { shape, operators }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn operators(&self) -> OperatorRange {
        self.operators
    }

    /// Graph whose nodes are the tableaux of one weight.
    pub fn build(&self, weight: &Weight) -> Result<CrystalGraph> {
        self.build_union(std::slice::from_ref(weight))
    }

    /// Graph whose nodes are the tableaux of every weight in `weights`.
    ///
    /// Nodes are numbered in the order the weights are given, then in
    /// generation order. A tableau already present (a repeated weight) is
    /// not added twice.
    pub fn build_union(&self, weights: &[Weight]) -> Result<CrystalGraph> {
        let alphabet_size = self.operators.alphabet_size();
        if let Some(weight) = weights.iter().find(|w| w.alphabet_size() > alphabet_size) {
            return Err(CrystalError::WeightExceedsAlphabet {
                len: weight.alphabet_size() as usize,
                alphabet_size,
            });
        }

        let mut graph = CrystalGraph::default();
        for weight in weights {
            let added = generate(weight, self.shape)
                .into_iter()
                .filter_map(|tableau| graph.add_node(tableau))
                .count();
            debug!("weight {}: {} new nodes", weight, added);
        }

        self.link(&mut graph);
        debug!(
            "crystal graph of shape {}: {} nodes, {} edges, {} unresolved targets",
            self.shape,
            graph.nodes.len(),
            graph.edges.len(),
            graph.statistics.get(Counters::UnresolvedTargets)
        );
        Ok(graph)
    }

    /// Apply every operator to every node and record the edges that land on
    /// a node.
    fn link(&self, graph: &mut CrystalGraph) {
        let mut edges = Vec::new();
        let statistics = &mut graph.statistics;

        for node in &graph.nodes {
            for operator in self.operators.operators() {
                match operator.apply(&node.tableau) {
                    OperatorOutcome::Lowered { tableau, .. } => {
                        statistics.increment(Counters::Lowered);
                        match graph.ids.get(&tableau) {
                            Some(&target) => {
                                edges.push(Edge {
                                    source: node.id,
                                    target,
                                    index: operator.index(),
                                });
                                statistics.increment(Counters::Edges);
                            }
                            None => {
                                trace!(
                                    "{} of node {} gives {}, which is not a node",
                                    operator,
                                    node.id,
                                    tableau
                                );
                                statistics.increment(Counters::UnresolvedTargets);
                            }
                        }
                    }
                    OperatorOutcome::Undefined(UndefinedReason::NoUncancelledPlus) => {
                        statistics.increment(Counters::NoUncancelledPlus);
                    }
                    OperatorOutcome::Undefined(UndefinedReason::BreaksSemistandard) => {
                        statistics.increment(Counters::BreaksSemistandard);
                    }
                }
            }
        }

        graph.edges = edges;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::Tableau;

    fn builder(rows: usize, cols: usize, alphabet_size: u32) -> CrystalGraphBuilder {
        CrystalGraphBuilder::new(
            Shape::new(rows, cols).unwrap(),
            OperatorRange::full(alphabet_size).unwrap(),
        )
    }

    fn tableau(rows: Vec<Vec<u32>>) -> Tableau {
        Tableau::try_from(rows).unwrap()
    }

    #[test]
    fn test_single_weight_has_no_edges() {
        let weight = Weight::new(vec![1, 1, 1, 1]).unwrap();
        let graph = builder(2, 2, 4).build(&weight).unwrap();

        assert_eq!(graph.nodes().len(), 2);
        assert!(graph.edges().is_empty());
        let stats = graph.statistics();
        assert_eq!(
            stats.get(Counters::UnresolvedTargets),
            stats.get(Counters::Lowered)
        );
        // Every (node, operator) pair has exactly one outcome.
        let outcomes = stats.get(Counters::Lowered)
            + stats.get(Counters::NoUncancelledPlus)
            + stats.get(Counters::BreaksSemistandard);
        assert_eq!(outcomes, 2 * 3);
    }

    #[test]
    fn test_union_of_one_row_weights() {
        // All weights of two entries over {1, 2, 3}.
        let weights: Vec<Weight> = [[2, 0, 0], [1, 1, 0], [1, 0, 1], [0, 2, 0], [0, 1, 1], [0, 0, 2]]
            .iter()
            .map(|counts| Weight::new(counts.to_vec()).unwrap())
            .collect();
        let graph = builder(1, 2, 3).build_union(&weights).unwrap();
        assert_eq!(graph.nodes().len(), 6);

        let id = |rows: Vec<Vec<u32>>| graph.id_of(&tableau(rows)).unwrap();
        let mut edges: Vec<(usize, usize, u32)> = graph
            .edges()
            .iter()
            .map(|e| (e.source, e.target, e.index))
            .collect();
        edges.sort_unstable();

        let mut expected = vec![
            (id(vec![vec![1, 1]]), id(vec![vec![1, 2]]), 1),
            (id(vec![vec![1, 2]]), id(vec![vec![1, 3]]), 2),
            (id(vec![vec![1, 3]]), id(vec![vec![2, 3]]), 1),
            (id(vec![vec![2, 2]]), id(vec![vec![2, 3]]), 2),
        ];
        expected.sort_unstable();
        assert_eq!(edges, expected);
        assert_eq!(graph.statistics().get(Counters::Edges), 4);
        assert_eq!(graph.statistics().get(Counters::UnresolvedTargets), 0);
    }

    #[test]
    fn test_repeated_weight_adds_nodes_once() {
        let weight = Weight::new(vec![1, 1, 1, 1]).unwrap();
        let graph = builder(2, 2, 4)
            .build_union(&[weight.clone(), weight])
            .unwrap();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.nodes()[1].id, 1);
    }

    #[test]
    fn test_weight_larger_than_alphabet_rejected() {
        let weight = Weight::new(vec![1, 1, 1, 1, 0]).unwrap();
        assert!(matches!(
            builder(2, 2, 4).build(&weight),
            Err(CrystalError::WeightExceedsAlphabet { len: 5, alphabet_size: 4 })
        ));
    }
}
