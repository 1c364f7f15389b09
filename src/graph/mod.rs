// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crystal graphs: tableaux linked by lowering operators.
//!
//! A graph is built in two phases by `CrystalGraphBuilder`: nodes are
//! collected from the generator and numbered in generation order, then every
//! operator is applied to every node and results that land on a node become
//! edges. Nothing is revisited or changed after it is created.
//!
//! The serialised form is
//!
//! ```json
//! { "nodes": [{"id": 0, "tableau": [[1,1]]}],
//!   "links": [{"source": 0, "target": 1, "operator": "f_1"}] }
//! ```

pub mod builder;

pub use builder::CrystalGraphBuilder;

use crate::error::Result;
use crate::state::{Counters, Statistics};
use crate::tableau::Tableau;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::io::Write;

/// Node identifier: position in generation order, meaningful within one graph.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub tableau: Tableau,
}

/// `target = f_index(source)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "operator", serialize_with = "serialize_operator")]
    pub index: u32,
}

fn serialize_operator<S: Serializer>(index: &u32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("f_{}", index))
}

#[derive(Debug, Default, Serialize)]
pub struct CrystalGraph {
    nodes: Vec<Node>,
    #[serde(rename = "links")]
    edges: Vec<Edge>,
    #[serde(skip)]
    ids: HashMap<Tableau, NodeId>,
    #[serde(skip)]
    statistics: Statistics,
}

impl CrystalGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Id of the node holding `tableau`, if any.
    pub fn id_of(&self, tableau: &Tableau) -> Option<NodeId> {
        self.ids.get(tableau).copied()
    }

    /// Edges leaving `id`, in operator order.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.source == id)
    }

    /// Counters gathered while building.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Add `tableau` as a new node unless it is already present.
    fn add_node(&mut self, tableau: Tableau) -> Option<NodeId> {
        if self.ids.contains_key(&tableau) {
            return None;
        }
        let id = self.nodes.len();
        self.ids.insert(tableau.clone(), id);
        self.nodes.push(Node { id, tableau });
        self.statistics.increment(Counters::Tableaux);
        Some(id)
    }
}
