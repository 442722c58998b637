/*
 * Copyright (C) 2026  The Software Heritage developers
 * See the AUTHORS file at the top-level directory of this distribution
 * License: GNU General Public License version 3, or any later version
 * See top-level LICENSE file for more information
 */

//! Utility to dynamically build a citation graph in memory

use std::collections::HashSet;

use anyhow::{ensure, Result};

use crate::graph::*;

/// Dynamically builds a citation graph in memory
///
/// # Example
///
/// ```
/// use patent_citations::graph::*;
/// use patent_citations::graph_builder::GraphBuilder;
///
/// let mut builder = GraphBuilder::default();
/// builder.node(4).unwrap();
/// builder.arc(1, 2);
/// builder.arc(2, 2);
/// builder.arc(1, 2);
/// let graph = builder.done();
///
/// assert_eq!(graph.iter_nodes().collect::<Vec<_>>(), vec![1, 2, 4]);
/// assert_eq!(graph.num_arcs(), 2);
/// assert_eq!(builder.num_added_arcs(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: HashSet<NodeId>,
    arcs: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Adds a node without any arc to the graph.
    ///
    /// Returns `Err` if this node was already explicitly added.
    pub fn node(&mut self, node_id: NodeId) -> Result<NodeId> {
        ensure!(self.nodes.insert(node_id), "Duplicate node {node_id}");
        Ok(node_id)
    }

    /// Adds an arc (and implicitly both its ends) to the graph.
    ///
    /// Arcs may be repeated, they will be collapsed by [`GraphBuilder::done`].
    pub fn arc(&mut self, src: NodeId, dst: NodeId) -> &mut Self {
        self.arcs.push((src, dst));
        self
    }

    /// Adds many arcs at once, see [`GraphBuilder::arc`]
    pub fn arcs<I: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, arcs: I) -> &mut Self {
        self.arcs.extend(arcs);
        self
    }

    /// Number of arcs added so far, including duplicates
    pub fn num_added_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn done(&self) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for &node in &self.nodes {
            graph.add_node(node);
        }
        for &(src, dst) in &self.arcs {
            graph.add_arc(src, dst);
        }
        graph
    }
}
