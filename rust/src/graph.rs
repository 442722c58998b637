// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Structures to manipulate the patent citation graph
//!
//! The graph is only accessed through a small set of traits:
//!
//! * [`CitationGraph`]: node iteration and counts
//! * [`ForwardCitationGraph`]: successors, and arc iteration on top of them
//! * [`ReducibleGraph`]: the two mutations needed to prepare a graph for export,
//!   namely self-loop removal and subgraph induction
//!
//! Node identifiers are the original patent ids; no operation renumbers them.

use std::collections::{BTreeMap, BTreeSet};

use crate::collections::ReadNodeSet;

/// Original patent identifier, as assigned by the source extract.
pub type NodeId = u64;

/// Read-only access to the nodes of a citation graph
pub trait CitationGraph {
    /// Return the number of nodes in the graph.
    fn num_nodes(&self) -> usize;
    /// Return the number of arcs in the graph.
    fn num_arcs(&self) -> usize;
    /// Return whether the node is in the graph
    fn has_node(&self, node_id: NodeId) -> bool;
    /// Return whether there is an arc going from `src_node_id` to `dst_node_id`.
    fn has_arc(&self, src_node_id: NodeId, dst_node_id: NodeId) -> bool;

    /// Iterator over all nodes, in the graph's natural order.
    ///
    /// Two calls on an unmodified graph must return the same sequence.
    fn iter_nodes(&self) -> impl Iterator<Item = NodeId> + '_;
}

/// A [`CitationGraph`] whose arcs can be followed from citing to cited patent
pub trait ForwardCitationGraph: CitationGraph {
    type Successors<'succ>: IntoIterator<Item = NodeId>
    where
        Self: 'succ;

    /// Return an [`IntoIterator`] over the patents cited by a node.
    fn successors(&self, node_id: NodeId) -> Self::Successors<'_>;
    /// Return the number of patents cited by a node.
    fn outdegree(&self, node_id: NodeId) -> usize;

    /// Iterator over all `(citing, cited)` arcs, grouped by citing patent in
    /// [natural node order](CitationGraph::iter_nodes)
    fn iter_arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.iter_nodes()
            .flat_map(move |src| self.successors(src).into_iter().map(move |dst| (src, dst)))
    }
}

/// Mutations needed to turn a raw citation graph into an exportable one
pub trait ReducibleGraph: ForwardCitationGraph + Sized {
    /// Removes all `x -> x` arcs, and returns how many there were.
    ///
    /// Nodes themselves are kept, even if the self-loop was their only arc.
    fn remove_self_loops(&mut self) -> usize;

    /// Returns the subgraph induced by `nodes`: exactly the nodes of this graph
    /// contained in `nodes`, and the arcs between two of them.
    ///
    /// Node ids are preserved.
    fn induced_subgraph<S: ReadNodeSet + ?Sized>(&self, nodes: &S) -> Self;
}

/// In-memory directed graph without multi-arcs, stored as sorted adjacency sets.
///
/// Natural node order is ascending [`NodeId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    successors: BTreeMap<NodeId, BTreeSet<NodeId>>,
    num_arcs: usize,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph, returning `false` if it was already present.
    pub fn add_node(&mut self, node_id: NodeId) -> bool {
        match self.successors.entry(node_id) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(BTreeSet::new());
                true
            }
        }
    }

    /// Adds an arc, and both its ends if they are missing.
    ///
    /// Returns `false` if the arc was already present (multi-arcs are collapsed).
    pub fn add_arc(&mut self, src: NodeId, dst: NodeId) -> bool {
        self.add_node(dst);
        let inserted = self.successors.entry(src).or_default().insert(dst);
        if inserted {
            self.num_arcs += 1;
        }
        inserted
    }
}

impl CitationGraph for AdjacencyGraph {
    fn num_nodes(&self) -> usize {
        self.successors.len()
    }
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }
    fn has_node(&self, node_id: NodeId) -> bool {
        self.successors.contains_key(&node_id)
    }
    fn has_arc(&self, src_node_id: NodeId, dst_node_id: NodeId) -> bool {
        self.successors
            .get(&src_node_id)
            .is_some_and(|succ| succ.contains(&dst_node_id))
    }
    fn iter_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.keys().copied()
    }
}

impl ForwardCitationGraph for AdjacencyGraph {
    type Successors<'succ> = std::iter::Copied<std::collections::btree_set::Iter<'succ, NodeId>>;

    fn successors(&self, node_id: NodeId) -> Self::Successors<'_> {
        static EMPTY: BTreeSet<NodeId> = BTreeSet::new();
        self.successors
            .get(&node_id)
            .unwrap_or(&EMPTY)
            .iter()
            .copied()
    }
    fn outdegree(&self, node_id: NodeId) -> usize {
        self.successors.get(&node_id).map(BTreeSet::len).unwrap_or(0)
    }
}

impl ReducibleGraph for AdjacencyGraph {
    fn remove_self_loops(&mut self) -> usize {
        let mut removed = 0;
        for (node, succ) in self.successors.iter_mut() {
            if succ.remove(node) {
                removed += 1;
            }
        }
        self.num_arcs -= removed;
        removed
    }

    fn induced_subgraph<S: ReadNodeSet + ?Sized>(&self, nodes: &S) -> Self {
        let mut num_arcs = 0;
        let successors: BTreeMap<_, _> = self
            .successors
            .iter()
            .filter(|(node, _)| nodes.contains(**node))
            .map(|(node, succ)| {
                let succ: BTreeSet<_> = succ
                    .iter()
                    .copied()
                    .filter(|dst| nodes.contains(*dst))
                    .collect();
                num_arcs += succ.len();
                (*node, succ)
            })
            .collect();
        AdjacencyGraph {
            successors,
            num_arcs,
        }
    }
}
