// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Sets of node ids.
//!
//! [`ReadNodeSet`] lets [`ReducibleGraph::induced_subgraph`](crate::graph::ReducibleGraph::induced_subgraph)
//! select nodes from a [`HashSet<NodeId>`](HashSet) or from an
//! [`AttributeStore`](crate::attributes::AttributeStore) alike.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::graph::NodeId;

/// A set of [`NodeId`]
pub trait ReadNodeSet {
    fn contains(&self, node: NodeId) -> bool;
}

impl<S: BuildHasher> ReadNodeSet for HashSet<NodeId, S> {
    #[inline(always)]
    fn contains(&self, node: NodeId) -> bool {
        HashSet::contains(self, &node)
    }
}
