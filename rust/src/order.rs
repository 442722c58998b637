// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

use std::collections::HashMap;

use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeOrderError {
    #[error("Node {node} appears at both position {first} and {second}")]
    DuplicateNode {
        node: NodeId,
        first: usize,
        second: usize,
    },
}

/// The canonical order of nodes: row `i` of every exported file describes `order.get(i)`.
///
/// It is immutable once built, and has no duplicates.
///
/// ```
/// use patent_citations::order::NodeOrder;
///
/// let order = NodeOrder::new(vec![30, 10, 20]).unwrap();
/// assert_eq!(order.get(0), Some(30));
/// assert_eq!(order.index_of(20), Some(2));
/// assert_eq!(order.index_of(40), None);
/// assert!(NodeOrder::new(vec![1, 2, 1]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeOrder {
    nodes: Box<[NodeId]>,
    positions: HashMap<NodeId, usize>,
}

impl NodeOrder {
    pub fn new(nodes: Vec<NodeId>) -> Result<Self, NodeOrderError> {
        let mut positions = HashMap::with_capacity(nodes.len());
        for (position, &node) in nodes.iter().enumerate() {
            if let Some(first) = positions.insert(node, position) {
                return Err(NodeOrderError::DuplicateNode {
                    node,
                    first,
                    second: position,
                });
            }
        }
        Ok(NodeOrder {
            nodes: nodes.into_boxed_slice(),
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at the given (0-based) position
    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.nodes.get(position).copied()
    }

    /// Returns the (0-based) position of a node
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }
}

impl AsRef<[NodeId]> for NodeOrder {
    fn as_ref(&self) -> &[NodeId] {
        &self.nodes
    }
}

impl std::ops::Index<usize> for NodeOrder {
    type Output = NodeId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}
