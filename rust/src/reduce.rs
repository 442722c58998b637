// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Prepares a citation graph for export, and computes the canonical order of its nodes

use anyhow::{ensure, Context, Result};
use log::info;

use crate::attributes::AttributeStore;
use crate::graph::*;
use crate::order::NodeOrder;

/// Which nodes of the citation graph should be exported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReductionMode {
    /// Every cited or citing patent; those without a record get a row of
    /// [`NA`](crate::attributes::NA)
    #[default]
    Full,
    /// Only the subgraph induced by patents that have a record
    AttributedOnly,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReductionStats {
    pub num_self_loops: usize,
    pub num_nodes_before: usize,
    pub num_arcs_before: usize,
    pub num_nodes: usize,
    pub num_arcs: usize,
    /// Number of nodes of the reduced graph with a record from the source extract
    pub num_attributed: usize,
    /// Number of rows of [`NA`](crate::attributes::NA) added to the attribute store
    pub num_synthesized: usize,
}

impl ReductionStats {
    /// Percentage of nodes in the reduced graph that have a record
    pub fn attributed_percent(&self) -> f64 {
        if self.num_nodes == 0 {
            0.
        } else {
            100. * self.num_attributed as f64 / self.num_nodes as f64
        }
    }
}

/// Result of [`reduce`]
#[derive(Debug)]
pub struct Reduction<G> {
    pub graph: G,
    /// The order all output files must use
    pub order: NodeOrder,
    pub stats: ReductionStats,
}

/// Removes self-loops from the graph, then either restricts it to nodes with a record
/// ([`ReductionMode::AttributedOnly`]), or adds a record of missing values for all
/// nodes without one ([`ReductionMode::Full`]).
///
/// The returned [`NodeOrder`] follows the reduced graph's natural node order, and
/// every node in it has a row in `attributes`.
pub fn reduce<G: ReducibleGraph>(
    mut graph: G,
    attributes: &mut AttributeStore,
    mode: ReductionMode,
) -> Result<Reduction<G>> {
    let mut stats = ReductionStats {
        num_nodes_before: graph.num_nodes(),
        num_arcs_before: graph.num_arcs(),
        ..Default::default()
    };

    stats.num_self_loops = graph.remove_self_loops();
    info!(
        "Removed {} self-loops: {} nodes, {} arcs left",
        stats.num_self_loops,
        graph.num_nodes(),
        graph.num_arcs()
    );

    let mut nodes = Vec::with_capacity(graph.num_nodes());
    let graph = match mode {
        ReductionMode::AttributedOnly => {
            nodes.extend(graph.iter_nodes().filter(|&node| attributes.contains(node)));
            let subgraph = graph.induced_subgraph(&*attributes);
            stats.num_attributed = nodes.len();
            info!(
                "Subgraph with only nodes with patent attribute data: {} nodes, {} arcs",
                subgraph.num_nodes(),
                subgraph.num_arcs()
            );
            subgraph
        }
        ReductionMode::Full => {
            for node in graph.iter_nodes() {
                nodes.push(node);
                if attributes.insert_missing(node) {
                    stats.num_synthesized += 1;
                } else {
                    stats.num_attributed += 1;
                }
            }
            graph
        }
    };
    stats.num_nodes = graph.num_nodes();
    stats.num_arcs = graph.num_arcs();

    if mode == ReductionMode::Full {
        info!(
            "There are {} unique cited/citing patents of which {} ({:.6}%) have patent data",
            stats.num_nodes,
            stats.num_attributed,
            stats.attributed_percent()
        );
    }

    let order = NodeOrder::new(nodes).context("Graph returned the same node twice")?;
    ensure!(
        order.len() == graph.num_nodes(),
        "Node order has {} nodes, but reduced graph has {}",
        order.len(),
        graph.num_nodes()
    );

    Ok(Reduction {
        graph,
        order,
        stats,
    })
}
