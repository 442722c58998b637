// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Writers for the EstimNetDirected input files
//!
//! Every writer takes the same [`NodeOrder`], and writes one line per node in that
//! order (after a header), so that line `i` of every file describes the same patent.

use std::borrow::Cow;
use std::io::Write;

use anyhow::{ensure, Context, Result};
use dsi_progress_logger::{progress_logger, ProgressLog};
use itertools::Itertools;

use patent_citations::attributes::{AttributeStore, AttributeValue, NA};
use patent_citations::graph::*;
use patent_citations::order::NodeOrder;

/// Columns of the categorical attributes file, in order
pub const CATEGORICAL_ATTRIBUTES: [&str; 3] = ["Language", "Country", "PrimaryClass"];
/// Columns of the continuous attributes file, in order
pub const CONTINUOUS_ATTRIBUTES: [&str; 1] = ["Year"];

/// Renders a categorical value: its code, or [`NA`]
///
/// Values that were not encoded are written as-is if they are a non-negative integer.
pub fn format_categorical(value: &AttributeValue) -> Cow<'static, str> {
    match value {
        AttributeValue::Code(code) => code.to_string().into(),
        AttributeValue::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            match s.parse::<u64>() {
                Ok(value) => value.to_string().into(),
                Err(_) => NA.into(),
            }
        }
        AttributeValue::Text(_) | AttributeValue::Missing => NA.into(),
    }
}

/// Renders a continuous value as a float, or [`NA`] if it is missing, blank,
/// not a number, or NaN
///
/// ```
/// use estimnet_convert::writers::format_continuous;
/// use patent_citations::attributes::AttributeValue;
///
/// assert_eq!(format_continuous(&AttributeValue::from("2003")), "2003.0");
/// assert_eq!(format_continuous(&AttributeValue::from("")), "NA");
/// assert_eq!(format_continuous(&AttributeValue::from("NA")), "NA");
/// assert_eq!(format_continuous(&AttributeValue::from("abc")), "NA");
/// ```
pub fn format_continuous(value: &AttributeValue) -> Cow<'static, str> {
    let value = match value {
        AttributeValue::Text(s) => s.trim().parse::<f64>().ok(),
        AttributeValue::Code(code) => Some(f64::from(*code)),
        AttributeValue::Missing => None,
    };
    match value {
        // Debug formatting keeps the trailing ".0" of integral values
        Some(value) if !value.is_nan() => format!("{value:?}").into(),
        _ => NA.into(),
    }
}

/// Checks the row-alignment invariants shared by all attribute writers
fn check_alignment<G: CitationGraph>(
    graph: &G,
    order: &NodeOrder,
    attributes: &AttributeStore,
) -> Result<()> {
    ensure!(
        order.len() == graph.num_nodes(),
        "Node order has {} nodes, but graph has {}",
        order.len(),
        graph.num_nodes()
    );
    ensure!(
        attributes.len() >= graph.num_nodes(),
        "Attribute store has {} records, but graph has {} nodes",
        attributes.len(),
        graph.num_nodes()
    );
    Ok(())
}

fn write_attributes<G, W, F>(
    mut writer: W,
    graph: &G,
    order: &NodeOrder,
    attributes: &AttributeStore,
    columns: &[&str],
    format: F,
) -> Result<()>
where
    G: CitationGraph,
    W: Write,
    F: Fn(&AttributeValue) -> Cow<'static, str>,
{
    check_alignment(graph, order, attributes)?;
    let positions = columns
        .iter()
        .map(|column| attributes.columns().position(column))
        .collect::<Result<Vec<_>, _>>()
        .context("Missing attribute column")?;

    writeln!(writer, "{}", columns.iter().join(" ")).context("Could not write header")?;

    let mut pl = progress_logger!(
        display_memory = true,
        item_name = "node",
        local_speed = true,
        expected_updates = Some(order.len()),
    );
    pl.start(format!("Writing {} attributes...", columns.join(", ")));
    for node in order.iter() {
        let row = attributes
            .row(node)
            .with_context(|| format!("Node {node} has no attribute row"))?;
        writeln!(
            writer,
            "{}",
            positions.iter().map(|&position| format(&row[position])).join(" ")
        )
        .context("Could not write row")?;
        pl.light_update();
    }
    pl.done();

    writer.flush().context("Could not flush writer")
}

/// Writes the `Language Country PrimaryClass` file: one line of codes (or [`NA`]) per node
pub fn write_categorical_attributes<G: CitationGraph, W: Write>(
    writer: W,
    graph: &G,
    order: &NodeOrder,
    attributes: &AttributeStore,
) -> Result<()> {
    write_attributes(
        writer,
        graph,
        order,
        attributes,
        &CATEGORICAL_ATTRIBUTES,
        format_categorical,
    )
}

/// Writes the `Year` file: one float (or [`NA`]) per node
pub fn write_continuous_attributes<G: CitationGraph, W: Write>(
    writer: W,
    graph: &G,
    order: &NodeOrder,
    attributes: &AttributeStore,
) -> Result<()> {
    write_attributes(
        writer,
        graph,
        order,
        attributes,
        &CONTINUOUS_ATTRIBUTES,
        format_continuous,
    )
}

/// Writes the original id of every node, so rows of the other files can be mapped
/// back to patents
pub fn write_node_ids<W: Write>(mut writer: W, order: &NodeOrder) -> Result<()> {
    writeln!(writer, "nodeid").context("Could not write header")?;
    for node in order.iter() {
        writeln!(writer, "{node}").context("Could not write node id")?;
    }
    writer.flush().context("Could not flush writer")
}

/// Writes the arcs of the graph as a Pajek arc list, whose vertices are numbered
/// from 1 following `order`
pub fn write_arcs<G: ForwardCitationGraph, W: Write>(
    mut writer: W,
    graph: &G,
    order: &NodeOrder,
) -> Result<()> {
    ensure!(
        order.len() == graph.num_nodes(),
        "Node order has {} nodes, but graph has {}",
        order.len(),
        graph.num_nodes()
    );
    let vertex = |node: NodeId| {
        order
            .index_of(node)
            .map(|position| position + 1)
            .with_context(|| format!("Node {node} is not in the node order"))
    };

    writeln!(writer, "*vertices {}", graph.num_nodes()).context("Could not write header")?;
    writeln!(writer, "*arcs").context("Could not write header")?;

    let mut pl = progress_logger!(
        display_memory = true,
        item_name = "arc",
        local_speed = true,
        expected_updates = Some(graph.num_arcs()),
    );
    pl.start("Writing arcs...");
    for (src, dst) in graph.iter_arcs() {
        writeln!(writer, "{} {}", vertex(src)?, vertex(dst)?).context("Could not write arc")?;
        pl.light_update();
    }
    pl.done();

    writer.flush().context("Could not flush writer")
}
