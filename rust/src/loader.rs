// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Reads a patent extract: the citation graph and the per-patent attribute records
//!
//! An extract is a directory containing:
//!
//! * `citations.csv`, with header `citing,cited` and one arc per line
//! * `patents.csv`, whose first column is the patent id and every other column
//!   is an attribute (eg. `id,Language,Country,PrimaryClass,Year`)
//!
//! Patent ids are integers. Attribute fields may be blank, and lines of `patents.csv`
//! may be shorter than its header; missing trailing fields are read as blank.

use std::path::Path;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::attributes::{AttributeStore, ColumnIndex};
use crate::graph::*;
use crate::graph_builder::GraphBuilder;

pub const CITATIONS_FILENAME: &str = "citations.csv";
pub const PATENTS_FILENAME: &str = "patents.csv";

#[derive(Debug, Deserialize)]
struct Citation {
    citing: NodeId,
    cited: NodeId,
}

/// Everything read from an extract
#[derive(Debug)]
pub struct PatentDataset {
    pub graph: AdjacencyGraph,
    pub attributes: AttributeStore,
}

/// Loads the citation graph and attribute records of the extract in `data_dir`
pub fn load_epo_patent_data(data_dir: impl AsRef<Path>) -> Result<PatentDataset> {
    let data_dir = data_dir.as_ref();
    info!("Loading data from {}...", data_dir.display());
    let start = Instant::now();

    let graph = load_citations(data_dir.join(CITATIONS_FILENAME))?;
    let attributes = load_patents(data_dir.join(PATENTS_FILENAME))?;

    info!("Data loaded in {:.3}s", start.elapsed().as_secs_f64());
    Ok(PatentDataset { graph, attributes })
}

/// Reads the citation graph from a `citing,cited` CSV file
pub fn load_citations(path: impl AsRef<Path>) -> Result<AdjacencyGraph> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Could not open {}", path.display()))?;

    let mut builder = GraphBuilder::default();
    for citation in reader.deserialize::<Citation>() {
        let Citation { citing, cited } =
            citation.with_context(|| format!("Could not read citation from {}", path.display()))?;
        builder.arc(citing, cited);
    }
    let graph = builder.done();

    info!(
        "Citation graph: {} nodes, {} arcs ({} duplicate arcs collapsed)",
        graph.num_nodes(),
        graph.num_arcs(),
        builder.num_added_arcs() - graph.num_arcs()
    );
    Ok(graph)
}

/// Reads attribute records from a CSV file whose first column is the patent id
pub fn load_patents(path: impl AsRef<Path>) -> Result<AttributeStore> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Could not open {}", path.display()))?;

    let header = reader
        .headers()
        .with_context(|| format!("Could not read header of {}", path.display()))?
        .clone();
    ensure!(!header.is_empty(), "{} has an empty header", path.display());
    let columns = ColumnIndex::new(header.iter().skip(1))
        .with_context(|| format!("Invalid header in {}", path.display()))?;
    let width = columns.len();
    let mut attributes = AttributeStore::new(columns);

    let mut num_duplicates = 0usize;
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Could not read record from {}", path.display()))?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        ensure!(
            record.len() <= width + 1,
            "Line {} of {} has {} fields, but the header has {}",
            line,
            path.display(),
            record.len(),
            width + 1
        );
        let id = record.get(0).unwrap_or_default();
        let node: NodeId = id.parse().with_context(|| {
            format!(
                "Invalid patent id {:?} on line {} of {}",
                id,
                line,
                path.display()
            )
        })?;
        let values = (1..=width).map(|i| record.get(i).unwrap_or_default().to_owned());
        if !attributes.insert(node, values)? {
            num_duplicates += 1;
            warn!(
                "Duplicate record for patent {} on line {} of {}, keeping the first one",
                node,
                line,
                path.display()
            );
        }
    }

    info!(
        "Loaded {} patent records with {} attributes ({} duplicates ignored)",
        attributes.len(),
        width,
        num_duplicates
    );
    Ok(attributes)
}
