// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Converts patent citation data to the input files of EstimNetDirected:
//!
//! * `patent_citations.txt`: arc list, with nodes numbered from 1
//! * `patent_catattr.txt`: `Language Country PrimaryClass` codes of each node
//! * `patent_contattr.txt`: `Year` of each node
//! * `nodeid.txt`: original patent id of each node
//!
//! Line `i` (after the header) of each of these files describes the same node.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use patent_citations::attributes::AttributeStore;
use patent_citations::encoding::{encode_categorical_columns, CategoricalEncoding};
use patent_citations::graph::*;
use patent_citations::loader::{load_epo_patent_data, PatentDataset};
use patent_citations::reduce::{reduce, Reduction, ReductionMode, ReductionStats};

pub mod writers;
use writers::*;

pub const CITATIONS_FILENAME: &str = "patent_citations.txt";
pub const CATEGORICAL_ATTRIBUTES_FILENAME: &str = "patent_catattr.txt";
pub const CONTINUOUS_ATTRIBUTES_FILENAME: &str = "patent_contattr.txt";
pub const NODE_IDS_FILENAME: &str = "nodeid.txt";

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory of the patent extract, see [`patent_citations::loader`]
    pub data_dir: PathBuf,
    /// Where to write output files. Existing files are overwritten.
    pub output_dir: PathBuf,
    pub mode: ReductionMode,
}

#[derive(Debug)]
pub struct ConversionSummary {
    pub encodings: Vec<CategoricalEncoding>,
    pub stats: ReductionStats,
}

/// Loads the extract in `config.data_dir` and writes the converted files to
/// `config.output_dir`
pub fn convert(config: &Config) -> Result<ConversionSummary> {
    let PatentDataset { graph, attributes } =
        load_epo_patent_data(&config.data_dir).context("Could not load patent data")?;
    convert_dataset(graph, attributes, config.mode, &config.output_dir)
}

/// Same as [`convert`], on an already loaded graph and attribute store
pub fn convert_dataset<G: ReducibleGraph>(
    graph: G,
    mut attributes: AttributeStore,
    mode: ReductionMode,
    output_dir: &Path,
) -> Result<ConversionSummary> {
    let encodings = encode_categorical_columns(&mut attributes, CATEGORICAL_ATTRIBUTES)
        .context("Could not encode categorical attributes")?;

    let Reduction {
        graph,
        order,
        stats,
    } = reduce(graph, &mut attributes, mode)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Could not create {}", output_dir.display()))?;

    let path = output_dir.join(CITATIONS_FILENAME);
    write_arcs(create_file(&path)?, &graph, &order)
        .with_context(|| format!("Could not write {}", path.display()))?;

    let path = output_dir.join(CATEGORICAL_ATTRIBUTES_FILENAME);
    write_categorical_attributes(create_file(&path)?, &graph, &order, &attributes)
        .with_context(|| format!("Could not write {}", path.display()))?;

    let path = output_dir.join(CONTINUOUS_ATTRIBUTES_FILENAME);
    write_continuous_attributes(create_file(&path)?, &graph, &order, &attributes)
        .with_context(|| format!("Could not write {}", path.display()))?;

    let path = output_dir.join(NODE_IDS_FILENAME);
    write_node_ids(create_file(&path)?, &order)
        .with_context(|| format!("Could not write {}", path.display()))?;

    info!(
        "Wrote {} nodes and {} arcs to {}",
        order.len(),
        graph.num_arcs(),
        output_dir.display()
    );

    Ok(ConversionSummary { encodings, stats })
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
