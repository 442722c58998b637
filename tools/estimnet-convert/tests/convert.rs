// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

use std::path::Path;

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;

use estimnet_convert::writers::CATEGORICAL_ATTRIBUTES;
use estimnet_convert::*;
use patent_citations::attributes::{AttributeStore, ColumnIndex};
use patent_citations::graph_builder::GraphBuilder;
use patent_citations::reduce::ReductionMode;

#[path = "../../../rust/tests/data/mod.rs"]
mod data;
use data::write;

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

struct Outputs {
    citations: String,
    catattr: String,
    contattr: String,
    nodeid: String,
}

fn read_outputs(dir: &Path) -> Result<Outputs> {
    Ok(Outputs {
        citations: read(&dir.join(CITATIONS_FILENAME))?,
        catattr: read(&dir.join(CATEGORICAL_ATTRIBUTES_FILENAME))?,
        contattr: read(&dir.join(CONTINUOUS_ATTRIBUTES_FILENAME))?,
        nodeid: read(&dir.join(NODE_IDS_FILENAME))?,
    })
}

fn run(data_dir: &Path, output_dir: &Path, mode: ReductionMode) -> Result<ConversionSummary> {
    convert(&Config {
        data_dir: data_dir.to_owned(),
        output_dir: output_dir.to_owned(),
        mode,
    })
}

#[test]
fn test_full_graph() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    data::write_test_extract_1(data_dir.path())?;

    let summary = run(data_dir.path(), output_dir.path(), ReductionMode::Full)?;
    let outputs = read_outputs(output_dir.path())?;

    assert_eq!(
        outputs.citations,
        "*vertices 4\n*arcs\n1 2\n2 3\n3 1\n3 4\n"
    );
    assert_eq!(
        outputs.catattr,
        "Language Country PrimaryClass\n1 1 0\nNA NA NA\n0 NA NA\nNA NA NA\n"
    );
    assert_eq!(outputs.contattr, "Year\n2003.0\nNA\n1999.0\nNA\n");
    assert_eq!(outputs.nodeid, "nodeid\n1\n2\n3\n4\n");

    assert_eq!(summary.stats.num_self_loops, 2);
    assert_eq!(summary.stats.num_nodes, 4);
    assert_eq!(summary.stats.num_arcs, 4);
    assert_eq!(summary.stats.num_attributed, 2);
    assert_eq!(summary.stats.num_synthesized, 2);
    assert_eq!(
        summary
            .encodings
            .iter()
            .map(|encoding| encoding.column.as_str())
            .collect::<Vec<_>>(),
        CATEGORICAL_ATTRIBUTES.to_vec()
    );
    Ok(())
}

#[test]
fn test_attributed_only() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    data::write_test_extract_1(data_dir.path())?;

    let summary = run(
        data_dir.path(),
        output_dir.path(),
        ReductionMode::AttributedOnly,
    )?;
    let outputs = read_outputs(output_dir.path())?;

    assert_eq!(outputs.citations, "*vertices 2\n*arcs\n2 1\n");
    // Codes are computed over every record, including those not in the subgraph
    assert_eq!(
        outputs.catattr,
        "Language Country PrimaryClass\n1 1 0\n0 NA NA\n"
    );
    assert_eq!(outputs.contattr, "Year\n2003.0\n1999.0\n");
    assert_eq!(outputs.nodeid, "nodeid\n1\n3\n");

    assert_eq!(summary.stats.num_nodes, 2);
    assert_eq!(summary.stats.num_attributed, 2);
    assert_eq!(summary.stats.num_synthesized, 0);
    Ok(())
}

#[test]
fn test_uncited_patent_without_record() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    write(
        &data_dir.path().join("citations.csv"),
        "citing,cited\n1,2\n2,2\n2,3\n",
    )?;
    write(
        &data_dir.path().join("patents.csv"),
        "id,Language,Country,PrimaryClass,Year\n1,EN,US,A01,2001\n3,FR,FR,B02,2002\n",
    )?;

    run(data_dir.path(), output_dir.path(), ReductionMode::Full)?;
    let outputs = read_outputs(output_dir.path())?;

    assert_eq!(outputs.citations, "*vertices 3\n*arcs\n1 2\n2 3\n");
    assert_eq!(
        outputs.catattr,
        "Language Country PrimaryClass\n0 1 0\nNA NA NA\n1 0 1\n"
    );
    assert_eq!(outputs.contattr, "Year\n2001.0\nNA\n2002.0\n");
    assert_eq!(outputs.nodeid, "nodeid\n1\n2\n3\n");
    Ok(())
}

#[test]
fn test_rows_aligned() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    data::write_test_extract_1(data_dir.path())?;

    for mode in [ReductionMode::Full, ReductionMode::AttributedOnly] {
        let output_dir = tempfile::tempdir()?;
        let summary = run(data_dir.path(), output_dir.path(), mode)?;
        let outputs = read_outputs(output_dir.path())?;

        // one header line each
        let num_rows = summary.stats.num_nodes + 1;
        assert_eq!(outputs.catattr.lines().count(), num_rows, "{mode:?}");
        assert_eq!(outputs.contattr.lines().count(), num_rows, "{mode:?}");
        assert_eq!(outputs.nodeid.lines().count(), num_rows, "{mode:?}");

        for line in outputs.citations.lines().skip(2) {
            let (src, dst) = line.split_once(' ').context("Malformed arc line")?;
            assert_ne!(src, dst, "self-loop in {mode:?}");
            for vertex in [src, dst] {
                let vertex: usize = vertex.parse()?;
                assert!((1..=summary.stats.num_nodes).contains(&vertex));
            }
        }
    }
    Ok(())
}

#[test]
fn test_idempotent() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    data::write_test_extract_1(data_dir.path())?;

    run(data_dir.path(), output_dir.path(), ReductionMode::Full)?;
    let first = read_outputs(output_dir.path())?;
    run(data_dir.path(), output_dir.path(), ReductionMode::Full)?;
    let second = read_outputs(output_dir.path())?;

    assert_eq!(first.citations, second.citations);
    assert_eq!(first.catattr, second.catattr);
    assert_eq!(first.contattr, second.contattr);
    assert_eq!(first.nodeid, second.nodeid);
    Ok(())
}

#[test]
fn test_creates_output_dir() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    data::write_test_extract_1(data_dir.path())?;
    let nested = output_dir.path().join("a").join("b");

    run(data_dir.path(), &nested, ReductionMode::Full)?;
    assert!(nested.join(NODE_IDS_FILENAME).exists());
    Ok(())
}

#[test]
fn test_missing_extract() -> Result<()> {
    let data_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;

    assert!(run(data_dir.path(), output_dir.path(), ReductionMode::Full).is_err());
    assert!(!output_dir.path().join(NODE_IDS_FILENAME).exists());
    Ok(())
}

#[test]
fn test_convert_dataset_missing_column() -> Result<()> {
    let output_dir = tempfile::tempdir()?;
    let mut builder = GraphBuilder::default();
    builder.arc(1, 2);
    let mut attributes = AttributeStore::new(ColumnIndex::new(["Language", "Year"])?);
    attributes.insert(1, ["EN", "2000"])?;

    let err = convert_dataset(
        builder.done(),
        attributes,
        ReductionMode::Full,
        output_dir.path(),
    )
    .unwrap_err();
    assert!(
        format!("{err:#}").contains("Country"),
        "unexpected error: {err:#}"
    );
    Ok(())
}
