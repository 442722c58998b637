// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Synthetic patent extracts built for test purposes

use std::path::Path;

use anyhow::{Context, Result};

/// Writes an extract with:
///
/// ```text
/// 1 -> 2 -> 3 -> 1
///      ^    |
///      |    v
///      2    4 -> 4
/// ```
///
/// where 2 and 4 cite themselves, and only patents 1, 3 and 5 have a record
/// (5 is neither cited nor citing).
#[allow(dead_code)]
pub fn write_test_extract_1(dir: &Path) -> Result<()> {
    write(
        &dir.join("citations.csv"),
        "citing,cited\n\
         1,2\n\
         2,2\n\
         2,3\n\
         3,1\n\
         3,4\n\
         4,4\n\
         1,2\n",
    )?;
    write(
        &dir.join("patents.csv"),
        "id,Language,Country,PrimaryClass,Year\n\
         1,EN,US,H04L,2003\n\
         3, DE ,XX,,1999\n\
         5,,FR\n",
    )?;
    Ok(())
}

pub fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))
}
