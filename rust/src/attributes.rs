// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Per-patent attribute records, keyed by original [`NodeId`]
//!
//! Every record has the same width, described by a shared [`ColumnIndex`].
//! Records start as raw text; [`encoding`](crate::encoding) turns categorical
//! columns into [`AttributeValue::Code`] in place, and [`reduce`](crate::reduce)
//! may add all-[`AttributeValue::Missing`] rows for nodes without a record.
//! Nothing else mutates an [`AttributeStore`].

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::collections::ReadNodeSet;
use crate::graph::NodeId;

/// Textual marker for missing or unparseable data, in every column of every output file
pub const NA: &str = "NA";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("Unknown attribute column: {0}")]
    UnknownColumn(String),
    #[error("Duplicate attribute column: {0}")]
    DuplicateColumn(String),
    #[error("Node {node} has {got} attribute values, expected {expected}")]
    WidthMismatch {
        node: NodeId,
        expected: usize,
        got: usize,
    },
}

/// Maps attribute names to their position in every record
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new<I: IntoIterator<Item: Into<String>>>(names: I) -> Result<Self, AttributeError> {
        let mut index = ColumnIndex::default();
        for name in names {
            let name = name.into();
            if index.positions.contains_key(&name) {
                return Err(AttributeError::DuplicateColumn(name));
            }
            index.positions.insert(name.clone(), index.names.len());
            index.names.push(name);
        }
        Ok(index)
    }

    /// Returns the position of the column with the given name, if any
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Same as [`ColumnIndex::get`], but returns an error for unknown columns
    pub fn position(&self, name: &str) -> Result<usize, AttributeError> {
        self.get(name)
            .ok_or_else(|| AttributeError::UnknownColumn(name.to_owned()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A single attribute of a single patent
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Raw value, as read from the source extract
    Text(String),
    /// Dense categorical code, see [`encoding`](crate::encoding)
    Code(u32),
    /// Known to be missing; rendered as [`NA`]
    Missing,
}

impl AttributeValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeValue::Missing)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Code(code) => write!(f, "{code}"),
            AttributeValue::Missing => f.write_str(NA),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_owned())
    }
}

/// Owned store of attribute records, one fixed-width row per patent
#[derive(Clone, Debug, Default)]
pub struct AttributeStore {
    columns: ColumnIndex,
    rows: HashMap<NodeId, Box<[AttributeValue]>>,
    num_synthesized: usize,
}

impl AttributeStore {
    pub fn new(columns: ColumnIndex) -> Self {
        AttributeStore {
            columns,
            rows: HashMap::new(),
            num_synthesized: 0,
        }
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Adds the record of a patent.
    ///
    /// Returns `Ok(false)` and leaves the store unchanged if the patent already has one.
    pub fn insert<I>(&mut self, node: NodeId, values: I) -> Result<bool, AttributeError>
    where
        I: IntoIterator<Item: Into<AttributeValue>>,
    {
        let row: Box<[AttributeValue]> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(AttributeError::WidthMismatch {
                node,
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        match self.rows.entry(node) {
            std::collections::hash_map::Entry::Occupied(_) => Ok(false),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(row);
                Ok(true)
            }
        }
    }

    /// Adds a row of [`AttributeValue::Missing`] for a patent that has no record.
    ///
    /// Returns `false` if the patent already had a record.
    pub(crate) fn insert_missing(&mut self, node: NodeId) -> bool {
        let width = self.columns.len();
        match self.rows.entry(node) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(vec![AttributeValue::Missing; width].into_boxed_slice());
                self.num_synthesized += 1;
                true
            }
        }
    }

    /// Number of records, including synthesized ones
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of all-[`AttributeValue::Missing`] rows added for patents without a record
    pub fn num_synthesized(&self) -> usize {
        self.num_synthesized
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.rows.contains_key(&node)
    }

    pub fn row(&self, node: NodeId) -> Option<&[AttributeValue]> {
        self.rows.get(&node).map(|row| &row[..])
    }

    /// Returns the value in the given column (see [`ColumnIndex::get`]) of a patent's record
    pub fn get(&self, node: NodeId, column: usize) -> Option<&AttributeValue> {
        self.rows.get(&node).and_then(|row| row.get(column))
    }

    /// Iterator on patents with a record, in arbitrary order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.rows.keys().copied()
    }

    /// Mutable iterator on `(patent, value)` pairs of a column, in arbitrary order
    pub(crate) fn column_mut(
        &mut self,
        column: usize,
    ) -> impl Iterator<Item = (NodeId, &mut AttributeValue)> + '_ {
        self.rows
            .iter_mut()
            .map(move |(node, row)| (*node, &mut row[column]))
    }
}

impl ReadNodeSet for AttributeStore {
    #[inline(always)]
    fn contains(&self, node: NodeId) -> bool {
        AttributeStore::contains(self, node)
    }
}
