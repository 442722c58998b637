// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! Conversion of categorical attributes from strings to dense integer codes, like
//! `factor()` in R.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};

use crate::attributes::{AttributeStore, AttributeValue};

/// Value used in the source extract for an unknown category
pub const PLACEHOLDER: &str = "XX";

/// Returns whether a raw categorical value stands for a missing category
pub fn is_missing_category(value: &str) -> bool {
    value.is_empty() || value == PLACEHOLDER
}

/// Mapping applied by [`encode_categorical`] to a column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoricalEncoding {
    pub column: String,
    /// Code assigned to each distinct category
    pub codes: BTreeMap<String, u32>,
    /// Number of records whose value is now [`AttributeValue::Missing`]
    pub num_missing: usize,
}

impl CategoricalEncoding {
    /// Builds the mapping of a column from its raw values.
    ///
    /// Distinct values are sorted before being numbered, so the same set of values
    /// always produces the same codes, whatever order they are given in.
    /// Missing categories (see [`is_missing_category`]) get no code.
    pub fn from_values<'a, I: IntoIterator<Item = &'a str>>(column: &str, values: I) -> Self {
        let distinct: BTreeSet<&str> = values
            .into_iter()
            .filter(|value| !is_missing_category(value))
            .collect();
        let codes = distinct
            .into_iter()
            .zip(0u32..)
            .map(|(value, code)| (value.to_owned(), code))
            .collect();
        CategoricalEncoding {
            column: column.to_owned(),
            codes,
            num_missing: 0,
        }
    }

    pub fn num_categories(&self) -> usize {
        self.codes.len()
    }

    /// Returns the value a raw category should be replaced with
    pub fn encode(&self, value: &str) -> AttributeValue {
        match self.codes.get(value) {
            Some(&code) => AttributeValue::Code(code),
            None => AttributeValue::Missing,
        }
    }
}

/// Replaces every value of a categorical column with its code, across all records
/// of the store.
///
/// Values that were already encoded or missing are left untouched.
pub fn encode_categorical(store: &mut AttributeStore, column: &str) -> Result<CategoricalEncoding> {
    let position = store
        .columns()
        .position(column)
        .with_context(|| format!("Could not encode categorical column {column}"))?;

    let mut encoding = CategoricalEncoding::from_values(
        column,
        store
            .node_ids()
            .filter_map(|node| match store.get(node, position) {
                Some(AttributeValue::Text(value)) => Some(value.as_str()),
                _ => None,
            }),
    );

    for (_node, value) in store.column_mut(position) {
        if let AttributeValue::Text(raw) = &*value {
            let encoded = encoding.encode(raw);
            *value = encoded;
        }
        if value.is_missing() {
            encoding.num_missing += 1;
        }
    }

    info!(
        "{} distinct values and {} NA for {}",
        encoding.num_categories(),
        encoding.num_missing,
        column
    );
    debug!(
        "Codes for {}: {{{}}}",
        column,
        encoding
            .codes
            .iter()
            .map(|(value, code)| format!("{value:?}: {code}"))
            .join(", ")
    );

    Ok(encoding)
}

/// Runs [`encode_categorical`] on each column in turn. Codes of different columns
/// are independent.
pub fn encode_categorical_columns<I: IntoIterator<Item: AsRef<str>>>(
    store: &mut AttributeStore,
    columns: I,
) -> Result<Vec<CategoricalEncoding>> {
    columns
        .into_iter()
        .map(|column| encode_categorical(store, column.as_ref()))
        .collect()
}
