// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

//! In-memory patent citation graph and per-patent attributes, and the steps needed
//! to align them before exporting them to network estimation tools:
//!
//! 1. [`loader`] reads the graph and the attribute records
//! 2. [`encoding`] turns categorical attributes into dense integer codes
//! 3. [`reduce`] removes self-loops, optionally restricts the graph to patents
//!    with attributes, and produces the canonical [`NodeOrder`](order::NodeOrder)

pub mod attributes;
pub mod collections;
pub mod encoding;
pub mod graph;
pub mod graph_builder;
pub mod loader;
pub mod order;
pub mod reduce;

/// The current version of patent-citations.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
