// Copyright (C) 2026  The Software Heritage developers
// See the AUTHORS file at the top-level directory of this distribution
// License: GNU General Public License version 3, or any later version
// See top-level LICENSE file for more information

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use estimnet_convert::Config;
use patent_citations::reduce::ReductionMode;

/// Converts patent citation data to EstimNetDirected format.
///
/// Writes patent_citations.txt, patent_catattr.txt, patent_contattr.txt and nodeid.txt
/// to the output directory. WARNING: existing files are overwritten.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// only use the subgraph of patents that have attribute data
    #[arg(short = 'd', long = "attributed-only")]
    attributed_only: bool,
    /// directory to write output files to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// directory containing the patent extract (citations.csv and patents.csv)
    data_dir: PathBuf,
}

impl Args {
    fn config(self) -> Config {
        Config {
            data_dir: self.data_dir,
            output_dir: self.output_dir,
            mode: if self.attributed_only {
                ReductionMode::AttributedOnly
            } else {
                ReductionMode::Full
            },
        }
    }
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    debug!("Debug logging ON...");

    estimnet_convert::convert(&args.config())?;

    Ok(())
}
