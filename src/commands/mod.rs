// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod doctor;
pub mod exporter;
pub mod reports;
pub mod transactions;

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::models::TransactionRecord;
use crate::store;

/// Raw records from the configured CSV file, or the built-in ledger.
pub fn load_records(settings: &Settings) -> Result<Vec<TransactionRecord>> {
    match &settings.data_file {
        Some(path) => store::read_csv_path(path)
            .with_context(|| format!("Load records from {}", path.display())),
        None => Ok(store::fixture_records()),
    }
}

/// `--data` is global, so it may sit on any level of the parsed tree.
pub fn data_flag(m: &clap::ArgMatches) -> Option<String> {
    let mut found = m.get_one::<String>("data").cloned();
    let mut cur = m;
    while let Some((_, sub)) = cur.subcommand() {
        if let Some(v) = sub.get_one::<String>("data") {
            found = Some(v.clone());
        }
        cur = sub;
    }
    found
}
