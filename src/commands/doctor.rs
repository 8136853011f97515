// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionRecord;
use crate::store::check;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(records: &[TransactionRecord]) -> Result<()> {
    let rows: Vec<Vec<String>> = check(records)
        .into_iter()
        .map(|i| vec![i.code.to_string(), i.detail])
        .collect();

    if rows.is_empty() {
        println!("doctor: no issues found in {} records", records.len());
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
