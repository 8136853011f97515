// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use crate::utils::pretty_table;
use crate::validation::categories_for;
use anyhow::{Result, anyhow};

pub fn rows(kind: Option<TxKind>) -> Vec<Vec<String>> {
    let kinds = match kind {
        Some(k) => vec![k],
        None => vec![TxKind::Income, TxKind::Expense],
    };
    kinds
        .into_iter()
        .flat_map(|k| {
            categories_for(k)
                .iter()
                .map(move |c| vec![k.to_string(), c.to_string()])
        })
        .collect()
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kind = sub
            .get_one::<String>("kind")
            .map(|s| s.parse::<TxKind>().map_err(|e| anyhow!(e)))
            .transpose()?;
        println!("{}", pretty_table(&["Kind", "Category"], rows(kind)));
    }
    Ok(())
}
