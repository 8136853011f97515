// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use kasbook::{cli, commands, config, store::RecordStore, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();

    let data = commands::data_flag(&matches);
    let settings = config::resolve(data.as_deref())?;
    let records = commands::load_records(&settings)?;

    if let Some(("doctor", _)) = matches.subcommand() {
        return commands::doctor::handle(&records);
    }

    let store = RecordStore::new(records)
        .context("Ledger failed integrity checks; run `kasbook doctor` for details")?;

    match matches.subcommand() {
        Some(("report", sub)) => commands::reports::handle(&store, &settings, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, &settings, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("months", _)) => commands::reports::months(settings.locale()),
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
