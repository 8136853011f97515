// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::errors::FieldError;
use crate::models::{NewTransaction, TransactionRecord, TxKind};
use crate::store::RecordStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_month, pretty_table};
use crate::validation::{signed_amount, validate_with};
use anyhow::{Result, anyhow};

pub fn handle(store: &RecordStore, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, settings, sub)?,
        Some(("new", sub)) => new(settings, sub)?,
        Some(("export", sub)) => crate::commands::exporter::handle(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &RecordStore, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.to_string(),
                    r.description.clone(),
                    r.kind.to_string(),
                    r.category.clone(),
                    fmt_money(r.amount, &settings.currency, settings.locale()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Description", "Kind", "Category", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

/// Records matching the `--month`, `--kind` and `--limit` filters, in ledger order.
pub fn query_rows(store: &RecordStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRecord>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let kind = sub
        .get_one::<String>("kind")
        .map(|s| s.parse::<TxKind>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(store
        .records()
        .iter()
        .filter(|r| month.is_none_or(|m| m.contains(r.date)))
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .take(limit)
        .cloned()
        .collect())
}

/// Collect the form fields. Values that fail to parse come back as field
/// errors so they can be reported with the rule failures.
pub fn form_from_args(sub: &clap::ArgMatches) -> (NewTransaction, Vec<FieldError>) {
    let mut errors = Vec::new();
    let date = sub.get_one::<String>("date").and_then(|s| match parse_date(s) {
        Ok(d) => Some(d),
        Err(e) => {
            errors.push(FieldError {
                field: "date",
                message: e.to_string(),
            });
            None
        }
    });
    let kind = sub.get_one::<String>("kind").and_then(|s| match s.parse::<TxKind>() {
        Ok(k) => Some(k),
        Err(e) => {
            errors.push(FieldError {
                field: "kind",
                message: e,
            });
            None
        }
    });
    let text = |id: &str| sub.get_one::<String>(id).cloned().unwrap_or_default();
    let form = NewTransaction {
        date,
        kind,
        description: text("description"),
        amount: sub.get_one::<i64>("amount").copied().unwrap_or(0),
        category: text("category"),
        account: text("account"),
    };
    (form, errors)
}

fn new(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let (form, parse_errors) = form_from_args(sub);
    if let Err(e) = validate_with(&form, parse_errors) {
        let rows = e
            .0
            .iter()
            .map(|f| vec![f.field.to_string(), f.message.clone()])
            .collect();
        eprintln!("{}", pretty_table(&["Field", "Problem"], rows));
        return Err(e.into());
    }
    // validation guarantees both are present
    let (Some(kind), Some(date)) = (form.kind, form.date) else {
        return Err(anyhow!("Incomplete transaction"));
    };
    let amount = signed_amount(kind, form.amount);
    tracing::info!(?form, "new transaction acknowledged");
    println!(
        "Acknowledged {} of {} on {} ({}, account {}). The ledger is read-only; nothing was added.",
        kind,
        fmt_money(amount, &settings.currency, settings.locale()),
        date,
        form.category.trim(),
        form.account.trim()
    );
    Ok(())
}
