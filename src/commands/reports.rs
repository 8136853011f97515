// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{MonthlyAggregate, ReportView};
use crate::config::Settings;
use crate::selection::{MonthSelection, month_options, year_options};
use crate::store::RecordStore;
use crate::utils::{Locale, fmt_money, maybe_print_json, month_label, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct MonthlyReport {
    pub month: String,
    pub label: String,
    #[serde(flatten)]
    pub totals: MonthlyAggregate,
}

/// Resolve the report month: start from `base`, then apply `--year` and
/// `--month` as independent selector changes.
pub fn build_report(
    store: &RecordStore,
    base: MonthSelection,
    locale: Locale,
    sub: &clap::ArgMatches,
) -> MonthlyReport {
    let mut view = ReportView::new(store, base);
    if let Some(y) = sub.get_one::<i32>("year") {
        view.select_year(*y);
    }
    if let Some(m) = sub.get_one::<u32>("month") {
        view.select_month(*m - 1);
    }
    let sel = view.selection();
    MonthlyReport {
        month: sel.key(),
        label: month_label(sel, locale),
        totals: view.aggregate().clone(),
    }
}

pub fn handle(store: &RecordStore, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let locale = settings.locale();
    let report = build_report(store, MonthSelection::current(), locale, sub);
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let ccy = settings.currency.as_str();
    let t = &report.totals;
    println!("{}", report.label);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Net profit", "Transactions"],
            vec![vec![
                fmt_money(t.total_income, ccy, locale),
                fmt_money(t.total_expense, ccy, locale),
                fmt_money(t.net_profit, ccy, locale),
                t.transaction_count.to_string(),
            ]],
        )
    );
    if t.is_empty() {
        println!("No transactions for {}.", report.label);
        return Ok(());
    }
    let rows = t
        .matched_records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.date.to_string(),
                r.description.clone(),
                r.category.clone(),
                fmt_money(r.amount, ccy, locale),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
    );
    Ok(())
}

pub fn months(locale: Locale) {
    let current = MonthSelection::current();
    let months: Vec<Vec<String>> = month_options(locale)
        .into_iter()
        .map(|(i, name)| vec![(i + 1).to_string(), name.to_string()])
        .collect();
    println!("{}", pretty_table(&["Month", "Name"], months));
    let years: Vec<String> = year_options(current.year)
        .into_iter()
        .map(|y| y.to_string())
        .collect();
    println!("Years: {}", years.join(", "));
}
