// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use kasbook::commands::{categories, data_flag, exporter, reports, transactions};
use kasbook::config::{Settings, load_from};
use kasbook::models::TxKind;
use kasbook::selection::{MonthSelection, YEAR_WINDOW};
use kasbook::store::{RecordStore, fixture_records, read_csv_path};
use kasbook::utils::Locale;
use kasbook::{cli, validation};
use tempfile::tempdir;

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["kasbook"];
    full.extend_from_slice(args);
    let mut m = cli::build_cli().get_matches_from(full);
    while let Some((_, sub)) = m.subcommand() {
        m = sub.clone();
    }
    m
}

/// Fixture ledger moved into `year`, so year flags stay inside the offered window.
fn ledger_in(year: i32) -> RecordStore {
    let records = fixture_records()
        .into_iter()
        .map(|mut r| {
            r.date = r.date.with_year(year).unwrap();
            r
        })
        .collect();
    RecordStore::new(records).unwrap()
}

#[test]
fn report_month_flag_is_one_based() {
    let store = RecordStore::fixture().unwrap();
    let m = sub_matches(&["report", "--month", "2"]);
    let report = reports::build_report(&store, MonthSelection::new(2025, 0), Locale::Indonesian, &m);
    assert_eq!(report.month, "2025-02");
    assert_eq!(report.label, "Februari 2025");
    assert_eq!(report.totals.net_profit, -100_000);
}

#[test]
fn report_label_follows_locale() {
    let store = RecordStore::fixture().unwrap();
    let m = sub_matches(&["report", "--month", "2"]);
    let report = reports::build_report(&store, MonthSelection::new(2025, 0), Locale::English, &m);
    assert_eq!(report.label, "February 2025");
}

#[test]
fn report_year_and_month() {
    let year = MonthSelection::current().year;
    let store = ledger_in(year);
    let y = year.to_string();

    let m = sub_matches(&["report", "--year", &y, "--month", "12"]);
    let report = reports::build_report(&store, MonthSelection::new(2020, 0), Locale::Indonesian, &m);
    assert_eq!(report.month, format!("{}-12", year));
    assert!(report.totals.is_empty());

    let m = sub_matches(&["report", "--year", &y]);
    let report = reports::build_report(&store, MonthSelection::new(2020, 0), Locale::Indonesian, &m);
    assert_eq!(report.totals.transaction_count, 6);
    assert_eq!(report.totals.total_income, 1_050_000);
}

#[test]
fn report_serializes_flat() {
    let store = RecordStore::fixture().unwrap();
    let m = sub_matches(&["report", "--month", "1"]);
    let report = reports::build_report(&store, MonthSelection::new(2025, 5), Locale::Indonesian, &m);
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["month"], "2025-01");
    assert_eq!(v["total_expense"], 770_000);
    assert_eq!(v["matched_records"][0]["kind"], "income");
    assert_eq!(v["matched_records"][0]["date"], "2025-01-04");
}

#[test]
fn report_rejects_month_thirteen() {
    let res = cli::build_cli().try_get_matches_from(["kasbook", "report", "--month", "13"]);
    assert!(res.is_err());
}

#[test]
fn report_year_limited_to_window() {
    let year = MonthSelection::current().year;
    for ok in [year - YEAR_WINDOW, year, year + YEAR_WINDOW] {
        let y = ok.to_string();
        assert!(cli::build_cli().try_get_matches_from(["kasbook", "report", "--year", &y]).is_ok());
    }
    for bad in [year - YEAR_WINDOW - 1, year + YEAR_WINDOW + 1] {
        let y = bad.to_string();
        assert!(cli::build_cli().try_get_matches_from(["kasbook", "report", "--year", &y]).is_err());
    }
}

#[test]
fn list_filters() {
    let store = RecordStore::fixture().unwrap();
    let rows = transactions::query_rows(&store, &sub_matches(&["tx", "list", "--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "ACC-001");

    let rows = transactions::query_rows(
        &store,
        &sub_matches(&["tx", "list", "--month", "2025-01", "--kind", "expense"]),
    )
    .unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["ACC-002", "ACC-004", "ACC-006"]);
}

#[test]
fn list_rejects_bad_month() {
    let store = RecordStore::fixture().unwrap();
    let m = sub_matches(&["tx", "list", "--month", "January"]);
    assert!(transactions::query_rows(&store, &m).is_err());
}

#[test]
fn new_form_from_args() {
    let m = sub_matches(&[
        "tx",
        "new",
        "--date",
        "2025-01-05",
        "--kind",
        "income",
        "--description",
        "Penjualan Topi",
        "--amount",
        "90000",
        "--category",
        "Penjualan",
    ]);
    let (form, parse_errors) = transactions::form_from_args(&m);
    assert!(parse_errors.is_empty());
    assert_eq!(form.kind, Some(TxKind::Income));
    assert_eq!(form.account, validation::DEFAULT_ACCOUNT);
    assert!(validation::validate(&form).is_ok());
}

#[test]
fn bad_date_reported_with_other_fields() {
    let m = sub_matches(&["tx", "new", "--date", "2025-13-01", "--description", "ab"]);
    let (form, parse_errors) = transactions::form_from_args(&m);
    assert!(form.date.is_none());
    let err = validation::validate_with(&form, parse_errors).unwrap_err();
    assert_eq!(
        err.fields(),
        ["date", "kind", "description", "amount", "category"]
    );
    assert!(err.0[0].message.contains("2025-13-01"));
}

#[test]
fn new_rejects_invalid_form_and_leaves_store_alone() {
    let store = RecordStore::fixture().unwrap();
    let m = cli::build_cli().get_matches_from(["kasbook", "tx", "new", "--amount", "-5"]);
    let Some(("tx", tx_m)) = m.subcommand() else {
        panic!("no tx subcommand");
    };
    let res = transactions::handle(&store, &Settings::default(), tx_m);
    assert!(res.is_err());
    assert_eq!(store.len(), 8);
}

#[test]
fn export_csv_reloads() {
    let store = RecordStore::fixture().unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("ledger.csv");
    let out_str = out.to_string_lossy().to_string();
    let m = sub_matches(&["tx", "export", "--format", "csv", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let back = read_csv_path(&out).unwrap();
    assert_eq!(back, store.records());
}

#[test]
fn export_json() {
    let store = RecordStore::fixture().unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("ledger.json");
    let out_str = out.to_string_lossy().to_string();
    let m = sub_matches(&["tx", "export", "--format", "json", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 8);
    assert_eq!(parsed[7]["id"], "ACC-008");
    assert_eq!(parsed[7]["amount"], -200_000);
}

#[test]
fn category_rows_by_kind() {
    assert_eq!(categories::rows(Some(TxKind::Income)).len(), 2);
    let all = categories::rows(None);
    assert_eq!(all.len(), 7);
    assert_eq!(all[2], vec!["expense".to_string(), "Gaji".to_string()]);
}

#[test]
fn data_flag_after_subcommand() {
    let m = cli::build_cli().get_matches_from(["kasbook", "report", "--data", "x.csv"]);
    assert_eq!(data_flag(&m).as_deref(), Some("x.csv"));
    let m = cli::build_cli().get_matches_from(["kasbook", "report"]);
    assert_eq!(data_flag(&m), None);
}

#[test]
fn settings_defaults_and_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"currency":"USD","data_file":"/tmp/l.csv"}"#).unwrap();
    let s = load_from(&path).unwrap();
    assert_eq!(s.currency, "USD");
    assert_eq!(s.locale(), Locale::Indonesian);

    std::fs::write(&path, r#"{"locale":"en-US"}"#).unwrap();
    let s = load_from(&path).unwrap();
    assert_eq!(s.currency, "IDR");
    assert_eq!(s.locale(), Locale::English);
    assert_eq!(s.data_file.as_deref(), Some(std::path::Path::new("/tmp/l.csv")));
}
