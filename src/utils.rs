// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::sync::Once;

use crate::selection::MonthSelection;

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kasbook=warn"));
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<MonthSelection> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(MonthSelection::from_date(d))
}

/// Display conventions picked from the configured locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// `id-*`: `.` thousands separator, Indonesian month names.
    Indonesian,
    /// Anything else: `,` thousands separator, English month names.
    English,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("id") {
            Locale::Indonesian
        } else {
            Locale::English
        }
    }

    fn thousands_sep(&self) -> char {
        match self {
            Locale::Indonesian => '.',
            Locale::English => ',',
        }
    }
}

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 0-based month.
pub fn month_name(month0: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::Indonesian => &MONTHS_ID,
        Locale::English => &MONTHS_EN,
    };
    names[(month0 % 12) as usize]
}

pub fn month_label(sel: MonthSelection, locale: Locale) -> String {
    format!("{} {}", month_name(sel.month, locale), sel.year)
}

/// Whole-unit amount, e.g. `Rp 1.050.000` for id-ID; negatives as `-Rp 100.000`.
pub fn fmt_money(amount: i64, ccy: &str, locale: Locale) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sep = locale.thousands_sep();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    let symbol = if ccy.eq_ignore_ascii_case("IDR") {
        "Rp".to_string()
    } else {
        ccy.to_uppercase()
    };
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, symbol, grouped)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        let id = Locale::Indonesian;
        assert_eq!(fmt_money(0, "IDR", id), "Rp 0");
        assert_eq!(fmt_money(999, "IDR", id), "Rp 999");
        assert_eq!(fmt_money(1_050_000, "IDR", id), "Rp 1.050.000");
        assert_eq!(fmt_money(-100_000, "IDR", id), "-Rp 100.000");
        assert_eq!(fmt_money(12_345, "usd", Locale::English), "USD 12,345");
        assert_eq!(fmt_money(-1_050_000, "IDR", Locale::English), "-Rp 1,050,000");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::from_tag("id-ID"), Locale::Indonesian);
        assert_eq!(Locale::from_tag("ID"), Locale::Indonesian);
        assert_eq!(Locale::from_tag("en-US"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
    }

    #[test]
    fn month_parsing() {
        let sel = parse_month("2025-02").unwrap();
        assert_eq!(sel, MonthSelection::new(2025, 1));
        assert!(parse_month("2025-13").is_err());
        assert_eq!(month_label(sel, Locale::Indonesian), "Februari 2025");
        assert_eq!(month_label(sel, Locale::English), "February 2025");
    }
}
