// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use kasbook::selection::{MonthSelection, month_options, year_options};
use kasbook::utils::Locale;

#[test]
fn setters_change_one_field() {
    let sel = MonthSelection::new(2025, 4);
    assert_eq!(sel.set_month(9), MonthSelection::new(2025, 9));
    assert_eq!(sel.set_year(2021), MonthSelection::new(2021, 4));
}

#[test]
fn setters_commute() {
    let start = MonthSelection::new(2023, 6);
    for (y, m) in [(2020, 0), (2025, 11), (2023, 6)] {
        assert_eq!(
            start.set_month(m).set_year(y),
            start.set_year(y).set_month(m)
        );
    }
}

#[test]
fn contains_ignores_day() {
    let sel = MonthSelection::new(2025, 1);
    let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert!(sel.contains(d("2025-02-01")));
    assert!(sel.contains(d("2025-02-28")));
    assert!(!sel.contains(d("2025-03-01")));
    assert!(!sel.contains(d("2024-02-10")));
}

#[test]
fn from_date_is_zero_based() {
    let d = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
    assert_eq!(MonthSelection::from_date(d), MonthSelection::new(2025, 11));
}

#[test]
fn choices() {
    let months = month_options(Locale::Indonesian);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], (0, "Januari"));
    assert_eq!(months[11], (11, "Desember"));
    assert_eq!(month_options(Locale::English)[4], (4, "May"));
    let years = year_options(2025);
    assert_eq!(years.first(), Some(&2020));
    assert_eq!(years.last(), Some(&2030));
}

#[test]
fn current_is_in_window() {
    let cur = MonthSelection::current();
    assert!(cur.month < 12);
    assert!(year_options(cur.year).contains(&cur.year));
}
