// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::utils::{Locale, month_name};

/// Years offered either side of the current year.
pub const YEAR_WINDOW: i32 = 5;

/// Calendar month picked for the report. `month` is 0-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthSelection {
    pub year: i32,
    pub month: u32,
}

impl MonthSelection {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(d: NaiveDate) -> Self {
        Self::new(d.year(), d.month0())
    }

    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Same year, new month. Range is the caller's responsibility.
    #[must_use]
    pub fn set_month(self, month: u32) -> Self {
        Self { month, ..self }
    }

    /// Same month, new year.
    #[must_use]
    pub fn set_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && d.month0() == self.month
    }

    /// `YYYY-MM` with a 1-based month.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Month choices as (index, label) pairs.
pub fn month_options(locale: Locale) -> Vec<(u32, &'static str)> {
    (0..12u32)
        .map(|i| (i, month_name(i, locale)))
        .collect()
}

/// Eleven years centred on `current_year`.
pub fn year_options(current_year: i32) -> Vec<i32> {
    ((current_year - YEAR_WINDOW)..=(current_year + YEAR_WINDOW)).collect()
}
