// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::errors::StoreError;
use crate::models::{TransactionRecord, TxKind};

/// Largest magnitude a single record may carry.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

static ID_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ACC-\d{3,}$").expect("id regex"));

// Seed ledger, newest first.
const SEED: &[(&str, (i32, u32, u32), &str, TxKind, i64, &str)] = &[
    ("ACC-001", (2025, 1, 4), "Penjualan Kemeja Batik", TxKind::Income, 250_000, "Penjualan"),
    ("ACC-002", (2025, 1, 4), "Pembelian Bahan Baku", TxKind::Expense, -150_000, "Pembelian"),
    ("ACC-003", (2025, 1, 3), "Penjualan Tas Kulit", TxKind::Income, 450_000, "Penjualan"),
    ("ACC-004", (2025, 1, 3), "Bayar Listrik Toko", TxKind::Expense, -120_000, "Operasional"),
    ("ACC-005", (2025, 1, 2), "Penjualan Sepatu Sport", TxKind::Income, 350_000, "Penjualan"),
    ("ACC-006", (2025, 1, 2), "Gaji Karyawan", TxKind::Expense, -500_000, "Gaji"),
    ("ACC-007", (2025, 2, 10), "Penjualan Kaos", TxKind::Income, 100_000, "Penjualan"),
    ("ACC-008", (2025, 2, 15), "Sewa Toko", TxKind::Expense, -200_000, "Operasional"),
];

pub fn fixture_records() -> Vec<TransactionRecord> {
    SEED.iter()
        .map(|(id, (y, m, d), desc, kind, amount, cat)| TransactionRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(*y, *m, *d).expect("valid fixture date"),
            description: desc.to_string(),
            kind: *kind,
            amount: *amount,
            category: cat.to_string(),
        })
        .collect()
}

/// Read records from CSV without checking store invariants.
pub fn read_csv<R: Read>(rdr: R) -> Result<Vec<TransactionRecord>, StoreError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

pub fn read_csv_path(path: &Path) -> Result<Vec<TransactionRecord>, StoreError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Read-only, ordered set of ledger entries for one session.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<TransactionRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(StoreError::DuplicateId(r.id.clone()));
            }
            if !r.kind.accepts(r.amount) {
                return Err(StoreError::SignMismatch {
                    id: r.id.clone(),
                    kind: r.kind,
                    amount: r.amount,
                });
            }
            if !in_range(r.amount) {
                return Err(StoreError::AmountOutOfRange {
                    id: r.id.clone(),
                    amount: r.amount,
                });
            }
        }
        tracing::debug!(count = records.len(), "record store loaded");
        Ok(Self { records })
    }

    pub fn fixture() -> Result<Self, StoreError> {
        Self::new(fixture_records())
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, StoreError> {
        Self::new(read_csv_path(path)?)
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn in_range(amount: i64) -> bool {
    (-MAX_AMOUNT..=MAX_AMOUNT).contains(&amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub code: &'static str,
    pub detail: String,
}

/// Data-quality findings for a raw record list. Unlike [`RecordStore::new`]
/// this keeps going and reports everything it finds.
pub fn check(records: &[TransactionRecord]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id.as_str()) {
            issues.push(Issue {
                code: "duplicate_id",
                detail: r.id.clone(),
            });
        }
        if !r.kind.accepts(r.amount) {
            issues.push(Issue {
                code: "sign_mismatch",
                detail: format!("{} {} {}", r.id, r.kind, r.amount),
            });
        }
        if !in_range(r.amount) {
            issues.push(Issue {
                code: "amount_range",
                detail: format!("{} {}", r.id, r.amount),
            });
        }
        if !ID_FORMAT.is_match(&r.id) {
            issues.push(Issue {
                code: "id_format",
                detail: r.id.clone(),
            });
        }
    }
    issues
}
