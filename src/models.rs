// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Whether a signed amount is allowed for this kind. Zero fits both.
    pub fn accepts(&self, amount: i64) -> bool {
        match self {
            TxKind::Income => amount >= 0,
            TxKind::Expense => amount <= 0,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(format!("Unknown kind '{}', expected income|expense", other)),
        }
    }
}

/// One ledger entry. Amounts are signed: income is non-negative and expenses
/// carry the negated magnitude, so `kind` always agrees with the sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub kind: TxKind,
    pub amount: i64,
    pub category: String,
}

impl TransactionRecord {
    pub fn magnitude(&self) -> i64 {
        self.amount.saturating_abs()
    }
}

/// Input of the "new transaction" form. Fields stay optional/raw so the
/// validator can report every missing value at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: Option<NaiveDate>,
    pub kind: Option<TxKind>,
    pub description: String,
    pub amount: i64,
    pub category: String,
    pub account: String,
}
