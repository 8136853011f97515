// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly totals over the ledger and the stateful view that keeps them in
//! sync with the selected month.

use serde::Serialize;

use crate::models::{TransactionRecord, TxKind};
use crate::selection::MonthSelection;
use crate::store::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub total_income: i64,
    pub total_expense: i64,
    pub net_profit: i64,
    pub transaction_count: usize,
    pub matched_records: Vec<TransactionRecord>,
}

impl MonthlyAggregate {
    pub fn is_empty(&self) -> bool {
        self.matched_records.is_empty()
    }
}

/// Filter `records` to the selected month and total them. Source order is kept.
/// Totals saturate at the `i64` bounds instead of overflowing.
pub fn aggregate(records: &[TransactionRecord], selection: MonthSelection) -> MonthlyAggregate {
    let matched: Vec<TransactionRecord> = records
        .iter()
        .filter(|r| selection.contains(r.date))
        .cloned()
        .collect();

    let mut income = 0i64;
    let mut expense = 0i64;
    for r in &matched {
        match r.kind {
            TxKind::Income => income = income.saturating_add(r.magnitude()),
            TxKind::Expense => expense = expense.saturating_add(r.magnitude()),
        }
    }

    MonthlyAggregate {
        total_income: income,
        total_expense: expense,
        net_profit: income.saturating_sub(expense),
        transaction_count: matched.len(),
        matched_records: matched,
    }
}

/// Holds the selected month and its aggregate; every change recomputes once.
pub struct ReportView<'a> {
    store: &'a RecordStore,
    selection: MonthSelection,
    current: MonthlyAggregate,
}

impl<'a> ReportView<'a> {
    pub fn new(store: &'a RecordStore, selection: MonthSelection) -> Self {
        let mut view = Self {
            store,
            selection,
            current: MonthlyAggregate::default(),
        };
        view.recompute();
        view
    }

    pub fn selection(&self) -> MonthSelection {
        self.selection
    }

    pub fn aggregate(&self) -> &MonthlyAggregate {
        &self.current
    }

    pub fn select_month(&mut self, month: u32) -> &MonthlyAggregate {
        self.selection = self.selection.set_month(month);
        self.recompute();
        &self.current
    }

    pub fn select_year(&mut self, year: i32) -> &MonthlyAggregate {
        self.selection = self.selection.set_year(year);
        self.recompute();
        &self.current
    }

    fn recompute(&mut self) {
        self.current = aggregate(self.store.records(), self.selection);
        tracing::info!(
            month = %self.selection.key(),
            count = self.current.transaction_count,
            "report updated"
        );
    }
}
