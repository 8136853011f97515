// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{FieldError, ValidationError};
use crate::models::{NewTransaction, TxKind};

pub const DEFAULT_ACCOUNT: &str = "Kas";

const INCOME_CATEGORIES: &[&str] = &["Penjualan", "Pendapatan Lain"];
const EXPENSE_CATEGORIES: &[&str] = &[
    "Gaji",
    "Sewa",
    "Pembelian Bahan Baku",
    "Operasional",
    "Beban Lain",
];

/// Categories offered for a kind; the first one is the default.
pub fn categories_for(kind: TxKind) -> &'static [&'static str] {
    match kind {
        TxKind::Income => INCOME_CATEGORIES,
        TxKind::Expense => EXPENSE_CATEGORIES,
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    MinChars(usize),
    Positive,
    CategoryOfKind,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

pub const NEW_TRANSACTION_RULES: &[FieldRule] = &[
    FieldRule { field: "date", rule: Rule::Required, message: "Transaction date is required." },
    FieldRule { field: "kind", rule: Rule::Required, message: "Transaction kind is required." },
    FieldRule {
        field: "description",
        rule: Rule::MinChars(3),
        message: "Description must have at least 3 characters.",
    },
    FieldRule { field: "amount", rule: Rule::Positive, message: "Amount must be greater than 0." },
    FieldRule { field: "category", rule: Rule::Required, message: "Category is required." },
    FieldRule {
        field: "category",
        rule: Rule::CategoryOfKind,
        message: "Category is not offered for this transaction kind.",
    },
    FieldRule { field: "account", rule: Rule::Required, message: "Account is required." },
];

enum Value<'a> {
    Text(&'a str),
    Present(bool),
    Amount(i64),
}

fn value_of<'a>(tx: &'a NewTransaction, field: &str) -> Option<Value<'a>> {
    Some(match field {
        "date" => Value::Present(tx.date.is_some()),
        "kind" => Value::Present(tx.kind.is_some()),
        "description" => Value::Text(&tx.description),
        "amount" => Value::Amount(tx.amount),
        "category" => Value::Text(&tx.category),
        "account" => Value::Text(&tx.account),
        _ => return None,
    })
}

fn passes(tx: &NewTransaction, rule: &FieldRule) -> bool {
    let Some(value) = value_of(tx, rule.field) else {
        return false;
    };
    match (rule.rule, value) {
        (Rule::Required, Value::Present(p)) => p,
        (Rule::Required, Value::Text(s)) => !s.trim().is_empty(),
        (Rule::Required, Value::Amount(_)) => true,
        (Rule::MinChars(n), Value::Text(s)) => s.trim().chars().count() >= n,
        (Rule::Positive, Value::Amount(a)) => a > 0,
        (Rule::CategoryOfKind, Value::Text(s)) => match tx.kind {
            Some(kind) => s.trim().is_empty() || categories_for(kind).contains(&s.trim()),
            // a missing kind is reported by its own rule
            None => true,
        },
        _ => false,
    }
}

/// Check a form against a rule table and collect every failure.
pub fn check_rules(tx: &NewTransaction, rules: &[FieldRule]) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|r| !passes(tx, r))
        .map(|r| FieldError {
            field: r.field,
            message: r.message.to_string(),
        })
        .collect()
}

pub fn validate(tx: &NewTransaction) -> Result<(), ValidationError> {
    validate_with(tx, Vec::new())
}

/// Like [`validate`], but starts from errors raised while reading the raw
/// input (an unparseable date, say). Rule failures on a field that already
/// has such an error are dropped; the result follows the rule table order.
pub fn validate_with(tx: &NewTransaction, mut errors: Vec<FieldError>) -> Result<(), ValidationError> {
    let rule_errors: Vec<FieldError> = check_rules(tx, NEW_TRANSACTION_RULES)
        .into_iter()
        .filter(|e| !errors.iter().any(|p| p.field == e.field))
        .collect();
    errors.extend(rule_errors);
    let position = |field: &str| {
        NEW_TRANSACTION_RULES
            .iter()
            .position(|r| r.field == field)
            .unwrap_or(usize::MAX)
    };
    errors.sort_by_key(|e| position(e.field));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(errors))
    }
}

/// Ledger amount for an entered magnitude.
pub fn signed_amount(kind: TxKind, magnitude: i64) -> i64 {
    match kind {
        TxKind::Income => magnitude.abs(),
        TxKind::Expense => -magnitude.abs(),
    }
}
