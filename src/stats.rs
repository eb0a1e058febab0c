// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregations behind the dashboard, history and report commands.

use crate::categories;
use crate::models::{ALL_CATEGORIES, Budget, Transaction, TransactionType};
use chrono::{Datelike, Days, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

fn local_day<Tz: TimeZone>(t: &Transaction, tz: &Tz) -> NaiveDate {
    t.date.with_timezone(tz).date_naive()
}

pub fn summarize<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in txns {
        match t.r#type {
            TransactionType::Income => income = income.saturating_add(t.amount),
            TransactionType::Expense => expense = expense.saturating_add(t.amount),
        }
    }
    Summary {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}

pub fn month_summary<Tz: TimeZone>(
    txns: &[Transaction],
    year: i32,
    month: u32,
    tz: &Tz,
) -> Summary {
    summarize(txns.iter().filter(|t| {
        let d = local_day(t, tz);
        d.year() == year && d.month() == month
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub total: Decimal,
    pub spent: Decimal,
    pub progress_pct: Decimal,
    pub remaining: Decimal,
    pub over_by: Decimal,
}

/// `part / whole` as a percentage with one decimal; saturates on overflow.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .map(|r| r.saturating_mul(Decimal::ONE_HUNDRED).round_dp(1))
        .unwrap_or(if part.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}

/// Progress of `expense` against the total ("all") budget, if one exists.
pub fn budget_status(budgets: &[Budget], expense: Decimal) -> Option<BudgetStatus> {
    let total = budgets
        .iter()
        .find(|b| b.category_id == ALL_CATEGORIES)?
        .amount;
    let progress_pct = percent_of(expense, total);
    let diff = total.saturating_sub(expense);
    Some(BudgetStatus {
        total,
        spent: expense,
        progress_pct,
        remaining: diff.max(Decimal::ZERO),
        over_by: (-diff).max(Decimal::ZERO),
    })
}

pub fn recent(txns: &[Transaction], n: usize) -> &[Transaction] {
    &txns[..n.min(txns.len())]
}

/// Case-insensitive match on the note or the category display name.
pub fn search<'a>(txns: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
    let needle = term.trim().to_lowercase();
    txns.iter()
        .filter(|t| {
            needle.is_empty()
                || t.note.to_lowercase().contains(&needle)
                || categories::find_by_id(&t.category_id)
                    .is_some_and(|c| c.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Group by calendar day, in order of first appearance.
pub fn group_by_day<'a, Tz: TimeZone>(
    txns: impl IntoIterator<Item = &'a Transaction>,
    tz: &Tz,
) -> Vec<(NaiveDate, Vec<&'a Transaction>)> {
    let mut groups: Vec<(NaiveDate, Vec<&'a Transaction>)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for t in txns {
        let day = local_day(t, tz);
        match index.get(&day).copied() {
            Some(i) => groups[i].1.push(t),
            None => {
                index.insert(day, groups.len());
                groups.push((day, vec![t]));
            }
        }
    }
    groups
}

/// Expense totals per category display name, largest first.
pub fn expense_by_category(txns: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut agg: BTreeMap<&'static str, Decimal> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.r#type == TransactionType::Expense) {
        let sum = agg
            .entry(categories::display_name(&t.category_id))
            .or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(t.amount);
    }
    let mut items: Vec<(String, Decimal)> =
        agg.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

/// The category with the largest expense total.
pub fn top_expense_category(txns: &[Transaction]) -> Option<(String, Decimal)> {
    expense_by_category(txns).into_iter().next()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

pub const MAX_TREND_DAYS: u32 = 366;

/// Income/expense per day for the `days` days ending at `today`, oldest first.
/// The window is capped at [`MAX_TREND_DAYS`] and at the earliest
/// representable date.
pub fn daily_trend<Tz: TimeZone>(
    txns: &[Transaction],
    today: NaiveDate,
    days: u32,
    tz: &Tz,
) -> Vec<DailyTotals> {
    let days = days.min(MAX_TREND_DAYS);
    let mut out: Vec<DailyTotals> = (0..u64::from(days))
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .map(|date| DailyTotals {
            date,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();
    let Some(first) = out.first().map(|d| d.date) else {
        return out;
    };
    for t in txns {
        let day = local_day(t, tz);
        if day < first || day > today {
            continue;
        }
        let slot = &mut out[(day - first).num_days() as usize];
        match t.r#type {
            TransactionType::Income => slot.income = slot.income.saturating_add(t.amount),
            TransactionType::Expense => slot.expense = slot.expense.saturating_add(t.amount),
        }
    }
    out
}
