// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::ledger::Ledger;
use crate::stats::{self, BudgetStatus, Summary};
use crate::utils::{fmt_money, fmt_signed, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        Some(("trend", sub)) => trend(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Dashboard {
    month: String,
    summary: Summary,
    budget: Option<BudgetStatus>,
    recent: Vec<crate::models::Transaction>,
}

fn dashboard(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let now = Local::now();
    let summary = stats::month_summary(ledger.transactions(), now.year(), now.month(), &Local);
    let budget = stats::budget_status(ledger.budgets(), summary.expense);
    let recent = stats::recent(ledger.transactions(), 5);

    let view = Dashboard {
        month: now.format("%Y-%m").to_string(),
        summary,
        budget,
        recent: recent.to_vec(),
    };
    if maybe_print_json(sub.get_flag("json"), &view)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Expense", "Balance"],
            vec![vec![
                view.month.clone(),
                fmt_money(&view.summary.income),
                fmt_money(&view.summary.expense),
                fmt_money(&view.summary.balance),
            ]],
        )
    );
    if let Some(b) = &view.budget {
        let line = if b.over_by > Decimal::ZERO {
            format!("over budget by {}!", fmt_money(&b.over_by))
        } else {
            format!("{} left", fmt_money(&b.remaining))
        };
        println!(
            "Budget: {} / {} ({}%), {}",
            fmt_money(&b.spent),
            fmt_money(&b.total),
            b.progress_pct,
            line
        );
    }
    if view.recent.is_empty() {
        println!("No transactions yet.");
    } else {
        let rows = view
            .recent
            .iter()
            .map(|t| {
                vec![
                    t.date.with_timezone(&Local).format("%Y-%m-%d").to_string(),
                    format!(
                        "{} {}",
                        categories::icon_for(&t.category_id),
                        categories::display_name(&t.category_id)
                    ),
                    t.note.clone(),
                    fmt_signed(t),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Note", "Amount"], rows)
        );
    }
    Ok(())
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = stats::expense_by_category(ledger.transactions());
    if maybe_print_json(sub.get_flag("json"), &data)? {
        return Ok(());
    }
    let total = data
        .iter()
        .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v));
    let rows = data
        .iter()
        .map(|(name, amt)| {
            let share = stats::percent_of(*amt, total);
            vec![name.clone(), fmt_money(amt), format!("{}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    if let Some((name, amt)) = stats::top_expense_category(ledger.transactions()) {
        println!(
            "Top category: {} ({}, {}%)",
            name,
            fmt_money(&amt),
            stats::percent_of(amt, total)
        );
    }
    Ok(())
}

fn trend(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let days = *sub.get_one::<u32>("days").unwrap_or(&7);
    let today = Local::now().date_naive();
    let data = stats::daily_trend(ledger.transactions(), today, days, &Local);
    if maybe_print_json(sub.get_flag("json"), &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|d| {
            vec![
                d.date.format("%m/%d").to_string(),
                fmt_money(&d.income),
                fmt_money(&d.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Day", "Income", "Expense"], rows));
    Ok(())
}
