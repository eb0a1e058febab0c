// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::required;
use crate::ledger::Ledger;
use crate::stats;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use chrono::{Datelike, Local};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("status", sub)) => status(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    if amount.is_sign_negative() {
        bail!("Budget must not be negative");
    }
    ledger.set_total_budget(amount)?;
    println!("Monthly total budget set to {}", fmt_money(&amount));
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let budgets = ledger.budgets();
    if !maybe_print_json(sub.get_flag("json"), &budgets)? {
        let data = budgets
            .iter()
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.category_id.clone(),
                    fmt_money(&b.amount),
                    "monthly".to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Category", "Amount", "Period"], data)
        );
    }
    Ok(())
}

fn status(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let now = Local::now();
    let month = stats::month_summary(ledger.transactions(), now.year(), now.month(), &Local);
    let Some(st) = stats::budget_status(ledger.budgets(), month.expense) else {
        println!("No total budget set. Use `budget set <amount>`.");
        return Ok(());
    };
    if maybe_print_json(sub.get_flag("json"), &st)? {
        return Ok(());
    }
    println!(
        "{}: spent {} of {} ({}%)",
        now.format("%Y-%m"),
        fmt_money(&st.spent),
        fmt_money(&st.total),
        st.progress_pct
    );
    if st.over_by.is_zero() {
        println!("Remaining: {}", fmt_money(&st.remaining));
    } else {
        println!("Over budget by {}!", fmt_money(&st.over_by));
    }
    Ok(())
}
