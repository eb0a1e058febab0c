// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::commands::required;
use crate::ledger::Ledger;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::stats;
use crate::utils::{
    fmt_money, fmt_signed, local_midnight_utc, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// Manual entry form: validate the arguments into a [`NewTransaction`].
pub fn form_input(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    let category_id = required(sub, "category")?.trim().to_string();
    let category = categories::find_by_id(&category_id)
        .with_context(|| format!("Category '{}' not found", category_id))?;
    let r#type = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TransactionType>()?,
        None => category.r#type,
    };
    let note = sub
        .get_one::<String>("note")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(d) => Some(local_midnight_utc(parse_date(d)?)?),
        None => None,
    };
    Ok(NewTransaction {
        amount,
        category_id,
        r#type,
        note,
        date,
    })
}

pub fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let item = form_input(sub)?;
    let txns = ledger.add_one(item)?;
    let t = &txns[0];
    println!(
        "Recorded {} {} ({}) on {} [{}]",
        fmt_signed(t),
        categories::display_name(&t.category_id),
        t.note,
        t.date.with_timezone(&Local).format("%Y-%m-%d"),
        t.id
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    let before = ledger.transactions().len();
    let after = ledger.remove_one(id)?.len();
    if after < before {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

impl TransactionRow {
    fn from_txn(t: &Transaction) -> Self {
        TransactionRow {
            id: t.id.clone(),
            date: t.date.with_timezone(&Local).format("%Y-%m-%d").to_string(),
            category: format!(
                "{} {}",
                categories::icon_for(&t.category_id),
                categories::display_name(&t.category_id)
            )
            .trim()
            .to_string(),
            amount: fmt_signed(t),
            note: t.note.clone(),
        }
    }
}

fn filtered<'a>(ledger: &'a Ledger, sub: &clap::ArgMatches) -> Vec<&'a Transaction> {
    let term = sub
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or("");
    let mut found = stats::search(ledger.transactions(), term);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        found.truncate(*limit);
    }
    found
}

/// History rows, most recent first, after search and limit.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    filtered(ledger, sub)
        .into_iter()
        .map(TransactionRow::from_txn)
        .collect()
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("json") {
        maybe_print_json(true, &query_rows(ledger, sub))?;
        return Ok(());
    }
    let found = filtered(ledger, sub);
    if found.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    for (day, txns) in stats::group_by_day(found, &Local) {
        let day_total = stats::summarize(txns.iter().copied());
        println!(
            "{}  (in {} / out {})",
            day.format("%Y-%m-%d"),
            fmt_money(&day_total.income),
            fmt_money(&day_total.expense)
        );
        let rows: Vec<Vec<String>> = txns
            .into_iter()
            .map(|t| {
                let r = TransactionRow::from_txn(t);
                vec![r.category, r.note, r.amount, r.id]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Note", "Amount", "ID"], rows)
        );
    }
    Ok(())
}
