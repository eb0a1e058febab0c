// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::time::Duration;

use crate::models::{Transaction, TransactionType};

const UA: &str = concat!("yuanbook/", env!("CARGO_PKG_VERSION"));

/// No timeout unless one is configured; the transport default applies.
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::blocking::Client> {
    let mut b = reqwest::blocking::Client::builder().user_agent(UA);
    if let Some(t) = timeout {
        b = b.timeout(t);
    }
    b.build()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Midnight local time on `d`, as a UTC instant.
pub fn local_midnight_utc(d: NaiveDate) -> Result<DateTime<Utc>> {
    let naive = d.and_hms_opt(0, 0, 0).context("Invalid time of day")?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Date {} does not exist in the local time zone", d))?;
    Ok(local.with_timezone(&Utc))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn fmt_signed(t: &Transaction) -> String {
    let sign = match t.r#type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    format!("{}{}", sign, fmt_money(&t.amount))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}
