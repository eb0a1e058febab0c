// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::commands::required;
use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let fmt = required(sub, "format")?.to_lowercase();
            let out = required(sub, "out")?.trim();
            export_transactions(ledger, &fmt, Path::new(out))?;
            println!("Exported transactions to {}", out);
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn export_transactions(ledger: &Ledger, fmt: &str, out: &Path) -> Result<()> {
    let txns = ledger.transactions();
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            wtr.write_record([
                "id", "date", "type", "category", "amount", "note", "created_at",
            ])?;
            for t in txns {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_rfc3339(),
                    t.r#type.to_string(),
                    categories::display_name(&t.category_id).to_string(),
                    t.amount.to_string(),
                    t.note.clone(),
                    t.created_at.to_rfc3339(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(txns)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
