// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::models::Transaction;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Records the store accepts but that are probably wrong.
pub fn findings(txns: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for t in txns {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        match categories::find_by_id(&t.category_id) {
            None => rows.push(vec![
                "unknown_category".into(),
                format!("{} ({})", t.id, t.category_id),
            ]),
            Some(c) if c.r#type != t.r#type => rows.push(vec![
                "type_mismatch".into(),
                format!("{} ({} is {}, record is {})", t.id, c.id, c.r#type, t.r#type),
            ]),
            Some(_) => {}
        }
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{} ({})", t.id, t.amount),
            ]);
        }
    }
    rows
}

pub fn handle(txns: &[Transaction]) -> Result<()> {
    let rows = findings(txns);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
