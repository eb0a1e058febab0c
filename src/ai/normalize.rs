// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::AiError;
use crate::categories;
use crate::models::ParsedTransaction;
use log::info;

/// Providers occasionally wrap JSON in a Markdown fence even in JSON mode.
fn strip_code_fence(raw: &str) -> &str {
    let t = raw.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse model output as a JSON array of records. Any shape deviation fails.
pub fn parse_records(raw: &str) -> Result<Vec<ParsedTransaction>, AiError> {
    let body = strip_code_fence(raw);
    let body = if body.is_empty() { "[]" } else { body };
    serde_json::from_str::<Vec<ParsedTransaction>>(body).map_err(AiError::Malformed)
}

/// Replace unknown category ids with the type's fallback. Nothing else is
/// touched.
pub fn repair(records: Vec<ParsedTransaction>) -> Vec<ParsedTransaction> {
    records
        .into_iter()
        .map(|mut r| {
            if !categories::is_known(&r.category_id) {
                let fallback = categories::fallback_for(r.r#type);
                info!(
                    "unknown category '{}' on '{}', using '{}'",
                    r.category_id, r.note, fallback.id
                );
                r.category_id = fallback.id.to_string();
            }
            r
        })
        .collect()
}
