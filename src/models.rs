// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal for any finite JSON number. Values outside `Decimal`'s range
/// saturate to `Decimal::MAX`/`Decimal::MIN` instead of failing the record.
pub fn amount_from_f64(v: f64) -> Decimal {
    if let Ok(d) = Decimal::from_str(&v.to_string()) {
        return d;
    }
    if let Some(d) = Decimal::from_f64(v) {
        return d;
    }
    let saturated = if v.is_nan() {
        Decimal::ZERO
    } else if v.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };
    warn!("amount {} out of range, stored as {}", v, saturated);
    saturated
}

fn lenient_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
    f64::deserialize(d).map(amount_from_f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "out" => Ok(TransactionType::Expense),
            "income" | "in" => Ok(TransactionType::Income),
            other => Err(anyhow::anyhow!(
                "Invalid type '{}', expected expense|income",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub r#type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    pub category_id: String,
    pub r#type: TransactionType,
    pub note: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A transaction as submitted by the manual form or the AI flow, before the
/// ledger assigns identity and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category_id: String,
    pub r#type: TransactionType,
    pub note: String,
    /// Business date; `None` means "now".
    pub date: Option<DateTime<Utc>>,
}

impl From<ParsedTransaction> for NewTransaction {
    fn from(p: ParsedTransaction) -> Self {
        NewTransaction {
            amount: p.amount,
            category_id: p.category_id,
            r#type: p.r#type,
            note: p.note,
            date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
}

pub const TOTAL_BUDGET_ID: &str = "total-budget";
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String, // "all" = total budget
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn default_total() -> Self {
        Budget {
            id: TOTAL_BUDGET_ID.to_string(),
            category_id: ALL_CATEGORIES.to_string(),
            amount: Decimal::from(3000),
            period: BudgetPeriod::Monthly,
        }
    }

    pub fn default_set() -> Vec<Budget> {
        vec![Budget::default_total()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // base64
}

/// One unit of content sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultimodalPart {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl MultimodalPart {
    pub fn text(s: impl Into<String>) -> Self {
        MultimodalPart::Text { text: s.into() }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        MultimodalPart::Inline {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            MultimodalPart::Text { .. } => None,
            MultimodalPart::Inline { inline_data } => Some(&inline_data.mime_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    pub category_id: String,
    pub r#type: TransactionType,
    pub note: String,
}
