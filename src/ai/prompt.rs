// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};
use chrono::NaiveDate;
use serde_json::{Value, json};

/// `Food & Drink (ID: food, type: expense), ...`
pub fn category_vocabulary(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{} (ID: {}, type: {})", c.name, c.id, c.r#type))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn system_instruction(categories: &[Category], today: NaiveDate) -> String {
    format!(
        "You are a meticulous bookkeeper who breaks bills down item by item.

TASK
Extract the individual purchased items from the attached image, voice memo and/or text.
Do not merely aggregate by category: keep each item as its own record.

RULES
1. One record per item. If several items share a category they are still separate records.
   Example: a receipt listing \"milk 15\" and \"beer 10\" yields two records, not one.
2. Pick the most precise category from the list below.
   - milk, beer, vegetables -> {food}
   - shampoo, tissues, towels -> {shopping}
   - medicine, face masks -> {health}
   Salary, bonuses and other money received are {income} records.
3. The note is the item name, prefixed with the merchant when known: \"<merchant> - <item>\".
4. The amount is the price actually paid for that item.
5. When a receipt total is visible, the item amounts must sum to that total.

Valid category IDs: {vocab}.
Today's date is {today}.

Return only a JSON array.",
        food = "food",
        shopping = "shopping",
        health = "health",
        income = TransactionType::Income,
        vocab = category_vocabulary(categories),
        today = today.format("%Y-%m-%d"),
    )
}

/// Output contract: array of `{amount, categoryId, type, note}`, all required.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "amount": {
                    "type": "NUMBER",
                    "description": "Amount paid for this single item"
                },
                "categoryId": {
                    "type": "STRING",
                    "description": "ID of the matching category"
                },
                "type": {
                    "type": "STRING",
                    "enum": ["expense", "income"]
                },
                "note": {
                    "type": "STRING",
                    "description": "Merchant - item name, e.g. Hema - milk"
                }
            },
            "required": ["amount", "categoryId", "type", "note"]
        }
    })
}
