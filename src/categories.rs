// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category registry. Ordered, immutable, ids unique.

use crate::models::{Category, TransactionType};
use once_cell::sync::Lazy;

pub const OTHER_EXPENSE: &str = "other_exp";
pub const OTHER_INCOME: &str = "other_inc";

const fn cat(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    r#type: TransactionType,
) -> Category {
    Category {
        id,
        name,
        icon,
        color,
        r#type,
    }
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    use TransactionType::{Expense, Income};
    vec![
        cat("food", "Food & Drink", "🍔", "orange", Expense),
        cat("transport", "Transport", "🚗", "blue", Expense),
        cat("shopping", "Shopping", "🛍️", "pink", Expense),
        cat("housing", "Housing", "🏠", "indigo", Expense),
        cat("entertainment", "Entertainment", "🎮", "purple", Expense),
        cat("health", "Health", "🏥", "red", Expense),
        cat("education", "Education", "📚", "cyan", Expense),
        cat(OTHER_EXPENSE, "Other expense", "✨", "gray", Expense),
        cat("salary", "Salary", "💰", "green", Income),
        cat("bonus", "Bonus", "🧧", "red", Income),
        cat("investment", "Investment", "📈", "emerald", Income),
        cat(OTHER_INCOME, "Other income", "🧧", "lime", Income),
    ]
});

pub fn list_all() -> &'static [Category] {
    &CATEGORIES
}

pub fn find_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn is_known(id: &str) -> bool {
    find_by_id(id).is_some()
}

/// Category used when a record references an id the registry does not know.
pub fn fallback_for(kind: TransactionType) -> &'static Category {
    let id = match kind {
        TransactionType::Income => OTHER_INCOME,
        TransactionType::Expense => OTHER_EXPENSE,
    };
    find_by_id(id).unwrap_or(&CATEGORIES[0])
}

/// Display name for a category id; unknown ids read as "Other expense".
pub fn display_name(id: &str) -> &'static str {
    find_by_id(id)
        .unwrap_or_else(|| fallback_for(TransactionType::Expense))
        .name
}

pub fn icon_for(id: &str) -> &'static str {
    find_by_id(id).map(|c| c.icon).unwrap_or("")
}
