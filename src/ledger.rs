// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The owned transaction/budget store. Every mutation goes through here and
//! writes the full collection back through the gateway.

use crate::categories;
use crate::models::{
    ALL_CATEGORIES, Budget, BudgetPeriod, NewTransaction, TOTAL_BUDGET_ID, Transaction,
};
use crate::storage::{Gateway, StorageError};
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

/// The in-memory state was updated but could not be persisted.
#[derive(Debug, thiserror::Error)]
#[error("changes applied but not saved: {0}")]
pub struct StoreError(#[from] pub StorageError);

pub struct Ledger {
    gateway: Gateway,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

fn stamp(item: NewTransaction, now: DateTime<Utc>) -> Transaction {
    let note = if item.note.trim().is_empty() {
        categories::find_by_id(&item.category_id)
            .map(|c| c.name.to_string())
            .unwrap_or_default()
    } else {
        item.note
    };
    Transaction {
        id: Uuid::new_v4().to_string(),
        amount: item.amount,
        category_id: item.category_id,
        r#type: item.r#type,
        note,
        date: item.date.unwrap_or(now),
        created_at: now,
    }
}

impl Ledger {
    pub fn open(gateway: Gateway) -> Self {
        let transactions = gateway.load_transactions();
        let budgets = gateway.load_budgets();
        debug!(
            "loaded {} transactions, {} budgets from {}",
            transactions.len(),
            budgets.len(),
            gateway.describe()
        );
        Ledger {
            gateway,
            transactions,
            budgets,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn add_one(&mut self, item: NewTransaction) -> Result<&[Transaction], StoreError> {
        self.add_many(vec![item])
    }

    /// Stamp and prepend `items`, keeping their relative order.
    pub fn add_many(&mut self, items: Vec<NewTransaction>) -> Result<&[Transaction], StoreError> {
        let now = Utc::now();
        let mut updated: Vec<Transaction> = items.into_iter().map(|i| stamp(i, now)).collect();
        updated.append(&mut self.transactions);
        self.transactions = updated;
        self.gateway.save_transactions(&self.transactions)?;
        Ok(&self.transactions)
    }

    pub fn remove_one(&mut self, id: &str) -> Result<&[Transaction], StoreError> {
        self.transactions.retain(|t| t.id != id);
        self.gateway.save_transactions(&self.transactions)?;
        Ok(&self.transactions)
    }

    pub fn total_budget(&self) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| b.category_id == ALL_CATEGORIES)
    }

    pub fn set_total_budget(&mut self, amount: Decimal) -> Result<&[Budget], StoreError> {
        match self
            .budgets
            .iter_mut()
            .find(|b| b.category_id == ALL_CATEGORIES)
        {
            Some(b) => b.amount = amount,
            None => self.budgets.insert(
                0,
                Budget {
                    id: TOTAL_BUDGET_ID.to_string(),
                    category_id: ALL_CATEGORIES.to_string(),
                    amount,
                    period: BudgetPeriod::Monthly,
                },
            ),
        }
        self.gateway.save_budgets(&self.budgets)?;
        Ok(&self.budgets)
    }
}
