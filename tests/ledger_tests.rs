// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;
use yuanbook::db::SqliteStore;
use yuanbook::ledger::Ledger;
use yuanbook::models::{NewTransaction, TransactionType};
use yuanbook::storage::{FileStore, Gateway};

fn item(amount: i64, cat: &str, note: &str) -> NewTransaction {
    NewTransaction {
        amount: Decimal::from(amount),
        category_id: cat.to_string(),
        r#type: TransactionType::Expense,
        note: note.to_string(),
        date: None,
    }
}

fn setup() -> Ledger {
    Ledger::open(Gateway::new(Box::new(SqliteStore::open_in_memory().unwrap())))
}

#[test]
fn add_one_prepends_with_fresh_identity() {
    let mut ledger = setup();
    ledger.add_one(item(10, "food", "beer")).unwrap();
    let before = Utc::now();
    let txns = ledger.add_one(item(15, "food", "milk tea")).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].note, "milk tea");
    assert_ne!(txns[0].id, txns[1].id);
    assert!(txns[0].created_at >= before);
    assert_eq!(txns[0].date, txns[0].created_at);
}

#[test]
fn add_many_keeps_input_order_at_front() {
    let mut ledger = setup();
    ledger.add_one(item(1, "food", "old")).unwrap();
    let txns = ledger
        .add_many(vec![item(15, "food", "milk"), item(10, "food", "beer")])
        .unwrap();
    let notes: Vec<&str> = txns.iter().map(|t| t.note.as_str()).collect();
    assert_eq!(notes, ["milk", "beer", "old"]);
    assert_eq!(txns[0].created_at, txns[1].created_at);
}

#[test]
fn empty_note_defaults_to_category_name_and_explicit_date_is_kept() {
    let mut ledger = setup();
    let when = Utc.with_ymd_and_hms(2024, 12, 31, 16, 0, 0).unwrap();
    let mut it = item(3000, "housing", "  ");
    it.date = Some(when);
    let t = ledger.add_one(it).unwrap()[0].clone();
    assert_eq!(t.note, "Housing");
    assert_eq!(t.date, when);
    assert!(t.created_at > when);
}

#[test]
fn remove_one_and_missing_id_is_a_no_op() {
    let mut ledger = setup();
    ledger
        .add_many(vec![item(1, "food", "a"), item(2, "food", "b")])
        .unwrap();
    let snapshot = ledger.transactions().to_vec();
    assert_eq!(ledger.remove_one("does-not-exist").unwrap(), &snapshot[..]);

    let id = snapshot[0].id.clone();
    let left = ledger.remove_one(&id).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].note, "b");
}

#[test]
fn mutations_are_written_through() {
    let dir = tempdir().unwrap();
    let open = || Ledger::open(Gateway::new(Box::new(FileStore::new(dir.path()).unwrap())));

    let mut ledger = open();
    ledger.add_one(item(15, "food", "milk tea")).unwrap();
    ledger.set_total_budget(Decimal::from(4500)).unwrap();
    drop(ledger);

    let reopened = open();
    assert_eq!(reopened.transactions().len(), 1);
    assert_eq!(reopened.transactions()[0].note, "milk tea");
    assert_eq!(reopened.total_budget().unwrap().amount, Decimal::from(4500));
    assert_eq!(reopened.budgets().len(), 1);
}

#[test]
fn failed_write_is_reported_but_memory_is_updated() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    let mut ledger = Ledger::open(Gateway::new(Box::new(FileStore::new(&data).unwrap())));
    std::fs::remove_dir_all(&data).unwrap();

    assert!(ledger.add_one(item(5, "food", "bun")).is_err());
    assert_eq!(ledger.transactions().len(), 1);
}
