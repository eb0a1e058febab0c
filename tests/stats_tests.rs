// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use yuanbook::models::{Budget, Transaction, TransactionType};
use yuanbook::stats;

fn tx(id: &str, day: u32, amount: i64, cat: &str, kind: TransactionType, note: &str) -> Transaction {
    let at = Utc.with_ymd_and_hms(2025, 8, day, 12, 0, 0).unwrap();
    Transaction {
        id: id.into(),
        amount: Decimal::from(amount),
        category_id: cat.into(),
        r#type: kind,
        note: note.into(),
        date: at,
        created_at: at,
    }
}

fn book() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};
    vec![
        tx("5", 20, 45, "transport", Expense, "Taxi home"),
        tx("4", 19, 15, "food", Expense, "Milk"),
        tx("3", 19, 10, "food", Expense, "Beer"),
        tx("2", 18, 8000, "salary", Income, "August pay"),
        tx("1", 2, 120, "mystery", Expense, "???"),
    ]
}

#[test]
fn month_summary_and_budget_progress() {
    let s = stats::month_summary(&book(), 2025, 8, &Utc);
    assert_eq!(s.income, Decimal::from(8000));
    assert_eq!(s.expense, Decimal::from(190));
    assert_eq!(s.balance, Decimal::from(7810));
    assert_eq!(stats::month_summary(&book(), 2025, 7, &Utc).expense, Decimal::ZERO);

    let st = stats::budget_status(&Budget::default_set(), Decimal::from(3300)).unwrap();
    assert_eq!(st.progress_pct, Decimal::from(110));
    assert_eq!(st.over_by, Decimal::from(300));
    assert_eq!(st.remaining, Decimal::ZERO);

    let st = stats::budget_status(&Budget::default_set(), Decimal::from(750)).unwrap();
    assert_eq!(st.progress_pct, Decimal::from(25));
    assert_eq!(st.remaining, Decimal::from(2250));
    assert!(stats::budget_status(&[], Decimal::ONE).is_none());
}

#[test]
fn search_matches_note_or_category_name() {
    let b = book();
    let ids = |term: &str| -> Vec<String> {
        stats::search(&b, term).iter().map(|t| t.id.clone()).collect()
    };
    assert_eq!(ids("milk"), ["4"]);
    assert_eq!(ids("FOOD"), ["4", "3"]);
    assert_eq!(ids("").len(), 5);
}

#[test]
fn history_groups_by_calendar_day_in_order() {
    let b = book();
    let groups = stats::group_by_day(&b, &Utc);
    let days: Vec<(NaiveDate, usize)> = groups.iter().map(|(d, g)| (*d, g.len())).collect();
    assert_eq!(
        days,
        vec![
            (NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2025, 8, 19).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(), 1),
        ]
    );
}

#[test]
fn expense_by_category_uses_display_names() {
    let data = stats::expense_by_category(&book());
    assert_eq!(
        data,
        vec![
            ("Other expense".to_string(), Decimal::from(120)),
            ("Transport".to_string(), Decimal::from(45)),
            ("Food & Drink".to_string(), Decimal::from(25)),
        ]
    );
}

#[test]
fn trend_covers_window_oldest_first() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
    let t = stats::daily_trend(&book(), today, 7, &Utc);
    assert_eq!(t.len(), 7);
    assert_eq!(t[0].date, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
    assert_eq!(t[6].date, today);
    assert_eq!(t[6].expense, Decimal::from(45));
    assert_eq!(t[5].expense, Decimal::from(25));
    assert_eq!(t[4].income, Decimal::from(8000));
    assert!(stats::daily_trend(&book(), today, 0, &Utc).is_empty());
}

#[test]
fn recent_caps_at_len() {
    let b = book();
    assert_eq!(stats::recent(&b, 3).len(), 3);
    assert_eq!(stats::recent(&b, 50).len(), 5);
}

#[test]
fn huge_stored_amounts_saturate_instead_of_panicking() {
    use TransactionType::{Expense, Income};
    let mut a = tx("a", 5, 0, "food", Expense, "a");
    let mut b = tx("b", 5, 0, "food", Expense, "b");
    let mut c = tx("c", 5, 0, "salary", Income, "c");
    a.amount = Decimal::MAX;
    b.amount = Decimal::MAX;
    c.amount = Decimal::MIN;
    let txns = vec![a, b, c];

    let s = stats::summarize(&txns);
    assert_eq!(s.expense, Decimal::MAX);
    assert_eq!(s.income, Decimal::MIN);
    assert_eq!(s.balance, Decimal::MIN);

    let st = stats::budget_status(&Budget::default_set(), s.expense).unwrap();
    assert!(st.progress_pct > Decimal::from(100));
    assert_eq!(st.remaining, Decimal::ZERO);
    assert_eq!(stats::percent_of(Decimal::MAX, Decimal::new(5, 1)), Decimal::MAX);

    assert_eq!(stats::expense_by_category(&txns)[0].1, Decimal::MAX);
    let today = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
    assert_eq!(stats::daily_trend(&txns, today, 1, &Utc)[0].expense, Decimal::MAX);
    assert_eq!(stats::percent_of(Decimal::ONE, Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn trend_window_is_bounded() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let t = stats::daily_trend(&[], today, 200_000_000, &Utc);
    assert_eq!(t.len(), stats::MAX_TREND_DAYS as usize);
    assert_eq!(t.last().unwrap().date, today);

    let edge = NaiveDate::MIN.succ_opt().unwrap();
    let t = stats::daily_trend(&[], edge, 7, &Utc);
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].date, NaiveDate::MIN);
}

#[test]
fn top_category_is_largest_expense() {
    let (name, amt) = stats::top_expense_category(&book()).unwrap();
    assert_eq!(name, "Other expense");
    assert_eq!(amt, Decimal::from(120));
    assert!(stats::top_expense_category(&[]).is_none());
}
