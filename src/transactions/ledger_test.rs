use super::*;
use crate::storage::{MemoryStore, StorageError};
use crate::transactions::{TransactionForm, TransactionKind};
use chrono::{TimeZone, Utc};

fn expense(name: &str, amount: &str) -> Transaction {
    TransactionForm {
        name: name.into(),
        amount: amount.into(),
        kind: Some(TransactionKind::Negative),
        category: Some("food".into()),
    }
    .validate(Utc.with_ymd_and_hms(2021, 6, 12, 0, 0, 0).unwrap())
    .unwrap()
}

#[tokio::test]
async fn load_missing_ledger_is_empty() {
    let store = MemoryStore::new();
    assert!(Ledger::load(&store, "any_id").await.unwrap().is_empty());
}

#[tokio::test]
async fn append_then_load_preserves_order() {
    let store = MemoryStore::new();
    assert_eq!(Ledger::append(&store, "u1", expense("Pizza", "59.90")).await.unwrap(), 1);
    assert_eq!(Ledger::append(&store, "u1", expense("Sushi", "80")).await.unwrap(), 2);

    let names: Vec<String> = Ledger::load(&store, "u1")
        .await
        .unwrap()
        .into_iter()
        .map(|tx| tx.name)
        .collect();
    assert_eq!(names, vec!["Pizza", "Sushi"]);
}

#[tokio::test]
async fn ledgers_are_per_user() {
    let store = MemoryStore::new();
    Ledger::append(&store, "u1", expense("Pizza", "59.90")).await.unwrap();
    assert!(Ledger::load(&store, "u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn stored_json_uses_record_schema() {
    let store = MemoryStore::new();
    Ledger::append(&store, "u1", expense("Pizza", "59.90")).await.unwrap();
    let raw = store.get(&transactions_key("u1")).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["type"], "negative");
    assert_eq!(json[0]["amount"], "59.90");
    assert_eq!(json[0]["date"], "2021-06-12T00:00:00Z");
}

#[tokio::test]
async fn corrupt_ledger_is_storage_error() {
    let store = MemoryStore::new();
    store.set(&transactions_key("u1"), "{}").await.unwrap();
    let err = Ledger::load(&store, "u1").await.unwrap_err();
    assert!(matches!(err, TransactionError::Storage(StorageError::Corrupt { .. })));
}
