//! Ledger store
//!
//! Owns the ordered transaction collection and its persisted form: a single
//! JSON file holding the serialized array of records. Every mutation writes
//! the full collection; the in-memory state is only committed once the write
//! succeeds, so memory and disk never diverge.

use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::file_io::{read_json, remove_file_if_exists, write_json_atomic};

/// The transaction ledger and its backing file
pub struct LedgerStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Open the store, loading any persisted ledger
    ///
    /// An absent file yields an empty ledger. A malformed file also yields
    /// an empty ledger with a logged warning; it is left untouched on disk
    /// until the next successful write.
    pub fn open(path: PathBuf) -> Self {
        let transactions = match read_json::<Vec<Transaction>, _>(&path) {
            Ok(Some(txns)) => txns,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Ignoring unreadable ledger at {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Self { path, transactions }
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction and persist
    ///
    /// Validates `amount > 0`; preserves insertion order. If the write
    /// fails, the in-memory ledger is rolled back to its previous state.
    pub fn add(&mut self, txn: Transaction) -> LedgerResult<()> {
        txn.validate()?;

        self.transactions.push(txn);
        if let Err(e) = self.persist() {
            self.transactions.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the transaction at a 0-based index and persist
    ///
    /// Subsequent entries shift left. Returns the removed transaction.
    /// If the write fails, the entry is restored at its original position.
    pub fn remove_at(&mut self, index: usize) -> LedgerResult<Transaction> {
        if index >= self.transactions.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }

        let removed = self.transactions.remove(index);
        if let Err(e) = self.persist() {
            self.transactions.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Replace the whole collection and persist
    ///
    /// The new collection is written to disk before the in-memory swap, so
    /// a failed write leaves the old ledger intact everywhere.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) -> LedgerResult<()> {
        write_json_atomic(&self.path, &transactions)?;
        self.transactions = transactions;
        Ok(())
    }

    /// Parse an import payload and replace the ledger with it
    ///
    /// The payload must be a JSON document whose top-level value is an array
    /// of well-formed transaction records. Any other shape, or any malformed
    /// element, is rejected with `InvalidImportFormat` and no mutation.
    pub fn import_json(&mut self, payload: &str) -> LedgerResult<usize> {
        let transactions = parse_import(payload)?;
        let count = transactions.len();
        self.replace_all(transactions)?;
        Ok(count)
    }

    /// Serialize the ledger as a pretty-printed JSON array (export format)
    pub fn export_json(&self) -> LedgerResult<String> {
        serde_json::to_string_pretty(&self.transactions).map_err(LedgerError::from)
    }

    /// Empty the ledger and remove the persisted file
    ///
    /// Clearing deletes the file outright rather than writing an empty
    /// array; a later `open` treats the absence as an empty ledger.
    pub fn clear(&mut self) -> LedgerResult<()> {
        remove_file_if_exists(&self.path)?;
        self.transactions.clear();
        Ok(())
    }

    fn persist(&self) -> LedgerResult<()> {
        write_json_atomic(&self.path, &self.transactions)
    }
}

/// Validate and parse an import payload into transactions
fn parse_import(payload: &str) -> LedgerResult<Vec<Transaction>> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| LedgerError::InvalidImportFormat(format!("not valid JSON: {}", e)))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(LedgerError::InvalidImportFormat(format!(
                "expected a top-level array, got {}",
                json_type_name(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| {
                LedgerError::InvalidImportFormat(format!("record {} is malformed: {}", i, e))
            })
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = LedgerStore::open(path);
        (temp_dir, store)
    }

    fn txn(day: u32, kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
        .unwrap()
    }

    #[test]
    fn test_open_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_malformed_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let store = LedgerStore::open(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let (_temp_dir, mut store) = create_test_store();

        store.add(txn(5, TransactionKind::Income, "salary", 100000)).unwrap();
        store.add(txn(1, TransactionKind::Expense, "food", 1500)).unwrap();
        store.add(txn(3, TransactionKind::Expense, "transport", 800)).unwrap();

        let categories: Vec<_> = store
            .transactions()
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(categories, ["salary", "food", "transport"]);
    }

    #[test]
    fn test_add_rejects_invalid_amount() {
        let (_temp_dir, mut store) = create_test_store();

        let mut bad = txn(5, TransactionKind::Expense, "food", 100);
        bad.amount = Money::zero();

        assert!(matches!(store.add(bad), Err(LedgerError::InvalidAmount(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let (temp_dir, mut store) = create_test_store();
        store.add(txn(5, TransactionKind::Income, "salary", 100000)).unwrap();

        let reloaded = LedgerStore::open(temp_dir.path().join("transactions.json"));
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.transactions()[0].amount.cents(), 100000);
    }

    #[test]
    fn test_remove_at() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();
        store.add(txn(2, TransactionKind::Expense, "transport", 200)).unwrap();
        store.add(txn(3, TransactionKind::Expense, "housing", 300)).unwrap();

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.category, "transport");

        let categories: Vec<_> = store
            .transactions()
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(categories, ["food", "housing"]);
    }

    #[test]
    fn test_remove_at_same_index_twice_removes_distinct_entries() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();
        store.add(txn(2, TransactionKind::Expense, "transport", 200)).unwrap();
        store.add(txn(3, TransactionKind::Expense, "housing", 300)).unwrap();

        let first = store.remove_at(0).unwrap();
        let second = store.remove_at(0).unwrap();

        assert_eq!(first.category, "food");
        assert_eq!(second.category, "transport");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();

        let err = store.remove_at(5).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_replaces_everything() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();

        let payload = r#"[
            {"date":"2024-03-05","type":"income","category":"salary","amount":"1000.00"},
            {"date":"2024-03-10","type":"expense","category":"food","amount":"150.00","description":"groceries"}
        ]"#;

        let count = store.import_json(payload).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.transactions()[0].category, "salary");
    }

    #[test]
    fn test_import_rejects_non_array() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();

        let err = store.import_json(r#"{"foo":1}"#).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidImportFormat(_)));
        assert!(err.to_string().contains("an object"));

        // Ledger unchanged
        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].category, "food");
    }

    #[test]
    fn test_import_rejects_malformed_record() {
        let (_temp_dir, mut store) = create_test_store();

        let payload = r#"[{"date":"2024-03-05","type":"income","category":"salary","amount":"1000.00"},{"nope":true}]"#;
        let err = store.import_json(payload).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidImportFormat(_)));
        assert!(err.to_string().contains("record 1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_rejects_out_of_range_amount() {
        let (_temp_dir, mut store) = create_test_store();

        let payload = r#"[{"date":"2024-03-05","type":"income","category":"salary","amount":9223372036854775807}]"#;
        let err = store.import_json(payload).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidImportFormat(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store.import_json("not json").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidImportFormat(_)));
    }

    #[test]
    fn test_export_round_trips_through_import() {
        let (_temp_dir, mut store) = create_test_store();
        store.add(
            txn(5, TransactionKind::Income, "salary", 100000)
        ).unwrap();
        store.add(
            txn(10, TransactionKind::Expense, "food", 15000)
        ).unwrap();

        let exported = store.export_json().unwrap();
        let original = store.transactions().to_vec();

        store.clear().unwrap();
        store.import_json(&exported).unwrap();
        assert_eq!(store.transactions(), original.as_slice());
    }

    #[test]
    fn test_clear_removes_the_file() {
        let (temp_dir, mut store) = create_test_store();
        let path = temp_dir.path().join("transactions.json");

        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_persisted_format_is_a_bare_array() {
        let (temp_dir, mut store) = create_test_store();
        store.add(txn(1, TransactionKind::Expense, "food", 100)).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }
}
