//! Key-value storage for filing records.
//!
//! Records live in a generic key-value table as JSON values under
//! `user:{user_id}:taxFiling:{year}`.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use taxdesk_shared::types::UserId;

use crate::filing::error::FilingError;

/// Key a user's filing for a year is stored under.
#[must_use]
pub fn storage_key(user_id: UserId, tax_year: i32) -> String {
    format!("{}{tax_year}", user_prefix(user_id))
}

/// Prefix shared by all of a user's filings.
#[must_use]
pub fn user_prefix(user_id: UserId) -> String {
    format!("user:{user_id}:taxFiling:")
}

/// A generic JSON key-value table.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value.
    fn get(&self, key: &str) -> Result<Option<Value>, FilingError>;

    /// Writes a value only if the key is empty, returning whether it was written.
    fn set_if_absent(&self, key: &str, value: Value) -> Result<bool, FilingError>;

    /// Replaces the value only if it still equals `expected`, returning
    /// whether it was replaced.
    fn compare_and_set(
        &self,
        key: &str,
        expected: &Value,
        value: Value,
    ) -> Result<bool, FilingError>;

    /// Returns every entry whose key starts with `prefix`, sorted by key.
    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, FilingError>;
}

/// Process-local store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Value>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, FilingError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set_if_absent(&self, key: &str, value: Value) -> Result<bool, FilingError> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(true)
            }
        }
    }

    fn compare_and_set(
        &self,
        key: &str,
        expected: &Value,
        value: Value,
    ) -> Result<bool, FilingError> {
        match self.entries.get_mut(key) {
            Some(mut current) if *current == *expected => {
                *current = value;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, FilingError> {
        let mut matches: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(matches)
    }
}
