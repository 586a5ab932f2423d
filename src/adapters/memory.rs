//! Ordered in-memory query source.

use super::QuerySource;
use crate::maybe::Maybe;
use crate::models::ContractResult;

/// Rows keyed by `K`, kept in insertion order.
///
/// Keys are compared with `PartialEq`, so lookups are linear. Intended for
/// tests and small reference tables, not as a storage engine.
#[derive(Debug, Clone)]
pub struct MemoryTable<K, R> {
    rows: Vec<(K, R)>,
}

impl<K, R> MemoryTable<K, R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: PartialEq, R> MemoryTable<K, R> {
    /// Insert or replace the row under `key`, returning the replaced row.
    ///
    /// A replaced row keeps its original position.
    pub fn insert(&mut self, key: K, row: R) -> Maybe<R> {
        match self.rows.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Maybe::some(std::mem::replace(slot, row)),
            None => {
                self.rows.push((key, row));
                Maybe::none()
            }
        }
    }
}

impl<K, R> Default for MemoryTable<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, R> FromIterator<(K, R)> for MemoryTable<K, R> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, row) in iter {
            let _ = table.insert(key, row);
        }
        table
    }
}

impl<K: PartialEq, R: Clone> QuerySource for MemoryTable<K, R> {
    type Key = K;
    type Row = R;

    fn rows(&self) -> ContractResult<Vec<R>> {
        Ok(self.rows.iter().map(|(_, row)| row.clone()).collect())
    }

    fn filter_rows(&self, predicate: &dyn Fn(&R) -> bool) -> ContractResult<Vec<R>> {
        Ok(self
            .rows
            .iter()
            .map(|(_, row)| row)
            .filter(|row| predicate(row))
            .cloned()
            .collect())
    }

    fn lookup(&self, key: &K) -> ContractResult<Option<R>> {
        Ok(self
            .rows
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, row)| row.clone()))
    }
}
