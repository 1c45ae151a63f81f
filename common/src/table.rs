//! # Lookup Table Model
//!
//! A `Table` is the in-memory mapping every generator builds before handing it
//! to the renderer. It remembers the order in which keys were first inserted,
//! so output can either follow the input file or be sorted by key.

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::Order;

#[derive(Debug, Clone)]
pub struct Table<K> {
    entries: Vec<(K, String)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Table<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K> Table<K>
where
    K: Clone + Eq + Hash + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` under `key`.
    ///
    /// A key seen before keeps its original position and takes the new name.
    /// Returns the name that was replaced, if any.
    pub fn insert(&mut self, key: K, name: impl Into<String>) -> Option<String> {
        let name: String = name.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, name)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, name));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the requested emission order.
    pub fn entries(&self, order: Order) -> Vec<(&K, &str)> {
        let mut entries: Vec<(&K, &str)> = self
            .entries
            .iter()
            .map(|(key, name)| (key, name.as_str()))
            .collect();

        if order == Order::Sorted {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }
}

impl<K> FromIterator<(K, String)> for Table<K>
where
    K: Clone + Eq + Hash + Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, name) in iter {
            table.insert(key, name);
        }
        table
    }
}
