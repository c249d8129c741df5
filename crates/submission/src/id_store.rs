//! Content-addressed id assignment: hashable key -> stable dense index.
//!
//! This is a per-run context object, not global state: each comparison run
//! (or, in parallel execution, each worker's partition of the run) owns its
//! own `IdStore`. Two different stores may assign different local ids to
//! the same underlying key; ids are only meaningful within the store that
//! produced them.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps hashable keys to dense `u32` indices, assigning a fresh index the
/// first time a key is seen and returning the existing one on every
/// subsequent lookup.
#[derive(Debug, Clone, Default)]
pub struct IdStore<K> {
    ids: HashMap<K, u32>,
    keys: Vec<K>,
}

impl<K> IdStore<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        IdStore {
            ids: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Returns the id for `key`, assigning a new one if this is the first
    /// time `key` has been seen by this store.
    pub fn get(&mut self, key: K) -> u32 {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.keys.len() as u32;
        self.keys.push(key.clone());
        self.ids.insert(key, id);
        id
    }

    /// Returns the id for `key` without assigning one, if already present.
    pub fn get_existing(&self, key: &K) -> Option<u32> {
        self.ids.get(key).copied()
    }

    /// Returns the key that was assigned `id`, if any.
    pub fn key_for(&self, id: u32) -> Option<&K> {
        self.keys.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
