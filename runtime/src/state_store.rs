use streamagg_common::hash::FastHashMap;

/// Per-operator store of saved per-entity state, keyed by entity key.
///
/// Entries are created lazily on first stash. Reads of unknown keys yield
/// `S::default()` (numeric zero) and never create an entry.
#[derive(Debug, Clone, Default)]
pub struct StateStore<S> {
    entries: FastHashMap<String, S>,
}

impl<S: Copy + Default> StateStore<S> {
    pub fn new() -> Self {
        Self {
            entries: FastHashMap::default(),
        }
    }

    /// Saved state for `key`, or the zero value if it was never stashed.
    pub fn get(&self, key: &str) -> S {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Insert-or-update. Avoids allocating a new key when the entry exists.
    pub fn insert(&mut self, key: &str, value: S) {
        if let Some(dst) = self.entries.get_mut(key) {
            *dst = value;
            return;
        }
        self.entries.insert(key.to_string(), value);
    }

    /// Writes `state[i]` under `keys[i]`. Callers guarantee equal lengths.
    pub fn stash(&mut self, keys: &[&str], state: &[S]) {
        debug_assert_eq!(keys.len(), state.len());
        for (key, value) in keys.iter().zip(state.iter()) {
            self.insert(key, *value);
        }
    }

    /// Overwrites `state[i]` with the saved value for `keys[i]`. Callers
    /// guarantee equal lengths.
    pub fn restore(&self, keys: &[&str], state: &mut [S]) {
        debug_assert_eq!(keys.len(), state.len());
        for (key, dst) in keys.iter().zip(state.iter_mut()) {
            *dst = self.get(key);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Evicts one entity, returning its saved state.
    pub fn remove(&mut self, key: &str) -> Option<S> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}
