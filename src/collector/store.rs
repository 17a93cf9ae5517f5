// Keyed previous-sample cache used by the differencing collectors.

use std::collections::HashMap;
use std::time::Instant;

/// Most recent raw sample per entity key, with the instant it was taken.
///
/// Entries are never removed: an entity that disappears from the kernel source keeps its
/// last sample but is no longer refreshed, so it never produces output again.
#[derive(Debug)]
pub struct SampleStore<S> {
    entries: HashMap<String, (S, Instant)>,
}

impl<S> Default for SampleStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SampleStore<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store `sample` for `key` and hand back whatever was there before.
    pub fn upsert(&mut self, key: &str, sample: S, at: Instant) -> Option<(S, Instant)> {
        if let Some(slot) = self.entries.get_mut(key) {
            return Some(std::mem::replace(slot, (sample, at)));
        }
        self.entries.insert(key.to_string(), (sample, at));
        None
    }

    pub fn get(&self, key: &str) -> Option<&(S, Instant)> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn upsert_returns_previous_sample_and_time() {
        let mut store = SampleStore::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        assert!(store.upsert("eth0", 10u64, t0).is_none());
        assert_eq!(store.upsert("eth0", 20, t1), Some((10, t0)));
        assert_eq!(store.get("eth0"), Some(&(20, t1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_are_independent() {
        let mut store = SampleStore::new();
        let now = Instant::now();
        store.upsert("cpu0", 1u64, now);
        assert!(store.upsert("cpu1", 2, now).is_none());
        let mut keys: Vec<_> = store.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["cpu0", "cpu1"]);
    }
}
