//! Query Cache
//!
//! Remembers API reads for a short time so moving between list and detail
//! pages does not refetch. Mutations invalidate the keys they touch.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::QueryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Studies,
    Study(u64),
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    config: QueryConfig,
    entries: HashMap<QueryKey, Entry<V>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Cached value if it is younger than the stale time
    pub fn fresh(&self, key: QueryKey, now: DateTime<Utc>) -> Option<V> {
        self.entries
            .get(&key)
            .filter(|entry| now - entry.fetched_at < self.config.stale_time)
            .map(|entry| entry.value.clone())
    }

    /// Any cached value, stale or not
    pub fn peek(&self, key: QueryKey) -> Option<V> {
        self.entries.get(&key).map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: QueryKey, value: V, now: DateTime<Utc>) {
        self.prune(now);
        self.entries.insert(key, Entry { value, fetched_at: now });
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        self.entries.remove(&key);
    }

    /// Drop entries nobody has refreshed within the gc time
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let gc_time = self.config.gc_time;
        self.entries.retain(|_, entry| now - entry.fetched_at < gc_time);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fresh_until_stale_time() {
        let mut cache = QueryCache::new(QueryConfig::default());
        cache.insert(QueryKey::Study(1), "study", t0());

        assert_eq!(cache.fresh(QueryKey::Study(1), t0() + TimeDelta::minutes(4)), Some("study"));
        assert_eq!(cache.fresh(QueryKey::Study(1), t0() + TimeDelta::minutes(5)), None);
        assert_eq!(cache.peek(QueryKey::Study(1)), Some("study"));
        assert_eq!(cache.fresh(QueryKey::Study(2), t0()), None);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = QueryCache::new(QueryConfig::default());
        cache.insert(QueryKey::Studies, vec![1, 2], t0());
        cache.invalidate(QueryKey::Studies);
        assert_eq!(cache.fresh(QueryKey::Studies, t0()), None);
    }

    #[test]
    fn test_insert_prunes_old_entries() {
        let mut cache = QueryCache::new(QueryConfig::default());
        cache.insert(QueryKey::Study(1), 1, t0());
        cache.insert(QueryKey::Study(2), 2, t0() + TimeDelta::minutes(20));
        assert_eq!(cache.len(), 2);

        cache.insert(QueryKey::Study(3), 3, t0() + TimeDelta::minutes(31));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(QueryKey::Study(1)), None);
    }
}
