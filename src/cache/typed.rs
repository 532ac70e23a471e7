//! Named, typed handle over a Moka cache.

use std::hash::Hash;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use super::{CacheConfig, Expiry};

/// Clones share the same underlying cache.
#[derive(Clone)]
pub struct TypedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<K, V>,
    name: Arc<str>,
}

impl<K, V> TypedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &str, config: CacheConfig) -> Self {
        let builder = Cache::builder().max_capacity(config.max_capacity);
        let inner = match config.expiry {
            Expiry::Never => builder.build(),
            Expiry::AfterWrite(ttl) => builder.time_to_live(ttl).build(),
            Expiry::AfterIdle(tti) => builder.time_to_idle(tti).build(),
        };

        debug!("Cache {} ready ({:?})", name, config);
        Self {
            inner,
            name: name.into(),
        }
    }

    pub fn insert(&self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }
}

impl<K, V> std::fmt::Debug for TypedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCache")
            .field("name", &self.name)
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}
