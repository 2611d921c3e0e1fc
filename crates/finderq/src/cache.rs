//! Compiled-finder cache.
//!
//! The core compiler is pure and re-entrant; this module layers memoization
//! on top for hosts that resolve the same finder names repeatedly. Entries
//! are stamped with a schema version so a catalog change invalidates stale
//! results.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use finderq_core::FieldType;
use finderq_lang::{FinderError, QueryHolder};
use parking_lot::RwLock;

/// Cache key: entity simple name plus finder name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FinderKey {
    /// Entity simple type name.
    pub entity: String,
    /// Full finder name.
    pub finder: String,
}

impl FinderKey {
    /// Create a new cache key.
    pub fn new(entity: impl Into<String>, finder: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            finder: finder.into(),
        }
    }
}

/// Owned snapshot of a compiled finder, as stored in the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedQuery {
    /// The parametrized query string.
    pub query: String,
    /// Declared type of each parameter, in order.
    pub parameter_types: Vec<FieldType>,
    /// Placeholder name of each parameter, in order.
    pub parameter_names: Vec<String>,
}

impl From<&QueryHolder<'_>> for CachedQuery {
    fn from(holder: &QueryHolder<'_>) -> Self {
        Self {
            query: holder.query.clone(),
            parameter_types: holder.parameter_types.clone(),
            parameter_names: holder.parameter_names.clone(),
        }
    }
}

/// A cached result with its schema-version stamp.
#[derive(Debug)]
struct CacheEntry {
    result: Arc<CachedQuery>,
    schema_version: u64,
    hit_count: AtomicU64,
}

/// Cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheStats {
    /// Get hit count.
    pub fn hits(&self) -> u64 {
        self.hits.load(AtomicOrdering::Relaxed)
    }

    /// Get miss count.
    pub fn misses(&self) -> u64 {
        self.misses.load(AtomicOrdering::Relaxed)
    }

    /// Get eviction count.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(AtomicOrdering::Relaxed)
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

/// Thread-safe cache of compiled finders, keyed by [`FinderKey`].
///
/// Entries stamped with an older schema version are treated as misses.
/// [`QueryCache::get_or_compute`] guarantees at-most-once computation per
/// key under concurrent access.
pub struct QueryCache {
    entries: RwLock<HashMap<FinderKey, CacheEntry>>,
    max_entries: usize,
    schema_version: AtomicU64,
    stats: CacheStats,
}

impl QueryCache {
    /// Create a new cache with the specified maximum size.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
            schema_version: AtomicU64::new(0),
            stats: CacheStats::default(),
        }
    }

    /// Get a cached result if present and current.
    pub fn get(&self, key: &FinderKey) -> Option<Arc<CachedQuery>> {
        let current = self.schema_version.load(AtomicOrdering::SeqCst);

        let guard = self.entries.read();
        if let Some(entry) = guard.get(key) {
            if entry.schema_version == current {
                entry.hit_count.fetch_add(1, AtomicOrdering::Relaxed);
                self.stats.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(Arc::clone(&entry.result));
            }
        }

        self.stats.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Get the result for `key`, computing and inserting it on a miss.
    ///
    /// The computation runs while holding the write lock, so concurrent
    /// callers racing on the same key resolve to exactly one computation.
    /// Failed computations are not cached.
    pub fn get_or_compute<F>(
        &self,
        key: FinderKey,
        compute: F,
    ) -> Result<Arc<CachedQuery>, FinderError>
    where
        F: FnOnce() -> Result<CachedQuery, FinderError>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        let current = self.schema_version.load(AtomicOrdering::SeqCst);
        let mut guard = self.entries.write();

        // Another writer may have filled the entry while we waited.
        if let Some(entry) = guard.get(&key) {
            if entry.schema_version == current {
                entry.hit_count.fetch_add(1, AtomicOrdering::Relaxed);
                self.stats.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Ok(Arc::clone(&entry.result));
            }
        }

        let result = Arc::new(compute()?);

        if guard.len() >= self.max_entries && !guard.contains_key(&key) {
            self.evict_least_hit(&mut guard);
        }
        guard.insert(
            key,
            CacheEntry {
                result: Arc::clone(&result),
                schema_version: current,
                hit_count: AtomicU64::new(0),
            },
        );

        Ok(result)
    }

    /// Invalidate all entries (on schema change).
    pub fn invalidate(&self, new_schema_version: u64) {
        self.schema_version
            .store(new_schema_version, AtomicOrdering::SeqCst);
        self.entries.write().clear();
    }

    /// Evict the entry with the fewest hits.
    fn evict_least_hit(&self, entries: &mut HashMap<FinderKey, CacheEntry>) {
        let victim = entries
            .iter()
            .min_by_key(|(_, e)| e.hit_count.load(AtomicOrdering::Relaxed))
            .map(|(k, _)| k.clone());

        if let Some(key) = victim {
            entries.remove(&key);
            self.stats.evictions.fetch_add(1, AtomicOrdering::Relaxed);
        }
    }

    /// Get cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get the current number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
