//! Query result cache using moka.
//!
//! Entries are keyed by dataset fingerprint, session generation, query and
//! filter. Values are type-erased `Arc`s; each [`Query`] always maps to the
//! same result type, so a failed downcast is treated as a miss.

use std::any::Any;
use std::sync::Arc;

use moka::sync::Cache;

use callscope_analysis::filters::CallFilter;

/// Cacheable session queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    FilteredRecords,
    Overview,
    AgentPerformance,
    TimePatterns,
    Anomalies { limit: usize },
    Insights,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FilteredRecords => "filtered_records",
            Self::Overview => "overview",
            Self::AgentPerformance => "agent_performance",
            Self::TimePatterns => "time_patterns",
            Self::Anomalies { .. } => "anomalies",
            Self::Insights => "insights",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub fingerprint: u64,
    pub generation: u64,
    pub query: Query,
    pub filter: CallFilter,
}

type Erased = Arc<dyn Any + Send + Sync>;

pub struct QueryCache {
    cache: Cache<QueryKey, Erased>,
}

impl QueryCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get<T: Any + Send + Sync>(&self, key: &QueryKey) -> Option<Arc<T>> {
        self.cache.get(key).and_then(|v| v.downcast::<T>().ok())
    }

    pub fn insert<T: Any + Send + Sync>(&self, key: QueryKey, value: Arc<T>) {
        self.cache.insert(key, value);
    }

    /// Pending maintenance is flushed so `len` reflects the result.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(generation: u64, query: Query) -> QueryKey {
        QueryKey {
            fingerprint: 7,
            generation,
            query,
            filter: CallFilter::default(),
        }
    }

    #[test]
    fn typed_round_trip() {
        let cache = QueryCache::new(16);
        cache.insert(key(1, Query::Overview), Arc::new(42usize));
        assert_eq!(cache.get::<usize>(&key(1, Query::Overview)).as_deref(), Some(&42));
        assert!(cache.get::<String>(&key(1, Query::Overview)).is_none());
        assert!(cache.get::<usize>(&key(2, Query::Overview)).is_none());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = QueryCache::new(16);
        cache.insert(key(1, Query::Insights), Arc::new(1u8));
        cache.insert(key(1, Query::TimePatterns), Arc::new(2u8));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
