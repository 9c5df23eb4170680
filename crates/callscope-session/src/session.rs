//! AnalysisSession: the one dataset under analysis and its cached results.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, info, instrument, Span};

use callscope_analysis::aggregation::{AgentPerformance, OverviewStats, TimePatterns};
use callscope_analysis::enricher::{enrich_with, EnrichOptions};
use callscope_analysis::filters::CallFilter;
use callscope_analysis::insights::{operational_insights, InsightOptions, Insights};
use callscope_analysis::outliers::AnomalyOutcome;
use callscope_analysis::{
    agent_performance, detect_anomalies, normalize, overview_stats, time_patterns, ColumnMapping,
    NormalizedTable,
};
use callscope_core::config::CallscopeConfig;
use callscope_core::constants::DEFAULT_QUERY_CACHE_CAPACITY;
use callscope_core::errors::{EnrichError, PipelineError, SessionError};
use callscope_core::tracing::metrics;
use callscope_core::types::{CallRecord, RawTable};

use crate::cache::{Query, QueryCache, QueryKey};
use crate::state::{Dataset, DatasetSource, SessionState};

/// Single-dataset analysis session.
///
/// Every dataset replacement (`load_source`, a successful `confirm_mapping`,
/// `load_sample`, `reset`) bumps the generation and empties the query cache.
pub struct AnalysisSession {
    state: SessionState,
    generation: u64,
    cache: QueryCache,
    enrich_options: EnrichOptions,
    insight_options: InsightOptions,
    anomaly_limit: usize,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(&CallscopeConfig::default())
    }
}

impl AnalysisSession {
    pub fn new(config: &CallscopeConfig) -> Self {
        Self {
            state: SessionState::Empty,
            generation: 0,
            cache: QueryCache::new(DEFAULT_QUERY_CACHE_CAPACITY),
            enrich_options: EnrichOptions::from(&config.analysis),
            insight_options: InsightOptions::from(&config.insights),
            anomaly_limit: config.analysis.effective_anomaly_limit(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    pub fn anomaly_limit(&self) -> usize {
        self.anomaly_limit
    }

    pub fn insight_options(&self) -> &InsightOptions {
        &self.insight_options
    }

    fn replace(&mut self, state: SessionState) {
        self.state = state;
        self.generation += 1;
        self.cache.clear();
        let span = Span::current();
        span.record(metrics::SESSION_GENERATION, self.generation);
        if let Some(fp) = self.state.fingerprint() {
            span.record(metrics::DATASET_FINGERPRINT, format!("{fp:016x}").as_str());
        }
        info!(state = self.state.name(), generation = self.generation, "session state changed");
    }

    /// Accept a new upload. Replaces any current dataset and waits for a mapping.
    #[instrument(skip_all, fields(row_count = table.row_count(), session_generation, dataset_fingerprint))]
    pub fn load_source(&mut self, table: RawTable) -> u64 {
        let fingerprint = callscope_io::fingerprint(&table);
        self.replace(SessionState::AwaitingMapping {
            table: Arc::new(table),
            fingerprint,
        });
        fingerprint
    }

    /// Apply a mapping to the pending upload.
    ///
    /// On a mapping or enrichment error the session keeps waiting for a mapping.
    #[instrument(skip_all, fields(session_generation, dataset_fingerprint))]
    pub fn confirm_mapping(&mut self, mapping: ColumnMapping) -> Result<(), PipelineError> {
        let SessionState::AwaitingMapping { table, fingerprint } = &self.state else {
            return Err(SessionError::NothingToMap.into());
        };
        let normalized = normalize(table, &mapping)?;
        let records = enrich_with(&normalized, &self.enrich_options)?;
        let dataset = Dataset {
            source: DatasetSource::Upload,
            fingerprint: *fingerprint,
            mapping: Some(mapping),
            records: Arc::new(records),
        };
        self.replace(SessionState::Ready(Arc::new(dataset)));
        Ok(())
    }

    /// Load sample data through known-header lookup, from any state.
    ///
    /// On failure the current state is kept.
    #[instrument(skip_all, fields(row_count = table.row_count(), session_generation, dataset_fingerprint))]
    pub fn load_sample(&mut self, table: RawTable) -> Result<(), EnrichError> {
        let normalized = NormalizedTable::from_known_headers(&table);
        let records = enrich_with(&normalized, &self.enrich_options)?;
        let dataset = Dataset {
            source: DatasetSource::Sample,
            fingerprint: callscope_io::fingerprint(&table),
            mapping: None,
            records: Arc::new(records),
        };
        self.replace(SessionState::Ready(Arc::new(dataset)));
        Ok(())
    }

    #[instrument(skip_all, fields(session_generation))]
    pub fn reset(&mut self) {
        self.replace(SessionState::Empty);
    }

    pub fn dataset(&self) -> Result<&Arc<Dataset>, SessionError> {
        match &self.state {
            SessionState::Empty => Err(SessionError::NoDataset),
            SessionState::AwaitingMapping { .. } => Err(SessionError::MappingPending),
            SessionState::Ready(dataset) => Ok(dataset),
        }
    }

    /// All enriched records of the current dataset.
    pub fn records(&self) -> Result<Arc<Vec<CallRecord>>, SessionError> {
        Ok(Arc::clone(&self.dataset()?.records))
    }

    fn key(&self, dataset: &Dataset, query: Query, filter: &CallFilter) -> QueryKey {
        QueryKey {
            fingerprint: dataset.fingerprint,
            generation: self.generation,
            query,
            filter: filter.clone(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(query = query.name(), cache_hit = tracing::field::Empty))]
    fn cached<T, F>(&self, query: Query, filter: &CallFilter, compute: F) -> Result<Arc<T>, SessionError>
    where
        T: Any + Send + Sync,
        F: FnOnce(&[CallRecord]) -> T,
    {
        let dataset = self.dataset()?;
        let key = self.key(dataset, query, filter);
        let hit = self.cache.get::<T>(&key);
        Span::current().record(metrics::CACHE_HIT, hit.is_some());
        if let Some(hit) = hit {
            return Ok(hit);
        }
        debug!("computing query result");

        let records = self.filtered_records(filter)?;
        let value = Arc::new(compute(records.as_slice()));
        self.cache.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Records passing `filter`, in source order. An empty filter shares the
    /// dataset's records without copying.
    pub fn filtered_records(&self, filter: &CallFilter) -> Result<Arc<Vec<CallRecord>>, SessionError> {
        let dataset = self.dataset()?;
        if filter.is_empty() {
            return Ok(Arc::clone(&dataset.records));
        }
        let key = self.key(dataset, Query::FilteredRecords, filter);
        if let Some(hit) = self.cache.get::<Vec<CallRecord>>(&key) {
            return Ok(hit);
        }
        let kept = Arc::new(filter.apply(&dataset.records));
        self.cache.insert(key, Arc::clone(&kept));
        Ok(kept)
    }

    pub fn overview(&self, filter: &CallFilter) -> Result<Arc<OverviewStats>, SessionError> {
        self.cached(Query::Overview, filter, overview_stats)
    }

    pub fn agent_performance(
        &self,
        filter: &CallFilter,
    ) -> Result<Arc<Vec<AgentPerformance>>, SessionError> {
        self.cached(Query::AgentPerformance, filter, agent_performance)
    }

    pub fn time_patterns(&self, filter: &CallFilter) -> Result<Arc<TimePatterns>, SessionError> {
        self.cached(Query::TimePatterns, filter, time_patterns)
    }

    pub fn anomalies(&self, filter: &CallFilter) -> Result<Arc<AnomalyOutcome>, SessionError> {
        let limit = self.anomaly_limit;
        self.cached(Query::Anomalies { limit }, filter, |records| {
            detect_anomalies(records, limit)
        })
    }

    pub fn insights(&self, filter: &CallFilter) -> Result<Arc<Insights>, SessionError> {
        let options = &self.insight_options;
        self.cached(Query::Insights, filter, |records| {
            operational_insights(records, options)
        })
    }

    /// Number of cached query results.
    pub fn cached_results(&self) -> u64 {
        self.cache.len()
    }
}
