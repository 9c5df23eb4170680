//! Aggregation engine: overview statistics, agent leaderboards, and
//! hourly/daily time patterns. Every function is a pure recomputation over
//! the record slice.

pub mod agents;
pub mod overview;
pub mod time_patterns;

pub use agents::{agent_performance, max_rank, search_agents, AgentPerformance, Badge};
pub use overview::{overview_stats, DropRateHealth, OutcomeShare, OverviewStats, TalkTimeSummary};
pub use time_patterns::{time_patterns, DailyStat, HourlyStat, PeakSummary, TimePatterns};

use std::hash::Hash;

use callscope_core::types::collections::FxHashMap;

/// Most frequent value; ties go to the value encountered first.
pub(crate) fn mode_first_seen<T, I>(values: I) -> Option<T>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, first position)
    let mut counts: FxHashMap<T, (usize, usize)> = FxHashMap::default();
    for (pos, v) in values.into_iter().enumerate() {
        counts.entry(v).or_insert((0, pos)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(v, _)| v)
}
