//! Per-agent performance table with dense rankings.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, Span};

use callscope_core::tracing::metrics;
use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallOutcome, CallRecord};

use crate::stats;

/// Leaderboard label derived from the talk-time rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    TopPerformer,
    NeedsCoaching,
    Team,
}

impl Badge {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopPerformer => "Top Performer",
            Self::NeedsCoaching => "Needs Coaching",
            Self::Team => "Team",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub agent_name: String,
    pub total_calls: usize,
    /// Indexed by [`CallOutcome::index`]; zero-filled.
    pub outcome_counts: [usize; 6],
    pub answer_rate: f64,
    pub avg_talk_time_min: f64,
    pub median_talk_time_min: f64,
    pub total_talk_time_hours: f64,
    pub std_talk_time_min: f64,
    pub talk_time_consistency_cv: f64,
    /// Dense, ascending. `None` for agents without answered calls.
    pub rank_by_avg_talk_time: Option<u32>,
    /// Dense, descending.
    pub rank_by_total_calls: u32,
}

impl AgentPerformance {
    pub fn count(&self, outcome: CallOutcome) -> usize {
        self.outcome_counts[outcome.index()]
    }

    pub fn answered(&self) -> usize {
        self.count(CallOutcome::Answered)
    }

    pub fn dropped(&self) -> usize {
        self.count(CallOutcome::Dropped)
    }

    /// Badge relative to the worst rank on the board.
    pub fn badge(&self, max_rank: u32) -> Badge {
        match self.rank_by_avg_talk_time {
            Some(1) => Badge::TopPerformer,
            Some(r) if r == max_rank => Badge::NeedsCoaching,
            _ => Badge::Team,
        }
    }
}

/// Highest talk-time rank on the board, 0 when nobody is ranked.
pub fn max_rank(table: &[AgentPerformance]) -> u32 {
    table
        .iter()
        .filter_map(|a| a.rank_by_avg_talk_time)
        .max()
        .unwrap_or(0)
}

/// Agents whose name contains `query`, case-insensitively. An empty query
/// matches everyone.
pub fn search_agents<'a>(table: &'a [AgentPerformance], query: &str) -> Vec<&'a AgentPerformance> {
    let needle = query.trim().to_lowercase();
    table
        .iter()
        .filter(|a| a.agent_name.to_lowercase().contains(&needle))
        .collect()
}

/// Dense ranks for `values`. Equal values (exact float equality) share a
/// rank; the next distinct value gets the next integer.
fn dense_ranks(values: &[f64], descending: bool) -> Vec<u32> {
    let mut distinct = stats::sorted(values);
    distinct.dedup();
    if descending {
        distinct.reverse();
    }
    values
        .iter()
        .map(|v| {
            let pos = distinct.iter().position(|d| d == v).unwrap_or(0);
            pos as u32 + 1
        })
        .collect()
}

#[instrument(skip_all, fields(record_count = records.len(), agent_count = tracing::field::Empty))]
pub fn agent_performance(records: &[CallRecord]) -> Vec<AgentPerformance> {
    let mut grouped: BTreeMap<&str, Vec<&CallRecord>> = BTreeMap::new();
    for r in records {
        grouped.entry(r.agent_name.as_str()).or_default().push(r);
    }

    let mut table: Vec<AgentPerformance> = grouped
        .into_iter()
        .map(|(agent, calls)| {
            let mut outcome_counts = [0usize; 6];
            for c in &calls {
                outcome_counts[c.call_outcome.index()] += 1;
            }
            // Sorted so agents with the same durations get bit-identical stats
            // regardless of call order; ranks compare means exactly.
            let answered = stats::sorted(
                &calls
                    .iter()
                    .filter(|c| c.is_answered())
                    .map(|c| c.duration_minutes())
                    .collect::<Vec<_>>(),
            );
            let mean = stats::mean(&answered);
            let std = stats::population_std(&answered);
            AgentPerformance {
                agent_name: agent.to_string(),
                total_calls: calls.len(),
                answer_rate: stats::rate(outcome_counts[CallOutcome::Answered.index()], calls.len()),
                outcome_counts,
                avg_talk_time_min: mean,
                median_talk_time_min: stats::median(&answered),
                total_talk_time_hours: answered.iter().sum::<f64>() / 60.0,
                std_talk_time_min: std,
                talk_time_consistency_cv: if mean > 0.0 { std / mean } else { 0.0 },
                rank_by_avg_talk_time: None,
                rank_by_total_calls: 0,
            }
        })
        .collect();

    let totals: Vec<f64> = table.iter().map(|a| a.total_calls as f64).collect();
    for (agent, rank) in table.iter_mut().zip(dense_ranks(&totals, true)) {
        agent.rank_by_total_calls = rank;
    }

    let ranked: Vec<usize> = (0..table.len()).filter(|&i| table[i].answered() > 0).collect();
    let means: Vec<f64> = ranked.iter().map(|&i| table[i].avg_talk_time_min).collect();
    for (&i, rank) in ranked.iter().zip(dense_ranks(&means, false)) {
        table[i].rank_by_avg_talk_time = Some(rank);
    }

    // Stable over the alphabetical base order, so ties stay sorted by name.
    table.sort_by_key(|a| a.rank_by_avg_talk_time.unwrap_or(u32::MAX));

    Span::current().record(metrics::AGENT_COUNT, table.len());
    debug!(ranked = ranked.len(), "computed agent performance");
    table
}
