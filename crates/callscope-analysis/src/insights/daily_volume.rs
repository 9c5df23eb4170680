//! Daily call volume for the busiest agents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use callscope_core::types::collections::{BTreeMap, FxHashMap, FxHashSet};
use callscope_core::types::CallRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAgentVolume {
    pub date: NaiveDate,
    pub agent: String,
    pub call_count: usize,
}

/// (date, agent, calls) rows for the `top_n` agents by total volume.
/// Ties in volume go to the alphabetically earlier agent. Rows are ordered by
/// date, then agent. Undated calls count toward ranking but produce no rows.
pub fn daily_agent_volume(records: &[CallRecord], top_n: usize) -> Vec<DailyAgentVolume> {
    let mut totals: FxHashMap<&str, usize> = FxHashMap::default();
    for r in records {
        *totals.entry(r.agent_name.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let top: FxHashSet<&str> = ranked.into_iter().take(top_n).map(|(a, _)| a).collect();

    let mut cells: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    for r in records.iter().filter(|r| top.contains(r.agent_name.as_str())) {
        if let Some(d) = r.date {
            *cells.entry((d, r.agent_name.as_str())).or_default() += 1;
        }
    }
    cells
        .into_iter()
        .map(|((date, agent), call_count)| DailyAgentVolume {
            date,
            agent: agent.to_string(),
            call_count,
        })
        .collect()
}
