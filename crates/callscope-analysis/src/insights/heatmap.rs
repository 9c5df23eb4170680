//! Agent × hour call-count matrix.

use serde::{Deserialize, Serialize};

use callscope_core::types::collections::BTreeMap;
use callscope_core::types::CallRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentHourHeatmap {
    /// Observed hours, ascending. Column order of `counts`.
    pub hours: Vec<u8>,
    /// Agents, alphabetical. Row order of `counts`.
    pub agents: Vec<String>,
    /// `counts[agent][hour]`, zero-filled.
    pub counts: Vec<Vec<usize>>,
}

impl AgentHourHeatmap {
    /// Calls for `agent` in `hour`; 0 for unknown agents or hours.
    pub fn get(&self, agent: &str, hour: u8) -> usize {
        self.cell(agent, hour).unwrap_or(0)
    }

    fn cell(&self, agent: &str, hour: u8) -> Option<usize> {
        let row = self.agents.iter().position(|a| a == agent)?;
        let col = self.hours.iter().position(|&h| h == hour)?;
        self.counts.get(row)?.get(col).copied()
    }
}

/// Calls per (agent, hour). Calls without a timestamp are left out.
pub fn agent_hour_heatmap(records: &[CallRecord]) -> AgentHourHeatmap {
    let mut cells: BTreeMap<&str, BTreeMap<u8, usize>> = BTreeMap::new();
    let mut hours: Vec<u8> = Vec::new();
    for r in records {
        if let Some(h) = r.hour {
            *cells.entry(r.agent_name.as_str()).or_default().entry(h).or_default() += 1;
            hours.push(h);
        }
    }
    hours.sort_unstable();
    hours.dedup();

    let counts = cells
        .values()
        .map(|by_hour| {
            hours
                .iter()
                .map(|h| by_hour.get(h).copied().unwrap_or(0))
                .collect()
        })
        .collect();
    AgentHourHeatmap {
        agents: cells.keys().map(|a| a.to_string()).collect(),
        hours,
        counts,
    }
}
