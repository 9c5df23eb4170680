//! AHT root-cause matrix: mean answered minutes per (agent, weekday).

use serde::{Deserialize, Serialize};

use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallRecord, DayOfWeek};

use crate::stats;

/// Weekday rows (Monday..Sunday, all seven) × agent columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AhtMatrix {
    /// Agents with at least one dated answered call, alphabetical.
    pub agents: Vec<String>,
    /// `cells[day.index()][agent]`; `None` where the pair has no answered calls.
    pub cells: Vec<Vec<Option<f64>>>,
}

/// One (agent, weekday) pair driving high handle time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCause {
    pub agent: String,
    pub day: DayOfWeek,
    pub avg_talk_time_min: f64,
}

impl AhtMatrix {
    pub fn get(&self, agent: &str, day: DayOfWeek) -> Option<f64> {
        let col = self.agents.iter().position(|a| a == agent)?;
        self.cells.get(day.index())?.get(col).copied().flatten()
    }

    /// Pairs above `threshold` minutes, highest first, at most `n`.
    /// Equal values keep agent-then-weekday order.
    pub fn top_causes(&self, threshold: f64, n: usize) -> Vec<RootCause> {
        let mut pairs: Vec<RootCause> = Vec::new();
        for (col, agent) in self.agents.iter().enumerate() {
            for day in DayOfWeek::ALL {
                let cell = self.cells.get(day.index()).and_then(|row| row.get(col));
                if let Some(&Some(v)) = cell {
                    if v > threshold {
                        pairs.push(RootCause {
                            agent: agent.clone(),
                            day: *day,
                            avg_talk_time_min: v,
                        });
                    }
                }
            }
        }
        pairs.sort_by(|a, b| b.avg_talk_time_min.total_cmp(&a.avg_talk_time_min));
        pairs.truncate(n);
        pairs
    }
}

pub fn aht_matrix(records: &[CallRecord]) -> AhtMatrix {
    let mut groups: BTreeMap<&str, BTreeMap<DayOfWeek, Vec<f64>>> = BTreeMap::new();
    for r in records.iter().filter(|r| r.is_answered()) {
        if let Some(day) = r.day_of_week {
            groups
                .entry(r.agent_name.as_str())
                .or_default()
                .entry(day)
                .or_default()
                .push(r.duration_minutes());
        }
    }

    let cells = DayOfWeek::ALL
        .iter()
        .map(|day| {
            groups
                .values()
                .map(|by_day| by_day.get(day).map(|m| stats::mean(m)))
                .collect()
        })
        .collect();
    AhtMatrix {
        agents: groups.keys().map(|a| a.to_string()).collect(),
        cells,
    }
}
