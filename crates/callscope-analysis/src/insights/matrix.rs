//! Per-agent scorecard against team averages: AHT, drop rate, call volume.

use std::fmt;

use serde::{Deserialize, Serialize};

use callscope_core::constants::{
    HIGH_VOLUME_FACTOR, MATRIX_AHT_MARGIN_MIN, MATRIX_DROP_RATE_MARGIN_PCT,
};
use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallOutcome, CallRecord};

use crate::stats;

/// How far a metric sits above the team average. Lower is better for both
/// AHT and drop rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricTier {
    /// Above the team average plus the margin.
    Critical,
    AboveAverage,
    /// At or below the team average.
    Good,
}

impl MetricTier {
    fn classify(value: f64, team: f64, margin: f64) -> Self {
        if value > team + margin {
            Self::Critical
        } else if value > team {
            Self::AboveAverage
        } else {
            Self::Good
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::AboveAverage => "above_average",
            Self::Good => "good",
        }
    }
}

impl fmt::Display for MetricTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentScorecard {
    pub agent: String,
    /// Mean answered minutes; `None` without answered calls.
    pub aht_min: Option<f64>,
    pub drop_rate: f64,
    pub call_volume: usize,
    pub aht_tier: Option<MetricTier>,
    pub drop_rate_tier: MetricTier,
    pub high_volume: bool,
}

/// Agent rows (alphabetical) plus the team averages they are graded against.
///
/// Team averages are means over agents, not over calls. Agents without
/// answered calls do not count toward the team AHT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsMatrix {
    pub agents: Vec<AgentScorecard>,
    pub team_aht_min: Option<f64>,
    pub team_drop_rate: f64,
    pub team_call_volume: f64,
}

impl InsightsMatrix {
    pub fn get(&self, agent: &str) -> Option<&AgentScorecard> {
        self.agents.iter().find(|a| a.agent == agent)
    }

    /// Agents with at least one critical metric.
    pub fn critical(&self) -> impl Iterator<Item = &AgentScorecard> {
        self.agents.iter().filter(|a| {
            a.aht_tier == Some(MetricTier::Critical) || a.drop_rate_tier == MetricTier::Critical
        })
    }
}

pub fn insights_matrix(records: &[CallRecord]) -> InsightsMatrix {
    let mut groups: BTreeMap<&str, Vec<&CallRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.agent_name.as_str()).or_default().push(r);
    }
    if groups.is_empty() {
        return InsightsMatrix::default();
    }

    let raw: Vec<(&str, Option<f64>, f64, usize)> = groups
        .iter()
        .map(|(agent, calls)| {
            let answered = stats::sorted(
                &calls
                    .iter()
                    .filter(|c| c.is_answered())
                    .map(|c| c.duration_minutes())
                    .collect::<Vec<_>>(),
            );
            let aht = (!answered.is_empty()).then(|| stats::mean(&answered));
            let dropped = calls
                .iter()
                .filter(|c| c.call_outcome == CallOutcome::Dropped)
                .count();
            (*agent, aht, stats::rate(dropped, calls.len()), calls.len())
        })
        .collect();

    let ahts: Vec<f64> = raw.iter().filter_map(|r| r.1).collect();
    let team_aht_min = (!ahts.is_empty()).then(|| stats::mean(&ahts));
    let team_drop_rate = stats::mean(&raw.iter().map(|r| r.2).collect::<Vec<_>>());
    let team_call_volume = stats::mean(&raw.iter().map(|r| r.3 as f64).collect::<Vec<_>>());

    let agents = raw
        .into_iter()
        .map(|(agent, aht_min, drop_rate, call_volume)| AgentScorecard {
            agent: agent.to_string(),
            aht_min,
            drop_rate,
            call_volume,
            aht_tier: aht_min
                .zip(team_aht_min)
                .map(|(v, team)| MetricTier::classify(v, team, MATRIX_AHT_MARGIN_MIN)),
            drop_rate_tier: MetricTier::classify(drop_rate, team_drop_rate, MATRIX_DROP_RATE_MARGIN_PCT),
            high_volume: call_volume as f64 > team_call_volume * HIGH_VOLUME_FACTOR,
        })
        .collect();

    InsightsMatrix {
        agents,
        team_aht_min,
        team_drop_rate,
        team_call_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(agent: &str, outcome: CallOutcome, minutes: f64) -> CallRecord {
        CallRecord {
            row: 0,
            call_datetime: None,
            date: None,
            hour: None,
            day_of_week: None,
            agent_name: agent.to_string(),
            raw_status: None,
            call_outcome: outcome,
            duration_seconds: minutes * 60.0,
        }
    }

    fn records() -> Vec<CallRecord> {
        let mut out = Vec::new();
        // Ann: 4 calls, AHT 2.0, no drops.
        for _ in 0..4 {
            out.push(call("Ann", CallOutcome::Answered, 2.0));
        }
        // Ben: 2 calls, AHT 3.0, 50% dropped.
        out.push(call("Ben", CallOutcome::Answered, 3.0));
        out.push(call("Ben", CallOutcome::Dropped, 0.0));
        // Cy: 1 dropped call only.
        out.push(call("Cy", CallOutcome::Dropped, 0.0));
        // Dee: 1 call, AHT 2.2.
        out.push(call("Dee", CallOutcome::Answered, 2.2));
        out
    }

    #[test]
    fn team_averages_are_over_agents() {
        let m = insights_matrix(&records());
        let aht = m.team_aht_min.unwrap();
        assert!((aht - 2.4).abs() < 1e-12);
        assert!((m.team_drop_rate - 37.5).abs() < 1e-12);
        assert!((m.team_call_volume - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tiers_follow_margins() {
        let m = insights_matrix(&records());
        let ann = m.get("Ann").unwrap();
        assert_eq!(ann.aht_tier, Some(MetricTier::Good));
        assert_eq!(ann.drop_rate_tier, MetricTier::Good);
        assert!(ann.high_volume);

        let ben = m.get("Ben").unwrap();
        // 3.0 > 2.4 + 0.5
        assert_eq!(ben.aht_tier, Some(MetricTier::Critical));
        // 50 > 37.5 + 5
        assert_eq!(ben.drop_rate_tier, MetricTier::Critical);
        assert!(!ben.high_volume);

        let cy = m.get("Cy").unwrap();
        assert_eq!(cy.aht_min, None);
        assert_eq!(cy.aht_tier, None);
        assert_eq!(cy.drop_rate_tier, MetricTier::Critical);

        let dee = m.get("Dee").unwrap();
        assert_eq!(dee.aht_tier, Some(MetricTier::Good));

        let critical: Vec<&str> = m.critical().map(|a| a.agent.as_str()).collect();
        assert_eq!(critical, ["Ben", "Cy"]);
    }

    #[test]
    fn above_average_within_margin() {
        let records = vec![
            call("A", CallOutcome::Answered, 2.0),
            call("B", CallOutcome::Answered, 2.4),
        ];
        let m = insights_matrix(&records);
        assert_eq!(m.get("B").unwrap().aht_tier, Some(MetricTier::AboveAverage));
        assert_eq!(m.get("A").unwrap().aht_tier, Some(MetricTier::Good));
    }

    #[test]
    fn empty_input_has_no_rows() {
        let m = insights_matrix(&[]);
        assert!(m.agents.is_empty());
        assert_eq!(m.team_aht_min, None);
    }
}
