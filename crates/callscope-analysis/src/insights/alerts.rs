//! Executive alerts: agents and time slots that stand out from the team.

use serde::{Deserialize, Serialize};

use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallOutcome, CallRecord, DayOfWeek};

use super::InsightOptions;
use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    /// Agent mean answered time above the team mean.
    HighAgentAht {
        agent: String,
        aht_min: f64,
        team_aht_min: f64,
        /// Weekday/hour slot with the agent's highest mean, if any call is dated.
        worst_slot: Option<(DayOfWeek, u8, f64)>,
    },
    /// Team mean in one weekday/hour slot above the team mean plus the margin.
    AbnormalSlotAht {
        day: DayOfWeek,
        hour: u8,
        aht_min: f64,
        team_aht_min: f64,
    },
    /// Agent drop rate above the team drop rate plus the margin.
    HighDropRate {
        agent: String,
        drop_rate: f64,
        team_drop_rate: f64,
    },
}

impl Alert {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HighAgentAht { .. } => "high_agent_aht",
            Self::AbnormalSlotAht { .. } => "abnormal_slot_aht",
            Self::HighDropRate { .. } => "high_drop_rate",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::HighAgentAht { agent, .. } => format!("High AHT: {agent}"),
            Self::AbnormalSlotAht { day, hour, .. } => {
                format!("Abnormal Team AHT: {day} {hour:02}:00")
            }
            Self::HighDropRate { agent, .. } => format!("High Drop Rate: {agent}"),
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::HighAgentAht {
                aht_min,
                team_aht_min,
                worst_slot,
                ..
            } => {
                let mut s = format!("AHT: {aht_min:.2} min (team avg: {team_aht_min:.2} min)");
                if let Some((day, hour, v)) = worst_slot {
                    s.push_str(&format!(". Worst: {day} at {hour:02}:00 ({v:.2} min)"));
                }
                s
            }
            Self::AbnormalSlotAht {
                aht_min,
                team_aht_min,
                ..
            } => format!("Team AHT: {aht_min:.2} min (avg: {team_aht_min:.2} min)"),
            Self::HighDropRate {
                drop_rate,
                team_drop_rate,
                ..
            } => format!("Drop Rate: {drop_rate:.1}% (team avg: {team_drop_rate:.1}%)"),
        }
    }

    pub fn recommendation(&self) -> String {
        match self {
            Self::HighAgentAht {
                agent,
                worst_slot: Some((day, hour, _)),
                ..
            } => format!("Coach {agent} for efficiency, especially on {day} at {hour:02}:00."),
            Self::HighAgentAht { agent, .. } => format!("Coach {agent} for efficiency."),
            Self::AbnormalSlotAht { .. } => {
                "Review call routing, staffing, or process for this slot.".to_string()
            }
            Self::HighDropRate { agent, .. } => {
                format!("Review call handling and support for {agent}.")
            }
        }
    }
}

fn is_dropped(record: &CallRecord) -> bool {
    record.call_outcome == CallOutcome::Dropped
}

/// Highest mean over the groups; ties go to the first key in order.
fn worst<K: Copy>(groups: &BTreeMap<K, Vec<f64>>) -> Option<(K, f64)> {
    groups
        .iter()
        .map(|(k, v)| (*k, stats::mean(v)))
        .fold(None, |best, (k, m)| match best {
            Some((_, bm)) if bm >= m => best,
            _ => Some((k, m)),
        })
}

/// Alerts in a fixed order: agent AHT (by agent name), slot AHT (Monday
/// first, then hour), agent drop rate (by agent name).
pub fn executive_alerts(records: &[CallRecord], options: &InsightOptions) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if records.is_empty() {
        return alerts;
    }

    let answered: Vec<&CallRecord> = records.iter().filter(|r| r.is_answered()).collect();
    let team_minutes: Vec<f64> = answered.iter().map(|r| r.duration_minutes()).collect();
    let team_aht = stats::mean(&team_minutes);

    let mut by_agent: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut agent_slots: BTreeMap<&str, BTreeMap<(DayOfWeek, u8), Vec<f64>>> = BTreeMap::new();
    let mut team_slots: BTreeMap<(DayOfWeek, u8), Vec<f64>> = BTreeMap::new();
    for r in &answered {
        let m = r.duration_minutes();
        by_agent.entry(r.agent_name.as_str()).or_default().push(m);
        if let (Some(day), Some(hour)) = (r.day_of_week, r.hour) {
            agent_slots
                .entry(r.agent_name.as_str())
                .or_default()
                .entry((day, hour))
                .or_default()
                .push(m);
            team_slots.entry((day, hour)).or_default().push(m);
        }
    }

    if !answered.is_empty() {
        for (agent, minutes) in &by_agent {
            let aht = stats::mean(minutes);
            if aht > team_aht {
                let worst_slot = agent_slots
                    .get(agent)
                    .and_then(worst)
                    .map(|((day, hour), v)| (day, hour, v));
                alerts.push(Alert::HighAgentAht {
                    agent: agent.to_string(),
                    aht_min: aht,
                    team_aht_min: team_aht,
                    worst_slot,
                });
            }
        }

        for ((day, hour), minutes) in &team_slots {
            let aht = stats::mean(minutes);
            if aht > team_aht + options.slot_aht_margin_min {
                alerts.push(Alert::AbnormalSlotAht {
                    day: *day,
                    hour: *hour,
                    aht_min: aht,
                    team_aht_min: team_aht,
                });
            }
        }
    }

    let team_drop = stats::rate(records.iter().filter(|r| is_dropped(r)).count(), records.len());
    let mut agent_calls: BTreeMap<&str, Vec<&CallRecord>> = BTreeMap::new();
    for r in records {
        agent_calls.entry(r.agent_name.as_str()).or_default().push(r);
    }
    for (agent, calls) in &agent_calls {
        let rate = stats::rate(calls.iter().filter(|r| is_dropped(r)).count(), calls.len());
        if rate > team_drop + options.drop_rate_margin_pct {
            alerts.push(Alert::HighDropRate {
                agent: agent.to_string(),
                drop_rate: rate,
                team_drop_rate: team_drop,
            });
        }
    }

    alerts
}
