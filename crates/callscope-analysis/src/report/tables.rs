//! `Tabular` views over each analysis result.

use callscope_core::types::{CallOutcome, CallRecord, DayOfWeek};

use super::{fmt_f64, fmt_opt, Tabular};
use crate::aggregation::{AgentPerformance, OverviewStats, TimePatterns};
use crate::filters::HistoryEntry;
use crate::insights::{
    AgentHourHeatmap, AhtMatrix, Alert, DailyAgentVolume, InsightsMatrix, RootCause,
};
use crate::outliers::Anomaly;
use crate::simulation::{ScenarioParams, ScenarioProjection};

const TEAM_AVG_LABEL: &str = "Team Avg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn record_cells(record: &CallRecord) -> Vec<String> {
    vec![
        record.row.to_string(),
        fmt_opt(record.call_datetime.map(|t| t.format("%Y-%m-%d %H:%M:%S"))),
        fmt_opt(record.date),
        fmt_opt(record.hour),
        fmt_opt(record.day_of_week),
        record.agent_name.clone(),
        record.raw_status.clone().unwrap_or_default(),
        record.call_outcome.name().to_string(),
        fmt_f64(record.duration_seconds),
        fmt_f64(record.duration_minutes()),
    ]
}

const RECORD_HEADERS: &[&str] = &[
    "row",
    "call_datetime",
    "date",
    "hour",
    "day_of_week",
    "agent_name",
    "raw_status",
    "call_outcome",
    "duration_seconds",
    "duration_minutes",
];

/// Canonical call records.
pub struct RecordsReport<'a>(pub &'a [CallRecord]);

impl Tabular for RecordsReport<'_> {
    fn name(&self) -> &'static str {
        "call_records"
    }

    fn headers(&self) -> Vec<String> {
        strings(RECORD_HEADERS)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0.iter().map(record_cells).collect()
    }
}

/// Overview statistics as metric/value pairs.
pub struct OverviewReport<'a>(pub &'a OverviewStats);

impl Tabular for OverviewReport<'_> {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["metric", "value"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let s = self.0;
        let mut rows = vec![
            vec!["total_calls".into(), s.total_calls.to_string()],
            vec!["unique_agents".into(), s.unique_agents.to_string()],
            vec!["answered_calls".into(), s.answered_calls.to_string()],
            vec!["dropped_calls".into(), s.dropped_calls.to_string()],
            vec!["answer_rate".into(), fmt_f64(s.answer_rate)],
            vec!["drop_rate".into(), fmt_f64(s.drop_rate)],
            vec!["drop_rate_health".into(), s.drop_rate_health().to_string()],
        ];
        for share in &s.outcomes {
            rows.push(vec![format!("outcome:{}", share.outcome.name()), share.count.to_string()]);
        }
        if let Some(t) = &s.talk_time {
            rows.push(vec!["talk_time_mean_min".into(), fmt_f64(t.mean)]);
            rows.push(vec!["talk_time_median_min".into(), fmt_f64(t.median)]);
            rows.push(vec!["talk_time_min_min".into(), fmt_f64(t.min)]);
            rows.push(vec!["talk_time_max_min".into(), fmt_f64(t.max)]);
            rows.push(vec!["talk_time_total_min".into(), fmt_f64(t.total)]);
        }
        rows.push(vec!["busiest_hour".into(), fmt_opt(s.busiest_hour)]);
        rows.push(vec!["busiest_day".into(), fmt_opt(s.busiest_day)]);
        if let Some((from, to)) = s.date_range {
            rows.push(vec!["first_date".into(), from.to_string()]);
            rows.push(vec!["last_date".into(), to.to_string()]);
        }
        rows
    }
}

/// Agent leaderboard.
pub struct AgentPerformanceReport<'a>(pub &'a [AgentPerformance]);

impl Tabular for AgentPerformanceReport<'_> {
    fn name(&self) -> &'static str {
        "agent_performance"
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = strings(&["agent_name", "total_calls"]);
        headers.extend(CallOutcome::ALL.iter().map(|o| o.name().to_string()));
        headers.extend(strings(&[
            "answer_rate",
            "avg_talk_time_min",
            "median_talk_time_min",
            "total_talk_time_hours",
            "std_talk_time_min",
            "talk_time_consistency_cv",
            "rank_by_avg_talk_time",
            "rank_by_total_calls",
        ]));
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|a| {
                let mut row = vec![a.agent_name.clone(), a.total_calls.to_string()];
                row.extend(CallOutcome::ALL.iter().map(|o| a.count(*o).to_string()));
                row.extend([
                    fmt_f64(a.answer_rate),
                    fmt_f64(a.avg_talk_time_min),
                    fmt_f64(a.median_talk_time_min),
                    fmt_f64(a.total_talk_time_hours),
                    fmt_f64(a.std_talk_time_min),
                    fmt_f64(a.talk_time_consistency_cv),
                    fmt_opt(a.rank_by_avg_talk_time),
                    a.rank_by_total_calls.to_string(),
                ]);
                row
            })
            .collect()
    }
}

pub struct HourlyReport<'a>(pub &'a TimePatterns);

impl Tabular for HourlyReport<'_> {
    fn name(&self) -> &'static str {
        "hourly"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["hour", "total_calls", "avg_talk_time_min"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .hourly
            .iter()
            .map(|h| {
                vec![
                    h.hour.to_string(),
                    h.total_calls.to_string(),
                    fmt_f64(h.avg_talk_time_min),
                ]
            })
            .collect()
    }
}

pub struct DailyReport<'a>(pub &'a TimePatterns);

impl Tabular for DailyReport<'_> {
    fn name(&self) -> &'static str {
        "daily"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["day_of_week", "total_calls", "avg_talk_time_min"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .daily
            .iter()
            .map(|d| {
                vec![
                    d.day.name().to_string(),
                    d.total_calls.to_string(),
                    fmt_f64(d.avg_talk_time_min),
                ]
            })
            .collect()
    }
}

/// Flagged calls: the record columns plus the score.
pub struct AnomaliesReport<'a>(pub &'a [Anomaly]);

impl Tabular for AnomaliesReport<'_> {
    fn name(&self) -> &'static str {
        "anomalies"
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = strings(RECORD_HEADERS);
        headers.push("anomaly_score".into());
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|a| {
                let mut row = record_cells(&a.record);
                row.push(fmt_f64(a.anomaly_score));
                row
            })
            .collect()
    }
}

/// Agent × hour call counts, one row per agent.
pub struct HeatmapReport<'a>(pub &'a AgentHourHeatmap);

impl Tabular for HeatmapReport<'_> {
    fn name(&self) -> &'static str {
        "agent_hour_heatmap"
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = vec!["agent_name".to_string()];
        headers.extend(self.0.hours.iter().map(|h| format!("{h:02}")));
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .agents
            .iter()
            .zip(&self.0.counts)
            .map(|(agent, counts)| {
                let mut row = vec![agent.clone()];
                row.extend(counts.iter().map(|c| c.to_string()));
                row
            })
            .collect()
    }
}

pub struct DailyVolumeReport<'a>(pub &'a [DailyAgentVolume]);

impl Tabular for DailyVolumeReport<'_> {
    fn name(&self) -> &'static str {
        "daily_agent_volume"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["date", "agent_name", "call_count"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|v| vec![v.date.to_string(), v.agent.clone(), v.call_count.to_string()])
            .collect()
    }
}

/// Mean answered minutes per agent (rows) and weekday (columns); blank when no data.
pub struct AhtMatrixReport<'a>(pub &'a AhtMatrix);

impl Tabular for AhtMatrixReport<'_> {
    fn name(&self) -> &'static str {
        "aht_matrix"
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = vec!["agent_name".to_string()];
        headers.extend(DayOfWeek::ALL.iter().map(|d| d.name().to_string()));
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let matrix = self.0;
        matrix
            .agents
            .iter()
            .map(|agent| {
                let mut row = vec![agent.clone()];
                row.extend(
                    DayOfWeek::ALL
                        .iter()
                        .map(|d| fmt_opt(matrix.get(agent, *d).map(fmt_f64))),
                );
                row
            })
            .collect()
    }
}

pub struct RootCauseReport<'a>(pub &'a [RootCause]);

impl Tabular for RootCauseReport<'_> {
    fn name(&self) -> &'static str {
        "aht_root_causes"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["agent_name", "day_of_week", "avg_talk_time_min"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|c| {
                vec![
                    c.agent.clone(),
                    c.day.name().to_string(),
                    fmt_f64(c.avg_talk_time_min),
                ]
            })
            .collect()
    }
}

/// Agent scorecards followed by a `Team Avg` row with empty tier cells.
pub struct InsightsMatrixReport<'a>(pub &'a InsightsMatrix);

impl Tabular for InsightsMatrixReport<'_> {
    fn name(&self) -> &'static str {
        "insights_matrix"
    }

    fn headers(&self) -> Vec<String> {
        strings(&[
            "agent_name",
            "aht_min",
            "drop_rate_pct",
            "call_volume",
            "aht_tier",
            "drop_rate_tier",
            "high_volume",
        ])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let matrix = self.0;
        let mut rows: Vec<Vec<String>> = matrix
            .agents
            .iter()
            .map(|a| {
                vec![
                    a.agent.clone(),
                    fmt_opt(a.aht_min.map(fmt_f64)),
                    fmt_f64(a.drop_rate),
                    a.call_volume.to_string(),
                    fmt_opt(a.aht_tier),
                    a.drop_rate_tier.to_string(),
                    a.high_volume.to_string(),
                ]
            })
            .collect();
        if !matrix.agents.is_empty() {
            rows.push(vec![
                TEAM_AVG_LABEL.to_string(),
                fmt_opt(matrix.team_aht_min.map(fmt_f64)),
                fmt_f64(matrix.team_drop_rate),
                fmt_f64(matrix.team_call_volume),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
        rows
    }
}

pub struct AlertsReport<'a>(pub &'a [Alert]);

impl Tabular for AlertsReport<'_> {
    fn name(&self) -> &'static str {
        "alerts"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["kind", "title", "detail", "recommendation"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|a| {
                vec![
                    a.kind().to_string(),
                    a.title(),
                    a.detail(),
                    a.recommendation(),
                ]
            })
            .collect()
    }
}

/// One agent's calls in source order.
pub struct HistoryReport<'a>(pub &'a [HistoryEntry]);

impl Tabular for HistoryReport<'_> {
    fn name(&self) -> &'static str {
        "agent_history"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["date", "call_outcome", "duration_minutes"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|h| {
                vec![
                    fmt_opt(h.date),
                    h.call_outcome.name().to_string(),
                    fmt_f64(h.duration_minutes),
                ]
            })
            .collect()
    }
}

/// Scenario inputs and projected KPIs as metric/value pairs.
pub struct ScenarioReport<'a> {
    pub params: &'a ScenarioParams,
    pub projection: &'a ScenarioProjection,
}

impl Tabular for ScenarioReport<'_> {
    fn name(&self) -> &'static str {
        "scenario"
    }

    fn headers(&self) -> Vec<String> {
        strings(&["metric", "value"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let p = self.params;
        let r = self.projection;
        [
            ("drop_rate_pct", fmt_f64(p.drop_rate_pct)),
            ("agent_count", p.agent_count.to_string()),
            ("avg_handle_time_min", fmt_f64(p.avg_handle_time_min)),
            ("hold_time_min", fmt_f64(p.hold_time_min)),
            ("after_call_work_min", fmt_f64(p.after_call_work_min)),
            ("utilization_pct", fmt_f64(p.utilization_pct)),
            ("peak_load_factor", fmt_f64(p.peak_load_factor)),
            ("effective_minutes_per_agent", fmt_f64(r.effective_minutes_per_agent)),
            ("calls_per_agent", fmt_f64(r.calls_per_agent)),
            ("total_calls", r.total_calls.to_string()),
            ("projected_dropped", r.projected_dropped.to_string()),
            ("projected_satisfaction", fmt_f64(r.projected_satisfaction)),
        ]
        .into_iter()
        .map(|(k, v)| vec![k.to_string(), v])
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::report::to_csv_string;

    fn record(agent: &str, seconds: f64) -> CallRecord {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 4)
            .and_then(|d| d.and_hms_opt(9, 30, 0));
        CallRecord {
            row: 0,
            call_datetime: dt,
            date: dt.map(|t| t.date()),
            hour: Some(9),
            day_of_week: Some(DayOfWeek::Monday),
            agent_name: agent.to_string(),
            raw_status: Some("ANSWERED".into()),
            call_outcome: CallOutcome::Answered,
            duration_seconds: seconds,
        }
    }

    #[test]
    fn records_csv_has_header_and_quotes_commas() {
        let records = vec![record("Doe, Jane", 90.0)];
        let csv = to_csv_string(&RecordsReport(&records)).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), RECORD_HEADERS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "0,2024-03-04 09:30:00,2024-03-04,9,Monday,\"Doe, Jane\",ANSWERED,Answered,90,1.5"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn exported_numbers_keep_full_precision() {
        let records = vec![record("A", 1.0)];
        let csv = to_csv_string(&RecordsReport(&records)).unwrap();
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[8], "1");
        let minutes: f64 = fields[9].parse().unwrap();
        assert_eq!(minutes, 1.0 / 60.0);

        let score = 1.0 - 1.0 / 60.0;
        let anomalies = vec![Anomaly { record: records[0].clone(), anomaly_score: score }];
        let csv = to_csv_string(&AnomaliesReport(&anomalies)).unwrap();
        let last = csv.lines().nth(1).unwrap().rsplit(',').next().unwrap();
        assert_eq!(last.parse::<f64>().unwrap(), score);
    }

    #[test]
    fn scenario_report_lists_inputs_and_kpis() {
        let params = ScenarioParams {
            drop_rate_pct: 10.0,
            agent_count: 10,
            avg_handle_time_min: 5.0,
            hold_time_min: 0.0,
            after_call_work_min: 1.0,
            utilization_pct: 85.0,
            peak_load_factor: 1.0,
        };
        let projection = crate::simulate(&params).unwrap();
        let report = ScenarioReport { params: &params, projection: &projection };
        let rows = report.rows();
        assert!(rows.contains(&vec!["total_calls".to_string(), "680".to_string()]));
        assert!(rows.contains(&vec!["projected_dropped".to_string(), "68".to_string()]));
    }

    #[test]
    fn insights_matrix_ends_with_team_row() {
        let mut records = vec![record("A", 60.0), record("A", 120.0), record("B", 300.0)];
        records[1].call_outcome = CallOutcome::Dropped;
        let matrix = crate::insights::insights_matrix(&records);
        let report = InsightsMatrixReport(&matrix);
        let rows = report.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["A", "1", "50", "2", "good", "critical", "true"]);
        assert_eq!(rows[1], ["B", "5", "0", "1", "critical", "good", "false"]);
        assert_eq!(rows[2][0], "Team Avg");
        assert_eq!(rows[2][1].parse::<f64>().unwrap(), 3.0);
        assert!(rows[2][4..].iter().all(String::is_empty));
        assert!(InsightsMatrixReport(&Default::default()).rows().is_empty());
    }

    #[test]
    fn heatmap_rows_align_with_hour_headers() {
        let records = vec![record("A", 60.0), record("B", 60.0)];
        let heatmap = crate::insights::agent_hour_heatmap(&records);
        let report = HeatmapReport(&heatmap);
        assert_eq!(report.headers(), vec!["agent_name", "09"]);
        for row in report.rows() {
            assert_eq!(row.len(), report.headers().len());
        }
    }
}
