//! Terminal summaries and CSV exports for an analyzed session.

use std::path::Path;

use tracing::warn;

use callscope_analysis::aggregation::{max_rank, search_agents, AgentPerformance};
use callscope_analysis::filters::{agent_aht_trend, agent_call_history, CallFilter, HistoryEntry};
use callscope_analysis::outliers::AnomalyOutcome;
use callscope_analysis::report::{
    AgentPerformanceReport, AhtMatrixReport, AlertsReport, AnomaliesReport, DailyReport,
    DailyVolumeReport, HeatmapReport, HistoryReport, HourlyReport, InsightsMatrixReport,
    OverviewReport, RecordsReport, RootCauseReport, ScenarioReport, Tabular,
};
use callscope_analysis::simulate;
use callscope_analysis::simulation::{ScenarioParams, ScenarioProjection};
use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;
use callscope_core::types::CallRecord;
use callscope_io::write_report;
use callscope_session::AnalysisSession;

const LEADERBOARD_ROWS: usize = 10;

pub fn print_projection(p: &ScenarioProjection) {
    println!("Calls per agent: {:.1}", p.calls_per_agent);
    println!("Projected calls handled: {}", p.total_calls);
    println!("Projected dropped calls: {}", p.projected_dropped);
    println!("Projected satisfaction: {:.1}%", p.projected_satisfaction);
}

fn export(reports: &[&dyn Tabular], dir: &Path) -> Result<(), PipelineError> {
    for report in reports {
        let path = write_report(*report, dir)?;
        println!("  wrote {}", path.display());
    }
    Ok(())
}

/// When the agent query narrows the leaderboard to a single agent, print that
/// agent's call history and daily AHT trend and return the history for export.
fn drill_down(
    records: &[CallRecord],
    agents: &[AgentPerformance],
    filter: &CallFilter,
) -> Option<Vec<HistoryEntry>> {
    let query = filter.agent_query.as_deref()?;
    let [agent] = search_agents(agents, query)[..] else {
        return None;
    };
    let history = agent_call_history(records, &agent.agent_name);
    println!("\n== {} ==", agent.agent_name);
    println!(
        "{} calls, {} answered, {:.1}% answer rate",
        history.len(),
        agent.answered(),
        agent.answer_rate,
    );
    for (date, aht) in agent_aht_trend(records, &agent.agent_name) {
        println!("  {date}  {aht:>6.2} min avg");
    }
    Some(history)
}

/// Print every summary for the filtered records and export each table.
pub fn present(
    session: &AnalysisSession,
    filter: &CallFilter,
    config: &CallscopeConfig,
) -> Result<(), PipelineError> {
    let dataset = session.dataset()?;
    println!("Dataset {:016x} ({})", dataset.fingerprint, dataset.source);

    let records = session.filtered_records(filter)?;
    if records.is_empty() {
        println!("No calls match the current filter.");
        return Ok(());
    }

    let overview = session.overview(filter)?;
    println!("\n== Overview ==\n{}", overview.summary());

    let agents = session.agent_performance(filter)?;
    let worst = max_rank(&agents);
    println!("\n== Agent Leaderboard ==");
    for a in agents.iter().take(LEADERBOARD_ROWS) {
        println!(
            "{:>4}  {:<24} {:>6} calls  {:>6.2} min avg  {:>5.1}% answered  {}",
            a.rank_by_avg_talk_time.map_or_else(|| "-".to_string(), |r| r.to_string()),
            a.agent_name,
            a.total_calls,
            a.avg_talk_time_min,
            a.answer_rate,
            a.badge(worst),
        );
    }

    let history = drill_down(&records, &agents, filter);

    let patterns = session.time_patterns(filter)?;
    if let Some(peaks) = patterns.peaks() {
        println!("\n== Time Patterns ==");
        println!(
            "Busiest hour {:02}:00 ({} calls), shortest hourly avg {:.2} min, longest {:.2} min at {:02}:00",
            peaks.busiest_hour,
            peaks.peak_hourly_volume,
            peaks.shortest_hourly_avg_min,
            peaks.longest_hourly_avg_min,
            peaks.longest_avg_hour,
        );
    }
    if patterns.unbucketed_calls > 0 {
        println!("{} calls have no usable timestamp", patterns.unbucketed_calls);
    }

    let anomalies = session.anomalies(filter)?;
    println!("\n== Anomalies ==");
    match anomalies.as_ref() {
        AnomalyOutcome::NoAnsweredCalls => println!("No answered calls to analyze."),
        AnomalyOutcome::NoAnomalies => println!("No anomalies detected."),
        AnomalyOutcome::Found(set) => println!("{}", set.narrative()),
    }

    let insights = session.insights(filter)?;
    println!("\n== Insights Matrix ==");
    let critical: Vec<&str> = insights.matrix.critical().map(|a| a.agent.as_str()).collect();
    if critical.is_empty() {
        println!("No agent is critically above the team average.");
    } else {
        println!("Critical: {}", critical.join(", "));
    }

    println!("\n== Alerts ==");
    if insights.alerts.is_empty() {
        println!("No alerts.");
    }
    for alert in &insights.alerts {
        println!("- {}: {}", alert.title(), alert.detail());
    }

    let params = ScenarioParams::baseline(&overview, &config.scenario);
    let projection = match simulate(&params) {
        Ok(p) => {
            println!("\n== Baseline Scenario ==");
            print_projection(&p);
            Some(p)
        }
        Err(e) => {
            warn!(error = %e, "baseline scenario skipped");
            None
        }
    };

    let dir = config.export.effective_output_dir();
    println!("\nExports:");
    let records_report = RecordsReport(&records);
    let overview_report = OverviewReport(&overview);
    let agents_report = AgentPerformanceReport(&agents);
    let hourly_report = HourlyReport(&patterns);
    let daily_report = DailyReport(&patterns);
    let anomalies_report = AnomaliesReport(anomalies.anomalies());
    let heatmap_report = HeatmapReport(&insights.heatmap);
    let volume_report = DailyVolumeReport(&insights.daily_volume);
    let aht_matrix_report = AhtMatrixReport(&insights.aht_matrix);
    let causes_report = RootCauseReport(&insights.root_causes);
    let alerts_report = AlertsReport(&insights.alerts);
    let insights_matrix_report = InsightsMatrixReport(&insights.matrix);
    let history_report = history.as_deref().map(HistoryReport);
    let scenario_report = projection.as_ref().map(|projection| ScenarioReport {
        params: &params,
        projection,
    });

    let mut reports: Vec<&dyn Tabular> = vec![
        &records_report,
        &overview_report,
        &agents_report,
        &hourly_report,
        &daily_report,
        &anomalies_report,
        &heatmap_report,
        &volume_report,
        &aht_matrix_report,
        &causes_report,
        &insights_matrix_report,
        &alerts_report,
    ];
    if let Some(report) = &history_report {
        reports.push(report);
    }
    if let Some(report) = &scenario_report {
        reports.push(report);
    }
    export(&reports, &dir)
}
