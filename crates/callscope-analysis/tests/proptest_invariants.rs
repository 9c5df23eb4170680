//! Property tests for the pipeline invariants.

use chrono::{NaiveDate, Timelike};
use proptest::prelude::*;

use callscope_analysis::enricher::{classify, clean_status};
use callscope_analysis::{agent_performance, overview_stats, time_patterns};
use callscope_core::types::{CallOutcome, CallRecord, DayOfWeek};

fn arb_outcome() -> impl Strategy<Value = CallOutcome> {
    prop::sample::select(CallOutcome::ALL.to_vec())
}

prop_compose! {
    fn arb_record()(
        agent in 0usize..6,
        outcome in arb_outcome(),
        seconds in 0.0f64..5_000.0,
        dated in any::<bool>(),
        day in 1u32..28,
        hour in 0u32..24,
    ) -> CallRecord {
        let call_datetime = dated.then(|| {
            NaiveDate::from_ymd_opt(2024, 2, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
        });
        CallRecord {
            row: 0,
            call_datetime,
            date: call_datetime.map(|t| t.date()),
            hour: call_datetime.map(|t| t.hour() as u8),
            day_of_week: call_datetime.map(|t| DayOfWeek::from_date(t.date())),
            agent_name: format!("Agent {agent}"),
            raw_status: None,
            call_outcome: outcome,
            duration_seconds: seconds,
        }
    }
}

proptest! {
    #[test]
    fn classification_is_total(s in ".{0,40}") {
        let outcome = classify(clean_status(&s).as_deref());
        prop_assert!(CallOutcome::ALL.contains(&outcome));
        if s.to_uppercase().contains("ANSWER") {
            prop_assert_eq!(outcome, CallOutcome::Answered);
        }
    }

    #[test]
    fn minutes_are_derived_from_seconds(seconds in 0.0f64..1e7) {
        let record = CallRecord {
            row: 0,
            call_datetime: None,
            date: None,
            hour: None,
            day_of_week: None,
            agent_name: "A".into(),
            raw_status: None,
            call_outcome: CallOutcome::Answered,
            duration_seconds: seconds,
        };
        prop_assert_eq!(record.duration_minutes(), seconds / 60.0);
    }

    #[test]
    fn ranks_are_dense(records in prop::collection::vec(arb_record(), 1..60)) {
        let table = agent_performance(&records);

        let mut volume: Vec<u32> = table.iter().map(|a| a.rank_by_total_calls).collect();
        volume.sort_unstable();
        volume.dedup();
        prop_assert_eq!(&volume, &(1..=volume.len() as u32).collect::<Vec<_>>());

        let mut aht: Vec<u32> = table.iter().filter_map(|a| a.rank_by_avg_talk_time).collect();
        aht.sort_unstable();
        aht.dedup();
        prop_assert_eq!(&aht, &(1..=aht.len() as u32).collect::<Vec<_>>());

        for a in &table {
            prop_assert_eq!(a.rank_by_avg_talk_time.is_none(), a.answered() == 0);
        }
    }

    #[test]
    fn buckets_sum_to_total(records in prop::collection::vec(arb_record(), 0..80)) {
        let patterns = time_patterns(&records);
        let hourly: usize = patterns.hourly.iter().map(|h| h.total_calls).sum();
        let daily: usize = patterns.daily.iter().map(|d| d.total_calls).sum();
        prop_assert_eq!(hourly + patterns.unbucketed_calls, records.len());
        prop_assert_eq!(daily + patterns.unbucketed_calls, records.len());
    }

    #[test]
    fn aggregation_is_idempotent(records in prop::collection::vec(arb_record(), 0..40)) {
        let a = serde_json::to_string(&overview_stats(&records)).unwrap();
        let b = serde_json::to_string(&overview_stats(&records)).unwrap();
        prop_assert_eq!(a, b);

        let a = serde_json::to_string(&agent_performance(&records)).unwrap();
        let b = serde_json::to_string(&agent_performance(&records)).unwrap();
        prop_assert_eq!(a, b);

        let a = serde_json::to_string(&time_patterns(&records)).unwrap();
        let b = serde_json::to_string(&time_patterns(&records)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn agent_table_ignores_record_order(records in prop::collection::vec(arb_record(), 0..40)) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(agent_performance(&records), agent_performance(&reversed));
    }
}
