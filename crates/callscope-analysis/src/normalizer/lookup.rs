//! Prioritized header lookup for files with a known column vocabulary.

use callscope_core::types::RawTable;

/// Date and time halves of a split timestamp.
pub const SPLIT_DATE_HEADERS: &[&str] = &["call_date"];
pub const SPLIT_TIME_HEADERS: &[&str] = &["Time"];
/// Combined timestamp columns.
pub const DATETIME_HEADERS: &[&str] = &["call_dateTime", "Date"];
pub const AGENT_HEADERS: &[&str] = &["full_name", "Agent", "user"];
pub const STATUS_HEADERS: &[&str] = &["status", "Outcome"];
/// Talk time recorded in seconds.
pub const DURATION_SECONDS_HEADERS: &[&str] = &["length_in_sec"];
/// Talk time recorded in minutes.
pub const DURATION_MINUTES_HEADERS: &[&str] = &["Talk Time (min)", "length_in_min"];

/// Find the first candidate present in `table`.
///
/// All candidates are tried for an exact header match first, in order; only
/// then is a case-insensitive, whitespace-trimmed match attempted.
pub fn find_column(table: &RawTable, candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| table.column_index(c))
        .or_else(|| {
            candidates.iter().find_map(|c| {
                table
                    .columns()
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(c))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> RawTable {
        RawTable::new(headers.iter().map(|h| h.to_string()).collect())
    }

    #[test]
    fn exact_match_beats_case_insensitive() {
        let t = table(&["AGENT", "user"]);
        // "user" matches exactly even though "Agent" has higher priority.
        assert_eq!(find_column(&t, AGENT_HEADERS), Some(1));
    }

    #[test]
    fn priority_order_among_exact_matches() {
        let t = table(&["user", "full_name"]);
        assert_eq!(find_column(&t, AGENT_HEADERS), Some(1));
    }

    #[test]
    fn case_insensitive_fallback() {
        let t = table(&[" Full_Name "]);
        assert_eq!(find_column(&t, AGENT_HEADERS), Some(0));
        assert_eq!(find_column(&t, STATUS_HEADERS), None);
    }
}
