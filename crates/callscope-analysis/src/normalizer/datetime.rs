//! Lenient timestamp parsing over a fixed list of formats.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use callscope_core::types::CellValue;

/// Date-time formats tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
];

/// Date-only formats; a bare date parses as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Parse free text into a timestamp. Returns `None` when no format matches.
pub fn parse_text(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a combined date-time cell.
pub fn parse_cell(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(s) => parse_text(s),
        _ => None,
    }
}

/// Build a timestamp from a date cell and a time cell by joining their text
/// with a single space. A blank or unparseable half nulls the whole value.
pub fn parse_split(date: &CellValue, time: &CellValue) -> Option<NaiveDateTime> {
    let date_text = date_part(date)?;
    let time_text = time_part(time)?;
    parse_text(&format!("{date_text} {time_text}"))
}

fn date_part(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.date().format("%Y-%m-%d").to_string()),
        other => other.as_text(),
    }
}

/// Spreadsheets store bare times either as a date-time on the epoch day or
/// as a fraction of a day.
fn time_part(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.time().format("%H:%M:%S").to_string()),
        CellValue::Number(v) if (0.0..1.0).contains(v) => {
            let secs = (v * 86_400.0).round() as u32;
            NaiveTime::from_num_seconds_from_midnight_opt(secs.min(86_399), 0)
                .map(|t| format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()))
        }
        other => other.as_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn accepts_common_formats() {
        assert_eq!(parse_text("2024-01-15 08:30:00"), Some(at(2024, 1, 15, 8, 30, 0)));
        assert_eq!(parse_text("2024-01-15 08:30"), Some(at(2024, 1, 15, 8, 30, 0)));
        assert_eq!(parse_text("2024-01-15T08:30:00"), Some(at(2024, 1, 15, 8, 30, 0)));
        assert_eq!(parse_text("01/15/2024 8:30 PM"), Some(at(2024, 1, 15, 20, 30, 0)));
        assert_eq!(parse_text("2024-01-15"), Some(at(2024, 1, 15, 0, 0, 0)));
        assert_eq!(
            parse_text("2024-01-15T08:30:00+02:00"),
            Some(at(2024, 1, 15, 8, 30, 0))
        );
    }

    #[test]
    fn garbage_is_null() {
        assert_eq!(parse_text("yesterday"), None);
        assert_eq!(parse_text(""), None);
        assert_eq!(parse_text("2024-13-40"), None);
    }

    #[test]
    fn split_with_bad_time_is_null() {
        let date = CellValue::Text("2024-01-15".into());
        assert_eq!(parse_split(&date, &CellValue::Text("25:99".into())), None);
        assert_eq!(parse_split(&date, &CellValue::Empty), None);
        assert_eq!(
            parse_split(&date, &CellValue::Text("13:05:09".into())),
            Some(at(2024, 1, 15, 13, 5, 9))
        );
    }

    #[test]
    fn split_accepts_spreadsheet_cells() {
        let date = CellValue::DateTime(at(2024, 2, 1, 0, 0, 0));
        let time = CellValue::Number(0.5);
        assert_eq!(parse_split(&date, &time), Some(at(2024, 2, 1, 12, 0, 0)));
    }
}
