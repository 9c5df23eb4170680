//! Outcome classification from raw status text.

use callscope_core::types::CallOutcome;

/// Uppercase and trim a status. Blank input yields `None`.
pub fn clean_status(raw: &str) -> Option<String> {
    let cleaned = raw.trim().to_uppercase();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Classify a cleaned status. First match wins:
/// "ANSWER" → Answered, "DROP" → Dropped, "BUSY" → Busy,
/// "NO ANSWER" → No Answer, anything else → Other, null → Unknown.
///
/// "NO ANSWER" contains "ANSWER", so such statuses land in Answered.
pub fn classify(status: Option<&str>) -> CallOutcome {
    let Some(status) = status else {
        return CallOutcome::Unknown;
    };
    if status.contains("ANSWER") {
        CallOutcome::Answered
    } else if status.contains("DROP") {
        CallOutcome::Dropped
    } else if status.contains("BUSY") {
        CallOutcome::Busy
    } else if status.contains("NO ANSWER") {
        CallOutcome::NoAnswer
    } else {
        CallOutcome::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_priority() {
        assert_eq!(classify(Some("ANSWERED")), CallOutcome::Answered);
        assert_eq!(classify(Some("ANSWERED-NO")), CallOutcome::Answered);
        assert_eq!(classify(Some("CALL DROPPED")), CallOutcome::Dropped);
        assert_eq!(classify(Some("BUSY")), CallOutcome::Busy);
        assert_eq!(classify(Some("NO ANSWER")), CallOutcome::Answered);
        assert_eq!(classify(Some("VOICEMAIL")), CallOutcome::Other);
        assert_eq!(classify(None), CallOutcome::Unknown);
    }

    #[test]
    fn clean_status_normalizes_case_and_space() {
        assert_eq!(clean_status("  answered "), Some("ANSWERED".to_string()));
        assert_eq!(clean_status("   "), None);
    }
}
