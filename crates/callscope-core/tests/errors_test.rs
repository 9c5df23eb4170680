//! Tests for the Callscope error handling system.

use std::collections::HashSet;

use callscope_core::errors::*;
use callscope_core::types::RequiredField;

fn every_error() -> Vec<PipelineError> {
    vec![
        LoadError::Io {
            path: "calls.csv".into(),
            message: "denied".into(),
        }
        .into(),
        LoadError::UnsupportedFormat {
            extension: "pdf".into(),
        }
        .into(),
        LoadError::EmptyDataset {
            path: "calls.csv".into(),
        }
        .into(),
        LoadError::SheetNotFound {
            path: "calls.xlsx".into(),
            sheet: "Sheet1".into(),
        }
        .into(),
        IncompleteMappingError::new(vec![RequiredField::Agent]).into(),
        MappingError::UnknownColumn {
            field: RequiredField::Outcome,
            column: "status".into(),
        }
        .into(),
        EnrichError::NoRecordStructure.into(),
        ScenarioError::DegenerateHandleTime { total: 0.0 }.into(),
        ExportError::Write {
            path: "out".into(),
            message: "full".into(),
        }
        .into(),
        SessionError::NoDataset.into(),
        ConfigError::FileNotFound {
            path: "callscope.toml".into(),
        }
        .into(),
    ]
}

#[test]
fn test_all_errors_have_error_code() {
    for err in every_error() {
        assert!(!err.error_code().is_empty(), "{err}");
    }
}

#[test]
fn test_pipeline_error_delegates_codes() {
    let codes: HashSet<&str> = every_error().iter().map(|e| e.error_code()).collect();
    for expected in [
        "LOAD_ERROR",
        "UNSUPPORTED_FORMAT",
        "EMPTY_DATASET",
        "SHEET_NOT_FOUND",
        "INCOMPLETE_MAPPING",
        "UNKNOWN_COLUMN",
        "ENRICH_ERROR",
        "SCENARIO_ERROR",
        "EXPORT_ERROR",
        "SESSION_ERROR",
        "CONFIG_ERROR",
    ] {
        assert!(codes.contains(expected), "missing code {expected}");
    }
}

#[test]
fn test_incomplete_mapping_lists_every_missing_field() {
    let err = IncompleteMappingError::new(vec![
        RequiredField::Time,
        RequiredField::Agent,
        RequiredField::TalkTime,
    ]);
    assert_eq!(err.missing_names(), vec!["Time", "Agent", "Talk Time"]);
    assert_eq!(
        err.to_string(),
        "Incomplete column mapping, missing: Time, Agent, Talk Time"
    );
}

#[test]
fn test_coded_string_format() {
    let err = LoadError::UnsupportedFormat {
        extension: "pdf".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[UNSUPPORTED_FORMAT] Unsupported file format: .pdf"
    );

    let pipeline: PipelineError = SessionError::MappingPending.into();
    assert!(pipeline.coded_string().starts_with("[SESSION_ERROR] "));
}

#[test]
fn test_from_conversions() {
    let pipeline: PipelineError = EnrichError::EmptyDataset.into();
    assert!(matches!(pipeline, PipelineError::Enrich(EnrichError::EmptyDataset)));

    let pipeline: PipelineError = IncompleteMappingError::new(vec![RequiredField::Date]).into();
    assert!(matches!(
        pipeline,
        PipelineError::Mapping(MappingError::Incomplete(_))
    ));
}
