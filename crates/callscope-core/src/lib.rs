//! # callscope-core
//!
//! Foundation crate for the Callscope call analytics engine.
//! Defines the canonical record types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CallscopeConfig;
pub use errors::{CallscopeErrorCode, PipelineError};
pub use types::{CallOutcome, CallRecord, CellValue, DayOfWeek, RawTable};
