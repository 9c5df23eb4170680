//! Error handling for Callscope.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod enrich_error;
pub mod error_code;
pub mod export_error;
pub mod load_error;
pub mod mapping_error;
pub mod pipeline_error;
pub mod scenario_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use enrich_error::EnrichError;
pub use error_code::CallscopeErrorCode;
pub use export_error::ExportError;
pub use load_error::LoadError;
pub use mapping_error::{IncompleteMappingError, MappingError};
pub use pipeline_error::PipelineError;
pub use scenario_error::ScenarioError;
pub use session_error::SessionError;
