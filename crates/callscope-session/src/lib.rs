//! # callscope-session
//!
//! The single-dataset analysis session. Holds the loaded table, the confirmed
//! mapping and the enriched records, and memoizes query results until the
//! dataset is replaced.

pub mod cache;
pub mod session;
pub mod state;

pub use cache::{Query, QueryCache, QueryKey};
pub use session::AnalysisSession;
pub use state::{Dataset, DatasetSource, SessionState};
