//! # callscope-io
//!
//! Everything that touches the filesystem: loading uploads into a
//! [`RawTable`](callscope_core::RawTable), extracting sample datasets, writing
//! CSV exports, and fingerprinting a loaded table.

pub mod export;
pub mod fingerprint;
pub mod loader;
pub mod sample;

pub use export::{write_report, write_report_to};
pub use fingerprint::fingerprint;
pub use loader::{load_table, LoadOptions, SourceFormat};
pub use sample::{extract_sample, write_sample, SampleOptions};
