//! Canonical types shared by every Callscope crate.

pub mod collections;
pub mod field;
pub mod outcome;
pub mod record;
pub mod table;
pub mod weekday;

pub use field::{RequiredField, TalkTimeUnit};
pub use outcome::CallOutcome;
pub use record::CallRecord;
pub use table::{CellValue, RawTable};
pub use weekday::DayOfWeek;
