//! Cookie log parsing and activity scanning
//!
//! A cookie log is a CSV stream of `<cookie>,<timestamp>` lines sorted by
//! descending timestamp. The scanner tallies one calendar day in a single pass.

mod record;
mod scanner;
mod types;

pub(crate) use scanner::find_most_active;
pub(crate) use types::{ScanReport, SkippedLine, TargetDay};
