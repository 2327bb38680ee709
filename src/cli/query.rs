use std::path::PathBuf;

use chrono::NaiveDate;

use crate::consts::STDIN_PATH;
use crate::cookie::TargetDay;
use crate::utils::Timezone;

use super::args::OutputFormat;

/// Validated request: which log to scan, for which day, and how to print it
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Query {
    pub(crate) path: PathBuf,
    pub(crate) date: NaiveDate,
    pub(crate) timezone: Timezone,
    pub(crate) format: OutputFormat,
}

impl Query {
    pub(crate) fn target_day(&self) -> TargetDay {
        TargetDay::new(self.date, self.timezone)
    }

    pub(crate) fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }
}
