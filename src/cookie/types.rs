//! Core data types for cookie log scanning

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::collections::HashMap;

use crate::error::RecordError;
use crate::utils::Timezone;

/// One parsed log line
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    /// Cookie value
    pub(crate) value: String,
    /// Activity time, expressed in the scan's timezone
    pub(crate) timestamp: DateTime<FixedOffset>,
}

/// Calendar day being queried, anchored to a timezone
#[derive(Debug, Clone, Copy)]
pub(crate) struct TargetDay {
    date: NaiveDate,
    timezone: Timezone,
    start: DateTime<Utc>,
}

impl TargetDay {
    pub(crate) fn new(date: NaiveDate, timezone: Timezone) -> Self {
        Self {
            date,
            timezone,
            start: timezone.start_of_day(date),
        }
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// True when `timestamp` is strictly earlier than the first instant of the day
    pub(crate) fn starts_after(&self, timestamp: &DateTime<FixedOffset>) -> bool {
        timestamp.with_timezone(&Utc) < self.start
    }

    /// True when `timestamp` falls on this calendar day in this timezone
    pub(crate) fn contains(&self, timestamp: &DateTime<FixedOffset>) -> bool {
        self.timezone
            .to_fixed_offset(timestamp.with_timezone(&Utc))
            .date_naive()
            == self.date
    }
}

/// A log line the scanner could not use
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkippedLine {
    /// 1-based line number in the input
    pub(crate) line_no: usize,
    pub(crate) reason: RecordError,
}

/// Result of scanning one cookie log for one day
#[derive(Debug, Default)]
pub(crate) struct ScanReport {
    /// Cookies sharing the highest count, sorted
    pub(crate) cookies: Vec<String>,
    /// Highest count on the target day (0 when nothing matched)
    pub(crate) max_count: usize,
    /// Occurrences per cookie on the target day
    pub(crate) counts: HashMap<String, usize>,
    pub(crate) skipped: Vec<SkippedLine>,
    pub(crate) lines_read: usize,
    /// Scan stopped at a record older than the target day
    pub(crate) stopped_early: bool,
}

impl ScanReport {
    pub(crate) fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub(crate) fn matched(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, tz: Timezone) -> TargetDay {
        TargetDay::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), tz)
    }

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn contains_whole_utc_day() {
        let target = day(2018, 12, 9, Timezone::default());
        assert!(target.contains(&ts("2018-12-09T00:00:00+00:00")));
        assert!(target.contains(&ts("2018-12-09T23:59:59+00:00")));
        assert!(!target.contains(&ts("2018-12-08T23:59:59+00:00")));
        assert!(!target.contains(&ts("2018-12-10T00:00:00+00:00")));
    }

    #[test]
    fn contains_uses_target_timezone() {
        let target = day(2018, 12, 9, Timezone::Named(chrono_tz::Asia::Tokyo));
        // 16:00 UTC on the 8th is 01:00 on the 9th in Tokyo
        assert!(target.contains(&ts("2018-12-08T16:00:00+00:00")));
        assert!(!target.contains(&ts("2018-12-09T16:00:00+00:00")));
    }

    #[test]
    fn starts_after_compares_against_day_boundary() {
        let target = day(2018, 12, 9, Timezone::default());
        assert!(target.starts_after(&ts("2018-12-08T23:59:59+00:00")));
        assert!(!target.starts_after(&ts("2018-12-09T00:00:00+00:00")));
        assert!(!target.starts_after(&ts("2018-12-09T06:00:00+00:00")));
        // Same instant as the day start, written with another offset
        assert!(!target.starts_after(&ts("2018-12-09T02:00:00+02:00")));
    }

    #[test]
    fn report_matched_sums_counts() {
        let mut report = ScanReport::default();
        assert!(report.is_empty());
        report.counts.insert("a".into(), 2);
        report.counts.insert("b".into(), 3);
        assert_eq!(report.matched(), 5);
    }
}
