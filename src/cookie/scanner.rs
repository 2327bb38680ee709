//! Streaming most-active-cookie scanner
//!
//! Reads a cookie log sorted by descending timestamp, tallies the records that
//! fall on the target day and stops at the first record older than that day.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::consts::FILE_HEADER;
use crate::cookie::record::parse_record;
use crate::cookie::types::{ScanReport, SkippedLine, TargetDay};
use crate::error::{RecordError, ScanError};
use crate::utils::scan_debug_enabled;

/// Per-scan frequency table
#[derive(Debug, Default)]
struct Tally {
    counts: HashMap<String, usize>,
    max: usize,
}

impl Tally {
    fn add(&mut self, value: String) {
        let count = self.counts.entry(value).or_insert(0);
        *count += 1;
        self.max = self.max.max(*count);
    }

    fn most_active(&self) -> Vec<String> {
        let mut cookies: Vec<String> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == self.max)
            .map(|(value, _)| value.clone())
            .collect();
        cookies.sort();
        cookies
    }
}

/// Lines of a cookie log, split on `\n` and decoded one at a time so that a
/// line with invalid UTF-8 is reported on its own instead of ending the read.
struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<Result<String, RecordError>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(decode_line(&self.buf))),
            Err(err) => Some(Err(err)),
        }
    }
}

fn decode_line(bytes: &[u8]) -> Result<String, RecordError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| RecordError::InvalidEncoding {
        line: String::from_utf8_lossy(bytes).trim().to_string(),
    })
}

/// Find the most active cookies of `target` in a buffered cookie log.
pub(crate) fn find_most_active<R: BufRead>(
    reader: R,
    target: &TargetDay,
) -> Result<ScanReport, ScanError> {
    let lines = LogLines {
        reader,
        buf: Vec::new(),
    };
    scan_decoded(lines, target)
}

/// Scan raw log lines in order. Only a failing line read aborts the scan;
/// unusable lines are recorded in the report and skipped.
#[allow(dead_code)]
pub(crate) fn scan_lines<I, S>(lines: I, target: &TargetDay) -> Result<ScanReport, ScanError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    scan_decoded(lines.into_iter().map(|line| line.map(Ok)), target)
}

fn scan_decoded<I, S>(lines: I, target: &TargetDay) -> Result<ScanReport, ScanError>
where
    I: IntoIterator<Item = io::Result<Result<S, RecordError>>>,
    S: AsRef<str>,
{
    let mut tally = Tally::default();
    let mut report = ScanReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ScanError::ReadFailure { line_no, source })?;
        report.lines_read = line_no;

        let line = match line {
            Ok(line) => line,
            Err(reason) => {
                skip_line(&mut report, line_no, reason);
                continue;
            }
        };
        let line = line.as_ref().trim();
        if line.is_empty() || line == FILE_HEADER {
            continue;
        }

        let record = match parse_record(line, target.timezone()) {
            Ok(record) => record,
            Err(reason) => {
                skip_line(&mut report, line_no, reason);
                continue;
            }
        };

        // Input is sorted newest first: nothing after this can match
        if target.starts_after(&record.timestamp) {
            report.stopped_early = true;
            break;
        }

        if target.contains(&record.timestamp) {
            tally.add(record.value);
        }
    }

    report.cookies = tally.most_active();
    report.max_count = tally.max;
    report.counts = tally.counts;
    Ok(report)
}

fn skip_line(report: &mut ScanReport, line_no: usize, reason: RecordError) {
    if scan_debug_enabled() {
        eprintln!("Ignoring line {line_no}: {reason}");
    }
    report.skipped.push(SkippedLine { line_no, reason });
}
