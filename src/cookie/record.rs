//! Single-line cookie record parser

use chrono::{DateTime, FixedOffset, Utc};

use crate::cookie::types::Record;
use crate::error::RecordError;
use crate::utils::Timezone;

/// Byte offset of the date/time separator in an RFC 3339 timestamp
const SEPARATOR_OFFSET: usize = 10;

/// Parse `<cookie>,<timestamp>` into a record whose timestamp is expressed in `timezone`.
pub(crate) fn parse_record(line: &str, timezone: Timezone) -> Result<Record, RecordError> {
    let mut fields = line.split(',');
    let (Some(value), Some(raw_ts), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed(line));
    };
    if value.is_empty() || raw_ts.is_empty() {
        return Err(malformed(line));
    }

    let timestamp = parse_timestamp(raw_ts)?;
    Ok(Record {
        value: value.to_string(),
        timestamp: timezone.to_fixed_offset(timestamp.with_timezone(&Utc)),
    })
}

/// Strict RFC 3339: chrono also accepts a space between date and time, we don't.
fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, RecordError> {
    if raw.as_bytes().get(SEPARATOR_OFFSET) != Some(&b'T') {
        return Err(RecordError::InvalidTimestamp {
            input: raw.to_string(),
            reason: "expected `T` between date and time".to_string(),
        });
    }
    DateTime::parse_from_rfc3339(raw).map_err(|err| RecordError::InvalidTimestamp {
        input: raw.to_string(),
        reason: err.to_string(),
    })
}

fn malformed(line: &str) -> RecordError {
    RecordError::MalformedRecord {
        line: line.to_string(),
    }
}
