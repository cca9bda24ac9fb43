//! Log line assembly: timestamp plus cleaned values.

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::cleanup::FieldCleanup;
use crate::extract::ExtractedRecord;

/// Timestamp layout: space-separated date and time, microsecond precision,
/// no timezone suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Assemble one log line: `<timestamp>, <v1>, <v2>, ..., `.
///
/// Every element, the last value included, is followed by `", "`. The
/// caller supplies `now` so the line content stays deterministic in tests.
pub fn format_log_line<Tz: TimeZone>(
    now: DateTime<Tz>,
    record: &ExtractedRecord,
    cleanup: FieldCleanup,
) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut line = now.format(TIMESTAMP_FORMAT).to_string();
    line.push_str(", ");
    for value in record.values() {
        line.push_str(&cleanup.apply(value));
        line.push_str(", ");
    }
    line
}
