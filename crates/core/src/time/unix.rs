use chrono::{DateTime, Local, Utc};
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    Parse { input: String, source: ParseIntError },
    OutOfRange(i64),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Parse { input, source } => {
                write!(f, "invalid unix timestamp {input:?}: {source}")
            }
            TimestampError::OutOfRange(v) => write!(f, "unix timestamp out of range: {v}"),
        }
    }
}

impl std::error::Error for TimestampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimestampError::Parse { source, .. } => Some(source),
            TimestampError::OutOfRange(_) => None,
        }
    }
}

/// Parses a base-10 count of seconds since the Unix epoch into local time.
pub fn parse_unix_seconds(s: &str) -> Result<DateTime<Local>, TimestampError> {
    let secs = s.parse::<i64>().map_err(|source| TimestampError::Parse {
        input: s.to_string(),
        source,
    })?;
    from_unix_seconds(secs)
}

pub fn from_unix_seconds(secs: i64) -> Result<DateTime<Local>, TimestampError> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local))
        .ok_or(TimestampError::OutOfRange(secs))
}

pub fn from_unix_millis(millis: i64) -> Result<DateTime<Local>, TimestampError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local))
        .ok_or(TimestampError::OutOfRange(millis))
}

/// Renders seconds as local time, or `-` (logged) when unrepresentable.
pub fn format_local(secs: i64) -> String {
    match from_unix_seconds(secs) {
        Ok(dt) => dt.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "cannot render timestamp");
            "-".to_string()
        }
    }
}

pub fn format_local_millis(millis: i64) -> String {
    match from_unix_millis(millis) {
        Ok(dt) => dt.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "cannot render timestamp");
            "-".to_string()
        }
    }
}
