//! Millisecond timestamps carried in `tmi-sent-ts`.

use chrono::{DateTime, Utc};

/// Parse a decimal count of milliseconds since the Unix epoch.
///
/// Empty, non-numeric or out-of-range input yields the Unix epoch itself,
/// which [`is_unset_time`] recognises.
///
/// ```
/// use tmi_proto::fields::{is_unset_time, parse_timestamp};
///
/// let ts = parse_timestamp("1490382457309");
/// assert_eq!(ts.timestamp_millis(), 1490382457309);
/// assert!(is_unset_time(&parse_timestamp("")));
/// ```
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Whether a timestamp is the sentinel produced for a missing tag.
pub fn is_unset_time(time: &DateTime<Utc>) -> bool {
    *time == DateTime::UNIX_EPOCH
}
