//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Convert epoch seconds into datetime.
///
/// Returns `None` if the timestamp is out of range.
pub fn from_timestamp(secs: i64) -> Option<DateTime> {
    DateTime::from_timestamp(secs, 0)
}

/// Format time into RFC 3339: `2023-11-14T22:13:20Z`
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
