use chrono::{DateTime, NaiveDate, Utc};

/// UTC calendar day of a unix-seconds timestamp. Out-of-range inputs fall
/// back to the epoch day rather than panicking.
pub fn day_of_unix(secs: u64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp(secs as i64, 0)
        .map(|moment| moment.date_naive())
        .unwrap_or_default()
}

/// Millisecond-resolution unix timestamp, clamped at zero.
pub fn unix_millis(moment: DateTime<Utc>) -> u64 {
    moment.timestamp_millis().max(0) as u64
}
