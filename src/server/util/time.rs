//! Time calculations shared by services and scheduled jobs.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::server::error::Error;

/// Timestamp `days` days before `now`; entries strictly older than it are past retention.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - The retention cutoff in UTC
/// - `Err(Error::ParseError)` - `days` reaches before the earliest representable date
pub fn retention_cutoff(now: DateTime<Utc>, days: u32) -> Result<NaiveDateTime, Error> {
    let cutoff = now
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            Error::ParseError(format!("Retention of {} days is out of range", days))
        })?;

    Ok(cutoff.naive_utc())
}
