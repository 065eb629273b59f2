//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the EdgeGrid timestamp: `20240315T08:30:00+0000`
///
/// Second precision with an explicit UTC offset.
pub fn format_edgegrid_timestamp(t: DateTime) -> String {
    t.format("%Y%m%dT%H:%M:%S%z").to_string()
}

/// Parse an EdgeGrid timestamp back into a UTC datetime.
pub fn parse_edgegrid_timestamp(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_str(s, "%Y%m%dT%H:%M:%S%z").map_err(|e| {
        Error::invalid_argument(format!("parse edgegrid timestamp {s} failed")).with_source(e)
    })?;
    Ok(t.with_timezone(&Utc))
}
