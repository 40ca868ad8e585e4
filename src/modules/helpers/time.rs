use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use snafu::prelude::*;

use crate::errors::{CustomResult, InvalidStartTimeSnafu};

/// the format controle times are exposed in, truncated to minutes
pub const CONTROLE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// # parse start time
/// parse the start time of a brevet. accepts rfc 3339, minute precision with an offset,
/// and timestamps without an offset which are read as UTC.
///
/// ## Arguments
/// * `value` - the raw start time
///
/// ## Returns
/// * `DateTime<FixedOffset>` - the start time, keeping the offset that was given
pub fn parse_start_time(value: &str) -> CustomResult<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    ensure!(!trimmed.is_empty(), InvalidStartTimeSnafu { value });

    if let Ok(start) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(start);
    }

    for format in OFFSET_FORMATS {
        if let Ok(start) = DateTime::parse_from_str(trimmed, format) {
            return Ok(start);
        }
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .context(InvalidStartTimeSnafu { value })?;

    let utc = FixedOffset::east_opt(0).context(InvalidStartTimeSnafu { value })?;
    Ok(utc.from_utc_datetime(&naive))
}

pub fn format_controle_time(time: &DateTime<FixedOffset>) -> String {
    time.format(CONTROLE_TIME_FORMAT).to_string()
}
