//! Date parsing for front-matter values

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a front-matter date string in various formats.
///
/// Date-only values are pinned to 12:00:00 UTC. Midnight sits on the
/// boundary between two calendar days, and a display layer formatting in a
/// local timezone could shift the date shown to readers; noon cannot.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(12, 0, 0)?;
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    // Try RFC 3339 / ISO 8601 with explicit offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    None
}
