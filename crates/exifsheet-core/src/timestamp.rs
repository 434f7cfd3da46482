use chrono::offset::LocalResult;
use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::errors::TimestampError;

/// The fixed EXIF date/time layout.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Parses an EXIF `DateTime` string, interprets it as wall-clock time in
/// `zone`, and renders it as RFC 3339 with that zone's UTC offset.
///
/// Ambiguous or nonexistent local times (DST transitions) are rejected
/// rather than resolved with a guessed offset.
pub fn normalize_timestamp(raw: &str, zone: Tz) -> Result<String, TimestampError> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT).map_err(
        |source| TimestampError::Parse {
            raw: raw.to_string(),
            source,
        },
    )?;

    match zone.from_local_datetime(&naive) {
        LocalResult::Single(localized) => Ok(localized.to_rfc3339()),
        LocalResult::Ambiguous(_, _) => Err(TimestampError::AmbiguousLocal {
            raw: raw.to_string(),
            zone,
        }),
        LocalResult::None => Err(TimestampError::NonexistentLocal {
            raw: raw.to_string(),
            zone,
        }),
    }
}
