use exif::Value;

use crate::model::{GeoPoint, RawPositionMap};

/// Resolves a GPS sub-block into signed decimal degrees.
///
/// Requires both coordinate triples and both hemisphere references; any
/// missing or malformed piece makes the whole coordinate absent. Absence
/// is silent (not a logged condition).
pub fn decimal_coordinates(position: &RawPositionMap) -> Option<GeoPoint> {
    let latitude = resolve_axis(position, "GPSLatitude", "GPSLatitudeRef", 'N')?;
    let longitude = resolve_axis(position, "GPSLongitude", "GPSLongitudeRef", 'E')?;
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

fn resolve_axis(
    position: &RawPositionMap,
    value_tag: &str,
    ref_tag: &str,
    positive: char,
) -> Option<f64> {
    let degrees = dms_to_degrees(position.get(value_tag)?)?;
    let hemisphere = hemisphere(position.get(ref_tag)?)?;
    if hemisphere == positive {
        Some(degrees)
    } else {
        Some(-degrees)
    }
}

/// `degrees + minutes/60 + seconds/3600` over a three-rational triple.
fn dms_to_degrees(value: &Value) -> Option<f64> {
    let Value::Rational(parts) = value else {
        return None;
    };
    if parts.len() != 3 {
        return None;
    }
    let decimal = parts[0].to_f64() + parts[1].to_f64() / 60.0 + parts[2].to_f64() / 3600.0;
    // zero-denominator rationals come out non-finite
    decimal.is_finite().then_some(decimal)
}

fn hemisphere(value: &Value) -> Option<char> {
    let Value::Ascii(lines) = value else {
        return None;
    };
    lines.first()?.first().map(|byte| *byte as char)
}
