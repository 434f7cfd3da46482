use std::collections::HashMap;

use serde::Serialize;

/// Primary-IFD tags keyed by the decoder's human-readable tag name
/// ("DateTime", "Model", ...). GPS tags are kept apart in [`RawPositionMap`].
pub type RawTagMap = HashMap<String, exif::Value>;

pub type RawPositionMap = HashMap<String, exif::Value>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

// Field order is the column order of the output sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRecord {
    pub filename: String,
    pub path: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<String>,
    pub device: Option<String>,
}
