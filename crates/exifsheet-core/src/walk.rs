use std::path::Path;

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::errors::{MetadataError, ScanError};
use crate::gps::decimal_coordinates;
use crate::model::{ImageRecord, RawPositionMap, RawTagMap};
use crate::tags::{ascii_tag, read_exif, split_tag_maps};
use crate::timestamp::normalize_timestamp;

/// The result of one directory scan: records in visitation order, plus the
/// number of eligible files that had to be skipped.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<ImageRecord>,
    pub skipped: usize,
}

pub(crate) fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

/// Recursively scans `root` for JPEG files and builds one record per image.
///
/// Every per-file failure is contained to that file: it is logged, counted
/// as skipped, and the walk continues. Traversal order is whatever the
/// filesystem enumeration yields; it is not guaranteed sorted.
pub fn scan_directory(root: &Path, zone: Tz) -> Result<ScanOutcome, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    let pattern = root.join("**/*");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| ScanError::NonUtf8Root(root.to_path_buf()))?;

    let mut outcome = ScanOutcome::default();

    for entry in glob::glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("could not read path during walk: {err}");
                // only count it against the summary if it was an eligible file
                if has_jpeg_extension(err.path()) {
                    outcome.skipped += 1;
                }
                continue;
            }
        };

        if !path.is_file() || !has_jpeg_extension(&path) {
            continue;
        }

        match process_image(&path, zone) {
            Ok(record) => outcome.records.push(record),
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Extracts one record from a single image file. An unreadable file is an
/// error (the caller excludes it); an image without EXIF yields a record
/// whose metadata fields are all absent.
fn process_image(path: &Path, zone: Tz) -> Result<ImageRecord, MetadataError> {
    let (tags, position) = match read_exif(path)? {
        Some(parsed) => split_tag_maps(&parsed),
        None => {
            debug!("no EXIF metadata in {}", path.display());
            (RawTagMap::new(), RawPositionMap::new())
        }
    };

    let coordinate = decimal_coordinates(&position);

    let date = ascii_tag(&tags, "DateTime").and_then(|raw| {
        match normalize_timestamp(&raw, zone) {
            Ok(normalized) => Some(normalized),
            Err(err) => {
                warn!("{}: {err}", path.display());
                None
            }
        }
    });

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageRecord {
        filename,
        path: path.to_string_lossy().into_owned(),
        latitude: coordinate.map(|point| point.latitude),
        longitude: coordinate.map(|point| point.longitude),
        date,
        device: ascii_tag(&tags, "Model"),
    })
}
