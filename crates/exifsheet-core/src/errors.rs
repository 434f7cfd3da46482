use std::path::PathBuf;

use chrono_tz::Tz;
use thiserror::Error;

/// Per-file failures that exclude the file from the output entirely.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable image container {path}: {source}")]
    Container {
        path: PathBuf,
        #[source]
        source: exif::Error,
    },
}

/// Timestamp normalization failures. Callers log these and degrade the
/// record's date to absent; they never abort a scan.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("invalid date/time string '{raw}': {source}")]
    Parse {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("local time '{raw}' is ambiguous in {zone} (DST overlap)")]
    AmbiguousLocal { raw: String, zone: Tz },

    #[error("local time '{raw}' does not exist in {zone} (DST gap)")]
    NonexistentLocal { raw: String, zone: Tz },
}

/// Failures that abort the whole scan before any file is processed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("scan root {0} is not valid UTF-8")]
    NonUtf8Root(PathBuf),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Spreadsheet serialization failures. These propagate out of the run.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
