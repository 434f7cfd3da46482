pub mod errors;
pub mod gps;
pub mod model;
pub mod sheet;
pub mod tags;
pub mod timestamp;
pub mod walk;

pub use errors::{MetadataError, ScanError, SheetError, TimestampError};
pub use gps::decimal_coordinates;
pub use model::{GeoPoint, ImageRecord, RawPositionMap, RawTagMap};
pub use sheet::write_sheet;
pub use tags::{ascii_tag, read_exif, split_tag_maps};
pub use timestamp::normalize_timestamp;
pub use walk::{scan_directory, ScanOutcome};
