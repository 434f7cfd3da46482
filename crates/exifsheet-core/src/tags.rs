use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Context, Exif, In, Value};

use crate::errors::MetadataError;
use crate::model::{RawPositionMap, RawTagMap};

/// Opens an image file and reads its EXIF block.
///
/// Three outcomes: `Ok(Some(_))` for a container carrying EXIF data,
/// `Ok(None)` for a valid container with no EXIF at all, and `Err(_)` when
/// the file cannot be opened or is not a readable image container.
pub fn read_exif(path: &Path) -> Result<Option<Exif>, MetadataError> {
    let file = File::open(path).map_err(|source| MetadataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(exif::Error::NotFound(_)) => Ok(None),
        Err(source) => Err(MetadataError::Container {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Splits a parsed EXIF block into the general tag map and the GPS
/// sub-block map, resolving numeric tag ids to names via the decoder's
/// static tag table. Thumbnail-IFD fields are ignored. This step itself
/// cannot fail.
pub fn split_tag_maps(parsed: &Exif) -> (RawTagMap, RawPositionMap) {
    let mut tags = RawTagMap::new();
    let mut position = RawPositionMap::new();

    for field in parsed.fields() {
        if field.ifd_num != In::PRIMARY {
            continue;
        }
        let name = field.tag.to_string();
        if field.tag.context() == Context::Gps {
            position.insert(name, field.value.clone());
        } else {
            tags.insert(name, field.value.clone());
        }
    }

    (tags, position)
}

/// Looks up an ASCII-typed tag and returns it as a trimmed string.
/// Non-ASCII values and absent tags both yield `None`.
pub fn ascii_tag(tags: &RawTagMap, name: &str) -> Option<String> {
    match tags.get(name)? {
        Value::Ascii(lines) => lines
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}
