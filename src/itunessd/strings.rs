//! Device path encoding and label identifiers

use super::error::EncodeError;
use super::types::FILENAME_LEN;
use std::path::{Component, Path};

/// Encode a device-relative path for the track `filename` slot
///
/// The firmware expects `/`-separated paths with a leading `/`, one byte
/// per character in ISO-8859-1. The slot keeps room for a terminating NUL.
///
/// `source` is only used to name the file in errors.
pub fn encode_device_path(relative: &Path, source: &Path) -> Result<Vec<u8>, EncodeError> {
    let mut text = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            text.push('/');
            text.push_str(&part.to_string_lossy());
        }
    }

    let mut encoded = Vec::with_capacity(text.len());
    for character in text.chars() {
        let byte = u8::try_from(u32::from(character)).map_err(|_| EncodeError::PathEncoding {
            path: source.to_path_buf(),
            character,
        })?;
        encoded.push(byte);
    }

    let max = FILENAME_LEN - 1;
    if encoded.len() > max {
        return Err(EncodeError::PathTooLong {
            path: source.to_path_buf(),
            len: encoded.len(),
            max,
        });
    }

    Ok(encoded)
}

/// Derive the 8-byte database ID of a track or playlist from its spoken label
///
/// First eight bytes of the MD5 digest of the label's UTF-8 bytes.
pub fn label_dbid(label: &str) -> [u8; 8] {
    let digest = md5::compute(label.as_bytes());
    let mut dbid = [0u8; 8];
    dbid.copy_from_slice(&digest.0[..8]);
    dbid
}
