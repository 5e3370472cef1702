//! Encoding errors
//!
//! Everything in here aborts the whole conversion. Recoverable conditions
//! (missing tags, failed speech synthesis, unresolved playlist entries)
//! never surface as an `EncodeError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{path:?} is not inside the device root {root:?}")]
    PathOutsideDevice { path: PathBuf, root: PathBuf },

    #[error("{path:?} contains {character:?}, which the device code page cannot represent")]
    PathEncoding { path: PathBuf, character: char },

    #[error("device path {path:?} is {len} bytes long (at most {max} fit the filename slot)")]
    PathTooLong { path: PathBuf, len: usize, max: usize },

    #[error("record {record} has no field named {field}")]
    UnknownField {
        record: &'static str,
        field: &'static str,
    },

    #[error("field {record}.{field} is {expected} bytes wide, got a {actual}-byte value")]
    FieldWidth {
        record: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field {record}.{field} cannot hold a value of this kind")]
    FieldKind {
        record: &'static str,
        field: &'static str,
    },

    #[error("{section} is {len} bytes long, which does not fit a 32-bit offset")]
    SectionTooLarge { section: &'static str, len: usize },
}
