//! Section layout: header + offset table + concatenated records
//!
//! Record lengths are known before any record is encoded, so the offset
//! table is a running sum over them starting right after the table.

use super::error::EncodeError;
use super::record::{Record, Schema};

/// An encoded section and the number of records in it
#[derive(Debug, Clone)]
pub struct Section {
    pub bytes: Vec<u8>,
    pub count: u32,
}

/// Convert a length or offset to the on-disk u32
pub fn to_u32(section: &'static str, value: usize) -> Result<u32, EncodeError> {
    u32::try_from(value).map_err(|_| EncodeError::SectionTooLarge { section, len: value })
}

/// Absolute offsets of records placed after a header and offset table
pub fn record_offsets(
    section: &'static str,
    base: usize,
    header_len: usize,
    lengths: &[usize],
) -> Result<Vec<u32>, EncodeError> {
    let first = base + header_len + 4 * lengths.len();
    lengths
        .iter()
        .scan(first, |next, len| {
            let offset = *next;
            *next += len;
            Some(offset)
        })
        .map(|offset| to_u32(section, offset))
        .collect()
}

/// Start a section: encoded header followed by its offset table
///
/// The header's `total_length` covers the header plus the offset table and
/// `count_field` receives the number of records. The caller appends the
/// records, in the order of `lengths`, to the returned buffer.
pub fn begin_section(
    schema: &'static Schema,
    count_field: &'static str,
    base: usize,
    lengths: &[usize],
) -> Result<Section, EncodeError> {
    let header_len = schema.encoded_len();
    let offsets = record_offsets(schema.name, base, header_len, lengths)?;
    let count = to_u32(schema.name, lengths.len())?;

    let mut header = Record::new(schema);
    header
        .set("total_length", to_u32(schema.name, header_len + 4 * lengths.len())?)?
        .set(count_field, count)?;

    let body_len: usize = lengths.iter().sum();
    let mut bytes = Vec::with_capacity(header_len + 4 * lengths.len() + body_len);
    bytes.extend_from_slice(&header.encode());
    for offset in offsets {
        bytes.extend_from_slice(&offset.to_le_bytes());
    }

    Ok(Section { bytes, count })
}
