//! Fixed-layout record encoder
//!
//! A record type is a static [`Schema`]: an ordered list of typed fields,
//! each with a default. A [`Record`] pairs a schema with a sparse map of
//! assigned values; encoding walks the schema and writes every field,
//! falling back to the default for anything left unassigned.

use super::error::EncodeError;
use std::collections::HashMap;

/// Encoding of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    /// Fixed-length byte block, zero-padded on the right
    Bytes(usize),
    /// Four characters read as a big-endian u32, stored little-endian
    Tag([u8; 4]),
}

impl FieldKind {
    /// Encoded width in bytes
    pub const fn width(&self) -> usize {
        match *self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 | FieldKind::Tag(_) => 4,
            FieldKind::U64 => 8,
            FieldKind::Bytes(len) => len,
        }
    }
}

/// A named field descriptor with its default value
///
/// Integer defaults live in `default`; byte blocks always default to zeros
/// and tags carry their value inside the kind.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: u64,
}

impl Field {
    pub const fn tag(name: &'static str, tag: &[u8; 4]) -> Self {
        Self { name, kind: FieldKind::Tag(*tag), default: 0 }
    }

    pub const fn u8(name: &'static str, default: u8) -> Self {
        Self { name, kind: FieldKind::U8, default: default as u64 }
    }

    pub const fn u16(name: &'static str, default: u16) -> Self {
        Self { name, kind: FieldKind::U16, default: default as u64 }
    }

    pub const fn u32(name: &'static str, default: u32) -> Self {
        Self { name, kind: FieldKind::U32, default: default as u64 }
    }

    pub const fn u64(name: &'static str, default: u64) -> Self {
        Self { name, kind: FieldKind::U64, default }
    }

    pub const fn bytes(name: &'static str, len: usize) -> Self {
        Self { name, kind: FieldKind::Bytes(len), default: 0 }
    }
}

/// Static description of a record type
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Total encoded length, usable in const context
    pub const fn encoded_len(&self) -> usize {
        let mut len = 0;
        let mut i = 0;
        while i < self.fields.len() {
            len += self.fields[i].kind.width();
            i += 1;
        }
        len
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A value assigned to a field
///
/// Integers remember the width of the Rust type they came from, so a `u32`
/// can only be assigned to a 32-bit field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int { value: u64, width: usize },
    Bytes(Vec<u8>),
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int { value: value.into(), width: 1 }
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int { value: value.into(), width: 2 }
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int { value: value.into(), width: 4 }
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int { value, width: 8 }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<[u8; 8]> for Value {
    fn from(bytes: [u8; 8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

/// A record instance: schema plus assigned values
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static Schema,
    values: HashMap<&'static str, Value>,
}

impl Record {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: HashMap::new(),
        }
    }

    /// Assign a field, checking it against the declared kind and width
    pub fn set(
        &mut self,
        name: &'static str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, EncodeError> {
        let record = self.schema.name;
        let field = self
            .schema
            .field(name)
            .ok_or(EncodeError::UnknownField { record, field: name })?;
        let value = value.into();

        match (field.kind, &value) {
            (FieldKind::Tag(_), _) => {
                return Err(EncodeError::FieldKind { record, field: name });
            }
            (FieldKind::Bytes(len), Value::Bytes(bytes)) => {
                if bytes.len() > len {
                    return Err(EncodeError::FieldWidth {
                        record,
                        field: name,
                        expected: len,
                        actual: bytes.len(),
                    });
                }
            }
            (FieldKind::Bytes(_), Value::Int { .. }) | (_, Value::Bytes(_)) => {
                return Err(EncodeError::FieldKind { record, field: name });
            }
            (kind, Value::Int { width, .. }) => {
                if kind.width() != *width {
                    return Err(EncodeError::FieldWidth {
                        record,
                        field: name,
                        expected: kind.width(),
                        actual: *width,
                    });
                }
            }
        }

        self.values.insert(name, value);
        Ok(self)
    }

    /// Integer value of a field: assigned if present, otherwise the default
    #[cfg(test)]
    pub fn int(&self, name: &str) -> Option<u64> {
        let field = self.schema.field(name)?;
        match (field.kind, self.values.get(name)) {
            (FieldKind::Bytes(_), _) => None,
            (FieldKind::Tag(tag), _) => Some(u32::from_be_bytes(tag).into()),
            (_, Some(Value::Int { value, .. })) => Some(*value),
            _ => Some(field.default),
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.schema.encoded_len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());

        for field in self.schema.fields {
            match field.kind {
                FieldKind::Tag(tag) => {
                    out.extend_from_slice(&u32::from_be_bytes(tag).to_le_bytes());
                }
                FieldKind::Bytes(len) => {
                    let start = out.len();
                    if let Some(Value::Bytes(bytes)) = self.values.get(field.name) {
                        out.extend_from_slice(bytes);
                    }
                    out.resize(start + len, 0);
                }
                kind => {
                    let value = match self.values.get(field.name) {
                        Some(Value::Int { value, .. }) => *value,
                        _ => field.default,
                    };
                    // `set` guarantees the value fits the width
                    out.extend_from_slice(&value.to_le_bytes()[..kind.width()]);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Schema = Schema {
        name: "sample",
        fields: &[
            Field::tag("header_id", b"shdb"),
            Field::u8("flag", 1),
            Field::u16("short", 0xBEEF),
            Field::u32("long", 7),
            Field::u64("wide", 0),
            Field::bytes("name", 6),
        ],
    };

    #[test]
    fn test_defaults_only() {
        let encoded = Record::new(&SAMPLE).encode();

        assert_eq!(encoded.len(), 4 + 1 + 2 + 4 + 8 + 6);
        // Tag is big-endian "shdb" stored little-endian
        assert_eq!(&encoded[0..4], b"bdhs");
        assert_eq!(encoded[4], 1);
        assert_eq!(&encoded[5..7], &[0xEF, 0xBE]);
        assert_eq!(&encoded[7..11], &7u32.to_le_bytes());
        assert_eq!(&encoded[11..19], &[0u8; 8]);
        assert_eq!(&encoded[19..25], &[0u8; 6]);
    }

    #[test]
    fn test_assigned_values_override_defaults() {
        let mut record = Record::new(&SAMPLE);
        record
            .set("long", 0x0102_0304u32)
            .unwrap()
            .set("name", b"abc".to_vec())
            .unwrap();

        let encoded = record.encode();
        assert_eq!(&encoded[7..11], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&encoded[19..25], b"abc\0\0\0");
        assert_eq!(record.int("long"), Some(0x0102_0304));
        assert_eq!(record.int("short"), Some(0xBEEF));
    }

    #[test]
    fn test_encoded_len_matches_schema() {
        assert_eq!(SAMPLE.encoded_len(), 25);
        assert_eq!(Record::new(&SAMPLE).encoded_len(), 25);
    }

    #[test]
    fn test_integer_width_mismatch_rejected() {
        let mut record = Record::new(&SAMPLE);
        let err = record.set("short", 5u32).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::FieldWidth { expected: 2, actual: 4, .. }
        ));
    }

    #[test]
    fn test_oversized_bytes_rejected() {
        let mut record = Record::new(&SAMPLE);
        let err = record.set("name", b"too long".to_vec()).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::FieldWidth { expected: 6, actual: 8, .. }
        ));
    }

    #[test]
    fn test_kind_and_name_errors() {
        let mut record = Record::new(&SAMPLE);
        assert!(matches!(
            record.set("header_id", 1u32),
            Err(EncodeError::FieldKind { .. })
        ));
        assert!(matches!(
            record.set("name", 1u8),
            Err(EncodeError::FieldKind { .. })
        ));
        assert!(matches!(
            record.set("long", vec![0u8; 4]),
            Err(EncodeError::FieldKind { .. })
        ));
        assert!(matches!(
            record.set("missing", 1u8),
            Err(EncodeError::UnknownField { .. })
        ));
    }
}
