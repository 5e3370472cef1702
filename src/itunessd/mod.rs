//! iTunesSD database encoding
//!
//! The shuffle reads a single little-endian file made of a `shdb` header,
//! a track section (`shth` header, offset table, `shtr` records) and a
//! playlist section (`shph` header, offset table, `shpl` records). Every
//! record type is described by a static [`Schema`](record::Schema).

pub mod context;
pub mod database;
pub mod dedup;
pub mod error;
pub mod playlist;
pub mod record;
pub mod section;
pub mod strings;
pub mod track;
pub mod types;

pub use context::{BuildContext, BuildOptions};
pub use database::{build_database, Database};
pub use error::EncodeError;
