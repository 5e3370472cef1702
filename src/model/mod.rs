//! Data model shared by the scanner and the database encoder
//!
//! These types describe what was found on the device; they know nothing
//! about the binary layout of the iTunesSD file.

mod library;
mod playlist;
mod track;

pub use library::Library;
pub use playlist::{Playlist, PlaylistSource};
pub use track::{AudioTags, Track, UNKNOWN_LABEL};
