//! Whole-database assembly (`shdb` header + track section + playlist section)

use super::context::BuildContext;
use super::error::EncodeError;
use super::playlist::build_playlist_section;
use super::record::Record;
use super::section::to_u32;
use super::track::build_track_section;
use super::types::{DATABASE, DATABASE_LEN};

/// A fully encoded iTunesSD image
#[derive(Debug, Clone)]
pub struct Database {
    pub bytes: Vec<u8>,
    pub track_count: u32,
    pub playlist_count: u32,
}

/// Encode the library held by `ctx` into a complete iTunesSD image
///
/// Nothing is written to disk here; the caller decides what to do with the
/// bytes once the whole image has been built.
pub fn build_database(ctx: &mut BuildContext) -> Result<Database, EncodeError> {
    let track_header_offset = DATABASE_LEN;
    let tracks = build_track_section(ctx, track_header_offset)?;

    let playlist_header_offset = track_header_offset + tracks.bytes.len();
    let playlists = build_playlist_section(ctx, playlist_header_offset)?;

    let mut header = Record::new(&DATABASE);
    header
        .set("total_number_of_tracks", tracks.count)?
        .set("total_tracks_without_podcasts", tracks.count)?
        .set("total_number_of_playlists", playlists.count)?
        .set("voiceover_enabled", u8::from(ctx.options.track_voiceover))?
        .set("track_header_offset", to_u32(DATABASE.name, track_header_offset)?)?
        .set(
            "playlist_header_offset",
            to_u32(DATABASE.name, playlist_header_offset)?,
        )?;

    let mut bytes = Vec::with_capacity(DATABASE_LEN + tracks.bytes.len() + playlists.bytes.len());
    bytes.extend_from_slice(&header.encode());
    bytes.extend_from_slice(&tracks.bytes);
    bytes.extend_from_slice(&playlists.bytes);

    log::info!(
        "Database: {} bytes, {} tracks, {} playlists",
        bytes.len(),
        tracks.count,
        playlists.count
    );

    Ok(Database {
        bytes,
        track_count: tracks.count,
        playlist_count: playlists.count,
    })
}
