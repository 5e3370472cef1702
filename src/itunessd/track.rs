//! Track records and the track section (`shth` + `shtr`)

use super::context::BuildContext;
use super::error::EncodeError;
use super::record::Record;
use super::section::{begin_section, Section};
use super::strings::{encode_device_path, label_dbid};
use super::types::{FileType, TRACK, TRACK_HEADER, TRACK_LEN};
use crate::model::Track;
use crate::voiceover::{PromptKind, VoicePrompt};
use std::path::Path;

/// Encode the track record for one audio file
///
/// Resolves the file's artist and album against the context's tables and
/// requests its voice-over prompt.
pub fn encode_track(ctx: &mut BuildContext, path: &Path) -> Result<Vec<u8>, EncodeError> {
    let root = ctx.library.device_root();
    let relative = path
        .strip_prefix(root)
        .map_err(|_| EncodeError::PathOutsideDevice {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    let device_path = encode_device_path(relative, path)?;

    let file_type = path
        .extension()
        .and_then(|e| e.to_str())
        .map(FileType::from_extension)
        .unwrap_or(FileType::Generic);

    let tags = ctx.tags.read_tags(path);
    if tags.is_none() {
        log::debug!("No tags for {:?}, using fallback labels", path);
    }
    let track = Track::new(path.to_path_buf(), tags);

    let artist_id = ctx.artists.resolve(track.artist_label());
    let album_id = ctx.albums.resolve(track.album_label());

    let label = track.voiceover_label();
    let dbid = label_dbid(&label);
    log::debug!(
        "Track {:?}: artist {} ({}), album {} ({}), {} ms",
        label,
        track.artist_label(),
        artist_id,
        track.album_label(),
        album_id,
        track.duration_ms
    );
    ctx.speak(VoicePrompt {
        label,
        dbid,
        kind: PromptKind::Track,
    });

    let mut record = Record::new(&TRACK);
    record
        .set("stop_at_pos_ms", track.duration_ms)?
        .set("filetype", file_type as u32)?
        .set("filename", device_path)?
        .set("albumid", album_id)?
        .set("artistid", artist_id)?
        .set("dbid", dbid)?;

    if let Some(number) = track.track_number.and_then(|n| u16::try_from(n).ok()) {
        record.set("track", number)?;
    }
    if let Some(disc) = track.disc_number.and_then(|n| u16::try_from(n).ok()) {
        record.set("disc", disc)?;
    }

    Ok(record.encode())
}

/// Build the track section for every track in the library, in order
///
/// `base` is the absolute offset the section will be written at.
pub fn build_track_section(ctx: &mut BuildContext, base: usize) -> Result<Section, EncodeError> {
    let library = ctx.library;
    let tracks = library.tracks();
    log::info!("Encoding {} tracks...", tracks.len());

    let lengths = vec![TRACK_LEN; tracks.len()];
    let mut section = begin_section(&TRACK_HEADER, "number_of_tracks", base, &lengths)?;

    for (i, path) in tracks.iter().enumerate() {
        log::info!("[{}/{}] Encoding: {:?}", i + 1, tracks.len(), path);
        let encoded = encode_track(ctx, path)?;
        debug_assert_eq!(encoded.len(), TRACK_LEN);
        section.bytes.extend_from_slice(&encoded);
    }

    log::info!(
        "Track section: {} bytes, {} artists, {} albums",
        section.bytes.len(),
        ctx.artists.len(),
        ctx.albums.len()
    );
    log::debug!("Artists: {:?}", ctx.artists.labels());
    log::debug!("Albums: {:?}", ctx.albums.labels());
    Ok(section)
}
