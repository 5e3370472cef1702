//! Playlist records and the playlist section (`shph` + `shpl`)

use super::context::BuildContext;
use super::error::EncodeError;
use super::record::Record;
use super::section::{begin_section, to_u32, Section};
use super::strings::label_dbid;
use super::types::{ListType, PLAYLIST, PLAYLIST_HEADER, PLAYLIST_LEN};
use crate::model::Playlist;
use crate::scan::read_playlist;
use crate::voiceover::{PromptKind, VoicePrompt};
use std::collections::HashMap;
use std::path::Path;

/// Encoded length of a playlist record with `songs` entries
pub fn playlist_len(songs: usize) -> usize {
    PLAYLIST_LEN + 4 * songs
}

/// Parse a playlist file and resolve its entries to track positions
///
/// Entries that are not in the track list are dropped. An unreadable file
/// yields an empty playlist.
pub fn resolve_playlist(
    ctx: &BuildContext,
    path: &Path,
    positions: &HashMap<&Path, u32>,
) -> Result<Playlist, EncodeError> {
    let root = ctx.library.device_root();
    if !path.starts_with(root) {
        return Err(EncodeError::PathOutsideDevice {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }

    let mut playlist = Playlist::from_file(path.to_path_buf());
    let entries = match read_playlist(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping unreadable playlist {:?}: {:#}", path, e);
            Vec::new()
        }
    };

    for entry in &entries {
        match positions.get(entry.as_path()) {
            Some(position) => playlist.add_track(*position),
            None => log::debug!("Track not found for path: {:?}", entry),
        }
    }

    log::debug!(
        "Playlist '{}': {} of {} entries resolved",
        playlist.name,
        playlist.len(),
        entries.len()
    );
    Ok(playlist)
}

/// Encode one playlist record followed by its track indices
pub fn encode_playlist(ctx: &BuildContext, playlist: &Playlist) -> Result<Vec<u8>, EncodeError> {
    let songs = to_u32(PLAYLIST.name, playlist.len())?;
    let dbid = label_dbid(&playlist.name);
    let list_type = if playlist.is_master() {
        ListType::Master
    } else {
        ListType::Normal
    };

    ctx.speak(VoicePrompt {
        label: playlist.name.clone(),
        dbid,
        kind: PromptKind::Playlist,
    });

    let mut record = Record::new(&PLAYLIST);
    record
        .set("total_length", to_u32(PLAYLIST.name, playlist_len(playlist.len()))?)?
        .set("number_of_songs", songs)?
        .set("number_of_nonaudio", songs)?
        .set("dbid", dbid)?
        .set("listtype", list_type as u32)?;

    let mut bytes = record.encode();
    for position in &playlist.entries {
        bytes.extend_from_slice(&position.to_le_bytes());
    }
    Ok(bytes)
}

/// Collect the playlists that go into the database
///
/// The master playlist always comes first. Playlist files that resolve to
/// no tracks are left out.
pub fn collect_playlists(ctx: &BuildContext) -> Result<Vec<Playlist>, EncodeError> {
    let library = ctx.library;
    let positions = library.track_positions();

    let mut playlists = vec![Playlist::master(to_u32(
        PLAYLIST.name,
        library.track_count(),
    )?)];

    for path in library.playlists() {
        let playlist = resolve_playlist(ctx, path, &positions)?;
        if playlist.is_empty() {
            log::info!("Skipping empty playlist: {}", playlist.name);
            continue;
        }
        playlists.push(playlist);
    }

    Ok(playlists)
}

/// Build the playlist section at absolute offset `base`
pub fn build_playlist_section(ctx: &mut BuildContext, base: usize) -> Result<Section, EncodeError> {
    let playlists = collect_playlists(ctx)?;
    log::info!("Encoding {} playlists...", playlists.len());

    let lengths: Vec<usize> = playlists.iter().map(|p| playlist_len(p.len())).collect();
    let mut section = begin_section(&PLAYLIST_HEADER, "number_of_playlists", base, &lengths)?;

    for (playlist, expected_len) in playlists.iter().zip(&lengths) {
        log::debug!("Encoding playlist '{}' ({} songs)", playlist.name, playlist.len());
        let encoded = encode_playlist(ctx, playlist)?;
        debug_assert_eq!(encoded.len(), *expected_len);
        section.bytes.extend_from_slice(&encoded);
    }

    log::info!("Playlist section: {} bytes", section.bytes.len());
    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itunessd::context::testing::*;
    use crate::itunessd::context::BuildOptions;
    use crate::model::{AudioTags, Library};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    /// Library rooted in a temp dir, with playlist files written to disk
    fn disk_library(root: &Path, tracks: &[&str], lists: &[(&str, &str)]) -> Library {
        let mut library = Library::new(root.to_path_buf());
        for rel in tracks {
            library.add_track(root.join(rel));
        }
        for (rel, content) in lists {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            library.add_playlist(path);
        }
        library
    }

    #[test]
    fn test_master_playlist_record() {
        let library = library(&["a.mp3", "b.mp3", "c.mp3"]);
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let encoded = encode_playlist(&ctx, &Playlist::master(3)).unwrap();

        assert_eq!(encoded.len(), 44 + 3 * 4);
        assert_eq!(&encoded[0..4], b"lphs");
        assert_eq!(u32_at(&encoded, 4), 56);
        assert_eq!(u32_at(&encoded, 8), 3);
        assert_eq!(u32_at(&encoded, 12), 3);
        assert_eq!(&encoded[16..24], &label_dbid("masterlist"));
        assert_eq!(u32_at(&encoded, 24), 1);
        assert_eq!(u32_at(&encoded, 44), 0);
        assert_eq!(u32_at(&encoded, 48), 1);
        assert_eq!(u32_at(&encoded, 52), 2);

        let prompts = voice.prompts.borrow();
        assert_eq!(prompts[0].label, "masterlist");
        assert_eq!(prompts[0].kind, PromptKind::Playlist);
    }

    #[test]
    fn test_unresolved_entry_is_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let library = disk_library(
            root,
            &["Music/a.mp3", "Music/b.mp3"],
            &[("Lists/mix.m3u", "#EXTM3U\n../Music/b.mp3\n../Music/missing.mp3\n../Music/a.mp3\n")],
        );
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let positions = library.track_positions();
        let playlist = resolve_playlist(&ctx, &library.playlists()[0], &positions).unwrap();
        assert_eq!(playlist.name, "mix");
        assert_eq!(playlist.entries, vec![1, 0]);

        let encoded = encode_playlist(&ctx, &playlist).unwrap();
        assert_eq!(encoded.len(), 44 + 4 * 2);
        assert_eq!(u32_at(&encoded, 8), 2);
        assert_eq!(u32_at(&encoded, 24), 2);
    }

    #[test]
    fn test_pls_playlist_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let library = disk_library(
            root,
            &["a.mp3", "b.mp3", "c.mp3"],
            &[("list.pls", "[playlist]\nFile2=a.mp3\nFile1=c.mp3\nNumberOfEntries=2\n")],
        );
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let playlists = collect_playlists(&ctx).unwrap();
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].entries, vec![0, 1, 2]);
        assert_eq!(playlists[1].entries, vec![2, 0]);
    }

    #[test]
    fn test_empty_playlists_are_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let library = disk_library(
            root,
            &["a.mp3"],
            &[
                ("empty.m3u", "#EXTM3U\nnowhere.mp3\n"),
                ("full.m3u", "a.mp3\n"),
            ],
        );
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let mut ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let section = build_playlist_section(&mut ctx, 1000).unwrap();

        assert_eq!(section.count, 2);
        assert_eq!(u32_at(&section.bytes, 8), 2);
        // Only emitted playlists get a voice-over
        let labels: Vec<String> = voice.prompts.borrow().iter().map(|p| p.label.clone()).collect();
        assert_eq!(labels, vec!["masterlist", "full"]);
    }

    #[test]
    fn test_unreadable_playlist_is_not_fatal() {
        let mut library = library(&["a.mp3"]);
        library.add_playlist(device_path("Lists/gone.m3u"));
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let playlists = collect_playlists(&ctx).unwrap();
        assert_eq!(playlists.len(), 1);
        assert!(playlists[0].is_master());
    }

    #[test]
    fn test_playlist_outside_device_is_fatal() {
        let mut library = library(&[]);
        library.add_playlist(PathBuf::from("/elsewhere/list.m3u"));
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        assert!(matches!(
            collect_playlists(&ctx),
            Err(EncodeError::PathOutsideDevice { .. })
        ));
    }

    #[test]
    fn test_playlist_section_offsets() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let library = disk_library(
            root,
            &["a.mp3", "b.mp3"],
            &[("one.m3u", "b.mp3\n")],
        );
        let tags: HashMap<PathBuf, AudioTags> = HashMap::new();
        let voice = RecordingSynthesizer::default();
        let mut ctx = BuildContext::new(&library, &tags, &voice, BuildOptions::default());

        let base = 500;
        let section = build_playlist_section(&mut ctx, base).unwrap();

        assert_eq!(&section.bytes[0..4], b"hphs");
        assert_eq!(u32_at(&section.bytes, 4), 20 + 2 * 4);
        assert_eq!(section.bytes.len(), 28 + playlist_len(2) + playlist_len(1));

        let first = u32_at(&section.bytes, 20) as usize - base;
        let second = u32_at(&section.bytes, 24) as usize - base;
        assert_eq!(first, 28);
        assert_eq!(second, 28 + playlist_len(2));
        assert_eq!(&section.bytes[second..second + 4], b"lphs");
        assert_eq!(u32_at(&section.bytes, second + 24), 2);
        assert_eq!(u32_at(&section.bytes, second + 44), 1);
    }
}
