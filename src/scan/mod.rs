//! Device scanning
//!
//! Walks the device root for audio and playlist files, parses playlist
//! files and reads audio tags.

mod playlists;
mod tags;

pub use playlists::{parse_m3u, parse_pls, read_playlist};
pub use tags::{LoftyTagReader, TagReader};

use crate::model::Library;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Audio file extensions picked up as tracks
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "m4b", "m4p", "aa", "wav"];

/// Playlist file extensions
pub const PLAYLIST_EXTENSIONS: &[&str] = &["pls", "m3u"];

/// Scan `scan_dir` into an ordered library rooted at `device_root`
///
/// `scan_dir` is the device root itself or a directory below it. Hidden
/// directories and anything under `excluded` are skipped. Both lists are
/// sorted case-insensitively by full path so repeated scans of the same
/// tree produce the same order.
pub fn scan_library(device_root: &Path, scan_dir: &Path, excluded: &[PathBuf]) -> Result<Library> {
    if !scan_dir.starts_with(device_root) {
        anyhow::bail!("{:?} is not inside the device root {:?}", scan_dir, device_root);
    }
    log::info!("Scanning {:?}", scan_dir);

    let mut tracks = Vec::new();
    let mut playlists = Vec::new();

    let walker = WalkDir::new(scan_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_excluded(e, excluded));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {:?}", scan_dir))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if has_extension(&path, AUDIO_EXTENSIONS) {
            tracks.push(path);
        } else if has_extension(&path, PLAYLIST_EXTENSIONS) {
            playlists.push(path);
        }
    }

    sort_paths(&mut tracks);
    sort_paths(&mut playlists);

    let mut library = Library::new(device_root.to_path_buf());
    for track in tracks {
        library.add_track(track);
    }
    for playlist in playlists {
        library.add_playlist(playlist);
    }

    log::info!(
        "Found {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );
    Ok(library)
}

fn is_excluded(entry: &DirEntry, excluded: &[PathBuf]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    hidden || excluded.iter().any(|dir| entry.path() == dir)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|p| {
        let text = p.to_string_lossy().into_owned();
        (text.to_lowercase(), text)
    });
}
