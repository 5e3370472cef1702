use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Ordered audio and playlist files found under a device root
///
/// Track order is the database order: positions in `tracks` are the
/// indices playlists refer to, and artist/album IDs follow it.
#[derive(Debug, Clone)]
pub struct Library {
    device_root: PathBuf,
    tracks: Vec<PathBuf>,
    playlists: Vec<PathBuf>,
}

impl Library {
    /// Create a new empty library
    pub fn new(device_root: PathBuf) -> Self {
        Self {
            device_root,
            tracks: Vec::new(),
            playlists: Vec::new(),
        }
    }

    pub fn device_root(&self) -> &Path {
        &self.device_root
    }

    /// Append an audio file
    pub fn add_track(&mut self, path: PathBuf) {
        self.tracks.push(path);
    }

    /// Append a playlist file
    pub fn add_playlist(&mut self, path: PathBuf) {
        self.playlists.push(path);
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[PathBuf] {
        &self.playlists
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlist files
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Map from absolute track path to its position
    ///
    /// If a path appears twice the first position wins.
    pub fn track_positions(&self) -> HashMap<&Path, u32> {
        let mut positions = HashMap::with_capacity(self.tracks.len());
        for (idx, path) in self.tracks.iter().enumerate() {
            positions.entry(path.as_path()).or_insert(idx as u32);
        }
        positions
    }
}
