use std::path::PathBuf;

/// Where a playlist came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    /// Synthesized list of every track
    Master,
    /// A `.pls` or `.m3u` file on the device
    File(PathBuf),
}

/// A playlist resolved against the global track list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name, also the spoken voice-over label
    pub name: String,

    pub source: PlaylistSource,

    /// Positions of the referenced tracks in the global track list
    pub entries: Vec<u32>,
}

impl Playlist {
    /// Name and voice-over label of the master playlist
    pub const MASTER_NAME: &'static str = "masterlist";

    /// Master playlist referencing every track in order
    pub fn master(track_count: u32) -> Self {
        Self {
            name: Self::MASTER_NAME.to_string(),
            source: PlaylistSource::Master,
            entries: (0..track_count).collect(),
        }
    }

    /// Create an empty playlist for a playlist file, named after its stem
    pub fn from_file(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            source: PlaylistSource::File(path),
            entries: Vec::new(),
        }
    }

    pub fn is_master(&self) -> bool {
        self.source == PlaylistSource::Master
    }

    /// Add a track by global position
    pub fn add_track(&mut self, position: u32) {
        self.entries.push(position);
    }

    /// Number of resolved songs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
