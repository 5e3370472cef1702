//! Audio tag reading

use crate::model::AudioTags;
use lofty::prelude::*;
use lofty::probe::Probe;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of audio metadata - allows swapping lofty for in-memory tags
pub trait TagReader {
    /// Read tags for a file; `None` means no usable metadata
    fn read_tags(&self, path: &Path) -> Option<AudioTags>;
}

/// Reads tags and duration with lofty
pub struct LoftyTagReader;

impl LoftyTagReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyTagReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Option<AudioTags> {
        let tagged_file = match Probe::open(path).and_then(|probe| probe.read()) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("No metadata for {:?}: {}", path, e);
                return None;
            }
        };

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        Some(AudioTags {
            duration: tagged_file.properties().duration(),
            artist: tag.and_then(|t| t.artist()).map(|s| s.into_owned()),
            album: tag.and_then(|t| t.album()).map(|s| s.into_owned()),
            title: tag.and_then(|t| t.title()).map(|s| s.into_owned()),
            track_number: tag.and_then(|t| t.track()),
            disc_number: tag.and_then(|t| t.disk()),
        })
    }
}

/// Tags already known in memory, keyed by absolute path
impl TagReader for HashMap<PathBuf, AudioTags> {
    fn read_tags(&self, path: &Path) -> Option<AudioTags> {
        self.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lofty_reader_tolerates_non_audio() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fake.mp3");
        fs::write(&path, b"definitely not an mp3").unwrap();

        assert_eq!(LoftyTagReader::new().read_tags(&path), None);
        assert_eq!(LoftyTagReader::new().read_tags(&temp_dir.path().join("missing.mp3")), None);
    }

    #[test]
    fn test_map_reader() {
        let mut tags = HashMap::new();
        tags.insert(
            PathBuf::from("/ipod/a.mp3"),
            AudioTags {
                artist: Some("X".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(
            tags.read_tags(Path::new("/ipod/a.mp3")).unwrap().artist.as_deref(),
            Some("X")
        );
        assert!(tags.read_tags(Path::new("/ipod/b.mp3")).is_none());
    }
}
