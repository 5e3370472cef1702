use std::path::PathBuf;
use std::time::Duration;

/// Label used when a track has no artist or album tag
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Metadata read from an audio file's tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioTags {
    pub duration: Duration,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
}

/// A single audio file on the device with whatever metadata it carries
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Absolute path to the audio file
    pub path: PathBuf,

    /// Track duration in milliseconds (0 when unknown)
    pub duration_ms: u32,

    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,

    /// Track number in album (optional)
    pub track_number: Option<u32>,

    /// Disc number (optional)
    pub disc_number: Option<u32>,
}

impl Track {
    /// Build a track from its path and optional tag data
    ///
    /// Missing tags are not an error; empty tag values count as missing.
    pub fn new(path: PathBuf, tags: Option<AudioTags>) -> Self {
        let tags = tags.unwrap_or_default();
        let duration_ms = u32::try_from(tags.duration.as_millis()).unwrap_or_else(|_| {
            log::debug!(
                "Duration of {:?} ({:?}) exceeds the record field, clamping",
                path,
                tags.duration
            );
            u32::MAX
        });
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            path,
            duration_ms,
            artist: non_empty(tags.artist),
            album: non_empty(tags.album),
            title: non_empty(tags.title),
            track_number: tags.track_number,
            disc_number: tags.disc_number,
        }
    }

    /// Artist label used for deduplication
    pub fn artist_label(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    /// Album label used for deduplication
    pub fn album_label(&self) -> &str {
        self.album.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    /// Text spoken by the voice-over prompt for this track
    ///
    /// "title - artist" when both tags exist, otherwise the file name
    /// without its extension.
    pub fn voiceover_label(&self) -> String {
        match (&self.title, &self.artist) {
            (Some(title), Some(artist)) => format!("{} - {}", title, artist),
            _ => self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_without_tags() {
        let track = Track::new(PathBuf::from("/media/ipod/Music/Some Song.mp3"), None);

        assert_eq!(track.duration_ms, 0);
        assert_eq!(track.artist_label(), "Unknown");
        assert_eq!(track.album_label(), "Unknown");
        assert_eq!(track.voiceover_label(), "Some Song");
    }

    #[test]
    fn test_track_with_tags() {
        let tags = AudioTags {
            duration: Duration::from_secs_f64(183.5),
            artist: Some("Artist".to_string()),
            album: Some("Album".to_string()),
            title: Some("Title".to_string()),
            track_number: Some(4),
            disc_number: None,
        };
        let track = Track::new(PathBuf::from("/media/ipod/a.mp3"), Some(tags));

        assert_eq!(track.duration_ms, 183_500);
        assert_eq!(track.artist_label(), "Artist");
        assert_eq!(track.voiceover_label(), "Title - Artist");
        assert_eq!(track.track_number, Some(4));
    }

    #[test]
    fn test_overlong_duration_is_clamped() {
        let tags = AudioTags {
            duration: Duration::from_secs(60 * 60 * 24 * 60),
            ..Default::default()
        };
        let track = Track::new(PathBuf::from("/media/ipod/long.mp3"), Some(tags));

        assert_eq!(track.duration_ms, u32::MAX);
    }

    #[test]
    fn test_label_needs_both_title_and_artist() {
        let tags = AudioTags {
            title: Some("Title".to_string()),
            artist: Some("   ".to_string()),
            ..Default::default()
        };
        let track = Track::new(PathBuf::from("/media/ipod/file name.m4a"), Some(tags));

        assert_eq!(track.artist, None);
        assert_eq!(track.voiceover_label(), "file name");
    }
}
