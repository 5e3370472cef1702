//! Shared state for one database build

use super::dedup::DedupTable;
use crate::model::Library;
use crate::scan::TagReader;
use crate::voiceover::{PromptKind, VoicePrompt, VoiceSynthesizer};

/// Which voice-over prompts to synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub track_voiceover: bool,
    pub playlist_voiceover: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            track_voiceover: true,
            playlist_voiceover: true,
        }
    }
}

/// Everything the encoders share while building one database
///
/// Owns the artist and album tables, so IDs are only stable within one
/// context. Tracks must be encoded in library order.
pub struct BuildContext<'a> {
    pub library: &'a Library,
    pub tags: &'a dyn TagReader,
    voice: &'a dyn VoiceSynthesizer,
    pub options: BuildOptions,
    pub artists: DedupTable,
    pub albums: DedupTable,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        library: &'a Library,
        tags: &'a dyn TagReader,
        voice: &'a dyn VoiceSynthesizer,
        options: BuildOptions,
    ) -> Self {
        Self {
            library,
            tags,
            voice,
            options,
            artists: DedupTable::new(),
            albums: DedupTable::new(),
        }
    }

    /// Request a voice-over prompt; failures are logged and otherwise ignored
    pub fn speak(&self, prompt: VoicePrompt) {
        let enabled = match prompt.kind {
            PromptKind::Track => self.options.track_voiceover,
            PromptKind::Playlist => self.options.playlist_voiceover,
        };
        if !enabled {
            return;
        }

        if let Err(e) = self.voice.synthesize(&prompt) {
            log::warn!("Voice-over failed for {:?}: {:#}", prompt.label, e);
        }
    }
}
