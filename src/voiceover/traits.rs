//! Synthesizer trait and prompt description

use anyhow::Result;

/// Which prompt directory a voice-over belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Track,
    Playlist,
}

impl PromptKind {
    /// Directory name under `iPod_Control/Speakable`
    pub fn dir_name(&self) -> &'static str {
        match self {
            PromptKind::Track => "Tracks",
            PromptKind::Playlist => "Playlists",
        }
    }
}

/// A spoken label tied to a database ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePrompt {
    pub label: String,
    pub dbid: [u8; 8],
    pub kind: PromptKind,
}

impl VoicePrompt {
    /// File stem the firmware looks up: the ID bytes reversed, as uppercase hex
    pub fn file_stem(&self) -> String {
        self.dbid.iter().rev().map(|b| format!("{:02X}", b)).collect()
    }
}

/// Speech synthesizer trait - allows swapping between silent and real engines
pub trait VoiceSynthesizer {
    /// Produce the audio file for a prompt
    fn synthesize(&self, prompt: &VoicePrompt) -> Result<()>;
}
