//! No-op synthesizer, used when voice-over is disabled and in tests

use super::traits::{VoicePrompt, VoiceSynthesizer};
use anyhow::Result;

/// Synthesizer that produces nothing
pub struct SilentSynthesizer;

impl SilentSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SilentSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceSynthesizer for SilentSynthesizer {
    fn synthesize(&self, prompt: &VoicePrompt) -> Result<()> {
        log::debug!("Skipping voice-over for {:?} ({})", prompt.label, prompt.file_stem());
        Ok(())
    }
}
