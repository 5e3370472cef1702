//! Synthesis through an external text-to-speech program

use super::traits::{VoicePrompt, VoiceSynthesizer};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Supported text-to-speech programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TtsEngine {
    #[value(name = "pico2wave")]
    Pico2Wave,
    #[value(name = "espeak")]
    Espeak,
}

impl TtsEngine {
    /// Default executable name
    pub fn program(&self) -> &'static str {
        match self {
            TtsEngine::Pico2Wave => "pico2wave",
            TtsEngine::Espeak => "espeak",
        }
    }

    fn args(&self, language: &str, output: &Path, text: &str) -> Vec<String> {
        let language_flag = match self {
            TtsEngine::Pico2Wave => "-l",
            TtsEngine::Espeak => "-v",
        };
        vec![
            language_flag.to_string(),
            language.to_string(),
            "-w".to_string(),
            output.to_string_lossy().into_owned(),
            text.to_string(),
        ]
    }
}

/// Writes `<speakable>/<Tracks|Playlists>/<stem>.wav` by running a TTS program
pub struct CommandSynthesizer {
    speakable_dir: PathBuf,
    engine: TtsEngine,
    program: PathBuf,
    language: String,
}

impl CommandSynthesizer {
    pub fn new(speakable_dir: PathBuf, engine: TtsEngine, language: impl Into<String>) -> Self {
        Self {
            speakable_dir,
            engine,
            program: PathBuf::from(engine.program()),
            language: language.into(),
        }
    }

    /// Run a specific executable instead of the engine's default name
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Path of the prompt file for a prompt
    pub fn prompt_path(&self, prompt: &VoicePrompt) -> PathBuf {
        self.speakable_dir
            .join(prompt.kind.dir_name())
            .join(format!("{}.wav", prompt.file_stem()))
    }
}

impl VoiceSynthesizer for CommandSynthesizer {
    fn synthesize(&self, prompt: &VoicePrompt) -> Result<()> {
        let output = self.prompt_path(prompt);
        if output.exists() {
            log::debug!("Voice-over already present: {:?}", output);
            return Ok(());
        }

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create voice-over directory: {:?}", parent))?;
        }

        log::debug!("Synthesizing {:?} -> {:?}", prompt.label, output);
        let status = Command::new(&self.program)
            .args(self.engine.args(&self.language, &output, &prompt.label))
            .status()
            .with_context(|| format!("Failed to run {:?}", self.program))?;

        if !status.success() {
            bail!("{:?} exited with {} for {:?}", self.program, status, prompt.label);
        }
        if !output.exists() {
            bail!("{:?} did not produce {:?}", self.program, output);
        }

        Ok(())
    }
}
