//! Export configuration

use super::mount::{absolute_path, find_mount_root};
use crate::itunessd::BuildOptions;
use crate::voiceover::TtsEngine;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Device mount point (e.g., /media/ipod)
    pub device_root: PathBuf,

    /// Directory to scan for music; the whole device when `None`
    pub scan_path: Option<PathBuf>,

    /// Synthesize track prompts; also sets the header's voice-over flag
    pub track_voiceover: bool,

    /// Synthesize playlist prompts
    pub playlist_voiceover: bool,

    pub tts_engine: TtsEngine,

    /// Language code handed to the speech engine
    pub language: String,

    /// Build the database but write nothing
    pub dry_run: bool,
}

impl ExportConfig {
    pub const DEFAULT_LANGUAGE: &'static str = "en-US";

    /// Create a configuration with voice-over enabled
    pub fn new(device_root: PathBuf) -> Self {
        Self {
            device_root,
            scan_path: None,
            track_voiceover: true,
            playlist_voiceover: true,
            tts_engine: TtsEngine::Pico2Wave,
            language: Self::DEFAULT_LANGUAGE.to_string(),
            dry_run: false,
        }
    }

    /// Configuration for a path anywhere on the device
    ///
    /// The device root is the mount point holding `path`; only `path`
    /// itself is scanned.
    pub fn for_path(path: &Path) -> Result<Self> {
        let scan_path = absolute_path(path)?;
        let device_root = find_mount_root(&scan_path)?;
        if scan_path != device_root {
            log::info!("Using device root {:?}, scanning {:?}", device_root, scan_path);
        }
        Ok(Self::new(device_root).with_scan_path(scan_path))
    }

    /// Restrict the music scan to a directory below the device root
    pub fn with_scan_path(mut self, scan_path: PathBuf) -> Self {
        self.scan_path = Some(scan_path);
        self
    }

    pub fn with_track_voiceover(mut self, enabled: bool) -> Self {
        self.track_voiceover = enabled;
        self
    }

    pub fn with_playlist_voiceover(mut self, enabled: bool) -> Self {
        self.playlist_voiceover = enabled;
        self
    }

    /// Set the speech engine and its language
    pub fn with_tts(mut self, engine: TtsEngine, language: impl Into<String>) -> Self {
        self.tts_engine = engine;
        self.language = language.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether any prompt needs synthesizing
    pub fn voiceover_enabled(&self) -> bool {
        self.track_voiceover || self.playlist_voiceover
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            track_voiceover: self.track_voiceover,
            playlist_voiceover: self.playlist_voiceover,
        }
    }
}
