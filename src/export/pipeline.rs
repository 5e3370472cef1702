//! Main conversion pipeline orchestration

use super::config::ExportConfig;
use super::mount::absolute_path;
use super::organizer::DeviceLayout;
use crate::itunessd::{build_database, BuildContext};
use crate::scan::{scan_library, TagReader};
use crate::voiceover::{SilentSynthesizer, VoiceSynthesizer};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What a conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub track_count: u32,
    pub playlist_count: u32,
    /// Size of the encoded database
    pub bytes: usize,
    /// Where the database was written; `None` on a dry run
    pub database_path: Option<PathBuf>,
}

/// Main conversion pipeline
pub struct ExportPipeline<V: VoiceSynthesizer, T: TagReader> {
    config: ExportConfig,
    voice: V,
    tags: T,
}

impl<V: VoiceSynthesizer, T: TagReader> ExportPipeline<V, T> {
    pub fn new(config: ExportConfig, voice: V, tags: T) -> Self {
        Self {
            config,
            voice,
            tags,
        }
    }

    /// Run the complete conversion
    ///
    /// The database file is only written after every record encoded
    /// successfully.
    pub fn export(&self) -> Result<ExportSummary> {
        log::info!("Starting iTunesSD conversion");

        // Step 1: Resolve paths; playlist entries are matched against absolute track paths
        let device_root = absolute_path(&self.config.device_root)?;
        let scan_dir = match &self.config.scan_path {
            Some(path) => absolute_path(path)?,
            None => device_root.clone(),
        };
        log::info!("Device: {:?}", device_root);
        let layout = DeviceLayout::new(device_root);

        // Step 2: Prepare device structure
        if self.config.dry_run {
            log::info!("Dry run: nothing will be written");
            if !layout.device_root().is_dir() {
                anyhow::bail!("Device root is not a directory: {:?}", layout.device_root());
            }
        } else {
            layout.init(self.config.voiceover_enabled())?;
        }

        // Step 3: Scan for tracks and playlist files
        let excluded = [layout.speakable_dir().to_path_buf()];
        let library = scan_library(layout.device_root(), &scan_dir, &excluded)?;

        // Step 4: Encode
        let silent = SilentSynthesizer::new();
        let voice: &dyn VoiceSynthesizer = if self.config.dry_run {
            &silent
        } else {
            &self.voice
        };
        let mut ctx = BuildContext::new(&library, &self.tags, voice, self.config.build_options());
        let database = build_database(&mut ctx).context("Failed to build iTunesSD database")?;

        // Step 5: Write
        let database_path = if self.config.dry_run {
            None
        } else {
            let path = layout.write_database(&database.bytes)?;
            log::info!("iTunesSD written to: {:?}", path);
            Some(path)
        };

        log::info!(
            "Conversion complete: {} tracks, {} playlists, {} bytes",
            database.track_count,
            database.playlist_count,
            database.bytes.len()
        );

        Ok(ExportSummary {
            track_count: database.track_count,
            playlist_count: database.playlist_count,
            bytes: database.bytes.len(),
            database_path,
        })
    }
}
