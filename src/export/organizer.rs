//! iPod shuffle directory structure

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths the firmware reads under the device root
pub struct DeviceLayout {
    device_root: PathBuf,

    /// iPod_Control/iTunes directory
    itunes_dir: PathBuf,

    /// iPod_Control/Speakable directory
    speakable_dir: PathBuf,
}

impl DeviceLayout {
    pub fn new(device_root: PathBuf) -> Self {
        let control_dir = device_root.join("iPod_Control");
        let itunes_dir = control_dir.join("iTunes");
        let speakable_dir = control_dir.join("Speakable");

        Self {
            device_root,
            itunes_dir,
            speakable_dir,
        }
    }

    pub fn device_root(&self) -> &Path {
        &self.device_root
    }

    /// Voice-over prompt directory, skipped when scanning for music
    pub fn speakable_dir(&self) -> &Path {
        &self.speakable_dir
    }

    /// Get the path for the iTunesSD database file
    pub fn database_path(&self) -> PathBuf {
        self.itunes_dir.join("iTunesSD")
    }

    /// Check the device root and create the directories we write into
    pub fn init(&self, voiceover: bool) -> Result<()> {
        if !self.device_root.is_dir() {
            anyhow::bail!("Device root is not a directory: {:?}", self.device_root);
        }

        fs::create_dir_all(&self.itunes_dir)
            .context("Failed to create iPod_Control/iTunes directory")?;

        if voiceover {
            fs::create_dir_all(&self.speakable_dir)
                .context("Failed to create iPod_Control/Speakable directory")?;
        }

        log::debug!("Device structure ready at {:?}", self.device_root);
        Ok(())
    }

    /// Write the database file
    pub fn write_database(&self, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.database_path();
        fs::write(&path, bytes).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(path)
    }
}
