//! Shuffle DB - iTunesSD database builder for the iPod shuffle
//!
//! This library scans an iPod shuffle's file system and encodes the
//! binary iTunesSD database its firmware reads, optionally with
//! voice-over prompts for tracks and playlists.

pub mod export;
pub mod itunessd;
pub mod model;
pub mod scan;
pub mod voiceover;

pub use export::config::ExportConfig;
pub use export::pipeline::{ExportPipeline, ExportSummary};
