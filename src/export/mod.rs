//! Conversion orchestration and device layout

pub mod config;
pub mod mount;
pub mod organizer;
pub mod pipeline;

pub use config::ExportConfig;
pub use mount::find_mount_root;
pub use organizer::DeviceLayout;
pub use pipeline::{ExportPipeline, ExportSummary};
