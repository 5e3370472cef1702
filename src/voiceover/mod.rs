//! Voice-over prompt synthesis
//!
//! The database encoder hands every track and playlist label to a
//! [`VoiceSynthesizer`]. Synthesis failures are logged by the caller and
//! never stop the conversion.

mod command;
mod silent;
mod traits;

pub use command::{CommandSynthesizer, TtsEngine};
pub use silent::SilentSynthesizer;
pub use traits::{PromptKind, VoicePrompt, VoiceSynthesizer};
