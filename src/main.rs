use anyhow::Result;
use clap::Parser;
use shuffle_db::export::DeviceLayout;
use shuffle_db::scan::LoftyTagReader;
use shuffle_db::voiceover::{CommandSynthesizer, SilentSynthesizer, TtsEngine};
use shuffle_db::{ExportConfig, ExportPipeline, ExportSummary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shuffle-db")]
#[command(about = "Build the iTunesSD database for an iPod shuffle", long_about = None)]
struct Args {
    /// Device mount point, or a directory on the device to scan
    #[arg(default_value = ".")]
    device: String,

    /// Don't synthesize track voice-over (also disables it on the device)
    #[arg(long)]
    no_track_voiceover: bool,

    /// Don't synthesize playlist voice-over
    #[arg(long)]
    no_playlist_voiceover: bool,

    /// Text-to-speech engine
    #[arg(long = "tts", value_enum, default_value = "pico2wave")]
    tts: TtsEngine,

    /// Voice-over language
    #[arg(long, default_value = ExportConfig::DEFAULT_LANGUAGE)]
    language: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Build the database and report its size without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("Shuffle DB");
    log::info!("==========");

    // Expand ~ in the device path, then find the mount point it lives on
    let path = PathBuf::from(shellexpand::tilde(&args.device).as_ref());

    let config = ExportConfig::for_path(&path)?
        .with_track_voiceover(!args.no_track_voiceover)
        .with_playlist_voiceover(!args.no_playlist_voiceover)
        .with_tts(args.tts, args.language)
        .with_dry_run(args.dry_run);

    let summary = if config.voiceover_enabled() {
        let layout = DeviceLayout::new(config.device_root.clone());
        let voice = CommandSynthesizer::new(
            layout.speakable_dir().to_path_buf(),
            config.tts_engine,
            config.language.clone(),
        );
        log::info!("Voice-over: {} ({})", config.tts_engine.program(), config.language);
        ExportPipeline::new(config, voice, LoftyTagReader::new()).export()?
    } else {
        ExportPipeline::new(config, SilentSynthesizer::new(), LoftyTagReader::new()).export()?
    };

    report(&summary);
    Ok(())
}

fn report(summary: &ExportSummary) {
    match &summary.database_path {
        Some(path) => log::info!("Database ready at: {:?}", path),
        None => log::info!("Dry run complete, nothing written"),
    }
    log::info!(
        "{} tracks, {} playlists, {} bytes",
        summary.track_count,
        summary.playlist_count,
        summary.bytes
    );
}
