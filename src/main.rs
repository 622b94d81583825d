//! Invaders entry point
//!
//! No window backend ships with the crate, so the native binary runs the
//! game headless with the autopilot at the controls and logs the outcome.
//!
//! Usage: `invaders [--settings settings.json]` (set `RUST_LOG=debug` for
//! per-event logs)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use invaders::assets::{DirAssets, SpriteSet};
use invaders::platform::HeadlessPlatform;
use invaders::{Game, Settings, Tuning};

/// Frames the headless demo runs when the settings give no limit (one minute)
const DEFAULT_DEMO_FRAMES: u64 = 60 * 60;

/// Run a headless invaders demo and log the outcome.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (JSON); missing fields and files fall back to defaults
    #[arg(short, long, value_name = "PATH", default_value = "invaders.json")]
    settings: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();
    log::info!("Invaders (headless) starting...");

    let mut settings = Settings::load_or_default(&cli.settings);

    // Nobody can press keys on a headless run
    settings.demo = true;
    settings.frame_limit.get_or_insert(DEFAULT_DEMO_FRAMES);

    let tuning = settings
        .tuning_path
        .as_deref()
        .map(Tuning::load_or_default)
        .unwrap_or_default();

    let sprites = SpriteSet::load(&DirAssets::new(&settings.asset_dir), &tuning);
    if sprites.placeholder_count() > 0 {
        log::info!(
            "{} sprite(s) replaced by placeholders (looked in {})",
            sprites.placeholder_count(),
            settings.asset_dir.display()
        );
    }

    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut game = Game::new(HeadlessPlatform::new(), settings, tuning, &sprites, seed);
    let summary = game.run();

    log::info!(
        "Run finished after {} frames: {:?}, {} kills, {} health, {} enemies left",
        summary.frames,
        summary.end_reason,
        summary.kills,
        summary.health,
        summary.enemies_left
    );
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
