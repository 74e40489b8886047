//! Headless Pong host
//!
//! Drives the simulation core at a fixed tick rate with scripted or
//! automatic input, logging frames and audio cues instead of drawing them.

mod audio;
mod keys;
mod render;
mod runner;
mod script;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pong_core::{Config, Cue, Game, GameRng, Params};

use audio::LogAudio;
use render::TextRenderer;
use runner::Runner;
use script::{AutoServe, InputScript, InputSource, ScriptedInput};

#[derive(Parser)]
#[command(name = "pong_local")]
#[command(about = "Run a two-player Pong match without a window", long_about = None)]
struct Cli {
    /// JSON file overriding field geometry and speeds
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for serves; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// JSON key script to replay; without it confirm is tapped automatically
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log a snapshot every N ticks (0 = only on phase changes)
    #[arg(long, default_value_t = 60)]
    snapshot_every: u64,

    /// Hold real time at the fixed tick rate instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("loading config {}", path.display()))
}

fn load_input(path: Option<&Path>) -> Result<Box<dyn InputSource>> {
    let Some(path) = path else {
        log::warn!("no input script, tapping confirm once per second");
        return Ok(Box::new(AutoServe {
            interval: Params::TICKS_PER_SECOND as u64,
        }));
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let script = InputScript::from_json(&json)
        .with_context(|| format!("parsing script {}", path.display()))?;
    log::info!("replaying {} key events", script.events.len());
    Ok(Box::new(ScriptedInput::new(script)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut game = Game::new(config, rng).context("building game")?;
    let mut input = load_input(cli.script.as_deref())?;

    let ticks = match (cli.ticks, cli.script.is_some()) {
        (Some(ticks), _) => Some(ticks),
        (None, true) => None,
        // Automatic input never closes on its own
        (None, false) => Some(Params::TICKS_PER_SECOND as u64 * 60),
    };
    let runner = Runner {
        max_ticks: ticks,
        frame_time: cli
            .realtime
            .then(|| Duration::from_secs_f64(1.0 / Params::TICKS_PER_SECOND as f64)),
    };

    let mut renderer = TextRenderer::new(cli.snapshot_every);
    let mut audio = LogAudio::new();
    let summary = runner.run(&mut game, input.as_mut(), &mut renderer, &mut audio);

    log::info!(
        "finished after {} ticks ({} frames): {} rounds, score {} - {}, peak speed {:.2}",
        summary.ticks,
        renderer.frames(),
        summary.rounds,
        summary.score.left,
        summary.score.right,
        summary.peak_speed
    );
    log::info!(
        "cues: {} paddle hits, {} wall hits, {} goals",
        audio.count(Cue::PaddleHit),
        audio.count(Cue::WallHit),
        audio.count(Cue::Goal)
    );
    Ok(())
}
