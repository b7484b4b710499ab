//! Tile Platformer headless runner
//!
//! Loads a level (the built-in demo by default), then drives the simulation
//! with a scripted "walk right, hop when stuck" player until the run ends or
//! the frame budget is spent. After the run ends the camera keeps following
//! the frozen player for a short settle window before the runner exits.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tile_platformer::audio::{AudioBackend, AudioManager, SoundEffect};
use tile_platformer::clock::FixedTimestep;
use tile_platformer::consts::{MAX_SUBSTEPS, SIM_DT};
use tile_platformer::map::{DEMO_LEVEL, LoadedMap};
use tile_platformer::sim::{GameState, TickInput, tick};
use tile_platformer::tuning::Tuning;

/// Simulated display frame time (30 fps, two ticks per frame)
const FRAME_DT: f32 = 1.0 / 30.0;
const DEFAULT_FRAMES: u32 = 30 * 60;
/// Frames the camera keeps running once the run is over
const SETTLE_FRAMES: u32 = 60;

#[derive(Parser, Debug)]
#[command(name = "tile-platformer")]
#[command(about = "Run the platformer simulation headless with a scripted player")]
struct Cli {
    /// Level file (JSON); the built-in demo level when omitted
    map: Option<PathBuf>,

    /// Tuning file (JSON); defaults when omitted
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Frame budget for the scripted run
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u32,
}

/// Stand-in for a sound device: reports cues in the log
struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound {:?} at volume {:.2}", effect, volume);
    }
}

/// Advance one display frame worth of ticks and play their cues
fn step_frame(
    state: &mut GameState,
    audio: &mut AudioManager,
    clock: &mut FixedTimestep,
    input: &mut TickInput,
) {
    for _ in 0..clock.accumulate(FRAME_DT) {
        tick(state, input, clock.dt());
        audio.dispatch(&state.events);

        // Clear one-shot inputs after processing
        input.jump = false;
    }
}

fn log_progress(state: &GameState) {
    log::info!(
        "t={:.1}s pos=({:.2}, {:.2}) camera=({:.2}, {:.2}) score={} health={}/{}",
        state.time_ticks as f32 * SIM_DT,
        state.body.pos().x,
        state.body.pos().y,
        state.camera.position.x,
        state.camera.position.y,
        state.progress.score(),
        state.progress.health(),
        state.progress.max_health()
    );
}

/// Scripted run, then the settle window if the run ended
fn run(state: &mut GameState, audio: &mut AudioManager, frames: u32) {
    let mut clock = FixedTimestep::new(SIM_DT, MAX_SUBSTEPS);
    let mut input = TickInput::default();
    let mut last_x = state.body.pos().x;

    for frame in 0..frames {
        if state.is_frozen() {
            break;
        }

        // Scripted player: always walk right, press jump when blocked
        input.right = true;
        let stuck = (state.body.pos().x - last_x).abs() < f32::EPSILON;
        if stuck && !state.body.airborne {
            input.jump = true;
        }
        last_x = state.body.pos().x;

        step_frame(state, audio, &mut clock, &mut input);

        if frame % 30 == 0 {
            log_progress(state);
        }
    }

    if state.is_frozen() {
        log::debug!("Run over, settling camera for {} frames", SETTLE_FRAMES);
        let mut idle = TickInput::default();
        for _ in 0..SETTLE_FRAMES {
            step_frame(state, audio, &mut clock, &mut idle);
        }
        log_progress(state);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Tile Platformer (headless) starting...");

    let cli = Cli::parse();
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let map = match &cli.map {
        Some(path) => LoadedMap::load(path)?,
        None => {
            log::info!("No map given, using the demo level");
            LoadedMap::from_json(DEMO_LEVEL)?
        }
    };

    let mut state = GameState::new(map, tuning);
    let mut audio = AudioManager::new(Some(Box::new(LogAudio)));

    log::info!(
        "Session started: {} coins, {} damage zones",
        state.coins_remaining(),
        state.zones.len()
    );

    run(&mut state, &mut audio, cli.frames);

    match state.progress.outcome() {
        Some(outcome) => println!(
            "{} score={} health={} ticks={}",
            outcome.banner(),
            state.progress.score(),
            state.progress.health(),
            state.time_ticks
        ),
        None => println!(
            "Out of time score={} health={} ticks={}",
            state.progress.score(),
            state.progress.health(),
            state.time_ticks
        ),
    }
    Ok(())
}
