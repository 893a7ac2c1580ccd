use anyhow::Result;
use clap::Parser;
use log::info;
use std::time::Duration;

use quantum_cams::cli::Cli;
use quantum_cams::core::{Accumulator, Clock, ObservationMethod, Throttled};
use quantum_cams::demo::demo_level;
use quantum_cams::level::{Level, LevelState};
use quantum_cams::loaders::load_level_file;
use quantum_cams::runner::{AutoPlayer, HeadlessScene, LogAudio, ScoreBoard};
use quantum_cams::traits::Collaborators;

// === Constants ===

const STATUS_INTERVAL: f32 = 5.0;
const MAX_STEPS_PER_FRAME: u8 = 8;
const FRAME_SLEEP: Duration = Duration::from_millis(4);

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let desc = match &cli.level {
        Some(path) => load_level_file(path)?,
        None => demo_level(),
    };
    let mut level = Level::from_desc(&desc, cli.seed)?;
    if cli.analytic {
        level.set_observation_method(ObservationMethod::Analytic);
    }

    let mut scene = HeadlessScene::default();
    let mut audio = LogAudio::default();
    let mut score = ScoreBoard::default();
    let mut bot = (!cli.no_bot).then(AutoPlayer::default);

    if !cli.no_ui {
        println!(
            "{} - {} cameras, {} objects, {} decoy groups (seed {})",
            level.name(),
            level.cameras().len(),
            level.interactables().len(),
            level.groups().len(),
            cli.seed
        );
    }

    let mut io = Collaborators::new(&mut scene, &mut audio, &mut score);
    level.enter(&mut io);

    let mut status = Throttled::new(STATUS_INTERVAL);
    let mut simulated = 0.0;
    let mut step = |dt: f32, level: &mut Level, io: &mut Collaborators| {
        if let Some(bot) = bot.as_mut() {
            bot.update(dt, level, io);
        }
        level.tick(dt, io);
    };

    if cli.realtime {
        let mut clock = Clock::new();
        let mut accumulator = Accumulator::new(cli.hz, MAX_STEPS_PER_FRAME);
        while simulated < cli.duration && level.state() == LevelState::Playing {
            let frame = clock.tick();
            for dt in accumulator.tick(frame) {
                step(dt, &mut level, &mut io);
                simulated += dt;
            }
            if status.try_tick(frame) {
                report(&level, simulated);
            }
            std::thread::sleep(FRAME_SLEEP);
        }
    } else {
        let dt = 1.0 / cli.hz;
        while simulated < cli.duration && level.state() == LevelState::Playing {
            step(dt, &mut level, &mut io);
            simulated += dt;
            if status.try_tick(dt) {
                report(&level, simulated);
            }
        }
    }

    let state = level.state();
    let lives = level.lives();
    let remaining = level.time_remaining();
    let shots = bot.as_ref().map_or(0, AutoPlayer::shots);
    level.exit(&mut io);
    drop(io);

    info!("run finished after {:.1}s simulated: {:?}", simulated, state);

    if !cli.no_ui {
        println!("Result: {:?} after {:.1}s", state, simulated);
        println!("  Shots fired: {}", shots);
        println!("  Decoys hit: {}", score.decoys_hit());
        println!("  Wrong targets: {}", score.misses());
        println!("  Lives left: {}", lives);
        println!("  Time left: {:.1}s", remaining);
        println!("  Beam frames: {}", scene.beam_ticks);
        println!("  Audio cues: {}", audio.cues);
    }

    Ok(())
}

fn report(level: &Level, simulated: f32) {
    let camera = level.pov_camera();
    info!(
        "t={:.1}s camera={} mode={:?} lives={} time left={:.1}s",
        simulated,
        camera.name(),
        camera.mode(),
        level.lives(),
        level.time_remaining()
    );
}
