//! Headless collaborators and a scripted player, for running a level
//! without a renderer or sound.

use glam::{Mat4, Vec3};
use log::{debug, info, trace};
use std::collections::BTreeMap;

use crate::core::{InteractableId, LaserFrame, LaserShot, Throttled};
use crate::level::{Level, LevelState};
use crate::traits::{AudioSink, Collaborators, SceneSink, ScoreEvent, ScoreLog, ScoreSink};

/// Records what a renderer would be showing
#[derive(Debug, Default)]
pub struct HeadlessScene {
    pub visible: BTreeMap<InteractableId, bool>,
    pub lights: BTreeMap<usize, (f32, f32)>,
    pub beam_ticks: u64,
}

impl HeadlessScene {
    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|v| **v).count()
    }
}

impl SceneSink for HeadlessScene {
    fn set_visible(&mut self, id: InteractableId, visible: bool) {
        trace!("scene: {:?} visible={}", id, visible);
        self.visible.insert(id, visible);
    }

    fn set_camera_pose(&mut self, _camera: usize, _body: Mat4, _light: Mat4) {}

    fn set_light_intensity(&mut self, camera: usize, outer: f32, inner: f32) {
        self.lights.insert(camera, (outer, inner));
    }

    fn set_laser(&mut self, _shot: Option<&LaserShot>, frame: LaserFrame) {
        if frame.beam_visible {
            self.beam_ticks += 1;
        }
    }

    fn raycast(&mut self, _origin: Vec3, _direction: Vec3, _target: InteractableId) -> Option<Vec3> {
        None
    }
}

/// Logs every cue; disturbance clips last a fixed time
#[derive(Debug)]
pub struct LogAudio {
    pub disturbance_length: f32,
    pub cues: usize,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self {
            disturbance_length: 3.0,
            cues: 0,
        }
    }
}

impl LogAudio {
    fn cue(&mut self, name: &str) {
        self.cues += 1;
        debug!("audio: {}", name);
    }
}

impl AudioSink for LogAudio {
    fn camera_motor_on(&mut self) {
        self.cue("motor on");
    }

    fn camera_motor_off(&mut self) {
        self.cue("motor off");
    }

    fn camera_stop(&mut self) {
        self.cue("camera stop");
    }

    fn laser_fire(&mut self) {
        self.cue("laser");
    }

    fn disturbance(&mut self) -> f32 {
        self.cue("disturbance");
        self.disturbance_length
    }

    fn static_noise(&mut self, on: bool) {
        self.cue(if on { "static on" } else { "static off" });
    }
}

/// Score log that also reports each event
#[derive(Debug, Default)]
pub struct ScoreBoard {
    pub log: ScoreLog,
}

impl ScoreBoard {
    pub fn decoys_hit(&self) -> usize {
        self.log.events.iter().filter(|e| matches!(e, ScoreEvent::HitDecoy(_))).count()
    }

    pub fn misses(&self) -> usize {
        self.log
            .events
            .iter()
            .filter(|e| matches!(e, ScoreEvent::HitWrongTarget { .. }))
            .count()
    }
}

impl ScoreSink for ScoreBoard {
    fn shot_hit_decoy(&mut self, group: usize) {
        info!("hit decoy group {}", group);
        self.log.shot_hit_decoy(group);
    }

    fn shot_hit_wrong_target(&mut self, lives_left: u32) {
        info!("wrong target, {} lives left", lives_left);
        self.log.shot_hit_wrong_target(lives_left);
    }

    fn timer_expired(&mut self) {
        info!("time is up");
        self.log.timer_expired();
    }

    fn level_cleared(&mut self) {
        info!("level cleared");
        self.log.level_cleared();
    }

    fn lives_exhausted(&mut self) {
        info!("no lives left");
        self.log.lives_exhausted();
    }
}

/// Scripted player: at a fixed cadence, aims through the current camera and
/// shoots the visible decoy of the lowest-numbered group still standing
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    cadence: Throttled,
    shots: u32,
}

impl AutoPlayer {
    pub const DEFAULT_CADENCE: f32 = 4.0;

    pub fn new(cadence: f32) -> Self {
        Self {
            cadence: Throttled::new(cadence),
            shots: 0,
        }
    }

    pub fn update(&mut self, delta: f32, level: &mut Level, io: &mut Collaborators) {
        if level.state() != LevelState::Playing || !self.cadence.try_tick(delta) {
            return;
        }
        if !level.pov_camera().can_fire() || level.laser().is_firing() {
            return;
        }
        let Some(target) = level.next_target() else {
            return;
        };

        level.begin_aim(io);
        if level.fire(target, io) {
            self.shots += 1;
            debug!("auto-player shot #{} at {:?}", self.shots, target);
        } else {
            level.end_aim(io);
        }
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CADENCE)
    }
}
