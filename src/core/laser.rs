//! Laser fire sequence.
//!
//! One shot at a time, played against a fixed stage table: three short
//! flashes, then a sustained beam, then a dark tail before completion. The
//! sequencer knows nothing about cameras or scoring; its owner reacts to the
//! completed shot returned from [`LaserSequencer::update`].

use glam::Vec3;
use log::{debug, trace};

use super::timeline::StepTrack;
use super::timer::Countdown;

/// (beam visible, point light intensity) per stage
const STAGES: StepTrack<(bool, f32)> = StepTrack::new(&[
    (0.0, (false, 0.0)),
    (1.5, (true, BEAM_LIGHT_INTENSITY)),
    (1.55, (false, 0.0)),
    (1.65, (true, BEAM_LIGHT_INTENSITY)),
    (1.7, (false, 0.0)),
    (2.2, (true, BEAM_LIGHT_INTENSITY)),
    (5.2, (false, 0.0)),
    (6.2, (false, 0.0)),
]);

pub const BEAM_LIGHT_INTENSITY: f32 = 10.0;
pub const POINTER_INTENSITY: f32 = 5.0;
const FLICKER_PERIOD: f32 = 0.02;
const FLICKER_RANGE: (f32, f32) = (10.0, 11.0);
const LIGHT_SETBACK: f32 = 0.5;
const POINTER_SETBACK: f32 = 2.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LaserState {
    Idle,
    Firing,
}

/// Geometry frozen when a shot starts
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaserShot {
    pub source: Vec3,
    pub target: Vec3,
    /// Red point light, just short of the hit
    pub light_point: Vec3,
    /// Pointer spotlight position, aimed at `target`
    pub pointer_point: Vec3,
}

impl LaserShot {
    pub fn new(source: Vec3, target: Vec3) -> Self {
        let dir = (target - source).normalize_or_zero();
        Self {
            source,
            target,
            light_point: target - dir * LIGHT_SETBACK,
            pointer_point: target - dir * POINTER_SETBACK,
        }
    }
}

/// Visual state for the renderer this tick
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LaserFrame {
    pub beam_visible: bool,
    pub light_intensity: f32,
    pub light_range: f32,
    pub pointer_intensity: f32,
}

#[derive(Debug, Clone)]
pub struct LaserSequencer {
    shot: Option<LaserShot>,
    playhead: Countdown,
    frame: LaserFrame,
}

impl LaserSequencer {
    pub fn new() -> Self {
        Self {
            shot: None,
            playhead: Countdown::new(STAGES.duration()),
            frame: LaserFrame::default(),
        }
    }

    /// Start a shot. Ignored (returns false) while one is in flight.
    pub fn fire(&mut self, source: Vec3, target: Vec3) -> bool {
        if self.is_firing() {
            trace!("laser fire ignored: already firing");
            return false;
        }

        let shot = LaserShot::new(source, target);
        debug!("laser firing {:?} -> {:?}", shot.source, shot.target);
        self.shot = Some(shot);
        self.playhead.start();
        self.sample();
        true
    }

    /// Advance the sequence. Returns the shot on the tick the final stage is reached.
    pub fn update(&mut self, delta: f32) -> Option<LaserShot> {
        self.shot?;

        if self.playhead.tick(delta) {
            self.frame = LaserFrame::default();
            debug!("laser sequence finished");
            return self.shot.take();
        }

        self.sample();
        None
    }

    fn sample(&mut self) {
        let elapsed = self.playhead.elapsed();
        let (beam_visible, light_intensity) = STAGES.sample(elapsed);
        let phase = (elapsed / FLICKER_PERIOD).fract();

        self.frame = LaserFrame {
            beam_visible,
            light_intensity,
            light_range: FLICKER_RANGE.0 + (FLICKER_RANGE.1 - FLICKER_RANGE.0) * phase,
            pointer_intensity: POINTER_INTENSITY,
        };
    }

    pub fn state(&self) -> LaserState {
        if self.shot.is_some() {
            LaserState::Firing
        } else {
            LaserState::Idle
        }
    }

    pub fn is_firing(&self) -> bool {
        self.shot.is_some()
    }

    pub fn shot(&self) -> Option<&LaserShot> {
        self.shot.as_ref()
    }

    pub fn frame(&self) -> LaserFrame {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.playhead.elapsed()
    }

    /// Length of a full sequence in seconds
    pub fn duration() -> f32 {
        STAGES.duration()
    }
}

impl Default for LaserSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_points_sit_before_target() {
        let shot = LaserShot::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(shot.light_point, Vec3::new(0.0, 0.0, -9.5));
        assert_eq!(shot.pointer_point, Vec3::new(0.0, 0.0, -8.0));
    }

    #[test]
    fn beam_is_dark_before_first_flash() {
        let mut laser = LaserSequencer::new();
        laser.fire(Vec3::ZERO, Vec3::NEG_Z);
        laser.update(1.0);
        assert!(!laser.frame().beam_visible);
        assert_eq!(laser.frame().pointer_intensity, POINTER_INTENSITY);
    }

    #[test]
    fn sustained_beam_lights_up() {
        let mut laser = LaserSequencer::new();
        laser.fire(Vec3::ZERO, Vec3::NEG_Z);
        laser.update(3.0);
        let frame = laser.frame();
        assert!(frame.beam_visible);
        assert_eq!(frame.light_intensity, BEAM_LIGHT_INTENSITY);
        assert!(frame.light_range >= 10.0 && frame.light_range < 11.0);
    }

    #[test]
    fn idle_update_is_noop() {
        let mut laser = LaserSequencer::new();
        assert!(laser.update(10.0).is_none());
        assert_eq!(laser.state(), LaserState::Idle);
    }
}
