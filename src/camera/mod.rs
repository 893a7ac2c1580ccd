//! Security cameras: a pan/tilt body on a patrol cycle carrying a spotlight
//! whose outer cone is what decoys hide from.

mod light;
mod mode;
mod patrol;

pub use light::{LightRig, LightState, LightTransition, INNER_ON, OUTER_ON};
pub use mode::{CameraMode, DisturbStage, Effect, FireStage, ModeEvent, Transition};
pub use patrol::{Patrol, PatrolSchedule, SegmentKind, Waypoint};

use glam::{Mat4, Vec3};
use log::{debug, trace};

use crate::core::{LightCone, LightView};
use crate::math::Pose;
use crate::traits::AudioSink;

/// Inner cone half-angle relative to the outer cone
pub const INNER_CONE_RATIO: f32 = 0.75;
pub const DEFAULT_LIGHT_OFFSET: Vec3 = Vec3::new(0.0, -0.3, 0.0);
/// Laser muzzle, in the light's frame
const MUZZLE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -0.1);

#[derive(Debug, Clone)]
pub struct SecurityCamera {
    name: String,
    position: Vec3,
    light_offset: Vec3,
    outer: LightCone,
    inner: LightCone,
    patrol: Patrol,
    light: LightRig,
    mode: CameraMode,
    pov: bool,
    panning: bool,
}

impl SecurityCamera {
    /// Starts `Offline`: frozen at phase 0 with the light off
    pub fn new(name: impl Into<String>, position: Vec3, light_offset: Vec3, schedule: PatrolSchedule, cone: LightCone) -> Self {
        let mut patrol = Patrol::new(schedule);
        patrol.set_moving(false);

        Self {
            name: name.into(),
            position,
            light_offset,
            outer: cone,
            inner: LightCone {
                half_angle: cone.half_angle * INNER_CONE_RATIO,
                ..cone
            },
            patrol,
            light: LightRig::new(false),
            mode: CameraMode::Offline,
            pov: false,
            panning: false,
        }
    }

    /// Advance patrol and light. Returns the light transition that finished
    /// this tick, if any.
    pub fn update(&mut self, delta: f32, audio: &mut dyn AudioSink) -> Option<LightTransition> {
        self.patrol.advance(delta);

        if self.pov {
            let panning = self.patrol.is_moving() && self.patrol.segment() == SegmentKind::Move;
            if panning != self.panning {
                if panning {
                    audio.camera_motor_on();
                } else {
                    audio.camera_motor_off();
                    audio.camera_stop();
                }
                self.panning = panning;
            }
        }

        self.light.update(delta)
    }

    /// Freeze or resume the patrol. Halting mid-pan stops the motor.
    pub fn set_moving(&mut self, moving: bool, audio: &mut dyn AudioSink) {
        self.patrol.set_moving(moving);
        if !moving && self.panning {
            audio.camera_motor_off();
            audio.camera_stop();
            self.panning = false;
        }
    }

    /// Feed an event to the mode machine and apply the camera's own effects.
    /// Returns every effect of the transition, or `None` if it was rejected.
    pub fn dispatch(&mut self, event: ModeEvent, audio: &mut dyn AudioSink) -> Option<&'static [Effect]> {
        let Some(transition) = self.mode.on(event) else {
            trace!("camera {} ignored {:?} while {:?}", self.name, event, self.mode);
            return None;
        };

        debug!("camera {}: {:?} --{:?}--> {:?}", self.name, self.mode, event, transition.to);
        self.mode = transition.to;

        for effect in transition.effects {
            match effect {
                Effect::FreezePatrol => self.set_moving(false, audio),
                Effect::ResumePatrol => self.set_moving(true, audio),
                Effect::LightOn => {
                    self.light.light_on();
                }
                Effect::LightOff => {
                    self.light.light_off();
                }
                Effect::LightSnapOn => self.light.force(true),
                Effect::LightForceOff => self.light.force(false),
                _ => {}
            }
        }

        Some(transition.effects)
    }

    /// Make this the point-of-view camera or release it
    pub fn set_pov(&mut self, pov: bool, audio: &mut dyn AudioSink) {
        if !pov && self.panning {
            audio.camera_motor_off();
        }
        self.pov = pov;
        self.panning = false;
    }

    /// Rewind to phase 0, offline and dark
    pub fn reset(&mut self) {
        self.patrol.reset();
        self.patrol.set_moving(false);
        self.light.force(false);
        self.mode = CameraMode::Offline;
        self.panning = false;
    }

    /// Fire needs a patrolling or aiming camera with a steady light
    pub fn can_fire(&self) -> bool {
        matches!(self.mode, CameraMode::Patrolling | CameraMode::Aiming) && !self.light.is_animating()
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.patrol.current().orientation())
    }

    pub fn light_pose(&self) -> Pose {
        self.pose().child(self.light_offset)
    }

    pub fn light_world(&self) -> Mat4 {
        self.light_pose().matrix()
    }

    /// Outer cone as seen this tick; dark when the light is off
    pub fn light_view(&self) -> LightView {
        LightView::new(&self.light_world(), self.outer_cone())
    }

    pub fn outer_cone(&self) -> LightCone {
        self.outer.with_intensity(self.light.outer_intensity())
    }

    pub fn inner_cone(&self) -> LightCone {
        self.inner.with_intensity(self.light.inner_intensity())
    }

    /// Laser origin, just ahead of the light
    pub fn muzzle(&self) -> Vec3 {
        self.light_pose().child(MUZZLE_OFFSET).position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn patrol(&self) -> &Patrol {
        &self.patrol
    }

    pub fn light(&self) -> &LightRig {
        &self.light
    }

    pub fn is_animating(&self) -> bool {
        self.light.is_animating()
    }

    pub fn is_pov(&self) -> bool {
        self.pov
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }
}
