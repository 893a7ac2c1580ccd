use log::{debug, trace};

use super::{Level, LevelState, PendingShot};
use crate::camera::{CameraMode, ModeEvent};
use crate::core::InteractableId;
use crate::math::ray_hit_box;
use crate::traits::Collaborators;

impl Level {
    /// Player starts aiming through the point-of-view camera: patrol and decoys freeze
    pub fn begin_aim(&mut self, io: &mut Collaborators) -> bool {
        if self.state != LevelState::Playing {
            return false;
        }
        self.dispatch(self.pov, ModeEvent::AimStart, io)
    }

    pub fn end_aim(&mut self, io: &mut Collaborators) -> bool {
        if self.state != LevelState::Playing {
            return false;
        }
        self.dispatch(self.pov, ModeEvent::AimEnd, io)
    }

    /// Shoot at `target` from the point-of-view camera. The light powers down,
    /// the laser plays, and the shot is scored when the sequence completes.
    /// Returns false (and changes nothing) when a shot cannot start now.
    pub fn fire(&mut self, target: InteractableId, io: &mut Collaborators) -> bool {
        if self.state != LevelState::Playing {
            trace!("fire ignored: level is {:?}", self.state);
            return false;
        }
        if self.laser.is_firing() || self.pending.is_some() {
            trace!("fire ignored: shot already in flight");
            return false;
        }

        let Some(object) = self.interactables.get(target.0) else {
            trace!("fire ignored: no object {:?}", target);
            return false;
        };
        if !object.is_visible() || object.is_destroyed() {
            trace!("fire ignored: {} is not visible", object.name());
            return false;
        }

        let camera = &self.cameras[self.pov];
        if !camera.can_fire() {
            trace!("fire ignored: camera {} busy in {:?}", camera.name(), camera.mode());
            return false;
        }

        let source = camera.muzzle();
        let center = object.world_center();
        let direction = (center - source).normalize_or_zero();
        let hit = io
            .scene
            .raycast(source, direction, target)
            .or_else(|| ray_hit_box(source, direction, object.bounds(), object.world()))
            .unwrap_or(center);

        debug!("firing at {} from camera {}", object.name(), camera.name());
        self.pending = Some(PendingShot {
            target,
            camera: self.pov,
            source,
            hit,
        });

        if !self.dispatch(self.pov, ModeEvent::Fire, io) {
            self.pending = None;
            return false;
        }
        true
    }

    /// Make `index` the point-of-view camera. Refused while the current camera
    /// is firing, disturbed or still switching; an aiming camera is released first.
    pub fn switch_camera(&mut self, index: usize, io: &mut Collaborators) -> bool {
        if self.state != LevelState::Playing || index == self.pov || index >= self.cameras.len() {
            return false;
        }

        let current = self.cameras[self.pov].mode();
        if current.is_busy() || self.laser.is_firing() {
            trace!("switch ignored: camera {} is {:?}", self.cameras[self.pov].name(), current);
            return false;
        }
        if self.cameras[index].mode() != CameraMode::Patrolling {
            trace!("switch ignored: camera {} is {:?}", self.cameras[index].name(), self.cameras[index].mode());
            return false;
        }

        if current == CameraMode::Aiming {
            self.dispatch(self.pov, ModeEvent::AimEnd, io);
        }

        self.cameras[self.pov].set_pov(false, io.audio);
        self.pov = index;
        self.cameras[index].set_pov(true, io.audio);
        debug!("point of view -> camera {}", self.cameras[index].name());

        self.dispatch(index, ModeEvent::SwitchIn, io)
    }

    /// Switch to the next camera in order, wrapping around
    pub fn cycle_camera(&mut self, io: &mut Collaborators) -> bool {
        let next = (self.pov + 1) % self.cameras.len();
        self.switch_camera(next, io)
    }
}
