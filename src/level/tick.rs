use log::{debug, info, trace};

use super::{Level, LevelState};
use crate::camera::{CameraMode, DisturbStage, Effect, LightTransition, ModeEvent};
use crate::core::InteractableId;
use crate::traits::Collaborators;

impl Level {
    /// Advance the whole level by `delta` seconds.
    ///
    /// Observation runs first, against the light as it stood at the end of
    /// the previous tick. Completions fire in the tick their time is crossed.
    pub fn tick(&mut self, delta: f32, io: &mut Collaborators) {
        if self.state == LevelState::Standby {
            return;
        }

        let view = self.cameras[self.pov].light_view();
        for object in &mut self.interactables {
            object.observe(Some(&view), self.method);
        }

        if self.state == LevelState::Playing {
            for group in &mut self.groups {
                group.update(&mut self.interactables, &mut self.rng);
            }
        }

        // Sequences started by a light completion below begin at zero next tick
        let was_firing = self.laser.is_firing();
        let was_listening = self.listen_timer.is_active();

        for i in 0..self.cameras.len() {
            if let Some(done) = self.cameras[i].update(delta, io.audio) {
                let event = match done {
                    LightTransition::Off => ModeEvent::LightOffDone,
                    LightTransition::On => ModeEvent::LightOnDone,
                };
                self.dispatch(i, event, io);
            }
        }

        if was_firing && self.laser.update(delta).is_some() {
            if let Some(shot) = self.pending.take() {
                self.resolve_shot(shot.target, io);
                self.dispatch(shot.camera, ModeEvent::BeamDone, io);
            }
        }

        if was_listening && self.listen_timer.tick(delta) {
            self.dispatch(self.pov, ModeEvent::ListenDone, io);
        }
        if self.static_timer.tick(delta) {
            self.dispatch(self.pov, ModeEvent::SwitchSettled, io);
        }

        if self.state == LevelState::Playing {
            let due = self.disturbances.as_mut().map_or(false, |d| d.update(delta));
            if due && self.cameras[self.pov].mode() == CameraMode::Patrolling {
                debug!("disturbance on camera {}", self.cameras[self.pov].name());
                self.dispatch(self.pov, ModeEvent::Disturb, io);
            }

            if self.countdown.tick(delta) {
                info!("level {:?} failed: time is up", self.name);
                self.state = LevelState::Failed;
                io.score.timer_expired();
            }
        }

        self.sync_scene(io);
    }

    /// Route a mode event to camera `index` and carry out the level-side
    /// effects. Returns whether the camera accepted it.
    pub(super) fn dispatch(&mut self, index: usize, event: ModeEvent, io: &mut Collaborators) -> bool {
        let before = self.cameras[index].mode();
        let Some(effects) = self.cameras[index].dispatch(event, io.audio) else {
            return false;
        };

        for effect in effects {
            match effect {
                Effect::FreezeDecoys => self.groups.iter_mut().for_each(|g| g.set_moving(false)),
                Effect::ResumeDecoys => self.groups.iter_mut().for_each(|g| g.set_moving(true)),
                Effect::StartLaser => {
                    if let Some(shot) = self.pending {
                        self.laser.fire(shot.source, shot.hit);
                        io.audio.laser_fire();
                    }
                }
                Effect::PlayDisturbance => {
                    let length = io.audio.disturbance().max(0.0);
                    trace!("disturbance clip lasts {:.2}s", length);
                    self.listen_timer.start_with(length);
                }
                Effect::StaticOn => {
                    io.audio.static_noise(true);
                    self.static_timer.start_with(self.rules.switch_static);
                }
                Effect::StaticOff => io.audio.static_noise(false),
                _ => {}
            }
        }

        if before == CameraMode::Disturbed(DisturbStage::LightOn) && event == ModeEvent::LightOnDone {
            if let Some(disturbances) = self.disturbances.as_mut() {
                disturbances.rearm(&mut self.rng);
            }
        }

        true
    }

    /// Score a completed shot. Only counts while the level is still in play.
    fn resolve_shot(&mut self, target: InteractableId, io: &mut Collaborators) {
        if self.state != LevelState::Playing {
            trace!("shot at {:?} landed after play ended", target);
            return;
        }

        let group = self.interactables[target.0]
            .group()
            .and_then(|id| self.groups.iter().position(|g| g.id() == id))
            .filter(|&g| self.groups[g].is_active() && self.groups[g].active_member() == target);

        if let Some(g) = group {
            let id = self.groups[g].id();
            self.groups[g].set_active(false, &mut self.interactables);
            debug!("decoy group {} taken down", id);
            io.score.shot_hit_decoy(id);

            if self.groups.iter().all(|g| !g.is_active()) {
                info!("level {:?} cleared", self.name);
                self.state = LevelState::Cleared;
                io.score.level_cleared();
            }
            return;
        }

        let object = &mut self.interactables[target.0];
        if !object.is_decoy() {
            object.destroy();
        }
        self.lives = self.lives.saturating_sub(1);
        debug!("wrong target {}, {} lives left", object.name(), self.lives);
        io.score.shot_hit_wrong_target(self.lives);

        if self.lives == 0 {
            info!("level {:?} failed: out of lives", self.name);
            self.state = LevelState::Failed;
            io.score.lives_exhausted();
        }
    }

    /// Push visibility changes, camera poses, light intensities and laser state
    pub(super) fn sync_scene(&mut self, io: &mut Collaborators) {
        for (i, object) in self.interactables.iter_mut().enumerate() {
            if let Some(visible) = object.take_visibility_change() {
                io.scene.set_visible(InteractableId(i), visible);
            }
        }

        for (i, camera) in self.cameras.iter().enumerate() {
            io.scene.set_camera_pose(i, camera.pose().matrix(), camera.light_world());
            let light = camera.light();
            io.scene.set_light_intensity(i, light.outer_intensity(), light.inner_intensity());
        }

        io.scene.set_laser(self.laser.shot(), self.laser.frame());
    }
}
