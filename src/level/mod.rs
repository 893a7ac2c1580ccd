//! A loaded level: every camera, interactable and decoy group plus the laser,
//! advanced together by [`Level::tick`].

mod actions;
mod tick;

use anyhow::{ensure, Context, Result};
use glam::{Mat4, Vec3};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

use crate::camera::{ModeEvent, PatrolSchedule, SecurityCamera, Waypoint};
use crate::core::{
    Countdown, DecoyGroup, DisturbanceSchedule, Interactable, InteractableId, LaserSequencer, LightCone,
    ObservationMethod,
};
use crate::loaders::{CameraDesc, LevelDesc, ObjectDesc};
use crate::math::{quat_from_euler, AABB};
use crate::traits::Collaborators;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LevelState {
    /// Loaded but not entered
    Standby,
    Playing,
    Cleared,
    Failed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LevelRules {
    pub time_limit: f32,
    pub lives: u32,
    pub switch_static: f32,
}

/// Shot in flight, resolved when the laser sequence completes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingShot {
    pub target: InteractableId,
    pub camera: usize,
    pub source: Vec3,
    pub hit: Vec3,
}

pub struct Level {
    name: String,
    cameras: Vec<SecurityCamera>,
    interactables: Vec<Interactable>,
    groups: Vec<DecoyGroup>,
    laser: LaserSequencer,
    pov: usize,
    state: LevelState,
    rules: LevelRules,
    countdown: Countdown,
    lives: u32,
    pending: Option<PendingShot>,
    static_timer: Countdown,
    listen_timer: Countdown,
    disturbances: Option<DisturbanceSchedule>,
    method: ObservationMethod,
    rng: StdRng,
}

impl Level {
    /// Validate and build a level. Decoy groups start hidden until [`Level::enter`].
    pub fn from_desc(desc: &LevelDesc, seed: u64) -> Result<Self> {
        ensure!(!desc.cameras.is_empty(), "level {:?} has no cameras", desc.name);
        ensure!(desc.time_limit > 0.0, "time limit {} must be positive", desc.time_limit);
        ensure!(desc.lives > 0, "level {:?} starts with no lives", desc.name);
        ensure!(desc.switch_static >= 0.0, "switch static {} must not be negative", desc.switch_static);

        let cameras = desc
            .cameras
            .iter()
            .enumerate()
            .map(|(i, c)| build_camera(i, c))
            .collect::<Result<Vec<_>>>()?;

        let mut interactables = desc.objects.iter().map(build_object).collect::<Result<Vec<_>>>()?;

        let mut members: BTreeMap<usize, Vec<InteractableId>> = BTreeMap::new();
        for (i, object) in interactables.iter().enumerate() {
            if let Some(group) = object.group() {
                members.entry(group).or_default().push(InteractableId(i));
            }
        }

        let mut groups = Vec::with_capacity(members.len());
        for (id, ids) in members {
            let mut group = DecoyGroup::new(id, ids, &mut interactables)?;
            group.set_active(false, &mut interactables);
            groups.push(group);
        }

        let disturbances = desc.disturbance.map(DisturbanceSchedule::new).transpose()?;

        info!(
            "loaded level {:?}: {} cameras, {} objects, {} decoy groups",
            desc.name,
            cameras.len(),
            interactables.len(),
            groups.len()
        );

        Ok(Self {
            name: desc.name.clone(),
            cameras,
            interactables,
            groups,
            laser: LaserSequencer::new(),
            pov: 0,
            state: LevelState::Standby,
            rules: LevelRules {
                time_limit: desc.time_limit,
                lives: desc.lives,
                switch_static: desc.switch_static,
            },
            countdown: Countdown::new(desc.time_limit),
            lives: desc.lives,
            pending: None,
            static_timer: Countdown::new(desc.switch_static),
            listen_timer: Countdown::new(0.0),
            disturbances,
            method: desc.observation,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Start (or restart) play: rewind cameras and power them on, restore
    /// destroyed props, show member 0 of every group.
    pub fn enter(&mut self, io: &mut Collaborators) {
        self.laser = LaserSequencer::new();
        self.pending = None;
        if self.static_timer.is_active() {
            io.audio.static_noise(false);
        }
        self.static_timer.stop();
        self.listen_timer.stop();

        for object in &mut self.interactables {
            object.restore();
        }
        for group in &mut self.groups {
            group.set_active(true, &mut self.interactables);
        }

        for (i, camera) in self.cameras.iter_mut().enumerate() {
            camera.set_pov(false, io.audio);
            camera.reset();
            camera.set_pov(i == self.pov, io.audio);
        }
        for i in 0..self.cameras.len() {
            self.dispatch(i, ModeEvent::Activate, io);
        }

        if let Some(disturbances) = self.disturbances.as_mut() {
            disturbances.rearm(&mut self.rng);
        }

        self.lives = self.rules.lives;
        self.countdown.start_with(self.rules.time_limit);
        self.state = LevelState::Playing;
        info!("entered level {:?}", self.name);

        self.sync_scene(io);
    }

    /// Power every camera down, hide decoys and return to standby
    pub fn exit(&mut self, io: &mut Collaborators) {
        if self.static_timer.is_active() {
            io.audio.static_noise(false);
        }
        self.static_timer.stop();
        self.listen_timer.stop();
        self.laser = LaserSequencer::new();
        self.pending = None;

        for i in 0..self.cameras.len() {
            self.dispatch(i, ModeEvent::Deactivate, io);
        }
        for camera in &mut self.cameras {
            camera.set_pov(false, io.audio);
        }
        for group in &mut self.groups {
            group.set_active(false, &mut self.interactables);
        }

        self.countdown.stop();
        self.state = LevelState::Standby;
        info!("exited level {:?}", self.name);

        self.sync_scene(io);
    }

    /// Override the level's box/cone test
    pub fn set_observation_method(&mut self, method: ObservationMethod) {
        self.method = method;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    pub fn rules(&self) -> LevelRules {
        self.rules
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn time_remaining(&self) -> f32 {
        self.countdown.remaining()
    }

    pub fn observation_method(&self) -> ObservationMethod {
        self.method
    }

    pub fn cameras(&self) -> &[SecurityCamera] {
        &self.cameras
    }

    pub fn pov(&self) -> usize {
        self.pov
    }

    pub fn pov_camera(&self) -> &SecurityCamera {
        &self.cameras[self.pov]
    }

    pub fn interactables(&self) -> &[Interactable] {
        &self.interactables
    }

    pub fn interactable(&self, id: InteractableId) -> Option<&Interactable> {
        self.interactables.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<InteractableId> {
        self.interactables.iter().position(|o| o.name() == name).map(InteractableId)
    }

    pub fn groups(&self) -> &[DecoyGroup] {
        &self.groups
    }

    pub fn group(&self, id: usize) -> Option<&DecoyGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Visible decoy of the lowest-numbered group still standing
    pub fn next_target(&self) -> Option<InteractableId> {
        self.groups.iter().find(|g| g.is_active()).map(|g| g.active_member())
    }

    pub fn laser(&self) -> &LaserSequencer {
        &self.laser
    }

    pub fn pending_shot(&self) -> Option<&PendingShot> {
        self.pending.as_ref()
    }

    pub fn disturbances(&self) -> Option<&DisturbanceSchedule> {
        self.disturbances.as_ref()
    }
}

fn build_camera(index: usize, desc: &CameraDesc) -> Result<SecurityCamera> {
    let name = if desc.name.is_empty() {
        format!("camera-{}", index)
    } else {
        desc.name.clone()
    };

    let waypoints: Vec<Waypoint> = desc.waypoints.iter().map(|[p, y]| Waypoint::from_degrees(*p, *y)).collect();
    let schedule = PatrolSchedule::new(&waypoints, desc.rotation_speed, desc.pause)
        .with_context(|| format!("Invalid patrol for camera {:?}", name))?;
    let cone = LightCone::new(desc.half_angle, desc.near, desc.far)
        .with_context(|| format!("Invalid light for camera {:?}", name))?;

    Ok(SecurityCamera::new(
        name,
        Vec3::from(desc.position),
        Vec3::from(desc.light_offset),
        schedule,
        cone,
    ))
}

fn build_object(desc: &ObjectDesc) -> Result<Interactable> {
    let bounds = AABB::new(Vec3::from(desc.min), Vec3::from(desc.max));
    ensure!(
        bounds.is_valid(),
        "object {:?} has inverted bounds {:?}..{:?}",
        desc.name,
        desc.min,
        desc.max
    );

    let world = Mat4::from_scale_rotation_translation(
        Vec3::from(desc.scale),
        quat_from_euler(Vec3::from(desc.rotation)),
        Vec3::from(desc.position),
    );

    Ok(Interactable::new(desc.name.clone(), bounds, world, desc.group))
}
