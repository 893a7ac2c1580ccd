//! Demo module provides builders for assembling level descriptions in code
//!
//! # Examples
//!
//! ```
//! use quantum_cams::demo::*;
//!
//! let level = LevelBuilder::new("courtyard")
//!     .add_camera(camera_at([0.0, 8.0, 0.0], &[[10.0, -5.0], [10.0, -90.0]]))
//!     .add_ring(0, 5, 20.0, 5.0, 2.5)
//!     .build();
//! assert_eq!(level.objects.len(), 5);
//! ```

use glam::Vec3;
use std::f32::consts::PI;

use crate::core::{DisturbanceTiming, ObservationMethod};
use crate::loaders::{CameraDesc, LevelDesc, ObjectDesc};

// ============================================================================
// Primitive Generators - Create common objects
// ============================================================================

/// A box of edge `size` centred on the object's origin
pub fn cube(name: impl Into<String>, group: Option<usize>, position: Vec3, size: f32, yaw: f32) -> ObjectDesc {
    ObjectDesc {
        name: name.into(),
        group,
        position: position.to_array(),
        rotation: [0.0, yaw, 0.0],
        scale: [1.0; 3],
        min: [-size * 0.5; 3],
        max: [size * 0.5; 3],
    }
}

/// Decoys evenly spaced on a circle around the origin, each turned a little further
pub fn ring(group: usize, count: usize, distance: f32, size: f32, height: f32) -> Vec<ObjectDesc> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * 2.0 * PI / count as f32;
            let position = Vec3::new(distance * angle.sin(), height, -distance * angle.cos());
            let yaw = -(i as f32) * PI * PI / count as f32 + 1.0;
            cube(format!("Q-{}-{}", group, i), Some(group), position, size, yaw)
        })
        .collect()
}

/// Camera with the shipped defaults: 15 degree half-angle, slow pan, short pause
pub fn camera_at(position: [f32; 3], waypoints: &[[f32; 2]]) -> CameraDesc {
    CameraDesc {
        name: String::new(),
        position,
        waypoints: waypoints.to_vec(),
        rotation_speed: PI / 24.0,
        half_angle: PI / 12.0,
        pause: 0.7,
        near: 1.0,
        far: 1000.0,
        light_offset: [0.0, -0.3, 0.0],
    }
}

// ============================================================================
// Level Builder - Fluent API for composing levels
// ============================================================================

pub struct LevelBuilder {
    desc: LevelDesc,
}

impl LevelBuilder {
    /// Start from the shipped defaults with no cameras or objects
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            desc: LevelDesc {
                name: name.into(),
                time_limit: 180.0,
                lives: 3,
                switch_static: 1.4,
                disturbance: Some(DisturbanceTiming::default()),
                observation: ObservationMethod::default(),
                cameras: Vec::new(),
                objects: Vec::new(),
            },
        }
    }

    pub fn time_limit(mut self, seconds: f32) -> Self {
        self.desc.time_limit = seconds;
        self
    }

    pub fn lives(mut self, lives: u32) -> Self {
        self.desc.lives = lives;
        self
    }

    pub fn disturbance(mut self, timing: Option<DisturbanceTiming>) -> Self {
        self.desc.disturbance = timing;
        self
    }

    pub fn observation(mut self, method: ObservationMethod) -> Self {
        self.desc.observation = method;
        self
    }

    pub fn add_camera(mut self, camera: CameraDesc) -> Self {
        self.desc.cameras.push(camera);
        self
    }

    pub fn add_object(mut self, object: ObjectDesc) -> Self {
        self.desc.objects.push(object);
        self
    }

    pub fn add_ring(mut self, group: usize, count: usize, distance: f32, size: f32, height: f32) -> Self {
        self.desc.objects.extend(ring(group, count, distance, size, height));
        self
    }

    pub fn add_prop(self, name: impl Into<String>, position: Vec3, size: f32) -> Self {
        self.add_object(cube(name, None, position, size, 0.0))
    }

    pub fn build(self) -> LevelDesc {
        self.desc
    }
}

// ============================================================================
// Preset Levels
// ============================================================================

/// Built-in level: a ring of five large decoys, a second group of crates
/// and a few props, watched by two patrolling cameras
pub fn demo_level() -> LevelDesc {
    LevelBuilder::new("demo")
        .add_camera(CameraDesc {
            name: "north".into(),
            ..camera_at([0.0, 8.0, 0.0], &[[10.0, -5.0], [10.0, -90.0], [35.0, -90.0], [35.0, -5.0]])
        })
        .add_camera(CameraDesc {
            name: "south".into(),
            ..camera_at([2.0, 8.0, 2.0], &[[10.0, -120.0], [10.0, -180.0], [45.0, -180.0], [45.0, -120.0]])
        })
        .add_ring(0, 5, 20.0, 5.0, 2.5)
        .add_object(cube("crate-a", Some(1), Vec3::new(12.0, 0.75, 6.0), 1.5, 0.3))
        .add_object(cube("crate-b", Some(1), Vec3::new(6.0, 0.75, 12.0), 1.5, -0.4))
        .add_object(cube("crate-c", Some(1), Vec3::new(-4.0, 0.75, 12.0), 1.5, 1.1))
        .add_prop("barrel", Vec3::new(8.0, 0.5, -8.0), 1.0)
        .add_prop("locker", Vec3::new(-10.0, 1.0, 4.0), 2.0)
        .build()
}
