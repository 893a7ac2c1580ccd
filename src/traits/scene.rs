use glam::{Mat4, Vec3};

use crate::core::{InteractableId, LaserFrame, LaserShot};

/// Renderer side of the simulation. Receives state pushes; the only query
/// back is a ray test against real geometry.
pub trait SceneSink {
    /// Show or hide an interactable
    fn set_visible(&mut self, id: InteractableId, visible: bool);

    /// Move a camera body and its light
    fn set_camera_pose(&mut self, camera: usize, body: Mat4, light: Mat4);

    /// Outer and inner cone intensity of a camera light
    fn set_light_intensity(&mut self, camera: usize, outer: f32, inner: f32);

    /// Laser visuals; `shot` is `None` when idle
    fn set_laser(&mut self, shot: Option<&LaserShot>, frame: LaserFrame);

    /// First hit of a ray against `target`'s mesh, if the renderer has one
    fn raycast(&mut self, _origin: Vec3, _direction: Vec3, _target: InteractableId) -> Option<Vec3> {
        None
    }
}

/// Scene sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScene;

impl SceneSink for NullScene {
    fn set_visible(&mut self, _id: InteractableId, _visible: bool) {}

    fn set_camera_pose(&mut self, _camera: usize, _body: Mat4, _light: Mat4) {}

    fn set_light_intensity(&mut self, _camera: usize, _outer: f32, _inner: f32) {}

    fn set_laser(&mut self, _shot: Option<&LaserShot>, _frame: LaserFrame) {}
}
