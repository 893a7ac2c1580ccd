//! Spotlight illumination queries.
//!
//! Every tracked box is tested against the point-of-view camera's outer
//! light cone once per tick. The production path projects the box into
//! light space, normalises depth so the cone becomes a fixed circle, and
//! tests the 12 box edges against that circle. A box that encloses the
//! whole cross-section without any edge crossing it is reported dark.

use anyhow::{ensure, Result};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{
    box_cone_intersection, line_circle_intersection, scene_to_view, view_to_clip, ConeShape, AABB,
    BOX_EDGES,
};

/// Spotlight cone. `intensity > 0` means the light is on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightCone {
    pub half_angle: f32,
    pub near: f32,
    pub far: f32,
    pub intensity: f32,
}

impl LightCone {
    pub fn new(half_angle: f32, near: f32, far: f32) -> Result<Self> {
        ensure!(
            half_angle > 0.0 && half_angle < std::f32::consts::FRAC_PI_2,
            "light half-angle {} must lie in (0, pi/2)",
            half_angle
        );
        ensure!(near > 0.0, "light near distance {} must be positive", near);
        ensure!(near < far, "light near {} must be less than far {}", near, far);

        Ok(Self {
            half_angle,
            near,
            far,
            intensity: 0.0,
        })
    }

    pub fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }

    pub fn is_on(&self) -> bool {
        self.intensity > 0.0
    }

    /// Radius of the cone's cross-section at the near plane
    pub fn clip_radius(&self) -> f32 {
        self.near * self.half_angle.tan()
    }
}

/// Which box/cone test to run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationMethod {
    #[default]
    ProjectedCircle,
    Analytic,
}

/// One light's view of the scene, built once per tick and shared by all queries
#[derive(Copy, Clone, Debug)]
pub struct LightView {
    cone: LightCone,
    scene_to_view: Mat4,
    view_to_clip: Mat4,
    radius: f32,
}

impl LightView {
    pub fn new(light_world: &Mat4, cone: LightCone) -> Self {
        Self {
            cone,
            scene_to_view: scene_to_view(light_world),
            view_to_clip: view_to_clip(cone.near),
            radius: cone.clip_radius(),
        }
    }

    pub fn cone(&self) -> &LightCone {
        &self.cone
    }

    /// World point in light space (+Z in front of the light)
    pub fn to_light_space(&self, point: Vec3) -> Vec3 {
        self.scene_to_view.transform_point3(point)
    }

    pub fn illuminates_with(&self, method: ObservationMethod, bounds: &AABB, world: &Mat4) -> bool {
        match method {
            ObservationMethod::ProjectedCircle => self.illuminates(bounds, world),
            ObservationMethod::Analytic => self.illuminates_analytic(bounds, world),
        }
    }

    /// Projected-circle test
    pub fn illuminates(&self, bounds: &AABB, world: &Mat4) -> bool {
        let Some(corners) = self.corners_in_front(bounds, world) else {
            return false;
        };

        let projected = corners.map(|c| self.view_to_clip.project_point3(c).truncate());

        BOX_EDGES.iter().any(|&(a, b)| {
            let start = projected[a];
            line_circle_intersection(start, projected[b] - start, self.radius)
        })
    }

    /// Exact plane/line-cone test, honouring near and far
    pub fn illuminates_analytic(&self, bounds: &AABB, world: &Mat4) -> bool {
        let Some(corners) = self.corners_in_front(bounds, world) else {
            return false;
        };

        let shape = ConeShape::new(self.cone.half_angle, self.cone.near, self.cone.far);
        box_cone_intersection(&corners, &shape)
    }

    /// Light-space corners, or `None` when the light is off or any corner is
    /// behind the light. Corners on the light plane cannot be projected and
    /// count as behind.
    fn corners_in_front(&self, bounds: &AABB, world: &Mat4) -> Option<[Vec3; 8]> {
        if !self.cone.is_on() {
            return None;
        }

        let corners = bounds.transformed_corners(&(self.scene_to_view * *world));
        corners.iter().all(|c| c.z > 0.0).then_some(corners)
    }
}

/// One-off query: is the box lit by the light at `light_world`?
pub fn is_illuminated(bounds: &AABB, world: &Mat4, light_world: &Mat4, cone: &LightCone) -> bool {
    if !cone.is_on() {
        return false;
    }
    LightView::new(light_world, *cone).illuminates(bounds, world)
}
