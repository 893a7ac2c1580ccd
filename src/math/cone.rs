//! Analytic segment/face/box tests against a light cone in light space.
//!
//! Light space has the apex at the origin and the axis along +Z. The cone
//! is `x^2 + y^2 = (z * tan θ)^2`, clipped to `near <= z <= far`. This solver
//! is exact for faces but costs roughly four times the projected-circle test.

use glam::Vec3;

use super::aabb::BOX_FACES;

const EPSILON: f32 = 1e-9;

/// Cone parameters in light space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConeShape {
    pub tan_half_angle: f32,
    pub near: f32,
    pub far: f32,
}

impl ConeShape {
    pub fn new(half_angle: f32, near: f32, far: f32) -> Self {
        Self {
            tan_half_angle: half_angle.tan(),
            near,
            far,
        }
    }

    fn in_depth(&self, z: f32) -> bool {
        z >= self.near && z <= self.far
    }

    /// Point inside the solid cone, depth-clipped
    pub fn contains(&self, point: Vec3) -> bool {
        if !self.in_depth(point.z) {
            return false;
        }
        let r = point.z * self.tan_half_angle;
        point.x * point.x + point.y * point.y <= r * r
    }
}

/// Does the segment `p .. p + u` cross the cone surface within the depth range?
pub fn line_cone_intersection(p: Vec3, u: Vec3, cone: &ConeShape) -> bool {
    let tan_sq = cone.tan_half_angle * cone.tan_half_angle;

    let a = u.x * u.x + u.y * u.y - u.z * u.z * tan_sq;
    let b = 2.0 * (p.x * u.x + p.y * u.y - p.z * u.z * tan_sq);
    let c = p.x * p.x + p.y * p.y - p.z * p.z * tan_sq;

    let hit = |t: f32| (0.0..=1.0).contains(&t) && cone.in_depth(p.z + t * u.z);

    if a.abs() > EPSILON {
        let delta = b * b - 4.0 * a * c;
        if delta < 0.0 {
            return false;
        }
        let sqrt_delta = delta.sqrt();
        hit((-b + sqrt_delta) / (2.0 * a)) || hit((-b - sqrt_delta) / (2.0 * a))
    } else if b.abs() > EPSILON {
        hit(-c / b)
    } else {
        c.abs() <= EPSILON
    }
}

/// Does the parallelogram `p + s*u + t*v` (`s, t ∈ [0, 1]`) meet the cone?
pub fn face_cone_intersection(p: Vec3, u: Vec3, v: Vec3, cone: &ConeShape) -> bool {
    let edges_hit = line_cone_intersection(p, u, cone)
        || line_cone_intersection(p + v, u, cone)
        || line_cone_intersection(p, v, cone)
        || line_cone_intersection(p + u, v, cone);

    if edges_hit {
        return true;
    }

    // Face entirely inside the cone
    if cone.contains(p + (u + v) * 0.5) {
        return true;
    }

    // Cone entirely inside the face: the axis must pierce it within depth
    let n = u.cross(v);
    if n.z.abs() <= EPSILON {
        return false;
    }

    let d = -n.dot(p);
    let m = Vec3::new(0.0, 0.0, -d / n.z);
    let mp = m - p;

    let s = (mp.y * v.x - mp.x * v.y) / (u.y * v.x - u.x * v.y);
    let t = (mp.y * u.x - mp.x * u.y) / (v.y * u.x - v.x * u.y);

    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) && cone.in_depth(m.z)
}

/// Six-face box test on corners already in light space (see [`super::AABB::corners`])
pub fn box_cone_intersection(corners: &[Vec3; 8], cone: &ConeShape) -> bool {
    BOX_FACES.iter().any(|&(p, u, v)| {
        let base = corners[p];
        face_cone_intersection(base, corners[u] - base, corners[v] - base, cone)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AABB;
    use glam::Mat4;

    fn cone() -> ConeShape {
        ConeShape::new(30f32.to_radians(), 1.0, 100.0)
    }

    #[test]
    fn segment_crossing_axis_hits() {
        let p = Vec3::new(-5.0, 0.0, 5.0);
        assert!(line_cone_intersection(p, Vec3::new(10.0, 0.0, 0.0), &cone()));
    }

    #[test]
    fn segment_beside_cone_misses() {
        let p = Vec3::new(10.0, -5.0, 5.0);
        assert!(!line_cone_intersection(p, Vec3::new(0.0, 10.0, 0.0), &cone()));
    }

    #[test]
    fn segment_beyond_far_plane_misses() {
        let p = Vec3::new(-500.0, 0.0, 200.0);
        assert!(!line_cone_intersection(p, Vec3::new(1000.0, 0.0, 0.0), &cone()));
    }

    #[test]
    fn face_enclosing_axis_hits() {
        // Large square facing the light: no edge touches the cone
        let p = Vec3::new(-50.0, -50.0, 5.0);
        let hit = face_cone_intersection(p, Vec3::new(100.0, 0.0, 0.0), Vec3::new(0.0, 100.0, 0.0), &cone());
        assert!(hit);
    }

    #[test]
    fn small_face_inside_cone_hits() {
        let p = Vec3::new(-0.1, -0.1, 5.0);
        let hit = face_cone_intersection(p, Vec3::new(0.2, 0.0, 0.0), Vec3::new(0.0, 0.2, 0.0), &cone());
        assert!(hit);
    }

    #[test]
    fn box_in_front_of_light_hits() {
        let corners = AABB::from_size(glam::Vec3::ONE)
            .transformed_corners(&Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)));
        assert!(box_cone_intersection(&corners, &cone()));
    }

    #[test]
    fn box_off_axis_misses() {
        let corners = AABB::from_size(glam::Vec3::ONE)
            .transformed_corners(&Mat4::from_translation(Vec3::new(10.0, 0.0, 5.0)));
        assert!(!box_cone_intersection(&corners, &cone()));
    }
}
