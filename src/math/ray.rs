use glam::{Mat4, Vec3};

use super::AABB;

/// Slab test. Returns the distance along `ray_dir` to the first hit, or the
/// exit distance when the ray starts inside the box.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero direction components so the inverse stays finite
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        (t_far > 0.001).then_some(t_far)
    } else {
        Some(t_near)
    }
}

/// World-space hit point of a ray against a box placed by `world`
pub fn ray_hit_box(ray_origin: Vec3, ray_dir: Vec3, bounds: &AABB, world: &Mat4) -> Option<Vec3> {
    let to_local = world.inverse();
    let local_origin = to_local.transform_point3(ray_origin);
    let local_dir = to_local.transform_vector3(ray_dir);

    let t = intersect_aabb(local_origin, local_dir, bounds.min, bounds.max)?;
    Some(world.transform_point3(local_origin + local_dir * t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn test_intersect_aabb_hit() {
        let t = intersect_aabb(Vec3::ZERO, Vec3::X, Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        assert!((t.unwrap() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let t = intersect_aabb(Vec3::ZERO, Vec3::X, Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0));
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let t = intersect_aabb(Vec3::new(5.0, 0.0, 0.0), Vec3::X, Vec3::new(0.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        assert!((t.unwrap() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_ray_hit_rotated_box() {
        let bounds = AABB::from_size(Vec3::splat(2.0));
        let world = Mat4::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_4),
            Vec3::new(0.0, 0.0, -10.0),
        );
        let hit = ray_hit_box(Vec3::ZERO, Vec3::NEG_Z, &bounds, &world).unwrap();
        // Corner of the rotated cube points at the origin
        let expected = -10.0 + 2f32.sqrt();
        assert!((hit.z - expected).abs() < 1e-4, "hit {:?}", hit);
    }
}
