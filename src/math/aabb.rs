use glam::{Mat4, Vec3};

/// Corner pairs forming the 12 edges of a box, indexing into [`AABB::corners`].
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 3),
    (0, 5),
    (1, 2),
    (2, 3),
    (2, 7),
    (3, 4),
    (4, 5),
    (4, 7),
    (1, 6),
    (5, 6),
    (6, 7),
];

/// The 6 faces of a box as (base, u end, v end) corner indices.
/// Each face is the parallelogram `base + s*(u - base) + t*(v - base)`, `s, t ∈ [0, 1]`.
pub const BOX_FACES: [(usize, usize, usize); 6] = [
    (0, 1, 3),
    (0, 1, 5),
    (0, 3, 5),
    (1, 2, 6),
    (3, 2, 4),
    (5, 6, 4),
];

/// Axis-aligned box in an object's local space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given full size centred on the origin
    pub fn from_size(size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(-half, half)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when min <= max on every axis
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Corners mapped through `transform`. Transforming min/max alone would
    /// lose the box's orientation, so every corner is carried individually.
    pub fn transformed_corners(&self, transform: &Mat4) -> [Vec3; 8] {
        self.corners().map(|c| transform.transform_point3(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_from_size_is_centred() {
        let aabb = AABB::from_size(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_aabb_validity() {
        assert!(AABB::from_size(Vec3::ONE).is_valid());
        assert!(AABB::new(Vec3::ONE, Vec3::ONE).is_valid());
        assert!(!AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO).is_valid());
    }

    #[test]
    fn test_edges_connect_corners_differing_on_one_axis() {
        let corners = AABB::new(Vec3::ZERO, Vec3::ONE).corners();
        for (a, b) in BOX_EDGES {
            let d = (corners[a] - corners[b]).abs();
            let axes_changed = (d.x > 0.0) as u8 + (d.y > 0.0) as u8 + (d.z > 0.0) as u8;
            assert_eq!(axes_changed, 1, "edge {}-{} is not axis aligned", a, b);
        }
    }

    #[test]
    fn test_faces_span_unit_area() {
        let corners = AABB::new(Vec3::ZERO, Vec3::ONE).corners();
        for (p, u, v) in BOX_FACES {
            let area = (corners[u] - corners[p]).cross(corners[v] - corners[p]).length();
            assert!((area - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_transformed_corners_follow_translation() {
        let aabb = AABB::from_size(Vec3::splat(2.0));
        let moved = aabb.transformed_corners(&Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)));
        assert_eq!(moved[0], Vec3::new(-1.0, -1.0, -6.0));
        assert_eq!(moved[7], Vec3::new(1.0, 1.0, -4.0));
    }
}
