use glam::Vec2;

/// Does the segment `p .. p + u` touch the origin-centred circle of radius `r`?
///
/// Solves `|p + l*u|^2 = r^2` for `l` and accepts any root in [0, 1]. A segment
/// lying wholly inside the circle has no root in range, so the start point is
/// checked last.
pub fn line_circle_intersection(p: Vec2, u: Vec2, r: f32) -> bool {
    let a = u.length_squared();

    if a > 0.0 {
        let b = 2.0 * p.dot(u);
        let c = p.length_squared() - r * r;
        let delta = b * b - 4.0 * a * c;

        if delta >= 0.0 {
            let sqrt_delta = delta.sqrt();
            let l1 = (-b + sqrt_delta) / (2.0 * a);
            let l2 = (-b - sqrt_delta) / (2.0 * a);

            if (0.0..=1.0).contains(&l1) || (0.0..=1.0).contains(&l2) {
                return true;
            }
        }
    }

    p.length() <= r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segment_intersects() {
        assert!(line_circle_intersection(Vec2::new(-2.0, 0.0), Vec2::new(4.0, 0.0), 1.0));
    }

    #[test]
    fn segment_inside_circle_intersects() {
        assert!(line_circle_intersection(Vec2::new(-0.1, 0.0), Vec2::new(0.2, 0.0), 1.0));
    }

    #[test]
    fn segment_ending_short_of_circle_misses() {
        assert!(!line_circle_intersection(Vec2::new(-3.0, 0.0), Vec2::new(1.0, 0.0), 1.0));
    }

    #[test]
    fn tangent_segment_intersects() {
        assert!(line_circle_intersection(Vec2::new(-1.0, 1.0), Vec2::new(2.0, 0.0), 1.0));
    }

    #[test]
    fn parallel_offset_segment_misses() {
        assert!(!line_circle_intersection(Vec2::new(-2.0, 1.5), Vec2::new(4.0, 0.0), 1.0));
    }

    #[test]
    fn degenerate_segment_uses_start_point() {
        assert!(line_circle_intersection(Vec2::new(0.5, 0.0), Vec2::ZERO, 1.0));
        assert!(!line_circle_intersection(Vec2::new(1.5, 0.0), Vec2::ZERO, 1.0));
    }
}
