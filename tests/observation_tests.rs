use glam::{Mat4, Vec3};
use quantum_cams::core::{is_illuminated, LightCone, LightView, ObservationMethod};
use quantum_cams::math::{pan_tilt, Pose, AABB};

fn cone(degrees: f32) -> LightCone {
    LightCone::new(degrees.to_radians(), 1.0, 100.0).unwrap().with_intensity(1.0)
}

fn at(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

#[cfg(test)]
mod illumination_tests {
    use super::*;

    #[test]
    fn test_dark_light_never_illuminates() {
        let bounds = AABB::from_size(Vec3::ONE);
        for intensity in [0.0, -1.0] {
            let dark = cone(30.0).with_intensity(intensity);
            for z in [-2.0, -5.0, -50.0] {
                assert!(!is_illuminated(&bounds, &at(0.0, 0.0, z), &Mat4::IDENTITY, &dark));
            }
        }
    }

    #[test]
    fn test_box_behind_light_is_dark() {
        let bounds = AABB::from_size(Vec3::ONE);
        for x in [-1.0, 0.0, 1.0] {
            assert!(!is_illuminated(&bounds, &at(x, 0.0, 5.0), &Mat4::IDENTITY, &cone(30.0)));
        }
    }

    #[test]
    fn test_unit_box_on_axis_at_depth_five_is_lit() {
        let bounds = AABB::from_size(Vec3::ONE);
        assert!(is_illuminated(&bounds, &at(0.0, 0.0, -5.0), &Mat4::IDENTITY, &cone(30.0)));
    }

    #[test]
    fn test_box_outside_cone_is_dark() {
        let bounds = AABB::from_size(Vec3::ONE);
        for world in [at(10.0, 0.0, -5.0), at(0.0, -10.0, -5.0), at(-8.0, 8.0, -5.0)] {
            assert!(!is_illuminated(&bounds, &world, &Mat4::IDENTITY, &cone(30.0)));
        }
    }

    #[test]
    fn test_box_touching_cone_edge_is_lit() {
        // tan(30) * 5 = 2.89; the near face edge reaches x = 2.5
        let bounds = AABB::from_size(Vec3::ONE);
        assert!(is_illuminated(&bounds, &at(3.0, 0.0, -5.0), &Mat4::IDENTITY, &cone(30.0)));
    }

    #[test]
    fn test_rotated_light() {
        let light = Pose::new(Vec3::new(0.0, 5.0, 0.0), pan_tilt(0.3, 1.0));
        let target = light.position + light.forward() * 12.0;
        let bounds = AABB::from_size(Vec3::ONE);

        assert!(is_illuminated(&bounds, &Mat4::from_translation(target), &light.matrix(), &cone(15.0)));

        let behind = light.position - light.forward() * 12.0;
        assert!(!is_illuminated(&bounds, &Mat4::from_translation(behind), &light.matrix(), &cone(15.0)));
    }

    #[test]
    fn test_enclosing_box_is_missed_by_projection_but_not_analytic() {
        let bounds = AABB::new(Vec3::new(-50.0, -50.0, -5.0), Vec3::new(50.0, 50.0, 5.0));
        let world = at(0.0, 0.0, -15.0);
        let view = LightView::new(&Mat4::IDENTITY, cone(30.0));

        assert!(!view.illuminates_with(ObservationMethod::ProjectedCircle, &bounds, &world));
        assert!(view.illuminates_with(ObservationMethod::Analytic, &bounds, &world));
    }

    #[test]
    fn test_query_is_idempotent() {
        let view = LightView::new(&Mat4::IDENTITY, cone(30.0));
        let bounds = AABB::from_size(Vec3::ONE);
        let world = at(1.0, 0.5, -6.0);
        let first = view.illuminates(&bounds, &world);
        for _ in 0..10 {
            assert_eq!(view.illuminates(&bounds, &world), first);
        }
    }
}
