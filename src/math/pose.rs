use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};

/// Negates Z: a light shines down its local -Z while light space looks down +Z.
pub const Z_FLIP: Mat4 = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::NEG_Z, Vec4::W);

/// Position and orientation of an entity. The world matrix is derived, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose from a position and XYZ Euler angles in radians
    pub fn from_euler(position: Vec3, euler: Vec3) -> Self {
        Self::new(position, quat_from_euler(euler))
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Pose of a child rigidly attached at `offset` in this pose's local frame
    pub fn child(&self, offset: Vec3) -> Pose {
        Pose::new(
            self.position + self.orientation * offset,
            self.orientation,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// XYZ Euler angles (radians) to a quaternion
pub fn quat_from_euler(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z)
}

/// Orientation of a pan/tilt head: yaw about +Y, then pitch about X.
/// Positive pitch tilts the forward axis down.
pub fn pan_tilt(pitch: f32, yaw: f32) -> Quat {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch)
}

/// World space to light space: origin at the light, looking down +Z
pub fn scene_to_view(light_world: &Mat4) -> Mat4 {
    (*light_world * Z_FLIP).inverse()
}

/// Divides X/Y by `z / near` so the cone cross-section becomes a circle of
/// radius `near * tan(half_angle)` at every depth. Apply with `project_point3`.
pub fn view_to_clip(near: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::X,
        Vec4::Y,
        Vec4::new(0.0, 0.0, 1.0, 1.0 / near),
        Vec4::ZERO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_pose_faces_negative_z() {
        assert!(approx(Pose::IDENTITY.forward(), Vec3::NEG_Z));
    }

    #[test]
    fn test_positive_pitch_tilts_down() {
        let pose = Pose::new(Vec3::ZERO, pan_tilt(0.3, 0.0));
        assert!(pose.forward().y < 0.0);
    }

    #[test]
    fn test_yaw_quarter_turn_faces_negative_x() {
        let pose = Pose::new(Vec3::ZERO, pan_tilt(0.0, FRAC_PI_2));
        assert!(approx(pose.forward(), Vec3::NEG_X));
    }

    #[test]
    fn test_child_offset_rotates_with_parent() {
        let parent = Pose::new(Vec3::new(1.0, 0.0, 0.0), pan_tilt(0.0, FRAC_PI_2));
        let child = parent.child(Vec3::new(0.0, 0.0, -1.0));
        assert!(approx(child.position, Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_scene_to_view_puts_forward_points_at_positive_z() {
        let light = Pose::new(Vec3::new(0.0, 5.0, 0.0), Quat::IDENTITY);
        let view = scene_to_view(&light.matrix());
        let p = view.transform_point3(Vec3::new(0.0, 5.0, -3.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_view_to_clip_normalises_depth() {
        let clip = view_to_clip(2.0);
        let p = clip.project_point3(Vec3::new(1.0, -1.0, 4.0));
        assert!(approx(p, Vec3::new(0.5, -0.5, 2.0)));
    }
}
