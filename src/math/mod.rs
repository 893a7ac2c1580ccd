mod aabb;
pub mod circle;
pub mod cone;
mod pose;
mod ray;

pub use aabb::{AABB, BOX_EDGES, BOX_FACES};
pub use circle::line_circle_intersection;
pub use cone::{box_cone_intersection, ConeShape};
pub use pose::{pan_tilt, quat_from_euler, scene_to_view, view_to_clip, Pose, Z_FLIP};
pub use ray::{intersect_aabb, ray_hit_box};
