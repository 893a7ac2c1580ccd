pub mod level;

pub use level::{load_level_file, parse_level, CameraDesc, LevelDesc, ObjectDesc};
