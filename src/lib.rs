pub mod camera;
pub mod cli;
pub mod core;
pub mod demo;
pub mod level;
pub mod loaders;
pub mod math;
pub mod runner;
pub mod traits;

pub use camera::SecurityCamera;
pub use level::{Level, LevelState};
pub use loaders::LevelDesc;
