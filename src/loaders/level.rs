use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{DisturbanceTiming, ObservationMethod};

/// Level description as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    pub name: String,
    #[serde(default = "default_time_limit")]
    pub time_limit: f32,
    #[serde(default = "default_lives")]
    pub lives: u32,
    /// Static noise after switching cameras, in seconds
    #[serde(default = "default_switch_static")]
    pub switch_static: f32,
    /// `null` disables disturbances
    #[serde(default = "default_disturbance")]
    pub disturbance: Option<DisturbanceTiming>,
    #[serde(default)]
    pub observation: ObservationMethod,
    pub cameras: Vec<CameraDesc>,
    #[serde(default)]
    pub objects: Vec<ObjectDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    #[serde(default)]
    pub name: String,
    pub position: [f32; 3],
    /// `[pitch, yaw]` in degrees
    pub waypoints: Vec<[f32; 2]>,
    /// Radians per second
    pub rotation_speed: f32,
    /// Outer cone half-angle in radians
    pub half_angle: f32,
    pub pause: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    #[serde(default = "default_light_offset")]
    pub light_offset: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDesc {
    pub name: String,
    /// Decoy group id; props have none
    #[serde(default)]
    pub group: Option<usize>,
    pub position: [f32; 3],
    /// XYZ Euler angles in radians
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    #[serde(default = "default_min")]
    pub min: [f32; 3],
    #[serde(default = "default_max")]
    pub max: [f32; 3],
}

fn default_time_limit() -> f32 {
    180.0
}

fn default_lives() -> u32 {
    3
}

fn default_switch_static() -> f32 {
    1.4
}

fn default_disturbance() -> Option<DisturbanceTiming> {
    Some(DisturbanceTiming::default())
}

fn default_near() -> f32 {
    1.0
}

fn default_far() -> f32 {
    1000.0
}

fn default_light_offset() -> [f32; 3] {
    [0.0, -0.3, 0.0]
}

fn default_scale() -> [f32; 3] {
    [1.0; 3]
}

fn default_min() -> [f32; 3] {
    [-0.5; 3]
}

fn default_max() -> [f32; 3] {
    [0.5; 3]
}

pub fn parse_level(json: &str) -> Result<LevelDesc> {
    serde_json::from_str(json).context("Failed to parse level description")
}

pub fn load_level_file(path: impl AsRef<Path>) -> Result<LevelDesc> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read level file: {:?}", path))?;
    let desc = parse_level(&json).with_context(|| format!("Invalid level file: {:?}", path))?;

    info!(
        "read level {:?} from {:?}: {} cameras, {} objects",
        desc.name,
        path,
        desc.cameras.len(),
        desc.objects.len()
    );
    Ok(desc)
}
