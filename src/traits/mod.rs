pub mod audio;
pub mod scene;
pub mod score;

pub use audio::*;
pub use scene::*;
pub use score::*;

/// Collaborators handed to the level for one call. The level never keeps them.
pub struct Collaborators<'a> {
    pub scene: &'a mut dyn SceneSink,
    pub audio: &'a mut dyn AudioSink,
    pub score: &'a mut dyn ScoreSink,
}

impl<'a> Collaborators<'a> {
    pub fn new(scene: &'a mut dyn SceneSink, audio: &'a mut dyn AudioSink, score: &'a mut dyn ScoreSink) -> Self {
        Self { scene, audio, score }
    }
}
