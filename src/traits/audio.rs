/// Fire-and-forget sound cues. Nothing here feeds back into the simulation
/// except the disturbance clip length.
pub trait AudioSink {
    /// Start the pan motor loop of the point-of-view camera
    fn camera_motor_on(&mut self);

    /// Stop the pan motor loop
    fn camera_motor_off(&mut self);

    /// One-shot click when the camera halts
    fn camera_stop(&mut self);

    /// Laser charge and discharge
    fn laser_fire(&mut self);

    /// Play a disturbance clip and return its length in seconds
    fn disturbance(&mut self) -> f32;

    /// Toggle the camera-switch static loop
    fn static_noise(&mut self, on: bool);
}

/// Audio sink that plays nothing. Disturbances last `disturbance_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio {
    pub disturbance_length: f32,
}

impl AudioSink for SilentAudio {
    fn camera_motor_on(&mut self) {}

    fn camera_motor_off(&mut self) {}

    fn camera_stop(&mut self) {}

    fn laser_fire(&mut self) {}

    fn disturbance(&mut self) -> f32 {
        self.disturbance_length
    }

    fn static_noise(&mut self, _on: bool) {}
}
