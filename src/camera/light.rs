//! Spotlight power rig: outer and inner cone intensities driven by stepped
//! power-up and power-down tracks. One transition at a time.

use log::{debug, trace};

use crate::core::{Countdown, StepTrack};

pub const OUTER_ON: f32 = 1.0;
pub const INNER_ON: f32 = 2.0;

/// (outer, inner) intensity; flickers before settling on
const POWER_UP: StepTrack<(f32, f32)> = StepTrack::new(&[
    (0.0, (0.0, 0.0)),
    (1.0, (OUTER_ON, INNER_ON)),
    (1.1, (0.0, 0.0)),
    (1.2, (OUTER_ON, INNER_ON)),
    (1.4, (0.0, 0.0)),
    (1.6, (OUTER_ON, INNER_ON)),
    (2.0, (OUTER_ON, INNER_ON)),
]);

const POWER_DOWN: StepTrack<(f32, f32)> = StepTrack::new(&[(0.0, (OUTER_ON, INNER_ON)), (0.6, (0.0, 0.0))]);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightTransition {
    On,
    Off,
}

impl LightTransition {
    fn track(self) -> StepTrack<(f32, f32)> {
        match self {
            LightTransition::On => POWER_UP,
            LightTransition::Off => POWER_DOWN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightState {
    Off,
    TurningOn,
    On,
    TurningOff,
}

#[derive(Debug, Clone)]
pub struct LightRig {
    outer: f32,
    inner: f32,
    transition: Option<LightTransition>,
    playhead: Countdown,
}

impl LightRig {
    pub fn new(on: bool) -> Self {
        let mut rig = Self {
            outer: 0.0,
            inner: 0.0,
            transition: None,
            playhead: Countdown::new(0.0),
        };
        rig.force(on);
        rig
    }

    /// Start the power-up sequence. Ignored while a transition plays.
    pub fn light_on(&mut self) -> bool {
        self.begin(LightTransition::On)
    }

    /// Start the power-down sequence. Ignored while a transition plays.
    pub fn light_off(&mut self) -> bool {
        self.begin(LightTransition::Off)
    }

    fn begin(&mut self, transition: LightTransition) -> bool {
        if let Some(current) = self.transition {
            trace!("light {:?} ignored: {:?} in flight", transition, current);
            return false;
        }

        self.transition = Some(transition);
        self.playhead.start_with(transition.track().duration());
        self.apply(transition.track().sample(0.0));
        true
    }

    /// Advance the in-flight transition. Returns it on the tick it completes,
    /// with intensities snapped to the steady end value.
    pub fn update(&mut self, delta: f32) -> Option<LightTransition> {
        let transition = self.transition?;
        let track = transition.track();

        if self.playhead.tick(delta) {
            self.apply(track.last());
            self.transition = None;
            debug!("light {:?} finished", transition);
            return Some(transition);
        }

        self.apply(track.sample(self.playhead.elapsed()));
        None
    }

    /// Jump straight to a steady state, dropping any transition
    pub fn force(&mut self, on: bool) {
        self.transition = None;
        self.playhead.stop();
        if on {
            self.apply((OUTER_ON, INNER_ON));
        } else {
            self.apply((0.0, 0.0));
        }
    }

    fn apply(&mut self, (outer, inner): (f32, f32)) {
        self.outer = outer;
        self.inner = inner;
    }

    pub fn state(&self) -> LightState {
        match self.transition {
            Some(LightTransition::On) => LightState::TurningOn,
            Some(LightTransition::Off) => LightState::TurningOff,
            None if self.outer > 0.0 => LightState::On,
            None => LightState::Off,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_lit(&self) -> bool {
        self.outer > 0.0
    }

    pub fn outer_intensity(&self) -> f32 {
        self.outer
    }

    pub fn inner_intensity(&self) -> f32 {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_flickers_then_settles() {
        let mut rig = LightRig::new(false);
        assert!(rig.light_on());
        assert_eq!(rig.state(), LightState::TurningOn);

        rig.update(1.05);
        assert_eq!(rig.outer_intensity(), OUTER_ON);
        rig.update(0.1);
        assert_eq!(rig.outer_intensity(), 0.0, "flicker gap at 1.15s");

        assert_eq!(rig.update(1.0), Some(LightTransition::On));
        assert_eq!(rig.state(), LightState::On);
        assert_eq!(rig.inner_intensity(), INNER_ON);
    }

    #[test]
    fn power_down_holds_then_snaps_off() {
        let mut rig = LightRig::new(true);
        rig.light_off();
        assert_eq!(rig.update(0.59), None);
        assert!(rig.is_lit());
        assert_eq!(rig.update(0.02), Some(LightTransition::Off));
        assert_eq!(rig.outer_intensity(), 0.0);
        assert_eq!(rig.state(), LightState::Off);
    }

    #[test]
    fn transitions_are_not_reentrant() {
        let mut rig = LightRig::new(true);
        assert!(rig.light_off());
        assert!(!rig.light_on());
        assert!(!rig.light_off());
        assert_eq!(rig.update(1.0), Some(LightTransition::Off));
        assert!(rig.light_on());
    }

    #[test]
    fn force_cancels_transition() {
        let mut rig = LightRig::new(true);
        rig.light_off();
        rig.force(true);
        assert!(!rig.is_animating());
        assert_eq!(rig.update(1.0), None);
        assert!(rig.is_lit());
    }
}
