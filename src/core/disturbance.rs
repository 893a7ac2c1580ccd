use anyhow::{ensure, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::timer::Countdown;

/// Interval bounds between disturbances, in seconds
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisturbanceTiming {
    pub min_interval: f32,
    pub max_interval: f32,
}

impl Default for DisturbanceTiming {
    fn default() -> Self {
        Self {
            min_interval: 20.0,
            max_interval: 45.0,
        }
    }
}

/// Decides when the next disturbance is due. Once due it stays due until
/// the level manages to start one and calls [`DisturbanceSchedule::rearm`].
#[derive(Debug, Clone)]
pub struct DisturbanceSchedule {
    timing: DisturbanceTiming,
    countdown: Countdown,
    due: bool,
}

impl DisturbanceSchedule {
    pub fn new(timing: DisturbanceTiming) -> Result<Self> {
        ensure!(
            timing.min_interval > 0.0 && timing.min_interval <= timing.max_interval,
            "disturbance interval [{}, {}] is invalid",
            timing.min_interval,
            timing.max_interval
        );
        Ok(Self {
            timing,
            countdown: Countdown::new(timing.max_interval),
            due: false,
        })
    }

    /// Draw the next interval and clear any due flag
    pub fn rearm<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let interval = rng.gen_range(self.timing.min_interval..=self.timing.max_interval);
        self.countdown.start_with(interval);
        self.due = false;
    }

    pub fn update(&mut self, delta: f32) -> bool {
        if self.countdown.tick(delta) {
            self.due = true;
        }
        self.due
    }

    pub fn is_due(&self) -> bool {
        self.due
    }

    pub fn time_until_due(&self) -> f32 {
        self.countdown.remaining()
    }

    pub fn timing(&self) -> DisturbanceTiming {
        self.timing
    }
}
