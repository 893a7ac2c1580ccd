/// Discrete keyframe track over a static table of `(time, value)` pairs.
///
/// Each value holds from its key time until the next key; the last key time
/// is the track's duration. Keys must be sorted by time.
#[derive(Debug, Clone, Copy)]
pub struct StepTrack<T: Copy + 'static> {
    keys: &'static [(f32, T)],
}

impl<T: Copy + 'static> StepTrack<T> {
    pub const fn new(keys: &'static [(f32, T)]) -> Self {
        Self { keys }
    }

    pub fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, |(t, _)| *t)
    }

    /// Value of the last key at or before `time`; the first key before it starts
    pub fn sample(&self, time: f32) -> T {
        let index = self.keys.partition_point(|(t, _)| *t <= time);
        self.keys[index.saturating_sub(1)].1
    }

    /// Final steady value
    pub fn last(&self) -> T {
        self.keys[self.keys.len() - 1].1
    }

    pub fn keys(&self) -> &'static [(f32, T)] {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLASH: StepTrack<bool> = StepTrack::new(&[(0.0, false), (1.0, true), (1.5, false), (2.0, false)]);

    #[test]
    fn samples_hold_until_next_key() {
        assert!(!FLASH.sample(0.0));
        assert!(!FLASH.sample(0.99));
        assert!(FLASH.sample(1.0));
        assert!(FLASH.sample(1.49));
        assert!(!FLASH.sample(1.5));
    }

    #[test]
    fn samples_clamp_outside_range() {
        assert!(!FLASH.sample(-1.0));
        assert!(!FLASH.sample(10.0));
    }

    #[test]
    fn duration_is_last_key() {
        assert_eq!(FLASH.duration(), 2.0);
        assert!(!FLASH.last());
    }

    #[test]
    fn keys_are_sorted() {
        assert!(FLASH.keys().windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
