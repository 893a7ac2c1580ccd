/// Gameplay events surfaced to the score/UI layer
pub trait ScoreSink {
    /// The visible decoy of `group` was shot
    fn shot_hit_decoy(&mut self, group: usize);

    /// Something other than a visible decoy was shot
    fn shot_hit_wrong_target(&mut self, lives_left: u32);

    /// The level countdown ran out
    fn timer_expired(&mut self);

    /// Every decoy group is down
    fn level_cleared(&mut self) {}

    /// The last life was lost
    fn lives_exhausted(&mut self) {}
}

/// Collects events in order, for assertions and run summaries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreLog {
    pub events: Vec<ScoreEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    HitDecoy(usize),
    HitWrongTarget { lives_left: u32 },
    TimerExpired,
    LevelCleared,
    LivesExhausted,
}

impl ScoreSink for ScoreLog {
    fn shot_hit_decoy(&mut self, group: usize) {
        self.events.push(ScoreEvent::HitDecoy(group));
    }

    fn shot_hit_wrong_target(&mut self, lives_left: u32) {
        self.events.push(ScoreEvent::HitWrongTarget { lives_left });
    }

    fn timer_expired(&mut self) {
        self.events.push(ScoreEvent::TimerExpired);
    }

    fn level_cleared(&mut self) {
        self.events.push(ScoreEvent::LevelCleared);
    }

    fn lives_exhausted(&mut self) {
        self.events.push(ScoreEvent::LivesExhausted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_log_keeps_order() {
        let mut log = ScoreLog::default();
        log.shot_hit_wrong_target(2);
        log.shot_hit_decoy(0);
        assert_eq!(
            log.events,
            vec![ScoreEvent::HitWrongTarget { lives_left: 2 }, ScoreEvent::HitDecoy(0)]
        );
    }
}
