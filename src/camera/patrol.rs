//! Pause-then-rotate patrol cycle over (pitch, yaw) waypoints.
//!
//! Each waypoint gets a hold segment of `pause` seconds followed by a move
//! segment to the next waypoint (wrapping to the first), lasting the larger
//! of the pitch and yaw deltas divided by the rotation speed. Angles are
//! interpolated linearly inside a move segment.

use anyhow::{ensure, Result};
use glam::Quat;

use crate::math::pan_tilt;

/// Pan/tilt target in radians
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub pitch: f32,
    pub yaw: f32,
}

impl Waypoint {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    pub fn from_degrees(pitch: f32, yaw: f32) -> Self {
        Self::new(pitch.to_radians(), yaw.to_radians())
    }

    pub fn lerp(self, to: Waypoint, t: f32) -> Waypoint {
        Waypoint::new(
            self.pitch + (to.pitch - self.pitch) * t,
            self.yaw + (to.yaw - self.yaw) * t,
        )
    }

    pub fn orientation(&self) -> Quat {
        pan_tilt(self.pitch, self.yaw)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Hold,
    Move,
}

#[derive(Copy, Clone, Debug)]
struct Segment {
    start: f32,
    duration: f32,
    from: Waypoint,
    to: Waypoint,
    kind: SegmentKind,
}

/// Static patrol timetable, built once at level load
#[derive(Clone, Debug)]
pub struct PatrolSchedule {
    segments: Vec<Segment>,
    period: f32,
}

impl PatrolSchedule {
    pub fn new(waypoints: &[Waypoint], rotation_speed: f32, pause: f32) -> Result<Self> {
        ensure!(
            waypoints.len() >= 2,
            "patrol needs at least 2 waypoints, got {}",
            waypoints.len()
        );
        ensure!(rotation_speed > 0.0, "rotation speed {} must be positive", rotation_speed);
        ensure!(pause >= 0.0, "pause length {} must not be negative", pause);

        let mut segments = Vec::with_capacity(waypoints.len() * 2);
        let mut start = 0.0;

        for (i, &from) in waypoints.iter().enumerate() {
            let to = waypoints[(i + 1) % waypoints.len()];

            segments.push(Segment {
                start,
                duration: pause,
                from,
                to: from,
                kind: SegmentKind::Hold,
            });
            start += pause;

            let angle = (to.pitch - from.pitch).abs().max((to.yaw - from.yaw).abs());
            let duration = angle / rotation_speed;
            segments.push(Segment {
                start,
                duration,
                from,
                to,
                kind: SegmentKind::Move,
            });
            start += duration;
        }

        ensure!(start > 0.0, "patrol cycle has zero length");

        Ok(Self {
            segments,
            period: start,
        })
    }

    /// Length of one full cycle in seconds
    pub fn period(&self) -> f32 {
        self.period
    }

    fn segment_at(&self, phase: f32) -> &Segment {
        let phase = phase.rem_euclid(self.period);
        let index = self.segments.partition_point(|s| s.start <= phase);
        &self.segments[index.saturating_sub(1)]
    }

    /// Pan/tilt at `phase` seconds into the cycle
    pub fn sample(&self, phase: f32) -> Waypoint {
        let segment = self.segment_at(phase);
        if segment.duration <= 0.0 {
            return segment.to;
        }
        let t = ((phase.rem_euclid(self.period) - segment.start) / segment.duration).clamp(0.0, 1.0);
        segment.from.lerp(segment.to, t)
    }

    pub fn segment_kind(&self, phase: f32) -> SegmentKind {
        self.segment_at(phase).kind
    }
}

/// Playback of a schedule: a phase clock that can be frozen and rewound
#[derive(Clone, Debug)]
pub struct Patrol {
    schedule: PatrolSchedule,
    phase: f32,
    moving: bool,
}

impl Patrol {
    pub fn new(schedule: PatrolSchedule) -> Self {
        Self {
            schedule,
            phase: 0.0,
            moving: true,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        if self.moving {
            self.phase = (self.phase + delta).rem_euclid(self.schedule.period());
        }
    }

    /// Freeze or resume at the current phase
    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    /// Rewind to the start of the cycle
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn current(&self) -> Waypoint {
        self.schedule.sample(self.phase)
    }

    pub fn segment(&self) -> SegmentKind {
        self.schedule.segment_kind(self.phase)
    }

    pub fn schedule(&self) -> &PatrolSchedule {
        &self.schedule
    }
}
