//! Per-camera mode machine.
//!
//! Patrol, aim, fire, switch and disturbance are mutually exclusive modes of
//! one camera. Every legal move is a row in [`CameraMode::on`]; any other
//! (mode, event) pair is rejected and changes nothing.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FireStage {
    LightOff,
    Beam,
    LightOn,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisturbStage {
    LightOff,
    Listening,
    LightOn,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Offline,
    Patrolling,
    Aiming,
    Firing(FireStage),
    Switching,
    Disturbed(DisturbStage),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeEvent {
    Activate,
    Deactivate,
    AimStart,
    AimEnd,
    Fire,
    LightOffDone,
    BeamDone,
    LightOnDone,
    Disturb,
    ListenDone,
    SwitchIn,
    SwitchSettled,
}

/// Side effect of a transition. The camera applies patrol and light effects
/// itself; the rest are carried out by the level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FreezePatrol,
    ResumePatrol,
    LightOn,
    LightOff,
    LightSnapOn,
    LightForceOff,
    FreezeDecoys,
    ResumeDecoys,
    StartLaser,
    PlayDisturbance,
    StaticOn,
    StaticOff,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub to: CameraMode,
    pub effects: &'static [Effect],
}

impl Transition {
    const fn new(to: CameraMode, effects: &'static [Effect]) -> Self {
        Self { to, effects }
    }
}

impl CameraMode {
    pub fn on(self, event: ModeEvent) -> Option<Transition> {
        use CameraMode::*;
        use Effect::*;
        use ModeEvent as E;

        let transition = match (self, event) {
            (Offline, E::Activate) => Transition::new(Patrolling, &[LightSnapOn, ResumePatrol]),
            (Offline, E::Deactivate) => return None,
            (_, E::Deactivate) => Transition::new(Offline, &[FreezePatrol, LightForceOff]),

            (Patrolling, E::AimStart) => Transition::new(Aiming, &[FreezePatrol, FreezeDecoys]),
            (Aiming, E::AimEnd) => Transition::new(Patrolling, &[ResumePatrol, ResumeDecoys]),

            (Patrolling | Aiming, E::Fire) => {
                Transition::new(Firing(FireStage::LightOff), &[FreezePatrol, FreezeDecoys, LightOff])
            }
            (Firing(FireStage::LightOff), E::LightOffDone) => Transition::new(Firing(FireStage::Beam), &[StartLaser]),
            (Firing(FireStage::Beam), E::BeamDone) => Transition::new(Firing(FireStage::LightOn), &[LightOn]),
            (Firing(FireStage::LightOn), E::LightOnDone) => {
                Transition::new(Patrolling, &[ResumePatrol, ResumeDecoys])
            }

            (Patrolling, E::Disturb) => Transition::new(Disturbed(DisturbStage::LightOff), &[FreezePatrol, LightOff]),
            (Disturbed(DisturbStage::LightOff), E::LightOffDone) => {
                Transition::new(Disturbed(DisturbStage::Listening), &[PlayDisturbance])
            }
            (Disturbed(DisturbStage::Listening), E::ListenDone) => {
                Transition::new(Disturbed(DisturbStage::LightOn), &[LightOn])
            }
            (Disturbed(DisturbStage::LightOn), E::LightOnDone) => Transition::new(Patrolling, &[ResumePatrol]),

            (Patrolling, E::SwitchIn) => Transition::new(Switching, &[StaticOn]),
            (Switching, E::SwitchSettled) => Transition::new(Patrolling, &[StaticOff]),

            _ => return None,
        };

        Some(transition)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, CameraMode::Firing(_) | CameraMode::Disturbed(_) | CameraMode::Switching)
    }
}
