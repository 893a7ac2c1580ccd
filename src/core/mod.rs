pub mod clock;
pub mod decoy;
pub mod disturbance;
pub mod interactable;
pub mod laser;
pub mod observation;
pub mod timeline;
pub mod timer;

pub use clock::Clock;
pub use decoy::{DecoyGroup, DecoyPhase, DecoySwitch};
pub use disturbance::{DisturbanceSchedule, DisturbanceTiming};
pub use interactable::{Interactable, InteractableId};
pub use laser::{LaserFrame, LaserSequencer, LaserShot, LaserState, BEAM_LIGHT_INTENSITY, POINTER_INTENSITY};
pub use observation::{is_illuminated, LightCone, LightView, ObservationMethod};
pub use timeline::StepTrack;
pub use timer::{Accumulator, Countdown, Throttled};
