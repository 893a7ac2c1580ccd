//! Decoy groups: several interchangeable objects standing in for one target.
//!
//! Exactly one member is visible while the group is active. Once the visible
//! member has been lit it is armed; the moment it goes dark again the group
//! relocates to a different member that is itself dark at that instant.
//! The player therefore never sees two candidates at once and never watches
//! a jump happen.

use anyhow::{ensure, Result};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::interactable::{Interactable, InteractableId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecoyPhase {
    /// Active member not lit since the last switch
    Resting,
    /// Active member lit at least once since the last switch
    Armed,
}

/// A completed relocation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecoySwitch {
    pub group: usize,
    pub from: InteractableId,
    pub to: InteractableId,
}

#[derive(Clone, Debug)]
pub struct DecoyGroup {
    id: usize,
    members: Vec<InteractableId>,
    active_index: usize,
    switch_pending: bool,
    moving: bool,
    active: bool,
}

impl DecoyGroup {
    /// Build the group and show member 0 only
    pub fn new(id: usize, members: Vec<InteractableId>, interactables: &mut [Interactable]) -> Result<Self> {
        ensure!(!members.is_empty(), "decoy group {} has no members", id);
        for member in &members {
            ensure!(
                member.0 < interactables.len(),
                "decoy group {} references missing object {}",
                id,
                member.0
            );
        }

        let group = Self {
            id,
            members,
            active_index: 0,
            switch_pending: false,
            moving: true,
            active: true,
        };
        group.apply_visibility(interactables);
        Ok(group)
    }

    /// Run once per tick, after every member's observation has been refreshed
    pub fn update<R: Rng + ?Sized>(&mut self, interactables: &mut [Interactable], rng: &mut R) -> Option<DecoySwitch> {
        if !self.active || !self.moving {
            return None;
        }

        let current = self.active_member();
        let observed = interactables[current.0].is_observed();

        if !self.switch_pending {
            if observed {
                self.switch_pending = true;
            }
            return None;
        }

        if observed {
            return None;
        }

        // Uniform over the dark members other than the current one. Filtering
        // up front replaces a reroll loop that could spin if every draw hit a
        // lit member. With no candidate the group stays armed and retries.
        let candidates: Vec<usize> = (0..self.members.len())
            .filter(|&i| i != self.active_index && !interactables[self.members[i].0].is_observed())
            .collect();

        let next = *candidates.choose(rng)?;

        interactables[current.0].set_visible(false);
        interactables[self.members[next].0].set_visible(true);
        self.active_index = next;
        self.switch_pending = false;

        let switch = DecoySwitch {
            group: self.id,
            from: current,
            to: self.members[next],
        };
        debug!("decoy group {} moved {:?} -> {:?}", self.id, switch.from, switch.to);
        Some(switch)
    }

    /// Pause or resume relocation without touching visibility. Ignored while inactive.
    pub fn set_moving(&mut self, moving: bool) {
        if self.active {
            self.moving = moving;
        }
    }

    /// Activation resets to member 0; deactivation hides every member
    pub fn set_active(&mut self, active: bool, interactables: &mut [Interactable]) {
        self.active = active;
        self.moving = active;
        self.switch_pending = false;
        if active {
            self.active_index = 0;
        }
        self.apply_visibility(interactables);
    }

    fn apply_visibility(&self, interactables: &mut [Interactable]) {
        for (i, member) in self.members.iter().enumerate() {
            interactables[member.0].set_visible(self.active && i == self.active_index);
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn members(&self) -> &[InteractableId] {
        &self.members
    }

    pub fn contains(&self, id: InteractableId) -> bool {
        self.members.contains(&id)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_member(&self) -> InteractableId {
        self.members[self.active_index]
    }

    pub fn phase(&self) -> DecoyPhase {
        if self.switch_pending {
            DecoyPhase::Armed
        } else {
            DecoyPhase::Resting
        }
    }

    pub fn is_switch_pending(&self) -> bool {
        self.switch_pending
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
