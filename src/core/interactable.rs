use glam::{Mat4, Vec3};

use super::observation::{LightView, ObservationMethod};
use crate::math::AABB;

/// Index of an interactable within its level
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractableId(pub usize);

/// Shootable object. Props (`group == None`) are one-shot destructibles;
/// decoys belong to exactly one decoy group.
#[derive(Clone, Debug)]
pub struct Interactable {
    name: String,
    bounds: AABB,
    world: Mat4,
    group: Option<usize>,
    observed: bool,
    visible: bool,
    destroyed: bool,
    visibility_dirty: bool,
}

impl Interactable {
    /// `world` is computed once at load; objects never move.
    pub fn new(name: impl Into<String>, bounds: AABB, world: Mat4, group: Option<usize>) -> Self {
        Self {
            name: name.into(),
            bounds,
            world,
            group,
            observed: false,
            visible: true,
            destroyed: false,
            visibility_dirty: true,
        }
    }

    /// Refresh the observed flag against this tick's light view
    pub fn observe(&mut self, view: Option<&LightView>, method: ObservationMethod) {
        self.observed = match view {
            Some(view) if !self.destroyed => view.illuminates_with(method, &self.bounds, &self.world),
            _ => false,
        };
    }

    /// Test hook for driving the decoy state machine without geometry
    pub fn set_observed(&mut self, observed: bool) {
        self.observed = observed;
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.visibility_dirty = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide a prop for good (until the level is re-entered)
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.set_visible(false);
    }

    /// Undo [`Interactable::destroy`] on level entry
    pub fn restore(&mut self) {
        self.destroyed = false;
        if self.group.is_none() {
            self.set_visible(true);
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns the visibility once after each change, for pushing to the renderer
    pub fn take_visibility_change(&mut self) -> Option<bool> {
        std::mem::take(&mut self.visibility_dirty).then_some(self.visible)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<usize> {
        self.group
    }

    pub fn is_decoy(&self) -> bool {
        self.group.is_some()
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn world(&self) -> &Mat4 {
        &self.world
    }

    pub fn world_center(&self) -> Vec3 {
        self.world.transform_point3(self.bounds.center())
    }
}
