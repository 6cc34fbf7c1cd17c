// optional<void>: no payload, only presence. Engagement can only come from
// zero-argument in-place construction, and assigning anything other than the
// sentinel is accepted but changes nothing; callers of the degenerate
// instantiation rely on that, so it stays.

use crate::{
    error::BadOptionalAccess,
    nullopt::{ InPlace, InPlaceIf, Nullopt }
};
use std::cmp::Ordering;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionalVoid {
    on: bool
}

impl OptionalVoid {
    pub const fn new() -> Self {
        Self { on: false }
    }

    pub fn in_place(_: InPlace) -> Self {
        Self { on: true }
    }

    pub fn in_place_if(_: InPlaceIf, cond: bool) -> Self {
        Self { on: cond }
    }

    pub fn has_value(&self) -> bool { self.on }

    pub fn emplace(&mut self) {
        self.on = true;
    }

    // Accepts any value and drops it unused; only the sentinel disengages.
    pub fn assign<V>(&mut self, _value: V) {}

    pub fn assign_none(&mut self, _: Nullopt) {
        self.on = false;
    }

    pub fn reset(&mut self) {
        self.on = false;
    }

    pub fn value(&self) -> Result<(), BadOptionalAccess> {
        match self.on {
            true => Ok(()),
            false => Err(BadOptionalAccess)
        }
    }

    // There is no payload to hand back in either state.
    pub fn value_or<V>(&self, default: V) -> V { default }
}

impl From<Nullopt> for OptionalVoid {
    fn from(_: Nullopt) -> Self { Self::new() }
}

impl PartialEq<Nullopt> for OptionalVoid {
    fn eq(&self, _: &Nullopt) -> bool { !self.on }
}

impl PartialOrd<Nullopt> for OptionalVoid {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        match self.on {
            true => Some(Ordering::Greater),
            false => Some(Ordering::Equal)
        }
    }
}

impl PartialEq<OptionalVoid> for Nullopt {
    fn eq(&self, other: &OptionalVoid) -> bool { !other.on }
}

impl PartialOrd<OptionalVoid> for Nullopt {
    fn partial_cmp(&self, other: &OptionalVoid) -> Option<Ordering> {
        match other.on {
            true => Some(Ordering::Less),
            false => Some(Ordering::Equal)
        }
    }
}
