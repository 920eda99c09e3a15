//! Contact classification
//!
//! The host reports a contact as two bodies in no particular order. We sort
//! the pair by category mask so the four possible orderings of a
//! monster/projectile contact collapse into one case, then match on it.

use super::category::PhysicsCategory;

/// One side of a reported contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody<H> {
    pub category: PhysicsCategory,
    pub handle: H,
}

impl<H> ContactBody<H> {
    pub fn new(category: PhysicsCategory, handle: H) -> Self {
        Self { category, handle }
    }
}

/// Two bodies reported touching in a single contact callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair<H> {
    pub body_a: ContactBody<H>,
    pub body_b: ContactBody<H>,
}

impl<H: Copy> ContactPair<H> {
    pub fn new(body_a: ContactBody<H>, body_b: ContactBody<H>) -> Self {
        Self { body_a, body_b }
    }

    /// Order the bodies by category mask, lowest first.
    ///
    /// Equal masks put `body_b` first.
    pub fn normalized(&self) -> (ContactBody<H>, ContactBody<H>) {
        if self.body_a.category.bits() < self.body_b.category.bits() {
            (self.body_a, self.body_b)
        } else {
            (self.body_b, self.body_a)
        }
    }
}

/// A projectile struck a monster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent<H> {
    pub monster: H,
    pub projectile: H,
}

/// Decide whether a contact is a scorable hit.
///
/// Only an exact monster/projectile pairing matches; untagged bodies and
/// combined masks never do. Removing the entities is up to the caller.
pub fn classify<H: Copy>(pair: ContactPair<H>) -> Option<HitEvent<H>> {
    match pair.normalized() {
        (first, second)
            if first.category == PhysicsCategory::MONSTER
                && second.category == PhysicsCategory::PROJECTILE =>
        {
            Some(HitEvent {
                monster: first.handle,
                projectile: second.handle,
            })
        }
        _ => None,
    }
}
