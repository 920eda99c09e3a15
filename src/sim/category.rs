//! Physics category masks
//!
//! Every body the host reports carries one of these. Masks combine with `|`
//! so contact-test masks can name several categories at once.

use bitflags::bitflags;

bitflags! {
    /// Role of a physics body in the scene.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct PhysicsCategory: u32 {
        const MONSTER = 0b01;
        const PROJECTILE = 0b10;
        /// Contact-test mask matching everything
        const ALL = u32::MAX;
    }
}

impl PhysicsCategory {
    /// Untagged body; never takes part in a hit
    pub const NONE: Self = Self::empty();

    /// True for a plain entity tag: exactly one bit set
    pub fn is_simple(&self) -> bool {
        self.bits().count_ones() == 1
    }
}

impl Default for PhysicsCategory {
    fn default() -> Self {
        Self::NONE
    }
}
