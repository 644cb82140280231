use serde::{Deserialize, Serialize};

/// Bit-set of geometry categories a cast is allowed to hit.
///
/// Level geometry carries a category mask; a ray only reports segments
/// whose category intersects the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    pub const NONE: CollisionMask = CollisionMask(0);
    pub const ALL: CollisionMask = CollisionMask(u32::MAX);

    /// Mask with a single layer bit set. Bit indices past 31 select
    /// nothing rather than trap.
    pub const fn layer(bit: u32) -> Self {
        if bit < u32::BITS {
            CollisionMask(1 << bit)
        } else {
            CollisionMask::NONE
        }
    }

    pub fn contains(self, other: CollisionMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        CollisionMask::ALL
    }
}

impl std::ops::BitOr for CollisionMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CollisionMask(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_sets_single_bits_up_to_31() {
        assert_eq!(CollisionMask::layer(0), CollisionMask(1));
        assert_eq!(CollisionMask::layer(31), CollisionMask(1 << 31));
    }

    #[test]
    fn out_of_range_layer_selects_nothing() {
        assert_eq!(CollisionMask::layer(32), CollisionMask::NONE);
        assert_eq!(CollisionMask::layer(u32::MAX), CollisionMask::NONE);
        assert!(!CollisionMask::ALL.contains(CollisionMask::layer(32)));
    }
}
