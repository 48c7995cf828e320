//! Identifiers and simple allocators for sequencer entities.

use serde::{Deserialize, Serialize};

/// One registered animation unit (reveal, marquee, count-up, accordion, fade).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// One live continuous tween handle. Marquees kill and reallocate their
/// handle on reinitialization, so a stale id identifies a dead tween.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// Monotonic allocator for UnitId and TweenId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_unit: u32,
    next_tween: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_unit(&mut self) -> UnitId {
        let id = UnitId(self.next_unit);
        self.next_unit = self.next_unit.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_tween(&mut self) -> TweenId {
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_unit(), UnitId(0));
        assert_eq!(alloc.alloc_unit(), UnitId(1));
        assert_eq!(alloc.alloc_tween(), TweenId(0));
        assert_eq!(alloc.alloc_tween(), TweenId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_unit(), UnitId(0));
    }
}
