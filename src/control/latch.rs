// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Collision latch shared between the bumper interrupt, the periodic task and the main loop.
//!
//! The latch flag and the last bumper mask are packed into one `AtomicU16`, so every read sees a
//! consistent pair without masking interrupts:
//!
//! ```text
//!  15        9   8   7             0
//! [ reserved  | L | bumper mask    ]
//! ```
//!
//! Only the bumper handler sets the latch, and only once per episode. Only the recovery maneuver
//! clears it.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::drivers::{BumperMask, EdgeHandler, InterruptContext};

const LATCHED: u16 = 1 << 8;
const MASK: u16 = 0x00FF;

/// One-shot collision flag plus the bumper mask that tripped it.
pub struct CollisionLatch {
    state: AtomicU16,
}

impl CollisionLatch {
    pub const fn new() -> Self {
        Self {
            state: AtomicU16::new(0),
        }
    }

    /// Set the latch and record `mask`, unless it is already set.
    ///
    /// Returns `true` only for the edge that opened a new collision episode. Later edges leave
    /// both the flag and the recorded mask untouched.
    pub fn trip(&self, mask: BumperMask) -> bool {
        self.state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                if cur & LATCHED != 0 {
                    None
                } else {
                    Some(LATCHED | u16::from(mask.bits()))
                }
            })
            .is_ok()
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.state.load(Ordering::Acquire) & LATCHED != 0
    }

    /// Mask of the current episode, or `None` while the latch is clear.
    pub fn snapshot(&self) -> Option<BumperMask> {
        let state = self.state.load(Ordering::Acquire);
        (state & LATCHED != 0).then(|| BumperMask::new((state & MASK) as u8))
    }

    /// Mask recorded by the most recent episode, kept after the latch clears.
    pub fn last_mask(&self) -> BumperMask {
        BumperMask::new((self.state.load(Ordering::Acquire) & MASK) as u8)
    }

    /// End the episode. Called by the recovery maneuver once it has finished.
    pub fn clear(&self) {
        self.state.fetch_and(!LATCHED, Ordering::AcqRel);
    }
}

impl Default for CollisionLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Bumper handler that trips a [`CollisionLatch`].
///
/// Bounce edges after the first are no-ops, so the handler is safe under interrupt storms.
pub struct LatchHandler<'a> {
    latch: &'a CollisionLatch,
}

impl<'a> LatchHandler<'a> {
    pub fn new(latch: &'a CollisionLatch) -> Self {
        Self { latch }
    }
}

impl EdgeHandler for LatchHandler<'_> {
    fn on_edge(&mut self, _cx: &InterruptContext, mask: BumperMask) {
        self.latch.trip(mask);
    }
}
