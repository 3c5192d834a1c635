// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic status blink driven by the collision latch.
//!
//! Runs from the 10 Hz tick. While driving normally the front group blinks and the rear group is
//! dark; while a collision is latched the roles swap.

use crate::control::CollisionLatch;
use crate::drivers::{IndicatorGroup, IndicatorPort, InterruptContext, TickTask};

/// Tick task that blinks one of two indicator groups depending on the latch.
pub struct IndicatorTask<'a, P: IndicatorPort> {
    port: P,
    front: IndicatorGroup,
    rear: IndicatorGroup,
    latch: &'a CollisionLatch,
}

impl<'a, P: IndicatorPort> IndicatorTask<'a, P> {
    /// Both groups start dark.
    pub fn new(
        mut port: P,
        front: IndicatorGroup,
        rear: IndicatorGroup,
        latch: &'a CollisionLatch,
    ) -> Self {
        front.off(&mut port);
        rear.off(&mut port);
        Self {
            port,
            front,
            rear,
            latch,
        }
    }

    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }
}

impl<P: IndicatorPort> TickTask for IndicatorTask<'_, P> {
    fn on_tick(&mut self, _cx: &InterruptContext) {
        if self.latch.is_set() {
            self.rear.toggle(&mut self.port);
            self.front.off(&mut self.port);
        } else {
            self.front.toggle(&mut self.port);
            self.rear.off(&mut self.port);
        }
    }
}
