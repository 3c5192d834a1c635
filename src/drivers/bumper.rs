// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Edge-triggered bumper sensor monitor.
//!
//! Every bumper line is armed for falling-edge interrupts. On an edge the monitor samples which
//! sensors are asserted and hands the mask to its registered [`EdgeHandler`].
//!
//! There is no debounce filter here. Contact bounce produces bursts of edges, so handlers must be
//! idempotent; the collision latch provides first-edge-wins semantics.

use core::fmt;

use crate::drivers::InterruptContext;

/// Snapshot of asserted bumpers. Bit `i` set means sensor `i` is pressed.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct BumperMask(u8);

impl BumperMask {
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether sensor `index` (0..8) is pressed.
    #[inline]
    pub const fn is_asserted(self, index: u8) -> bool {
        index < 8 && (self.0 & (1 << index)) != 0
    }
}

impl fmt::Debug for BumperMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BumperMask({:#010b})", self.0)
    }
}

impl fmt::UpperHex for BumperMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Register-level access to a group of edge-triggered sensor lines.
pub trait EdgeSource {
    /// Enable falling-edge interrupts on every monitored line and drop stale pending flags.
    fn arm(&mut self);

    /// Disable the interrupts.
    fn disarm(&mut self);

    /// Read which sensors are asserted right now.
    fn sample(&self) -> BumperMask;

    /// Clear pending edge flags. Returns `false` when none of the monitored lines was pending.
    fn acknowledge(&mut self) -> bool;
}

/// Reaction to a qualifying edge, run in interrupt context.
pub trait EdgeHandler {
    fn on_edge(&mut self, cx: &InterruptContext, mask: BumperMask);
}

/// Bumper monitor owning its sensor lines and exactly one handler.
pub struct BumperMonitor<S: EdgeSource, H: EdgeHandler> {
    source: S,
    handler: H,
    edges: u32,
    armed: bool,
}

impl<S: EdgeSource, H: EdgeHandler> BumperMonitor<S, H> {
    /// Arm every line and register `handler`.
    pub fn init(mut source: S, handler: H) -> Self {
        source.arm();
        Self {
            source,
            handler,
            edges: 0,
            armed: true,
        }
    }

    /// Replace the handler, returning the previous one. The lines stay armed.
    pub fn register(&mut self, handler: H) -> H {
        core::mem::replace(&mut self.handler, handler)
    }

    /// Disarm every line.
    pub fn stop(&mut self) {
        self.source.disarm();
        self.armed = false;
    }

    /// Body of the EXTI interrupt handler.
    pub fn on_interrupt(&mut self) {
        let mask = self.source.sample();
        if !self.source.acknowledge() || !self.armed {
            return;
        }

        self.edges = self.edges.wrapping_add(1);
        let cx = InterruptContext::new(self.edges);
        self.handler.on_edge(&cx, mask);
    }

    /// Qualifying edges seen since `init`.
    #[inline]
    pub fn edges(&self) -> u32 {
        self.edges
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
