// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side stand-ins for the peripherals in `hw/`, shared by the unit tests.

use std::boxed::Box;
use std::vec::Vec;

use crate::drivers::{
    BlockingDelay, BumperMask, EdgeSource, IndicatorPort, PhasePins, PwmOutput, PwmTimer,
    Rotation, TickTimer,
};

/// Up-counting PWM timer model with compare preload.
///
/// `set_compare` only reaches the shadow register; the live compare value changes on the next
/// update event, exactly like the STM32 timers with OCxPE set.
#[derive(Debug, Default)]
pub struct SimPwm {
    pub period: u16,
    pub running: bool,
    pub shadow: [u16; 2],
    pub live: [u16; 2],
    pub starts: u32,
    pub writes: Vec<(PwmOutput, u16)>,
}

impl SimPwm {
    /// Counter rolls over: preloaded compare values become live.
    pub fn update_event(&mut self) {
        if self.running {
            self.live = self.shadow;
        }
    }

    /// Count the ticks of one full period during which `output` is high (PWM mode 1).
    pub fn high_ticks(&self, output: PwmOutput) -> u32 {
        if !self.running {
            return 0;
        }
        let compare = self.live[output as usize];
        (0..self.period).filter(|&cnt| cnt < compare).count() as u32
    }
}

impl PwmTimer for SimPwm {
    fn start(&mut self, period: u16) {
        self.period = period;
        self.running = true;
        self.starts += 1;
        // UG event on start
        self.live = self.shadow;
    }

    fn set_compare(&mut self, output: PwmOutput, value: u16) {
        self.shadow[output as usize] = value;
        self.writes.push((output, value));
    }

    fn halt(&mut self) {
        self.running = false;
    }
}

#[derive(Debug, Default)]
pub struct SimTick {
    pub period: u16,
    pub running: bool,
    pub starts: u32,
    pub acks: u32,
}

impl TickTimer for SimTick {
    fn start(&mut self, period: u16) {
        self.period = period;
        self.running = true;
        self.starts += 1;
    }

    fn acknowledge(&mut self) {
        self.acks += 1;
    }

    fn halt(&mut self) {
        self.running = false;
    }
}

/// Bumper lines: `press` drives sensors low and latches a pending falling edge.
#[derive(Debug, Default)]
pub struct SimEdges {
    pub armed: bool,
    pub asserted: u8,
    pub pending: bool,
    pub acks: u32,
}

impl SimEdges {
    pub fn press(&mut self, mask: u8) {
        self.asserted |= mask;
        self.pending = true;
    }

    pub fn release_all(&mut self) {
        self.asserted = 0;
    }
}

impl EdgeSource for SimEdges {
    fn arm(&mut self) {
        self.armed = true;
        self.pending = false;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn sample(&self) -> BumperMask {
        BumperMask::new(self.asserted)
    }

    fn acknowledge(&mut self) -> bool {
        self.acks += 1;
        core::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Default)]
pub struct SimPort {
    pub odr: u16,
}

impl IndicatorPort for SimPort {
    fn set_bits(&mut self, mask: u16) {
        self.odr |= mask;
    }

    fn clear_bits(&mut self, mask: u16) {
        self.odr &= !mask;
    }

    fn toggle_bits(&mut self, mask: u16) {
        self.odr ^= mask;
    }
}

#[derive(Debug, Default)]
pub struct SimPhase {
    pub history: Vec<(Rotation, Rotation)>,
}

impl SimPhase {
    pub fn last(&self) -> Option<(Rotation, Rotation)> {
        self.history.last().copied()
    }
}

impl PhasePins for SimPhase {
    fn set_phase(&mut self, left: Rotation, right: Rotation) {
        self.history.push((left, right));
    }
}

/// Records every hold instead of sleeping. An optional hook runs before each hold is recorded,
/// standing in for interrupts that fire while the main loop spins.
#[derive(Default)]
pub struct MockDelay {
    pub holds: Vec<u32>,
    pub hook: Option<Box<dyn FnMut(usize)>>,
}

impl MockDelay {
    pub fn with_hook(hook: impl FnMut(usize) + 'static) -> Self {
        Self {
            holds: Vec::new(),
            hook: Some(Box::new(hook)),
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.holds.iter().sum()
    }
}

impl BlockingDelay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        let index = self.holds.len();
        if let Some(hook) = self.hook.as_mut() {
            hook(index);
        }
        self.holds.push(ms);
    }
}
