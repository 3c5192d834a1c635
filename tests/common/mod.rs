// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Peripheral stand-ins for the integration tests.

#![allow(dead_code)]

use bumpbot::drivers::{
    BlockingDelay, BumperMask, EdgeSource, IndicatorPort, PhasePins, PwmOutput, PwmTimer,
    Rotation, TickTimer,
};

/// Compare registers only; no preload modelling.
#[derive(Debug, Default)]
pub struct FakePwm {
    pub period: u16,
    pub running: bool,
    pub compare: [u16; 2],
}

impl PwmTimer for FakePwm {
    fn start(&mut self, period: u16) {
        self.period = period;
        self.running = true;
    }

    fn set_compare(&mut self, output: PwmOutput, value: u16) {
        self.compare[output as usize] = value;
    }

    fn halt(&mut self) {
        self.running = false;
    }
}

#[derive(Debug, Default)]
pub struct FakePhase {
    pub current: Option<(Rotation, Rotation)>,
}

impl PhasePins for FakePhase {
    fn set_phase(&mut self, left: Rotation, right: Rotation) {
        self.current = Some((left, right));
    }
}

#[derive(Debug, Default)]
pub struct FakeTick {
    pub running: bool,
}

impl TickTimer for FakeTick {
    fn start(&mut self, _period: u16) {
        self.running = true;
    }

    fn acknowledge(&mut self) {}

    fn halt(&mut self) {
        self.running = false;
    }
}

/// Six active-low switches; `bump` latches a pending falling edge.
#[derive(Debug, Default)]
pub struct FakeSwitches {
    pub closed: u8,
    pub pending: bool,
}

impl FakeSwitches {
    pub fn bump(&mut self, mask: u8) {
        self.closed |= mask;
        self.pending = true;
    }

    pub fn release(&mut self) {
        self.closed = 0;
    }
}

impl EdgeSource for FakeSwitches {
    fn arm(&mut self) {
        self.pending = false;
    }

    fn disarm(&mut self) {}

    fn sample(&self) -> BumperMask {
        BumperMask::new(self.closed)
    }

    fn acknowledge(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Default)]
pub struct FakePort {
    pub odr: u16,
    pub history: Vec<u16>,
}

impl IndicatorPort for FakePort {
    fn set_bits(&mut self, mask: u16) {
        self.odr |= mask;
        self.history.push(self.odr);
    }

    fn clear_bits(&mut self, mask: u16) {
        self.odr &= !mask;
        self.history.push(self.odr);
    }

    fn toggle_bits(&mut self, mask: u16) {
        self.odr ^= mask;
        self.history.push(self.odr);
    }
}

/// Advances simulated time instead of spinning. The hook sees the elapsed time before each hold,
/// which is where interrupts would fire on the target.
pub struct FakeClock {
    pub now_ms: u64,
    pub holds: Vec<u32>,
    hook: Box<dyn FnMut(u64)>,
}

impl FakeClock {
    pub fn new(hook: impl FnMut(u64) + 'static) -> Self {
        Self {
            now_ms: 0,
            holds: Vec::new(),
            hook: Box::new(hook),
        }
    }
}

impl BlockingDelay for FakeClock {
    fn delay_ms(&mut self, ms: u32) {
        (self.hook)(self.now_ms);
        self.now_ms += u64::from(ms);
        self.holds.push(ms);
    }
}
