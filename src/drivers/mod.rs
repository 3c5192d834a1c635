// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Interrupt-Driven Drivers
//!
//! This module contains the drivers that sit above the raw `hw/` layer and below the control
//! logic. Each one is generic over a small register-level trait, which `hw/` implements for the
//! STM32F7 peripherals and the tests implement with mocks.
//!
//! ## Existing drivers
//!
//! - [`pwm`] – two-output PWM channel on one up-counting timer ([`PwmTimer`])
//! - [`ticker`] – fixed-rate periodic task dispatcher ([`TickTimer`])
//! - [`bumper`] – edge-triggered bumper sensor monitor ([`EdgeSource`])
//! - [`bridge`] – phase pins of a PH/EN motor bridge ([`PhasePins`])
//! - [`indicator`] – LED groups on one GPIO port ([`IndicatorPort`])

use core::fmt;

pub mod bridge;
pub mod bumper;
pub mod indicator;
pub mod pwm;
pub mod ticker;

pub use bridge::{PhasePins, Rotation};
pub use bumper::{BumperMask, BumperMonitor, EdgeHandler, EdgeSource};
pub use indicator::{ActiveLevel, IndicatorGroup, IndicatorPort};
pub use pwm::{PwmOutput, PwmPair, PwmTimer};
pub use ticker::{TickTask, TickTimer, Ticker};

/// Rejected timer configuration. Raised at init time only.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A timer period of zero ticks has no defined output.
    ZeroPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPeriod => f.write_str("timer period must be at least one tick"),
        }
    }
}

/// Token handed to callbacks that run inside an interrupt handler.
///
/// Only the dispatchers in this module can build one. It deliberately offers no way to wait, so a
/// callback written against it cannot block the interrupt it runs in.
#[derive(Debug)]
pub struct InterruptContext {
    count: u32,
}

impl InterruptContext {
    #[inline]
    pub(crate) fn new(count: u32) -> Self {
        Self { count }
    }

    /// Number of interrupts this source has delivered, including the current one. Wraps.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Millisecond busy-wait. Interrupts stay live while it spins.
///
/// Only thread-mode code receives one of these; interrupt callbacks get an [`InterruptContext`].
pub trait BlockingDelay {
    fn delay_ms(&mut self, ms: u32);
}

impl<D: BlockingDelay + ?Sized> BlockingDelay for &mut D {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
