// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! PH pins and sleep control of the dual PH/EN motor bridge.

use stm32f7xx_hal::gpio::{gpiod, Output, PushPull};

use crate::drivers::{PhasePins, Rotation};
use crate::hw::pins::{MotorEnPins, MotorPins};

/// PH high = forward on both sides.
pub struct PhEnBridge {
    ph_left: gpiod::PD0<Output<PushPull>>,
    ph_right: gpiod::PD1<Output<PushPull>>,
    nsleep: gpiod::PD2<Output<PushPull>>,
}

impl PhEnBridge {
    /// Take the phase and sleep pins out of `pins` and return the EN pins, which belong to the
    /// PWM timer. The bridge starts asleep.
    pub fn new(pins: MotorPins) -> (Self, MotorEnPins) {
        let mut bridge = Self {
            ph_left: pins.ph_left,
            ph_right: pins.ph_right,
            nsleep: pins.nsleep,
        };
        bridge.sleep();
        (bridge, (pins.en_left, pins.en_right))
    }

    #[inline]
    pub fn wake(&mut self) {
        self.nsleep.set_high();
    }

    #[inline]
    pub fn sleep(&mut self) {
        self.nsleep.set_low();
    }
}

impl PhasePins for PhEnBridge {
    fn set_phase(&mut self, left: Rotation, right: Rotation) {
        match left {
            Rotation::Forward => self.ph_left.set_high(),
            Rotation::Reverse => self.ph_left.set_low(),
        }
        match right {
            Rotation::Forward => self.ph_right.set_high(),
            Rotation::Reverse => self.ph_right.set_low(),
        }
    }
}
