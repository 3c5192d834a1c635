// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Direction control for a dual PH/EN motor bridge.
//!
//! In PH/EN mode each side of the bridge takes a PWM signal on EN (magnitude) and a plain GPIO
//! level on PH (rotation). This module only covers the PH half; EN comes from a [`PwmPair`].
//!
//! [`PwmPair`]: crate::drivers::PwmPair

/// Rotation of one wheel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    Forward,
    Reverse,
}

/// Phase (direction) inputs for the left and right sides of the bridge.
pub trait PhasePins {
    fn set_phase(&mut self, left: Rotation, right: Rotation);
}
