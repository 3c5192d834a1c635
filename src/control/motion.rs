// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor command layer for the two drive wheels.
//!
//! Maps direction commands onto the bridge: magnitude goes to the motor PWM pair (output A = left
//! wheel, output B = right wheel), rotation goes to the per-side phase pins.
//!
//! | Command | Left wheel | Right wheel |
//! | ------- | ---------- | ----------- |
//! | `Forward` | forward | forward |
//! | `Backward` | reverse | reverse |
//! | `Left` | reverse | forward |
//! | `Right` | forward | reverse |
//! | `Stop` | duty 0 | duty 0 |
//!
//! Duties are raw timer ticks. No validation happens here beyond the clamp in [`PwmPair`].

use crate::drivers::{PhasePins, PwmOutput, PwmPair, PwmTimer, Rotation};

/// A drive command with per-side duty in motor PWM ticks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MotorCommand {
    Forward(u16, u16),
    Backward(u16, u16),
    /// Spin counter-clockwise in place.
    Left(u16, u16),
    /// Spin clockwise in place.
    Right(u16, u16),
    Stop,
}

/// Left/right drive motors on one PWM pair and a set of phase pins.
pub struct Motors<T: PwmTimer, P: PhasePins> {
    pwm: PwmPair<T>,
    phase: P,
    last: MotorCommand,
}

impl<T: PwmTimer, P: PhasePins> Motors<T, P> {
    /// Wrap the motor PWM pair and phase pins. Both wheels start stopped.
    pub fn new(pwm: PwmPair<T>, phase: P) -> Self {
        let mut motors = Self {
            pwm,
            phase,
            last: MotorCommand::Stop,
        };
        motors.stop();
        motors
    }

    pub fn forward(&mut self, duty_left: u16, duty_right: u16) {
        self.drive(Rotation::Forward, Rotation::Forward, duty_left, duty_right);
        self.last = MotorCommand::Forward(duty_left, duty_right);
    }

    pub fn backward(&mut self, duty_left: u16, duty_right: u16) {
        self.drive(Rotation::Reverse, Rotation::Reverse, duty_left, duty_right);
        self.last = MotorCommand::Backward(duty_left, duty_right);
    }

    pub fn left(&mut self, duty_left: u16, duty_right: u16) {
        self.drive(Rotation::Reverse, Rotation::Forward, duty_left, duty_right);
        self.last = MotorCommand::Left(duty_left, duty_right);
    }

    pub fn right(&mut self, duty_left: u16, duty_right: u16) {
        self.drive(Rotation::Forward, Rotation::Reverse, duty_left, duty_right);
        self.last = MotorCommand::Right(duty_left, duty_right);
    }

    /// Zero both duties. Phase pins keep their last level.
    pub fn stop(&mut self) {
        self.pwm.update_duty(PwmOutput::A, 0);
        self.pwm.update_duty(PwmOutput::B, 0);
        self.last = MotorCommand::Stop;
    }

    pub fn apply(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Forward(l, r) => self.forward(l, r),
            MotorCommand::Backward(l, r) => self.backward(l, r),
            MotorCommand::Left(l, r) => self.left(l, r),
            MotorCommand::Right(l, r) => self.right(l, r),
            MotorCommand::Stop => self.stop(),
        }
    }

    #[inline]
    pub fn last_command(&self) -> MotorCommand {
        self.last
    }

    #[inline]
    pub fn pwm(&self) -> &PwmPair<T> {
        &self.pwm
    }

    #[inline]
    pub fn phase(&self) -> &P {
        &self.phase
    }

    fn drive(&mut self, left: Rotation, right: Rotation, duty_left: u16, duty_right: u16) {
        self.phase.set_phase(left, right);
        self.pwm.update_duty(PwmOutput::A, duty_left);
        self.pwm.update_duty(PwmOutput::B, duty_right);
    }
}
