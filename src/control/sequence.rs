// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Time-boxed drive sequences.
//!
//! A sequence is plain data: an ordered slice of [`DriveStep`]s. [`run`] applies each command and
//! then busy-waits for its hold time. Sequences always run start to finish; nothing checks the
//! collision latch until [`run`] returns.

use crate::config::{
    DUTY_10, DUTY_30, DUTY_50, SERVO_DUTY_MAX, SERVO_DUTY_MIN, SERVO_HOLD_MS,
};
use crate::control::{CollisionLatch, MotorCommand, Motors};
use crate::drivers::{BlockingDelay, PhasePins, PwmOutput, PwmPair, PwmTimer};

/// One command and how long to hold it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveStep {
    pub command: MotorCommand,
    pub hold_ms: u32,
}

impl DriveStep {
    pub const fn new(command: MotorCommand, hold_ms: u32) -> Self {
        Self { command, hold_ms }
    }
}

/// Demonstration pattern: forward, left, right and backward, each followed by a stop.
pub const DEMO_PATTERN: [DriveStep; 8] = [
    DriveStep::new(MotorCommand::Forward(DUTY_50, DUTY_50), 2_000),
    DriveStep::new(MotorCommand::Stop, 2_000),
    DriveStep::new(MotorCommand::Left(DUTY_30, DUTY_30), 2_000),
    DriveStep::new(MotorCommand::Stop, 2_000),
    DriveStep::new(MotorCommand::Right(DUTY_30, DUTY_30), 2_000),
    DriveStep::new(MotorCommand::Stop, 2_000),
    DriveStep::new(MotorCommand::Backward(DUTY_30, DUTY_30), 2_000),
    DriveStep::new(MotorCommand::Stop, 2_000),
];

/// Back away from an obstacle and turn right.
pub const COLLISION_RECOVERY: [DriveStep; 5] = [
    DriveStep::new(MotorCommand::Stop, 2_000),
    DriveStep::new(MotorCommand::Backward(DUTY_30, DUTY_30), 3_000),
    DriveStep::new(MotorCommand::Stop, 1_000),
    DriveStep::new(MotorCommand::Right(DUTY_10, DUTY_10), 5_000),
    DriveStep::new(MotorCommand::Stop, 2_000),
];

/// Execute `steps` in order, blocking for each hold.
pub fn run<T, P, D>(motors: &mut Motors<T, P>, delay: &mut D, steps: &[DriveStep])
where
    T: PwmTimer,
    P: PhasePins,
    D: BlockingDelay,
{
    for step in steps {
        motors.apply(step.command);
        delay.delay_ms(step.hold_ms);
    }
}

/// Run [`COLLISION_RECOVERY`], then clear the latch.
pub fn recover<T, P, D>(motors: &mut Motors<T, P>, delay: &mut D, latch: &CollisionLatch)
where
    T: PwmTimer,
    P: PhasePins,
    D: BlockingDelay,
{
    run(motors, delay, &COLLISION_RECOVERY);
    latch.clear();
}

/// Servo head position held for a while.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SweepStep {
    /// Pulse width in servo PWM ticks, applied to both servo outputs.
    pub duty: u16,
    pub hold_ms: u32,
}

/// Swing the sensor head from one end of its travel to the other.
pub const SERVO_SWEEP: [SweepStep; 2] = [
    SweepStep {
        duty: SERVO_DUTY_MIN,
        hold_ms: SERVO_HOLD_MS,
    },
    SweepStep {
        duty: SERVO_DUTY_MAX,
        hold_ms: SERVO_HOLD_MS,
    },
];

/// Execute a servo sweep in order, blocking for each hold.
pub fn sweep<T, D>(servos: &mut PwmPair<T>, delay: &mut D, steps: &[SweepStep])
where
    T: PwmTimer,
    D: BlockingDelay,
{
    for step in steps {
        servos.update_duty(PwmOutput::A, step.duty);
        servos.update_duty(PwmOutput::B, step.duty);
        delay.delay_ms(step.hold_ms);
    }
}
