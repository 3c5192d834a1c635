// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Logic
//!
//! Everything above the drivers: collision state, drive commands and the main loop.
//!
//! ## Modules
//!
//! - [`latch`] - One-shot collision latch shared with interrupt context.
//! - [`indicators`] - 10 Hz status blink reflecting the latch.
//! - [`motion`] - Direction commands for the two drive motors.
//! - [`sequence`] - Time-boxed drive and servo sequences.
//! - [`supervisor`] - Normal / Recovery state machine run from `main`.

pub mod indicators;
pub mod latch;
pub mod motion;
pub mod sequence;
pub mod supervisor;

pub use indicators::IndicatorTask;
pub use latch::{CollisionLatch, LatchHandler};
pub use motion::{MotorCommand, Motors};
pub use sequence::{DriveStep, SweepStep, COLLISION_RECOVERY, DEMO_PATTERN, SERVO_SWEEP};
pub use supervisor::{Mode, NormalPolicy, Supervisor};
