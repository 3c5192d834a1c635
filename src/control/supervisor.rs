// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Main Control Loop
//!
//! Two states, derived from the collision latch on every pass:
//!
//! - **Normal** (latch clear): run one whole sequence of the configured [`NormalPolicy`].
//! - **Recovery** (latch set): report the bumper mask, run the recovery maneuver, which clears the
//!   latch once it has finished.
//!
//! The latch is only looked at between passes. A sequence that has started always runs to its
//! last hold.

use core::fmt::Write;

use crate::config::{CRUISE_DUTY, CRUISE_POLL_MS};
use crate::control::sequence::{self, DEMO_PATTERN, SERVO_SWEEP};
use crate::control::{CollisionLatch, Motors};
use crate::drivers::{BlockingDelay, PhasePins, PwmPair, PwmTimer};

/// Operating mode seen by one pass of the loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Normal,
    Recovery,
}

/// What the robot does while no collision is latched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NormalPolicy {
    /// Drive the demonstration pattern over and over.
    DemoPattern,
    /// Drive straight ahead until something is hit.
    Cruise,
    /// Keep the wheels stopped and swing the sensor head.
    ServoSweep,
}

impl NormalPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            NormalPolicy::DemoPattern => "demo pattern",
            NormalPolicy::Cruise => "cruise",
            NormalPolicy::ServoSweep => "servo sweep",
        }
    }
}

/// Owns everything the main loop touches from thread mode.
pub struct Supervisor<'a, MT, P, ST, D, W>
where
    MT: PwmTimer,
    P: PhasePins,
    ST: PwmTimer,
    D: BlockingDelay,
    W: Write,
{
    motors: Motors<MT, P>,
    servos: PwmPair<ST>,
    delay: D,
    latch: &'a CollisionLatch,
    policy: NormalPolicy,
    diag: W,
    recoveries: u32,
}

impl<'a, MT, P, ST, D, W> Supervisor<'a, MT, P, ST, D, W>
where
    MT: PwmTimer,
    P: PhasePins,
    ST: PwmTimer,
    D: BlockingDelay,
    W: Write,
{
    pub fn new(
        motors: Motors<MT, P>,
        servos: PwmPair<ST>,
        delay: D,
        latch: &'a CollisionLatch,
        policy: NormalPolicy,
        diag: W,
    ) -> Self {
        Self {
            motors,
            servos,
            delay,
            latch,
            policy,
            diag,
            recoveries: 0,
        }
    }

    /// Print the boot banner.
    pub fn announce(&mut self) {
        let _ = write!(
            self.diag,
            "bumpbot {} ready, policy: {}\r\n",
            env!("CARGO_PKG_VERSION"),
            self.policy.name()
        );
    }

    /// Run one pass of the loop and report which state it ran in.
    ///
    /// A collision is reported at the start of the pass after the one it happened in, so the
    /// diagnostic line can trail the edge by a whole Normal sequence: up to 16 s under
    /// [`NormalPolicy::DemoPattern`], 10 s under [`NormalPolicy::ServoSweep`] and 10 ms under
    /// [`NormalPolicy::Cruise`].
    pub fn step(&mut self) -> Mode {
        if let Some(mask) = self.latch.snapshot() {
            let _ = write!(
                self.diag,
                "Collision Detected! Bumper Sensor State: 0x{:02X}\r\n",
                mask
            );
            sequence::recover(&mut self.motors, &mut self.delay, self.latch);
            self.recoveries = self.recoveries.wrapping_add(1);
            return Mode::Recovery;
        }

        match self.policy {
            NormalPolicy::DemoPattern => {
                sequence::run(&mut self.motors, &mut self.delay, &DEMO_PATTERN);
            }
            NormalPolicy::Cruise => {
                self.motors.forward(CRUISE_DUTY, CRUISE_DUTY);
                self.delay.delay_ms(CRUISE_POLL_MS);
            }
            NormalPolicy::ServoSweep => {
                sequence::sweep(&mut self.servos, &mut self.delay, &SERVO_SWEEP);
            }
        }

        Mode::Normal
    }

    /// Loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Completed recovery maneuvers since boot. Wraps.
    #[inline]
    pub fn recoveries(&self) -> u32 {
        self.recoveries
    }

    #[inline]
    pub fn policy(&self) -> NormalPolicy {
        self.policy
    }

    #[inline]
    pub fn motors(&self) -> &Motors<MT, P> {
        &self.motors
    }

    #[inline]
    pub fn servos(&self) -> &PwmPair<ST> {
        &self.servos
    }

    #[inline]
    pub fn delay(&self) -> &D {
        &self.delay
    }

    #[inline]
    pub fn diag(&self) -> &W {
        &self.diag
    }
}
