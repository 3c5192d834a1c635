// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-output PWM channel on a single up-counting timer.
//!
//! Both outputs share one period; each has its own duty value in ticks. Used once for the drive
//! motors (TIM4) and once for the servo head (TIM3).
//!
//! Compare registers are preloaded, so a new duty shows up on the pin at the next period boundary
//! rather than immediately.

use crate::drivers::ConfigError;

/// One of the two compare outputs of a PWM timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PwmOutput {
    /// Channel 1. Left motor or pan servo.
    A = 0,
    /// Channel 2. Right motor or tilt servo.
    B = 1,
}

/// Register-level access to a timer running in PWM mode 1.
pub trait PwmTimer {
    /// Stop the counter, program a `period`-tick cycle, load the preloaded compare values and
    /// start counting from zero with both outputs enabled. `period` is never zero.
    fn start(&mut self, period: u16);

    /// Write the compare (shadow) register of one output.
    fn set_compare(&mut self, output: PwmOutput, value: u16);

    /// Stop the counter and disable both outputs.
    fn halt(&mut self);
}

/// Two PWM outputs sharing one timer period.
///
/// Invariant: both duty values are always `<= period`.
pub struct PwmPair<T: PwmTimer> {
    timer: T,
    period: u16,
    duty: [u16; 2],
    active: bool,
}

impl<T: PwmTimer> PwmPair<T> {
    /// Take ownership of `timer` and start it with the given period and initial duties.
    pub fn init(timer: T, period: u16, duty_a: u16, duty_b: u16) -> Result<Self, ConfigError> {
        let mut pair = Self {
            timer,
            period: 0,
            duty: [0; 2],
            active: false,
        };
        pair.reinit(period, duty_a, duty_b)?;
        Ok(pair)
    }

    /// Fully reconfigure the channel. Previous period and duties are discarded.
    pub fn reinit(&mut self, period: u16, duty_a: u16, duty_b: u16) -> Result<(), ConfigError> {
        if period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        self.timer.halt();
        self.period = period;
        self.duty = [duty_a.min(period), duty_b.min(period)];
        self.timer.set_compare(PwmOutput::A, self.duty[0]);
        self.timer.set_compare(PwmOutput::B, self.duty[1]);
        self.timer.start(period);
        self.active = true;

        Ok(())
    }

    /// Change one output's duty. Values above the period are clamped to 100 %.
    ///
    /// The other output and the period are left untouched. While the channel is stopped the value
    /// is still recorded, but the outputs stay disabled until the next `reinit`.
    pub fn update_duty(&mut self, output: PwmOutput, value: u16) {
        let value = value.min(self.period);
        self.duty[output as usize] = value;
        self.timer.set_compare(output, value);
    }

    /// Halt the timer and disable both outputs.
    pub fn stop(&mut self) {
        self.timer.halt();
        self.active = false;
    }

    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    #[inline]
    pub fn duty(&self, output: PwmOutput) -> u16 {
        self.duty[output as usize]
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    #[inline]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimPwm;
    use proptest::prelude::*;

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(
            PwmPair::init(SimPwm::default(), 0, 0, 0).err(),
            Some(ConfigError::ZeroPeriod)
        );
    }

    #[test]
    fn init_programs_period_and_both_duties() {
        let pwm = PwmPair::init(SimPwm::default(), 15_000, 7_500, 4_500).unwrap();

        assert!(pwm.is_active());
        assert_eq!(pwm.period(), 15_000);
        assert_eq!(pwm.duty(PwmOutput::A), 7_500);
        assert_eq!(pwm.duty(PwmOutput::B), 4_500);
        assert_eq!(pwm.timer().period, 15_000);
        assert_eq!(pwm.timer().live, [7_500, 4_500]);
    }

    #[test]
    fn half_and_thirty_percent_duty_fractions() {
        let pwm = PwmPair::init(SimPwm::default(), 15_000, 7_500, 4_500).unwrap();

        assert_eq!(pwm.timer().high_ticks(PwmOutput::A) * 100 / 15_000, 50);
        assert_eq!(pwm.timer().high_ticks(PwmOutput::B) * 100 / 15_000, 30);
    }

    #[test]
    fn update_takes_effect_at_next_period_boundary() {
        let mut pwm = PwmPair::init(SimPwm::default(), 1_000, 100, 100).unwrap();

        pwm.update_duty(PwmOutput::A, 600);
        assert_eq!(pwm.duty(PwmOutput::A), 600);
        assert_eq!(pwm.timer().high_ticks(PwmOutput::A), 100);

        pwm.timer_mut().update_event();
        assert_eq!(pwm.timer().high_ticks(PwmOutput::A), 600);
    }

    #[test]
    fn update_leaves_other_output_and_period_alone() {
        let mut pwm = PwmPair::init(SimPwm::default(), 60_000, 1_700, 1_700).unwrap();

        pwm.update_duty(PwmOutput::B, 7_000);

        assert_eq!(pwm.duty(PwmOutput::A), 1_700);
        assert_eq!(pwm.duty(PwmOutput::B), 7_000);
        assert_eq!(pwm.period(), 60_000);
        assert_eq!(pwm.timer().starts, 1);
    }

    #[test]
    fn oversized_initial_duty_is_clamped() {
        let pwm = PwmPair::init(SimPwm::default(), 500, 9_999, 500).unwrap();

        assert_eq!(pwm.duty(PwmOutput::A), 500);
        assert_eq!(pwm.timer().high_ticks(PwmOutput::A), 500);
    }

    #[test]
    fn reinit_discards_previous_duties() {
        let mut pwm = PwmPair::init(SimPwm::default(), 15_000, 7_500, 7_500).unwrap();
        pwm.update_duty(PwmOutput::B, 1_500);

        pwm.reinit(60_000, 0, 0).unwrap();

        assert_eq!(pwm.period(), 60_000);
        assert_eq!(pwm.duty(PwmOutput::A), 0);
        assert_eq!(pwm.duty(PwmOutput::B), 0);
        assert_eq!(pwm.timer().live, [0, 0]);
        assert_eq!(pwm.timer().starts, 2);
    }

    #[test]
    fn failed_reinit_keeps_running_configuration() {
        let mut pwm = PwmPair::init(SimPwm::default(), 15_000, 7_500, 7_500).unwrap();

        assert_eq!(pwm.reinit(0, 1, 1), Err(ConfigError::ZeroPeriod));
        assert!(pwm.is_active());
        assert_eq!(pwm.period(), 15_000);
        assert_eq!(pwm.duty(PwmOutput::A), 7_500);
    }

    #[test]
    fn stop_disables_outputs() {
        let mut pwm = PwmPair::init(SimPwm::default(), 15_000, 7_500, 7_500).unwrap();

        pwm.stop();

        assert!(!pwm.is_active());
        assert!(!pwm.timer().running);
        assert_eq!(pwm.timer().high_ticks(PwmOutput::A), 0);

        pwm.reinit(15_000, 4_500, 4_500).unwrap();
        assert!(pwm.is_active());
        assert_eq!(pwm.timer().high_ticks(PwmOutput::B), 4_500);
    }

    proptest! {
        #[test]
        fn high_fraction_equals_duty_over_period(period in 1u16..=u16::MAX, frac in 0.0f64..=1.0) {
            let duty = ((f64::from(period) * frac) as u16).min(period);
            let pwm = PwmPair::init(SimPwm::default(), period, duty, 0).unwrap();

            prop_assert_eq!(pwm.timer().high_ticks(PwmOutput::A), u32::from(duty));
        }

        #[test]
        fn duty_never_exceeds_full_scale(period in 1u16..=u16::MAX, value in any::<u16>()) {
            let mut pwm = PwmPair::init(SimPwm::default(), period, 0, 0).unwrap();

            pwm.update_duty(PwmOutput::B, value);
            pwm.timer_mut().update_event();

            prop_assert!(pwm.duty(PwmOutput::B) <= period);
            prop_assert!(pwm.timer().high_ticks(PwmOutput::B) <= u32::from(period));
            prop_assert_eq!(pwm.duty(PwmOutput::B), value.min(period));
        }
    }
}
