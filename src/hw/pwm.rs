// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel PWM on the STM32F7 general-purpose timers (TIM3, TIM4).
//!
//! Channels 1 and 2 run in PWM mode 1 with compare preload (OCxPE) and auto-reload preload
//! (ARPE), so every register change lands on the next update event. ARR holds `period - 1`.

use stm32f7xx_hal::pac;

use crate::drivers::{PwmOutput, PwmTimer};

/// CCMR1 output compare mode field value for PWM mode 1.
const OCM_PWM1: u32 = 0b110;

/// CCMR1 for CH1 and CH2: output, PWM mode 1, preload enabled.
const CCMR1_PWM1_PRELOAD: u32 = (OCM_PWM1 << 4) | (1 << 3) | (OCM_PWM1 << 12) | (1 << 11);

/// A general-purpose timer driving two PWM pins.
pub struct TimPwm<TIM, PINS> {
    tim: TIM,
    // Held so the alternate-function pins stay claimed.
    _pins: PINS,
}

macro_rules! pwm_timer {
    ($TIM:ident, $ctor:ident, $timen:ident) => {
        impl<PINS> TimPwm<pac::$TIM, PINS> {
            /// Enable the timer clock and prescale `timer_clock_hz` down to `tick_hz`.
            /// The counter stays stopped until the first `start`.
            pub fn $ctor(tim: pac::$TIM, pins: PINS, timer_clock_hz: u32, tick_hz: u32) -> Self {
                let rcc = unsafe { &*pac::RCC::ptr() };
                rcc.apb1enr.modify(|_, w| w.$timen().set_bit());

                // Disable counter while configuring
                tim.cr1.modify(|_, w| w.cen().clear_bit());

                let psc = (timer_clock_hz / tick_hz).max(1) - 1;
                tim.psc.write(|w| unsafe { w.bits(psc) });

                tim.ccmr1_output().write(|w| unsafe { w.bits(CCMR1_PWM1_PRELOAD) });
                tim.cr1.modify(|_, w| w.arpe().set_bit());

                Self { tim, _pins: pins }
            }
        }

        impl<PINS> PwmTimer for TimPwm<pac::$TIM, PINS> {
            fn start(&mut self, period: u16) {
                let tim = &self.tim;

                tim.cr1.modify(|_, w| w.cen().clear_bit());
                tim.arr.write(|w| unsafe { w.bits(u32::from(period) - 1) });
                tim.cnt.write(|w| unsafe { w.bits(0) });

                // Update event: load PSC, ARR and both preloaded compare values
                tim.egr.write(|w| w.ug().set_bit());

                tim.ccer.modify(|_, w| w.cc1e().set_bit().cc2e().set_bit());
                tim.cr1.modify(|_, w| w.cen().set_bit());
            }

            fn set_compare(&mut self, output: PwmOutput, value: u16) {
                let value = u32::from(value);
                match output {
                    PwmOutput::A => self.tim.ccr1.write(|w| unsafe { w.bits(value) }),
                    PwmOutput::B => self.tim.ccr2.write(|w| unsafe { w.bits(value) }),
                }
            }

            fn halt(&mut self) {
                self.tim.cr1.modify(|_, w| w.cen().clear_bit());
                self.tim
                    .ccer
                    .modify(|_, w| w.cc1e().clear_bit().cc2e().clear_bit());
            }
        }
    };
}

pwm_timer!(TIM3, tim3, tim3en);
pwm_timer!(TIM4, tim4, tim4en);
