// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the bumpbot STM32F767 board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub motors: MotorPins,
    pub servos: ServoPins,
    pub bumpers: BumperPins,
    pub indicators: IndicatorPins,
    pub usart3: Usart3Pins,
}

/// Dual PH/EN motor bridge
pub struct MotorPins {
    pub en_left: gpiod::PD12<Alternate<2>>,  // TIM4_CH1 (PWM)
    pub en_right: gpiod::PD13<Alternate<2>>, // TIM4_CH2 (PWM)
    pub ph_left: gpiod::PD0<Output<PushPull>>,
    pub ph_right: gpiod::PD1<Output<PushPull>>,
    pub nsleep: gpiod::PD2<Output<PushPull>>,
}

/// EN inputs of the bridge, handed to the motor PWM timer.
pub type MotorEnPins = (gpiod::PD12<Alternate<2>>, gpiod::PD13<Alternate<2>>);

/// Sensor head servos
pub struct ServoPins {
    pub pan: gpioa::PA6<Alternate<2>>,  // TIM3_CH1 (PWM)
    pub tilt: gpioa::PA7<Alternate<2>>, // TIM3_CH2 (PWM)
}

/// Bumper switches, closed = low. All six share EXTI15_10.
pub struct BumperPins {
    pub b0: gpioe::PE10<Input<PullUp>>,
    pub b1: gpioe::PE11<Input<PullUp>>,
    pub b2: gpioe::PE12<Input<PullUp>>,
    pub b3: gpioe::PE13<Input<PullUp>>,
    pub b4: gpioe::PE14<Input<PullUp>>,
    pub b5: gpioe::PE15<Input<PullUp>>,
}

/// Status LEDs on GPIOB
pub struct IndicatorPins {
    pub front0: gpiob::PB0<Output<PushPull>>,
    pub front5: gpiob::PB5<Output<PushPull>>,
    pub rear6: gpiob::PB6<Output<PushPull>>,
    pub rear7: gpiob::PB7<Output<PushPull>>,
}

/// USART3, routed to the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            motors: MotorPins {
                en_left: gpiod.pd12.into_alternate::<2>(),
                en_right: gpiod.pd13.into_alternate::<2>(),
                ph_left: gpiod.pd0.into_push_pull_output(),
                ph_right: gpiod.pd1.into_push_pull_output(),
                nsleep: gpiod.pd2.into_push_pull_output(),
            },

            servos: ServoPins {
                pan: gpioa.pa6.into_alternate::<2>(),
                tilt: gpioa.pa7.into_alternate::<2>(),
            },

            bumpers: BumperPins {
                b0: gpioe.pe10.into_pull_up_input(),
                b1: gpioe.pe11.into_pull_up_input(),
                b2: gpioe.pe12.into_pull_up_input(),
                b3: gpioe.pe13.into_pull_up_input(),
                b4: gpioe.pe14.into_pull_up_input(),
                b5: gpioe.pe15.into_pull_up_input(),
            },

            indicators: IndicatorPins {
                front0: gpiob.pb0.into_push_pull_output(),
                front5: gpiob.pb5.into_push_pull_output(),
                rear6: gpiob.pb6.into_push_pull_output(),
                rear7: gpiob.pb7.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
