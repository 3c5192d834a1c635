// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod bridge;
pub mod bumper;
pub mod led;
pub mod pins;
pub mod pwm;
pub mod tick;
pub mod usart;

pub use bridge::PhEnBridge;
pub use bumper::BumperLines;
pub use led::PortIndicators;
pub use pins::BoardPins;
pub use pwm::TimPwm;
pub use tick::BasicTimer;
pub use usart::Usart;

use crate::drivers::BlockingDelay;

impl BlockingDelay for cortex_m::delay::Delay {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        cortex_m::delay::Delay::delay_ms(self, ms);
    }
}
