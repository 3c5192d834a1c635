// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LEDs on GPIOB, switched a whole group at a time through BSRR.

use stm32f7xx_hal::pac;

use crate::drivers::IndicatorPort;
use crate::hw::pins::IndicatorPins;

/// GPIOB output port owning the indicator pins.
pub struct PortIndicators {
    _pins: IndicatorPins,
}

impl PortIndicators {
    pub fn new(pins: IndicatorPins) -> Self {
        Self { _pins: pins }
    }

    #[inline]
    fn port() -> &'static pac::gpiob::RegisterBlock {
        unsafe { &*pac::GPIOB::ptr() }
    }
}

impl IndicatorPort for PortIndicators {
    #[inline]
    fn set_bits(&mut self, mask: u16) {
        Self::port().bsrr.write(|w| unsafe { w.bits(u32::from(mask)) });
    }

    #[inline]
    fn clear_bits(&mut self, mask: u16) {
        Self::port().bsrr.write(|w| unsafe { w.bits(u32::from(mask) << 16) });
    }

    fn toggle_bits(&mut self, mask: u16) {
        let mask = u32::from(mask);
        let odr = Self::port().odr.read().bits();

        // Set what is low, reset what is high, in one write
        let bsrr = ((odr & mask) << 16) | (!odr & mask);
        Self::port().bsrr.write(|w| unsafe { w.bits(bsrr) });
    }
}
