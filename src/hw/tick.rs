// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM6 basic timer as the periodic interrupt source.

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac::{self, Interrupt};

use crate::drivers::TickTimer;

pub struct BasicTimer<TIM> {
    tim: TIM,
}

impl BasicTimer<pac::TIM6> {
    /// Enable the TIM6 clock and prescale `timer_clock_hz` down to `tick_hz`.
    pub fn tim6(tim6: pac::TIM6, timer_clock_hz: u32, tick_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim6en().set_bit());

        let tim = tim6;
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let psc = (timer_clock_hz / tick_hz).max(1) - 1;
        tim.psc.write(|w| unsafe { w.bits(psc) });

        // Only counter overflow raises UIF, not the UG write in `start`
        tim.cr1.modify(|_, w| w.urs().set_bit().arpe().set_bit());

        Self { tim }
    }
}

impl TickTimer for BasicTimer<pac::TIM6> {
    fn start(&mut self, period: u16) {
        let tim = &self.tim;

        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.arr.write(|w| unsafe { w.bits(u32::from(period) - 1) });
        tim.cnt.write(|w| unsafe { w.bits(0) });
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        tim.dier.modify(|_, w| w.uie().set_bit());
        unsafe { NVIC::unmask(Interrupt::TIM6_DAC) };
        tim.cr1.modify(|_, w| w.cen().set_bit());
    }

    #[inline]
    fn acknowledge(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }

    fn halt(&mut self) {
        NVIC::mask(Interrupt::TIM6_DAC);
        self.tim.dier.modify(|_, w| w.uie().clear_bit());
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}
