// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bumper switches on PE10..PE15 as falling-edge EXTI lines.
//!
//! All six lines share the EXTI15_10 vector. Sensor `i` is on pin `PE(10 + i)` and maps to bit `i`
//! of the reported mask.

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac::{self, Interrupt};

use crate::drivers::{BumperMask, EdgeSource};
use crate::hw::pins::BumperPins;

/// EXTI lines 10..=15.
const LINES: u32 = 0xFC00;

/// First EXTI line / GPIOE pin used by the bumpers.
const FIRST_LINE: u32 = 10;

/// SYSCFG_EXTICRx source selector for port E.
const PORT_E: u32 = 0b0100;

pub struct BumperLines {
    exti: pac::EXTI,
    _pins: BumperPins,
}

impl BumperLines {
    /// Route PE10..PE15 to EXTI10..15. Lines stay masked until `arm`.
    pub fn new(exti: pac::EXTI, syscfg: pac::SYSCFG, pins: BumperPins) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

        // EXTICR3 holds lines 8..11, EXTICR4 lines 12..15; four bits per line
        syscfg.exticr3.modify(|r, w| unsafe {
            w.bits((r.bits() & !0xFF00) | (PORT_E << 8) | (PORT_E << 12))
        });
        syscfg.exticr4.modify(|r, w| unsafe {
            w.bits(
                (r.bits() & !0xFFFF) | PORT_E | (PORT_E << 4) | (PORT_E << 8) | (PORT_E << 12),
            )
        });

        exti.imr.modify(|r, w| unsafe { w.bits(r.bits() & !LINES) });

        Self { exti, _pins: pins }
    }
}

impl EdgeSource for BumperLines {
    fn arm(&mut self) {
        let exti = &self.exti;

        exti.rtsr.modify(|r, w| unsafe { w.bits(r.bits() & !LINES) });
        exti.ftsr.modify(|r, w| unsafe { w.bits(r.bits() | LINES) });

        // Write-one-to-clear
        exti.pr.write(|w| unsafe { w.bits(LINES) });
        NVIC::unpend(Interrupt::EXTI15_10);

        exti.imr.modify(|r, w| unsafe { w.bits(r.bits() | LINES) });
        unsafe { NVIC::unmask(Interrupt::EXTI15_10) };
    }

    fn disarm(&mut self) {
        self.exti.imr.modify(|r, w| unsafe { w.bits(r.bits() & !LINES) });
        NVIC::mask(Interrupt::EXTI15_10);
    }

    fn sample(&self) -> BumperMask {
        let gpioe = unsafe { &*pac::GPIOE::ptr() };
        let idr = gpioe.idr.read().bits();

        // Active low: a closed switch reads 0
        BumperMask::new(((!idr & LINES) >> FIRST_LINE) as u8)
    }

    fn acknowledge(&mut self) -> bool {
        let pending = self.exti.pr.read().bits() & LINES;
        if pending != 0 {
            self.exti.pr.write(|w| unsafe { w.bits(pending) });
        }
        pending != 0
    }
}
