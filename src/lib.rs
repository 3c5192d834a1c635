// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # bumpbot Firmware
//!
//! This crate contains the firmware for a two-motor ground robot with a servo-mounted sensor head
//! and bumper-based collision avoidance, written in Rust, targeting an STM32F767 MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around timers, EXTI lines, GPIO ports and USART (target only) |
//! | [`drivers`] | Hardware-independent drivers: PWM pairs, periodic dispatcher, bumper monitor |
//! | [`control`] | Collision latch, motor commands, drive sequences and the main loop |
//! | [`config`] | Compile-time tuning constants |
//!
//! Everything outside `hw` builds on the host, so the drivers and control logic are tested there
//! against mock peripherals and mock time.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
#[cfg(target_os = "none")]
pub mod hw;

#[cfg(test)]
pub(crate) mod testing;
