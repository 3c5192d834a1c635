// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the bumpbot firmware.
//!
//! Every timing constant, duty preset and interrupt priority lives here so the rest of the crate
//! never carries magic numbers.
//!
//! # Timer budget
//!
//! | Timer | Role | Tick rate | Period | Output rate |
//! | ----- | ---- | --------- | ------ | ----------- |
//! | TIM4 | Motor PWM (CH1 left, CH2 right) | 6 MHz | 15000 | 400 Hz |
//! | TIM3 | Servo PWM (CH1 pan, CH2 tilt) | 3 MHz | 60000 | 50 Hz |
//! | TIM6 | Periodic task | 500 kHz | 50000 | 10 Hz |
//!
//! # Pin Mapping Summary
//!
//! - **Motor PWM**: PD12 (TIM4_CH1, left EN), PD13 (TIM4_CH2, right EN)
//! - **Motor phase**: PD0 (left PH), PD1 (right PH), PD2 (nSLEEP)
//! - **Servo PWM**: PA6 (TIM3_CH1), PA7 (TIM3_CH2)
//! - **Bumpers**: PE10..PE15, pull-up, active low, EXTI15_10
//! - **Indicators**: PB0 + PB5 (front, yellow), PB6 + PB7 (rear, red)
//! - **Diagnostics**: USART3 on PD8/PD9 (ST-LINK virtual COM port)

use crate::control::NormalPolicy;

/// System clock requested from the RCC. APB1 timers then run at the same rate.
pub const SYSCLK_HZ: u32 = 96_000_000;

/// Diagnostic USART baud rate.
pub const USART_BAUD: u32 = 115_200;

// Motor PWM

/// Counter rate of the motor PWM timer.
pub const MOTOR_TICK_HZ: u32 = 6_000_000;

/// Motor PWM period in ticks (400 Hz at `MOTOR_TICK_HZ`).
pub const MOTOR_PERIOD: u16 = 15_000;

/// 50 % of `MOTOR_PERIOD`.
pub const DUTY_50: u16 = 7_500;

/// 30 % of `MOTOR_PERIOD`.
pub const DUTY_30: u16 = 4_500;

/// 10 % of `MOTOR_PERIOD`.
pub const DUTY_10: u16 = 1_500;

// Servo PWM

/// Counter rate of the servo PWM timer.
pub const SERVO_TICK_HZ: u32 = 3_000_000;

/// Servo PWM period in ticks (50 Hz at `SERVO_TICK_HZ`).
pub const SERVO_PERIOD: u16 = 60_000;

/// Servo pulse for the 0° end of the sweep (~0.57 ms).
pub const SERVO_DUTY_MIN: u16 = 1_700;

/// Servo pulse for the 180° end of the sweep (~2.33 ms).
pub const SERVO_DUTY_MAX: u16 = 7_000;

/// Time the servo head rests at each end of the sweep.
pub const SERVO_HOLD_MS: u32 = 5_000;

// Periodic task

/// Counter rate of the periodic task timer.
pub const TICK_TIMER_HZ: u32 = 500_000;

/// Periodic task rate.
pub const TICK_RATE_HZ: u32 = 10;

/// Periodic task period in timer ticks.
pub const TICK_PERIOD: u16 = (TICK_TIMER_HZ / TICK_RATE_HZ) as u16;

// Interrupt priorities (STM32F7 implements the upper 4 bits; lower value = more urgent)

/// Bumper EXTI priority.
pub const BUMPER_IRQ_PRIORITY: u8 = 1 << 4;

/// Periodic task priority.
pub const TICK_IRQ_PRIORITY: u8 = 2 << 4;

// Indicators

/// Front indicator group (yellow), toggled while driving normally.
pub const FRONT_LEDS: u16 = 0x0021;

/// Rear indicator group (red), toggled while a collision is latched.
pub const REAR_LEDS: u16 = 0x00C0;

// Main loop

/// Duty applied to both motors by the cruise policy.
pub const CRUISE_DUTY: u16 = DUTY_50;

/// How long the cruise policy drives before the loop re-checks the latch.
pub const CRUISE_POLL_MS: u32 = 10;

/// Normal-state activity, selected through cargo features.
#[cfg(feature = "policy-demo")]
pub const NORMAL_POLICY: NormalPolicy = NormalPolicy::DemoPattern;

/// Normal-state activity, selected through cargo features.
#[cfg(all(feature = "policy-cruise", not(feature = "policy-demo")))]
pub const NORMAL_POLICY: NormalPolicy = NormalPolicy::Cruise;

/// Normal-state activity, selected through cargo features.
#[cfg(not(any(feature = "policy-demo", feature = "policy-cruise")))]
pub const NORMAL_POLICY: NormalPolicy = NormalPolicy::ServoSweep;
