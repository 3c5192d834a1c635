// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! bumpbot firmware entry point.
//!
//! Brings up clocks and peripherals, installs the two interrupt-side drivers (10 Hz indicator
//! ticker, bumper monitor) and hands thread mode to `control::Supervisor`.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;

    use cortex_m::delay::Delay;
    use cortex_m::interrupt::{free, Mutex};
    use cortex_m_rt::entry;
    use panic_halt as _;

    use stm32f7xx_hal::{
        pac::{self, interrupt, Interrupt},
        prelude::*,
        serial::{Config, Serial},
    };

    use bumpbot::config::*;
    use bumpbot::control::{CollisionLatch, IndicatorTask, LatchHandler, Motors, Supervisor};
    use bumpbot::drivers::{BumperMonitor, IndicatorGroup, PwmPair, Ticker};
    use bumpbot::hw::{
        BasicTimer, BoardPins, BumperLines, PhEnBridge, PortIndicators, TimPwm, Usart,
    };

    type Indicators = Ticker<BasicTimer<pac::TIM6>, IndicatorTask<'static, PortIndicators>>;
    type Bumpers = BumperMonitor<BumperLines, LatchHandler<'static>>;

    static LATCH: CollisionLatch = CollisionLatch::new();
    static TICKER: Mutex<RefCell<Option<Indicators>>> = Mutex::new(RefCell::new(None));
    static BUMPERS: Mutex<RefCell<Option<Bumpers>>> = Mutex::new(RefCell::new(None));

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let mut cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.sysclk(SYSCLK_HZ.Hz()).freeze();
        let timclk = clocks.timclk1().raw();

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

        // USART3 (DBG)
        let usart_cfg = Config {
            baud_rate: USART_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        let usart = Usart::new(serial);

        // Drive motors: TIM4 EN, GPIO PH
        let (mut bridge, en_pins) = PhEnBridge::new(pins.motors);
        let motor_tim = TimPwm::tim4(dp.TIM4, en_pins, timclk, MOTOR_TICK_HZ);
        let motor_pwm = PwmPair::init(motor_tim, MOTOR_PERIOD, 0, 0).unwrap();
        bridge.wake();
        let motors = Motors::new(motor_pwm, bridge);

        // Sensor head servos: TIM3
        let servo_tim = TimPwm::tim3(dp.TIM3, pins.servos, timclk, SERVO_TICK_HZ);
        let servos =
            PwmPair::init(servo_tim, SERVO_PERIOD, SERVO_DUTY_MIN, SERVO_DUTY_MIN).unwrap();

        // Interrupt priorities
        unsafe {
            cp.NVIC.set_priority(Interrupt::EXTI15_10, BUMPER_IRQ_PRIORITY);
            cp.NVIC.set_priority(Interrupt::TIM6_DAC, TICK_IRQ_PRIORITY);
        }

        // Interrupt-side drivers. Installed with interrupts off so neither vector can run before
        // its static is filled.
        let task = IndicatorTask::new(
            PortIndicators::new(pins.indicators),
            IndicatorGroup::active_high(FRONT_LEDS),
            IndicatorGroup::active_high(REAR_LEDS),
            &LATCH,
        );
        let tick_tim = BasicTimer::tim6(dp.TIM6, timclk, TICK_TIMER_HZ);
        let lines = BumperLines::new(dp.EXTI, dp.SYSCFG, pins.bumpers);

        free(|cs| {
            let ticker = Ticker::init(tick_tim, task, TICK_PERIOD).unwrap();
            TICKER.borrow(cs).replace(Some(ticker));

            let bumpers = BumperMonitor::init(lines, LatchHandler::new(&LATCH));
            BUMPERS.borrow(cs).replace(Some(bumpers));
        });

        // Main loop
        let delay = Delay::new(cp.SYST, clocks.sysclk().raw());
        let mut supervisor = Supervisor::new(motors, servos, delay, &LATCH, NORMAL_POLICY, usart);
        supervisor.announce();
        supervisor.run()
    }

    #[interrupt]
    fn TIM6_DAC() {
        free(|cs| {
            if let Some(ticker) = TICKER.borrow(cs).borrow_mut().as_mut() {
                ticker.on_interrupt();
            }
        });
    }

    #[interrupt]
    fn EXTI15_10() {
        free(|cs| {
            if let Some(bumpers) = BUMPERS.borrow(cs).borrow_mut().as_mut() {
                bumpers.on_interrupt();
            }
        });
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("bumpbot is firmware: build it with `--target thumbv7em-none-eabihf`");
}
