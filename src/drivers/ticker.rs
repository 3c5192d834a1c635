// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-rate periodic task dispatcher.
//!
//! A basic timer raises an update interrupt every `period` ticks; the interrupt handler calls
//! [`Ticker::on_interrupt`], which acknowledges the timer and runs the single registered
//! [`TickTask`].
//!
//! Tasks run in interrupt context. They must be short and must not block; the
//! [`InterruptContext`] they receive has no delay primitive to make that hard to get wrong.

use crate::drivers::{ConfigError, InterruptContext};

/// Register-level access to a timer that interrupts once per period.
pub trait TickTimer {
    /// Program a `period`-tick cycle, enable the update interrupt and start counting.
    fn start(&mut self, period: u16);

    /// Clear the pending update flag.
    fn acknowledge(&mut self);

    /// Stop counting and disable the interrupt.
    fn halt(&mut self);
}

/// Work executed once per tick, in interrupt context.
pub trait TickTask {
    fn on_tick(&mut self, cx: &InterruptContext);
}

/// Periodic dispatcher owning its timer and exactly one task.
pub struct Ticker<T: TickTimer, K: TickTask> {
    timer: T,
    task: K,
    period: u16,
    ticks: u32,
    running: bool,
}

impl<T: TickTimer, K: TickTask> Ticker<T, K> {
    /// Register `task` and start interrupting every `period` timer ticks.
    pub fn init(timer: T, task: K, period: u16) -> Result<Self, ConfigError> {
        if period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        let mut ticker = Self {
            timer,
            task,
            period,
            ticks: 0,
            running: false,
        };
        ticker.timer.start(period);
        ticker.running = true;

        Ok(ticker)
    }

    /// Replace the registered task and restart with a new period.
    ///
    /// Returns the task that was registered before.
    pub fn reinit(&mut self, task: K, period: u16) -> Result<K, ConfigError> {
        if period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        self.timer.halt();
        let previous = core::mem::replace(&mut self.task, task);
        self.period = period;
        self.ticks = 0;
        self.timer.start(period);
        self.running = true;

        Ok(previous)
    }

    /// Disable further ticks. The task stays registered.
    pub fn stop(&mut self) {
        self.timer.halt();
        self.running = false;
    }

    /// Body of the timer's interrupt handler.
    pub fn on_interrupt(&mut self) {
        self.timer.acknowledge();
        if !self.running {
            return;
        }

        self.ticks = self.ticks.wrapping_add(1);
        let cx = InterruptContext::new(self.ticks);
        self.task.on_tick(&cx);
    }

    /// Ticks delivered since the last `init`/`reinit`.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn task(&self) -> &K {
        &self.task
    }

    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimTick;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        seen: Vec<u32>,
        tag: u8,
    }

    impl TickTask for Counter {
        fn on_tick(&mut self, cx: &InterruptContext) {
            self.seen.push(cx.count());
        }
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(matches!(
            Ticker::init(SimTick::default(), Counter::default(), 0),
            Err(ConfigError::ZeroPeriod)
        ));
    }

    #[test]
    fn init_starts_timer_with_period() {
        let ticker = Ticker::init(SimTick::default(), Counter::default(), 50_000).unwrap();

        assert!(ticker.is_running());
        assert!(ticker.timer().running);
        assert_eq!(ticker.timer().period, 50_000);
        assert_eq!(ticker.ticks(), 0);
    }

    #[test]
    fn each_interrupt_runs_task_once_and_acknowledges() {
        let mut ticker = Ticker::init(SimTick::default(), Counter::default(), 100).unwrap();

        for _ in 0..3 {
            ticker.on_interrupt();
        }

        assert_eq!(ticker.task().seen, vec![1, 2, 3]);
        assert_eq!(ticker.timer().acks, 3);
        assert_eq!(ticker.ticks(), 3);
    }

    #[test]
    fn reinit_replaces_task_and_resets_count() {
        let mut ticker = Ticker::init(SimTick::default(), Counter::default(), 100).unwrap();
        ticker.on_interrupt();

        let replacement = Counter {
            seen: Vec::new(),
            tag: 2,
        };
        let previous = ticker.reinit(replacement, 200).unwrap();
        ticker.on_interrupt();

        assert_eq!(previous.seen, vec![1]);
        assert_eq!(ticker.task().tag, 2);
        assert_eq!(ticker.task().seen, vec![1]);
        assert_eq!(ticker.period(), 200);
        assert_eq!(ticker.timer().starts, 2);
    }

    #[test]
    fn stopped_ticker_only_acknowledges() {
        let mut ticker = Ticker::init(SimTick::default(), Counter::default(), 100).unwrap();

        ticker.stop();
        ticker.on_interrupt();

        assert!(!ticker.timer().running);
        assert!(ticker.task().seen.is_empty());
        assert_eq!(ticker.timer().acks, 1);
    }
}
