// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! LED groups sharing one GPIO port.
//!
//! Several LEDs wired to the same port are switched together through a bit mask, so a whole group
//! flips in one register write.

/// Whether the LEDs of a group light when their pins are driven high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Bitwise access to a GPIO output port.
pub trait IndicatorPort {
    fn set_bits(&mut self, mask: u16);
    fn clear_bits(&mut self, mask: u16);
    fn toggle_bits(&mut self, mask: u16);
}

/// A set of LEDs on one port that are always switched together.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IndicatorGroup {
    mask: u16,
    active: ActiveLevel,
}

impl IndicatorGroup {
    pub const fn new(mask: u16, active: ActiveLevel) -> Self {
        Self { mask, active }
    }

    pub const fn active_high(mask: u16) -> Self {
        Self::new(mask, ActiveLevel::High)
    }

    pub const fn active_low(mask: u16) -> Self {
        Self::new(mask, ActiveLevel::Low)
    }

    #[inline]
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Drive every LED of the group logically ON (true) or OFF (false).
    pub fn set<P: IndicatorPort>(&self, port: &mut P, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => port.set_bits(self.mask),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => port.clear_bits(self.mask),
        }
    }

    #[inline]
    pub fn on<P: IndicatorPort>(&self, port: &mut P) {
        self.set(port, true);
    }

    #[inline]
    pub fn off<P: IndicatorPort>(&self, port: &mut P) {
        self.set(port, false);
    }

    /// Flip every LED of the group, whatever its current state.
    #[inline]
    pub fn toggle<P: IndicatorPort>(&self, port: &mut P) {
        port.toggle_bits(self.mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimPort;

    #[test]
    fn active_high_group() {
        let mut port = SimPort::default();
        let group = IndicatorGroup::active_high(0x0021);

        group.on(&mut port);
        assert_eq!(port.odr, 0x0021);
        group.off(&mut port);
        assert_eq!(port.odr, 0);
    }

    #[test]
    fn active_low_group_inverts_levels() {
        let mut port = SimPort::default();
        let group = IndicatorGroup::active_low(0x00C0);

        group.off(&mut port);
        assert_eq!(port.odr, 0x00C0);
        group.on(&mut port);
        assert_eq!(port.odr, 0);
    }

    #[test]
    fn toggle_only_touches_group_bits() {
        let mut port = SimPort { odr: 0x0100 };
        let group = IndicatorGroup::active_high(0x0021);

        group.toggle(&mut port);
        assert_eq!(port.odr, 0x0121);
        group.toggle(&mut port);
        assert_eq!(port.odr, 0x0100);
    }
}
