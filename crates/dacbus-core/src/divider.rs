//! Reference-clock divider and registered bus-clock edge strobes.

/// Modulo-`ratio` counter producing one-tick rising and falling strobes.
///
/// Both strobes are registered: each asserts on the reference tick after
/// the counter condition that causes it, never combinationally. The
/// rising strobe marks the end of a full bus-clock period (`ratio - 1`),
/// the falling strobe its midpoint (`ratio / 2 - 1`); one counter feeds
/// both comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ClockDivider {
    ratio: u32,
    counter: u32,
    rising: bool,
    falling: bool,
}

impl ClockDivider {
    /// Creates a divider for a validated ratio.
    #[must_use]
    pub const fn new(ratio: u32) -> Self {
        Self {
            ratio,
            counter: 0,
            rising: false,
            falling: false,
        }
    }

    /// Advances one reference tick.
    ///
    /// While `enable` is low the counter stays pinned at zero and both
    /// strobes stay deasserted.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tick(&mut self, enable: bool) {
        if enable {
            let wrap = self.counter == self.ratio - 1;
            self.rising = wrap;
            self.falling = self.counter == self.ratio / 2 - 1;
            self.counter = if wrap { 0 } else { self.counter + 1 };
        } else {
            self.counter = 0;
            self.rising = false;
            self.falling = false;
        }
    }

    /// One-tick strobe marking the start of the next bus-clock period.
    #[must_use]
    pub const fn rising(&self) -> bool {
        self.rising
    }

    /// One-tick strobe marking the midpoint of a bus-clock period.
    #[must_use]
    pub const fn falling(&self) -> bool {
        self.falling
    }

    /// Clears the counter and both strobes.
    #[allow(clippy::missing_const_for_fn)]
    pub fn reset(&mut self) {
        self.counter = 0;
        self.rising = false;
        self.falling = false;
    }
}
