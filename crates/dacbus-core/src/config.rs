//! Validated clock configuration for the bus master engine.
//!
//! The divider ratio is fixed at construction time; nothing here is
//! runtime-mutable once an engine owns the configuration.

use thiserror::Error;

/// Highest serial bus clock the converter is rated for, in hertz.
pub const DEVICE_MAX_BUS_HZ: u32 = 50_000_000;

/// Smallest reference-to-bus ratio that still yields distinct rising and
/// falling events within one bus-clock period.
pub const MIN_CLOCK_RATIO: u32 = 2;

/// Configurations rejected before an engine is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// Reference or bus frequency was zero.
    #[error("clock frequencies must be non-zero")]
    ZeroFrequency,
    /// Requested bus clock exceeds the converter's rated maximum.
    #[error("bus clock of {requested_hz} Hz exceeds the device maximum of {max_hz} Hz")]
    BusClockTooFast {
        /// Requested bus clock frequency in hertz.
        requested_hz: u32,
        /// Device ceiling in hertz.
        max_hz: u32,
    },
    /// Reference clock is not an integer multiple of the bus clock.
    #[error("reference clock {reference_hz} Hz is not an integer multiple of bus clock {bus_hz} Hz")]
    NonIntegerRatio {
        /// Reference clock frequency in hertz.
        reference_hz: u32,
        /// Requested bus clock frequency in hertz.
        bus_hz: u32,
    },
    /// Integer ratio is too small for the edge generator.
    #[error("clock ratio {ratio} is below the minimum of {min}")]
    RatioTooSmall {
        /// Derived reference-to-bus ratio.
        ratio: u32,
        /// Smallest ratio the divider supports.
        min: u32,
    },
}

/// Immutable clock configuration for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineConfig {
    reference_hz: u32,
    bus_hz: u32,
    ratio: u32,
}

impl EngineConfig {
    /// Derives the divider ratio from the reference and bus frequencies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroFrequency`] when either frequency is 0,
    /// [`ConfigError::BusClockTooFast`] when the bus clock exceeds
    /// [`DEVICE_MAX_BUS_HZ`], [`ConfigError::NonIntegerRatio`] when the
    /// reference is not an integer multiple of the bus clock, and
    /// [`ConfigError::RatioTooSmall`] when the ratio is below
    /// [`MIN_CLOCK_RATIO`].
    pub const fn new(reference_hz: u32, bus_hz: u32) -> Result<Self, ConfigError> {
        if reference_hz == 0 || bus_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if bus_hz > DEVICE_MAX_BUS_HZ {
            return Err(ConfigError::BusClockTooFast {
                requested_hz: bus_hz,
                max_hz: DEVICE_MAX_BUS_HZ,
            });
        }
        if reference_hz % bus_hz != 0 {
            return Err(ConfigError::NonIntegerRatio {
                reference_hz,
                bus_hz,
            });
        }
        let ratio = reference_hz / bus_hz;
        if ratio < MIN_CLOCK_RATIO {
            return Err(ConfigError::RatioTooSmall {
                ratio,
                min: MIN_CLOCK_RATIO,
            });
        }
        Ok(Self {
            reference_hz,
            bus_hz,
            ratio,
        })
    }

    /// Reference clock frequency in hertz.
    #[must_use]
    pub const fn reference_hz(self) -> u32 {
        self.reference_hz
    }

    /// Derived bus clock frequency in hertz.
    #[must_use]
    pub const fn bus_hz(self) -> u32 {
        self.bus_hz
    }

    /// Reference ticks per bus-clock period.
    #[must_use]
    pub const fn ratio(self) -> u32 {
        self.ratio
    }
}
