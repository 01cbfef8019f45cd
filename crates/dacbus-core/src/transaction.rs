//! Transaction snapshot and the idle-phase input latch.

use crate::command::{Channel, Command};

const COMMAND_MASK: u8 = 0x0F;
const ADDRESS_MASK: u8 = 0x0F;
const VALUE_MASK: u16 = 0x0FFF;

/// One command/address/value/config word presented to the engine.
///
/// Fields are stored masked to their wire widths. A transaction is
/// immutable once latched; the engine only replaces it while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Transaction {
    command: u8,
    address: u8,
    value: u16,
    config: u8,
}

impl Transaction {
    /// Builds a transaction from the typed command vocabulary.
    #[must_use]
    pub const fn new(command: Command, address: Channel, value: u16) -> Self {
        Self::from_raw(command.as_u4(), address.as_u4(), value, 0)
    }

    /// Builds a transaction carrying an 8-bit configuration payload.
    #[must_use]
    pub const fn with_config(command: Command, address: Channel, value: u16, config: u8) -> Self {
        Self::from_raw(command.as_u4(), address.as_u4(), value, config)
    }

    /// Builds a transaction from raw field values, masked to wire width.
    ///
    /// The engine transmits whatever it is given here, reserved command
    /// codes included; op-code semantics are the caller's concern.
    #[must_use]
    pub const fn from_raw(command: u8, address: u8, value: u16, config: u8) -> Self {
        Self {
            command: command & COMMAND_MASK,
            address: address & ADDRESS_MASK,
            value: value & VALUE_MASK,
            config,
        }
    }

    /// 4-bit command code.
    #[must_use]
    pub const fn command_bits(self) -> u8 {
        self.command
    }

    /// 4-bit channel address.
    #[must_use]
    pub const fn address_bits(self) -> u8 {
        self.address
    }

    /// 12-bit digital value.
    #[must_use]
    pub const fn value_bits(self) -> u16 {
        self.value
    }

    /// 8-bit configuration payload.
    #[must_use]
    pub const fn config_bits(self) -> u8 {
        self.config
    }
}

/// Snapshot of the caller-facing inputs, frozen outside the idle phase.
///
/// The latch guarantees a transmitted frame always reflects one
/// self-consistent transaction even if the caller changes fields while a
/// transmission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TransactionLatch {
    /// Latched enable flag.
    pub enable: bool,
    /// Latched transaction fields.
    pub transaction: Transaction,
}

impl TransactionLatch {
    /// Overwrites the snapshot with the caller's current inputs.
    #[allow(clippy::missing_const_for_fn)]
    pub fn sample(&mut self, enable: bool, transaction: Transaction) {
        self.enable = enable;
        self.transaction = transaction;
    }
}
