//! 32-bit frame assembly and MSB-first serialization.

use crate::command::Command;
use crate::transaction::Transaction;

/// Total bits in one serialized frame.
pub const FRAME_BITS: u8 = 32;

/// Index of the last frame bit, the terminal bit-counter value.
pub const LAST_BIT_INDEX: u8 = FRAME_BITS - 1;

const COMMAND_SHIFT: u32 = 24;
const ADDRESS_SHIFT: u32 = 20;
const VALUE_SHIFT: u32 = 8;

/// One transaction serialized into the converter's fixed 32-bit layout.
///
/// MSB first: 4 don't-care bits, 4 command bits, 4 address bits, 12 value
/// bits, 8 trailing bits. Shifting is destructive; after 32 shifts every
/// payload bit has been emitted and only idle bits remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Frame(u32);

impl Frame {
    /// Composes the frame for a latched transaction.
    ///
    /// The leading don't-care nibble is always the idle value. The
    /// trailing byte carries the configuration payload for the commands
    /// that consume one and the idle value otherwise.
    #[must_use]
    pub fn compose(transaction: Transaction) -> Self {
        let trailing = match Command::from_u4(transaction.command_bits()) {
            Some(command) if command.uses_config_payload() => transaction.config_bits(),
            _ => 0,
        };
        let word = (u32::from(transaction.command_bits()) << COMMAND_SHIFT)
            | (u32::from(transaction.address_bits()) << ADDRESS_SHIFT)
            | (u32::from(transaction.value_bits()) << VALUE_SHIFT)
            | u32::from(trailing);
        Self(word)
    }

    /// Leading (most significant) bit, the current output data bit.
    #[must_use]
    pub const fn leading_bit(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// Left-shifts one position, filling the trailing end with idle.
    #[must_use]
    pub const fn shifted(self) -> Self {
        Self(self.0 << 1)
    }

    /// Raw 32-bit frame word, MSB transmitted first.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}
