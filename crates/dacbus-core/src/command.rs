//! Command and channel vocabulary of the octal 12-bit converter.
//!
//! The engine itself transports raw nibbles; these types are the
//! caller-facing names for the codes the device defines.

/// 4-bit operation codes defined by the converter.
///
/// Codes 9 through 14 are reserved by the device and have no variant
/// here; [`Command::from_u4`] rejects them. Code 15 writes every input
/// register and updates every output in one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum Command {
    /// Write the addressed input register.
    WriteInput = 0x0,
    /// Update the addressed output register from its input register.
    UpdateOutput = 0x1,
    /// Write the addressed input register, then update all outputs.
    WriteInputUpdateAll = 0x2,
    /// Write the addressed input register and update its output.
    WriteInputUpdateOutput = 0x3,
    /// Select the power mode of the addressed channels.
    PowerMode = 0x4,
    /// Load the clear-code register.
    LoadClearCode = 0x5,
    /// Load the output-update mask register.
    LoadOutputMask = 0x6,
    /// Software power-on reset.
    Reset = 0x7,
    /// Enable or disable the internal reference.
    InternalReference = 0x8,
    /// Write every input register and update every output.
    WriteAllUpdateAll = 0xF,
}

impl Command {
    /// Converts a 4-bit code into a defined command.
    #[must_use]
    pub const fn from_u4(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(Self::WriteInput),
            0x1 => Some(Self::UpdateOutput),
            0x2 => Some(Self::WriteInputUpdateAll),
            0x3 => Some(Self::WriteInputUpdateOutput),
            0x4 => Some(Self::PowerMode),
            0x5 => Some(Self::LoadClearCode),
            0x6 => Some(Self::LoadOutputMask),
            0x7 => Some(Self::Reset),
            0x8 => Some(Self::InternalReference),
            0xF => Some(Self::WriteAllUpdateAll),
            _ => None,
        }
    }

    /// Returns the 4-bit wire code for this command.
    #[must_use]
    pub const fn as_u4(self) -> u8 {
        self as u8
    }

    /// True when the command carries an 8-bit configuration payload in
    /// the trailing byte of the frame.
    #[must_use]
    pub const fn uses_config_payload(self) -> bool {
        matches!(
            self,
            Self::PowerMode | Self::LoadClearCode | Self::LoadOutputMask | Self::InternalReference
        )
    }
}

/// Returns true for the reserved command codes 9 through 14.
#[must_use]
pub const fn is_reserved_code(value: u8) -> bool {
    matches!(value, 0x9..=0xE)
}

/// 4-bit channel address field.
///
/// The converter exposes eight channels plus a broadcast address; values
/// 8 through 14 are undefined on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum Channel {
    /// Converter channel A.
    Dac0 = 0x0,
    /// Converter channel B.
    Dac1 = 0x1,
    /// Converter channel C.
    Dac2 = 0x2,
    /// Converter channel D.
    Dac3 = 0x3,
    /// Converter channel E.
    Dac4 = 0x4,
    /// Converter channel F.
    Dac5 = 0x5,
    /// Converter channel G.
    Dac6 = 0x6,
    /// Converter channel H.
    Dac7 = 0x7,
    /// Every channel at once.
    All = 0xF,
}

impl Channel {
    /// Converts a 4-bit address field into a defined channel.
    #[must_use]
    pub const fn from_u4(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(Self::Dac0),
            0x1 => Some(Self::Dac1),
            0x2 => Some(Self::Dac2),
            0x3 => Some(Self::Dac3),
            0x4 => Some(Self::Dac4),
            0x5 => Some(Self::Dac5),
            0x6 => Some(Self::Dac6),
            0x7 => Some(Self::Dac7),
            0xF => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the 4-bit wire code for this channel.
    #[must_use]
    pub const fn as_u4(self) -> u8 {
        self as u8
    }
}
