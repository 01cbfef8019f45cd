//! Write-only serial bus master core for an octal 12-bit DAC.
//!
//! The engine converts a parallel command word into the converter's
//! 32-bit serial frame, one reference-clock tick at a time: a clock
//! divider derives registered bus-clock edge strobes, a shift register
//! serializes the frame MSB first, and a four-phase state machine
//! sequences select, clocking, and the post-transmission settle period
//! behind a simple ready/enable handshake.

/// Validated clock configuration and construction-time error taxonomy.
pub mod config;
pub use config::{ConfigError, EngineConfig, DEVICE_MAX_BUS_HZ, MIN_CLOCK_RATIO};

/// Command and channel vocabulary of the converter.
pub mod command;
pub use command::{is_reserved_code, Channel, Command};

/// Transaction snapshot and the idle-phase input latch.
pub mod transaction;
pub use transaction::{Transaction, TransactionLatch};

/// 32-bit frame assembly and MSB-first serialization.
pub mod frame;
pub use frame::{Frame, FRAME_BITS, LAST_BIT_INDEX};

/// Reference-clock divider with registered edge strobes.
pub mod divider;
pub use divider::ClockDivider;

/// Transaction phases and the combinational next-phase function.
pub mod phase;
pub use phase::{next_phase, EnginePhase};

/// Deterministic trace hooks.
pub mod trace;
pub use trace::{NullSink, TraceEvent, TraceSink};

/// The bus-master engine and output stage.
pub mod engine;
pub use engine::{BusMaster, LineState, PortInput};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
