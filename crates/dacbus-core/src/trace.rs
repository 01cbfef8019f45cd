//! Deterministic trace hooks for observing engine activity.
//!
//! Events are emitted in reference-clock order from
//! [`BusMaster::tick_traced`](crate::BusMaster::tick_traced); the
//! bit-level events double as the frame-capture instrument in tests.

use crate::phase::EnginePhase;

/// Trace events emitted at committed state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// The state machine committed a phase transition.
    PhaseChanged {
        /// Phase before the rising edge.
        from: EnginePhase,
        /// Phase after the rising edge.
        to: EnginePhase,
    },
    /// A freshly composed frame was handed to the shift stage.
    FrameLoaded {
        /// Full 32-bit frame word, MSB transmitted first.
        frame: u32,
    },
    /// One frame bit finished its bus period and was retired.
    BitShifted {
        /// Zero-based index of the retired bit within the frame.
        index: u8,
        /// Level the data line held for that bit.
        level: bool,
    },
    /// The settle period ended and the bus was released.
    TransactionComplete,
}

/// Sink trait for deterministic trace hooks.
pub trait TraceSink {
    /// Records an event in emission order.
    fn on_event(&mut self, event: TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn on_event(&mut self, _event: TraceEvent) {}
}
