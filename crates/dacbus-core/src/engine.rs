//! The bus-master engine: transaction sequencing and the output stage.

use crate::config::EngineConfig;
use crate::divider::ClockDivider;
use crate::frame::{Frame, LAST_BIT_INDEX};
use crate::phase::{next_phase, EnginePhase};
use crate::trace::{NullSink, TraceEvent, TraceSink};
use crate::transaction::{Transaction, TransactionLatch};

/// Caller-facing inputs, sampled by the latch while the engine is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PortInput {
    /// Request to begin a transaction when ready.
    pub enable: bool,
    /// Command word to transmit.
    pub request: Transaction,
}

impl PortInput {
    /// Input with the enable flag raised for `request`.
    #[must_use]
    pub const fn engaged(request: Transaction) -> Self {
        Self {
            enable: true,
            request,
        }
    }

    /// Input with the enable flag lowered.
    #[must_use]
    pub const fn released() -> Self {
        Self {
            enable: false,
            request: Transaction::from_raw(0, 0, 0, 0),
        }
    }
}

/// Externally observable line levels after a reference tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LineState {
    /// Serial bus clock line.
    pub bus_clock: bool,
    /// Serial bus data line, MSB-first of the current frame.
    pub bus_data: bool,
    /// Active-low select: `true` is deselected, `false` is selected.
    pub bus_select: bool,
    /// True exactly while the engine phase is idle.
    pub ready: bool,
}

/// Write-only serial bus master for the octal 12-bit converter.
///
/// The engine is a single synchronous domain advanced one reference-clock
/// tick at a time. Every sub-component update inside [`BusMaster::tick`]
/// reads the registered state committed on the previous tick, so the
/// sequencing matches the concurrent processes of the source hardware:
/// the latch samples only while idle, the divider produces registered
/// edge strobes, the state machine advances on rising strobes, and the
/// output stage derives the bus lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BusMaster {
    config: EngineConfig,
    latch: TransactionLatch,
    divider: ClockDivider,
    phase: EnginePhase,
    bit_index: u8,
    frame: Frame,
    bus_clock: bool,
}

impl BusMaster {
    /// Creates an idle engine for a validated clock configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            latch: TransactionLatch::default(),
            divider: ClockDivider::new(config.ratio()),
            phase: EnginePhase::Idle,
            bit_index: 0,
            frame: Frame::default(),
            bus_clock: false,
        }
    }

    /// Advances the engine by one reference-clock tick.
    pub fn tick(&mut self, input: PortInput) -> LineState {
        self.tick_traced(input, &mut NullSink)
    }

    /// Advances one reference tick, reporting trace events to `sink`.
    pub fn tick_traced<S: TraceSink>(&mut self, input: PortInput, sink: &mut S) -> LineState {
        // Registered values from the previous tick; every update below
        // reads these, never a value committed within this tick.
        let rising = self.divider.rising();
        let falling = self.divider.falling();
        let phase = self.phase;
        let enable = self.latch.enable;
        let frame_done = self.bit_index == LAST_BIT_INDEX;

        // Transaction latch: open only while idle.
        if phase.is_idle() {
            self.latch.sample(input.enable, input.request);
        }

        // Divider runs on the enable flag latched before this tick.
        self.divider.tick(enable);

        // Frame assembler: compose through the start period, shift once
        // per rising strobe while transmitting.
        if matches!(phase, EnginePhase::Start) {
            self.frame = Frame::compose(self.latch.transaction);
        } else if matches!(phase, EnginePhase::Transmit) && rising {
            sink.on_event(TraceEvent::BitShifted {
                index: self.bit_index,
                level: self.frame.leading_bit(),
            });
            self.frame = self.frame.shifted();
        }

        // Bit counter: rising strobes while transmitting, zero elsewhere.
        self.bit_index = match phase {
            EnginePhase::Transmit if rising => {
                if frame_done {
                    0
                } else {
                    self.bit_index + 1
                }
            }
            EnginePhase::Transmit => self.bit_index,
            _ => 0,
        };

        // State machine: advances only on rising strobes.
        if rising {
            let next = next_phase(phase, enable, frame_done);
            if next != phase {
                sink.on_event(TraceEvent::PhaseChanged {
                    from: phase,
                    to: next,
                });
                if matches!(next, EnginePhase::Transmit) {
                    sink.on_event(TraceEvent::FrameLoaded {
                        frame: self.frame.as_u32(),
                    });
                }
                if matches!(next, EnginePhase::Idle) {
                    sink.on_event(TraceEvent::TransactionComplete);
                }
            }
            self.phase = next;
        }

        // Output clock register, gated by the phase committed above so
        // the line sits at idle level whenever the observable phase is
        // idle or settling.
        self.bus_clock = match self.phase {
            EnginePhase::Idle | EnginePhase::Settle => false,
            EnginePhase::Start | EnginePhase::Transmit => {
                if rising {
                    true
                } else if falling {
                    false
                } else {
                    self.bus_clock
                }
            }
        };

        self.lines()
    }

    /// Current externally observable line levels.
    #[must_use]
    pub const fn lines(&self) -> LineState {
        LineState {
            bus_clock: self.bus_clock,
            bus_data: matches!(self.phase, EnginePhase::Transmit | EnginePhase::Settle)
                && self.frame.leading_bit(),
            bus_select: self.phase.is_idle(),
            ready: self.phase.is_idle(),
        }
    }

    /// True exactly while the engine phase is idle.
    #[must_use]
    pub const fn ready(&self) -> bool {
        self.phase.is_idle()
    }

    /// Current transaction phase.
    #[must_use]
    pub const fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Clock configuration this engine was built with.
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Restores power-on state: idle phase, cleared counters, released
    /// bus. The clock configuration is kept.
    pub fn reset(&mut self) {
        self.latch = TransactionLatch::default();
        self.divider.reset();
        self.phase = EnginePhase::Idle;
        self.bit_index = 0;
        self.frame = Frame::default();
        self.bus_clock = false;
    }
}
