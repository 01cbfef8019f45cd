//! Demonstration harness: sweeps a sawtooth value across a converter
//! channel, cycling the enable line against the ready handshake.

use dacbus_core::{
    BusMaster, Channel, Command, EngineConfig, PortInput, TraceEvent, TraceSink, Transaction,
};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const REFERENCE_HZ: u32 = 100_000_000;
const BUS_HZ: u32 = 1_000_000;
const SAWTOOTH_STEP: u16 = 0x0333;

#[derive(Default)]
struct FrameRecorder {
    bits: Vec<bool>,
    complete: bool,
}

impl TraceSink for FrameRecorder {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::BitShifted { level, .. } => self.bits.push(level),
            TraceEvent::TransactionComplete => self.complete = true,
            TraceEvent::PhaseChanged { .. } | TraceEvent::FrameLoaded { .. } => {}
        }
    }
}

/// Raises enable until the engine accepts the request, releases it, and
/// waits for the bus to come back; returns the frame seen on the wire.
fn run_transaction(master: &mut BusMaster, request: Transaction) -> u32 {
    let mut recorder = FrameRecorder::default();

    let engaged = PortInput::engaged(request);
    while master.tick_traced(engaged, &mut recorder).ready {}

    let released = PortInput::released();
    while !recorder.complete {
        master.tick_traced(released, &mut recorder);
    }

    recorder
        .bits
        .iter()
        .fold(0u32, |word, bit| (word << 1) | u32::from(*bit))
}

fn main() {
    let config = EngineConfig::new(REFERENCE_HZ, BUS_HZ).expect("demo clock configuration");
    let mut master = BusMaster::new(config);

    // Power-on: switch the converter to its internal reference.
    let reference = Transaction::with_config(Command::InternalReference, Channel::Dac0, 0, 0x01);
    println!("reference setup -> frame 0x{:08x}", run_transaction(&mut master, reference));

    let mut value: u16 = 0;
    for step in 0..8 {
        value = value.wrapping_add(SAWTOOTH_STEP) & 0x0FFF;
        let request = Transaction::new(Command::WriteInputUpdateOutput, Channel::Dac0, value);
        let frame = run_transaction(&mut master, request);
        println!("step {step}: value 0x{value:03x} -> frame 0x{frame:08x}");
    }
}
