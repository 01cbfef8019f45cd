//! Transaction cycle timing and handshake integration coverage.

use dacbus_core::{
    BusMaster, Channel, Command, EngineConfig, EnginePhase, PortInput, TraceEvent, TraceSink,
    Transaction,
};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

/// Bus periods in one transaction cycle: 1 start + 32 transmit + 1 settle.
const CYCLE_PERIODS: u32 = 34;

fn engine(ratio: u32) -> BusMaster {
    let config = EngineConfig::new(ratio * 1_000_000, 1_000_000).expect("valid test configuration");
    BusMaster::new(config)
}

/// Ticks until `ready` first reads false, panicking past `limit`.
fn ticks_until_busy(master: &mut BusMaster, input: PortInput, limit: u32) -> u32 {
    for tick in 1..=limit {
        if !master.tick(input).ready {
            return tick;
        }
    }
    panic!("engine never left idle within {limit} ticks");
}

/// Ticks from busy until `ready` reads true again, panicking past `limit`.
fn ticks_until_ready(master: &mut BusMaster, input: PortInput, limit: u32) -> u32 {
    for tick in 1..=limit {
        if master.tick(input).ready {
            return tick;
        }
    }
    panic!("engine never returned to idle within {limit} ticks");
}

#[test]
fn full_cycle_occupies_exactly_3400_reference_ticks_at_ratio_100() {
    let mut master = engine(100);
    let input = PortInput::engaged(Transaction::new(
        Command::InternalReference,
        Channel::Dac0,
        0x000,
    ));

    ticks_until_busy(&mut master, input, 100 * 4);
    let remaining = ticks_until_ready(&mut master, input, 100 * 40);
    assert_eq!(remaining, CYCLE_PERIODS * 100);
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(10)]
#[case(100)]
fn ready_window_spans_34_bus_periods(#[case] ratio: u32) {
    let mut master = engine(ratio);
    let input = PortInput::engaged(Transaction::new(
        Command::WriteInputUpdateOutput,
        Channel::Dac7,
        0x3FF,
    ));

    ticks_until_busy(&mut master, input, ratio * 4);
    let remaining = ticks_until_ready(&mut master, input, ratio * 40);
    assert_eq!(remaining, CYCLE_PERIODS * ratio);
}

#[test]
fn select_is_held_for_the_whole_cycle_and_only_then() {
    let mut master = engine(10);
    let input = PortInput::engaged(Transaction::new(Command::WriteInput, Channel::Dac2, 0x155));

    for _ in 0..(10 * 40) {
        let lines = master.tick(input);
        // Select is the inverse view of ready: deselected exactly while
        // the engine is idle, held low from start through settle.
        assert_eq!(lines.bus_select, lines.ready);
        assert_eq!(lines.ready, master.phase().is_idle());
        if lines.bus_select {
            assert!(!lines.bus_clock);
            assert!(!lines.bus_data);
        }
    }
}

#[test]
fn settle_holds_the_bus_one_period_past_the_last_bit() {
    let mut master = engine(4);
    let input = PortInput::engaged(Transaction::new(Command::UpdateOutput, Channel::Dac4, 0x2AA));

    let mut settle_ticks = 0u32;
    for _ in 0..(4 * 40) {
        let lines = master.tick(input);
        if master.phase() == EnginePhase::Settle {
            settle_ticks += 1;
            assert!(!lines.bus_select);
            assert!(!lines.bus_clock);
        }
    }
    assert_eq!(settle_ticks, 4);
}

#[derive(Default)]
struct CycleRecorder {
    frames: Vec<u32>,
    completions: u32,
}

impl TraceSink for CycleRecorder {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::FrameLoaded { frame } => self.frames.push(frame),
            TraceEvent::TransactionComplete => self.completions += 1,
            TraceEvent::PhaseChanged { .. } | TraceEvent::BitShifted { .. } => {}
        }
    }
}

#[test]
fn repeated_transactions_under_constant_enable_are_identical() {
    let mut master = engine(4);
    let input = PortInput::engaged(Transaction::new(
        Command::WriteAllUpdateAll,
        Channel::All,
        0x123,
    ));
    let mut recorder = CycleRecorder::default();

    // Never lower enable; the engine must re-latch the same transaction
    // in each idle window and produce identical frames every cycle.
    while recorder.completions < 3 {
        master.tick_traced(input, &mut recorder);
    }
    assert_eq!(recorder.frames.len(), 3);
    assert!(recorder
        .frames
        .iter()
        .all(|frame| *frame == recorder.frames[0]));
}

#[test]
fn back_to_back_cycles_are_spaced_one_idle_period_apart() {
    let ratio = 4u32;
    let mut master = engine(ratio);
    let input = PortInput::engaged(Transaction::new(Command::WriteInput, Channel::Dac0, 0x001));

    let mut busy_starts = Vec::new();
    let mut was_ready = true;
    for tick in 0u32..(ratio * 120) {
        let lines = master.tick(input);
        if was_ready && !lines.ready {
            busy_starts.push(tick);
        }
        was_ready = lines.ready;
    }
    assert!(busy_starts.len() >= 3);
    for pair in busy_starts.windows(2) {
        // 34 busy periods plus the single idle period between cycles.
        assert_eq!(pair[1] - pair[0], (CYCLE_PERIODS + 1) * ratio);
    }
}

#[test]
fn mid_transmission_input_changes_do_not_tear_the_frame() {
    let mut master = engine(4);
    let first = Transaction::new(Command::WriteInputUpdateOutput, Channel::Dac1, 0x0AA);
    let second = Transaction::new(Command::WriteInputUpdateOutput, Channel::Dac6, 0x555);

    let mut recorder = CycleRecorder::default();
    let engaged_first = PortInput::engaged(first);
    while master.tick_traced(engaged_first, &mut recorder).ready {}

    // Swap the request mid-flight; the latch froze the first transaction.
    let engaged_second = PortInput::engaged(second);
    while recorder.completions == 0 {
        master.tick_traced(engaged_second, &mut recorder);
    }
    assert_eq!(recorder.frames, vec![0x0310_AA00]);

    // The swapped request is picked up by the following cycle.
    while recorder.completions == 1 {
        master.tick_traced(engaged_second, &mut recorder);
    }
    assert_eq!(recorder.frames[1], 0x0365_5500);
}
