//! End-to-end circuit scenarios.

use crate::automaton::{Anchor, Cell, Preset, StepOutcome};
use crate::config::EngineConfig;
use crate::state::Automaton;

fn loaded(text: &str) -> Automaton {
    let mut automaton = Automaton::new(1, 1);
    automaton.load_from_text(text);
    automaton
}

#[test]
fn test_diode_seed_frames() {
    let mut automaton = loaded(".h.\nwww\n.w.");

    let frames = [
        ".t.\nhhh\n.w.",
        // The lower conductor sees three heads and stays put
        ".w.\nttt\n.w.",
        ".w.\nwww\n.w.",
    ];
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(automaton.force_step(), StepOutcome::Changed);
        assert_eq!(automaton.serialize(), *frame, "frame {}", i + 1);
    }

    assert_eq!(automaton.force_step(), StepOutcome::Unchanged);
    assert_eq!(automaton.generation(), 3);
}

#[test]
fn test_signal_runs_off_wire_end() {
    let mut automaton = loaded("hwww");
    let frames = ["thww", "wthw", "wwth", "wwwt", "wwww"];

    for frame in frames {
        assert!(automaton.force_step().is_changed());
        assert_eq!(automaton.serialize(), frame);
    }
    assert!(!automaton.force_step().is_changed());
    assert_eq!(automaton.generation(), 5);
}

#[test]
fn test_clock_has_period_ten() {
    let mut automaton = loaded(Preset::Clock.source());

    automaton.force_step();
    assert_eq!(automaton.serialize(), ".wwwt.\nw....h\n.wwww.");

    for _ in 2..10 {
        assert!(automaton.force_step().is_changed());
        assert_ne!(automaton.serialize(), Preset::Clock.source());
    }

    assert!(automaton.force_step().is_changed());
    assert_eq!(automaton.serialize(), Preset::Clock.source());
    assert_eq!(automaton.generation(), 10);
}

#[test]
fn test_corner_conductor_never_wraps() {
    let mut automaton = loaded("w.h\n...\nh.h");
    automaton.force_step();
    assert_eq!(automaton.cell(0, 0), Some(Cell::Conductor));

    let mut automaton = loaded("wh\nhh");
    automaton.force_step();
    assert_eq!(automaton.cell(0, 0), Some(Cell::Conductor));

    let mut automaton = loaded("wh\n..");
    automaton.force_step();
    assert_eq!(automaton.cell(0, 0), Some(Cell::Head));
}

#[test]
fn test_empty_grid_never_changes() {
    let mut automaton = Automaton::new(16, 9);
    automaton.toggle_pause();
    for _ in 0..5 {
        assert_eq!(automaton.step(), StepOutcome::Unchanged);
    }
    assert_eq!(automaton.generation(), 0);
}

#[test]
fn test_reset_after_many_steps() {
    let mut automaton = loaded(Preset::Xor.source());
    automaton.set_cell(0, 0, Cell::Head);
    automaton.set_cell(6, 0, Cell::Head);
    let baseline = automaton.serialize();

    automaton.toggle_pause();
    let mut steps = 0;
    while automaton.step().is_changed() && steps < 50 {
        steps += 1;
    }
    assert!(automaton.generation() > 0);

    automaton.reset();
    assert_eq!(automaton.serialize(), baseline);
    assert_eq!(automaton.generation(), 0);
    assert!(automaton.is_paused());
}

#[test]
fn test_round_trip_normalizes() {
    let automaton = loaded("  #H\n\nT x\r\n");
    assert_eq!(automaton.serialize(), "..wh\nt...");

    let again = loaded(&automaton.serialize());
    assert_eq!(again.serialize(), automaton.serialize());
}

#[test]
fn test_padded_load_and_stamp() {
    let config = EngineConfig {
        padding: 4,
        ..EngineConfig::default()
    };
    let mut automaton = Automaton::with_config(&config).unwrap();
    automaton.load_from_text(Preset::Diode.source());
    assert_eq!(automaton.width(), 11);
    assert_eq!(automaton.height(), 11);

    let written = automaton.stamp(&Preset::Transistor.pattern(), 5, 5, Anchor::Center);
    assert_eq!(written, 11);
    assert_eq!(automaton.cell(4, 5), Some(Cell::Head));
    assert_eq!(automaton.initial_grid(), automaton.grid());
}
