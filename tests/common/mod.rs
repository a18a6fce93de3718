//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use std::time::Duration;

use flowcanvas::sequencer::{ManualClock, RunSequencer};

/// Advance the clock in 10ms slices, ticking after each, the way frame
/// callbacks would during real playback.
pub fn run_for(seq: &mut RunSequencer, clock: &ManualClock, total_ms: u64) {
    let slice = Duration::from_millis(10);
    for _ in 0..(total_ms / 10) {
        clock.advance(slice);
        seq.tick();
    }
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
