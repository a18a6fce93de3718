//! Scripted run playback.
//!
//! "Running" a pipeline in FlowCanvas is a fixed-duration animated
//! replay, not execution: the sequencer walks an authored step list,
//! marking each node active and then completed on a timed schedule.
//!
//! # Design
//!
//! - **Declarative scripts** — delays/durations/joins are data
//!   (`RunStep`), not callback chains, so tests drive them with a
//!   manual clock.
//! - **Polled state machine** — the UI ticks the sequencer each frame;
//!   nothing blocks and nothing runs off-thread.
//! - **Epoch guard** — every scheduled timer carries its run epoch;
//!   restarting invalidates the previous run's timers by construction.

pub mod clock;
pub mod engine;
pub mod script;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{RunSequencer, RunState};
pub use script::{RunScript, RunStep, DEFAULT_STEP_DURATION, TRAILING_DELAY};
pub use timer::{TimerHandle, TimerQueue};
