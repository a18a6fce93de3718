//! The run sequencer state machine.
//!
//! Replays an authored [`RunScript`] over the graph: each step waits its
//! scripted delay, holds its node "active" while a progress fraction
//! fills over the step duration, then appends the node to the completed
//! set and hands off to the next step. Join steps additionally gate on
//! their predecessors' completion. There is no failure path — the run is
//! a deterministic, always-succeeding animation.
//!
//! The sequencer is polled: the UI calls [`RunSequencer::tick`] once per
//! frame, and all time comes from the injected [`Clock`]. Restarting
//! bumps the run epoch, which invalidates every timer the previous run
//! scheduled (see [`TimerQueue`]).

use std::time::Instant;

use crate::graph::NodeId;

use super::clock::{Clock, SystemClock};
use super::script::{RunScript, TRAILING_DELAY};
use super::timer::TimerQueue;

/// Coarse run state exposed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Where the running playback currently is.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    /// A step's activation timer is pending (or blocked on its join).
    Waiting,
    Active {
        index: usize,
        started_at: Instant,
    },
    /// All steps completed; the trailing-delay timer is pending.
    Trailing,
}

#[derive(Debug, Clone, Copy)]
enum TimerEvent {
    Activate(usize),
    Finish,
}

/// Scripted playback of activation/completion states across the graph.
pub struct RunSequencer {
    clock: Box<dyn Clock>,
    script: RunScript,
    timers: TimerQueue<TimerEvent>,
    /// Monotonic run counter; timers from older epochs never fire.
    epoch: u64,
    state: RunState,
    phase: Phase,
    active: Option<NodeId>,
    completed: Vec<NodeId>,
    /// 0–100 fill fraction for the active node.
    progress: f32,
    /// Step index whose join predicate was unsatisfied when its
    /// activation timer fired; re-checked every tick.
    blocked: Option<usize>,
}

impl RunSequencer {
    pub fn new(script: RunScript) -> Self {
        Self::with_clock(script, Box::new(SystemClock))
    }

    pub fn with_clock(script: RunScript, clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            script,
            timers: TimerQueue::new(),
            epoch: 0,
            state: RunState::Idle,
            phase: Phase::Idle,
            active: None,
            completed: Vec::new(),
            progress: 0.0,
            blocked: None,
        }
    }

    // ── Accessors ──

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// The at-most-one currently active node.
    pub fn active_node(&self) -> Option<NodeId> {
        self.active
    }

    /// Nodes completed during the current (or most recent) run, in
    /// completion order.
    pub fn completed(&self) -> &[NodeId] {
        &self.completed
    }

    pub fn is_completed(&self, id: NodeId) -> bool {
        self.completed.contains(&id)
    }

    /// Progress of the active node, 0–100.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn script(&self) -> &RunScript {
        &self.script
    }

    // ── Control ──

    /// Replace the script (when the demo graph changes) and drop any
    /// in-flight run.
    pub fn set_script(&mut self, script: RunScript) {
        self.script = script;
        self.epoch += 1;
        self.timers.clear();
        self.blocked = None;
        self.state = RunState::Idle;
        self.phase = Phase::Idle;
        self.active = None;
        self.completed.clear();
        self.progress = 0.0;
    }

    /// Start a run. An in-flight run is superseded: the epoch bump and
    /// timer clear guarantee none of its pending callbacks can mutate
    /// state afterwards.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.epoch += 1;
        self.timers.clear();
        self.blocked = None;
        self.completed.clear();
        self.active = None;
        self.progress = 0.0;

        if self.script.is_empty() {
            self.state = RunState::Idle;
            self.phase = Phase::Idle;
            return;
        }

        tracing::debug!(epoch = self.epoch, steps = self.script.len(), "run started");
        self.state = RunState::Running;
        self.phase = Phase::Waiting;
        // The first step activates with zero initial delay.
        self.timers.schedule(self.epoch, now, TimerEvent::Activate(0));
        self.advance(now);
    }

    /// Advance the playback to the current clock time. Call once per
    /// frame while running; a no-op when idle.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.advance(now);
    }

    // ── Internals ──

    fn advance(&mut self, now: Instant) {
        if self.state != RunState::Running {
            return;
        }

        for event in self.timers.fire_due(now, self.epoch) {
            match event {
                TimerEvent::Activate(index) => self.try_activate(index, now),
                TimerEvent::Finish => self.finish(),
            }
        }

        // A join that was unsatisfied when its timer fired is retried
        // every tick until its predecessors complete.
        if let Some(index) = self.blocked.take() {
            self.try_activate(index, now);
        }

        if let Phase::Active { index, started_at } = self.phase {
            let step = &self.script.steps()[index];
            let elapsed = now.saturating_duration_since(started_at);
            let fraction = if step.duration.is_zero() {
                100.0
            } else {
                (elapsed.as_secs_f32() / step.duration.as_secs_f32() * 100.0).min(100.0)
            };
            self.progress = fraction;
            if fraction >= 100.0 {
                self.complete(index, now);
            }
        }
    }

    fn try_activate(&mut self, index: usize, now: Instant) {
        let step = &self.script.steps()[index];
        if step.joins_on.iter().any(|j| !self.completed.contains(j)) {
            self.blocked = Some(index);
            return;
        }
        tracing::debug!(node = %step.node, step = index, "node active");
        self.active = Some(step.node);
        self.progress = 0.0;
        self.phase = Phase::Active {
            index,
            started_at: now,
        };
    }

    fn complete(&mut self, index: usize, now: Instant) {
        let node = self.script.steps()[index].node;
        tracing::debug!(node = %node, step = index, "node completed");
        self.completed.push(node);
        self.active = None;
        self.progress = 0.0;

        if let Some(next) = self.script.steps().get(index + 1) {
            self.phase = Phase::Waiting;
            self.timers
                .schedule(self.epoch, now + next.delay, TimerEvent::Activate(index + 1));
        } else {
            self.phase = Phase::Trailing;
            self.timers
                .schedule(self.epoch, now + TRAILING_DELAY, TimerEvent::Finish);
        }
    }

    fn finish(&mut self) {
        tracing::debug!(epoch = self.epoch, "run finished");
        self.state = RunState::Idle;
        self.phase = Phase::Idle;
        self.active = None;
        self.progress = 0.0;
    }
}
