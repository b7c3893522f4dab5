//! Simulated-time timer queue for deferred effects.
//!
//! Chain-reaction propagation hits are scheduled here instead of on
//! wall-clock timers: the queue is drained once per tick by comparing due
//! times against `SimTime::elapsed_secs`, which makes deferred effects
//! deterministic and pause-safe (pausing stops the clock, so pending
//! events simply wait). Consumers of drained actions must re-check entity
//! liveness — firing after the owning entity died is an expected race and
//! a guarded no-op.

/// A deferred action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Apply one hit to a target (chain-reaction propagation).
    ChainHit { target: hecs::Entity },
}

/// One scheduled entry.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    pub due_secs: f64,
    pub action: TimerAction,
}

/// FIFO-within-due-time queue of scheduled events.
#[derive(Debug, Default)]
pub struct TimerQueue {
    events: Vec<ScheduledEvent>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_secs: f64, action: TimerAction) {
        self.events.push(ScheduledEvent { due_secs, action });
    }

    /// Remove and return every action whose due time has passed,
    /// preserving scheduling order.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.events.retain(|e| {
            if e.due_secs <= now_secs {
                due.push(e.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
