//! Per-sweep observation hook.
//!
//! After every sweep the solver hands an [`Event`] to an [`Observer`], which
//! may return [`Action::StopEarly`] to end the run. `()` observes nothing, and
//! any `FnMut(&Event) -> Option<Action>` closure is an observer.

use super::Method;

/// Event emitted after each completed sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Sweeps completed so far, starting at 1.
    pub iteration: usize,

    /// Largest per-cell change produced by this sweep.
    pub delta: f64,

    /// Update rule that produced the sweep.
    pub method: Method,
}

/// Control actions an observer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and report the state reached so far.
    StopEarly,
}

/// Receives solver events and optionally returns a control action.
pub trait Observer {
    fn observe(&mut self, event: &Event) -> Option<Action>;
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) -> Option<Action> {
        None
    }
}

impl<F> Observer for F
where
    F: FnMut(&Event) -> Option<Action>,
{
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self(event)
    }
}
