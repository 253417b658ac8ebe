//! State Machine Runtime
//!
//! Flat statecharts for interaction states such as contact form
//! submission. A machine is a table of `(state, event) -> state`
//! transitions; events with no entry for the current state are ignored.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: FxHashMap<(S, E), S>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to). A later `on` for the same
    /// state and event replaces the earlier target.
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
#[derive(Debug)]
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: FxHashMap<(S, E), S>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> S {
        self.current_state
    }

    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.transitions.contains_key(&(self.current_state, event))
    }

    /// Send an event, returning the state after any transition.
    ///
    /// Events with no matching transition leave the machine untouched.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;
        let Some(&to_state) = self.transitions.get(&(current, event)) else {
            tracing::trace!(?current, ?event, "event ignored");
            return current;
        };

        self.current_state = to_state;
        tracing::trace!(from = ?current, ?event, to = ?to_state, "transition");
        to_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Form {
        Idle,
        Sending,
        Sent,
        Failed,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Ev {
        Submit,
        Ok,
        Err,
        Reset,
    }

    fn form_machine() -> StateMachine<Form, Ev> {
        StateMachine::builder(Form::Idle)
            .on(Form::Idle, Ev::Submit, Form::Sending)
            .on(Form::Sending, Ev::Ok, Form::Sent)
            .on(Form::Sending, Ev::Err, Form::Failed)
            .on(Form::Sent, Ev::Reset, Form::Idle)
            .on(Form::Failed, Ev::Reset, Form::Idle)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = form_machine();
        assert_eq!(fsm.current_state(), Form::Idle);

        assert_eq!(fsm.send(Ev::Submit), Form::Sending);
        assert_eq!(fsm.send(Ev::Err), Form::Failed);
        assert_eq!(fsm.send(Ev::Reset), Form::Idle);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = form_machine();

        // Cannot succeed before submitting
        assert!(!fsm.can_send(Ev::Ok));
        assert_eq!(fsm.send(Ev::Ok), Form::Idle);
        assert!(fsm.is_in(Form::Idle));
        assert!(fsm.can_send(Ev::Submit));
    }

    #[test]
    fn test_later_transition_replaces_earlier() {
        let mut fsm = StateMachine::builder(Form::Idle)
            .on(Form::Idle, Ev::Submit, Form::Sent)
            .on(Form::Idle, Ev::Submit, Form::Sending)
            .build();
        assert_eq!(fsm.send(Ev::Submit), Form::Sending);
    }
}
