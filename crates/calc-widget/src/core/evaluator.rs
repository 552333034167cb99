//! Event dispatch over an owned [`CalculatorState`].
//!
//! The evaluator is the single writer: events are applied one at a
//! time, synchronously, each replacing the owned state with the result
//! of the matching pure transition.

use tracing::debug;

use super::functions::{BinaryOp, Constant, MemoryOp, UnaryFn};
use super::state::CalculatorState;
use super::CalcResult;

/// A discrete input event from the presentation layer or a keyboard
/// mapping collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Digit key 0-9.
    Digit(u8),
    /// Decimal point key.
    DecimalPoint,
    /// Binary operator key.
    Operator(BinaryOp),
    /// Scientific function key.
    Function(UnaryFn),
    /// Constant key.
    Constant(Constant),
    /// One of the bracket keys `( ) { } [ ]`.
    Bracket(char),
    /// Backspace.
    Backspace,
    /// Clear / escape.
    Clear,
    /// Equals / enter.
    Equals,
    /// Memory command key.
    Memory(MemoryOp),
    /// Angle-unit cycle key.
    CycleAngleUnit,
}

/// Owns one [`CalculatorState`] and applies input events to it.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    state: CalculatorState,
}

impl Evaluator {
    /// Creates an evaluator at the session-start state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// Creates an evaluator over an existing state.
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Consumes the evaluator, yielding its state.
    #[must_use]
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Applies one input event.
    pub fn apply(&mut self, event: InputEvent) {
        debug!(?event, display = self.state.display(), "input event");
        self.state = match event {
            InputEvent::Digit(digit) => self.state.enter_digit(digit),
            InputEvent::DecimalPoint => self.state.enter_decimal_point(),
            InputEvent::Operator(op) => self.state.apply_operator(op),
            InputEvent::Function(function) => self.state.apply_unary(function),
            InputEvent::Constant(constant) => self.state.apply_constant(constant),
            InputEvent::Bracket(symbol) => self.state.enter_bracket(symbol),
            InputEvent::Backspace => self.state.backspace(),
            InputEvent::Clear => self.state.clear(),
            InputEvent::Equals => self.state.apply_equals(),
            InputEvent::Memory(op) => self.state.memory_op(op),
            InputEvent::CycleAngleUnit => self.state.cycle_angle_unit(),
        };
    }

    /// Applies a sequence of events in order.
    pub fn apply_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
    }

    /// Replays a history entry into the display; fails when the entry
    /// carries no `=` result.
    pub fn recall_history_entry(&mut self, entry: &str) -> CalcResult<()> {
        self.state = self.state.recall_history_entry(entry)?;
        Ok(())
    }

    /// Newline-joined export of the history log, one record per line.
    #[must_use]
    pub fn export_history(&self) -> String {
        self.state.history().export_text()
    }
}
