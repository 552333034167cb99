//! Calculator state and its pure input transitions.
//!
//! Every input kind is a single transition `fn(&self, ...) -> Self`
//! returning the next immutable state, so the fields that must change
//! together (display, trace, bracket counter) always do. There is no
//! ambient state: callers own a `CalculatorState` and thread it through.

use super::functions::{format_number, AngleUnit, BinaryOp, Constant, MemoryOp, UnaryFn};
use super::history::History;
use super::{CalcError, CalcResult};

/// Complete state of the calculator between input events.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Current numeric display, always a decimal numeral (or the
    /// NaN/Infinity sentinels an evaluation produced).
    display: String,
    /// Human-readable running expression shown above the display.
    trace: String,
    /// Stashed left operand awaiting the second one.
    first_operand: Option<f64>,
    /// Stored operator awaiting the second operand; set only together
    /// with `first_operand`.
    pending_op: Option<BinaryOp>,
    /// Next digit starts a fresh number instead of appending.
    awaiting_new_entry: bool,
    /// Active unit for the circular trig functions.
    angle_unit: AngleUnit,
    /// Memory register driven by the M+/M-/MR/MC keys.
    memory: f64,
    /// Balance of opened-minus-closed brackets; display bookkeeping
    /// only, never evaluated.
    open_brackets: u32,
    /// Append-only log of completed calculations.
    history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Session-start state: display `"0"`, empty trace and history, no
    /// pending work, memory zero, degrees.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            trace: String::new(),
            first_operand: None,
            pending_op: None,
            awaiting_new_entry: true,
            angle_unit: AngleUnit::Degrees,
            memory: 0.0,
            open_brackets: 0,
            history: History::new(),
        }
    }

    // ===== Accessors =====

    /// Current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Running expression trace.
    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Stashed left operand, if an operator has been pressed.
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Stored operator awaiting its second operand.
    #[must_use]
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    /// Whether the next digit starts a fresh number.
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Active angle unit.
    #[must_use]
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Memory register content.
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Open-bracket balance.
    #[must_use]
    pub fn open_brackets(&self) -> u32 {
        self.open_brackets
    }

    /// Completed-calculation log.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The display parsed as a number; an unparsable display (possible
    /// only through backspace edge cases) reads as NaN, mirroring the
    /// host's `parseFloat`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }

    // ===== Transitions =====

    /// Enters one digit key. Replaces the display when a fresh entry is
    /// awaited (or the display is a lone `"0"`), appends otherwise; the
    /// digit always lands on the trace. Values above 9 are ignored.
    #[must_use]
    pub fn enter_digit(&self, digit: u8) -> Self {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return self.clone();
        };
        let mut next = self.clone();
        if next.awaiting_new_entry {
            next.display = ch.to_string();
            next.awaiting_new_entry = false;
        } else if next.display == "0" {
            next.display = ch.to_string();
        } else {
            next.display.push(ch);
        }
        next.trace.push(ch);
        next
    }

    /// Appends a decimal point, only if the display has none yet.
    #[must_use]
    pub fn enter_decimal_point(&self) -> Self {
        if self.display.contains('.') {
            return self.clone();
        }
        let mut next = self.clone();
        next.display.push('.');
        next.trace.push('.');
        next.awaiting_new_entry = false;
        next
    }

    /// Tracks a bracket key. Opening brackets bump the balance; closing
    /// brackets are accepted only while something is open. Brackets are
    /// a paired counter for the trace, never evaluated.
    #[must_use]
    pub fn enter_bracket(&self, symbol: char) -> Self {
        let mut next = self.clone();
        match symbol {
            '(' | '{' | '[' => next.open_brackets += 1,
            ')' | '}' | ']' if next.open_brackets > 0 => next.open_brackets -= 1,
            _ => return self.clone(),
        }
        next.trace.push(symbol);
        next.awaiting_new_entry = true;
        next
    }

    /// Removes the last display and trace characters. A display down to
    /// one character (or already `"0"`) resets to `"0"`.
    ///
    /// The bracket balance follows the trailing trace character with the
    /// mirror adjustment the original widget ships (closing removed ->
    /// +1, opening removed -> -1); kept as observed rather than
    /// redefined.
    #[must_use]
    pub fn backspace(&self) -> Self {
        let mut next = self.clone();
        match next.trace.chars().last() {
            Some('(' | '{' | '[') => next.open_brackets = next.open_brackets.saturating_sub(1),
            Some(')' | '}' | ']') => next.open_brackets += 1,
            _ => {}
        }
        if next.display == "0" || next.display.chars().count() <= 1 {
            next.display = "0".to_string();
            next.awaiting_new_entry = true;
        } else {
            next.display.pop();
        }
        next.trace.pop();
        next
    }

    /// Inserts a constant: display takes its value, the trace its symbol.
    #[must_use]
    pub fn apply_constant(&self, constant: Constant) -> Self {
        let mut next = self.clone();
        next.display = format_number(constant.value());
        next.trace.push_str(constant.symbol());
        next.awaiting_new_entry = true;
        next
    }

    /// Applies a unary function to the display value. The record
    /// `"sym(x) = result"` replaces the trace and is appended to history.
    #[must_use]
    pub fn apply_unary(&self, function: UnaryFn) -> Self {
        let mut next = self.clone();
        let value = next.value();
        let result = function.apply(value, next.angle_unit);
        let record = format!(
            "{}({}) = {}",
            function.symbol(),
            format_number(value),
            format_number(result)
        );
        next.display = format_number(result);
        next.trace.clone_from(&record);
        next.history.record(record);
        next.awaiting_new_entry = true;
        next
    }

    /// Presses a binary operator key.
    ///
    /// With no operand stashed, the display value becomes the first
    /// operand. With a pending calculation, that calculation resolves
    /// first (left to right, no precedence), its record lands in the
    /// history, and its result becomes the new first operand.
    #[must_use]
    pub fn apply_operator(&self, op: BinaryOp) -> Self {
        let mut next = self.clone();
        let value = next.value();
        if let (Some(first), Some(pending)) = (next.first_operand, next.pending_op) {
            let result = pending.apply(first, value);
            let record = format!(
                "{} {} {} = {}",
                format_number(first),
                pending.symbol(),
                format_number(value),
                format_number(result)
            );
            next.display = format_number(result);
            next.first_operand = Some(result);
            next.trace = format!("{} {} ", format_number(result), op.symbol());
            next.history.record(record);
        } else if next.first_operand.is_none() {
            next.first_operand = Some(value);
            let operator = format!(" {} ", op.symbol());
            next.trace.push_str(&operator);
        }
        next.pending_op = Some(op);
        next.awaiting_new_entry = true;
        next
    }

    /// Resolves the pending calculation. Without both a stashed operand
    /// and a pending operator this is a no-op.
    #[must_use]
    pub fn apply_equals(&self) -> Self {
        let (Some(first), Some(pending)) = (self.first_operand, self.pending_op) else {
            return self.clone();
        };
        let mut next = self.clone();
        let second = next.value();
        let result = pending.apply(first, second);
        let record = format!(
            "{} {} {} = {}",
            format_number(first),
            pending.symbol(),
            format_number(second),
            format_number(result)
        );
        next.display = format_number(result);
        next.trace.clone_from(&record);
        next.history.record(record);
        next.first_operand = None;
        next.pending_op = None;
        next.awaiting_new_entry = true;
        next
    }

    /// Resets display, trace, pending work and the bracket balance.
    /// History, memory register and angle unit survive.
    #[must_use]
    pub fn clear(&self) -> Self {
        let mut next = self.clone();
        next.display = "0".to_string();
        next.trace.clear();
        next.first_operand = None;
        next.pending_op = None;
        next.open_brackets = 0;
        next.awaiting_new_entry = true;
        next
    }

    /// Runs one memory command against the register.
    #[must_use]
    pub fn memory_op(&self, op: MemoryOp) -> Self {
        let mut next = self.clone();
        let value = next.value();
        match op {
            MemoryOp::Add => next.memory += value,
            MemoryOp::Subtract => next.memory -= value,
            MemoryOp::Recall => {
                next.display = format_number(next.memory);
                next.trace = format!("Memory Recall ({})", format_number(next.memory));
            }
            MemoryOp::Clear => next.memory = 0.0,
        }
        next.awaiting_new_entry = true;
        next
    }

    /// Replays a history entry: the substring after its last `=` becomes
    /// the display, the whole entry becomes the trace, and any pending
    /// work is dropped.
    pub fn recall_history_entry(&self, entry: &str) -> CalcResult<Self> {
        let Some((_, result)) = entry.rsplit_once('=') else {
            return Err(CalcError::EntryWithoutResult {
                entry: entry.to_string(),
            });
        };
        let mut next = self.clone();
        next.display = result.trim().to_string();
        next.trace = entry.to_string();
        next.first_operand = None;
        next.pending_op = None;
        next.awaiting_new_entry = true;
        Ok(next)
    }

    /// Switches the trig angle unit.
    #[must_use]
    pub fn set_angle_unit(&self, unit: AngleUnit) -> Self {
        let mut next = self.clone();
        next.angle_unit = unit;
        next
    }

    /// Rotates Degrees -> Radians -> Gradians -> Degrees.
    #[must_use]
    pub fn cycle_angle_unit(&self) -> Self {
        self.set_angle_unit(self.angle_unit.cycled())
    }
}
