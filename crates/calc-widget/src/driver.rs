//! Unified widget driver: write a behavior check once, run it against
//! any surface (bare evaluator, mock-DOM widget, browser bindings).

use crate::core::{BinaryOp, Evaluator, InputEvent, MemoryOp, UnaryFn};

/// Abstract driver over a calculator surface.
///
/// Both the bare [`Evaluator`] and the mock-DOM
/// [`WidgetDriver`](crate::wasm::WidgetDriver) implement this, so one
/// specification exercises every surface.
pub trait CalculatorDriver {
    /// Feeds one input event to the calculator.
    fn tap(&mut self, event: InputEvent);

    /// Current display string.
    fn display(&self) -> String;

    /// Current running-expression trace.
    fn trace(&self) -> String;

    /// History records in insertion order.
    fn history(&self) -> Vec<String>;

    /// Presses the clear key.
    fn clear(&mut self) {
        self.tap(InputEvent::Clear);
    }
}

impl CalculatorDriver for Evaluator {
    fn tap(&mut self, event: InputEvent) {
        self.apply(event);
    }

    fn display(&self) -> String {
        self.state().display().to_string()
    }

    fn trace(&self) -> String {
        self.state().trace().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.state().history().iter().map(str::to_string).collect()
    }
}

/// Taps a number in one key at a time (digits and decimal point).
pub fn enter_number<D: CalculatorDriver>(driver: &mut D, digits: &str) {
    for ch in digits.chars() {
        match ch {
            '.' => driver.tap(InputEvent::DecimalPoint),
            _ => {
                if let Some(d) = ch.to_digit(10) {
                    driver.tap(InputEvent::Digit(d as u8));
                }
            }
        }
    }
}

// ===== Unified behavior specifications =====
// These run against ANY CalculatorDriver implementation.

/// Keyed-in digits read back as the same number.
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter_number(driver, "123.5");
    assert_eq!(driver.display(), "123.5");
    driver.clear();
}

/// Operator chaining is strictly left to right, no precedence.
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter_number(driver, "2");
    driver.tap(InputEvent::Operator(BinaryOp::Add));
    enter_number(driver, "3");
    driver.tap(InputEvent::Operator(BinaryOp::Multiply));
    enter_number(driver, "4");
    driver.tap(InputEvent::Equals);
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Division by zero yields the NaN sentinel and keeps chaining.
pub fn verify_nan_propagation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter_number(driver, "1");
    driver.tap(InputEvent::Operator(BinaryOp::Divide));
    enter_number(driver, "0");
    driver.tap(InputEvent::Equals);
    assert_eq!(driver.display(), "NaN");

    driver.tap(InputEvent::Operator(BinaryOp::Add));
    enter_number(driver, "2");
    driver.tap(InputEvent::Equals);
    assert_eq!(driver.display(), "NaN");
    driver.clear();
}

/// Completed calculations land in the history, oldest first, and
/// clearing the calculator does not shrink the log.
pub fn verify_history_tracking<D: CalculatorDriver>(driver: &mut D) {
    let base = driver.history().len();

    enter_number(driver, "5");
    driver.tap(InputEvent::Operator(BinaryOp::Add));
    enter_number(driver, "3");
    driver.tap(InputEvent::Equals);

    enter_number(driver, "9");
    driver.tap(InputEvent::Function(UnaryFn::Sqrt));

    let history = driver.history();
    assert_eq!(history.len(), base + 2);
    assert_eq!(history[base], "5 + 3 = 8");
    assert_eq!(history[base + 1], "√(9) = 3");

    driver.clear();
    assert_eq!(driver.history().len(), base + 2);
}

/// The memory register accumulates across clears.
pub fn verify_memory_register<D: CalculatorDriver>(driver: &mut D) {
    driver.tap(InputEvent::Memory(MemoryOp::Clear));
    enter_number(driver, "5");
    driver.tap(InputEvent::Memory(MemoryOp::Add));
    driver.clear();
    enter_number(driver, "3");
    driver.tap(InputEvent::Memory(MemoryOp::Add));
    driver.tap(InputEvent::Memory(MemoryOp::Recall));
    assert_eq!(driver.display(), "8");

    driver.tap(InputEvent::Memory(MemoryOp::Clear));
    driver.tap(InputEvent::Memory(MemoryOp::Recall));
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Forward trig follows the active angle unit.
pub fn verify_angle_units<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter_number(driver, "90");
    driver.tap(InputEvent::Function(UnaryFn::Sin));
    assert_eq!(driver.display(), "1");

    // deg -> rad -> grad
    driver.tap(InputEvent::CycleAngleUnit);
    driver.tap(InputEvent::CycleAngleUnit);
    driver.clear();
    enter_number(driver, "100");
    driver.tap(InputEvent::Function(UnaryFn::Sin));
    assert_eq!(driver.display(), "1");

    // restore degrees for whatever runs next
    driver.tap(InputEvent::CycleAngleUnit);
    driver.clear();
}

/// Runs every specification in sequence.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_left_to_right_chaining(driver);
    verify_nan_propagation(driver);
    verify_history_tracking(driver);
    verify_memory_register(driver);
    verify_angle_units(driver);
}
