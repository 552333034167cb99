//! Keypad layouts and keyboard mapping for the calculator widget.
//!
//! Buttons resolve straight to core [`InputEvent`]s; the keypad itself
//! holds no state beyond its grid.

use super::calculator::Mode;
use super::dom::{DomElement, MockDom};
use crate::core::{BinaryOp, Constant, InputEvent, MemoryOp, UnaryFn};

/// A single keypad button: the event it fires and its grid placement.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypadButton {
    /// Event dispatched when the button is pressed.
    pub event: InputEvent,
    /// DOM element ID.
    pub id: String,
    /// Grid row (0-indexed).
    pub row: usize,
    /// Grid column (0-indexed).
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at a grid position; the ID derives from the event.
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            id: button_id(event),
            event,
            row,
            col,
        }
    }
}

/// Stable DOM ID for a button event.
#[must_use]
pub fn button_id(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => format!("btn-{d}"),
        InputEvent::DecimalPoint => "btn-decimal".to_string(),
        InputEvent::Operator(op) => format!("btn-{}", operator_name(op)),
        InputEvent::Function(f) => format!("btn-{}", function_name(f)),
        InputEvent::Constant(Constant::Pi) => "btn-pi".to_string(),
        InputEvent::Constant(Constant::E) => "btn-euler".to_string(),
        InputEvent::Bracket(symbol) => format!("btn-{}", bracket_name(symbol)),
        InputEvent::Backspace => "btn-backspace".to_string(),
        InputEvent::Clear => "btn-clear".to_string(),
        InputEvent::Equals => "btn-equals".to_string(),
        InputEvent::Memory(MemoryOp::Add) => "btn-mem-add".to_string(),
        InputEvent::Memory(MemoryOp::Subtract) => "btn-mem-sub".to_string(),
        InputEvent::Memory(MemoryOp::Recall) => "btn-mem-recall".to_string(),
        InputEvent::Memory(MemoryOp::Clear) => "btn-mem-clear".to_string(),
        InputEvent::CycleAngleUnit => "btn-angle-unit".to_string(),
    }
}

/// Label shown on a button.
#[must_use]
pub fn button_label(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => d.to_string(),
        InputEvent::DecimalPoint => ".".to_string(),
        InputEvent::Operator(op) => op.symbol().to_string(),
        InputEvent::Function(f) => f.symbol().to_string(),
        InputEvent::Constant(c) => c.symbol().to_string(),
        InputEvent::Bracket(symbol) => symbol.to_string(),
        InputEvent::Backspace => "⌫".to_string(),
        InputEvent::Clear => "C".to_string(),
        InputEvent::Equals => "=".to_string(),
        InputEvent::Memory(MemoryOp::Add) => "M+".to_string(),
        InputEvent::Memory(MemoryOp::Subtract) => "M-".to_string(),
        InputEvent::Memory(MemoryOp::Recall) => "MR".to_string(),
        InputEvent::Memory(MemoryOp::Clear) => "MC".to_string(),
        InputEvent::CycleAngleUnit => "deg/rad".to_string(),
    }
}

fn operator_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "plus",
        BinaryOp::Subtract => "minus",
        BinaryOp::Multiply => "times",
        BinaryOp::Divide => "divide",
        BinaryOp::Power => "power",
        BinaryOp::Percent => "percent",
        BinaryOp::Npr => "npr",
        BinaryOp::Ncr => "ncr",
    }
}

fn function_name(f: UnaryFn) -> &'static str {
    match f {
        UnaryFn::Sqrt => "sqrt",
        UnaryFn::Cbrt => "cbrt",
        UnaryFn::Square => "square",
        UnaryFn::Reciprocal => "reciprocal",
        UnaryFn::Factorial => "factorial",
        UnaryFn::Ln => "ln",
        UnaryFn::Log10 => "log",
        UnaryFn::Exp => "exp",
        UnaryFn::Sin => "sin",
        UnaryFn::Cos => "cos",
        UnaryFn::Tan => "tan",
        UnaryFn::Asin => "asin",
        UnaryFn::Acos => "acos",
        UnaryFn::Atan => "atan",
        UnaryFn::Sinh => "sinh",
        UnaryFn::Cosh => "cosh",
        UnaryFn::Tanh => "tanh",
    }
}

fn bracket_name(symbol: char) -> &'static str {
    match symbol {
        '(' => "open-paren",
        ')' => "close-paren",
        '{' => "open-brace",
        '}' => "close-brace",
        '[' => "open-square",
        ']' => "close-square",
        _ => "bracket",
    }
}

/// Keypad layout for one widget mode.
///
/// Normal mode:
/// ```text
/// [ C ] [ / ] [ * ] [ - ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ 4 ] [ 5 ]
/// [ 6 ] [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ] [ % ]
/// ```
///
/// Scientific mode prepends the memory, bracket, constant, trig,
/// hyperbolic and log rows above the same basic grid.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Keypad {
    /// Layout for the requested mode.
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Normal => Self::normal(),
            Mode::Scientific => Self::scientific(),
        }
    }

    /// The basic four-function keypad.
    #[must_use]
    pub fn normal() -> Self {
        let buttons = Self::basic_rows(0);
        Self {
            buttons,
            rows: 4,
            cols: 5,
        }
    }

    /// The scientific keypad.
    #[must_use]
    pub fn scientific() -> Self {
        let mut buttons = vec![
            // Row 0: memory commands and the angle-unit cycle
            KeypadButton::new(InputEvent::Memory(MemoryOp::Clear), 0, 0),
            KeypadButton::new(InputEvent::Memory(MemoryOp::Recall), 0, 1),
            KeypadButton::new(InputEvent::Memory(MemoryOp::Add), 0, 2),
            KeypadButton::new(InputEvent::Memory(MemoryOp::Subtract), 0, 3),
            KeypadButton::new(InputEvent::CycleAngleUnit, 0, 4),
            // Row 1: round/curly brackets and backspace
            KeypadButton::new(InputEvent::Bracket('('), 1, 0),
            KeypadButton::new(InputEvent::Bracket(')'), 1, 1),
            KeypadButton::new(InputEvent::Bracket('{'), 1, 2),
            KeypadButton::new(InputEvent::Bracket('}'), 1, 3),
            KeypadButton::new(InputEvent::Backspace, 1, 4),
            // Row 2: square brackets and constants
            KeypadButton::new(InputEvent::Bracket('['), 2, 0),
            KeypadButton::new(InputEvent::Bracket(']'), 2, 1),
            KeypadButton::new(InputEvent::Constant(Constant::Pi), 2, 2),
            KeypadButton::new(InputEvent::Constant(Constant::E), 2, 3),
            // Row 3: forward trig, power, exp
            KeypadButton::new(InputEvent::Function(UnaryFn::Sin), 3, 0),
            KeypadButton::new(InputEvent::Function(UnaryFn::Cos), 3, 1),
            KeypadButton::new(InputEvent::Function(UnaryFn::Tan), 3, 2),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Power), 3, 3),
            KeypadButton::new(InputEvent::Function(UnaryFn::Exp), 3, 4),
            // Row 4: inverse trig, square, reciprocal
            KeypadButton::new(InputEvent::Function(UnaryFn::Asin), 4, 0),
            KeypadButton::new(InputEvent::Function(UnaryFn::Acos), 4, 1),
            KeypadButton::new(InputEvent::Function(UnaryFn::Atan), 4, 2),
            KeypadButton::new(InputEvent::Function(UnaryFn::Square), 4, 3),
            KeypadButton::new(InputEvent::Function(UnaryFn::Reciprocal), 4, 4),
            // Row 5: hyperbolic family and roots
            KeypadButton::new(InputEvent::Function(UnaryFn::Sinh), 5, 0),
            KeypadButton::new(InputEvent::Function(UnaryFn::Cosh), 5, 1),
            KeypadButton::new(InputEvent::Function(UnaryFn::Tanh), 5, 2),
            KeypadButton::new(InputEvent::Function(UnaryFn::Sqrt), 5, 3),
            KeypadButton::new(InputEvent::Function(UnaryFn::Cbrt), 5, 4),
            // Row 6: logs and combinatorics
            KeypadButton::new(InputEvent::Function(UnaryFn::Ln), 6, 0),
            KeypadButton::new(InputEvent::Function(UnaryFn::Log10), 6, 1),
            KeypadButton::new(InputEvent::Function(UnaryFn::Factorial), 6, 2),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Npr), 6, 3),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Ncr), 6, 4),
        ];
        buttons.extend(Self::basic_rows(7));
        Self {
            buttons,
            rows: 11,
            cols: 5,
        }
    }

    /// The shared bottom rows, placed starting at `first_row`.
    fn basic_rows(first_row: usize) -> Vec<KeypadButton> {
        vec![
            KeypadButton::new(InputEvent::Clear, first_row, 0),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Divide), first_row, 1),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Multiply), first_row, 2),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Subtract), first_row, 3),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Add), first_row, 4),
            KeypadButton::new(InputEvent::Digit(7), first_row + 1, 0),
            KeypadButton::new(InputEvent::Digit(8), first_row + 1, 1),
            KeypadButton::new(InputEvent::Digit(9), first_row + 1, 2),
            KeypadButton::new(InputEvent::Digit(4), first_row + 1, 3),
            KeypadButton::new(InputEvent::Digit(5), first_row + 1, 4),
            KeypadButton::new(InputEvent::Digit(6), first_row + 2, 0),
            KeypadButton::new(InputEvent::Digit(1), first_row + 2, 1),
            KeypadButton::new(InputEvent::Digit(2), first_row + 2, 2),
            KeypadButton::new(InputEvent::Digit(3), first_row + 2, 3),
            KeypadButton::new(InputEvent::Equals, first_row + 2, 4),
            KeypadButton::new(InputEvent::Digit(0), first_row + 3, 0),
            KeypadButton::new(InputEvent::DecimalPoint, first_row + 3, 1),
            KeypadButton::new(InputEvent::Operator(BinaryOp::Percent), first_row + 3, 2),
        ]
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position; the grid may have gaps.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Button lookup by element ID.
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button lookup by the event it fires.
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Resolves a button click to its event.
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_button_by_id(element_id).map(|b| b.event)
    }

    /// Maps a keyboard key (browser `KeyboardEvent.key` spelling) to an
    /// input event. Mode toggling (Tab) is the widget's business, not
    /// the keypad's.
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<InputEvent> {
        match key {
            "0" => Some(InputEvent::Digit(0)),
            "1" => Some(InputEvent::Digit(1)),
            "2" => Some(InputEvent::Digit(2)),
            "3" => Some(InputEvent::Digit(3)),
            "4" => Some(InputEvent::Digit(4)),
            "5" => Some(InputEvent::Digit(5)),
            "6" => Some(InputEvent::Digit(6)),
            "7" => Some(InputEvent::Digit(7)),
            "8" => Some(InputEvent::Digit(8)),
            "9" => Some(InputEvent::Digit(9)),
            "." => Some(InputEvent::DecimalPoint),
            "+" => Some(InputEvent::Operator(BinaryOp::Add)),
            "-" => Some(InputEvent::Operator(BinaryOp::Subtract)),
            "*" => Some(InputEvent::Operator(BinaryOp::Multiply)),
            "/" => Some(InputEvent::Operator(BinaryOp::Divide)),
            "^" => Some(InputEvent::Operator(BinaryOp::Power)),
            "%" => Some(InputEvent::Operator(BinaryOp::Percent)),
            "(" => Some(InputEvent::Bracket('(')),
            ")" => Some(InputEvent::Bracket(')')),
            "{" => Some(InputEvent::Bracket('{')),
            "}" => Some(InputEvent::Bracket('}')),
            "[" => Some(InputEvent::Bracket('[')),
            "]" => Some(InputEvent::Bracket(']')),
            "Enter" | "=" => Some(InputEvent::Equals),
            "Escape" => Some(InputEvent::Clear),
            "Backspace" => Some(InputEvent::Backspace),
            _ => None,
        }
    }

    /// Creates DOM elements for every button.
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&button_label(btn.event))
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
            })
            .collect()
    }

    /// Creates the keypad container element with all buttons as children.
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div")
            .with_id("calc-keypad")
            .with_class("keypad");
        for btn_elem in self.create_dom_elements() {
            keypad = keypad.with_child(btn_elem);
        }
        keypad
    }
}

/// Extension trait wiring a keypad into a [`MockDom`].
pub trait MockDomKeypadExt {
    /// Registers the keypad container and every button.
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        self.register_element(keypad.create_keypad_element());
        for btn_elem in keypad.create_dom_elements() {
            self.register_element(btn_elem);
        }
    }
}
