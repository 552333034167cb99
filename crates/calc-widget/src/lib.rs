//! Scientific Calculator Widget
//!
//! A browser-ready calculator widget core: one evaluator holding the
//! display state, a flat input-event dispatcher, a small scientific
//! function library, and an append-only in-memory calculation history.
//!
//! There is deliberately no expression grammar here. The widget resolves
//! exactly one pending binary or unary operation at a time, strictly left
//! to right: `2 + 3 * 4 =` yields `20`, not `14`. Bracket keys only move
//! a paired counter for display bookkeeping. Invalid math (division by
//! zero, negative factorial, `nCr` with `n < r`) produces the IEEE-754
//! NaN sentinel and keeps flowing through subsequent operations; malformed
//! transitions (equals with nothing pending, closing an unopened bracket)
//! are silent no-ops.
//!
//! # Example
//!
//! ```rust
//! use calc_widget::prelude::*;
//!
//! let mut eval = Evaluator::new();
//! eval.apply_all([
//!     InputEvent::Digit(5),
//!     InputEvent::Operator(BinaryOp::Add),
//!     InputEvent::Digit(3),
//!     InputEvent::Equals,
//! ]);
//! assert_eq!(eval.state().display(), "8");
//! assert_eq!(eval.export_history(), "5 + 3 = 8");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// Browser widget surface - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{Evaluator, InputEvent};
    pub use crate::core::functions::{
        format_number, AngleUnit, BinaryOp, Constant, MemoryOp, UnaryFn,
    };
    pub use crate::core::history::History;
    pub use crate::core::state::CalculatorState;
    pub use crate::core::{CalcError, CalcResult};
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::{CalcWidget, DomElement, DomEvent, Keypad, MockDom, Mode, WidgetDriver};
}
