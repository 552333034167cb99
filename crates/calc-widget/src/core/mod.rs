//! Core calculator engine: state, function table, history, and dispatch.

pub mod evaluator;
pub mod functions;
pub mod history;
pub mod state;

use thiserror::Error;

/// Errors produced by the calculator core.
///
/// Invalid math never lands here: division by zero, negative factorials
/// and out-of-domain inverses all yield the NaN sentinel and keep
/// flowing through subsequent operations. The only fallible surface is
/// replaying a history entry that carries no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A recalled history entry contains no `=` result part.
    #[error("history entry has no result part: {entry:?}")]
    EntryWithoutResult {
        /// The offending history line.
        entry: String,
    },
}

/// Convenience result alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

pub use evaluator::{Evaluator, InputEvent};
pub use functions::{format_number, AngleUnit, BinaryOp, Constant, MemoryOp, UnaryFn};
pub use history::History;
pub use state::CalculatorState;
