//! Browser-facing widget surface.
//!
//! The mock DOM keeps the whole surface testable without web-sys; the
//! real browser bindings live behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{CalcWidget, Mode};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WidgetDriver;
pub use keypad::{button_id, button_label, Keypad, KeypadButton, MockDomKeypadExt};
