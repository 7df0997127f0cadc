//! nshot_tui - Terminal front end for the casts-to-kill simulator
//!
//! The binary in `main.rs` wires these modules to a terminal; they are
//! exposed as a library so integration tests can drive them directly.

pub mod app;
pub mod inputs;
pub mod logging;
pub mod report;
pub mod ui;

pub use app::{App, Field, Tab};
pub use inputs::{default_inputs_path, InputError, Inputs, Prepared};
