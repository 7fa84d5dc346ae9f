//! Cargo yard shell library.
//!
//! Holds the command grammar, the session dispatcher, and the text/JSON
//! renderers used by the `cargoyard` binary.

pub mod commands;
pub mod output;
pub mod session;
pub mod terminal;
