//! Workspace tooling package.
//!
//! Carries the shared pre-commit hook configuration. The yard library lives in
//! `crates/cargoyard-lib` and the shell in `crates/cargoyard-cli`.
