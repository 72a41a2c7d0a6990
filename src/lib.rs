//! TUI Lander (workspace facade crate).
//!
//! Re-exports the `tui_lander::{core,input,term,types}` API whose
//! implementation lives in dedicated crates under `crates/`, plus the
//! binary's environment configuration.

pub mod config;

pub use tui_lander_core as core;
pub use tui_lander_input as input;
pub use tui_lander_term as term;
pub use tui_lander_types as types;

pub use config::LanderConfig;
