//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events onto thrust [`crate::types::Direction`]s and folds them into the
//! held-key [`crate::types::Controls`] snapshot the simulation reads each
//! frame, including on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_lander_types as types;

pub use handler::{InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, map_key, should_quit};
