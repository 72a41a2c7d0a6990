//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders the session's draw list into
//! a simple framebuffer that is diffed and flushed to a terminal backend.
//!
//! - [`game_view`] projects world-space sprites into terminal cells
//! - [`assets`] turns texture images (or a built-in table) into colors
//! - [`renderer`] owns the terminal session and writes changed cells

pub mod assets;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_lander_core as core;
pub use tui_lander_types as types;

pub use assets::{AssetError, AssetSource, Palette};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
