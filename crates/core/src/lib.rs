//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the lander simulation: entity kinematics, collision,
//! fuel and win/lose state, and the fixed-timestep driver. It has **zero
//! dependencies** on terminals, images, or input devices, making it:
//!
//! - **Deterministic**: The same control sequence always produces the same flight
//! - **Testable**: Every rule runs headless with synthetic frame times
//! - **Portable**: Any renderer can consume the draw list
//! - **Fast**: Ticks and draw lists never allocate
//!
//! # Module Structure
//!
//! - [`entity`]: Kinematic state, AABB collision, thrust controls
//! - [`animation`]: Sprite-sheet frame selection per thrust direction
//! - [`clock`]: Fixed timestep accumulator
//! - [`overlay`]: Win/lose messages and the fuel gauge
//! - [`scene`]: The lunar level
//! - [`session`]: The per-frame driver tying it all together
//! - [`draw`]: Sprites handed to a renderer
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_lander_core::{Session, FIXED_TIMESTEP};
//! use tui_lander_types::Controls;
//!
//! let mut session = Session::new();
//!
//! // Hold "up" for ten ticks.
//! let report = session.frame(FIXED_TIMESTEP * 10, Controls::UP);
//! assert_eq!(report.ticks, 10);
//! assert_eq!(session.player().fuel(), 990);
//! ```
//!
//! # Timing
//!
//! - **Tick**: 0.0166666 s (≈ 60 Hz), independent of the render rate
//! - **Gravity**: -0.25 world units/s² on the lander
//! - **Fuel**: one unit per held thrust key per tick

pub mod animation;
pub mod clock;
pub mod draw;
pub mod entity;
pub mod overlay;
pub mod scene;
pub mod session;

pub use tui_lander_types as types;

// Re-export commonly used types for convenience
pub use animation::{Animation, SpriteSheet};
pub use clock::{FixedTimestep, FIXED_TIMESTEP};
pub use draw::{DrawList, Sprite, MAX_SPRITES};
pub use entity::{Entity, Mat4, Vec3};
pub use overlay::{FuelGauge, Messages};
pub use scene::Scene;
pub use session::{FrameReport, Outcome, Session};
