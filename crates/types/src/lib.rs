//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # World Units
//!
//! The playfield is described in world units, viewed through an orthographic
//! window centred on the origin:
//!
//! - **Horizontal**: -5.0 to 5.0
//! - **Vertical**: -3.75 to 3.75
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIXED_TIMESTEP_NS` | 16 666 600 | Fixed timestep interval (~60 Hz) |
//! | `GRAVITY` | -2.5 | Gravity before the lander's 0.1 scale |
//! | `STARTING_FUEL` | 1000 | Fuel at the start of a session |
//! | `BOOST_UP_DELTA_V` | 0.008 | Vertical velocity added per upward boost |
//! | `BOOST_SIDE_DELTA_A` | 0.35 | Horizontal acceleration added per side boost |
//!
//! # Fuel Tiers
//!
//! | Fuel | Tier |
//! |------|------|
//! | `>= 750` | Full |
//! | `350..750` | Half |
//! | `0..350` | Low |
//! | `< 0` | Empty |
//!
//! # Examples
//!
//! ```
//! use tui_lander_types::{Direction, FuelTier, Texture};
//!
//! assert_eq!(FuelTier::from_fuel(1000), FuelTier::Full);
//! assert_eq!(FuelTier::from_fuel(-1), FuelTier::Empty);
//! assert_eq!(FuelTier::Half.texture(), Texture::HalfFuel);
//! assert_eq!(Direction::Up.index(), 2);
//! ```

/// Fixed timestep interval in nanoseconds (0.0166666 s ≈ 60 Hz)
pub const FIXED_TIMESTEP_NS: u64 = 16_666_600;

/// Fixed timestep interval in seconds, as handed to entity updates
pub const FIXED_TIMESTEP_SECS: f32 = 0.016_666_6;

/// Acceleration of gravity in world units per second squared
pub const GRAVITY: f32 = -2.5;

/// Scale applied to [`GRAVITY`] for the lander (lunar gravity)
pub const GRAVITY_SCALE: f32 = 0.1;

/// Fuel at the start of a session
pub const STARTING_FUEL: i32 = 1000;

/// Fuel below this shows the half tier
pub const FUEL_HALF_BELOW: i32 = 750;

/// Fuel below this shows the low tier
pub const FUEL_LOW_BELOW: i32 = 350;

/// Fuel below this shows the empty tier
pub const FUEL_EMPTY_BELOW: i32 = 0;

/// Vertical velocity added by one upward boost
pub const BOOST_UP_DELTA_V: f32 = 0.008;

/// Horizontal acceleration added by one sideways boost
pub const BOOST_SIDE_DELTA_A: f32 = 0.35;

/// Seconds each animation frame is held
pub const SECONDS_PER_FRAME: f32 = 0.25;

/// Default collision half-extent for entities
pub const DEFAULT_HALF_EXTENT: f32 = 0.375;

/// Number of win platforms in the level
pub const WIN_PLATFORM_COUNT: usize = 3;

/// Number of lose platforms (asteroids) in the level
pub const LOSE_PLATFORM_COUNT: usize = 9;

/// Total platforms in the level
pub const NUMBER_OF_PLATFORMS: usize = WIN_PLATFORM_COUNT + LOSE_PLATFORM_COUNT;

/// Half width of the orthographic view
pub const VIEW_HALF_WIDTH: f32 = 5.0;

/// Half height of the orthographic view
pub const VIEW_HALF_HEIGHT: f32 = 3.75;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lander_tuning_defaults() {
        assert_eq!(FIXED_TIMESTEP_NS, 16_666_600);
        assert!((FIXED_TIMESTEP_SECS - FIXED_TIMESTEP_NS as f32 / 1e9).abs() < 1e-9);
        assert!((GRAVITY * GRAVITY_SCALE + 0.25).abs() < f32::EPSILON);
        assert_eq!(STARTING_FUEL, 1000);
        assert_eq!(NUMBER_OF_PLATFORMS, 12);
    }

    #[test]
    fn fuel_tier_boundaries_are_strict() {
        assert_eq!(FuelTier::from_fuel(1000), FuelTier::Full);
        assert_eq!(FuelTier::from_fuel(750), FuelTier::Full);
        assert_eq!(FuelTier::from_fuel(749), FuelTier::Half);
        assert_eq!(FuelTier::from_fuel(350), FuelTier::Half);
        assert_eq!(FuelTier::from_fuel(349), FuelTier::Low);
        assert_eq!(FuelTier::from_fuel(0), FuelTier::Low);
        assert_eq!(FuelTier::from_fuel(-1), FuelTier::Empty);
        assert_eq!(FuelTier::from_fuel(i32::MIN), FuelTier::Empty);
    }

    #[test]
    fn fuel_tiers_order_from_empty_to_full() {
        assert!(FuelTier::Empty < FuelTier::Low);
        assert!(FuelTier::Low < FuelTier::Half);
        assert!(FuelTier::Half < FuelTier::Full);
        assert_eq!(FuelTier::Full.min(FuelTier::Low), FuelTier::Low);
    }
}

/// The kinds of entity in a session
///
/// - **Player**: the lander, the only entity that moves
/// - **WinPlatform**: landing pad; vertical contact wins
/// - **LosePlatform**: asteroid; vertical contact loses
/// - **Message**: win/lose overlay
/// - **Fuel**: fuel gauge icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    WinPlatform,
    LosePlatform,
    Message,
    Fuel,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::WinPlatform => "winPlatform",
            EntityKind::LosePlatform => "losePlatform",
            EntityKind::Message => "message",
            EntityKind::Fuel => "fuel",
        }
    }
}

/// Thrust direction, used to key the lander's animation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
}

impl Direction {
    /// Row of this direction in a per-direction table
    ///
    /// ```
    /// use tui_lander_types::Direction;
    ///
    /// assert_eq!(Direction::Left.index(), 0);
    /// assert_eq!(Direction::Right.index(), 1);
    /// ```
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
        }
    }
}

/// Discrete fuel gauge state
///
/// Ordered from `Empty` (lowest) to `Full` (highest) so that a gauge can only
/// move down with `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuelTier {
    Empty,
    Low,
    Half,
    Full,
}

impl FuelTier {
    /// Select the tier for a fuel reading (all thresholds are strict less-than)
    pub fn from_fuel(fuel: i32) -> Self {
        if fuel < FUEL_EMPTY_BELOW {
            FuelTier::Empty
        } else if fuel < FUEL_LOW_BELOW {
            FuelTier::Low
        } else if fuel < FUEL_HALF_BELOW {
            FuelTier::Half
        } else {
            FuelTier::Full
        }
    }

    pub fn texture(&self) -> Texture {
        match self {
            FuelTier::Full => Texture::FullFuel,
            FuelTier::Half => Texture::HalfFuel,
            FuelTier::Low => Texture::LowFuel,
            FuelTier::Empty => Texture::NoFuel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelTier::Full => "full",
            FuelTier::Half => "half",
            FuelTier::Low => "low",
            FuelTier::Empty => "empty",
        }
    }
}

/// Texture handle carried by every entity
///
/// The renderer decides what a texture looks like; the simulation only
/// passes the handle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Spritesheet,
    Platform,
    Asteroid,
    WinMessage,
    LoseMessage,
    FullFuel,
    HalfFuel,
    LowFuel,
    NoFuel,
}

/// Number of distinct textures
pub const TEXTURE_COUNT: usize = 9;

impl Texture {
    pub const ALL: [Texture; TEXTURE_COUNT] = [
        Texture::Spritesheet,
        Texture::Platform,
        Texture::Asteroid,
        Texture::WinMessage,
        Texture::LoseMessage,
        Texture::FullFuel,
        Texture::HalfFuel,
        Texture::LowFuel,
        Texture::NoFuel,
    ];

    /// Image file name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Texture::Spritesheet => "Space.png",
            Texture::Platform => "Ground.png",
            Texture::Asteroid => "Asteroid.png",
            Texture::WinMessage => "Win.png",
            Texture::LoseMessage => "Lose.png",
            Texture::FullFuel => "FullFuel.png",
            Texture::HalfFuel => "HalfFuel.png",
            Texture::LowFuel => "LowFuel.png",
            Texture::NoFuel => "NoFuel.png",
        }
    }

    /// Dense index for per-texture lookup tables
    pub fn index(&self) -> usize {
        match self {
            Texture::Spritesheet => 0,
            Texture::Platform => 1,
            Texture::Asteroid => 2,
            Texture::WinMessage => 3,
            Texture::LoseMessage => 4,
            Texture::FullFuel => 5,
            Texture::HalfFuel => 6,
            Texture::LowFuel => 7,
            Texture::NoFuel => 8,
        }
    }
}

/// Snapshot of the thrust keys held during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl Controls {
    pub const NONE: Controls = Controls {
        left: false,
        right: false,
        up: false,
    };

    pub const UP: Controls = Controls {
        left: false,
        right: false,
        up: true,
    };

    pub fn is_idle(&self) -> bool {
        !self.left && !self.right && !self.up
    }
}
