//! Scene setup - the fixed lunar level.
//!
//! Builds every entity of a session once. Static entities get a zero-length
//! warm-up update so their model transforms match their positions.

use crate::animation::{Animation, FrameTable, SpriteSheet};
use crate::entity::{Entity, Vec3};
use crate::overlay::{FuelGauge, Messages};
use crate::types::{
    Direction, EntityKind, Texture, GRAVITY, GRAVITY_SCALE, NUMBER_OF_PLATFORMS,
    WIN_PLATFORM_COUNT,
};

/// Lander start position
pub const PLAYER_START: (f32, f32) = (0.0, 3.5);

/// Lander sprite-sheet frames: left, right, up
pub const PLAYER_FRAMES: FrameTable = [[2, 3], [0, 1], [4, 5]];

/// Lander sprite-sheet layout
pub const PLAYER_SHEET: SpriteSheet = SpriteSheet { cols: 6, rows: 1 };

/// Asteroid collision half-extent
pub const ASTEROID_HALF_EXTENT: f32 = 0.25;

/// Asteroid centres, in construction order
pub const ASTEROID_POSITIONS: [(f32, f32); NUMBER_OF_PLATFORMS - WIN_PLATFORM_COUNT] = [
    (-4.0, 0.0),
    (-3.0, 1.0),
    (-3.0, -3.0),
    (-2.0, 3.0),
    (-0.5, -2.5),
    (0.0, 0.0),
    (2.0, 0.5),
    (3.0, 2.0),
    (4.0, -2.0),
];

/// Fuel gauge position
pub const FUEL_GAUGE_POSITION: (f32, f32) = (-3.5, 2.0);

/// Everything a session is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub player: Entity,
    pub platforms: Vec<Entity>,
    pub messages: Messages,
    pub fuel_gauge: FuelGauge,
}

impl Scene {
    /// A scene with custom player and platforms and the standard overlays.
    pub fn new(player: Entity, platforms: Vec<Entity>) -> Self {
        Self {
            player,
            platforms,
            messages: Messages::new(0.0, 0.0),
            fuel_gauge: FuelGauge::new(FUEL_GAUGE_POSITION.0, FUEL_GAUGE_POSITION.1),
        }
    }

    /// The lunar landing level.
    pub fn lunar() -> Self {
        let mut platforms = Vec::with_capacity(NUMBER_OF_PLATFORMS);

        for i in 0..WIN_PLATFORM_COUNT {
            platforms.push(platform(
                EntityKind::WinPlatform,
                Texture::Platform,
                i as f32 + 1.75,
                -3.75,
            ));
        }

        for &(x, y) in ASTEROID_POSITIONS.iter() {
            platforms.push(
                platform(EntityKind::LosePlatform, Texture::Asteroid, x, y)
                    .with_size(ASTEROID_HALF_EXTENT, ASTEROID_HALF_EXTENT),
            );
        }

        Self::new(lander(), platforms)
    }
}

/// The player's lander at its start position.
pub fn lander() -> Entity {
    let animation =
        Animation::new(PLAYER_FRAMES, PLAYER_SHEET).with_direction(Direction::Up);

    Entity::new(EntityKind::Player, Texture::Spritesheet)
        .with_position(PLAYER_START.0, PLAYER_START.1)
        .with_acceleration(Vec3::new(0.0, GRAVITY * GRAVITY_SCALE, 0.0))
        .with_speed(1.0)
        .with_animation(animation)
}

/// A static platform with its transform initialised.
pub fn platform(kind: EntityKind, texture: Texture, x: f32, y: f32) -> Entity {
    let mut e = Entity::new(kind, texture).with_position(x, y);
    e.update(0.0, &[]);
    e
}
