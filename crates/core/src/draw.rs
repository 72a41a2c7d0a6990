//! Draw list handed from the simulation to a renderer.
//!
//! Each active entity becomes one [`Sprite`]: its texture, model transform
//! and sprite-sheet frame. The list has a fixed capacity so building it never
//! allocates.

use arrayvec::ArrayVec;

use crate::animation::SpriteSheet;
use crate::entity::{Entity, Mat4};
use crate::types::{EntityKind, Texture, NUMBER_OF_PLATFORMS};

/// Player + platforms + two messages + four fuel icons
pub const MAX_SPRITES: usize = 1 + NUMBER_OF_PLATFORMS + 2 + 4;

pub type DrawList = ArrayVec<Sprite, MAX_SPRITES>;

/// What the sprite drawer needs to draw one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: EntityKind,
    pub texture: Texture,
    pub model: Mat4,
    pub frame: Option<usize>,
    pub sheet: Option<SpriteSheet>,
}

impl Sprite {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            kind: entity.kind(),
            texture: entity.texture(),
            model: *entity.model(),
            frame: entity.frame(),
            sheet: entity.animation().map(|a| a.sheet()),
        }
    }

    /// World-space centre of the sprite's quad.
    pub fn center(&self) -> (f32, f32) {
        (self.model[(0, 3)], self.model[(1, 3)])
    }
}
