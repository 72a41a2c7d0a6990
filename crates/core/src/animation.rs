//! Sprite-sheet animation state.
//!
//! Animation is purely cosmetic: it selects which cell of a sprite sheet an
//! entity is drawn with and never feeds back into the simulation.

use crate::types::{Direction, SECONDS_PER_FRAME};

/// Frames in each direction's cycle
pub const FRAMES_PER_DIRECTION: usize = 2;

/// Per-direction frame table, indexed by [`Direction::index`]
pub type FrameTable = [[usize; FRAMES_PER_DIRECTION]; 3];

/// Grid layout of a sprite sheet image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteSheet {
    pub cols: u16,
    pub rows: u16,
}

impl SpriteSheet {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Column and row of a frame index (row-major).
    pub fn cell(&self, index: usize) -> (u16, u16) {
        let cols = self.cols as usize;
        ((index % cols) as u16, (index / cols) as u16)
    }
}

/// Current animation cycle of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    table: FrameTable,
    sheet: SpriteSheet,
    direction: Direction,
    index: usize,
    time: f32,
}

impl Animation {
    pub fn new(table: FrameTable, sheet: SpriteSheet) -> Self {
        Self {
            table,
            sheet,
            direction: Direction::Up,
            index: 0,
            time: 0.0,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Switch the cycle being played. The position within the cycle is kept.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn sheet(&self) -> SpriteSheet {
        self.sheet
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Sprite-sheet frame currently shown.
    pub fn frame(&self) -> usize {
        self.table[self.direction.index()][self.index]
    }

    pub fn advance(&mut self, delta_time: f32) {
        self.time += delta_time;
        if self.time >= SECONDS_PER_FRAME {
            self.time = 0.0;
            self.index = (self.index + 1) % FRAMES_PER_DIRECTION;
        }
    }
}
