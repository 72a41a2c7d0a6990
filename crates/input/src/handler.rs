//! Held-key tracking for terminal environments.
//!
//! Terminals only report key presses (and auto-repeat) unless the keyboard
//! enhancement protocol is active. A press marks its direction as held; a
//! release event clears it. Until the first release event is seen, a key is
//! considered held for a short timeout after its latest press or repeat.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, map_key};
use crate::types::{Controls, Direction};

// Long enough to bridge the gap between a press and the terminal's first
// auto-repeat on most setups.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 300;

/// Tracks which thrust keys are held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Latest press per direction, indexed by [`Direction::index`].
    held: [Option<Instant>; 3],
    /// Set once the terminal reports a release; timeouts are then unused.
    releases_seen: bool,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [None; 3],
            releases_seen: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn releases_seen(&self) -> bool {
        self.releases_seen
    }

    /// Feed one key event. Returns the direction it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Direction> {
        let dir = handle_key_event(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press_at(dir, Instant::now()),
            KeyEventKind::Release => self.release(dir),
        }
        Some(dir)
    }

    pub fn handle_key_press_at(&mut self, code: KeyCode, now: Instant) -> Option<Direction> {
        let dir = map_key(code)?;
        self.press_at(dir, now);
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = map_key(code) {
            self.release(dir);
        }
    }

    /// Snapshot of the keys held at `now`.
    pub fn controls_at(&self, now: Instant) -> Controls {
        Controls {
            left: self.is_held(Direction::Left, now),
            right: self.is_held(Direction::Right, now),
            up: self.is_held(Direction::Up, now),
        }
    }

    pub fn is_held(&self, dir: Direction, now: Instant) -> bool {
        match self.held[dir.index()] {
            None => false,
            Some(_) if self.releases_seen => true,
            Some(at) => {
                now.saturating_duration_since(at)
                    <= Duration::from_millis(self.key_release_timeout_ms as u64)
            }
        }
    }

    pub fn reset(&mut self) {
        self.held = [None; 3];
    }

    fn press_at(&mut self, dir: Direction, now: Instant) {
        self.held[dir.index()] = Some(now);
    }

    fn release(&mut self, dir: Direction) {
        if !self.releases_seen {
            log::debug!("terminal reports key releases; held-key timeout disabled");
            self.releases_seen = true;
        }
        self.held[dir.index()] = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
