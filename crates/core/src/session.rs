//! Session module - the fixed-timestep simulation driver
//!
//! A [`Session`] owns every entity of a play session and advances it one
//! rendered frame at a time:
//!
//! 1. The frame's wall-clock time is fed into the [`FixedTimestep`] clock.
//! 2. For each tick that falls due, the held controls are applied to the
//!    lander and the lander is updated against the platforms.
//! 3. Overlays are synced from the lander's flags: win/lose messages and the
//!    fuel gauge tier.
//!
//! Reaching a platform does not stop the session; the lander stays under
//! control after the message shows.

use std::time::Duration;

use crate::clock::FixedTimestep;
use crate::draw::{DrawList, Sprite};
use crate::entity::Entity;
use crate::overlay::{FuelGauge, Messages};
use crate::scene::Scene;
use crate::types::{Controls, FuelTier, FIXED_TIMESTEP_SECS};

/// How the landing has gone so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Flying,
    Landed,
    Crashed,
}

impl Outcome {
    /// Win takes precedence, matching the message overlay.
    pub fn from_flags(win: bool, lose: bool) -> Self {
        if win {
            Outcome::Landed
        } else if lose {
            Outcome::Crashed
        } else {
            Outcome::Flying
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Flying => "flying",
            Outcome::Landed => "landed",
            Outcome::Crashed => "crashed",
        }
    }
}

/// Result of advancing one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub outcome: Outcome,
    pub fuel_tier: FuelTier,
}

#[derive(Debug, Clone)]
pub struct Session {
    player: Entity,
    platforms: Vec<Entity>,
    messages: Messages,
    fuel_gauge: FuelGauge,
    clock: FixedTimestep,
    /// Total simulation ticks run.
    ticks: u64,
    outcome: Outcome,
}

impl Session {
    /// A session on the lunar level.
    pub fn new() -> Self {
        Self::from_scene(Scene::lunar())
    }

    pub fn from_scene(scene: Scene) -> Self {
        Self {
            player: scene.player,
            platforms: scene.platforms,
            messages: scene.messages,
            fuel_gauge: scene.fuel_gauge,
            clock: FixedTimestep::new(),
            ticks: 0,
            outcome: Outcome::Flying,
        }
    }

    pub fn with_clock(mut self, clock: FixedTimestep) -> Self {
        self.clock = clock;
        self
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn platforms(&self) -> &[Entity] {
        &self.platforms
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn fuel_gauge(&self) -> &FuelGauge {
        &self.fuel_gauge
    }

    pub fn clock(&self) -> &FixedTimestep {
        &self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Advance by one rendered frame of `elapsed` wall-clock time.
    pub fn frame(&mut self, elapsed: Duration, controls: Controls) -> FrameReport {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.step(controls);
        }

        self.sync_overlays();

        FrameReport {
            ticks,
            outcome: self.outcome,
            fuel_tier: self.fuel_gauge.tier(),
        }
    }

    /// Run exactly one fixed tick.
    pub fn step(&mut self, controls: Controls) {
        self.player.apply_controls(controls);
        self.player.update(FIXED_TIMESTEP_SECS, &self.platforms);
        self.ticks += 1;
    }

    /// Derive overlay visibility from the lander's state.
    pub fn sync_overlays(&mut self) {
        if self.player.win() {
            self.messages.show_win();
        } else if self.player.lose() {
            self.messages.show_lose();
        }

        if let Some(tier) = self.fuel_gauge.observe(self.player.fuel()) {
            log::debug!(
                "fuel gauge -> {} (fuel={}, tick={})",
                tier.as_str(),
                self.player.fuel(),
                self.ticks
            );
        }

        let outcome = Outcome::from_flags(self.player.win(), self.player.lose());
        if outcome != self.outcome {
            let pos = self.player.position();
            log::info!(
                "lander {} at ({:.3}, {:.3}) after {} ticks",
                outcome.as_str(),
                pos.x,
                pos.y,
                self.ticks
            );
            self.outcome = outcome;
        }
    }

    /// Collect active entities in draw order into an existing list.
    ///
    /// Order: player, platforms, messages, fuel icons. Later sprites layer on top.
    pub fn draw_list_into(&self, out: &mut DrawList) {
        out.clear();

        let entities = std::iter::once(&self.player)
            .chain(self.platforms.iter())
            .chain(self.messages.iter())
            .chain(self.fuel_gauge.iter());

        for entity in entities.filter(|e| e.is_active()) {
            if out.try_push(Sprite::from_entity(entity)).is_err() {
                log::warn!("draw list full; dropping {}", entity.kind().as_str());
                break;
            }
        }
    }

    pub fn draw_list(&self) -> DrawList {
        let mut out = DrawList::new();
        self.draw_list_into(&mut out);
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
