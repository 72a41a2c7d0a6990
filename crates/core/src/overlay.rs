//! Overlay entities: the win/lose messages and the fuel gauge.
//!
//! Both are fixed sets of static entities whose only state is which member is
//! active. Members are named fields rather than array slots.

use crate::entity::Entity;
use crate::types::{EntityKind, FuelTier, Texture};

/// Win and lose message overlays. Once shown they stay shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    win: Entity,
    lose: Entity,
}

impl Messages {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            win: hidden(EntityKind::Message, Texture::WinMessage, x, y),
            lose: hidden(EntityKind::Message, Texture::LoseMessage, x, y),
        }
    }

    pub fn win(&self) -> &Entity {
        &self.win
    }

    pub fn lose(&self) -> &Entity {
        &self.lose
    }

    pub fn show_win(&mut self) {
        self.win.activate();
    }

    pub fn show_lose(&mut self) {
        self.lose.activate();
    }

    /// Draw order: win, lose.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        [&self.win, &self.lose].into_iter()
    }
}

/// Four-icon fuel gauge with exactly one icon active.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelGauge {
    full: Entity,
    half: Entity,
    low: Entity,
    empty: Entity,
    tier: FuelTier,
}

impl FuelGauge {
    pub fn new(x: f32, y: f32) -> Self {
        let mut full = hidden(EntityKind::Fuel, Texture::FullFuel, x, y);
        full.activate();
        Self {
            full,
            half: hidden(EntityKind::Fuel, Texture::HalfFuel, x, y),
            low: hidden(EntityKind::Fuel, Texture::LowFuel, x, y),
            empty: hidden(EntityKind::Fuel, Texture::NoFuel, x, y),
            tier: FuelTier::Full,
        }
    }

    pub fn tier(&self) -> FuelTier {
        self.tier
    }

    pub fn icon(&self, tier: FuelTier) -> &Entity {
        match tier {
            FuelTier::Full => &self.full,
            FuelTier::Half => &self.half,
            FuelTier::Low => &self.low,
            FuelTier::Empty => &self.empty,
        }
    }

    fn icon_mut(&mut self, tier: FuelTier) -> &mut Entity {
        match tier {
            FuelTier::Full => &mut self.full,
            FuelTier::Half => &mut self.half,
            FuelTier::Low => &mut self.low,
            FuelTier::Empty => &mut self.empty,
        }
    }

    /// Fold a fuel reading into the gauge.
    ///
    /// The gauge only ever moves down. Returns the new tier when it changed.
    pub fn observe(&mut self, fuel: i32) -> Option<FuelTier> {
        let next = self.tier.min(FuelTier::from_fuel(fuel));
        if next == self.tier {
            return None;
        }

        self.icon_mut(self.tier).deactivate();
        self.tier = next;
        self.icon_mut(next).activate();
        Some(next)
    }

    /// Draw order: full, half, low, empty.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        [&self.full, &self.half, &self.low, &self.empty].into_iter()
    }
}

fn hidden(kind: EntityKind, texture: Texture, x: f32, y: f32) -> Entity {
    let mut e = Entity::new(kind, texture).with_position(x, y);
    e.update(0.0, &[]);
    e.deactivate();
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_icons(gauge: &FuelGauge) -> Vec<Texture> {
        gauge
            .iter()
            .filter(|e| e.is_active())
            .map(Entity::texture)
            .collect()
    }

    #[test]
    fn messages_start_hidden_and_stay_shown() {
        let mut m = Messages::new(0.0, 0.0);
        assert!(!m.win().is_active());
        assert!(!m.lose().is_active());
        m.show_win();
        m.show_win();
        assert!(m.win().is_active());
        assert!(!m.lose().is_active());
    }

    #[test]
    fn gauge_starts_full_with_one_icon() {
        let gauge = FuelGauge::new(-3.5, 2.0);
        assert_eq!(gauge.tier(), FuelTier::Full);
        assert_eq!(active_icons(&gauge), vec![Texture::FullFuel]);
        assert_eq!(gauge.icon(FuelTier::Low).position().x, -3.5);
    }

    #[test]
    fn gauge_steps_down_and_keeps_one_icon() {
        let mut gauge = FuelGauge::new(0.0, 0.0);
        assert_eq!(gauge.observe(800), None);
        assert_eq!(gauge.observe(749), Some(FuelTier::Half));
        assert_eq!(active_icons(&gauge), vec![Texture::HalfFuel]);
        assert_eq!(gauge.observe(-5), Some(FuelTier::Empty));
        assert_eq!(active_icons(&gauge), vec![Texture::NoFuel]);
    }

    #[test]
    fn gauge_never_rises() {
        let mut gauge = FuelGauge::new(0.0, 0.0);
        gauge.observe(100);
        assert_eq!(gauge.tier(), FuelTier::Low);
        assert_eq!(gauge.observe(1000), None);
        assert_eq!(gauge.tier(), FuelTier::Low);
        assert_eq!(active_icons(&gauge), vec![Texture::LowFuel]);
    }
}
