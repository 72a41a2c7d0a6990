//! Session scenarios driven through the public API.

use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use crossterm::event::KeyCode;

use tui_lander::core::scene::{lander, platform, ASTEROID_HALF_EXTENT};
use tui_lander::core::{Outcome, Scene, Session, FIXED_TIMESTEP};
use tui_lander::input::InputHandler;
use tui_lander::types::{
    Controls, EntityKind, FuelTier, Texture, DEFAULT_HALF_EXTENT, STARTING_FUEL,
};

fn pad_session(kind: EntityKind) -> Session {
    let texture = match kind {
        EntityKind::WinPlatform => Texture::Platform,
        _ => Texture::Asteroid,
    };
    let player = lander().with_position(0.0, 0.0);
    let pad = platform(kind, texture, 0.0, -1.5);
    Session::from_scene(Scene::new(player, vec![pad]))
}

#[test]
fn test_holding_up_for_400_ticks_burns_400_fuel() {
    let mut session = Session::new();

    let report = session.frame(FIXED_TIMESTEP * 400, Controls::UP);
    assert_eq!(report.ticks, 400);
    assert_eq!(session.player().fuel(), STARTING_FUEL - 400);
    assert_eq!(report.fuel_tier, FuelTier::Half);
    assert!(session.player().velocity().y > 0.0, "thrust beats lunar gravity");
}

#[test]
fn test_fuel_gauge_changes_on_the_tick_fuel_drops_below_750() {
    let mut session = Session::new();

    session.frame(FIXED_TIMESTEP * 250, Controls::UP);
    assert_eq!(session.player().fuel(), 750);
    assert_eq!(session.fuel_gauge().tier(), FuelTier::Full);

    let report = session.frame(FIXED_TIMESTEP, Controls::UP);
    assert_eq!(session.player().fuel(), 749);
    assert_eq!(report.fuel_tier, FuelTier::Half);
}

#[test]
fn test_dry_tank_keeps_burning_but_stops_thrust() {
    let mut session = Session::new();

    session.frame(FIXED_TIMESTEP * 1001, Controls::UP);
    assert_eq!(session.player().fuel(), -1);
    assert!(session.player().is_boosting(), "a held key still counts as boosting");
    assert_eq!(session.fuel_gauge().tier(), FuelTier::Empty);

    // Without thrust the lander only falls.
    let vy_before = session.player().velocity().y;
    session.frame(FIXED_TIMESTEP * 10, Controls::UP);
    assert_eq!(session.player().fuel(), -11);
    assert!(session.player().velocity().y < vy_before);

    let fuel_icons: Vec<Texture> = session
        .draw_list()
        .iter()
        .filter(|s| s.kind == EntityKind::Fuel)
        .map(|s| s.texture)
        .collect();
    assert_eq!(fuel_icons, vec![Texture::NoFuel]);
}

#[test]
fn test_free_fall_onto_win_pad_lands() {
    let mut session = pad_session(EntityKind::WinPlatform);

    let report = session.frame(FIXED_TIMESTEP * 300, Controls::NONE);
    assert_eq!(report.outcome, Outcome::Landed);

    let p = session.player();
    assert!(p.win());
    assert!(!p.lose());
    assert_relative_eq!(p.position().y, -0.75);
    assert_relative_eq!(p.velocity().y, 0.0);
    assert!(session.messages().win().is_active());
    assert!(!session.messages().lose().is_active());

    // Resting on the pad keeps the outcome; the simulation keeps running.
    let report = session.frame(FIXED_TIMESTEP * 60, Controls::NONE);
    assert_eq!(report.ticks, 60);
    assert_eq!(report.outcome, Outcome::Landed);
    assert_relative_eq!(session.player().position().y, -0.75);
}

#[test]
fn test_free_fall_onto_asteroid_crashes() {
    let mut session = pad_session(EntityKind::LosePlatform);

    let report = session.frame(FIXED_TIMESTEP * 300, Controls::NONE);
    assert_eq!(report.outcome, Outcome::Crashed);
    assert!(session.player().lose());
    assert!(session.messages().lose().is_active());
    assert!(!session.messages().win().is_active());
}

#[test]
fn test_win_is_never_cleared_by_flying_away() {
    let mut session = pad_session(EntityKind::WinPlatform);
    session.frame(FIXED_TIMESTEP * 300, Controls::NONE);

    session.frame(FIXED_TIMESTEP * 200, Controls::UP);
    assert!(session.player().position().y > -0.75);
    assert!(session.player().win());
    assert_eq!(session.outcome(), Outcome::Landed);
}

#[test]
fn test_tick_count_is_independent_of_frame_pacing() {
    let total = FIXED_TIMESTEP * 100 + Duration::from_millis(5);

    let mut one_frame = Session::new();
    one_frame.frame(total, Controls::UP);

    let mut small_frames = Session::new();
    let mut remaining = total;
    while !remaining.is_zero() {
        let d = remaining.min(Duration::from_millis(7));
        small_frames.frame(d, Controls::UP);
        remaining -= d;
    }

    assert_eq!(one_frame.ticks(), 100);
    assert_eq!(small_frames.ticks(), 100);
    assert_eq!(one_frame.player(), small_frames.player());
    assert_eq!(
        one_frame.clock().accumulator(),
        small_frames.clock().accumulator()
    );
}

#[test]
fn test_draw_list_order_on_the_lunar_level() {
    let session = Session::new();
    let sprites = session.draw_list();

    let kinds: Vec<EntityKind> = sprites.iter().map(|s| s.kind).collect();
    let mut expected = vec![EntityKind::Player];
    expected.extend([EntityKind::WinPlatform; 3]);
    expected.extend([EntityKind::LosePlatform; 9]);
    expected.push(EntityKind::Fuel);
    assert_eq!(kinds, expected);

    // Asteroids are smaller than landing pads.
    assert!(ASTEROID_HALF_EXTENT < DEFAULT_HALF_EXTENT);
}

#[test]
fn test_message_draws_between_platforms_and_fuel() {
    let mut session = pad_session(EntityKind::WinPlatform);
    session.frame(FIXED_TIMESTEP * 300, Controls::NONE);

    let textures: Vec<Texture> = session.draw_list().iter().map(|s| s.texture).collect();
    assert_eq!(
        textures,
        vec![
            Texture::Spritesheet,
            Texture::Platform,
            Texture::WinMessage,
            Texture::FullFuel,
        ]
    );
}

#[test]
fn test_held_keys_drive_the_session() {
    let mut input = InputHandler::new().with_key_release_timeout_ms(100);
    let mut session = Session::new();
    let t0 = Instant::now();

    input.handle_key_press_at(KeyCode::Up, t0);
    input.handle_key_press_at(KeyCode::Left, t0);
    session.frame(FIXED_TIMESTEP * 3, input.controls_at(t0));
    assert_eq!(session.player().fuel(), STARTING_FUEL - 6);
    assert!(session.player().velocity().x < 0.0);

    // After the timeout nothing is held any more.
    let later = t0 + Duration::from_millis(200);
    session.frame(FIXED_TIMESTEP * 3, input.controls_at(later));
    assert_eq!(session.player().fuel(), STARTING_FUEL - 6);
}
