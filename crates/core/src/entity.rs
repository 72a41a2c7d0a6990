//! Entity module - kinematic state, AABB collision and lander controls
//!
//! Every object in a session is an [`Entity`]: the lander, the platforms,
//! the message overlays and the fuel icons. Only the lander ever moves; the
//! rest are static collision targets or overlays toggled by the session.
//!
//! Collision is resolved one axis at a time. The vertical move is applied and
//! resolved first, then the horizontal one, so a single contact never pushes
//! the lander diagonally.

use nalgebra::{Matrix4, Vector3};

use crate::animation::Animation;
use crate::types::{
    Controls, Direction, EntityKind, Texture, BOOST_SIDE_DELTA_A, BOOST_UP_DELTA_V,
    DEFAULT_HALF_EXTENT, STARTING_FUEL,
};

pub type Vec3 = Vector3<f32>;
pub type Mat4 = Matrix4<f32>;

/// A single object in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    texture: Texture,
    is_active: bool,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    movement: Vec3,
    speed: f32,
    /// Collision half-extents.
    width: f32,
    height: f32,
    model: Mat4,
    animation: Option<Animation>,
    is_boosting: bool,
    fuel: i32,
    win: bool,
    lose: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, texture: Texture) -> Self {
        Self {
            kind,
            texture,
            is_active: true,
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            movement: Vec3::zeros(),
            speed: 1.0,
            width: DEFAULT_HALF_EXTENT,
            height: DEFAULT_HALF_EXTENT,
            model: Mat4::identity(),
            animation: None,
            is_boosting: false,
            fuel: STARTING_FUEL,
            win: false,
            lose: false,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec3::new(x, y, 0.0);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_size(width, height);
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn texture(&self) -> Texture {
        self.texture
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    pub fn movement(&self) -> Vec3 {
        self.movement
    }

    /// Set the input-driven offset direction. Longer than unit length is normalised.
    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = if movement.norm() > 1.0 {
            movement.normalize()
        } else {
            movement
        };
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0, "half-extents must be positive");
        self.width = width;
        self.height = height;
    }

    pub fn model(&self) -> &Mat4 {
        &self.model
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Sprite-sheet frame to draw, if the entity is animated.
    pub fn frame(&self) -> Option<usize> {
        self.animation.as_ref().map(Animation::frame)
    }

    pub fn is_boosting(&self) -> bool {
        self.is_boosting
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn win(&self) -> bool {
        self.win
    }

    pub fn lose(&self) -> bool {
        self.lose
    }

    pub fn boost_up(&mut self) {
        self.velocity.y += BOOST_UP_DELTA_V;
    }

    pub fn boost_left(&mut self) {
        self.acceleration.x -= BOOST_SIDE_DELTA_A;
    }

    pub fn boost_right(&mut self) {
        self.acceleration.x += BOOST_SIDE_DELTA_A;
    }

    /// Apply one tick's worth of held thrust keys.
    ///
    /// Each held key burns one unit of fuel even when the tank is dry; thrust
    /// itself only fires while fuel stays positive. Left and right are
    /// exclusive (left wins), up combines with either.
    pub fn apply_controls(&mut self, controls: Controls) {
        self.movement = Vec3::zeros();
        self.is_boosting = false;

        if controls.left {
            self.burn(Direction::Left);
            if self.fuel > 0 {
                self.boost_left();
            }
        } else if controls.right {
            self.burn(Direction::Right);
            if self.fuel > 0 {
                self.boost_right();
            }
        }

        if controls.up {
            self.burn(Direction::Up);
            if self.fuel > 0 {
                self.boost_up();
            }
        }
    }

    fn burn(&mut self, direction: Direction) {
        self.is_boosting = true;
        self.fuel -= 1;
        if let Some(animation) = self.animation.as_mut() {
            animation.set_direction(direction);
        }
    }

    /// Advance the entity by one step against a set of static collidables.
    pub fn update(&mut self, delta_time: f32, collidables: &[Entity]) {
        if !self.is_active {
            return;
        }

        self.velocity += self.acceleration * delta_time;
        let drift = self.movement * self.speed * delta_time;

        self.position.y += self.velocity.y * delta_time + drift.y;
        self.check_collision_y(collidables);

        self.position.x += self.velocity.x * delta_time + drift.x;
        self.check_collision_x(collidables);

        if self.is_boosting {
            if let Some(animation) = self.animation.as_mut() {
                animation.advance(delta_time);
            }
        }

        self.model = Mat4::new_translation(&self.position);
    }

    /// AABB overlap test between two active entities (edge contact is not overlap).
    pub fn check_collision(&self, other: &Entity) -> bool {
        if !self.is_active || !other.is_active {
            return false;
        }

        let x_distance = (self.position.x - other.position.x).abs() - (self.width + other.width);
        let y_distance =
            (self.position.y - other.position.y).abs() - (self.height + other.height);

        x_distance < 0.0 && y_distance < 0.0
    }

    /// Resolve vertical penetration and record landings.
    pub fn check_collision_y(&mut self, collidables: &[Entity]) {
        for other in collidables {
            if !self.check_collision(other) {
                continue;
            }

            let reach = self.height + other.height;
            self.position.y = if self.position.y >= other.position.y {
                other.position.y + reach
            } else {
                other.position.y - reach
            };
            self.velocity.y = 0.0;

            if self.kind == EntityKind::Player {
                match other.kind {
                    EntityKind::WinPlatform => self.win = true,
                    EntityKind::LosePlatform => self.lose = true,
                    _ => {}
                }
            }
        }
    }

    /// Resolve horizontal penetration. Side contact never wins or loses.
    pub fn check_collision_x(&mut self, collidables: &[Entity]) {
        for other in collidables {
            if !self.check_collision(other) {
                continue;
            }

            let reach = self.width + other.width;
            self.position.x = if self.position.x >= other.position.x {
                other.position.x + reach
            } else {
                other.position.x - reach
            };
            self.velocity.x = 0.0;
        }
    }
}
