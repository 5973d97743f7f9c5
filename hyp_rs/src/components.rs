//! Components used by the demo entities.

use hyp_ecs::Component;
use ultraviolet::Vec2;

/// Position of the entity in world space.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
#[component(transparent)]
pub struct Position(pub Vec2);

/// Movement speed of the entity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
#[component(transparent)]
pub struct Velocity(pub Vec2);

/// Position and velocity kept together.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Physics {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Health {
    pub max: i32,
    pub current: i32,
}

impl Health {
    pub const fn full(max: i32) -> Self {
        Self { max, current: max }
    }
}
