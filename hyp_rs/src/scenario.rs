//! Scenarios which exercise entities of the demo.

use hyp_ecs::{entity, get_element, set_element, Entity, Select};
use ultraviolet::Vec2;

use crate::components::{Health, Physics, Position, Velocity};

pub type Body = Entity<(Position, Velocity)>;
pub type Creature = Entity<(Physics, Health)>;

/// Reads `x` coordinate of any entity which has [`Physics`] component.
pub fn position_x<T, I>(entity: &Entity<T>) -> f32
where
    T: Select<Physics, I>,
{
    entity.get::<Physics, _>().position.x
}

/// Changes velocity of the body, then moves it and changes velocity again in one batch.
pub fn motion() -> Body {
    let mut body = entity![
        Position(Vec2::new(0.0, 0.0)),
        Velocity(Vec2::new(2.0, 1.0)),
    ];
    body.set(Velocity(Vec2::new(10.0, 10.0)));
    log::debug!(
        "velocity changed to {:?}, position is still {:?}",
        *body.get::<Velocity, _>(),
        *body.get::<Position, _>(),
    );

    body.set_many((
        Velocity(Vec2::new(22.0, 22.0)),
        Position(Vec2::new(244.0, 44.0)),
    ));
    let (position, velocity) = body.get_many::<(Position, Velocity), _>();
    log::info!("body moved to {:?} with velocity {:?}", *position, *velocity);
    body
}

/// Accelerates the creature, then damages it, writing back both components at once.
pub fn damage() -> Creature {
    let mut creature = entity![
        Physics {
            position: Vec2::new(0.0, 0.0),
            velocity: Vec2::new(10.0, 10.0),
        },
        Health::full(100),
    ];
    let mut physics = creature.get::<Physics, _>();
    physics.velocity = Vec2::new(32.0, 32.0);
    creature.set(physics);
    log::debug!("creature is at x = {}", position_x(&creature));

    let (physics, mut health) = creature.get_many::<(Physics, Health), _>();
    health.current -= 10;
    creature.set_many((physics, health));

    let (physics, health) = creature.get_many::<(Physics, Health), _>();
    log::info!(
        "creature at x = {} with velocity x = {} has {} of {} health",
        physics.position.x,
        physics.velocity.x,
        health.current,
        health.max,
    );
    creature
}

/// Works with a bare tuple of components, applying another tuple element by element.
pub fn raw_tuple() -> (Position, Velocity) {
    let tuple = (
        Position(Vec2::new(0.0, 0.0)),
        Velocity(Vec2::new(2.0, 1.0)),
    );
    let tuple = set_element(tuple, Velocity(Vec2::new(10.0, 10.0)));
    log::debug!("tuple velocity is {:?}", *get_element::<Velocity, _, _>(&tuple));

    let (position, velocity) = (
        Position(Vec2::new(30.0, 30.0)),
        Velocity(Vec2::new(-40.0, -40.0)),
    );
    let tuple = set_element(set_element(tuple, position), velocity);
    log::info!("tuple is {:?}", tuple);
    tuple
}
