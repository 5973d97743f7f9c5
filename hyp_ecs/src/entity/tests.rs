#![cfg(test)]

use crate::{distinct, entity, Component, ComponentSet, Entity, Select};

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
struct Health {
    max: i32,
    current: i32,
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
#[component(transparent)]
struct Name(String);

fn position(x: f32, y: f32) -> Position {
    Position { x, y }
}

fn velocity(x: f32, y: f32) -> Velocity {
    Velocity { x, y }
}

fn position_x<T, I>(entity: &Entity<T>) -> f32
where
    T: Select<Position, I>,
{
    entity.get::<Position, _>().x
}

#[test]
fn test_round_trip() {
    let entity = entity![
        position(0.0, 0.0),
        velocity(2.0, 1.0),
        Health {
            max: 100,
            current: 100
        },
    ];
    assert_eq!(entity.get::<Position, _>(), position(0.0, 0.0));
    assert_eq!(entity.get::<Velocity, _>(), velocity(2.0, 1.0));
    assert_eq!(
        entity.get::<Health, _>(),
        Health {
            max: 100,
            current: 100
        },
    );
}

#[test]
fn test_set_is_isolated() {
    let mut entity = entity![position(0.0, 0.0), velocity(2.0, 1.0)];

    entity.set(velocity(10.0, 10.0));
    assert_eq!(entity.get::<Velocity, _>(), velocity(10.0, 10.0));
    assert_eq!(entity.get::<Position, _>(), position(0.0, 0.0));

    entity.set(position(-1.0, 3.0));
    assert_eq!(entity.get::<Position, _>(), position(-1.0, 3.0));
    assert_eq!(entity.get::<Velocity, _>(), velocity(10.0, 10.0));
}

#[test]
fn test_get_returns_copy() {
    let entity = entity![Health {
        max: 100,
        current: 100
    }];
    let mut health = entity.get::<Health, _>();
    health.current -= 10;

    assert_eq!(health.current, 90);
    assert_eq!(entity.get::<Health, _>().current, 100);
}

#[test]
fn test_get_many_is_order_independent() {
    let forward = entity![position(1.0, 2.0), velocity(3.0, 4.0)];
    let backward = entity![velocity(3.0, 4.0), position(1.0, 2.0)];

    let expected = (forward.get::<Position, _>(), forward.get::<Velocity, _>());
    assert_eq!(forward.get_many::<(Position, Velocity), _>(), expected);
    assert_eq!(backward.get_many::<(Position, Velocity), _>(), expected);
    assert_eq!(
        backward.get_many::<(Velocity, Position), _>(),
        (expected.1, expected.0),
    );
}

#[test]
fn test_set_many() {
    let mut entity = entity![position(0.0, 0.0), velocity(2.0, 1.0), 7_u32];

    entity.set_many((velocity(22.0, 22.0), position(244.0, 44.0)));
    assert_eq!(
        entity.get_many::<(Position, Velocity), _>(),
        (position(244.0, 44.0), velocity(22.0, 22.0)),
    );
    assert_eq!(entity.get::<u32, _>(), 7);
}

#[test]
fn test_set_many_last_write_wins() {
    let mut entity = entity![position(0.0, 0.0), velocity(2.0, 1.0)];

    entity.set_many((velocity(1.0, 1.0), position(5.0, 5.0), velocity(9.0, 9.0)));
    assert_eq!(entity.get::<Velocity, _>(), velocity(9.0, 9.0));
    assert_eq!(entity.get::<Position, _>(), position(5.0, 5.0));
}

#[test]
fn test_get_many_repeated_type() {
    let entity = entity![position(1.0, 1.0), velocity(2.0, 2.0)];
    let (first, second) = entity.get_many::<(Position, Position), _>();
    assert_eq!(first, second);
}

#[test]
fn test_scenario() {
    let mut entity = entity![position(0.0, 0.0), velocity(2.0, 1.0)];

    entity.set(velocity(10.0, 10.0));
    assert_eq!(entity.get::<Velocity, _>(), velocity(10.0, 10.0));
    assert_eq!(entity.get::<Position, _>(), position(0.0, 0.0));

    entity.set_many((velocity(22.0, 22.0), position(244.0, 44.0)));
    let (position, velocity) = entity.get_many::<(Position, Velocity), _>();
    assert_eq!((position.x, position.y), (244.0, 44.0));
    assert_eq!((velocity.x, velocity.y), (22.0, 22.0));
}

#[test]
fn test_index_of() {
    type Set = (Position, Velocity, Health, Name);
    assert_eq!(Entity::<Set>::index_of::<Position, _>(), 0);
    assert_eq!(Entity::<Set>::index_of::<Velocity, _>(), 1);
    assert_eq!(Entity::<Set>::index_of::<Health, _>(), 2);
    assert_eq!(Entity::<Set>::index_of::<Name, _>(), 3);
}

#[test]
fn test_replace() {
    let mut entity = entity![Name::from("foo".to_string()), 1_i64];

    let prev = entity.replace(Name::from("bar".to_string()));
    assert_eq!(*prev, "foo");
    assert_eq!(*entity.get::<Name, _>(), "bar");
    assert_eq!(entity.replace(2_i64), 1);
    assert_eq!(entity.get::<i64, _>(), 2);
}

#[test]
fn test_components() {
    let entity = entity![position(1.0, 2.0), 'x'];

    let (position, letter) = entity.components();
    assert_eq!(position.y, 2.0);
    assert_eq!(*letter, 'x');

    let (position, letter) = entity.into_components();
    assert_eq!(position.x, 1.0);
    assert_eq!(letter, 'x');
}

#[test]
fn test_component_names() {
    let names = Entity::<(Position, u8, Health)>::component_names();
    assert_eq!(names.len(), 3);
    assert!(names[0].contains("::Position @ "));
    assert_eq!(names[1], "u8");
    assert!(names[2].contains("::Health @ "));
}

#[test]
fn test_repeated_declaration_is_not_distinct() {
    assert!(distinct(<(Position, Velocity)>::NAMES));
    assert!(!distinct(<(Position, Velocity, Position)>::NAMES));
}

#[test]
fn test_empty_entity() {
    let empty = entity![];
    assert_eq!(empty, Entity::<()>::default());
    assert!(Entity::<()>::component_names().is_empty());
}

#[test]
fn test_from_and_default() {
    let entity = Entity::from((position(3.0, 4.0), 5_u8));
    assert_eq!(entity.get::<u8, _>(), 5);

    let entity = Entity::<(Position, Health)>::default();
    assert_eq!(entity.get::<Position, _>(), Position::default());
    assert_eq!(entity.get::<Health, _>(), Health::default());
}

#[test]
fn test_clone_is_independent() {
    let mut original = entity![position(0.0, 0.0), Name::from("a".to_string())];
    let copy = original.clone();

    original.set(position(8.0, 8.0));
    assert_eq!(copy.get::<Position, _>(), position(0.0, 0.0));
    assert_eq!(copy, entity![position(0.0, 0.0), Name::from("a".to_string())]);
}

#[test]
fn test_generic_accessor() {
    let small = entity![position(3.0, 0.0)];
    let large = entity![
        Health {
            max: 1,
            current: 1
        },
        velocity(0.0, 0.0),
        position(-5.0, 0.0),
    ];
    assert_eq!(position_x(&small), 3.0);
    assert_eq!(position_x(&large), -5.0);
}
