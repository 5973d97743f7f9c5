//! Statically typed entities for game engine.
//!
//! An [`Entity`] owns exactly one value of every component type it was declared
//! with and is addressed by component *type* rather than by index or name.
//! Every lookup is resolved by the trait solver, so asking for a component
//! which is absent (or declared twice) is rejected when the calling code is built.
//!
//! ```
//! use hyp_ecs::{entity, Component};
//!
//! #[derive(Component, Clone, Copy, Debug, PartialEq)]
//! struct Position(f32, f32);
//!
//! #[derive(Component, Clone, Copy, Debug, PartialEq)]
//! struct Velocity(f32, f32);
//!
//! let mut entity = entity![Position(0.0, 0.0), Velocity(2.0, 1.0)];
//! entity.set(Velocity(10.0, 10.0));
//! assert_eq!(entity.get::<Velocity, _>(), Velocity(10.0, 10.0));
//! assert_eq!(entity.get::<Position, _>(), Position(0.0, 0.0));
//! ```

extern crate self as hyp_ecs;

pub use component::Component;
pub use entity::Entity;
pub use hyp_macros::Component;
pub use select::{get_element, index_of, set_element, At, Select, SelectMany};
pub use set::{distinct, ComponentSet};

mod component;
mod entity;
mod select;
mod set;
