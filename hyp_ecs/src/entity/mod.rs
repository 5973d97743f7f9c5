//! Utilities for *entities* made of statically typed components.

use std::mem;

use crate::{Component, ComponentSet, Select, SelectMany};

mod tests;

/// Entity which owns exactly one component of each type of the set `T`.
///
/// Components are accessed by their type. Position of the component is
/// resolved at compile time, so accessing an entity costs as much as accessing
/// a field of the underlying tuple. Index parameter (`I`) of accessors
/// is always inferred and should be passed as `_`.
///
/// # Examples
///
/// ```
/// use hyp_ecs::{entity, Component};
///
/// #[derive(Component, Clone, Debug, PartialEq)]
/// struct Health {
///     max: i32,
///     current: i32,
/// }
///
/// let mut entity = entity![Health { max: 100, current: 100 }, 'x'];
/// let mut health = entity.get::<Health, _>();
/// health.current -= 10;
/// entity.set(health);
///
/// assert_eq!(entity.get::<Health, _>().current, 90);
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Entity<T>
where
    T: ComponentSet,
{
    components: T,
}

impl<T> Entity<T>
where
    T: ComponentSet,
{
    /// Creates new entity with initial value of every component.
    ///
    /// Entity type which contains the same component type more than once
    /// is rejected when this function is instantiated for it:
    ///
    /// ```compile_fail
    /// use hyp_ecs::Entity;
    ///
    /// let entity = Entity::new((1_i32, 2.0_f32, 3_i32));
    /// ```
    ///
    /// Every declared component must be given, with its exact type:
    ///
    /// ```compile_fail
    /// use hyp_ecs::Entity;
    ///
    /// let entity: Entity<(u8, char)> = Entity::new((1_u8,));
    /// ```
    ///
    /// ```compile_fail
    /// use hyp_ecs::Entity;
    ///
    /// let entity: Entity<(u8, char)> = Entity::new((1_u16, 'c'));
    /// ```
    ///
    pub fn new(components: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = T::DISTINCT;
        log::trace!(target: "hyp_ecs::entity", "created entity of {:?}", T::NAMES);
        Self { components }
    }

    /// Returns names of all component types in declaration order.
    pub fn component_names() -> &'static [&'static str] {
        T::NAMES
    }

    /// Returns position of component of type `C` in declaration order.
    pub fn index_of<C, I>() -> usize
    where
        C: Component,
        T: Select<C, I>,
    {
        <T as Select<C, I>>::INDEX
    }

    /// Returns a copy of the component of type `C`.
    ///
    /// To change the component, write it back with [`set`](Entity::set).
    ///
    pub fn get<C, I>(&self) -> C
    where
        C: Component,
        T: Select<C, I>,
    {
        <T as Select<C, I>>::select(&self.components).clone()
    }

    /// Returns copies of several components in the requested order.
    ///
    /// `Q` is a tuple of component types, e.g. `get_many::<(Position, Velocity), _>()`.
    ///
    pub fn get_many<Q, I>(&self) -> Q
    where
        T: SelectMany<Q, I>,
    {
        <T as SelectMany<Q, I>>::select_many(&self.components)
    }

    /// Overwrites the component of type `C` by value.
    pub fn set<C, I>(&mut self, component: C)
    where
        C: Component,
        T: Select<C, I>,
    {
        log::trace!(
            target: "hyp_ecs::entity",
            "set component {} at index {}",
            C::NAME,
            <T as Select<C, I>>::INDEX,
        );
        *<T as Select<C, I>>::select_mut(&mut self.components) = component;
    }

    /// Overwrites several components one by one in the order they were passed.
    ///
    /// If the tuple contains some component type more than once,
    /// the last value of that type is kept.
    ///
    pub fn set_many<Q, I>(&mut self, components: Q)
    where
        T: SelectMany<Q, I>,
    {
        log::trace!(target: "hyp_ecs::entity", "set components of {:?}", T::NAMES);
        <T as SelectMany<Q, I>>::assign_many(&mut self.components, components)
    }

    /// Replaces the component of type `C` by value.
    ///
    /// Returns previously stored component.
    ///
    pub fn replace<C, I>(&mut self, component: C) -> C
    where
        C: Component,
        T: Select<C, I>,
    {
        mem::replace(
            <T as Select<C, I>>::select_mut(&mut self.components),
            component,
        )
    }

    /// Retrieves an immutable reference to the tuple of all components.
    pub fn components(&self) -> &T {
        &self.components
    }

    /// Converts entity into the tuple of all components.
    pub fn into_components(self) -> T {
        self.components
    }
}

/// Same as [`Entity::new`], including the check of repeated components:
///
/// ```compile_fail
/// use hyp_ecs::Entity;
///
/// let entity = Entity::from(('a', 'b'));
/// ```
///
impl<T> From<T> for Entity<T>
where
    T: ComponentSet,
{
    fn from(components: T) -> Self {
        Self::new(components)
    }
}

/// Entity of default values of its components.
///
/// ```
/// let entity = hyp_ecs::Entity::<(u8, char)>::default();
/// assert_eq!(entity.get::<char, _>(), '\0');
/// ```
///
/// Repeated components are rejected here too:
///
/// ```compile_fail
/// let entity = hyp_ecs::Entity::<(u8, u8)>::default();
/// ```
///
impl<T> Default for Entity<T>
where
    T: ComponentSet + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Creates new [`Entity`] from the list of its components.
///
/// Declared component types are the types of given values, in the same order.
/// Without arguments it creates an entity with no components.
///
/// ```
/// let entity = hyp_ecs::entity![1_u8, 'c'];
/// assert_eq!(entity.get::<char, _>(), 'c');
///
/// let empty: hyp_ecs::Entity<()> = hyp_ecs::entity![];
/// assert!(empty.components().eq(&()));
/// ```
///
/// Query for a component type the entity does not have is rejected:
///
/// ```compile_fail
/// let entity = hyp_ecs::entity![1_u8];
/// let _ = entity.get::<char, _>();
/// ```
///
#[macro_export]
macro_rules! entity {
    () => {
        $crate::Entity::new(())
    };
    ($($component:expr),+ $(,)?) => {
        $crate::Entity::new(($($component,)+))
    };
}
