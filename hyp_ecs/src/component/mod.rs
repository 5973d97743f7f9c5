//! Utilities for *components* of entities.


/// Objects of this trait represent *component* of an entity.
///
/// Components are plain values: entities hand out clones of them
/// and take them back by value.
///
/// The [`NAME`](Component::NAME) of the component must be unique among all
/// component types, because it is used to reject entities which declare
/// the same component type more than once. Prefer `#[derive(Component)]`,
/// which uses the fully qualified path of the type and the place of its
/// declaration as its name.
///
/// # Examples
///
/// ```
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone)]
/// #[component(transparent)]
/// struct Name(String);
///
/// let name = Name::from("player".to_string());
/// assert_eq!(name.len(), 6);
/// assert!(Name::NAME.contains("Name @ "));
/// ```
///
/// Generic types can't be derived, because all their instantiations
/// would share one name:
///
/// ```compile_fail
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone)]
/// struct Wrapper<T>(T);
/// ```
///
/// Unions are not components at all:
///
/// ```compile_fail
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone, Copy)]
/// union Bits {
///     int: u32,
///     float: f32,
/// }
/// ```
///
/// Transparent component wraps exactly one value:
///
/// ```compile_fail
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone)]
/// #[component(transparent)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
/// ```
///
/// ```compile_fail
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone)]
/// #[component(transparent)]
/// enum State {
///     Idle,
/// }
/// ```
///
/// ```compile_fail
/// use hyp_ecs::Component;
///
/// #[derive(Component, Clone)]
/// #[component(opaque)]
/// struct Score(u32);
/// ```
///
pub trait Component: Clone + 'static {
    /// Unique name of this component type.
    const NAME: &'static str;
}

// Primitive types are components on their own, named after themselves.
macro_rules! impl_component {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Component for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

impl_component!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
);

impl Component for &'static str {
    const NAME: &'static str = "&'static str";
}
