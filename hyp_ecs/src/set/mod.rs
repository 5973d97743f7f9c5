//! Utilities for sets of component types which make up an entity.

use crate::Component;


/// Set of component types an [`Entity`](crate::Entity) is declared with.
///
/// Implemented for unit type and for tuples of up to 12 components.
/// Components are stored in the tuple in declaration order.
///
pub trait ComponentSet: Clone + 'static {
    /// Count of component types in this set.
    const LEN: usize;

    /// Names of component types in this set, in declaration order.
    const NAMES: &'static [&'static str];

    /// Evaluates successfully only if no component type appears twice.
    ///
    /// Referenced by [`Entity::new`](crate::Entity::new), so an entity type with
    /// a repeated component fails to build instead of failing at run time.
    ///
    #[doc(hidden)]
    const DISTINCT: () = assert!(
        distinct(Self::NAMES),
        "component type appears more than once in entity"
    );
}

/// Returns `true` if there are no equal names in the slice.
pub const fn distinct(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut i = 0;
    while i < left.len() {
        if left[i] != right[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl ComponentSet for () {
    const LEN: usize = 0;
    const NAMES: &'static [&'static str] = &[];
}

// Generate implementations of ComponentSet for tuples up to 12 elements.
macro_rules! impl_component_set {
    ($($component:ident),+) => {
        impl<$($component),+> ComponentSet for ($($component,)+)
        where
            $($component: Component,)+
        {
            const LEN: usize = Self::NAMES.len();
            const NAMES: &'static [&'static str] = &[$(<$component as Component>::NAME),+];
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
impl_component_set!(A, B, C, D, E, F, G, H, I);
impl_component_set!(A, B, C, D, E, F, G, H, I, J);
impl_component_set!(A, B, C, D, E, F, G, H, I, J, K);
impl_component_set!(A, B, C, D, E, F, G, H, I, J, K, L);
