//! Utilities for type-keyed access to components of a component set.
//!
//! Position of the component in the set is found by the trait solver:
//! tuple `(T0, ..., Tn)` implements [`Select<Tk, At<k>>`](Select) for every `k`.
//! If the requested type occurs exactly once, there is only one suitable
//! implementation and the position marker is inferred. Absent or repeated
//! component types leave no (or more than one) candidate, so such calls
//! are rejected when the caller is built.

use crate::{Component, ComponentSet};


/// Marker type of the `N`-th position in the component set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At<const N: usize>;

/// Access to the component of type `C` located at position `I` of the set.
pub trait Select<C, I>: ComponentSet
where
    C: Component,
{
    /// Position of the component in declaration order.
    const INDEX: usize;

    /// Retrieves an immutable reference to the component.
    fn select(&self) -> &C;

    /// Retrieves a mutable reference to the component.
    fn select_mut(&mut self) -> &mut C;
}

/// Batched access to several components at once.
///
/// `Q` is a tuple of requested component types, `I` is a tuple of their positions.
/// Implemented for every component set which can [select](Select)
/// each of requested components.
///
pub trait SelectMany<Q, I>: ComponentSet {
    /// Clones requested components in the order of `Q`.
    fn select_many(&self) -> Q;

    /// Overwrites requested components one by one in the order of `Q`.
    ///
    /// If some type is repeated in `Q`, the last value of that type is kept.
    ///
    fn assign_many(&mut self, values: Q);
}

/// Returns position of the component of type `C` in the set `T`.
pub fn index_of<C, I, T>() -> usize
where
    C: Component,
    T: Select<C, I>,
{
    T::INDEX
}

/// Returns a clone of the component of type `C` stored in the tuple.
pub fn get_element<C, I, T>(tuple: &T) -> C
where
    C: Component,
    T: Select<C, I>,
{
    tuple.select().clone()
}

/// Replaces the component of type `C` stored in the tuple and returns the tuple.
pub fn set_element<C, I, T>(mut tuple: T, component: C) -> T
where
    C: Component,
    T: Select<C, I>,
{
    *tuple.select_mut() = component;
    tuple
}

// Generate implementations of Select for tuples up to 12 elements.
macro_rules! impl_select {
    (@at $all:tt $($component:ident $index:tt),+) => {
        $(impl_select!(@one $all $component $index);)+
    };
    (@one ($($all:ident),+) $component:ident $index:tt) => {
        impl<$($all),+> Select<$component, At<$index>> for ($($all,)+)
        where
            $($all: Component,)+
        {
            const INDEX: usize = $index;

            fn select(&self) -> &$component {
                &self.$index
            }

            fn select_mut(&mut self) -> &mut $component {
                &mut self.$index
            }
        }
    };
    ($($component:ident $index:tt),+) => {
        impl_select!(@at ($($component),+) $($component $index),+);
    };
}

impl_select!(A 0);
impl_select!(A 0, B 1);
impl_select!(A 0, B 1, C 2);
impl_select!(A 0, B 1, C 2, D 3);
impl_select!(A 0, B 1, C 2, D 3, E 4);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_select!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

// Generate implementations of SelectMany for requests up to 12 elements.
macro_rules! impl_select_many {
    ($(($component:ident, $index:ident, $value:ident)),+) => {
        impl<T, $($component, $index),+> SelectMany<($($component,)+), ($($index,)+)> for T
        where
            T: ComponentSet $(+ Select<$component, $index>)+,
            $($component: Component,)+
        {
            fn select_many(&self) -> ($($component,)+) {
                ($(<T as Select<$component, $index>>::select(self).clone(),)+)
            }

            fn assign_many(&mut self, ($($value,)+): ($($component,)+)) {
                $(*<T as Select<$component, $index>>::select_mut(self) = $value;)+
            }
        }
    };
}

impl_select_many!((A, IA, a));
impl_select_many!((A, IA, a), (B, IB, b));
impl_select_many!((A, IA, a), (B, IB, b), (C, IC, c));
impl_select_many!((A, IA, a), (B, IB, b), (C, IC, c), (D, ID, d));
impl_select_many!((A, IA, a), (B, IB, b), (C, IC, c), (D, ID, d), (E, IE, e));
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g),
    (H, IH, h)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g),
    (H, IH, h),
    (I, II, i)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g),
    (H, IH, h),
    (I, II, i),
    (J, IJ, j)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g),
    (H, IH, h),
    (I, II, i),
    (J, IJ, j),
    (K, IK, k)
);
impl_select_many!(
    (A, IA, a),
    (B, IB, b),
    (C, IC, c),
    (D, ID, d),
    (E, IE, e),
    (F, IF, f),
    (G, IG, g),
    (H, IH, h),
    (I, II, i),
    (J, IJ, j),
    (K, IK, k),
    (L, IL, l)
);
