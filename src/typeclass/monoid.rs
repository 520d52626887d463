//! Monoid type class - semigroups with an identity element.
//!
//! [`Writer`](crate::effect::Writer) accumulates its log through a monoid, so
//! any type implementing this trait can be used as a Writer log. The identity
//! element returned by [`Monoid::empty`] is a plain value, never mutated, and
//! therefore safe to share between concurrent callers.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fptk::typeclass::{Monoid, Product, Semigroup};
//!
//! assert_eq!(Product::combine_all(vec![Product(2), Product(3), Product(4)]), Product(24));
//! assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// Implement this for your own type to use it as a [`Writer`](crate::effect::Writer) log.
///
/// # Examples
///
/// ```rust
/// use fptk::typeclass::{Monoid, Semigroup};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Lines(Vec<String>);
///
/// impl Semigroup for Lines {
///     fn combine(self, other: Self) -> Self {
///         Lines(self.0.combine(other.0))
///     }
/// }
///
/// impl Monoid for Lines {
///     fn empty() -> Self {
///         Lines(Vec::new())
///     }
/// }
///
/// assert_eq!(Lines::empty().combine(Lines(vec!["x".into()])), Lines(vec!["x".into()]));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, H: BuildHasher + Default> Monoid for HashSet<T, H> {
    fn empty() -> Self {
        Self::default()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($one:literal => $($numeric:ty),+ $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::min_value())
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::max_value())
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}
