//! Newtype wrappers selecting a monoid for an underlying type.
//!
//! The same `i32` can be combined by addition ([`Sum`]), multiplication
//! ([`Product`]) or by keeping an extreme ([`Max`], [`Min`]); a `bool` can be
//! combined by conjunction ([`All`]) or disjunction ([`Any`]).
//!
//! [`Bounded`] supplies the identity elements of `Max` and `Min`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! newtype_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

/// Additive monoid: identity `0`, combine `+`.
///
/// # Examples
///
/// ```rust
/// use fptk::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum<A>(pub A);

newtype_accessors!(Sum);

/// Multiplicative monoid: identity `1`, combine `*`.
///
/// # Examples
///
/// ```rust
/// use fptk::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product<A>(pub A);

newtype_accessors!(Product);

/// Keeps the larger value; identity is the type's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Max<A>(pub A);

newtype_accessors!(Max);

/// Keeps the smaller value; identity is the type's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Min<A>(pub A);

newtype_accessors!(Min);

/// Boolean conjunction monoid: identity `true`.
///
/// # Examples
///
/// ```rust
/// use fptk::typeclass::{All, Monoid};
///
/// assert_eq!(All::combine_all(vec![All(true), All(false)]), All(false));
/// assert_eq!(All::combine_all(Vec::new()), All(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct All(pub bool);

/// Boolean disjunction monoid: identity `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Any(pub bool);

/// Types with a smallest and a largest value.
pub trait Bounded {
    /// The smallest value of the type.
    fn min_value() -> Self;
    /// The largest value of the type.
    fn max_value() -> Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),+ $(,)?) => {
        $(
            impl Bounded for $numeric {
                fn min_value() -> Self {
                    <$numeric>::MIN
                }

                fn max_value() -> Self {
                    <$numeric>::MAX
                }
            }
        )+
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    fn min_value() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }
}

static_assertions::assert_impl_all!(Sum<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(All: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_round_trip_inner_value() {
        let wrapped = Max::new(5);
        assert_eq!(*wrapped.as_inner(), 5);
        assert_eq!(wrapped.into_inner(), 5);
        assert_eq!(Min::from('z'), Min('z'));
    }

    #[rstest]
    fn bounded_covers_numeric_limits() {
        assert_eq!(<i16 as Bounded>::min_value(), i16::MIN);
        assert_eq!(<usize as Bounded>::max_value(), usize::MAX);
        assert!(<bool as Bounded>::max_value());
    }

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i32>::default(), Sum(0));
    }
}
