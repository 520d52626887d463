//! Algebraic type classes used by the rest of the crate.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Built-in Instances
//!
//! | Type | `combine` | `empty` |
//! |------|-----------|---------|
//! | `Vec<T>` | concatenation | `[]` |
//! | `String` | concatenation | `""` |
//! | `HashSet<T>`, `BTreeSet<T>` | union | `{}` |
//! | [`Sum<A>`] | `+` | `0` |
//! | [`Product<A>`] | `*` | `1` |
//! | [`All`] | `&&` | `true` |
//! | [`Any`] | `\|\|` | `false` |
//! | [`Max<A>`] | larger | `A::min_value()` |
//! | [`Min<A>`] | smaller | `A::max_value()` |
//!
//! # Examples
//!
//! ```rust
//! use fptk::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! assert_eq!(String::empty().combine(String::from("x")), "x");
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum};
