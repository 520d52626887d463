//! Algebraic data types and their combinators.
//!
//! - `Option<T>` with [`OptionExt`]: optional values
//! - `Result<T, E>` with [`ResultExt`] and [`NestedResultExt`]: recoverable failure
//! - [`Either`]: unbiased choice between two types
//! - [`NonEmptyList`]: a list with at least one element
//!
//! # Examples
//!
//! ```rust
//! use fptk::adt::{Either, OptionExt, ResultExt};
//!
//! let total = Some(2).map2(Some(3), |a, b| a + b);
//! assert_eq!(total, Some(5));
//!
//! let checked: Result<i32, String> = Ok(10).bind(|n| {
//!     if n > 0 { Ok(n) } else { Err("negative".to_string()) }
//! });
//! assert_eq!(checked, Ok(10));
//!
//! let either: Either<String, i32> = checked.into();
//! assert!(either.is_right());
//! ```

mod either;
mod non_empty;
mod option;
mod result;

pub use either::Either;
pub use non_empty::NonEmptyList;
pub use option::OptionExt;
pub use result::{NestedResultExt, ResultExt};
