//! Function combinators.
//!
//! # Overview
//!
//! - [`pipe!`]: apply functions left to right, `pipe!(x, f, g) == g(f(x))`
//! - [`compose!`] and [`compose()`]: compose right to left, `compose(f, g)(x) == f(g(x))`
//! - [`pipe_async!`]: a pipeline mixing plain (`=>`) and awaited (`=>>`) steps
//! - [`curry2`], [`curry3`], [`curry4`]: currying with any grouping of arguments
//! - [`flip`], [`tap`], [`identity`], [`constant`]: small shaping helpers
//! - [`thunk`], [`once`]: memoisation
//! - [`try_catch`], [`attempt`]: panics as `Err` values
//! - [`foldl`], [`foldr`], [`reduce`]: folds
//!
//! # Examples
//!
//! ```rust
//! use fptk::compose::{Supply, curry3, flip};
//! use fptk::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(5, double, add_one), 11);
//!
//! let volume = curry3(|l: u32, w: u32, h: u32| l * w * h);
//! assert_eq!(volume.apply((2,)).apply((3, 4)), 24);
//!
//! let minus = flip(|a: i32, b: i32| a - b);
//! assert_eq!(minus(1, 10), 9);
//! ```

mod catch;
mod compose_macro;
mod curry;
mod fold;
mod memo;
mod pipe_async_macro;
mod pipe_macro;
mod utils;

pub use catch::{attempt, try_catch};
pub use curry::{Curry2, Curry3, Curry4, Supply, curry2, curry3, curry4};
pub use fold::{foldl, foldr, reduce};
pub use memo::{once, thunk};
pub use utils::{compose, constant, flip, identity, tap};

// Re-export macros for module-level access
pub use crate::compose;
pub use crate::pipe;
pub use crate::pipe_async;
