//! # fptk
//!
//! A small, pragmatic functional programming toolkit for everyday Rust code.
//!
//! ## Overview
//!
//! Optionality, recoverable failure and two-way branching are represented as
//! values and composed with law-abiding combinators:
//!
//! - **ADTs**: extension traits for [`Option`] and [`Result`]
//!   ([`OptionExt`](adt::OptionExt), [`ResultExt`](adt::ResultExt)), a
//!   symmetric [`Either`](adt::Either) and a [`NonEmptyList`](adt::NonEmptyList)
//! - **Effects**: [`Reader`](effect::Reader), [`Writer`](effect::Writer) and
//!   [`State`](effect::State) monads
//! - **Traverse/Sequence**: fail-fast conversions between sequences of ADTs and
//!   ADTs of sequences, including sequential-async and parallel variants
//! - **Fan-in**: [`gather_results`](gather::gather_results) and
//!   [`gather_results_accumulate`](gather::gather_results_accumulate)
//! - **Function combinators**: `pipe!`, `compose!`, curry, flip, tap, thunk,
//!   once, `try_catch` and folds
//! - **Type classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid) with the usual built-in instances
//!
//! ## Feature Flags
//!
//! - `async` (default): async/parallel traversals and the fan-in helpers
//! - `serde`: `Serialize`/`Deserialize` for the data types of this crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fptk::prelude::*;
//!
//! let doubled = Some(2).bind(|x| Some(x * 2)).get_or(0);
//! assert_eq!(doubled, 4);
//!
//! let collected = sequence_result(vec![Ok::<_, String>(1), Ok(2)]);
//! assert_eq!(collected, Ok(vec![1, 2]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits, data types and free functions.
///
/// # Usage
///
/// ```rust
/// use fptk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adt::*;
    pub use crate::compose::*;
    pub use crate::effect::*;
    pub use crate::error::*;
    pub use crate::iter::*;
    pub use crate::traverse::*;
    pub use crate::typeclass::*;
    pub use crate::validate::*;

    #[cfg(feature = "async")]
    pub use crate::gather::*;
}

pub mod adt;
pub mod compose;
pub mod effect;
pub mod error;
pub mod iter;
pub mod traverse;
pub mod typeclass;
pub mod validate;

#[cfg(feature = "async")]
pub mod gather;
