//! Traverse and sequence: from a sequence of options/results to an
//! option/result of a sequence.
//!
//! Every function here is fail-fast: the first `None` or `Err` (by element
//! index) decides the outcome. Empty inputs always succeed with an empty
//! `Vec`.
//!
//! | Function | Execution | Stops early |
//! |----------|-----------|-------------|
//! | [`sequence_option`], [`traverse_option`] | synchronous | yes |
//! | [`sequence_result`], [`traverse_result`] | synchronous | yes |
//! | `traverse_option_async`, `traverse_result_async` | one await per element, in order | yes |
//! | `traverse_option_parallel`, `traverse_result_parallel` | all elements concurrently | no |
//!
//! The asynchronous variants need the `async` feature.
//!
//! # Examples
//!
//! ```rust
//! use fptk::traverse::{sequence_result, traverse_option};
//!
//! assert_eq!(sequence_result(vec![Ok::<_, String>(1), Ok(2)]), Ok(vec![1, 2]));
//! assert_eq!(traverse_option(["1", "2"], |s| s.parse::<u8>().ok()), Some(vec![1, 2]));
//! ```

#[cfg(feature = "async")]
mod concurrent;
mod sequential;

#[cfg(feature = "async")]
pub use concurrent::{
    traverse_option_async, traverse_option_parallel, traverse_result_async,
    traverse_result_parallel,
};
pub use sequential::{sequence_option, sequence_result, traverse_option, traverse_result};
