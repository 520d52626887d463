//! Turning panics into `Err` values.
//!
//! Only unwinding panics are caught. Aborts (including panics under
//! `panic = "abort"`), `std::process::exit` and dropped futures never unwind
//! through these wrappers and are not intercepted.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::CaughtPanic;

/// Wraps `function` so that a panic becomes `Err(CaughtPanic)`.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::try_catch;
///
/// let checked_divide = try_catch(|(a, b): (i32, i32)| a / b);
/// assert_eq!(checked_divide((10, 2)).ok(), Some(5));
///
/// let failure = checked_divide((1, 0)).unwrap_err();
/// assert!(failure.message().contains("divide by zero"));
/// ```
pub fn try_catch<A, T, F>(function: F) -> impl Fn(A) -> Result<T, CaughtPanic>
where
    F: Fn(A) -> T,
{
    move |argument| attempt(|| function(argument))
}

/// Runs `function` now, returning `Err(CaughtPanic)` if it panics.
///
/// # Errors
///
/// Returns [`CaughtPanic`] when `function` panics.
pub fn attempt<T, F>(function: F) -> Result<T, CaughtPanic>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let caught = CaughtPanic::from_payload(payload);
        tracing::warn!(panic_message = caught.message(), "caught panic converted to Err");
        caught
    })
}
