//! Combinators for `Result<T, E>`.
//!
//! `Result` is the recoverable-failure type: `Ok(value)` or `Err(error)`.
//! `map`, `map_err`, `unwrap_or` and `unwrap_or_else` come from the standard
//! library. [`ResultExt`] adds monadic chaining, applicative helpers,
//! recovery and the logging unwrap escape hatches.
//!
//! # Examples
//!
//! ```rust
//! use fptk::adt::ResultExt;
//!
//! let parse = |text: &str| text.parse::<i32>().map_err(|e| e.to_string());
//!
//! let sum = parse("40").map2(parse("2"), |a, b| a + b);
//! assert_eq!(sum, Ok(42));
//!
//! let recovered = parse("x").recover(|_| 0);
//! assert_eq!(recovered, Ok(0));
//! ```

use std::fmt;
use std::future::Future;

use crate::error::{DEFAULT_UNWRAP_CONTEXT, UnwrappedErr};

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

/// Extension methods for `Result<T, E>`.
///
/// The trait is sealed; it is only implemented for `Result<T, E>`.
pub trait ResultExt<T, E>: sealed::Sealed + Sized {
    // =========================================================================
    // Monadic chaining
    // =========================================================================

    /// Chains a fallible computation. `Err` short-circuits.
    ///
    /// # Errors
    ///
    /// Returns the first error: either `self`'s or the one `function` produced.
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the result into a single value.
    fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U;

    /// Returns the success value or panics with the error in the message.
    ///
    /// The error is logged at `error` level before panicking. The panic
    /// message is the [`UnwrappedErr`] rendering, `"{context}: {error:?}"`.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::ResultExt;
    ///
    /// assert_eq!(Ok::<i32, String>(3).unwrap_or_raise(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use fptk::adt::ResultExt;
    ///
    /// let failed: Result<i32, String> = Err("boom".into());
    /// failed.unwrap_or_raise();
    /// ```
    #[track_caller]
    fn unwrap_or_raise(self) -> T
    where
        E: fmt::Debug;

    /// Like [`unwrap_or_raise`](Self::unwrap_or_raise) with a caller-supplied message.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Err`.
    #[track_caller]
    fn expect_or_raise(self, message: &str) -> T
    where
        E: fmt::Debug;

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Pairs two successes. The first `Err` (left to right) wins.
    ///
    /// # Errors
    ///
    /// Returns `self`'s error if it has one, otherwise `other`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::ResultExt;
    ///
    /// let first: Result<i32, &str> = Err("first");
    /// assert_eq!(first.zip(Err::<i32, &str>("second")), Err("first"));
    /// assert_eq!(Ok::<_, &str>(1).zip(Ok(2)), Ok((1, 2)));
    /// ```
    fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E>;

    /// Combines two successes with `function`. The first `Err` wins.
    ///
    /// # Errors
    ///
    /// Returns `self`'s error if it has one, otherwise `other`'s.
    fn map2<U, V, F>(self, other: Result<U, E>, function: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V;

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// `self` holds the function. `self`'s error takes priority over the
    /// argument's error.
    ///
    /// # Errors
    ///
    /// Returns `self`'s error if it has one, otherwise `argument`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::ResultExt;
    ///
    /// let add_one: Result<fn(i32) -> i32, String> = Ok(|x| x + 1);
    /// assert_eq!(add_one.ap(Ok(5)), Ok(6));
    ///
    /// let missing: Result<fn(i32) -> i32, String> = Err("no func".into());
    /// assert_eq!(missing.ap(Ok(5)), Err("no func".to_string()));
    /// ```
    fn ap<A, B>(self, argument: Result<A, E>) -> Result<B, E>
    where
        T: FnOnce(A) -> B;

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Turns an error into a success value. `Ok` passes through.
    ///
    /// # Errors
    ///
    /// Never returns `Err`; the error type is kept for chaining.
    fn recover<F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(E) -> T;

    /// Replaces an error with another fallible computation. `Ok` passes through.
    ///
    /// # Errors
    ///
    /// Returns whatever error `function` produces.
    fn recover_with<F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(E) -> Result<T, E>;

    // =========================================================================
    // Asynchronous
    // =========================================================================

    /// Maps the success value through an asynchronous function.
    ///
    /// `function` is only called for `Ok`; `Err` resolves on the first poll.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Chains an asynchronous fallible computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::ResultExt;
    ///
    /// # futures::executor::block_on(async {
    /// let checked = Ok::<i32, String>(4)
    ///     .bind_async(|n| async move {
    ///         if n > 0 { Ok(n * 10) } else { Err("not positive".to_string()) }
    ///     })
    ///     .await;
    /// assert_eq!(checked, Ok(40));
    /// # });
    /// ```
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>;
}

#[track_caller]
fn raise<E>(error: E, context: &str) -> !
where
    E: fmt::Debug,
{
    let location = std::panic::Location::caller();
    let unwrapped = UnwrappedErr::new(error, context);
    tracing::error!(error = ?unwrapped.error(), context, %location, "unwrapping an Err value");
    panic!("{unwrapped}")
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[track_caller]
    fn unwrap_or_raise(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(value) => value,
            Err(error) => raise(error, DEFAULT_UNWRAP_CONTEXT),
        }
    }

    #[track_caller]
    fn expect_or_raise(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(value) => value,
            Err(error) => raise(error, message),
        }
    }

    #[inline]
    fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E> {
        self.map2(other, |left, right| (left, right))
    }

    #[inline]
    fn map2<U, V, F>(self, other: Result<U, E>, function: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(function(left, right)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }

    #[inline]
    fn ap<A, B>(self, argument: Result<A, E>) -> Result<B, E>
    where
        T: FnOnce(A) -> B,
    {
        self.map2(argument, |function, value| function(value))
    }

    #[inline]
    fn recover<F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(E) -> T,
    {
        Ok(self.unwrap_or_else(function))
    }

    #[inline]
    fn recover_with<F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => function(error),
        }
    }

    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Ok(value) => Ok(function(value).await),
                Err(error) => Err(error),
            }
        }
    }

    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        async move {
            match self {
                Ok(value) => function(value).await,
                Err(error) => Err(error),
            }
        }
    }
}

/// Flattening for a `Result` nested in the success channel.
pub trait NestedResultExt<T, E>: sealed::Sealed {
    /// Collapses one level of nesting.
    ///
    /// # Errors
    ///
    /// Returns the outer error, or the inner one when the outer is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::NestedResultExt;
    ///
    /// let nested: Result<Result<i32, String>, String> = Ok(Ok(1));
    /// assert_eq!(nested.join(), Ok(1));
    ///
    /// let inner_err: Result<Result<i32, String>, String> = Ok(Err("inner".into()));
    /// assert_eq!(inner_err.join(), Err("inner".to_string()));
    /// ```
    fn join(self) -> Result<T, E>;
}

impl<T, E> NestedResultExt<T, E> for Result<Result<T, E>, E> {
    #[inline]
    fn join(self) -> Result<T, E> {
        self.bind(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    #[case(Ok(1), Ok(2), Ok((1, 2)))]
    #[case(Err("left"), Ok(2), Err("left"))]
    #[case(Ok(1), Err("right"), Err("right"))]
    #[case(Err("left"), Err("right"), Err("left"))]
    fn zip_is_left_biased(
        #[case] left: Result<i32, &'static str>,
        #[case] right: Result<i32, &'static str>,
        #[case] expected: Result<(i32, i32), &'static str>,
    ) {
        assert_eq!(left.zip(right), expected);
    }

    #[rstest]
    #[case(Ok(Ok(1)), Ok(1))]
    #[case(Ok(Err("inner")), Err("inner"))]
    #[case(Err("outer"), Err("outer"))]
    fn join_collapses_nesting(
        #[case] nested: Result<Result<i32, &'static str>, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(nested.join(), expected);
    }

    #[rstest]
    fn ap_prefers_function_error() {
        let function: Result<fn(i32) -> i32, &str> = Err("no func");
        assert_eq!(function.ap(Err("no arg")), Err("no func"));
    }

    #[rstest]
    fn ap_reports_argument_error_when_function_present() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x * 2);
        assert_eq!(function.ap(Err("no arg")), Err("no arg"));
    }

    #[rstest]
    fn recover_with_may_fail_again() {
        let result: Result<i32, String> = Err("first".into());
        let recovered = result.recover_with(|error| Err(format!("{error} then second")));
        assert_eq!(recovered, Err("first then second".to_string()));
    }

    #[rstest]
    fn unwrap_or_raise_message_names_error() {
        let failing: Result<i32, String> = Err("kaput".into());
        let payload = catch_unwind(AssertUnwindSafe(|| failing.unwrap_or_raise())).unwrap_err();
        let message = payload.downcast::<String>().unwrap();
        assert_eq!(*message, format!("{DEFAULT_UNWRAP_CONTEXT}: \"kaput\""));
    }

    #[rstest]
    fn expect_or_raise_uses_caller_message() {
        let failing: Result<i32, u8> = Err(9);
        let payload =
            catch_unwind(AssertUnwindSafe(|| failing.expect_or_raise("reading port"))).unwrap_err();
        let message = payload.downcast::<String>().unwrap();
        assert_eq!(*message, "reading port: 9");
    }
}
