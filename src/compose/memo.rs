//! Memoising wrappers: [`thunk`] and [`once`].
//!
//! Both cache the first successfully produced value in a [`OnceCell`] and
//! hand out clones of it afterwards. If the wrapped function panics nothing
//! is cached, so the next call tries again.

use std::cell::OnceCell;

/// A lazily computed, memoised value.
///
/// `function` runs on the first call only; every call returns a clone of
/// that first result.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::thunk;
/// use std::cell::Cell;
///
/// let evaluations = Cell::new(0);
/// let config = thunk(|| {
///     evaluations.set(evaluations.get() + 1);
///     "loaded".to_string()
/// });
///
/// assert_eq!(evaluations.get(), 0);
/// assert_eq!(config(), "loaded");
/// assert_eq!(config(), "loaded");
/// assert_eq!(evaluations.get(), 1);
/// ```
pub fn thunk<T, F>(function: F) -> impl Fn() -> T
where
    F: Fn() -> T,
    T: Clone,
{
    let cell = OnceCell::new();
    move || cell.get_or_init(&function).clone()
}

/// Wraps `function` so that it runs at most once.
///
/// The first call's argument produces the result; later calls ignore their
/// argument and return a clone of that result. Several arguments can be
/// passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::once;
///
/// let initialise = once(|(host, port): (&str, u16)| format!("{host}:{port}"));
/// assert_eq!(initialise(("localhost", 80)), "localhost:80");
/// assert_eq!(initialise(("example.org", 443)), "localhost:80");
/// ```
pub fn once<A, T, F>(function: F) -> impl Fn(A) -> T
where
    F: Fn(A) -> T,
    T: Clone,
{
    let cell = OnceCell::new();
    move |argument| cell.get_or_init(|| function(argument)).clone()
}
