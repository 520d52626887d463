//! Writer - a value paired with an accumulated log.
//!
//! The log type `W` must be a [`Monoid`]: [`Writer::unit`] starts with
//! `W::empty()`, and [`Writer::bind`] joins logs left to right with
//! `combine`, so the log of `m.bind(f)` is `m.log.combine(f(m.value).log)`.
//!
//! # Examples
//!
//! ```rust
//! use fptk::effect::Writer;
//!
//! fn double(n: i32) -> Writer<Vec<String>, i32> {
//!     Writer::tell(vec![format!("doubling {n}")]).map(move |()| n * 2)
//! }
//!
//! let (value, log) = Writer::unit(5).bind(double).bind(double).run();
//! assert_eq!(value, 20);
//! assert_eq!(log, vec!["doubling 5", "doubling 10"]);
//! ```

use crate::typeclass::Monoid;

/// A value of type `A` together with a log of type `W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A>
where
    W: Monoid,
{
    value: A,
    log: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Pairs a value with an initial log.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// A value with the empty log.
    pub fn unit(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// Alias of [`Writer::unit`].
    pub fn pure(value: A) -> Self {
        Self::unit(value)
    }

    /// Consumes the writer into its value and log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// The value, dropping the log.
    pub fn eval(self) -> A {
        self.value
    }

    /// The log, dropping the value.
    pub fn exec(self) -> W {
        self.log
    }

    /// Borrows the value and the log.
    pub const fn as_parts(&self) -> (&A, &W) {
        (&self.value, &self.log)
    }

    /// Transforms the value; the log is untouched.
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.value), self.log)
    }

    /// Chains a computation, appending its log after this writer's log.
    pub fn bind<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Keeps `next`'s value and both logs.
    #[must_use]
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        self.bind(|_| next)
    }

    /// Combines two values; logs are joined left to right.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            function(self.value, other.value),
            self.log.combine(other.log),
        )
    }

    /// Exposes the log of `computation` as part of its value.
    ///
    /// The outer log is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::effect::Writer;
    ///
    /// let inner: Writer<String, i32> = Writer::new(1, "inner".to_string());
    /// let ((value, seen), log) = Writer::listen(inner).run();
    /// assert_eq!((value, seen.as_str(), log.as_str()), (1, "inner", "inner"));
    /// ```
    pub fn listen(computation: Self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let Self { value, log } = computation;
        Writer::new((value, log.clone()), log)
    }

    /// Rewrites the accumulated log of `computation`.
    pub fn censor<F>(transform: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let Self { value, log } = computation;
        Self::new(value, transform(log))
    }
}

impl<W> Writer<W, ()>
where
    W: Monoid,
{
    /// Emits `log` with no meaningful value.
    pub const fn tell(log: W) -> Self {
        Self::new((), log)
    }
}
