//! Reader - computations that read a shared environment.
//!
//! A `Reader<Env, A>` wraps a function `Env -> A`. Composing readers threads
//! one environment through every step, and the environment is only supplied
//! when [`Reader::run`] is called.
//!
//! # Laws
//!
//! - Identity: `reader.map(|x| x).run(e) == reader.run(e)`
//! - Left identity: `Reader::pure(a).bind(f).run(e) == f(a).run(e)`
//! - Right identity: `m.bind(Reader::pure).run(e) == m.run(e)`
//! - Local identity: `Reader::local(|e| e, m).run(e) == m.run(e)`
//!
//! # Examples
//!
//! ```rust
//! use fptk::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Settings {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|settings: Settings| settings.host)
//!     .map2(Reader::asks(|settings: Settings| settings.port), |host, port| {
//!         format!("{host}:{port}")
//!     });
//!
//! let settings = Settings { host: "localhost".into(), port: 8080 };
//! assert_eq!(address.run(settings), "localhost:8080");
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation of an `A` from an environment `Env`.
///
/// Cloning a reader is cheap: the wrapped function is shared.
pub struct Reader<Env, A>
where
    Env: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(Env) -> A>,
}

impl<Env, A> Reader<Env, A>
where
    Env: 'static,
    A: 'static,
{
    /// Wraps a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Env) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: Env) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores its environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<Env, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        Reader::new(move |environment| function(inner(environment)))
    }

    /// Chains a reader chosen from this reader's result; both see the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::effect::Reader;
    ///
    /// let scaled = Reader::ask().bind(|factor: i32| Reader::new(move |env: i32| env * factor));
    /// assert_eq!(scaled.run(7), 49);
    /// ```
    pub fn bind<B, F>(self, function: F) -> Reader<Env, B>
    where
        F: Fn(A) -> Reader<Env, B> + 'static,
        B: 'static,
        Env: Clone,
    {
        let inner = self.run_function;
        Reader::new(move |environment: Env| {
            let value = inner(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs `next` after this reader, discarding this reader's result.
    #[must_use]
    pub fn then<B>(self, next: Reader<Env, B>) -> Reader<Env, B>
    where
        B: 'static,
        Env: Clone,
    {
        self.bind(move |_| next.clone())
    }

    /// Combines the results of two readers run against the same environment.
    pub fn map2<B, C, F>(self, other: Reader<Env, B>, function: F) -> Reader<Env, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        Env: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |environment: Env| {
            let left = first(environment.clone());
            function(left, second(environment))
        })
    }

    /// A reader that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(Env) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against a modified environment.
    ///
    /// The modification is scoped to `computation`: readers composed around
    /// the result still receive the unmodified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::effect::Reader;
    ///
    /// let doubled = Reader::local(|env: i32| env * 2, Reader::ask());
    /// let both = doubled.map2(Reader::ask(), |inner, outer| (inner, outer));
    /// assert_eq!(both.run(5), (10, 5));
    /// ```
    pub fn local<F>(modify: F, computation: Self) -> Self
    where
        F: Fn(Env) -> Env + 'static,
    {
        let inner = computation.run_function;
        Self::new(move |environment| inner(modify(environment)))
    }
}

impl<Env> Reader<Env, Env>
where
    Env: 'static,
{
    /// A reader whose result is the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<Env, A> Clone for Reader<Env, A>
where
    Env: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<Env, A> fmt::Debug for Reader<Env, A>
where
    Env: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);
