//! Combinators for `Option<T>`.
//!
//! `Option` is used directly as the optional-value type: `Some(value)` or
//! the empty variant `None`. The standard library already supplies `map`,
//! `filter`, `zip`, `flatten`, `or`/`or_else`, `iter` and the predicates;
//! [`OptionExt`] adds the remaining operations under names that do not
//! shadow any inherent method.
//!
//! # Examples
//!
//! ```rust
//! use fptk::adt::OptionExt;
//!
//! assert_eq!(Some(2).map(|x| x + 1).get_or(0), 3);
//! assert_eq!(None::<i32>.map(|x| x + 1).get_or(0), 0);
//!
//! let parsed = Some("42").bind(|text| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(42));
//! ```

use std::future::Future;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
}

/// Extension methods for `Option<T>`.
///
/// The trait is sealed; it is only implemented for `Option<T>`.
pub trait OptionExt<T>: sealed::Sealed + Sized {
    /// Chains a computation that may itself produce no value.
    ///
    /// `Some(x).bind(f) == f(x)` and `None.bind(f) == None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::OptionExt;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
    /// assert_eq!(Some(8).bind(half).bind(half), Some(2));
    /// assert_eq!(Some(6).bind(half).bind(half), None);
    /// ```
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Returns the contained value or `default`.
    fn get_or(self, default: T) -> T;

    /// Converts to a `Result`, using `error` for the empty variant.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when `self` is `None`.
    fn to_result<E>(self, error: E) -> Result<T, E>;

    /// Converts to a `Result`, producing the error lazily.
    ///
    /// `error` is only called when `self` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::OptionExt;
    ///
    /// let found: Result<i32, String> = Some(1).to_result_with(|| unreachable!());
    /// assert_eq!(found, Ok(1));
    ///
    /// let missing = None::<i32>.to_result_with(|| "missing".to_string());
    /// assert_eq!(missing, Err("missing".to_string()));
    /// ```
    fn to_result_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E;

    /// Eliminates the option into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::OptionExt;
    ///
    /// let describe = |value: Option<i32>| {
    ///     value.match_with(|n| format!("got {n}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(Some(3)), "got 3");
    /// assert_eq!(describe(None), "nothing");
    /// ```
    fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U;

    /// Combines two options with `function`; `None` if either side is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::OptionExt;
    ///
    /// assert_eq!(Some(3).map2(Some(4), |a, b| a * b), Some(12));
    /// assert_eq!(Some(3).map2(None::<i32>, |a, b| a * b), None);
    /// ```
    fn map2<U, V, F>(self, other: Option<U>, function: F) -> Option<V>
    where
        F: FnOnce(T, U) -> V;

    /// Maps the value through an asynchronous function.
    ///
    /// `function` is only called (and only awaited) for `Some`; `None`
    /// resolves on the first poll.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::OptionExt;
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = Some(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Some(42));
    /// # });
    /// ```
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Chains an asynchronous computation that may produce no value.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => function(value),
            None => None,
        }
    }

    #[inline]
    fn get_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn to_result<E>(self, error: E) -> Result<T, E> {
        self.ok_or(error)
    }

    #[inline]
    fn to_result_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.ok_or_else(error)
    }

    #[inline]
    fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn map2<U, V, F>(self, other: Option<U>, function: F) -> Option<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Some(value) => Some(function(value).await),
                None => None,
            }
        }
    }

    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        async move {
            match self {
                Some(value) => function(value).await,
                None => None,
            }
        }
    }
}
