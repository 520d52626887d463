//! A value of one of two types, with no success/failure bias.
//!
//! Unlike `Result`, neither side of an [`Either`] is privileged, so it has
//! no `bind`: use `Result` when one side should short-circuit.
//!
//! # Examples
//!
//! ```rust
//! use fptk::adt::Either;
//!
//! let value: Either<i32, String> = Either::Left(5);
//! assert_eq!(value.map_left(|x| x * 2), Either::Left(10));
//!
//! let greeting: Either<i32, &str> = Either::Right("hi");
//! assert_eq!(greeting.map_left(|x| x * 2), Either::Right("hi"));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms the left value; a `Right` passes through unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(function, |value| value)
    }

    /// Transforms the right value; a `Left` passes through unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.bimap(|value| value, function)
    }

    /// Applies `on_left` to a `Left` or `on_right` to a `Right`.
    ///
    /// `bimap(identity, identity)` returns the value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::Either;
    ///
    /// let parsed: Either<&str, i32> = Either::Right(41);
    /// assert_eq!(parsed.bimap(str::len, |n| n + 1), Either::Right(42));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Eliminates both alternatives into a common type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::adt::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let rendered = value.fold(|n| format!("number {n}"), |s| format!("text {s}"));
    /// assert_eq!(rendered, "text hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the sides. `swap().swap()` is the identity.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Reads `Right` as success and `Left` as failure.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the left value.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both sides share a type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

/// `Ok` becomes `Right`, `Err` becomes `Left`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

/// `Right` becomes `Ok`, `Left` becomes `Err`.
impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync, Clone);
