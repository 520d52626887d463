//! Error types raised by the escape hatches of this crate.
//!
//! Ordinary failures are values (`None`, `Err`, `Either::Left`). The types in
//! this module only show up when a caller deliberately leaves that world:
//!
//! - [`UnwrappedErr`] renders the panic message of
//!   [`ResultExt::unwrap_or_raise`](crate::adt::ResultExt::unwrap_or_raise) and
//!   [`ResultExt::expect_or_raise`](crate::adt::ResultExt::expect_or_raise).
//! - [`CaughtPanic`] is the error produced by
//!   [`try_catch`](crate::compose::try_catch) when the wrapped computation
//!   panics.

use std::any::Any;
use std::fmt;

use thiserror::Error;

pub(crate) const DEFAULT_UNWRAP_CONTEXT: &str = "called `unwrap_or_raise` on an `Err` value";

/// A `Result` was unwrapped while holding an error.
///
/// Its `Display` text is the message the unwrap panics with, so the error
/// shows up in the default panic output and in [`CaughtPanic::message`].
///
/// # Examples
///
/// ```rust
/// use fptk::error::UnwrappedErr;
///
/// let error = UnwrappedErr::new("boom", "loading config");
/// assert_eq!(error.to_string(), "loading config: \"boom\"");
/// assert_eq!(error.into_error(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {error:?}")]
pub struct UnwrappedErr<E: fmt::Debug> {
    error: E,
    context: String,
}

impl<E: fmt::Debug> UnwrappedErr<E> {
    /// Creates a new `UnwrappedErr` from an error value and a message.
    pub fn new(error: E, context: impl Into<String>) -> Self {
        Self {
            error,
            context: context.into(),
        }
    }

    /// Returns a reference to the wrapped error value.
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Returns the message describing where the unwrap happened.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Consumes the condition and returns the wrapped error value.
    pub fn into_error(self) -> E {
        self.error
    }
}

/// A panic converted into a value by [`try_catch`](crate::compose::try_catch).
///
/// `message` is the rendered panic message (`&str` and `String` payloads are
/// rendered as-is, typed payloads that implement nothing useful fall back to a
/// placeholder). The original payload is retained and can be recovered with
/// [`CaughtPanic::downcast`].
///
/// # Examples
///
/// ```rust
/// use fptk::compose::attempt;
///
/// let caught = attempt(|| -> i32 { panic!("exploded") }).unwrap_err();
/// assert_eq!(caught.message(), "exploded");
/// ```
#[derive(Error)]
#[error("computation panicked: {message}")]
pub struct CaughtPanic {
    message: String,
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Self { message, payload }
    }

    /// Returns the rendered panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Recovers the typed panic payload, or gives `self` back if it is not a `T`.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the payload has a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::compose::attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Shutdown(u8);
    ///
    /// let caught = attempt(|| -> i32 { std::panic::panic_any(Shutdown(3)) }).unwrap_err();
    /// assert_eq!(caught.downcast::<Shutdown>().ok(), Some(Shutdown(3)));
    /// ```
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Self { message, payload } = self;
        match payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self { message, payload }),
        }
    }

    /// Re-raises the original panic.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaughtPanic")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
