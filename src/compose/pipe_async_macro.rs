//! The `pipe_async!` macro: an asynchronous pipeline.
//!
//! Steps are written with an operator prefix:
//!
//! | Step | Meaning |
//! |------|---------|
//! | `=> f` | apply a plain function, `value = f(value)` |
//! | `=>> f` | apply a function returning a future and await it, `value = f(value).await` |
//!
//! The macro evaluates to a future; nothing runs until it is awaited. Steps
//! then run strictly left to right, and only `=>>` steps suspend.

/// Builds a future that threads a value through plain and asynchronous steps.
///
/// # Examples
///
/// ```rust
/// use fptk::pipe_async;
///
/// async fn fetch_bonus(level: u32) -> u32 {
///     level * 10
/// }
///
/// # futures::executor::block_on(async {
/// let score = pipe_async!(
///     4,
///     => |level: u32| level + 1,
///     =>> fetch_bonus,
///     => |bonus: u32| bonus * 2,
/// )
/// .await;
/// assert_eq!(score, 100);
/// # });
/// ```
#[macro_export]
macro_rules! pipe_async {
    (@step $piped:ident; $(,)?) => {
        $piped
    };
    (@step $piped:ident; =>> $function:expr $(, $($rest:tt)*)?) => {{
        let $piped = ($function)($piped).await;
        $crate::pipe_async!(@step $piped; $($($rest)*)?)
    }};
    (@step $piped:ident; => $function:expr $(, $($rest:tt)*)?) => {{
        let $piped = ($function)($piped);
        $crate::pipe_async!(@step $piped; $($($rest)*)?)
    }};
    ($value:expr $(, $($steps:tt)*)?) => {
        async move {
            let piped = $value;
            $crate::pipe_async!(@step piped; $($($steps)*)?)
        }
    };
}
