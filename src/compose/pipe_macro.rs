//! The `pipe!` macro: left-to-right function application.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates to `h(g(f(x)))`; `pipe!(x)` is `x`.
/// Each function is evaluated once, in order, and may be any expression that
/// is callable with one argument (closures, function items, [`tap`] wrappers).
///
/// [`tap`]: crate::compose::tap
///
/// # Examples
///
/// ```rust
/// use fptk::pipe;
///
/// let trimmed_length = pipe!("  hello  ", str::trim, str::len);
/// assert_eq!(trimmed_length, 5);
///
/// let result = pipe!(3, |x| x * x, |x| x * 2, |x| x + 1);
/// assert_eq!(result, 19);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($function:expr),+ $(,)?) => {{
        let piped = $value;
        $(
            let piped = ($function)(piped);
        )+
        piped
    }};
}
