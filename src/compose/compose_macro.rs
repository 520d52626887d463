//! The `compose!` macro: right-to-left function composition.

/// Composes functions right to left.
///
/// `compose!(f, g, h)` is the closure `move |x| f(g(h(x)))`. With a single
/// argument the function itself is returned. For exactly two functions the
/// [`compose`](crate::compose::compose) function does the same.
///
/// # Examples
///
/// ```rust
/// use fptk::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let add_then_double = compose!(double, add_one);
/// assert_eq!(add_then_double(5), 12);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
