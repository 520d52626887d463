//! Small function-shaping helpers.

/// Returns its argument unchanged.
///
/// Handy as the neutral element of composition and as the "keep it" branch
/// of `bimap`/`match_with`-style eliminators.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::identity;
///
/// assert_eq!(identity(5), 5);
/// assert_eq!(Some(3).map(identity), Some(3));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its argument and returns a clone of `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions: `compose(f, g)(x) == f(g(x))`.
///
/// For more than two functions use the [`compose!`](crate::compose!) macro.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::compose;
///
/// let length_of_trimmed = compose(str::len, str::trim);
/// assert_eq!(length_of_trimmed("  four  "), 4);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Swaps the two arguments of a binary function.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::flip;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let divide_into = flip(divide);
/// assert_eq!(divide_into(2.0, 10.0), 5.0);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Runs `effect` on a borrowed value, then passes the value through unchanged.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::tap;
/// use fptk::pipe;
///
/// let mut seen = Vec::new();
/// let result = pipe!(4, |x| x * 2, tap(|x: &i32| seen.push(*x)), |x| x + 1);
/// assert_eq!(result, 9);
/// assert_eq!(seen, vec![8]);
/// ```
#[inline]
pub fn tap<T, F>(mut effect: F) -> impl FnMut(T) -> T
where
    F: FnMut(&T),
{
    move |value| {
        effect(&value);
        value
    }
}
