//! Left and right folds, and seedless reduction.

/// Left fold: `f(f(f(initial, x1), x2), x3)`.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::foldl;
///
/// assert_eq!(foldl(|acc, x| acc - x, 10, [1, 2, 3]), 4);
/// ```
pub fn foldl<A, B, I, F>(function: F, initial: B, items: I) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(B, A) -> B,
{
    items.into_iter().fold(initial, function)
}

/// Right fold: `f(x1, f(x2, f(x3, initial)))`.
///
/// The whole input is collected before folding, so `items` must be finite.
///
/// # Examples
///
/// ```rust
/// use fptk::compose::foldr;
///
/// let joined = foldr(|x, acc| format!("{x}-{acc}"), "end".to_string(), ["a", "b", "c"]);
/// assert_eq!(joined, "a-b-c-end");
/// ```
pub fn foldr<A, B, I, F>(mut function: F, initial: B, items: I) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, B) -> B,
{
    let collected: Vec<A> = items.into_iter().collect();
    collected
        .into_iter()
        .rev()
        .fold(initial, |accumulator, item| function(item, accumulator))
}

/// Folds without a seed, using the first element as the starting value.
///
/// Returns `None` for empty input.
pub fn reduce<A, I, F>(function: F, items: I) -> Option<A>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, A) -> A,
{
    items.into_iter().reduce(function)
}
