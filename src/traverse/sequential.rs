//! Fail-fast traversal over synchronous iterators.

/// Turns a sequence of options into an option of a `Vec`.
///
/// Stops consuming `items` at the first `None`.
///
/// # Examples
///
/// ```rust
/// use fptk::traverse::sequence_option;
///
/// assert_eq!(sequence_option(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence_option(vec![Some(1), None]), None);
/// assert_eq!(sequence_option(Vec::<Option<i32>>::new()), Some(vec![]));
/// ```
pub fn sequence_option<A, I>(items: I) -> Option<Vec<A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    traverse_option(items, |item| item)
}

/// Applies `function` to every item, collecting the `Some` values.
///
/// Returns `None` as soon as `function` does; later items are not visited.
///
/// # Examples
///
/// ```rust
/// use fptk::traverse::traverse_option;
///
/// let halves = traverse_option(vec![2, 4, 6], |n| (n % 2 == 0).then_some(n / 2));
/// assert_eq!(halves, Some(vec![1, 2, 3]));
/// ```
pub fn traverse_option<A, B, I, F>(items: I, mut function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if let Some(value) = function(item) {
            collected.push(value);
        } else {
            tracing::trace!(index, "option traversal short-circuited");
            return None;
        }
    }
    Some(collected)
}

/// Turns a sequence of results into a result of a `Vec`.
///
/// # Errors
///
/// Returns the first `Err` in iteration order; later items are not consumed.
///
/// # Examples
///
/// ```rust
/// use fptk::traverse::sequence_result;
///
/// assert_eq!(sequence_result(vec![Ok::<_, &str>(1), Ok(2)]), Ok(vec![1, 2]));
/// assert_eq!(sequence_result(vec![Ok(1), Err("e")]), Err("e"));
/// ```
pub fn sequence_result<A, E, I>(items: I) -> Result<Vec<A>, E>
where
    I: IntoIterator<Item = Result<A, E>>,
{
    traverse_result(items, |item| item)
}

/// Applies `function` to every item, collecting the `Ok` values.
///
/// # Errors
///
/// Returns the first error `function` produces; later items are not visited.
pub fn traverse_result<A, B, E, I, F>(items: I, mut function: F) -> Result<Vec<B>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Result<B, E>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match function(item) {
            Ok(value) => collected.push(value),
            Err(error) => {
                tracing::trace!(index, "result traversal short-circuited");
                return Err(error);
            }
        }
    }
    Ok(collected)
}
