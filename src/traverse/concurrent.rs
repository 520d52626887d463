//! Asynchronous traversal: sequential short-circuiting and parallel fan-out.
//!
//! The two regimes are separate functions:
//!
//! - `*_async` awaits one element at a time, in order, and stops at the
//!   first failure without creating the remaining futures.
//! - `*_parallel` creates every future up front, polls them concurrently on
//!   the current task with [`join_all`], and only then folds the outputs in
//!   index order. The failure reported is the one with the lowest index, not
//!   the one that completed first.

use std::future::Future;

use futures::future::join_all;

/// Awaits `function` for each item in order, collecting the `Some` values.
///
/// Returns `None` at the first element that produces `None`; no future is
/// created for later elements.
///
/// # Examples
///
/// ```rust
/// use fptk::traverse::traverse_option_async;
///
/// # futures::executor::block_on(async {
/// let found = traverse_option_async(vec![1, 2, 3], |n| async move { Some(n * 10) }).await;
/// assert_eq!(found, Some(vec![10, 20, 30]));
/// # });
/// ```
pub async fn traverse_option_async<A, B, I, F, Fut>(items: I, mut function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Option<B>>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if let Some(value) = function(item).await {
            collected.push(value);
        } else {
            tracing::trace!(index, "async option traversal short-circuited");
            return None;
        }
    }
    Some(collected)
}

/// Awaits `function` for each item in order, collecting the `Ok` values.
///
/// # Errors
///
/// Returns the first error; no future is created for later elements.
pub async fn traverse_result_async<A, B, E, I, F, Fut>(
    items: I,
    mut function: F,
) -> Result<Vec<B>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<B, E>>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match function(item).await {
            Ok(value) => collected.push(value),
            Err(error) => {
                tracing::trace!(index, "async result traversal short-circuited");
                return Err(error);
            }
        }
    }
    Ok(collected)
}

/// Runs `function` on every item concurrently and collects the `Some` values.
///
/// Every future runs to completion. The outcome depends only on element
/// order, never on completion order.
///
/// # Examples
///
/// ```rust
/// use fptk::traverse::traverse_option_parallel;
///
/// # futures::executor::block_on(async {
/// let checked = traverse_option_parallel(vec![1, -2, 3], |n| async move { (n > 0).then_some(n) }).await;
/// assert_eq!(checked, None);
/// # });
/// ```
pub async fn traverse_option_parallel<A, B, I, F, Fut>(items: I, function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Option<B>>,
{
    let outputs = join_all(items.into_iter().map(function)).await;
    let total = outputs.len();
    let failed = outputs.iter().filter(|output| output.is_none()).count();
    let first_failure = outputs.iter().position(Option::is_none);
    tracing::debug!(total, failed, ?first_failure, "parallel option traversal completed");
    outputs.into_iter().collect()
}

/// Runs `function` on every item concurrently and collects the `Ok` values.
///
/// # Errors
///
/// Returns the error of the lowest-indexed failing element, regardless of
/// which element failed first in time.
pub async fn traverse_result_parallel<A, B, E, I, F, Fut>(
    items: I,
    function: F,
) -> Result<Vec<B>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<B, E>>,
{
    let outputs = join_all(items.into_iter().map(function)).await;
    let total = outputs.len();
    let failed = outputs.iter().filter(|output| output.is_err()).count();
    let first_failure = outputs.iter().position(Result::is_err);
    tracing::debug!(total, failed, ?first_failure, "parallel result traversal completed");
    outputs.into_iter().collect()
}
