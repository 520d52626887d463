//! Fan-in helpers over many concurrently running fallible futures.
//!
//! Both helpers poll every future to completion on the calling task (no
//! future is cancelled when a sibling fails) and then fold the outputs in
//! their original order.
//!
//! # Examples
//!
//! ```rust
//! use fptk::gather::{gather_results, gather_results_accumulate};
//!
//! async fn fetch(outcome: Result<i32, String>) -> Result<i32, String> {
//!     outcome
//! }
//!
//! # futures::executor::block_on(async {
//! let tasks = || vec![fetch(Ok(1)), fetch(Err("boom".into())), fetch(Err("bang".into()))];
//!
//! assert_eq!(gather_results(tasks()).await, Err("boom".to_string()));
//! assert_eq!(
//!     gather_results_accumulate(tasks()).await,
//!     Err(vec!["boom".to_string(), "bang".to_string()])
//! );
//! # });
//! ```

use std::future::Future;

use futures::future::join_all;

/// Runs every task to completion and returns all values, or the first error.
///
/// "First" means lowest task index, not earliest completion.
///
/// # Errors
///
/// Returns the error of the lowest-indexed failing task.
pub async fn gather_results<T, E, I, Fut>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let outputs = join_all(tasks).await;
    let total = outputs.len();
    let failed = outputs.iter().filter(|output| output.is_err()).count();
    tracing::debug!(total, failed, "gathered results");
    outputs.into_iter().collect()
}

/// Runs every task to completion and returns all values, or every error.
///
/// Never mixes values and errors: a single failure discards all values.
///
/// # Errors
///
/// Returns all errors, in task order, when at least one task failed.
pub async fn gather_results_accumulate<T, E, I, Fut>(tasks: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let outputs = join_all(tasks).await;
    let total = outputs.len();
    let mut values = Vec::with_capacity(total);
    let mut errors = Vec::new();
    for output in outputs {
        match output {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    tracing::debug!(total, failed = errors.len(), "gathered results with accumulation");
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
