//! Error-accumulating validation.
//!
//! [`validate_all`] runs every check instead of stopping at the first
//! failure, and reports all failures together as a [`NonEmptyList`].

use crate::adt::NonEmptyList;

/// Runs each check in order against `value`, collecting every failure.
///
/// A check receives a clone of the current value. When it succeeds its
/// output becomes the current value for the following checks, so checks can
/// normalise as well as validate. When it fails its error is recorded and the
/// current value is left as it was.
///
/// With no checks this returns `Ok(value)`.
///
/// # Errors
///
/// Returns every recorded error, in check order, when at least one check
/// fails.
///
/// # Examples
///
/// ```rust
/// use fptk::validate::validate_all;
///
/// fn trimmed(name: String) -> Result<String, &'static str> {
///     Ok(name.trim().to_string())
/// }
/// fn not_empty(name: String) -> Result<String, &'static str> {
///     if name.is_empty() { Err("empty") } else { Ok(name) }
/// }
/// fn short(name: String) -> Result<String, &'static str> {
///     if name.len() > 8 { Err("too long") } else { Ok(name) }
/// }
///
/// let checks = [trimmed, not_empty, short];
/// assert_eq!(validate_all(checks, "  alice ".to_string()), Ok("alice".to_string()));
///
/// let errors = validate_all(checks, "   ".to_string()).unwrap_err();
/// assert_eq!(errors.into_vec(), vec!["empty"]);
/// ```
pub fn validate_all<T, E, I, F>(checks: I, value: T) -> Result<T, NonEmptyList<E>>
where
    T: Clone,
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Result<T, E>,
{
    let mut current = value;
    let mut errors: Vec<E> = Vec::new();

    for (index, check) in checks.into_iter().enumerate() {
        match check(current.clone()) {
            Ok(next) => current = next,
            Err(error) => {
                tracing::trace!(index, "validation check failed");
                errors.push(error);
            }
        }
    }

    NonEmptyList::from_vec(errors).map_or(Ok(current), Err)
}
