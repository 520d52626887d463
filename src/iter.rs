//! Lazy iterator helpers.
//!
//! Both adapters pull from their source only as far as needed to produce the
//! next group, so they work on unbounded iterators.

/// Splits `items` into consecutive groups of `size` elements.
///
/// The last group holds whatever remains and may be shorter. A `size` of zero
/// yields nothing.
///
/// # Examples
///
/// ```rust
/// use fptk::iter::chunk;
///
/// let chunks: Vec<Vec<i32>> = chunk(1..=7, 3).collect();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
///
/// let first_two: Vec<Vec<u64>> = chunk(0.., 2).take(2).collect();
/// assert_eq!(first_two, vec![vec![0, 1], vec![2, 3]]);
/// ```
pub fn chunk<I>(items: I, size: usize) -> impl Iterator<Item = Vec<I::Item>>
where
    I: IntoIterator,
{
    let mut source = items.into_iter();
    std::iter::from_fn(move || {
        if size == 0 {
            return None;
        }
        let group: Vec<I::Item> = source.by_ref().take(size).collect();
        (!group.is_empty()).then_some(group)
    })
}

/// Groups runs of consecutive items that share a key.
///
/// Items with equal keys that are not adjacent end up in separate groups.
/// Sort by the key first to group globally.
///
/// # Examples
///
/// ```rust
/// use fptk::iter::group_by_key;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "apricot"];
/// let groups: Vec<(char, Vec<&str>)> =
///     group_by_key(words, |word| word.chars().next().unwrap_or_default()).collect();
///
/// assert_eq!(
///     groups,
///     vec![
///         ('a', vec!["apple", "avocado"]),
///         ('b', vec!["banana", "blueberry"]),
///         ('a', vec!["apricot"]),
///     ]
/// );
/// ```
pub fn group_by_key<I, K, F>(items: I, mut key: F) -> impl Iterator<Item = (K, Vec<I::Item>)>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    let mut source = items.into_iter().peekable();
    std::iter::from_fn(move || {
        let first = source.next()?;
        let group_key = key(&first);
        let mut group = vec![first];
        while let Some(item) = source.next_if(|next| key(next) == group_key) {
            group.push(item);
        }
        Some((group_key, group))
    })
}
