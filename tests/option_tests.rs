//! Integration tests for the `OptionExt` extension methods.

use fptk::adt::OptionExt;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and predicates
// =============================================================================

#[rstest]
#[case(Some(1), true)]
#[case(None, false)]
fn test_presence_predicates(#[case] input: Option<i32>, #[case] present: bool) {
    assert_eq!(input.is_some(), present);
    assert_eq!(input.is_none(), !present);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn test_map_then_get_or_on_some() {
    assert_eq!(Some(5).map(|x| x * 2).get_or(0), 10);
}

#[rstest]
fn test_map_then_get_or_on_none() {
    assert_eq!(None::<i32>.map(|x| x * 2).get_or(0), 0);
}

#[rstest]
fn test_bind_chains_lookups() {
    fn parse(text: &str) -> Option<i32> {
        text.parse().ok()
    }
    fn reciprocal(value: i32) -> Option<f64> {
        (value != 0).then(|| 1.0 / f64::from(value))
    }

    assert_eq!(Some("4").bind(parse).bind(reciprocal), Some(0.25));
    assert_eq!(Some("0").bind(parse).bind(reciprocal), None);
    assert_eq!(Some("x").bind(parse).bind(reciprocal), None);
}

#[rstest]
#[case(Some(4), Some(4))]
#[case(Some(3), None)]
#[case(None, None)]
fn test_filter_keeps_even(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input.filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn test_flatten_removes_one_level() {
    assert_eq!(Some(Some(3)).flatten(), Some(3));
    assert_eq!(Some(None::<i32>).flatten(), None);
}

// =============================================================================
// Alternatives and conversion
// =============================================================================

#[rstest]
fn test_or_else_producer_only_runs_for_none() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Some(9)
    };

    assert_eq!(Some(1).or_else(fallback), Some(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(None.or_else(fallback), Some(9));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_to_result_with_value_and_producer() {
    assert_eq!(Some(2).to_result("missing"), Ok(2));
    assert_eq!(None::<i32>.to_result("missing"), Err("missing"));
    assert_eq!(None::<i32>.to_result_with(|| "built".to_string()), Err("built".to_string()));
}

#[rstest]
fn test_match_with_eliminates_both_variants() {
    let describe =
        |input: Option<u8>| input.match_with(|n| format!("got {n}"), || "nothing".to_string());
    assert_eq!(describe(Some(7)), "got 7");
    assert_eq!(describe(None), "nothing");
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
#[case(Some(1), Some("a"), Some((1, "a")))]
#[case(Some(1), None, None)]
#[case(None, Some("a"), None)]
fn test_zip(
    #[case] left: Option<i32>,
    #[case] right: Option<&str>,
    #[case] expected: Option<(i32, &str)>,
) {
    assert_eq!(left.zip(right), expected);
}

#[rstest]
fn test_map2_combines_two_values() {
    assert_eq!(Some(3).map2(Some(4), |a, b| a * b), Some(12));
    assert_eq!(Some(3).map2(None::<i32>, |a, b| a * b), None);
}

#[rstest]
fn test_iter_yields_zero_or_one_element() {
    let present = Some(8);
    assert_eq!(present.iter().count(), 1);
    assert_eq!(present.iter().copied().collect::<Vec<_>>(), vec![8]);
    assert_eq!(None::<i32>.into_iter().count(), 0);
}

// =============================================================================
// Asynchronous
// =============================================================================

#[tokio::test]
async fn test_map_async_and_bind_async() {
    let doubled = Some(5).map_async(|n| async move { n * 2 }).await;
    assert_eq!(doubled, Some(10));

    let halved = Some(5)
        .bind_async(|n| async move { (n % 2 == 0).then_some(n / 2) })
        .await;
    assert_eq!(halved, None);
}

#[tokio::test]
async fn test_map_async_on_none_never_calls_function() {
    let calls = Cell::new(0);
    let result = None::<i32>
        .map_async(|n| {
            calls.set(calls.get() + 1);
            async move { n }
        })
        .await;
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}
