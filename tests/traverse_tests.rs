//! Integration tests for synchronous traverse and sequence.

use fptk::traverse::{sequence_option, sequence_result, traverse_option, traverse_result};
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// sequence
// =============================================================================

#[rstest]
#[case(vec![Some(1), Some(2), Some(3)], Some(vec![1, 2, 3]))]
#[case(vec![Some(1), None, Some(3)], None)]
#[case(vec![], Some(vec![]))]
fn test_sequence_option(#[case] items: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
    assert_eq!(sequence_option(items), expected);
}

#[rstest]
#[case(vec![Ok(1), Ok(2)], Ok(vec![1, 2]))]
#[case(vec![Ok(1), Err("e")], Err("e"))]
#[case(vec![Err("first"), Ok(2), Err("second")], Err("first"))]
#[case(vec![], Ok(vec![]))]
fn test_sequence_result(
    #[case] items: Vec<Result<i32, &'static str>>,
    #[case] expected: Result<Vec<i32>, &'static str>,
) {
    assert_eq!(sequence_result(items), expected);
}

// =============================================================================
// traverse
// =============================================================================

#[rstest]
fn test_traverse_result_parses_every_item() {
    let parsed = traverse_result(["1", "22", "333"], str::parse::<u32>);
    assert_eq!(parsed, Ok(vec![1, 22, 333]));
}

#[rstest]
fn test_traverse_result_reports_first_failure() {
    let parsed = traverse_result(["1", "two", "three"], |text| {
        text.parse::<u32>().map_err(|_| format!("bad input: {text}"))
    });
    assert_eq!(parsed, Err("bad input: two".to_string()));
}

#[rstest]
fn test_traverse_option_stops_consuming_after_none() {
    let visited = RefCell::new(Vec::new());
    let result = traverse_option(1..=5, |n| {
        visited.borrow_mut().push(n);
        (n < 3).then_some(n)
    });

    assert_eq!(result, None);
    assert_eq!(*visited.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn test_traverse_result_on_lazy_unbounded_input() {
    let result = traverse_result(1_u64.., |n| if n < 4 { Ok(n) } else { Err(n) });
    assert_eq!(result, Err(4));
}

#[rstest]
fn test_sequence_option_on_lazy_unbounded_input() {
    let items = (0_u32..).map(|n| if n < 3 { Some(n) } else { None });
    assert_eq!(sequence_option(items), None);
}

#[rstest]
fn test_sequence_result_on_repeating_input() {
    let items = std::iter::repeat(Ok(1)).take(2).chain(std::iter::repeat(Err("stop")));
    assert_eq!(sequence_result(items), Err::<Vec<i32>, _>("stop"));
}

#[rstest]
fn test_traverse_option_keeps_order() {
    let lookup = |key: &str| match key {
        "a" => Some(1),
        "b" => Some(2),
        _ => None,
    };
    assert_eq!(traverse_option(["b", "a", "b"], lookup), Some(vec![2, 1, 2]));
}
