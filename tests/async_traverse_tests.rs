#![cfg(feature = "async")]
//! Tests for asynchronous traversal.
//!
//! Parallel variants are driven on a paused tokio clock so that element
//! completion order can be forced independently of element index.

use fptk::traverse::{
    traverse_option_async, traverse_option_parallel, traverse_result_async,
    traverse_result_parallel,
};
use std::cell::RefCell;
use std::time::Duration;
use tokio::time::{Instant, sleep};

async fn delayed<T>(milliseconds: u64, value: T) -> T {
    sleep(Duration::from_millis(milliseconds)).await;
    value
}

// =============================================================================
// Sequential async traversal
// =============================================================================

#[tokio::test]
async fn test_traverse_result_async_collects_in_order() {
    let result =
        traverse_result_async(vec![3, 1, 2], |n| delayed(n * 10, Ok::<_, String>(n))).await;
    assert_eq!(result, Ok(vec![3, 1, 2]));
}

#[tokio::test]
async fn test_traverse_result_async_stops_at_first_error() {
    let started = RefCell::new(Vec::new());
    let result = traverse_result_async(0..6, |n| {
        started.borrow_mut().push(n);
        async move { if n == 2 { Err(format!("item {n}")) } else { Ok(n) } }
    })
    .await;

    assert_eq!(result, Err("item 2".to_string()));
    assert_eq!(*started.borrow(), vec![0, 1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_traverse_option_async_awaits_one_element_at_a_time() {
    let begin = Instant::now();
    let result = traverse_option_async(vec![10_u64, 20, 30], |n| delayed(n, Some(n))).await;

    assert_eq!(result, Some(vec![10, 20, 30]));
    let elapsed = begin.elapsed();
    assert!(elapsed >= Duration::from_millis(60) && elapsed < Duration::from_millis(70));
}

#[tokio::test]
async fn test_traverse_result_async_on_lazy_unbounded_input() {
    let result = traverse_result_async(0_u32.., |n| async move {
        if n < 5 { Ok(n) } else { Err(format!("item {n}")) }
    })
    .await;
    assert_eq!(result, Err("item 5".to_string()));
}

#[tokio::test]
async fn test_traverse_option_async_on_lazy_unbounded_input() {
    let result = traverse_option_async(1_u64.., |n| async move { (n % 4 != 0).then_some(n) }).await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_traverse_option_async_empty_input() {
    let result = traverse_option_async(Vec::<i32>::new(), |n| async move { Some(n) }).await;
    assert_eq!(result, Some(Vec::new()));
}

// =============================================================================
// Parallel traversal
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_traverse_result_parallel_runs_concurrently() {
    let begin = Instant::now();
    let result =
        traverse_result_parallel(vec![10_u64, 20, 30], |n| delayed(n, Ok::<_, String>(n * 2)))
            .await;

    assert_eq!(result, Ok(vec![20, 40, 60]));
    let elapsed = begin.elapsed();
    assert!(elapsed >= Duration::from_millis(30) && elapsed < Duration::from_millis(60));
}

#[tokio::test(start_paused = true)]
async fn test_traverse_result_parallel_reports_lowest_index_failure() {
    let completed = RefCell::new(Vec::new());
    let plan = vec![(0, 50, false), (1, 10, true), (2, 30, false), (3, 5, false)];

    let result = traverse_result_parallel(plan, |(index, delay, ok)| {
        let completed = &completed;
        async move {
            sleep(Duration::from_millis(delay)).await;
            completed.borrow_mut().push(index);
            if ok { Ok(index) } else { Err(format!("element {index}")) }
        }
    })
    .await;

    assert_eq!(*completed.borrow(), vec![3, 1, 2, 0]);
    assert_eq!(result, Err("element 0".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_traverse_option_parallel_single_failure_is_order_independent() {
    for failing in 0..4_u64 {
        let result = traverse_option_parallel(0..4_u64, |index| {
            let delay = 40 - index * 10;
            async move {
                sleep(Duration::from_millis(delay)).await;
                (index != failing).then_some(index)
            }
        })
        .await;
        assert_eq!(result, None, "failing index {failing}");
    }

    let all_present =
        traverse_option_parallel(0..4_u64, |index| delayed(40 - index * 10, Some(index))).await;
    assert_eq!(all_present, Some(vec![0, 1, 2, 3]));
}

#[tokio::test]
async fn test_parallel_traversal_polls_every_element_after_failure() {
    let finished = RefCell::new(0);
    let result = traverse_result_parallel(0..5, |n| {
        let finished = &finished;
        async move {
            tokio::task::yield_now().await;
            *finished.borrow_mut() += 1;
            if n == 0 { Err(n) } else { Ok(n) }
        }
    })
    .await;

    assert_eq!(result, Err(0));
    assert_eq!(*finished.borrow(), 5);
}
