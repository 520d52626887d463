//! Scenario tests for Reader, Writer and State.

use fptk::effect::{Reader, State, Writer};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Reader
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Config {
    host: String,
    port: u16,
    verbose: bool,
}

fn sample_config() -> Config {
    Config {
        host: "localhost".to_string(),
        port: 8080,
        verbose: false,
    }
}

#[rstest]
fn test_reader_builds_value_from_environment() {
    let address = Reader::asks(|config: Config| config.host)
        .map2(Reader::asks(|config: Config| config.port), |host, port| format!("{host}:{port}"));

    assert_eq!(address.run(sample_config()), "localhost:8080");
}

#[rstest]
fn test_reader_local_only_affects_inner_computation() {
    let verbosity = Reader::asks(|config: Config| config.verbose);
    let forced = Reader::local(
        |config: Config| Config {
            verbose: true,
            ..config
        },
        verbosity.clone(),
    );

    assert!(!verbosity.run(sample_config()));
    assert!(forced.run(sample_config()));
}

#[rstest]
fn test_reader_bind_sees_same_environment() {
    let program = Reader::asks(|config: Config| config.port)
        .bind(|port| Reader::asks(move |config: Config| format!("{}:{port}", config.host)));

    assert_eq!(program.run(sample_config()), "localhost:8080");
}

#[rstest]
fn test_reader_then_discards_first_value() {
    let program = Reader::pure(1).then(Reader::asks(|config: Config| config.port));
    assert_eq!(program.run(sample_config()), 8080);
}

#[rstest]
fn test_reader_is_reusable() {
    let port = Reader::asks(|config: Config| config.port);
    let other = Config {
        port: 9090,
        ..sample_config()
    };

    assert_eq!(port.run(sample_config()), 8080);
    assert_eq!(port.run(other), 9090);
}

// =============================================================================
// Writer
// =============================================================================

fn audit(step: &str, value: i32) -> Writer<Vec<String>, i32> {
    Writer::new(value, vec![format!("{step}: {value}")])
}

#[rstest]
fn test_writer_bind_concatenates_logs_in_order() {
    let program = audit("start", 2)
        .bind(|x| audit("square", x * x))
        .bind(|x| audit("negate", -x));

    let (value, log) = program.run();
    assert_eq!(value, -4);
    assert_eq!(log, vec!["start: 2", "square: 4", "negate: -4"]);
}

#[rstest]
fn test_writer_unit_has_empty_log() {
    let unit: Writer<String, i32> = Writer::unit(3);
    assert_eq!(unit.as_parts(), (&3, &String::new()));
}

#[rstest]
fn test_writer_tell_then_value() {
    let program = Writer::tell(vec!["loaded".to_string()]).then(audit("count", 10));
    assert_eq!(program.exec(), vec!["loaded", "count: 10"]);
}

#[rstest]
fn test_writer_censor_rewrites_log_only() {
    let censored = Writer::censor(
        |log: Vec<String>| log.into_iter().map(|line| line.to_uppercase()).collect(),
        audit("secret", 7),
    );
    let (value, log) = censored.run();
    assert_eq!(value, 7);
    assert_eq!(log, vec!["SECRET: 7"]);
}

#[rstest]
fn test_writer_listen_keeps_outer_log() {
    let (pair, log) = Writer::listen(audit("seen", 1)).run();
    assert_eq!(pair, (1, vec!["seen: 1".to_string()]));
    assert_eq!(log, vec!["seen: 1"]);
}

#[rstest]
fn test_writer_map2_combines_values_and_logs() {
    let sum = audit("a", 1).map2(audit("b", 2), |a, b| a + b);
    assert_eq!(sum.eval(), 3);
    assert_eq!(audit("a", 1).map2(audit("b", 2), |a, b| a + b).exec(), vec!["a: 1", "b: 2"]);
}

// =============================================================================
// State
// =============================================================================

fn push(item: i32) -> State<Vec<i32>, ()> {
    State::modify(move |mut stack: Vec<i32>| {
        stack.push(item);
        stack
    })
}

fn pop() -> State<Vec<i32>, Option<i32>> {
    State::new(|mut stack: Vec<i32>| {
        let top = stack.pop();
        (top, stack)
    })
}

#[rstest]
fn test_state_stack_machine() {
    let program = push(1)
        .then(push(2))
        .then(push(3))
        .then(pop())
        .bind(|first| pop().map(move |second| first.zip(second)));

    let (popped, remaining) = program.run(Vec::new());
    assert_eq!(popped, Some((3, 2)));
    assert_eq!(remaining, vec![1]);
}

#[rstest]
fn test_state_gets_projects_without_changing_state() {
    let depth = State::gets(|stack: &Vec<i32>| stack.len());
    assert_eq!(depth.run(vec![4, 5]), (2, vec![4, 5]));
}

#[rstest]
fn test_state_eval_and_exec() {
    let program = push(9).then(State::get());
    assert_eq!(program.eval(vec![1]), vec![1, 9]);
    assert_eq!(program.exec(Vec::new()), vec![9]);
}

#[rstest]
fn test_state_map2_threads_state_left_to_right() {
    let counter = || State::new(|count: u32| (count, count + 1));
    let pair = counter().map2(counter(), |a, b| (a, b));
    assert_eq!(pair.run(10), ((10, 11), 12));
}

#[rstest]
fn test_state_transition_runs_once_per_run() {
    let calls = Rc::new(Cell::new(0));
    let observed = Rc::clone(&calls);
    let tick = State::new(move |count: u32| {
        observed.set(observed.get() + 1);
        (count, count + 1)
    });

    let program = tick.map(|value| value * 10).bind(State::pure);
    assert_eq!(program.run(0), (0, 1));
    assert_eq!(calls.get(), 1);
}
