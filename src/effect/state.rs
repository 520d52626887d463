//! State - computations threading a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Composed states pass
//! the state produced by one step into the next. Each [`State::run`] calls
//! every wrapped transition exactly once, however the state was built with
//! `map`, `bind` or `map2`.
//!
//! # Examples
//!
//! ```rust
//! use fptk::effect::State;
//!
//! let next_id = State::new(|counter: u32| (counter, counter + 1));
//!
//! let two_ids = next_id.clone().map2(next_id, |first, second| (first, second));
//! assert_eq!(two_ids.run(7), ((7, 8), 9));
//! ```

use std::fmt;
use std::rc::Rc;

/// A stateful computation from `S` to a result `A` and a new `S`.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a state transition.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial`, returning the result and final state.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.run_function)(initial)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// A computation that yields `value` and leaves the state untouched.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        State::new(move |state| {
            let (value, next_state) = inner(state);
            (function(value), next_state)
        })
    }

    /// Chains a computation chosen from this computation's result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fptk::effect::State;
    ///
    /// let push = |item: i32| State::modify(move |mut stack: Vec<i32>| {
    ///     stack.push(item);
    ///     stack
    /// });
    /// let program = push(1).bind(move |()| push(2)).then(State::gets(|stack: &Vec<i32>| stack.len()));
    /// assert_eq!(program.run(Vec::new()), (2, vec![1, 2]));
    /// ```
    pub fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        State::new(move |state| {
            let (value, intermediate) = inner(state);
            function(value).run(intermediate)
        })
    }

    /// Runs `next` after this computation, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Runs both computations in sequence and combines their results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        State::new(move |state| {
            let (left, intermediate) = first(state);
            let (right, last) = second(intermediate);
            (function(left, right), last)
        })
    }

    /// A computation that reads `projection(&state)` without changing the state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// A computation whose result is the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state with `replacement`.
    pub fn put(replacement: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), replacement.clone()))
    }

    /// Applies `modify` to the state.
    pub fn modify<F>(modify: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modify(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
