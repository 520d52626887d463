//! Fixed-arity currying with any grouping of arguments.
//!
//! [`curry2`], [`curry3`] and [`curry4`] wrap a function in an accumulator
//! that remembers the arguments supplied so far. Each call to
//! [`Supply::apply`] takes a tuple with one or more of the *next* arguments.
//! While arguments are missing the result is another accumulator; once the
//! arity is reached the wrapped function is called and its result returned.
//!
//! Which grouping is accepted is decided at compile time: supplying too many
//! arguments, or arguments of the wrong type, does not type-check.
//!
//! # Examples
//!
//! ```rust
//! use fptk::compose::{curry3, Supply};
//!
//! fn add3(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! assert_eq!(curry3(add3).apply((1,)).apply((2,)).apply((3,)), 6);
//! assert_eq!(curry3(add3).apply((1, 2)).apply((3,)), 6);
//! assert_eq!(curry3(add3).apply((1,)).apply((2, 3)), 6);
//! assert_eq!(curry3(add3).apply((1, 2, 3)), 6);
//! ```
//!
//! Partially applied accumulators are `Clone` when the function and the held
//! arguments are, so one prefix can be reused:
//!
//! ```rust
//! use fptk::compose::{curry2, Supply};
//!
//! let greet = curry2(|greeting: &str, name: &str| format!("{greeting}, {name}!"));
//! let hello = greet.apply(("Hello",));
//! assert_eq!(hello.clone().apply(("Ada",)), "Hello, Ada!");
//! assert_eq!(hello.apply(("Grace",)), "Hello, Grace!");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Supplying a group of arguments to a curried function.
pub trait Supply<Args> {
    /// Another accumulator, or the function's result once every argument is known.
    type Output;

    /// Supplies the next arguments, in order.
    fn apply(self, arguments: Args) -> Self::Output;
}

macro_rules! define_curry {
    ($(#[$attribute:meta])* $name:ident, $constructor:ident, [$($parameter:ident),+]) => {
        $(#[$attribute])*
        pub struct $name<F, $($parameter),+, Held = ()> {
            function: F,
            held: Held,
            marker: PhantomData<fn($($parameter),+)>,
        }

        #[doc = concat!("Wraps `function` in a [`", stringify!($name), "`] holding no arguments yet.")]
        pub fn $constructor<F, $($parameter),+, R>(function: F) -> $name<F, $($parameter),+>
        where
            F: FnOnce($($parameter),+) -> R,
        {
            $name {
                function,
                held: (),
                marker: PhantomData,
            }
        }

        impl<F: Clone, $($parameter),+, Held: Clone> Clone for $name<F, $($parameter),+, Held> {
            fn clone(&self) -> Self {
                Self {
                    function: self.function.clone(),
                    held: self.held.clone(),
                    marker: PhantomData,
                }
            }
        }

        impl<F, $($parameter),+, Held: fmt::Debug> fmt::Debug for $name<F, $($parameter),+, Held> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("held", &self.held)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// Generates one `Supply` impl: the accumulator holding `held` accepts `given`.
///
/// `partial` arms return a wider accumulator, `complete` arms call the function.
macro_rules! supply {
    (partial $name:ident [$($parameter:ident),+] held ($($held:ident : $Held:ident),*) given ($($given:ident : $Given:ident),+)) => {
        impl<F, $($parameter),+> Supply<($($Given,)+)> for $name<F, $($parameter),+, ($($Held,)*)> {
            type Output = $name<F, $($parameter),+, ($($Held,)* $($Given,)+)>;

            fn apply(self, ($($given,)+): ($($Given,)+)) -> Self::Output {
                let ($($held,)*) = self.held;
                $name {
                    function: self.function,
                    held: ($($held,)* $($given,)+),
                    marker: PhantomData,
                }
            }
        }
    };
    (complete $name:ident [$($parameter:ident),+] held ($($held:ident : $Held:ident),*) given ($($given:ident : $Given:ident),+)) => {
        impl<F, R, $($parameter),+> Supply<($($Given,)+)> for $name<F, $($parameter),+, ($($Held,)*)>
        where
            F: FnOnce($($parameter),+) -> R,
        {
            type Output = R;

            fn apply(self, ($($given,)+): ($($Given,)+)) -> R {
                let ($($held,)*) = self.held;
                (self.function)($($held,)* $($given),+)
            }
        }
    };
}

define_curry!(
    /// Accumulator for a curried two-argument function. See [`curry2`].
    Curry2, curry2, [A, B]
);
define_curry!(
    /// Accumulator for a curried three-argument function. See [`curry3`].
    Curry3, curry3, [A, B, C]
);
define_curry!(
    /// Accumulator for a curried four-argument function. See [`curry4`].
    Curry4, curry4, [A, B, C, D]
);

supply!(partial Curry2 [A, B] held () given (a: A));
supply!(complete Curry2 [A, B] held () given (a: A, b: B));
supply!(complete Curry2 [A, B] held (a: A) given (b: B));

supply!(partial Curry3 [A, B, C] held () given (a: A));
supply!(partial Curry3 [A, B, C] held () given (a: A, b: B));
supply!(complete Curry3 [A, B, C] held () given (a: A, b: B, c: C));
supply!(partial Curry3 [A, B, C] held (a: A) given (b: B));
supply!(complete Curry3 [A, B, C] held (a: A) given (b: B, c: C));
supply!(complete Curry3 [A, B, C] held (a: A, b: B) given (c: C));

supply!(partial Curry4 [A, B, C, D] held () given (a: A));
supply!(partial Curry4 [A, B, C, D] held () given (a: A, b: B));
supply!(partial Curry4 [A, B, C, D] held () given (a: A, b: B, c: C));
supply!(complete Curry4 [A, B, C, D] held () given (a: A, b: B, c: C, d: D));
supply!(partial Curry4 [A, B, C, D] held (a: A) given (b: B));
supply!(partial Curry4 [A, B, C, D] held (a: A) given (b: B, c: C));
supply!(complete Curry4 [A, B, C, D] held (a: A) given (b: B, c: C, d: D));
supply!(partial Curry4 [A, B, C, D] held (a: A, b: B) given (c: C));
supply!(complete Curry4 [A, B, C, D] held (a: A, b: B) given (c: C, d: D));
supply!(complete Curry4 [A, B, C, D] held (a: A, b: B, c: C) given (d: D));

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add3(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    fn describe(name: &str, age: u8, city: &str, active: bool) -> String {
        format!("{name}/{age}/{city}/{active}")
    }

    #[rstest]
    fn curry2_one_at_a_time_and_together() {
        let subtract = |a: i32, b: i32| a - b;
        assert_eq!(curry2(subtract).apply((10,)).apply((3,)), 7);
        assert_eq!(curry2(subtract).apply((10, 3)), 7);
    }

    #[rstest]
    fn curry3_every_grouping_agrees() {
        let expected = 6;
        assert_eq!(curry3(add3).apply((1,)).apply((2,)).apply((3,)), expected);
        assert_eq!(curry3(add3).apply((1, 2)).apply((3,)), expected);
        assert_eq!(curry3(add3).apply((1,)).apply((2, 3)), expected);
        assert_eq!(curry3(add3).apply((1, 2, 3)), expected);
    }

    #[rstest]
    fn curry4_mixed_types() {
        let expected = "ada/36/london/true";
        assert_eq!(curry4(describe).apply(("ada", 36, "london", true)), expected);
        assert_eq!(curry4(describe).apply(("ada",)).apply((36, "london")).apply((true,)), expected);
        assert_eq!(curry4(describe).apply(("ada", 36)).apply(("london", true)), expected);
        assert_eq!(curry4(describe).apply(("ada", 36, "london")).apply((true,)), expected);
    }

    #[rstest]
    fn function_runs_only_when_arity_is_reached() {
        let calls = std::cell::Cell::new(0);
        let counted = |a: i32, b: i32| {
            calls.set(calls.get() + 1);
            a * b
        };
        let partial = curry2(counted).apply((6,));
        assert_eq!(calls.get(), 0);
        assert_eq!(partial.apply((7,)), 42);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn owned_arguments_are_moved_not_cloned() {
        #[derive(Debug, PartialEq)]
        struct Token(u32);

        let join = |left: Token, right: Token| Token(left.0 * 10 + right.0);
        assert_eq!(curry2(join).apply((Token(4),)).apply((Token(2),)), Token(42));
    }

    #[rstest]
    fn debug_shows_held_arguments() {
        let partial = curry3(add3).apply((1, 2));
        assert!(format!("{partial:?}").contains("(1, 2)"));
    }
}
