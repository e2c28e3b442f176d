//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Building or composing an `IO` never executes anything; side effects
//! happen only when [`IO::run`] is called. Every call to `run` executes the
//! computation again, so an `IO` is a reusable description of an effect
//! rather than a cached result.
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .bind(|x| IO::pure(x + 1));
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use fp_primer::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let counter_clone = Rc::clone(&counter);
//!
//! let io = IO::new(move || {
//!     counter_clone.set(counter_clone.get() + 1);
//!     counter_clone.get()
//! });
//!
//! // Not executed yet
//! assert_eq!(counter.get(), 0);
//!
//! // Each run re-executes the computation
//! assert_eq!(io.run(), 1);
//! assert_eq!(io.run(), 2);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

/// A deferred, re-runnable computation producing a value of type `A`.
///
/// `IO<A>` owns a shared handle to a zero-argument computation. Cloning an
/// `IO` is cheap and shares the computation.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws, comparing the results of `run`:
///
/// 1. **Left Identity**: `IO::pure(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(IO::pure) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub struct IO<A> {
    run_io: Rc<dyn Fn() -> A>,
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value in an IO action that performs no side effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the action now and returns its result.
    ///
    /// This is the only place where the wrapped side effects happen. Each
    /// call executes the computation again. A panic inside the computation
    /// propagates to the caller.
    pub fn run(&self) -> A {
        tracing::trace!("running IO action");
        (self.run_io)()
    }

    /// Transforms the result of this action with `function`.
    ///
    /// The returned action, when run, runs this action and applies
    /// `function` to its result. Building it runs nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::pure(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }

    /// Chains this action with one computed from its result.
    ///
    /// The returned action, when run, runs this action to completion, passes
    /// the result to `function`, then runs the action it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::pure(10).bind(|x| IO::pure(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn bind<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run();
            function(a).run()
        })
    }

    /// Alias for [`IO::bind`].
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }

    /// Sequences two actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Combines the results of two actions, running `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let a = self.run();
            let b = other.run();
            function(a, b)
        })
    }

    /// Combines two actions into a tuple of their results.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Catches panics in an IO action and converts them to a recovery value.
    ///
    /// If the action panics, `handler` receives the panic message and its
    /// result is returned instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::effect::IO;
    ///
    /// let panicking = IO::new(|| -> String { panic!("oops") });
    /// let recovered = IO::catch(panicking, |message| format!("recovered: {message}"));
    /// assert_eq!(recovered.run(), "recovered: oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(|| io.run())) {
            Ok(value) => value,
            Err(panic_info) => {
                let message = if let Some(string) = panic_info.downcast_ref::<&str>() {
                    (*string).to_string()
                } else if let Some(string) = panic_info.downcast_ref::<String>() {
                    string.clone()
                } else {
                    "Unknown panic".to_string()
                };
                handler(message)
            }
        })
    }
}

/// Transforms the result of `io` with `function`.
///
/// Free-function form of [`IO::map`].
///
/// # Examples
///
/// ```rust
/// use fp_primer::effect::{self, IO};
///
/// let length = effect::map(IO::pure("four"), str::len);
/// assert_eq!(length.run(), 4);
/// ```
pub fn map<A, B, F>(io: IO<A>, function: F) -> IO<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    io.map(function)
}

/// Chains `io` with the action `function` builds from its result.
///
/// Free-function form of [`IO::bind`].
///
/// # Examples
///
/// ```rust
/// use fp_primer::effect::{self, IO};
///
/// let chained = effect::bind(IO::pure(3), |n| IO::pure("ab".repeat(n)));
/// assert_eq!(chained.run(), "ababab");
/// ```
pub fn bind<A, B, F>(io: IO<A>, function: F) -> IO<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> IO<B> + 'static,
{
    io.bind(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn test_io_pure_and_run() {
        let io = IO::pure(42);
        assert_eq!(io.run(), 42);
        assert_eq!(io.run(), 42);
    }

    #[rstest]
    fn test_io_new_and_run() {
        let io = IO::new(|| 10 + 20);
        assert_eq!(io.run(), 30);
    }

    #[rstest]
    fn test_io_map_defers_until_run() {
        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        let io = IO::new(move || {
            calls_clone.set(calls_clone.get() + 1);
            5
        })
        .map(|x| x * 2);

        assert_eq!(calls.get(), 0);
        assert_eq!(io.run(), 10);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_io_bind_sequences_effects() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first_log = Rc::clone(&log);
        let second_log = Rc::clone(&log);

        let io = IO::new(move || {
            first_log.borrow_mut().push("first");
            1
        })
        .bind(move |x| {
            let second_log = Rc::clone(&second_log);
            IO::new(move || {
                second_log.borrow_mut().push("second");
                x + 1
            })
        });

        assert!(log.borrow().is_empty());
        assert_eq!(io.run(), 2);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn test_io_and_then() {
        let io = IO::pure(10).and_then(|x| IO::pure(x + 5));
        assert_eq!(io.run(), 15);
    }

    #[rstest]
    fn test_io_then() {
        let io = IO::pure(10).then(IO::pure(20));
        assert_eq!(io.run(), 20);
    }

    #[rstest]
    fn test_io_product() {
        let io = IO::pure(10).product(IO::pure(20));
        assert_eq!(io.run(), (10, 20));
    }

    #[rstest]
    fn test_io_clone_shares_computation() {
        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        let io = IO::new(move || {
            calls_clone.set(calls_clone.get() + 1);
            calls_clone.get()
        });
        let copy = io.clone();

        assert_eq!(io.run(), 1);
        assert_eq!(copy.run(), 2);
    }

    #[rstest]
    fn test_io_catch_passes_through_success() {
        let io = IO::catch(IO::pure(42), |_| 0);
        assert_eq!(io.run(), 42);
    }

    #[rstest]
    fn test_free_functions_match_methods() {
        assert_eq!(map(IO::pure(2), |x| x + 1).run(), 3);
        assert_eq!(bind(IO::pure(2), |x| IO::pure(x * 10)).run(), 20);
    }
}
