//! The [`Outcome`] type and its combinator algebra.
//!
//! An outcome describes one of two mutually-exclusive fulfillment states:
//!
//! - **Success**: the operation completed and produced a success value
//! - **Failure**: the operation couldn't go through and produced a failure value
//!
//! Failure here is ordinary data, not an exception. Chains of combinators
//! either forward an existing failure untouched or compute a new value from
//! the active branch, so a pipeline composes without partial failure:
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(e) => Outcome::failure(e.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080")
//!     .filter(|p| *p >= 1024, |p| format!("port {p} is privileged"))
//!     .map_success(|p| p + 1)
//!     .success_or_else(|| 9000);
//! assert_eq!(port, 8081);
//! ```
//!
//! # Callback contract
//!
//! Every combinator that takes one closure per branch invokes **exactly one**
//! of them, synchronously and inline, matching the active branch. Every
//! combinator that takes a default closure evaluates it **lazily**, only when
//! the active branch requires it. The unit tests below and the property suite
//! in `tests/algebra_properties.rs` pin both guarantees for each combinator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of an operation that may have either succeeded or failed.
///
/// `S` and `F` are independent, unconstrained payload types; they may even be
/// the same type. Exactly one variant is active, and a constructed outcome is
/// never mutated in place: every transformation consumes `self` and produces
/// a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<S, F> {
    /// The operation completed entirely and produced a success value.
    Success(S),
    /// The operation couldn't go through and produced a failure value.
    Failure(F),
}

use Outcome::{Failure, Success};

// ============================================================================
// Construction and predicates
// ============================================================================

impl<S, F> Outcome<S, F> {
    /// Create a successful outcome holding `value`.
    pub fn success(value: S) -> Self {
        Success(value)
    }

    /// Create a failed outcome holding `value`.
    pub fn failure(value: F) -> Self {
        Failure(value)
    }

    /// Returns `true` if this is a successful outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if this is a failed outcome.
    ///
    /// Always the exact complement of [`is_success`](Self::is_success).
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    // ========================================================================
    // Unchecked extraction
    // ========================================================================

    /// Return the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`. Calling this on a failed outcome
    /// is a contract violation, not a recoverable error; prefer
    /// [`success_or_else`](Self::success_or_else) or pattern matching when
    /// the branch is not already known.
    pub fn unwrap_success(self) -> S {
        match self {
            Success(value) => value,
            Failure(_) => panic!("called `Outcome::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Return the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    pub fn unwrap_failure(self) -> F {
        match self {
            Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Failure(value) => value,
        }
    }

    // ========================================================================
    // Default-or-extraction
    // ========================================================================

    /// Return the success value, or compute an alternative from `default`.
    ///
    /// `default` is evaluated lazily: it never runs when the outcome is a
    /// `Success`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let fallen: Outcome<i32, &str> = Outcome::failure("no luck");
    /// assert_eq!(fallen.success_or_else(|| -1), -1);
    /// ```
    pub fn success_or_else(self, default: impl FnOnce() -> S) -> S {
        match self {
            Success(value) => value,
            Failure(_) => default(),
        }
    }

    /// Return the failure value, or compute an alternative from `default`.
    ///
    /// `default` never runs when the outcome is a `Failure`.
    pub fn failure_or_else(self, default: impl FnOnce() -> F) -> F {
        match self {
            Success(_) => default(),
            Failure(value) => value,
        }
    }

    /// Return the success value, or map the failure value into one.
    ///
    /// `mapper` is invoked only on the failure path.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let fallen: Outcome<usize, &str> = Outcome::failure("oops");
    /// assert_eq!(fallen.success_or_else_map(str::len), 4);
    /// ```
    pub fn success_or_else_map(self, mapper: impl FnOnce(F) -> S) -> S {
        match self {
            Success(value) => value,
            Failure(value) => mapper(value),
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Turn a success that does not match `predicate` into a failure.
    ///
    /// A failed outcome passes through untouched, and neither closure is
    /// invoked for it. A success whose value matches the predicate also
    /// passes through untouched; otherwise `mapper` turns the success value
    /// into a failure value.
    ///
    /// The failure type stays fixed: filtering cannot change `F`, it can only
    /// produce a value of the same failure type the outcome already carries.
    pub fn filter(
        self,
        predicate: impl FnOnce(&S) -> bool,
        mapper: impl FnOnce(S) -> F,
    ) -> Self {
        match self {
            Success(value) => {
                if predicate(&value) {
                    Success(value)
                } else {
                    Failure(mapper(value))
                }
            }
            failed => failed,
        }
    }

    // ========================================================================
    // Mapping
    // ========================================================================

    /// Map both branches at once, applying whichever mapper matches the
    /// active branch. Exactly one of the two closures runs.
    pub fn map<S2, F2>(
        self,
        s_mapper: impl FnOnce(S) -> S2,
        f_mapper: impl FnOnce(F) -> F2,
    ) -> Outcome<S2, F2> {
        match self {
            Success(value) => Success(s_mapper(value)),
            Failure(value) => Failure(f_mapper(value)),
        }
    }

    /// Map the success value, leaving a failure untouched.
    ///
    /// The failure payload passes through unchanged even when `S2` and `F`
    /// happen to be the same type; the branch is decided by the variant, not
    /// by the payload type.
    pub fn map_success<S2>(self, mapper: impl FnOnce(S) -> S2) -> Outcome<S2, F> {
        match self {
            Success(value) => Success(mapper(value)),
            Failure(value) => Failure(value),
        }
    }

    /// Map the failure value, leaving a success untouched.
    pub fn map_failure<F2>(self, mapper: impl FnOnce(F) -> F2) -> Outcome<S, F2> {
        match self {
            Success(value) => Success(value),
            Failure(value) => Failure(mapper(value)),
        }
    }

    // ========================================================================
    // Flat-mapping
    // ========================================================================

    /// Map both branches with outcome-bearing mappers, returning whichever
    /// outcome the invoked mapper produces. No re-wrapping: the mapper's
    /// outcome is the result, so a success may flat-map into a failure and
    /// vice versa.
    pub fn flat_map<S2, F2>(
        self,
        s_mapper: impl FnOnce(S) -> Outcome<S2, F2>,
        f_mapper: impl FnOnce(F) -> Outcome<S2, F2>,
    ) -> Outcome<S2, F2> {
        match self {
            Success(value) => s_mapper(value),
            Failure(value) => f_mapper(value),
        }
    }

    /// Map the success value with an outcome-bearing mapper; a failure is
    /// re-wrapped into the target outcome type with its payload unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(10).flat_map_success(halve), Outcome::success(5));
    /// assert_eq!(Outcome::success(7).flat_map_success(halve).is_failure(), true);
    /// ```
    pub fn flat_map_success<S2>(
        self,
        mapper: impl FnOnce(S) -> Outcome<S2, F>,
    ) -> Outcome<S2, F> {
        match self {
            Success(value) => mapper(value),
            Failure(value) => Failure(value),
        }
    }

    /// Map the failure value with an outcome-bearing mapper; a success is
    /// re-wrapped into the target outcome type with its payload unchanged.
    pub fn flat_map_failure<F2>(
        self,
        mapper: impl FnOnce(F) -> Outcome<S, F2>,
    ) -> Outcome<S, F2> {
        match self {
            Success(value) => Success(value),
            Failure(value) => mapper(value),
        }
    }

    // ========================================================================
    // Side-effecting handlers
    // ========================================================================

    /// Run the handler matching the active branch, consuming the outcome.
    ///
    /// This is the commit/rollback pattern: exactly one of the two handlers
    /// runs, synchronously.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut committed = 0;
    /// Outcome::<i32, String>::success(3).handle(
    ///     |changes| committed = changes,
    ///     |_error| unreachable!("rollback on a successful outcome"),
    /// );
    /// assert_eq!(committed, 3);
    /// ```
    pub fn handle(self, s_handler: impl FnOnce(S), f_handler: impl FnOnce(F)) {
        match self {
            Success(value) => s_handler(value),
            Failure(value) => f_handler(value),
        }
    }

    /// Run `handler` with the success value; a no-op on a failure.
    pub fn handle_success(self, handler: impl FnOnce(S)) {
        if let Success(value) = self {
            handler(value);
        }
    }

    /// Run `handler` with the failure value; a no-op on a success.
    pub fn handle_failure(self, handler: impl FnOnce(F)) {
        if let Failure(value) = self {
            handler(value);
        }
    }

    // ========================================================================
    // Taps and borrowing adapters
    // ========================================================================

    /// Observe the success value without consuming it, passing the outcome
    /// through unchanged.
    pub fn tap(self, f: impl FnOnce(&S)) -> Self {
        if let Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe the failure value without consuming it.
    pub fn tap_failure(self, f: impl FnOnce(&F)) -> Self {
        if let Failure(ref value) = self {
            f(value);
        }
        self
    }

    /// Borrow both payload positions: `&Outcome<S, F>` to `Outcome<&S, &F>`.
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Success(value) => Success(value),
            Failure(value) => Failure(value),
        }
    }

    /// Mutably borrow both payload positions.
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self {
            Success(value) => Success(value),
            Failure(value) => Failure(value),
        }
    }

    /// Borrow the success value if present.
    pub fn success_value(&self) -> Option<&S> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrow the failure value if present.
    pub fn failure_value(&self) -> Option<&F> {
        match self {
            Success(_) => None,
            Failure(value) => Some(value),
        }
    }

    /// Swap the branches: a success becomes a failure and vice versa.
    pub fn flip(self) -> Outcome<F, S> {
        match self {
            Success(value) => Failure(value),
            Failure(value) => Success(value),
        }
    }
}
