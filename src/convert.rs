//! Interop with `std::result::Result` and `Option`.
//!
//! An [`Outcome`] composes with fallible std APIs without ceremony: `?`-based
//! code can hand its `Result` to `Outcome::from_result`, run the combinator
//! pipeline, and convert back at the boundary.

use crate::outcome::Outcome;

impl<S, F> Outcome<S, F> {
    /// Convert a `Result` into an outcome, `Ok` becoming `Success`.
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(value) => Outcome::Failure(value),
        }
    }

    /// Convert into a `Result`, `Success` becoming `Ok`.
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(value) => Err(value),
        }
    }

    /// Convert into `Some(success value)`, discarding a failure payload.
    pub fn into_success_option(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Convert into `Some(failure value)`, discarding a success payload.
    pub fn into_failure_option(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(value) => Some(value),
        }
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Outcome::from_result(result)
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}
