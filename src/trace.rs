//! Optional `tracing` integration, enabled with the `tracing` feature.
//!
//! Emits a debug event for whichever branch an outcome carries, without
//! consuming or altering it. Useful for watching a combinator pipeline from
//! the outside while keeping the algebra itself observation-free.

use crate::outcome::Outcome;
use std::fmt::Debug;

/// Extension trait adding branch tracing to [`Outcome`].
pub trait OutcomeTraceExt: Sized {
    /// Log the active branch and its payload at debug level, then return
    /// the outcome unchanged.
    fn traced(self, label: &str) -> Self;
}

impl<S: Debug, F: Debug> OutcomeTraceExt for Outcome<S, F> {
    fn traced(self, label: &str) -> Self {
        match &self {
            Outcome::Success(value) => {
                tracing::debug!(target: "outcome", %label, ?value, branch = "success")
            }
            Outcome::Failure(value) => {
                tracing::debug!(target: "outcome", %label, ?value, branch = "failure")
            }
        }
        self
    }
}
