//! # Outcome
//!
//! A success/failure outcome type with a complete combinator algebra.
//!
//! [`Outcome<S, F>`] represents the result of an operation that either
//! *succeeded* with a value of type `S` or *failed* with a value of type `F`.
//! Unlike exception-based error handling, the failure branch is a first-class
//! value that flows through ordinary combinators: inspect with
//! [`is_success`](Outcome::is_success)/[`is_failure`](Outcome::is_failure),
//! transform with [`map_success`](Outcome::map_success)/
//! [`map_failure`](Outcome::map_failure), chain with
//! [`flat_map_success`](Outcome::flat_map_success), gate with
//! [`filter`](Outcome::filter), and react with [`handle`](Outcome::handle).
//!
//! ## Quick example
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn check_quantity(n: u32) -> Outcome<u32, String> {
//!     Outcome::success(n).filter(|n| *n > 0, |n| format!("quantity {n} is empty"))
//! }
//!
//! check_quantity(3)
//!     .map_success(|n| n * 2)
//!     .handle(
//!         |n| println!("committing {n} changes"),
//!         |err| eprintln!("rolling back: {err}"),
//!     );
//! ```
//!
//! ## Guarantees
//!
//! - Exactly one branch is active; combinators never mutate an outcome in
//!   place, they produce new values.
//! - Two-callback combinators invoke exactly one callback, synchronously,
//!   matching the active branch.
//! - Default closures are evaluated lazily, only when the active branch
//!   requires them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Outcome` via derive.
//! - `tracing`: the [`OutcomeTraceExt`](trace::OutcomeTraceExt) extension for
//!   logging which branch a pipeline produced.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod convert;
pub mod outcome;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export commonly used types
pub use crate::outcome::Outcome;
pub use crate::outcome::Outcome::{Failure, Success};

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
