//! Property-based tests for the combinator algebra.
//!
//! These verify invariants that should hold for all payloads:
//! - Construction fixes the branch and preserves the payload
//! - Two-callback combinators invoke exactly one callback
//! - Default closures stay unevaluated on the active branch
//! - Filtering never touches a failure
//! - Identity mapping is idempotent
//! - Flat-mapping returns the mapper's outcome without re-wrapping

use outcome::Outcome;
use proptest::prelude::*;
use std::cell::Cell;

/// Arbitrary outcome over small scalar payloads.
fn any_outcome() -> impl Strategy<Value = Outcome<i32, i16>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i32, i16>::success),
        any::<i16>().prop_map(Outcome::<i32, i16>::failure),
    ]
}

proptest! {
    /// Property: constructors fix the branch, predicates are exact
    /// complements, and the payload survives extraction unchanged.
    #[test]
    fn prop_construction_round_trip(s in any::<i32>(), f in any::<i16>()) {
        let won: Outcome<i32, i16> = Outcome::success(s);
        prop_assert!(won.is_success());
        prop_assert!(!won.is_failure());
        prop_assert_eq!(won.unwrap_success(), s);

        let lost: Outcome<i32, i16> = Outcome::failure(f);
        prop_assert!(lost.is_failure());
        prop_assert!(!lost.is_success());
        prop_assert_eq!(lost.unwrap_failure(), f);
    }

    /// Property: `map` invokes exactly one mapper, matching the branch.
    #[test]
    fn prop_map_invokes_exactly_one_mapper(o in any_outcome()) {
        let s_calls = Cell::new(0_u32);
        let f_calls = Cell::new(0_u32);
        let was_success = o.is_success();

        let mapped = o.map(
            |s| { s_calls.set(s_calls.get() + 1); s },
            |f| { f_calls.set(f_calls.get() + 1); f },
        );

        prop_assert_eq!(s_calls.get() + f_calls.get(), 1);
        prop_assert_eq!(s_calls.get() == 1, was_success);
        prop_assert_eq!(mapped.is_success(), was_success);
    }

    /// Property: `handle` invokes exactly one handler, matching the branch.
    #[test]
    fn prop_handle_invokes_exactly_one_handler(o in any_outcome()) {
        let s_calls = Cell::new(0_u32);
        let f_calls = Cell::new(0_u32);
        let was_success = o.is_success();

        o.handle(
            |_| s_calls.set(s_calls.get() + 1),
            |_| f_calls.set(f_calls.get() + 1),
        );

        prop_assert_eq!(s_calls.get() + f_calls.get(), 1);
        prop_assert_eq!(s_calls.get() == 1, was_success);
    }

    /// Property: the default closure runs exactly once on the inactive
    /// branch and never on the active one.
    #[test]
    fn prop_success_or_else_is_lazy(o in any_outcome(), d in any::<i32>()) {
        let evaluations = Cell::new(0_u32);
        let was_failure = o.is_failure();
        let payload = o.success_value().copied();

        let value = o.success_or_else(|| {
            evaluations.set(evaluations.get() + 1);
            d
        });

        if was_failure {
            prop_assert_eq!(evaluations.get(), 1);
            prop_assert_eq!(value, d);
        } else {
            prop_assert_eq!(evaluations.get(), 0);
            prop_assert_eq!(Some(value), payload);
        }
    }

    /// Property: `success_or_else_map` runs the mapper only on failures.
    #[test]
    fn prop_success_or_else_map_runs_on_failure_only(o in any_outcome()) {
        let calls = Cell::new(0_u32);
        let was_failure = o.is_failure();

        let _ = o.success_or_else_map(|f| {
            calls.set(calls.get() + 1);
            i32::from(f)
        });

        prop_assert_eq!(calls.get(), u32::from(was_failure));
    }

    /// Property: a failure passes through `filter` untouched, and neither
    /// the predicate nor the mapper runs for it.
    #[test]
    fn prop_filter_short_circuits_on_failure(f in any::<i16>()) {
        let lost: Outcome<i32, i16> = Outcome::failure(f);
        let calls = Cell::new(0_u32);

        let filtered = lost.filter(
            |_| { calls.set(calls.get() + 1); true },
            |_| { calls.set(calls.get() + 1); 0 },
        );

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(filtered, Outcome::failure(f));
    }

    /// Property: filtering a success keeps it exactly when the predicate
    /// holds, and otherwise produces the mapped failure.
    #[test]
    fn prop_filter_follows_the_predicate(s in any::<i32>(), keep in any::<bool>()) {
        let won: Outcome<i32, i16> = Outcome::success(s);
        let filtered = won.filter(|_| keep, |_| 10);

        if keep {
            prop_assert_eq!(filtered, Outcome::success(s));
        } else {
            prop_assert_eq!(filtered, Outcome::failure(10));
        }
    }

    /// Property: mapping the success branch with the identity function is
    /// idempotent.
    #[test]
    fn prop_map_success_identity_is_idempotent(o in any_outcome()) {
        prop_assert_eq!(o.map_success(|s| s), o);
        prop_assert_eq!(o.map_success(|s| s).map_success(|s| s), o);
    }

    /// Property: `flat_map_success` returns the mapper's outcome directly on
    /// a success, and forwards a failure payload unchanged without invoking
    /// the mapper.
    #[test]
    fn prop_flat_map_success_never_rewraps(o in any_outcome(), flip in any::<bool>()) {
        let calls = Cell::new(0_u32);
        let was_success = o.is_success();
        let failure_payload = o.failure_value().copied();

        let next = o.flat_map_success(|s| {
            calls.set(calls.get() + 1);
            if flip {
                Outcome::failure(0_i16)
            } else {
                Outcome::success(s)
            }
        });

        if was_success {
            prop_assert_eq!(calls.get(), 1);
            prop_assert_eq!(next.is_failure(), flip);
        } else {
            prop_assert_eq!(calls.get(), 0);
            prop_assert_eq!(next.failure_value().copied(), failure_payload);
        }
    }

    /// Property: taps observe without changing the value, and only on the
    /// matching branch.
    #[test]
    fn prop_taps_are_transparent(o in any_outcome()) {
        let s_calls = Cell::new(0_u32);
        let f_calls = Cell::new(0_u32);
        let was_success = o.is_success();

        let tapped = o
            .tap(|_| s_calls.set(s_calls.get() + 1))
            .tap_failure(|_| f_calls.set(f_calls.get() + 1));

        prop_assert_eq!(tapped, o);
        prop_assert_eq!(s_calls.get(), u32::from(was_success));
        prop_assert_eq!(f_calls.get(), u32::from(!was_success));
    }

    /// Property: flipping twice restores the original outcome.
    #[test]
    fn prop_flip_is_an_involution(o in any_outcome()) {
        prop_assert_eq!(o.flip().flip(), o);
    }

    /// Property: converting through `std::result::Result` and back preserves
    /// branch and payload.
    #[test]
    fn prop_result_round_trip(o in any_outcome()) {
        prop_assert_eq!(Outcome::from_result(o.into_result()), o);
    }
}
