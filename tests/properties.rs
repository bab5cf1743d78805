use proptest::prelude::*;

use outcome::{coerce, failure, success, Outcome, Tag};

fn tag_strategy() -> impl Strategy<Value = Tag> {
    prop_oneof![Just(Tag::Success), Just(Tag::Failure)]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(|v| success::<i32, String>(v)),
        ".*".prop_map(|e| failure::<i32, String>(e)),
    ]
}

proptest! {
    #[test]
    fn pair_coercion_round_trips(tag in tag_strategy(), v in any::<i32>()) {
        let out = coerce((tag, v));
        prop_assert_eq!(out.tag(), tag);

        let (encoded_tag, slot) = out.into_pair();
        prop_assert_eq!(encoded_tag, tag);
        prop_assert_eq!(slot.either(|l| l, |r| r), v);
    }

    #[test]
    fn flatten_inverts_sequence_coercion(
        tag in tag_strategy(),
        a in any::<i32>(),
        b in any::<i32>(),
    ) {
        let out = coerce((tag, a, b));
        let encoded = out.into_tuple().either(|l| l, |r| r);
        prop_assert_eq!(encoded, (tag, a, b));
    }

    #[test]
    fn coercion_preserves_mutual_exclusivity(tag in tag_strategy(), v in any::<i32>()) {
        let pair = coerce((tag, v));
        prop_assert_ne!(pair.is_success(), pair.is_failure());

        let bare = coerce(tag);
        prop_assert_ne!(bare.is_success(), bare.is_failure());
    }

    #[test]
    fn and_then_is_identity_on_failure(e in ".*") {
        let f: Outcome<i32, String> = failure(e.clone());
        prop_assert_eq!(f.clone().and_then(|v| success::<_, String>(v + 1)), f);
    }

    #[test]
    fn or_else_is_identity_on_success(v in any::<i32>()) {
        let s: Outcome<i32, String> = success(v);
        prop_assert_eq!(
            s.clone().or_else(|_| failure::<i32, String>("other".into())),
            s
        );
    }

    #[test]
    fn failing_and_then_short_circuits_the_next(v in any::<i32>(), e in ".*") {
        let mut second_ran = false;
        let chained = success::<i32, String>(v)
            .and_then(|_| failure::<i32, String>(e.clone()))
            .and_then(|v| {
                second_ran = true;
                success(v)
            });

        prop_assert_eq!(chained, failure(e));
        prop_assert!(!second_ran);
    }

    #[test]
    fn map_composes(v in any::<i32>()) {
        let s: Outcome<i32, String> = success(v);
        let stepwise = s.clone().map(|x| x.wrapping_mul(2)).map(|x| x.wrapping_add(1));
        let fused = s.map(|x| x.wrapping_mul(2).wrapping_add(1));
        prop_assert_eq!(stepwise, fused);
    }

    #[test]
    fn unwrap_or_else_runs_once_only_on_failure(
        out in outcome_strategy(),
        fallback in any::<i32>(),
    ) {
        let mut calls = 0;
        let value = out.clone().unwrap_or_else(|_| {
            calls += 1;
            fallback
        });

        match out {
            Outcome::Success(v) => {
                prop_assert_eq!(value, v);
                prop_assert_eq!(calls, 0);
            }
            Outcome::Failure(_) => {
                prop_assert_eq!(value, fallback);
                prop_assert_eq!(calls, 1);
            }
        }
    }

    #[test]
    fn or_and_duality(out in outcome_strategy(), v in any::<i32>()) {
        let alt: Outcome<i32, String> = success(v);

        if out.is_success() {
            prop_assert_eq!(out.clone().or(alt.clone()), out.clone());
            prop_assert_eq!(out.and(alt.clone()), alt);
        } else {
            prop_assert_eq!(out.clone().or(alt.clone()), alt.clone());
            prop_assert_eq!(out.clone().and(alt), out);
        }
    }

    #[test]
    fn result_interop_round_trips(out in outcome_strategy()) {
        let through: Outcome<i32, String> = Outcome::from(out.clone().into_result());
        prop_assert_eq!(through, out);
    }
}
