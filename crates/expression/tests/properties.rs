//! Property tests over seeds and blank values.

use blankout_expression::{build, for_level, lookup, validate, Outcome};
use blankout_random::Generator;
use blankout_value::Value;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    // Two generators with the same seed synthesize the same question and
    // reach the same verdict.
    #[test]
    fn seeded_synthesis_is_reproducible(seed in any::<[u8; 32]>(), level in 0u8..10) {
        let mut a = Generator::with_seed(seed);
        let mut b = Generator::with_seed(seed);
        let qa = for_level(&mut a, level).unwrap();
        let qb = for_level(&mut b, level).unwrap();
        prop_assert_eq!(&qa, &qb);
        prop_assert_eq!(qa.to_string(), qb.to_string());
        let va = validate(&qa, &json!("probe")).unwrap();
        let vb = validate(&qb, &json!("probe")).unwrap();
        prop_assert_eq!(va, vb);
    }

    // The self-answer invariant holds at every level for every seed.
    #[test]
    fn the_original_value_always_passes(seed in any::<[u8; 32]>(), level in 0u8..10) {
        let mut gen = Generator::with_seed(seed);
        let expr = for_level(&mut gen, level).unwrap();
        let original = expr.blank_value().unwrap().clone();
        let verdict = validate(&expr, &original).unwrap();
        prop_assert!(verdict.passed, "failed for {:?}", expr);
        prop_assert_eq!(verdict.outcome(), Outcome::Pass);
    }

    // Division questions built for any integer blank keep their original
    // expression exact.
    #[test]
    fn division_is_always_well_posed(seed in any::<[u8; 32]>(), blank in -200i64..400) {
        let mut gen = Generator::with_seed(seed);
        let div = lookup("/").unwrap();
        let expr = build(div, &mut gen, json!(blank)).unwrap();
        prop_assert_ne!(expr.evaluate(), Value::Null);
        prop_assert!(validate(&expr, &json!(blank)).unwrap().passed);
    }

    // Judging never mutates the question: the posed expression compares
    // equal before and after, and re-judging agrees.
    #[test]
    fn validation_is_pure(seed in any::<[u8; 32]>(), answer in -50i64..50) {
        let mut gen = Generator::with_seed(seed);
        let expr = for_level(&mut gen, 3).unwrap();
        let before = expr.clone();
        let first = validate(&expr, &json!(answer)).unwrap();
        let second = validate(&expr, &json!(answer)).unwrap();
        prop_assert_eq!(&expr, &before);
        prop_assert_eq!(first, second);
    }

    // The verdict flags always cohere: passed is exactly type_ok plus
    // value_right, and the outcome matches the flags.
    #[test]
    fn verdict_flags_cohere(seed in any::<[u8; 32]>(), level in 0u8..10, answer in -20i64..20) {
        let mut gen = Generator::with_seed(seed);
        let expr = for_level(&mut gen, level).unwrap();
        let v = validate(&expr, &json!(answer)).unwrap();
        prop_assert_eq!(v.passed, v.type_ok && v.value_right);
        match v.outcome() {
            Outcome::Pass => prop_assert!(v.passed),
            Outcome::WrongType => prop_assert!(!v.type_ok),
            Outcome::NearMiss => prop_assert!(v.type_ok && v.exact_type && !v.value_right),
            Outcome::CompatibleTypeWrongValue => {
                prop_assert!(v.type_ok && !v.exact_type && !v.value_right)
            }
        }
    }
}
