//! Property tests for the matcher laws.

use std::collections::HashSet;

use proptest::prelude::*;
use testkit_matchers::collection::{
    all_match, contains_in_any_order, has_size, has_size_matching, is_empty,
};
use testkit_matchers::control::{is_left_matching, is_right_matching};
use testkit_matchers::matcher::{gt, lt, satisfies, Matcher};

proptest! {
    #[test]
    fn is_empty_iff_size_zero(subject in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(is_empty().matches(&subject), subject.is_empty());
    }

    #[test]
    fn has_size_iff_len_equals(subject in prop::collection::vec(any::<u8>(), 0..16), n in 0usize..16) {
        prop_assert_eq!(has_size(n).matches(&subject), subject.len() == n);
    }

    #[test]
    fn has_size_matching_applies_inner(subject in prop::collection::vec(any::<u8>(), 0..16), n in 0usize..16) {
        prop_assert_eq!(has_size_matching(lt(n)).matches(&subject), subject.len() < n);
    }

    #[test]
    fn all_match_holds_for_empty(threshold in any::<i64>()) {
        prop_assert!(all_match(gt(threshold)).matches(&Vec::<i64>::new()));
    }

    #[test]
    fn all_match_agrees_with_iter_all(subject in prop::collection::vec(-50i32..50, 0..16)) {
        let non_negative = satisfies(|x: &i32| *x >= 0, "a non-negative number");
        prop_assert_eq!(
            all_match(non_negative).matches(&subject),
            subject.iter().all(|x| *x >= 0)
        );
    }

    #[test]
    fn contains_in_any_order_ignores_order_and_extras(
        expected in prop::collection::vec(0u8..20, 0..8),
        extra in prop::collection::vec(0u8..20, 0..8),
    ) {
        let mut subject: Vec<u8> = expected.iter().rev().copied().collect();
        subject.extend(extra);
        prop_assert!(contains_in_any_order(expected).matches(&subject));
    }

    #[test]
    fn contains_in_any_order_iff_subset(
        expected in prop::collection::vec(0u8..10, 0..6),
        subject in prop::collection::vec(0u8..10, 0..6),
    ) {
        let present: HashSet<u8> = subject.iter().copied().collect();
        let all_present = expected.iter().all(|item| present.contains(item));
        prop_assert_eq!(contains_in_any_order(expected).matches(&subject), all_present);
    }

    #[test]
    fn is_right_delegates_to_inner(value in any::<i16>(), threshold in any::<i16>()) {
        let subject: Result<i16, ()> = Ok(value);
        prop_assert_eq!(
            is_right_matching(lt(threshold)).matches(&subject),
            lt(threshold).matches(&value)
        );
    }

    #[test]
    fn is_left_delegates_to_inner(value in any::<i16>(), threshold in any::<i16>()) {
        let subject: Result<(), i16> = Err(value);
        prop_assert_eq!(
            is_left_matching(gt(threshold)).matches(&subject),
            gt(threshold).matches(&value)
        );
    }

    #[test]
    fn evaluation_is_repeatable(subject in prop::collection::vec(any::<i8>(), 0..8)) {
        let m = all_match(lt(0i8));
        prop_assert_eq!(m.matches(&subject), m.matches(&subject));
        if !m.matches(&subject) {
            prop_assert_eq!(m.describe_mismatch(&subject), m.describe_mismatch(&subject));
        }
    }
}
