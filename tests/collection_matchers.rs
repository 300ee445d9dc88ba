//! Integration tests for the collection matchers.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use pretty_assertions::assert_eq;
use rstest::rstest;
use testkit_matchers::assert_that;
use testkit_matchers::collection::{
    all_match, contains_any, contains_element, contains_in_any_order, has_size,
    has_size_matching, is_empty,
};
use testkit_matchers::matcher::{eq, lt, not, Matcher};
use testkit_matchers::subject::Traversable;

/// A lazily produced sequence that only knows its elements, not its length.
#[derive(Debug)]
struct Lazy(Vec<i32>);

impl Traversable for Lazy {
    type Item = i32;

    fn elements(&self) -> impl Iterator<Item = &i32> {
        self.0.iter()
    }

    fn definite_size(&self) -> Option<usize> {
        None
    }
}

#[test]
fn test_is_empty() {
    assert_that!(Vec::<i32>::new(), is_empty());
    assert_that!(vec![1], not(is_empty()));
    assert_that!(Lazy(vec![]), is_empty());
}

#[test]
fn test_is_empty_mismatch() {
    assert_eq!(
        is_empty().describe_mismatch(&vec![1]),
        "Collection was expected to be empty but has size <1>"
    );
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5], 5, true)]
#[case(vec![], 5, false)]
#[case(vec![], 0, true)]
#[case(vec![7], 2, false)]
fn test_has_size(#[case] subject: Vec<i32>, #[case] size: usize, #[case] expected: bool) {
    assert_eq!(has_size(size).matches(&subject), expected);
}

#[test]
fn test_has_size_on_other_collections() {
    assert_that!(VecDeque::from([1, 2]), has_size(2));
    assert_that!(LinkedList::from([1, 2, 3]), has_size(3));
    assert_that!(HashSet::from(["a", "b", "a"]), has_size(2));
    assert_that!([0u8; 4], has_size(4));
    assert_that!(Lazy(vec![1, 2]), not(has_size(2)));
}

#[test]
fn test_has_size_mismatch() {
    assert_eq!(
        has_size(1).describe_mismatch(&vec![1, 2]),
        "Collection should have size <1> but actually has size <2>"
    );
}

#[test]
fn test_has_size_matcher() {
    assert_that!(vec![1, 2, 3], has_size_matching(lt(20)));
    assert_that!(vec![1, 2, 3], not(has_size_matching(lt(2))));
    assert_that!(Lazy(vec![1]), not(has_size_matching(lt(20))));
}

#[test]
fn test_has_size_matcher_mismatch() {
    assert_eq!(
        has_size_matching(lt(2)).describe_mismatch(&vec![1, 2, 3]),
        "Collection size does not match a value less than <2>, size was <3>"
    );
}

#[test]
fn test_contains_element() {
    assert_that!(vec![1, 2, 3], contains_element(2));
    assert_that!(vec![1, 2, 3], not(contains_element(4)));
    assert_that!(Vec::<i32>::new(), not(contains_element(1)));
}

#[test]
fn test_contains_any() {
    assert_that!(vec![1, 2, 3], contains_any(eq(1)));
    assert_that!(vec![2, 3, 4], not(contains_any(eq(1))));
    assert_that!(Vec::<i32>::new(), not(contains_any(eq(1))));
    assert_that!(BTreeSet::from([5, 10, 15]), contains_any(lt(6)));
}

#[test]
fn test_contains_any_mismatch() {
    assert_eq!(
        contains_any(eq(5)).describe_mismatch(&vec![1, 2]),
        "Collection expected to contain a value matching 'is <5>' but found <[1, 2]>"
    );
}

#[test]
fn test_contains_in_any_order() {
    assert_that!(vec![3, 2, 1], contains_in_any_order(vec![1, 2, 3]));
    assert_that!(vec![3, 2, 1, 9], contains_in_any_order([2, 9]));
    assert_that!(Vec::<i32>::new(), not(contains_in_any_order(vec![1, 2, 3])));
}

#[test]
fn test_contains_in_any_order_mismatch() {
    assert_eq!(
        contains_in_any_order(vec![1, 2, 3, 4, 5, 6]).describe_mismatch(&vec![1, 2, 3]),
        "Collection is missing elements: [4,5,6]"
    );
}

#[test]
fn test_all_match() {
    assert_that!(vec![1, 2, 3], all_match(lt(5)));
    assert_that!(vec![1, 2, 6], not(all_match(lt(5))));
    assert_that!(Vec::<i32>::new(), all_match(lt(0)));
}

#[test]
fn test_all_match_mismatch() {
    assert_eq!(
        all_match(eq(true)).describe_mismatch(&vec![false, true, false]),
        "All elements should match 'is <true>' but found non-matching elements: [false,false]"
    );
}

#[test]
fn test_matchers_are_reusable() {
    let m = contains_in_any_order([2, 4]);
    let subject = vec![4, 3, 2];

    assert!(m.matches(&subject));
    assert!(m.matches(&subject));
    assert!(!m.matches(&vec![4]));
    assert_eq!(m.describe_mismatch(&vec![4]), m.describe_mismatch(&vec![4]));
}

#[test]
#[should_panic(expected = "Collection is missing elements: [4]")]
fn test_assert_that_reports_missing_elements() {
    assert_that!(vec![1, 2, 3], contains_in_any_order([1, 4]));
}
