//! Universal matcher over collection elements.

use std::fmt::Debug;

use crate::matcher::{Description, Matcher, SelfDescribing};
use crate::subject::Traversable;

/// Matches a collection whose every element satisfies `matcher`.
///
/// An empty collection always matches.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::all_match;
/// use testkit_matchers::matcher::{eq, lt, Matcher};
///
/// assert!(all_match(lt(5)).matches(&vec![1, 2, 3]));
/// assert_eq!(
///     all_match(eq(true)).describe_mismatch(&vec![false, true, false]),
///     "All elements should match 'is <true>' but found non-matching elements: [false,false]"
/// );
/// ```
pub fn all_match<M>(matcher: M) -> AllMatch<M> {
    AllMatch { inner: matcher }
}

/// Matcher requiring every element to match.
#[derive(Debug, Clone)]
pub struct AllMatch<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for AllMatch<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("All elements should match '")
            .append_description_of(&self.inner)
            .append_text("'");
    }
}

impl<S, M> Matcher<S> for AllMatch<M>
where
    S: Traversable + Debug + ?Sized,
    S::Item: Debug,
    M: Matcher<S::Item>,
{
    fn matches(&self, value: &S) -> bool {
        value.for_all(|element| self.inner.matches(element))
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        let failing = value.reject(|element| self.inner.matches(element));
        description
            .append_text("All elements should match '")
            .append_description_of(&self.inner)
            .append_text("' but found non-matching elements: ")
            .append_list("[", ",", "]", failing);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::matcher::{eq, lt, satisfies};

    #[test]
    fn test_all_match() {
        assert!(all_match(lt(5)).matches(&vec![1, 2, 3]));
        assert!(!all_match(lt(5)).matches(&vec![1, 2, 6]));
    }

    #[test]
    fn test_all_match_empty_is_vacuously_true() {
        assert!(all_match(lt(0)).matches(&Vec::<i32>::new()));
        assert!(all_match(eq("never")).matches(&VecDeque::<&str>::new()));
    }

    #[test]
    fn test_all_match_mismatch() {
        assert_eq!(
            all_match(eq(true)).describe_mismatch(&vec![false, true, false]),
            "All elements should match 'is <true>' but found non-matching elements: [false,false]"
        );
    }

    #[test]
    fn test_all_match_mismatch_in_subject_order() {
        let odd = satisfies(|x: &i32| x % 2 == 1, "an odd number");
        assert_eq!(
            all_match(odd).describe_mismatch(&[6, 1, 4, 3, 2]),
            "All elements should match 'an odd number' but found non-matching elements: [6,4,2]"
        );
    }

    #[test]
    fn test_all_match_describe() {
        assert_eq!(all_match(lt(5)).describe(), "All elements should match 'a value less than <5>'");
    }
}
