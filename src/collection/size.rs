//! Emptiness and size matchers.

use std::fmt::Debug;

use crate::matcher::{Description, Matcher, SelfDescribing};
use crate::subject::Traversable;

/// Matches a collection with no elements.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::is_empty;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_empty().matches(&Vec::<i32>::new()));
/// assert_eq!(
///     is_empty().describe_mismatch(&vec![1]),
///     "Collection was expected to be empty but has size <1>"
/// );
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Matcher for empty collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

impl SelfDescribing for IsEmpty {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("Collection should be empty");
    }
}

impl<S: Traversable + Debug + ?Sized> Matcher<S> for IsEmpty {
    fn matches(&self, value: &S) -> bool {
        value.has_no_elements()
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        description.append_text("Collection was expected to be empty but ");
        match value.definite_size() {
            Some(size) => description.append_text("has size ").append_value(&size),
            None => description.append_text("its size is not definite"),
        };
    }
}

/// Matches a collection with exactly `size` elements.
///
/// A collection that cannot report a definite size never matches.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::has_size;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(has_size(2).matches(&[7, 8]));
/// assert_eq!(
///     has_size(1).describe_mismatch(&vec![1, 2]),
///     "Collection should have size <1> but actually has size <2>"
/// );
/// ```
pub fn has_size(size: usize) -> HasSize {
    HasSize { size }
}

/// Matcher for an exact collection size.
#[derive(Debug, Clone, Copy)]
pub struct HasSize {
    size: usize,
}

impl SelfDescribing for HasSize {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Collection should have size ")
            .append_value(&self.size);
    }
}

impl<S: Traversable + Debug + ?Sized> Matcher<S> for HasSize {
    fn matches(&self, value: &S) -> bool {
        value.definite_size() == Some(self.size)
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        description
            .append_text("Collection should have size ")
            .append_value(&self.size);
        match value.definite_size() {
            Some(actual) => description
                .append_text(" but actually has size ")
                .append_value(&actual),
            None => description.append_text(" but its size is not definite"),
        };
    }
}

/// Matches a collection whose size satisfies `matcher`.
///
/// A collection that cannot report a definite size never matches.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::has_size_matching;
/// use testkit_matchers::matcher::{lt, Matcher};
///
/// assert!(has_size_matching(lt(20)).matches(&vec![1, 2, 3]));
/// assert_eq!(
///     has_size_matching(lt(2)).describe_mismatch(&vec![1, 2, 3]),
///     "Collection size does not match a value less than <2>, size was <3>"
/// );
/// ```
pub fn has_size_matching<M: Matcher<usize>>(matcher: M) -> HasSizeMatching<M> {
    HasSizeMatching { inner: matcher }
}

/// Matcher for a collection size checked by another matcher.
#[derive(Debug, Clone)]
pub struct HasSizeMatching<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for HasSizeMatching<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Collection size should match ")
            .append_description_of(&self.inner);
    }
}

impl<S, M> Matcher<S> for HasSizeMatching<M>
where
    S: Traversable + Debug + ?Sized,
    M: Matcher<usize>,
{
    fn matches(&self, value: &S) -> bool {
        value
            .definite_size()
            .is_some_and(|size| self.inner.matches(&size))
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        description
            .append_text("Collection size does not match ")
            .append_description_of(&self.inner);
        match value.definite_size() {
            Some(size) => description.append_text(", size was ").append_value(&size),
            None => description.append_text(", size is not definite"),
        };
    }
}
