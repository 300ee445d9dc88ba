//! Containment matchers.

use std::fmt::Debug;

use crate::matcher::{eq, Description, Equals, Matcher, SelfDescribing};
use crate::subject::Traversable;

/// Matches a collection with at least one element satisfying `matcher`.
///
/// An empty collection never matches.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::contains_any;
/// use testkit_matchers::matcher::{eq, Matcher};
///
/// assert!(contains_any(eq(1)).matches(&vec![1, 2, 3]));
/// assert_eq!(
///     contains_any(eq(5)).describe_mismatch(&vec![1, 2]),
///     "Collection expected to contain a value matching 'is <5>' but found <[1, 2]>"
/// );
/// ```
pub fn contains_any<M>(matcher: M) -> ContainsAny<M> {
    ContainsAny { inner: matcher }
}

/// Matches a collection containing an element equal to `element`.
///
/// Shorthand for `contains_any(eq(element))`.
pub fn contains_element<T: PartialEq + Debug>(element: T) -> ContainsAny<Equals<T>> {
    contains_any(eq(element))
}

/// Matcher for collections with a matching element.
#[derive(Debug, Clone)]
pub struct ContainsAny<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for ContainsAny<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Collection should contain a value matching '")
            .append_description_of(&self.inner)
            .append_text("'");
    }
}

impl<S, M> Matcher<S> for ContainsAny<M>
where
    S: Traversable + Debug + ?Sized,
    S::Item: Debug,
    M: Matcher<S::Item>,
{
    fn matches(&self, value: &S) -> bool {
        value.find(|element| self.inner.matches(element)).is_some()
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        description
            .append_text("Collection expected to contain a value matching '")
            .append_description_of(&self.inner)
            .append_text("' but found ")
            .append_value(value);
    }
}

/// Matches a collection containing every one of `items`, in any order.
///
/// Extra elements in the collection are ignored.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::collection::contains_in_any_order;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(contains_in_any_order([1, 2, 3]).matches(&vec![3, 2, 1, 0]));
/// assert_eq!(
///     contains_in_any_order([1, 2, 3, 4, 5, 6]).describe_mismatch(&vec![1, 2, 3]),
///     "Collection is missing elements: [4,5,6]"
/// );
/// ```
pub fn contains_in_any_order<I>(items: I) -> ContainsInAnyOrder<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq + Debug,
{
    ContainsInAnyOrder {
        items: items.into_iter().collect(),
    }
}

/// Matcher for collections containing a set of expected elements.
#[derive(Debug, Clone)]
pub struct ContainsInAnyOrder<T> {
    items: Vec<T>,
}

impl<T: Debug> SelfDescribing for ContainsInAnyOrder<T> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Collection should contain: ")
            .append_list("[", ",", "]", &self.items);
    }
}

impl<S, T> Matcher<S> for ContainsInAnyOrder<T>
where
    S: Traversable<Item = T> + Debug + ?Sized,
    T: PartialEq + Debug,
{
    fn matches(&self, value: &S) -> bool {
        value.contains_all(&self.items)
    }

    fn describe_mismatch_to(&self, value: &S, description: &mut Description) {
        let missing = self.items.iter().filter(|item| !value.contains(*item));
        description
            .append_text("Collection is missing elements: ")
            .append_list("[", ",", "]", missing);
    }
}
