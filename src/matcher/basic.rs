//! Building-block matchers: equality, ordering, negation and predicates.
//!
//! These are the matchers test code hands to the parameterized matchers in
//! [`control`](crate::control) and [`collection`](crate::collection).

use std::cmp::Ordering;
use std::fmt::Debug;

use super::{Description, Matcher, SelfDescribing};

// =============================================================================
// Equality
// =============================================================================

/// Create an equality matcher.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{eq, Matcher, SelfDescribing};
///
/// let m = eq(42);
/// assert!(m.matches(&42));
/// assert!(!m.matches(&0));
/// assert_eq!(m.describe(), "is <42>");
/// ```
pub fn eq<T: PartialEq + Debug>(expected: T) -> Equals<T> {
    Equals { expected }
}

/// Matcher for equality.
#[derive(Debug, Clone)]
pub struct Equals<T> {
    expected: T,
}

impl<T: Debug> SelfDescribing for Equals<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("is ").append_value(&self.expected);
    }
}

impl<T: PartialEq + Debug> Matcher<T> for Equals<T> {
    fn matches(&self, value: &T) -> bool {
        value == &self.expected
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Create a less-than matcher.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{lt, Matcher};
///
/// let m = lt(10);
/// assert!(m.matches(&5));
/// assert!(!m.matches(&20));
/// ```
pub fn lt<T: PartialOrd + Debug>(threshold: T) -> OrderingComparison<T> {
    OrderingComparison::new(threshold, Ordering::Less, Ordering::Less, "less than")
}

/// Create a less-than-or-equal matcher.
pub fn lte<T: PartialOrd + Debug>(threshold: T) -> OrderingComparison<T> {
    OrderingComparison::new(
        threshold,
        Ordering::Less,
        Ordering::Equal,
        "less than or equal to",
    )
}

/// Create a greater-than matcher.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{gt, Matcher};
///
/// let m = gt(10);
/// assert!(m.matches(&20));
/// assert!(!m.matches(&5));
/// ```
pub fn gt<T: PartialOrd + Debug>(threshold: T) -> OrderingComparison<T> {
    OrderingComparison::new(threshold, Ordering::Greater, Ordering::Greater, "greater than")
}

/// Create a greater-than-or-equal matcher.
pub fn gte<T: PartialOrd + Debug>(threshold: T) -> OrderingComparison<T> {
    OrderingComparison::new(
        threshold,
        Ordering::Equal,
        Ordering::Greater,
        "equal to or greater than",
    )
}

/// Matcher comparing the subject against a threshold.
///
/// The subject matches when `subject.partial_cmp(threshold)` falls within
/// `min..=max`. Incomparable values never match.
#[derive(Debug, Clone)]
pub struct OrderingComparison<T> {
    threshold: T,
    min: Ordering,
    max: Ordering,
    relation: &'static str,
}

impl<T> OrderingComparison<T> {
    fn new(threshold: T, min: Ordering, max: Ordering, relation: &'static str) -> Self {
        Self {
            threshold,
            min,
            max,
            relation,
        }
    }
}

fn relation_text(ordering: Option<Ordering>) -> &'static str {
    match ordering {
        Some(Ordering::Less) => "less than",
        Some(Ordering::Equal) => "equal to",
        Some(Ordering::Greater) => "greater than",
        None => "incomparable to",
    }
}

impl<T: Debug> SelfDescribing for OrderingComparison<T> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a value ")
            .append_text(self.relation)
            .append_text(" ")
            .append_value(&self.threshold);
    }
}

impl<T: PartialOrd + Debug> Matcher<T> for OrderingComparison<T> {
    fn matches(&self, value: &T) -> bool {
        value
            .partial_cmp(&self.threshold)
            .is_some_and(|ordering| self.min <= ordering && ordering <= self.max)
    }

    fn describe_mismatch_to(&self, value: &T, description: &mut Description) {
        description
            .append_value(value)
            .append_text(" was ")
            .append_text(relation_text(value.partial_cmp(&self.threshold)))
            .append_text(" ")
            .append_value(&self.threshold);
    }
}

// =============================================================================
// Anything
// =============================================================================

/// Create a matcher that always matches.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{anything, Matcher};
///
/// let m = anything();
/// assert!(Matcher::<i32>::matches(&m, &42));
/// assert!(Matcher::<&str>::matches(&m, &"fnord"));
/// ```
pub fn anything() -> Anything {
    Anything
}

/// Matcher that matches anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl SelfDescribing for Anything {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("ANYTHING");
    }
}

impl<T: Debug + ?Sized> Matcher<T> for Anything {
    fn matches(&self, _value: &T) -> bool {
        true
    }
}

// =============================================================================
// Negation
// =============================================================================

/// Create a negating matcher.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{eq, not, Matcher, SelfDescribing};
///
/// let m = not(eq(0));
/// assert!(m.matches(&1));
/// assert!(!m.matches(&0));
/// assert_eq!(m.describe(), "not is <0>");
/// ```
pub fn not<M>(matcher: M) -> Not<M> {
    Not { inner: matcher }
}

/// Matcher that negates another matcher.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for Not<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("not ")
            .append_description_of(&self.inner);
    }
}

impl<T: Debug + ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Create a predicate-based matcher.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{satisfies, Matcher};
///
/// let m = satisfies(|x: &i32| *x % 2 == 0, "an even number");
/// assert!(m.matches(&4));
/// assert!(!m.matches(&3));
/// assert_eq!(m.describe_mismatch(&3), "<3> does not satisfy: an even number");
/// ```
pub fn satisfies<F>(predicate: F, description: &str) -> Predicate<F> {
    Predicate {
        predicate,
        description: description.to_string(),
    }
}

/// Matcher based on a predicate function.
pub struct Predicate<F> {
    predicate: F,
    description: String,
}

impl<F> SelfDescribing for Predicate<F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.description);
    }
}

impl<T: Debug + ?Sized, F: Fn(&T) -> bool> Matcher<T> for Predicate<F> {
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn describe_mismatch_to(&self, value: &T, description: &mut Description) {
        description
            .append_value(value)
            .append_text(" does not satisfy: ")
            .append_text(&self.description);
    }
}
