//! Matchers for left-or-right values.
//!
//! Works with any [`Disjoint`] subject: `either::Either` (with the `either`
//! feature) or a [`Result`], whose `Ok` is the right side and `Err` the left.

use std::fmt::Debug;

use crate::matcher::{anything, Anything, Description, Matcher, SelfDescribing};
use crate::subject::Disjoint;

/// Matches a disjoint value holding any right value.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_right;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_right().matches(&Ok::<_, i32>(1)));
/// assert_eq!(
///     is_right().describe_mismatch(&Err::<i32, _>(42)),
///     "Expected matching »Right« value, but got »Left«: <42>"
/// );
/// ```
pub fn is_right() -> IsRight<Anything> {
    is_right_matching(anything())
}

/// Matches a disjoint value whose right value satisfies `matcher`.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_right_matching;
/// use testkit_matchers::matcher::{eq, Matcher};
///
/// let m = is_right_matching(eq(1));
/// assert!(m.matches(&Ok::<_, ()>(1)));
/// assert_eq!(
///     m.describe_mismatch(&Ok::<_, ()>(42)),
///     "Expected matching »Right« value, but got: was <42>"
/// );
/// ```
pub fn is_right_matching<M>(matcher: M) -> IsRight<M> {
    IsRight { inner: matcher }
}

/// Matcher for right values.
#[derive(Debug, Clone)]
pub struct IsRight<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for IsRight<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("»Either« should contain a »Right« value matching: ")
            .append_description_of(&self.inner);
    }
}

impl<D, M> Matcher<D> for IsRight<M>
where
    D: Disjoint + Debug + ?Sized,
    D::Left: Debug,
    D::Right: Debug,
    M: Matcher<D::Right>,
{
    fn matches(&self, value: &D) -> bool {
        value.right().is_some_and(|right| self.inner.matches(right))
    }

    fn describe_mismatch_to(&self, value: &D, description: &mut Description) {
        if let Some(right) = value.right() {
            description.append_text("Expected matching »Right« value, but got: ");
            self.inner.describe_mismatch_to(right, description);
        } else if let Some(left) = value.left() {
            description
                .append_text("Expected matching »Right« value, but got »Left«: ")
                .append_value(left);
        }
    }
}

/// Matches a disjoint value holding any left value.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_left;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_left().matches(&Err::<(), _>("no")));
/// assert_eq!(
///     is_left().describe_mismatch(&Ok::<_, ()>(42)),
///     "Expected matching »Left« value, but got »Right«: <42>"
/// );
/// ```
pub fn is_left() -> IsLeft<Anything> {
    is_left_matching(anything())
}

/// Matches a disjoint value whose left value satisfies `matcher`.
pub fn is_left_matching<M>(matcher: M) -> IsLeft<M> {
    IsLeft { inner: matcher }
}

/// Matcher for left values.
#[derive(Debug, Clone)]
pub struct IsLeft<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for IsLeft<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("»Either« should contain a »Left« value matching: ")
            .append_description_of(&self.inner);
    }
}

impl<D, M> Matcher<D> for IsLeft<M>
where
    D: Disjoint + Debug + ?Sized,
    D::Left: Debug,
    D::Right: Debug,
    M: Matcher<D::Left>,
{
    fn matches(&self, value: &D) -> bool {
        value.left().is_some_and(|left| self.inner.matches(left))
    }

    fn describe_mismatch_to(&self, value: &D, description: &mut Description) {
        if let Some(left) = value.left() {
            description.append_text("Expected matching »Left« value, but got: ");
            self.inner.describe_mismatch_to(left, description);
        } else if let Some(right) = value.right() {
            description
                .append_text("Expected matching »Left« value, but got »Right«: ")
                .append_value(right);
        }
    }
}
