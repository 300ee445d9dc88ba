//! Matchers for success-or-failure values.
//!
//! The subject is anything implementing [`Outcome`], in practice a
//! [`Result`]: `Ok` is a success, `Err` a failure carrying its cause.

use std::fmt::Debug;

use crate::matcher::{anything, Anything, Description, Matcher, SelfDescribing};
use crate::subject::{Classify, Outcome};

/// Matches a successful outcome holding any value.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_success;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_success().matches(&Ok::<_, String>(1)));
/// assert_eq!(
///     is_success().describe_mismatch(&Err::<i32, _>("boom")),
///     "Expected success but got <\"boom\">"
/// );
/// ```
pub fn is_success() -> IsSuccess<Anything> {
    is_success_matching(anything())
}

/// Matches a successful outcome whose value satisfies `matcher`.
pub fn is_success_matching<M>(matcher: M) -> IsSuccess<M> {
    IsSuccess { inner: matcher }
}

/// Matcher for successful outcomes.
#[derive(Debug, Clone)]
pub struct IsSuccess<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for IsSuccess<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Successful Try should contain value that matches: ")
            .append_description_of(&self.inner);
    }
}

impl<O, M> Matcher<O> for IsSuccess<M>
where
    O: Outcome + Debug + ?Sized,
    O::Success: Debug,
    O::Failure: Debug,
    M: Matcher<O::Success>,
{
    fn matches(&self, value: &O) -> bool {
        value
            .as_outcome()
            .is_ok_and(|success| self.inner.matches(success))
    }

    fn describe_mismatch_to(&self, value: &O, description: &mut Description) {
        match value.as_outcome() {
            Err(cause) => {
                description
                    .append_text("Expected success but got ")
                    .append_value(cause);
            }
            Ok(success) => {
                description
                    .append_text("Expected successful Try value matching '")
                    .append_description_of(&self.inner)
                    .append_text("' but ");
                self.inner.describe_mismatch_to(success, description);
            }
        }
    }
}

/// Matches a failed outcome.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_failure;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_failure().matches(&Err::<i32, _>("boom")));
/// assert_eq!(
///     is_failure().describe_mismatch(&Ok::<_, String>(42)),
///     "Try should not have succeeded, but was <Ok(42)>"
/// );
/// ```
pub fn is_failure() -> IsFailure {
    IsFailure
}

/// Matcher for failed outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFailure;

impl SelfDescribing for IsFailure {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("unsuccessful Try");
    }
}

impl<O: Outcome + Debug + ?Sized> Matcher<O> for IsFailure {
    fn matches(&self, value: &O) -> bool {
        value.as_outcome().is_err()
    }

    fn describe_mismatch_to(&self, value: &O, description: &mut Description) {
        description
            .append_text("Try should not have succeeded, but was ")
            .append_value(value);
    }
}

/// Matches a failed outcome whose cause is exactly of kind `kind`.
///
/// Kinds are compared by equality of the discriminant reported by
/// [`Classify::kind`]; there is no notion of a kind covering another.
///
/// # Example
///
/// ```rust
/// use std::io;
///
/// use testkit_matchers::control::has_failed_with;
/// use testkit_matchers::matcher::Matcher;
///
/// let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
/// assert!(has_failed_with(io::ErrorKind::NotFound).matches(&failed));
/// assert_eq!(
///     has_failed_with(io::ErrorKind::PermissionDenied).describe_mismatch(&failed),
///     "Failure type is NotFound but expected PermissionDenied"
/// );
/// ```
pub fn has_failed_with<K: PartialEq + Debug>(kind: K) -> HasFailedWith<K> {
    HasFailedWith { kind }
}

/// Matcher for outcomes that failed with a given kind.
#[derive(Debug, Clone)]
pub struct HasFailedWith<K> {
    kind: K,
}

impl<K: Debug> SelfDescribing for HasFailedWith<K> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("Try should have failed with {:?}", self.kind));
    }
}

impl<O, K> Matcher<O> for HasFailedWith<K>
where
    O: Outcome + Debug + ?Sized,
    O::Success: Debug,
    O::Failure: Classify<Kind = K>,
    K: PartialEq + Debug,
{
    fn matches(&self, value: &O) -> bool {
        value
            .as_outcome()
            .is_err_and(|cause| cause.kind() == self.kind)
    }

    fn describe_mismatch_to(&self, value: &O, description: &mut Description) {
        match value.as_outcome() {
            Err(cause) => {
                description.append_text(&format!(
                    "Failure type is {:?} but expected {:?}",
                    cause.kind(),
                    self.kind
                ));
            }
            Ok(success) => {
                description
                    .append_text("Expected failure, but found successful Try with value: ")
                    .append_value(success);
            }
        }
    }
}
