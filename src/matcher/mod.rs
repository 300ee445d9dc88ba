// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! The matcher protocol.
//!
//! Every matcher answers three questions:
//!
//! - does this subject match? ([`Matcher::matches`])
//! - what would a matching subject look like? ([`SelfDescribing::describe_to`])
//! - why did this subject not match? ([`Matcher::describe_mismatch_to`])
//!
//! Descriptions are written into a [`Description`] sink so an outer matcher can
//! frame the text of the matcher it wraps without re-rendering it.
//!
//! # Example
//!
//! ```rust
//! use testkit_matchers::matcher::{eq, lt, not, Matcher, SelfDescribing};
//!
//! let m = lt(2);
//! assert!(m.matches(&1));
//! assert_eq!(m.describe(), "a value less than <2>");
//! assert_eq!(m.describe_mismatch(&3), "<3> was greater than <2>");
//!
//! let m = not(eq(0));
//! assert!(m.matches(&1));
//! assert_eq!(m.describe(), "not is <0>");
//! ```

mod basic;
mod description;

use std::fmt::Debug;

pub use basic::{
    anything, eq, gt, gte, lt, lte, not, satisfies, Anything, Equals, Not, OrderingComparison,
    Predicate,
};
pub use description::Description;

use crate::error::{Error, Result};

/// Something that can describe itself into a [`Description`].
///
/// For a matcher this is the expectation: a fixed phrase that does not depend
/// on any subject the matcher has seen.
pub trait SelfDescribing {
    /// Append the expectation text to `description`.
    fn describe_to(&self, description: &mut Description);

    /// Render the expectation text as a string.
    fn describe(&self) -> String {
        let mut description = Description::new();
        self.describe_to(&mut description);
        description.into_string()
    }
}

/// A matcher for testing values.
///
/// Matchers are immutable: evaluating one twice on the same subject gives the
/// same verdict and the same text.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use testkit_matchers::matcher::{Description, Matcher, SelfDescribing};
///
/// struct IsEven;
///
/// impl SelfDescribing for IsEven {
///     fn describe_to(&self, description: &mut Description) {
///         description.append_text("an even number");
///     }
/// }
///
/// impl Matcher<i32> for IsEven {
///     fn matches(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// let m = IsEven;
/// assert!(m.matches(&4));
/// assert!(!m.matches(&3));
/// assert_eq!(m.describe_mismatch(&3), "was <3>");
/// ```
pub trait Matcher<T: Debug + ?Sized>: SelfDescribing {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Append why `value` did not match.
    ///
    /// Only meaningful when [`matches`](Matcher::matches) returned `false`.
    /// The default renders the subject as `was <value>`.
    fn describe_mismatch_to(&self, value: &T, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }

    /// Render why `value` did not match as a string.
    fn describe_mismatch(&self, value: &T) -> String {
        let mut description = Description::new();
        self.describe_mismatch_to(value, &mut description);
        description.into_string()
    }
}

impl<D: SelfDescribing + ?Sized> SelfDescribing for Box<D> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

// Implement Matcher for Box<dyn Matcher> to allow nesting
impl<T: Debug + ?Sized> Matcher<T> for Box<dyn Matcher<T>> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe_mismatch_to(&self, value: &T, description: &mut Description) {
        (**self).describe_mismatch_to(value, description);
    }
}

impl<D: SelfDescribing + ?Sized> SelfDescribing for &D {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

impl<T: Debug + ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe_mismatch_to(&self, value: &T, description: &mut Description) {
        (**self).describe_mismatch_to(value, description);
    }
}

/// Check a value against a matcher without panicking.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] carrying the matcher's expectation and
/// mismatch text when the value does not match.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::matcher::{check_that, eq};
///
/// assert!(check_that(&42, &eq(42)).is_ok());
///
/// let err = check_that(&42, &eq(0)).unwrap_err();
/// assert_eq!(err.to_string(), "assertion failed: was <42>\n  expected: is <0>");
/// ```
pub fn check_that<T, M>(value: &T, matcher: &M) -> Result<()>
where
    T: Debug + ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(value) {
        tracing::trace!(subject = ?value, "matcher accepted subject");
        return Ok(());
    }

    let expected = matcher.describe();
    let actual = matcher.describe_mismatch(value);
    tracing::debug!(%expected, %actual, "matcher rejected subject");
    Err(Error::assertion_failed(expected, actual))
}

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with the expectation and mismatch text if the value doesn't match.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::{assert_that, collection::has_size, control::is_defined};
///
/// assert_that!(vec![1, 2, 3], has_size(3));
/// assert_that!(Some(1), is_defined(), "value should be present");
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr) => {{
        let value = &$value;
        let matcher = &$matcher;
        if let ::std::result::Result::Err(err) = $crate::matcher::check_that(value, matcher) {
            panic!("{}", err);
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        let matcher = &$matcher;
        if let ::std::result::Result::Err(err) = $crate::matcher::check_that(value, matcher) {
            panic!("{}\n  message: {}", err, format_args!($($arg)+));
        }
    }};
}
