//! Matchers for optional values.

use std::fmt::Debug;

use crate::matcher::{anything, Anything, Description, Matcher, SelfDescribing};
use crate::subject::Optional;

/// Matches an optional value that holds any value.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_defined;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_defined().matches(&Some(1)));
/// assert!(!is_defined().matches(&None::<i32>));
/// assert_eq!(is_defined().describe_mismatch(&None::<i32>), "No value was defined");
/// ```
pub fn is_defined() -> IsDefined<Anything> {
    is_defined_matching(anything())
}

/// Matches an optional value whose held value satisfies `matcher`.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_defined_matching;
/// use testkit_matchers::matcher::{lt, Matcher};
///
/// let m = is_defined_matching(lt(20));
/// assert!(m.matches(&Some(1)));
/// assert_eq!(m.describe_mismatch(&Some(42)), "<42> was greater than <20>");
/// ```
pub fn is_defined_matching<M>(matcher: M) -> IsDefined<M> {
    IsDefined { inner: matcher }
}

/// Matcher for defined optional values.
#[derive(Debug, Clone)]
pub struct IsDefined<M> {
    inner: M,
}

impl<M: SelfDescribing> SelfDescribing for IsDefined<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Option that contains value matching ")
            .append_description_of(&self.inner);
    }
}

impl<O, M> Matcher<O> for IsDefined<M>
where
    O: Optional + Debug + ?Sized,
    O::Item: Debug,
    M: Matcher<O::Item>,
{
    fn matches(&self, value: &O) -> bool {
        value.get().is_some_and(|held| self.inner.matches(held))
    }

    fn describe_mismatch_to(&self, value: &O, description: &mut Description) {
        match value.get() {
            None => {
                description.append_text("No value was defined");
            }
            Some(held) => self.inner.describe_mismatch_to(held, description),
        }
    }
}

/// Matches an optional value that holds nothing.
///
/// # Example
///
/// ```rust
/// use testkit_matchers::control::is_empty;
/// use testkit_matchers::matcher::Matcher;
///
/// assert!(is_empty().matches(&None::<i32>));
/// assert_eq!(is_empty().describe_mismatch(&Some(42)), "Expected empty Option but found <42>");
/// ```
pub fn is_empty() -> IsUndefined {
    IsUndefined
}

/// Matcher for undefined optional values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsUndefined;

impl SelfDescribing for IsUndefined {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("Optional value should not be defined");
    }
}

impl<O> Matcher<O> for IsUndefined
where
    O: Optional + Debug + ?Sized,
    O::Item: Debug,
{
    fn matches(&self, value: &O) -> bool {
        value.get().is_none()
    }

    fn describe_mismatch_to(&self, value: &O, description: &mut Description) {
        if let Some(held) = value.get() {
            description
                .append_text("Expected empty Option but found ")
                .append_value(held);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{eq, lt};

    #[test]
    fn test_is_defined() {
        assert!(is_defined().matches(&Some(1)));
        assert!(!is_defined().matches(&None::<i32>));
    }

    #[test]
    fn test_is_defined_simple_mismatch() {
        assert_eq!(
            is_defined().describe_mismatch(&None::<i32>),
            "No value was defined"
        );
    }

    #[test]
    fn test_is_defined_matching() {
        let m = is_defined_matching(eq("fnord"));
        assert!(m.matches(&Some("fnord")));
        assert!(!m.matches(&Some("other")));
        assert!(!m.matches(&None::<&str>));
    }

    #[test]
    fn test_is_defined_advanced_mismatch() {
        assert_eq!(
            is_defined_matching(lt(20)).describe_mismatch(&Some(42)),
            "<42> was greater than <20>"
        );
        assert_eq!(
            is_defined_matching(lt(20)).describe_mismatch(&None::<i32>),
            "No value was defined"
        );
    }

    #[test]
    fn test_is_defined_describe() {
        assert_eq!(
            is_defined_matching(lt(20)).describe(),
            "Option that contains value matching a value less than <20>"
        );
        assert_eq!(
            is_defined().describe(),
            "Option that contains value matching ANYTHING"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty().matches(&None::<i32>));
        assert!(!is_empty().matches(&Some(1)));
        assert_eq!(is_empty().describe(), "Optional value should not be defined");
    }

    #[test]
    fn test_is_empty_mismatch() {
        assert_eq!(
            is_empty().describe_mismatch(&Some(42)),
            "Expected empty Option but found <42>"
        );
    }
}
