#![allow(clippy::must_use_candidate)]

//! Matchers for anything that can be empty.
//!
//! ```rust
//! use testkit_matchers::{assert_that, matcher::not, value::is_empty};
//!
//! assert_that!(Vec::<i32>::new(), is_empty());
//! assert_that!(None::<i32>, is_empty());
//! assert_that!(Some(1), not(is_empty()));
//! ```

use std::fmt::Debug;

use crate::matcher::{Description, Matcher, SelfDescribing};
use crate::subject::Value;

/// Matches any [`Value`] that reports itself empty.
///
/// An `Option` is empty when `None`, a `Result` when `Err`, a collection when
/// it has no elements.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Matcher for empty values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

impl SelfDescribing for IsEmpty {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("Value should be empty");
    }
}

impl<V: Value + Debug + ?Sized> Matcher<V> for IsEmpty {
    fn matches(&self, value: &V) -> bool {
        value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_is_empty_matcher() {
        let m = is_empty();
        assert!(m.matches(&Vec::<i32>::new()));
        assert!(!m.matches(&vec![1]));
        assert!(m.matches(&HashSet::<u8>::new()));
        assert!(m.matches(""));
        assert!(!m.matches(&Ok::<_, ()>(1)));
        assert!(m.matches(&Err::<i32, _>("boom")));
    }

    #[test]
    fn test_is_empty_descriptions() {
        assert_eq!(is_empty().describe(), "Value should be empty");
        assert_eq!(is_empty().describe_mismatch(&vec![1, 2]), "was <[1, 2]>");
    }
}
