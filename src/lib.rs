//! # testkit-matchers 🧰
//!
//! > Matchers for functional data types
//!
//! **testkit-matchers** lets tests state expectations about `Option`,
//! `Result`, `Either` and collections with composable matchers, and explains
//! failures with readable mismatch messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_matchers::prelude::*;
//! use testkit_matchers::{assert_that, collection, control};
//!
//! assert_that!(Some(42), control::is_defined_matching(lt(100)));
//! assert_that!("7".parse::<i32>(), control::is_success_matching(eq(7)));
//! assert_that!(vec![1, 2, 3], collection::has_size(3));
//!
//! let err = check_that(&vec![1, 2, 3], &collection::has_size_matching(lt(2))).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "assertion failed: Collection size does not match a value less than <2>, size was <3>\n  \
//!      expected: Collection size should match a value less than <2>"
//! );
//! ```
//!
//! ## Features
//!
//! - 🔍 **Matcher protocol** - match, describe the expectation, describe the mismatch
//! - 🎁 **Control matchers** - defined/empty options, success/failure, left/right
//! - 📦 **Collection matchers** - emptiness, size, containment, universal checks
//! - 🧩 **Capability traits** - implement [`subject::Traversable`] and friends for your own types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collection;
pub mod control;
pub mod error;
pub mod matcher;
pub mod subject;
pub mod value;

/// Prelude for convenient imports
///
/// Brings the protocol traits, the building-block matchers and the subject
/// capability traits into scope. The family-specific factories live in
/// [`collection`], [`control`] and [`value`], since several of them share a
/// name (`is_empty`).
///
/// ```rust
/// use testkit_matchers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matcher::{
        anything, check_that, eq, gt, gte, lt, lte, not, satisfies, Description, Matcher,
        SelfDescribing,
    };
    pub use crate::subject::{Classify, Disjoint, Optional, Outcome, Traversable, Value};
}

// Re-exports
pub use error::{Error, Result};
pub use matcher::{Matcher, SelfDescribing};
