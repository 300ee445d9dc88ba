// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Matchers for control types: optional values, outcomes and disjoint values.
//!
//! Each family has an unparameterized form that only checks which shape the
//! subject has, and a `_matching` form that additionally applies an inner
//! matcher to the held value. The unparameterized form is the `_matching`
//! form applied to [`anything`](crate::matcher::anything).
//!
//! | Subject | Matchers |
//! |---|---|
//! | `Option` | [`is_defined`], [`is_defined_matching`], [`is_empty`] |
//! | `Result` as outcome | [`is_success`], [`is_success_matching`], [`is_failure`], [`has_failed_with`] |
//! | `Result` / `Either` as disjoint | [`is_right`], [`is_right_matching`], [`is_left`], [`is_left_matching`] |
//!
//! # Example
//!
//! ```rust
//! use testkit_matchers::assert_that;
//! use testkit_matchers::control::{is_defined_matching, is_failure, is_left};
//! use testkit_matchers::matcher::gt;
//!
//! assert_that!(Some(3), is_defined_matching(gt(2)));
//! assert_that!("x".parse::<i32>(), is_failure());
//! assert_that!(Err::<(), _>("left"), is_left());
//! ```

pub mod disjoint;
pub mod option;
pub mod outcome;

pub use disjoint::{is_left, is_left_matching, is_right, is_right_matching, IsLeft, IsRight};
pub use option::{is_defined, is_defined_matching, is_empty, IsDefined, IsUndefined};
pub use outcome::{
    has_failed_with, is_failure, is_success, is_success_matching, HasFailedWith, IsFailure,
    IsSuccess,
};
