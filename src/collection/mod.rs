// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Matchers for collections.
//!
//! Every matcher here works on any [`Traversable`](crate::subject::Traversable):
//!
//! - [`is_empty`] - no elements
//! - [`has_size`], [`has_size_matching`] - exact or matcher-checked size
//! - [`contains_any`], [`contains_element`] - some element matches
//! - [`contains_in_any_order`] - every expected element is present
//! - [`all_match`] - every element matches
//!
//! Containers that cannot report a definite size never satisfy the size
//! matchers.
//!
//! # Example
//!
//! ```rust
//! use testkit_matchers::assert_that;
//! use testkit_matchers::collection::{all_match, contains_in_any_order, has_size_matching};
//! use testkit_matchers::matcher::{gt, lt};
//!
//! let ids = vec![3, 1, 2];
//! assert_that!(ids, has_size_matching(lt(10)));
//! assert_that!(ids, contains_in_any_order([1, 2]));
//! assert_that!(ids, all_match(gt(0)));
//! ```

mod all_match;
mod contains;
mod size;

pub use all_match::{all_match, AllMatch};
pub use contains::{
    contains_any, contains_element, contains_in_any_order, ContainsAny, ContainsInAnyOrder,
};
pub use size::{has_size, has_size_matching, is_empty, HasSize, HasSizeMatching, IsEmpty};
