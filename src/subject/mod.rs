//! Capabilities a subject exposes to the matchers.
//!
//! Matchers never look at concrete container types. Each matcher family is
//! written against one of these traits, and the traits are implemented for
//! the standard library types (and `either::Either` with the `either`
//! feature):
//!
//! | Trait | Implemented for |
//! |---|---|
//! | [`Value`] | `Option`, `Result`, `Either`, std collections, `String`, `str` |
//! | [`Traversable`] | `Vec`, `VecDeque`, `LinkedList`, `BinaryHeap`, slices, arrays, `HashSet`, `BTreeSet` |
//! | [`Optional`] | `Option` |
//! | [`Outcome`] | `Result` |
//! | [`Disjoint`] | `Result` (`Ok` is the right side), `Either` |
//! | [`Classify`] | `std::io::Error` |

#[cfg(feature = "either")]
mod either;

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::io;

/// A value that may be empty.
pub trait Value {
    /// Whether the value holds nothing.
    fn is_empty(&self) -> bool;
}

/// A container whose elements can be visited in order.
///
/// Containers that cannot know their size without being exhausted (lazy or
/// unbounded sequences) report `None` from
/// [`definite_size`](Traversable::definite_size).
pub trait Traversable {
    /// The element type.
    type Item;

    /// Iterate over the elements in the container's own order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;

    /// The number of elements, if it is known.
    fn definite_size(&self) -> Option<usize> {
        Some(self.elements().count())
    }

    /// Whether the container has no elements. Never walks past the first one.
    fn has_no_elements(&self) -> bool {
        self.elements().next().is_none()
    }

    /// Whether some element equals `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.elements().any(|candidate| candidate == element)
    }

    /// Whether every one of `items` is contained.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// The first element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().find(|element| predicate(*element))
    }

    /// Whether every element satisfies `predicate`. True when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().all(|element| predicate(element))
    }

    /// The elements that do not satisfy `predicate`, in order.
    fn reject<P>(&self, mut predicate: P) -> Vec<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|element| !predicate(*element)).collect()
    }
}

/// A container holding zero or one value.
pub trait Optional {
    /// The type of the held value.
    type Item;

    /// The held value, if defined.
    fn get(&self) -> Option<&Self::Item>;
}

/// Either a computed value or the failure that prevented it.
pub trait Outcome {
    /// The value type of a success.
    type Success;
    /// The cause type of a failure.
    type Failure;

    /// Borrow the active side.
    fn as_outcome(&self) -> Result<&Self::Success, &Self::Failure>;
}

/// Exactly one of two tagged alternatives.
///
/// Implementations return `Some` from exactly one of [`left`](Disjoint::left)
/// and [`right`](Disjoint::right).
pub trait Disjoint {
    /// The left-tagged type.
    type Left;
    /// The right-tagged type.
    type Right;

    /// The left value, if the left side is active.
    fn left(&self) -> Option<&Self::Left>;

    /// The right value, if the right side is active.
    fn right(&self) -> Option<&Self::Right>;
}

/// A failure that can name its kind.
///
/// Kinds are compared for exact equality: a failure matches a kind only if it
/// reports that very discriminant.
pub trait Classify {
    /// The discriminant type.
    type Kind: PartialEq + Debug;

    /// The kind of this failure.
    fn kind(&self) -> Self::Kind;
}

// =============================================================================
// std impls
// =============================================================================

macro_rules! impl_collection {
    ($([$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<$($generics)*> Value for $ty {
                fn is_empty(&self) -> bool {
                    self.len() == 0
                }
            }

            impl<$($generics)*> Traversable for $ty {
                type Item = T;

                fn elements(&self) -> impl Iterator<Item = &T> {
                    self.iter()
                }

                fn definite_size(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )+
    };
}

impl_collection! {
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T] [T];
    [T, const N: usize] [T; N];
    [T, S] HashSet<T, S>;
    [T] BTreeSet<T>;
}

impl<K, V, S> Value for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Value for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Value for String {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Value for str {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Value for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl<T> Optional for Option<T> {
    type Item = T;

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }
}

/// A failed `Result` holds no value.
impl<T, E> Value for Result<T, E> {
    fn is_empty(&self) -> bool {
        self.is_err()
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Success = T;
    type Failure = E;

    fn as_outcome(&self) -> Result<&T, &E> {
        self.as_ref()
    }
}

/// `Ok` is the right side, `Err` the left.
impl<R, L> Disjoint for Result<R, L> {
    type Left = L;
    type Right = R;

    fn left(&self) -> Option<&L> {
        self.as_ref().err()
    }

    fn right(&self) -> Option<&R> {
        self.as_ref().ok()
    }
}

impl Classify for io::Error {
    type Kind = io::ErrorKind;

    fn kind(&self) -> io::ErrorKind {
        io::Error::kind(self)
    }
}
