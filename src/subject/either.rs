use either::Either;

use super::{Disjoint, Value};

/// A `Left` holds no right value.
impl<L, R> Value for Either<L, R> {
    fn is_empty(&self) -> bool {
        self.is_left()
    }
}

impl<L, R> Disjoint for Either<L, R> {
    type Left = L;
    type Right = R;

    fn left(&self) -> Option<&L> {
        self.as_ref().left()
    }

    fn right(&self) -> Option<&R> {
        self.as_ref().right()
    }
}
