use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A single coordinate of a cell or marker.
pub type Coord = usize;
/// A lattice extent; lattices are never empty in either direction.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// The location `(row, column)` of a cell. The top left cell is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The row of this location, counted from the top.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this location, counted from the left.
    #[inline]
    pub fn column(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies in a lattice of `dims`, given in `(width, height)` order.
    pub(crate) fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.1.get() && self.1 < dims.0.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
