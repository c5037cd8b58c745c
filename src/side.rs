use strum::VariantArray;

use crate::location::Location;

/// The four sides of a square cell, in the order cells list their incident markers.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Side {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Side {
    /// Sides which, stepping from one cell to its neighbor, lead to a cell indexed higher in row-major order.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Step from `location` across this side.
    ///
    /// The result may lie outside the lattice, including wrapping past zero; callers check bounds.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }

    /// The side of the neighboring cell facing back across the same edge.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Determine which side of `a` borders `b`, if the two are orthogonally adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|side| side.attempt_from(a) == b)
    }

    /// Position of this side in a cell's `(up, down, left, right)` marker array.
    #[inline]
    pub(crate) fn slot(&self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}
