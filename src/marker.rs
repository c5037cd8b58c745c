use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::geometry::Vector;
use crate::location::Coord;

/// What is known about whether the path crosses an edge.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, VariantArray)]
pub enum MarkerState {
    /// The path does not cross this edge.
    NotCrossed,
    /// The path crosses this edge.
    Crossed,
    /// Not yet decided.
    #[default]
    Unknown,
    /// Marked as contradictory by hand. Propagation never assigns this state.
    Conflict,
}

impl MarkerState {
    /// The state following `self` when a user toggles a marker:
    /// `Unknown → Crossed → NotCrossed → Conflict → Unknown`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unknown => Self::Crossed,
            Self::Crossed => Self::NotCrossed,
            Self::NotCrossed => Self::Conflict,
            Self::Conflict => Self::Unknown,
        }
    }

    pub(crate) fn glyph(self) -> char {
        match self {
            Self::NotCrossed => 'x',
            Self::Crossed => 'o',
            Self::Unknown => '?',
            Self::Conflict => '!',
        }
    }
}

/// Index of a [`Marker`] within its [`Lattice`](crate::Lattice).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MarkerId(pub(crate) usize);

impl MarkerId {
    /// The raw index into the lattice's marker storage.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A site on the edge lattice recording whether the path crosses that edge.
///
/// Coordinates are in half-cell units: horizontal edges sit on even rows and odd columns,
/// vertical edges on odd rows and even columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Marker {
    pub(crate) row: Coord,
    pub(crate) column: Coord,
    pub(crate) boundary: bool,
    /// Current knowledge about this edge.
    pub state: MarkerState,
}

impl Marker {
    /// Row in the edge lattice.
    pub fn row(&self) -> Coord {
        self.row
    }

    /// Column in the edge lattice.
    pub fn column(&self) -> Coord {
        self.column
    }

    /// Whether this marker lies on the outer boundary of the lattice.
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    /// Whether this marker separates two cells in the same row.
    pub fn is_vertical(&self) -> bool {
        self.row % 2 == 1
    }

    /// The initial state of this marker: boundary markers can never be crossed.
    pub(crate) fn initial_state(&self) -> MarkerState {
        if self.boundary {
            MarkerState::NotCrossed
        } else {
            MarkerState::Unknown
        }
    }

    /// Where this marker is drawn, relative to the top left corner of the lattice.
    pub fn position(&self, cell_size: f64) -> Vector {
        Vector::new(self.column as f64, self.row as f64) * (cell_size / 2.0)
    }
}
