use crate::geometry::Vector;
use crate::location::Location;
use crate::marker::MarkerId;
use crate::side::Side;

/// The constraint a cell places on the markers around it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Clue {
    /// No constraint; also the clue carried by vertex neighborhoods.
    #[default]
    NoConstraint,
    /// The path passes through, crossing exactly two of the four sides.
    PassThrough,
    /// The path ends here, crossing exactly one side. The label is for display only.
    Endpoint(u32),
}

impl Clue {
    /// Whether this clue requires exactly one crossing.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        matches!(self, Self::Endpoint(_))
    }

    /// The clue following `self` when a user cycles a cell:
    /// `NoConstraint → PassThrough → Endpoint(1) → Endpoint(0) → PassThrough`.
    pub fn cycled(self) -> Self {
        match self {
            Self::NoConstraint => Self::PassThrough,
            Self::PassThrough => Self::Endpoint(1),
            Self::Endpoint(0) => Self::PassThrough,
            Self::Endpoint(_) => Self::Endpoint(0),
        }
    }

    pub(crate) fn glyph(self) -> char {
        match self {
            Self::NoConstraint => '.',
            Self::PassThrough => ' ',
            Self::Endpoint(0) => '*',
            Self::Endpoint(label) => char::from_digit(label, 10).unwrap_or('#'),
        }
    }
}

/// A snapshot of one puzzle cell: where it is, its clue, and the markers on its four sides.
///
/// Obtained from [`Lattice::cell_at`](crate::Lattice::cell_at); edits go through the lattice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    pub(crate) location: Location,
    pub(crate) clue: Clue,
    // up, down, left, right
    pub(crate) markers: [MarkerId; 4],
}

impl Cell {
    /// The location of this cell.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The clue of this cell at the time it was looked up.
    pub fn clue(&self) -> Clue {
        self.clue
    }

    /// The four incident markers, ordered `(up, down, left, right)`.
    pub fn incident_markers(&self) -> [MarkerId; 4] {
        self.markers
    }

    /// The marker on the given `side` of this cell.
    pub fn marker(&self, side: Side) -> MarkerId {
        self.markers[side.slot()]
    }

    /// Where the top left corner of this cell is drawn, relative to the top left corner of the lattice.
    pub fn position(&self, cell_size: f64) -> Vector {
        Vector::new(self.location.column() as f64, self.location.row() as f64) * cell_size
    }
}
