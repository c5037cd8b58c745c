use thiserror::Error;

use crate::location::{Coord, Location};
use crate::marker::MarkerId;

/// Invalid requests made of a [`Lattice`](crate::Lattice). None of them change any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// No cell exists at these coordinates.
    #[error("cell ({row}, {column}) is outside the lattice")]
    OutOfRange {
        /// Requested row.
        row: Coord,
        /// Requested column.
        column: Coord,
    },

    /// The edge lattice position is off the grid or names a cell or corner rather than an edge.
    #[error("no marker at edge lattice position ({row}, {column})")]
    MarkerOutOfRange {
        /// Requested edge lattice row.
        row: Coord,
        /// Requested edge lattice column.
        column: Coord,
    },

    /// The id was not handed out by this lattice.
    #[error("marker {0} does not belong to this lattice")]
    UnknownMarker(MarkerId),

    /// The two cells are not orthogonal neighbors.
    #[error("cells {0} and {1} do not share an edge")]
    NotAdjacent(Location, Location),

    /// A snapshot was taken from a lattice of another size.
    #[error("snapshot holds {actual} marker states, lattice has {expected}")]
    SnapshotMismatch {
        /// Markers in this lattice.
        expected: usize,
        /// States in the snapshot.
        actual: usize,
    },
}
