use std::ops::RangeInclusive;

use crate::cell::Clue;
use crate::location::{Coord, Location};
use crate::marker::{MarkerId, MarkerState};

/// Which kind of lattice node a [`Neighborhood`] surrounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NeighborhoodKind {
    /// The four sides of a real cell.
    Cell,
    /// The four edges meeting at an interior corner, below and to the right of the cell at the same position.
    Vertex,
}

/// Four markers examined jointly by one constraint check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Neighborhood {
    /// Even for cell rows, odd for the row of corners between two cell rows.
    pub half_row: Coord,
    /// Column of the cell, or of the cell to the upper left of the corner.
    pub column: Coord,
    /// Whether this is a cell or a vertex neighborhood.
    pub kind: NeighborhoodKind,
    /// The cell's clue, or [`Clue::NoConstraint`] for vertices.
    pub clue: Clue,
    /// Markers ordered `(up, down, left, right)`.
    pub markers: [MarkerId; 4],
}

impl Neighborhood {
    /// The cell this neighborhood belongs to; for a vertex, the cell whose lower right corner it is.
    pub fn anchor(&self) -> Location {
        Location(self.half_row / 2, self.column)
    }
}

/// Counts of marker states within one neighborhood.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    /// Markers the path crosses.
    pub crossed: usize,
    /// Markers the path does not cross.
    pub not_crossed: usize,
    /// Undecided markers.
    pub unknown: usize,
    /// Markers flagged by hand as contradictory.
    pub conflict: usize,
}

impl Tally {
    /// Classify the given states.
    pub fn of(states: impl IntoIterator<Item = MarkerState>) -> Self {
        states.into_iter().fold(Self::default(), |mut tally, state| {
            match state {
                MarkerState::Crossed => tally.crossed += 1,
                MarkerState::NotCrossed => tally.not_crossed += 1,
                MarkerState::Unknown => tally.unknown += 1,
                MarkerState::Conflict => tally.conflict += 1,
            }
            tally
        })
    }

    /// The possible number of crossings consistent with these states.
    ///
    /// Any marker in [`MarkerState::Conflict`] makes the range empty, which is reported as [`None`].
    pub fn crossing_range(&self) -> Option<RangeInclusive<usize>> {
        if self.conflict > 0 {
            return None;
        }

        Some(self.crossed..=self.crossed + self.unknown)
    }

    /// Whether this combination cannot occur around any node of a valid path.
    ///
    /// `not_crossed == 4` is rejected for every clue, vertices included.
    pub(crate) fn is_infeasible(&self, clue: Clue) -> bool {
        self.crossed > 2
            || self.not_crossed == 4
            || (self.not_crossed == 3 && clue == Clue::PassThrough)
    }

    /// The state every unknown marker of the neighborhood is forced into, if any.
    pub(crate) fn forced_state(&self, clue: Clue) -> Option<MarkerState> {
        if self.crossed == 1 && clue.is_endpoint() {
            // the single crossing an endpoint needs is already there
            return Some(MarkerState::NotCrossed);
        }

        if self.unknown > 2 {
            return None;
        }

        if self.crossed == 2 {
            Some(MarkerState::NotCrossed)
        } else if self.not_crossed == 3 {
            Some(MarkerState::Crossed)
        } else if self.not_crossed == 2 && clue == Clue::PassThrough {
            Some(MarkerState::Crossed)
        } else {
            None
        }
    }
}
