use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::{Array2, Ix};
use unordered_pair::UnorderedPair;

use crate::cell::{Cell, Clue};
use crate::error::LatticeError;
use crate::location::{Coord, Dimension, Location};
use crate::marker::{Marker, MarkerId, MarkerState};
use crate::neighborhood::{Neighborhood, NeighborhoodKind};
use crate::relax::{ConflictReport, Rules};
use crate::side::Side;

/// A rectangular puzzle: the clue of every cell and the state of every edge marker.
///
/// Markers are stored once and shared by index between the cells and corners around them,
/// so a decision made while examining one neighborhood is immediately seen by the others.
///
/// Construct one with [`Lattice::new`] or a [`LatticeBuilder`](crate::builder::LatticeBuilder),
/// then call [`relax`](Lattice::relax) until it stops making progress.
#[derive(Clone, Debug)]
pub struct Lattice {
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) clues: Array2<Clue>,
    pub(crate) markers: Vec<Marker>,
    pub(crate) rules: Rules,
    pub(crate) last_conflict: Option<ConflictReport>,
}

/// Map edge lattice coordinates to the storage index of the marker there, if any.
pub(crate) fn marker_index(dims: (Dimension, Dimension), row: Coord, column: Coord) -> Option<usize> {
    let (width, height) = (dims.0.get(), dims.1.get());
    if row > 2 * height {
        return None;
    }

    if row % 2 == 0 {
        // horizontal edges sit between corners, at odd columns
        (column % 2 == 1 && column / 2 < width).then(|| horizontal_index(width, row / 2, column / 2))
    } else {
        (column % 2 == 0 && column / 2 <= width).then(|| vertical_index(width, row / 2, column / 2))
    }
}

// each band of the edge lattice holds one row of horizontal edges followed by one row of vertical edges
#[inline]
fn horizontal_index(width: usize, boundary_row: usize, column: usize) -> usize {
    boundary_row * (2 * width + 1) + column
}

#[inline]
fn vertical_index(width: usize, cell_row: usize, boundary_column: usize) -> usize {
    cell_row * (2 * width + 1) + width + boundary_column
}

impl Lattice {
    /// Build a lattice of `width * height` cells without clues.
    ///
    /// Markers on the outer boundary start out [`NotCrossed`](MarkerState::NotCrossed), all others [`Unknown`](MarkerState::Unknown).
    pub fn new(width: Dimension, height: Dimension) -> Self {
        let (w, h) = (width.get(), height.get());

        let mut markers = Vec::with_capacity(h * (2 * w + 1) + w);
        for boundary_row in 0..=h {
            markers.extend((0..w).map(|column| Marker {
                row: 2 * boundary_row,
                column: 2 * column + 1,
                boundary: boundary_row == 0 || boundary_row == h,
                state: MarkerState::Unknown,
            }));

            if boundary_row < h {
                markers.extend((0..=w).map(|boundary_column| Marker {
                    row: 2 * boundary_row + 1,
                    column: 2 * boundary_column,
                    boundary: boundary_column == 0 || boundary_column == w,
                    state: MarkerState::Unknown,
                }));
            }
        }

        let mut lattice = Self {
            dims: (width, height),
            clues: Array2::from_shape_simple_fn((h, w), Clue::default),
            markers,
            rules: Rules::default(),
            last_conflict: None,
        };
        lattice.reset_markers();
        lattice
    }

    /// Build a fresh lattice of a different size, keeping the clues of cells present in both.
    ///
    /// Marker states are not carried over.
    pub fn resized(&self, width: Dimension, height: Dimension) -> Self {
        let mut resized = Self::new(width, height);
        resized.rules = self.rules;
        for (index, clue) in self.clues.indexed_iter() {
            if let Some(slot) = resized.clues.get_mut(index) {
                *slot = *clue;
            }
        }

        resized
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of cell rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// The propagation rules [`relax`](Lattice::relax) applies.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Change the propagation rules for subsequent sweeps.
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Put every marker back in its initial state. Clues are untouched and any recorded conflict is cleared.
    pub fn reset_markers(&mut self) {
        for marker in self.markers.iter_mut() {
            marker.state = marker.initial_state();
        }
        self.last_conflict = None;
    }

    /// The diagnostic of the most recent sweep, if it ended in a conflict.
    pub fn last_conflict(&self) -> Option<&ConflictReport> {
        self.last_conflict.as_ref()
    }

    fn check_location(&self, location: Location) -> Result<(), LatticeError> {
        if location.within(self.dims) {
            Ok(())
        } else {
            Err(LatticeError::OutOfRange { row: location.row(), column: location.column() })
        }
    }

    /// Look up the cell at `(row, column)`.
    pub fn cell_at(&self, row: Coord, column: Coord) -> Result<Cell, LatticeError> {
        self.check_location(Location(row, column))?;
        Ok(self.cell_unchecked(Location(row, column)))
    }

    fn cell_unchecked(&self, location: Location) -> Cell {
        let (width, Location(row, column)) = (self.width(), location);
        Cell {
            location,
            clue: self.clues[location.as_index()],
            markers: [
                MarkerId(horizontal_index(width, row, column)),
                MarkerId(horizontal_index(width, row + 1, column)),
                MarkerId(vertical_index(width, row, column)),
                MarkerId(vertical_index(width, row, column + 1)),
            ],
        }
    }

    /// Every cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.clues.indexed_iter().map(|(index, _)| self.cell_unchecked(Location::from(index)))
    }

    /// The clue of the cell at `location`.
    pub fn clue(&self, location: Location) -> Result<Clue, LatticeError> {
        self.check_location(location)?;
        Ok(self.clues[location.as_index()])
    }

    /// Replace the clue of the cell at `location`.
    pub fn set_clue(&mut self, location: Location, clue: Clue) -> Result<(), LatticeError> {
        self.check_location(location)?;
        self.clues[location.as_index()] = clue;
        Ok(())
    }

    /// Advance the clue at `location` one step through the editing cycle, see [`Clue::cycled`].
    pub fn cycle_clue(&mut self, location: Location) -> Result<Clue, LatticeError> {
        let clue = self.clue(location)?.cycled();
        self.set_clue(location, clue)?;
        Ok(clue)
    }

    /// The marker at edge lattice position `(row, column)`.
    pub fn marker_at(&self, row: Coord, column: Coord) -> Result<MarkerId, LatticeError> {
        marker_index(self.dims, row, column)
            .map(MarkerId)
            .ok_or(LatticeError::MarkerOutOfRange { row, column })
    }

    /// The marker on the edge shared by two orthogonally adjacent cells.
    pub fn marker_between(&self, cells: UnorderedPair<Location>) -> Result<MarkerId, LatticeError> {
        let UnorderedPair(a, b) = cells;
        self.check_location(a)?;
        self.check_location(b)?;

        let side = Side::direction_to(a, b).ok_or(LatticeError::NotAdjacent(a, b))?;
        Ok(self.cell_unchecked(a).marker(side))
    }

    /// Look up a marker by id.
    pub fn marker(&self, id: MarkerId) -> Result<&Marker, LatticeError> {
        self.markers.get(id.0).ok_or(LatticeError::UnknownMarker(id))
    }

    /// The state of the marker `id`.
    pub fn state(&self, id: MarkerId) -> Result<MarkerState, LatticeError> {
        self.marker(id).map(|marker| marker.state)
    }

    /// Every marker with its id, in storage order.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &Marker)> + '_ {
        self.markers.iter().enumerate().map(|(index, marker)| (MarkerId(index), marker))
    }

    /// Overwrite the state of marker `id`, returning the previous state.
    ///
    /// Any marker may be edited, boundary markers included; propagation itself never writes to the boundary.
    pub fn set_marker_state(&mut self, id: MarkerId, state: MarkerState) -> Result<MarkerState, LatticeError> {
        let marker = self.markers.get_mut(id.0).ok_or(LatticeError::UnknownMarker(id))?;
        Ok(std::mem::replace(&mut marker.state, state))
    }

    /// Advance marker `id` one step through the editing cycle, see [`MarkerState::toggled`].
    pub fn toggle_marker(&mut self, id: MarkerId) -> Result<MarkerState, LatticeError> {
        let marker = self.markers.get_mut(id.0).ok_or(LatticeError::UnknownMarker(id))?;
        marker.state = marker.state.toggled();
        Ok(marker.state)
    }

    /// Copy out every marker state, e.g. to undo a sweep that ends in a conflict.
    pub fn snapshot(&self) -> Vec<MarkerState> {
        self.markers.iter().map(|marker| marker.state).collect_vec()
    }

    /// Restore marker states taken with [`snapshot`](Lattice::snapshot).
    pub fn restore(&mut self, states: &[MarkerState]) -> Result<(), LatticeError> {
        if states.len() != self.markers.len() {
            return Err(LatticeError::SnapshotMismatch { expected: self.markers.len(), actual: states.len() });
        }

        for (marker, state) in self.markers.iter_mut().zip(states) {
            marker.state = *state;
        }
        Ok(())
    }

    /// Every neighborhood, in the order [`relax`](Lattice::relax) examines them.
    ///
    /// `half_row` runs over `0..2 * height - 1`. Even half rows hold the cells of row `half_row / 2`;
    /// odd half rows hold the interior corners between that row and the next, one fewer than there are cells.
    pub fn neighborhoods(&self) -> impl Iterator<Item = Neighborhood> + '_ {
        let width = self.width();
        (0..2 * self.height() - 1)
            .cartesian_product(0..width)
            .filter(move |&(half_row, column)| half_row % 2 == 0 || column + 1 < width)
            .map(move |(half_row, column)| self.neighborhood(half_row, column))
    }

    fn neighborhood(&self, half_row: Coord, column: Coord) -> Neighborhood {
        let (width, row) = (self.width(), half_row / 2);
        if half_row % 2 == 0 {
            let cell = self.cell_unchecked(Location(row, column));
            return Neighborhood {
                half_row,
                column,
                kind: NeighborhoodKind::Cell,
                clue: cell.clue,
                markers: cell.markers,
            };
        }

        // the corner at the lower right of cell (row, column)
        Neighborhood {
            half_row,
            column,
            kind: NeighborhoodKind::Vertex,
            clue: Clue::NoConstraint,
            markers: [
                MarkerId(vertical_index(width, row, column + 1)),
                MarkerId(vertical_index(width, row + 1, column + 1)),
                MarkerId(horizontal_index(width, row + 1, column)),
                MarkerId(horizontal_index(width, row + 1, column + 1)),
            ],
        }
    }

    fn glyph_at(&self, (row, column): (Ix, Ix)) -> char {
        match (row % 2, column % 2) {
            (0, 0) => '+',
            (1, 1) => self.clues[(row / 2, column / 2)].glyph(),
            _ => marker_index(self.dims, row, column)
                .map_or(' ', |index| self.markers[index].state.glyph()),
        }
    }
}

impl Display for Lattice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let glyphs = Array2::from_shape_fn((2 * self.height() + 1, 2 * self.width() + 1), |index| self.glyph_at(index));

        let mut out = String::with_capacity(glyphs.nrows() * (glyphs.ncols() + 1));
        for row in glyphs.rows() {
            out.extend(row.iter());
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
