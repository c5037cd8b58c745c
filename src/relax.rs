use std::fmt::{Display, Formatter};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::lattice::Lattice;
use crate::location::Coord;
use crate::marker::MarkerState;
use crate::neighborhood::{NeighborhoodKind, Tally};

/// Where a sweep found an infeasible neighborhood, and what it saw there.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ConflictReport {
    /// Half row of the neighborhood, see [`Lattice::neighborhoods`].
    pub half_row: Coord,
    /// Column of the neighborhood.
    pub column: Coord,
    /// Crossed markers in the neighborhood.
    pub crossed: usize,
    /// Not crossed markers in the neighborhood.
    pub not_crossed: usize,
}

impl ConflictReport {
    /// Whether the conflict lies around a cell or around a corner.
    pub fn kind(&self) -> NeighborhoodKind {
        if self.half_row % 2 == 0 {
            NeighborhoodKind::Cell
        } else {
            NeighborhoodKind::Vertex
        }
    }
}

impl Display for ConflictReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind() {
            NeighborhoodKind::Cell => "cell",
            NeighborhoodKind::Vertex => "corner",
        };
        write!(f, "{} at half row {}, column {}: {} crossed, {} not crossed",
               kind, self.half_row, self.column, self.crossed, self.not_crossed)
    }
}

/// The result of one sweep of [`Lattice::relax`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// No marker changed; further sweeps will not change anything either.
    NoChange,
    /// At least one unknown marker was decided.
    Relaxed,
    /// A neighborhood admits no valid path. The lattice is left as the sweep found it.
    Conflict(ConflictReport),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoChange => write!(f, "no changes"),
            Outcome::Relaxed => write!(f, "relaxed"),
            Outcome::Conflict(report) => write!(f, "conflict in {}", report),
        }
    }
}

/// Which neighborhoods a sweep examines.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rules {
    /// Apply the checks to the corners between cells as well as to the cells themselves.
    ///
    /// Corners are held to the same counting rules as cells without a clue, including the
    /// rejection of four uncrossed edges and forcing a crossing once three are uncrossed.
    pub vertex_neighborhoods: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self { vertex_neighborhoods: true }
    }
}

impl Lattice {
    /// Perform one sweep of local tightening over every neighborhood.
    ///
    /// For each neighborhood in the order of [`neighborhoods`](Lattice::neighborhoods):
    /// 1. More than two crossed markers, four uncrossed markers, or three uncrossed markers around a
    ///    pass-through cell end the sweep with [`Outcome::Conflict`]. Markers decided earlier in
    ///    the sweep stay decided.
    /// 2. An endpoint with one crossed marker gets all its unknown markers set to not crossed.
    /// 3. With at most two unknown markers: two crossed markers force the rest to not crossed;
    ///    otherwise three uncrossed markers, or two around a pass-through cell, force the rest to crossed.
    ///
    /// Only unknown interior markers are ever written. A single call is one sweep; call again until
    /// [`Outcome::NoChange`] or use [`relax_to_fixpoint`](Lattice::relax_to_fixpoint).
    pub fn relax(&mut self) -> Outcome {
        let check_vertices = self.rules.vertex_neighborhoods;
        let neighborhoods = self.neighborhoods()
            .filter(|neighborhood| check_vertices || neighborhood.kind == NeighborhoodKind::Cell)
            .collect_vec();

        let mut changed = false;
        for neighborhood in neighborhoods {
            let tally = Tally::of(neighborhood.markers.iter().map(|id| self.markers[id.0].state));

            if tally.is_infeasible(neighborhood.clue) {
                let report = ConflictReport {
                    half_row: neighborhood.half_row,
                    column: neighborhood.column,
                    crossed: tally.crossed,
                    not_crossed: tally.not_crossed,
                };
                debug!(%report, "sweep stopped on infeasible neighborhood");
                self.last_conflict = Some(report);
                return Outcome::Conflict(report);
            }

            let Some(forced) = tally.forced_state(neighborhood.clue) else {
                continue;
            };

            for id in neighborhood.markers {
                let marker = &mut self.markers[id.0];
                if marker.state != MarkerState::Unknown || marker.boundary {
                    continue;
                }

                trace!(marker = %id, state = ?forced, half_row = neighborhood.half_row, column = neighborhood.column, "decided marker");
                marker.state = forced;
                changed = true;
            }
        }

        self.last_conflict = None;
        let outcome = if changed { Outcome::Relaxed } else { Outcome::NoChange };
        debug!(%outcome, "sweep finished");
        outcome
    }

    /// Sweep until nothing changes or a conflict appears, at most `max_sweeps` times.
    ///
    /// Returns the last outcome with the number of sweeps performed. [`Outcome::Relaxed`] means the
    /// limit was hit while still making progress; with a limit of zero nothing runs and
    /// [`Outcome::NoChange`] is reported.
    pub fn relax_to_fixpoint(&mut self, max_sweeps: usize) -> (Outcome, usize) {
        let mut outcome = Outcome::NoChange;
        for sweep in 1..=max_sweeps {
            outcome = self.relax();
            if outcome != Outcome::Relaxed {
                return (outcome, sweep);
            }
        }

        (outcome, max_sweeps)
    }
}
