#![warn(missing_docs)]

//! # `relaxlink`
//!
//! A constraint propagation engine for loop-drawing puzzles on a rectangular grid, in the family of
//! [Numberlink](https://en.wikipedia.org/wiki/Numberlink) and Slitherlink.
//! A path runs from cell to cell, crossing the edges between them; each cell carries a [`Clue`] saying how
//! many of its four edges the path must cross.
//! Begin by building a [`Lattice`] with [`Lattice::new`] or a [`LatticeBuilder`](builder::LatticeBuilder),
//! set clues and markers, then call [`relax()`](crate::Lattice::relax) until it returns [`Outcome::NoChange`]
//! or reports an [`Outcome::Conflict`].
//!
//! # Internals
//! Every edge of the grid holds a [`Marker`] recording whether the path crosses it.
//! Markers are stored once and referred to by [`MarkerId`], so two cells sharing an edge see the same marker,
//! and a decision made around one cell is immediately available to its neighbors.
//!
//! Markers are examined four at a time, in [`Neighborhood`]s:
//! 1. Around every cell, checked against the cell's clue: a pass-through cell is crossed exactly twice,
//!    an endpoint exactly once.
//! 2. Around every interior corner, with no clue: no more than two crossings meet there.
//!
//! A sweep counts the crossed, uncrossed and unknown markers of each neighborhood, stops on a neighborhood
//! that cannot be satisfied, and otherwise decides unknown markers whose state is forced.
//! No search or backtracking happens; the engine only tightens what is locally certain.

pub use builder::LatticeBuilder;
pub use cell::{Cell, Clue};
pub use error::LatticeError;
pub use lattice::Lattice;
pub use location::{Coord, Dimension, Location};
pub use marker::{Marker, MarkerId, MarkerState};
pub use neighborhood::{Neighborhood, NeighborhoodKind, Tally};
pub use relax::{ConflictReport, Outcome, Rules};
pub use side::Side;

pub mod builder;
pub(crate) mod cell;
pub(crate) mod error;
pub mod geometry;
pub(crate) mod lattice;
pub(crate) mod location;
pub(crate) mod marker;
pub(crate) mod neighborhood;
pub(crate) mod path;
pub(crate) mod relax;
pub(crate) mod side;
#[cfg(feature = "wasm")]
pub mod wasm;
