use ndarray::Array2;

use crate::cell::Clue;
use crate::lattice::{marker_index, Lattice};
use crate::location::{Coord, Dimension, Location};
use crate::marker::MarkerState;
use crate::relax::Rules;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A clue was placed outside the bounds specified by `dims` on the builder.
    FeatureOutOfBounds,
    /// A marker edit named edge lattice coordinates where no marker exists.
    NoSuchMarker,
}

/// Sets up a [`Lattice`]: its size, clues, initial marker edits, and propagation [`Rules`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, further calls do nothing and [`build`](Self::build) reports why.
#[derive(Clone)]
pub struct LatticeBuilder {
    // width, height
    dims: (Dimension, Dimension),
    clues: Array2<Clue>,
    // edge lattice (row, column) and the state to put there, applied in order
    marker_edits: Vec<((Coord, Coord), MarkerState)>,
    rules: Rules,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

// the board the puzzle starts out with
const DEFAULT_SIZE: Dimension = match Dimension::new(5) {
    Some(size) => size,
    None => Dimension::MIN,
};

impl Default for LatticeBuilder {
    fn default() -> Self {
        Self::with_dims((DEFAULT_SIZE, DEFAULT_SIZE))
    }
}

impl LatticeBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            clues: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Clue::default),

            marker_edits: Default::default(),
            rules: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Set the clue of the cell at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn set_clue(&mut self, location: Location, clue: Clue) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.clues[location.as_index()] = clue;
        self
    }

    /// Give every cell the same clue, overwriting any set before.
    pub fn fill_clues(&mut self, clue: Clue) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.clues.fill(clue);
        self
    }

    /// Place a pair of endpoints sharing `label`. The order in which `locations` are specified does not matter.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if either location is out of bounds.
    pub fn add_endpoints(&mut self, label: u32, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !locations.0.within(self.dims) || !locations.1.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        for location in [locations.0, locations.1] {
            self.clues[location.as_index()] = Clue::Endpoint(label);
        }
        self
    }

    /// Put the marker at edge lattice position `(row, column)` into `state` once the lattice is built.
    ///
    /// May cause the builder to enter a [`NoSuchMarker`](BuilderInvalidReason::NoSuchMarker) invalid state if there is no marker there.
    pub fn set_marker(&mut self, position: (Coord, Coord), state: MarkerState) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if marker_index(self.dims, position.0, position.1).is_none() {
            self.invalid_reasons.push(BuilderInvalidReason::NoSuchMarker);
            return self;
        }

        self.marker_edits.push((position, state));
        self
    }

    /// Use `rules` for every sweep of the built lattice.
    pub fn rules(&mut self, rules: Rules) -> &mut Self {
        self.rules = rules;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Lattice`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Lattice, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut lattice = Lattice::new(self.dims.0, self.dims.1);
        lattice.clues = self.clues.clone();
        lattice.rules = self.rules;

        for ((row, column), state) in self.marker_edits.iter() {
            // positions were checked against the same dims when recorded
            if let Some(index) = marker_index(self.dims, *row, *column) {
                lattice.markers[index].state = *state;
            }
        }

        Ok(lattice)
    }
}
