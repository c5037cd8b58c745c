//! Bindings for hosting a [`Lattice`] in a browser.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::cell::Clue;
use crate::lattice::Lattice;
use crate::location::{Dimension, Location};
use crate::marker::MarkerState;
use crate::relax::Outcome;

/// A [`Lattice`] as seen from JavaScript.
#[wasm_bindgen]
pub struct WasmLattice {
    inner: Lattice,
}

fn encode_state(state: MarkerState) -> u8 {
    match state {
        MarkerState::NotCrossed => 0,
        MarkerState::Crossed => 1,
        MarkerState::Unknown => 2,
        MarkerState::Conflict => 3,
    }
}

#[wasm_bindgen]
impl WasmLattice {
    /// A lattice of `width * height` cells without clues.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<WasmLattice, JsError> {
        let width = Dimension::new(width).ok_or_else(|| JsError::new("width must be positive"))?;
        let height = Dimension::new(height).ok_or_else(|| JsError::new("height must be positive"))?;
        Ok(Self { inner: Lattice::new(width, height) })
    }

    /// One sweep: 0 for no change, 1 when relaxed, 2 on a conflict (see `lastConflict`).
    pub fn relax(&mut self) -> u8 {
        match self.inner.relax() {
            Outcome::NoChange => 0,
            Outcome::Relaxed => 1,
            Outcome::Conflict(_) => 2,
        }
    }

    /// A description of the conflict found by the last sweep, if any.
    #[wasm_bindgen(js_name = lastConflict)]
    pub fn last_conflict(&self) -> Option<String> {
        self.inner.last_conflict().map(ToString::to_string)
    }

    /// Restore every marker to its initial state.
    #[wasm_bindgen(js_name = resetMarkers)]
    pub fn reset_markers(&mut self) {
        self.inner.reset_markers()
    }

    /// Cycle the clue of a cell: none, pass-through, endpoint 1, endpoint 0.
    #[wasm_bindgen(js_name = cycleClue)]
    pub fn cycle_clue(&mut self, row: usize, column: usize) -> Result<(), JsError> {
        self.inner.cycle_clue(Location(row, column))?;
        Ok(())
    }

    /// Mark a cell as a path endpoint labelled `label`.
    #[wasm_bindgen(js_name = setEndpoint)]
    pub fn set_endpoint(&mut self, row: usize, column: usize, label: u32) -> Result<(), JsError> {
        Ok(self.inner.set_clue(Location(row, column), Clue::Endpoint(label))?)
    }

    /// Toggle the marker at edge lattice position `(row, column)`, returning its new state code.
    #[wasm_bindgen(js_name = toggleMarker)]
    pub fn toggle_marker(&mut self, row: usize, column: usize) -> Result<u8, JsError> {
        let id = self.inner.marker_at(row, column)?;
        Ok(encode_state(self.inner.toggle_marker(id)?))
    }

    /// Every marker state code in storage order: 0 not crossed, 1 crossed, 2 unknown, 3 conflict.
    #[wasm_bindgen(js_name = markerStates)]
    pub fn marker_states(&self) -> Uint8Array {
        let codes: Vec<u8> = self.inner.snapshot().into_iter().map(encode_state).collect();
        Uint8Array::from(codes.as_slice())
    }

    /// The lattice as text, one line per edge lattice row.
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}
