use petgraph::graphmap::UnGraphMap;

use crate::lattice::Lattice;
use crate::location::Location;
use crate::marker::{MarkerId, MarkerState};
use crate::side::Side;

impl Lattice {
    /// The path drawn so far, as a graph over cells.
    ///
    /// Every cell is a node. Two adjacent cells are joined by an edge, weighted with the marker between them,
    /// exactly when that marker is [`Crossed`](MarkerState::Crossed).
    pub fn path_graph(&self) -> UnGraphMap<Location, MarkerId> {
        let mut graph = UnGraphMap::with_capacity(
            self.width() * self.height(),
            // a path through every cell has at most this many segments
            self.width() * self.height(),
        );

        for cell in self.cells() {
            graph.add_node(cell.location());
        }

        for cell in self.cells() {
            for side in Side::FORWARD_VARIANTS {
                let neighbor = side.attempt_from(cell.location());
                if !neighbor.within(self.dims) {
                    continue;
                }

                let id = cell.marker(*side);
                if self.markers[id.0].state == MarkerState::Crossed {
                    graph.add_edge(cell.location(), neighbor, id);
                }
            }
        }

        graph
    }
}
