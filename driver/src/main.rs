use std::num::NonZero;
use std::process::ExitCode;

use relaxlink::{Clue, LatticeBuilder, Location, Outcome};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(size) = NonZero::new(5) else {
        return ExitCode::FAILURE;
    };

    // the top left corner is open floor, with a pair of endpoints further down
    let mut builder = LatticeBuilder::with_dims((size, size));
    for row in 0..2 {
        for column in 0..3 {
            builder.set_clue(Location(row, column), Clue::PassThrough);
        }
    }
    builder.add_endpoints(1, (Location(4, 2), Location(1, 2)));

    let mut lattice = match builder.build() {
        Ok(lattice) => lattice,
        Err(reasons) => {
            error!(?reasons, "invalid puzzle");
            return ExitCode::FAILURE;
        }
    };

    let max_sweeps = lattice.markers().count() + 1;
    let (outcome, sweeps) = lattice.relax_to_fixpoint(max_sweeps);
    info!(%outcome, sweeps, "propagation finished");
    print!("{}", lattice);

    match outcome {
        Outcome::Conflict(report) => {
            error!(%report, "puzzle is inconsistent");
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}
