//! Heliocentric planet positions from JPL approximate Keplerian elements.
//!
//! The propagator lives in `kepler_orbits`; this crate re-exports the workspace
//! members and adds the report pipeline shared by front-ends such as the
//! `locate` CLI.

pub mod report;

pub use kepler_config as config;
pub use kepler_core::{constants, time, units, vector};
pub use kepler_export as export;
pub use kepler_orbits as orbits;

pub use kepler_orbits::{Planet, Position, PropagationError, compute_position, locate};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
