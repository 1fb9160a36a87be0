//! Heliocentric planet positions from low-precision Keplerian elements.
//!
//! Positions are expressed in astronomical units in the J2000 ecliptic frame,
//! with +X toward the equinox. The element table is the JPL "Approximate
//! Positions of the Planets" fit for 1800–2050; accuracy degrades outside
//! roughly [-2, +0.5] Julian centuries from J2000 but the model still evaluates.

pub mod anomaly;
pub mod elements;
pub mod planet;
pub mod propagator;

pub use anomaly::{
    KEPLER_ITERATIONS, initial_eccentric_anomaly, kepler_step, normalize_mean_anomaly,
    solve_eccentric_anomaly, solve_eccentric_anomaly_with,
};
pub use elements::{ELEMENT_TABLE, InstantElements, OrbitalElementSet};
pub use planet::Planet;
pub use propagator::{
    Position, PropagationError, compute_position, locate, locate_all, orbital_plane_coordinates,
    rotate_to_ecliptic,
};
