//! Element interpolation through to heliocentric ecliptic coordinates.

use thiserror::Error;
use tracing::{debug, warn};

use kepler_core::time::within_validity_window;
use kepler_core::units::deg_to_rad;
use kepler_core::vector::{self, Vector3};

use crate::anomaly::{normalize_mean_anomaly, solve_eccentric_anomaly};
use crate::planet::Planet;

/// Heliocentric position in AU, J2000 ecliptic frame, +X toward the equinox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn as_array(&self) -> Vector3 {
        [self.x, self.y, self.z]
    }

    /// Distance from the Sun (AU).
    pub fn distance(&self) -> f64 {
        vector::norm(&self.as_array())
    }

    /// Distance between two heliocentric positions (AU).
    pub fn distance_to(&self, other: &Position) -> f64 {
        vector::norm(&vector::sub(&self.as_array(), &other.as_array()))
    }

    /// Ecliptic angle from the +X axis, `atan2(y, x)` in degrees within (−180, 180].
    pub fn angle_from_x_axis_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

/// Errors surfaced at the propagator's input boundary.
#[derive(Debug, Error, PartialEq)]
pub enum PropagationError {
    #[error("planet index {index} is outside 0..=8")]
    PlanetIndexOutOfRange { index: i64 },
    #[error("time must be finite (got {time})")]
    NonFiniteTime { time: f64 },
    #[error("unknown planet `{name}`")]
    UnknownPlanet { name: String },
}

/// Position of the planet at table index `planet_index` at `time` Julian centuries past J2000.
pub fn compute_position(planet_index: i64, time: f64) -> Result<Position, PropagationError> {
    let planet = Planet::from_index(planet_index)?;
    locate(planet, time)
}

/// Position of `planet` at `time` Julian centuries past J2000.
pub fn locate(planet: Planet, time: f64) -> Result<Position, PropagationError> {
    if !time.is_finite() {
        return Err(PropagationError::NonFiniteTime { time });
    }
    if !within_validity_window(time) {
        debug!(
            planet = planet.name(),
            time, "epoch lies outside the 1800-2050 fit; accuracy is reduced"
        );
    }

    let elements = planet.elements().at(time);
    if !elements.is_elliptical() {
        warn!(
            planet = planet.name(),
            time,
            eccentricity = elements.eccentricity,
            "eccentricity is not below 1; the elliptical model no longer applies"
        );
    }

    let a = elements.semi_major_axis_au;
    let e = elements.eccentricity;
    let omega = elements.argument_of_periapsis_deg();
    let mean_anomaly = normalize_mean_anomaly(elements.mean_anomaly_deg());
    let eccentric_anomaly = solve_eccentric_anomaly(mean_anomaly, e);

    let (x0, y0) = orbital_plane_coordinates(a, e, deg_to_rad(eccentric_anomaly));
    Ok(rotate_to_ecliptic(
        x0,
        y0,
        deg_to_rad(omega),
        deg_to_rad(elements.inclination_deg),
        deg_to_rad(elements.longitude_of_ascending_node_deg),
    ))
}

/// Positions of all nine planets at `time`, in table order.
pub fn locate_all(time: f64) -> Result<Vec<(Planet, Position)>, PropagationError> {
    Planet::ALL
        .iter()
        .map(|&planet| locate(planet, time).map(|position| (planet, position)))
        .collect()
}

/// Coordinates in the orbital plane with x′ pointing from the focus to perihelion.
///
/// `eccentric_anomaly_rad` is in radians; z′ is zero.
#[inline]
pub fn orbital_plane_coordinates(
    semi_major_axis_au: f64,
    eccentricity: f64,
    eccentric_anomaly_rad: f64,
) -> (f64, f64) {
    let x0 = semi_major_axis_au * (eccentric_anomaly_rad.cos() - eccentricity);
    let y0 = semi_major_axis_au
        * (1.0 - eccentricity * eccentricity).sqrt()
        * eccentric_anomaly_rad.sin();
    (x0, y0)
}

/// Rotate orbital-plane coordinates by (ω, I, Ω) into the J2000 ecliptic frame.
///
/// All angles are in radians.
pub fn rotate_to_ecliptic(
    x0: f64,
    y0: f64,
    argument_of_periapsis: f64,
    inclination: f64,
    ascending_node: f64,
) -> Position {
    let (sin_w, cos_w) = argument_of_periapsis.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_o, cos_o) = ascending_node.sin_cos();

    Position {
        x: (cos_w * cos_o - sin_w * sin_o * cos_i) * x0
            + (-sin_w * cos_o - cos_w * sin_o * cos_i) * y0,
        y: (cos_w * sin_o + sin_w * cos_o * cos_i) * x0
            + (-sin_w * sin_o + cos_w * cos_o * cos_i) * y0,
        z: (sin_w * sin_i) * x0 + (cos_w * sin_i) * y0,
    }
}

impl Planet {
    /// Heliocentric position of this planet at `time` Julian centuries past J2000.
    pub fn position_at(self, time: f64) -> Result<Position, PropagationError> {
        locate(self, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn index_boundaries() {
        assert!(compute_position(0, 0.0).is_ok());
        assert!(compute_position(8, 0.0).is_ok());
        assert_eq!(
            compute_position(-1, 0.0),
            Err(PropagationError::PlanetIndexOutOfRange { index: -1 })
        );
        assert_eq!(
            compute_position(9, 0.0),
            Err(PropagationError::PlanetIndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn non_finite_time_is_rejected() {
        for time in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                compute_position(2, time),
                Err(PropagationError::NonFiniteTime { time })
            );
        }
        assert!(matches!(
            compute_position(2, f64::NAN),
            Err(PropagationError::NonFiniteTime { .. })
        ));
    }

    #[test]
    fn index_error_takes_precedence_over_time_error() {
        assert!(matches!(
            compute_position(12, f64::NAN),
            Err(PropagationError::PlanetIndexOutOfRange { index: 12 })
        ));
    }

    #[test]
    fn plane_coordinates_at_perihelion_and_aphelion() {
        let (x, y) = orbital_plane_coordinates(2.0, 0.5, 0.0);
        assert_abs_diff_eq!(x, 1.0);
        assert_abs_diff_eq!(y, 0.0);
        let (x, y) = orbital_plane_coordinates(2.0, 0.5, std::f64::consts::PI);
        assert_abs_diff_eq!(x, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_angles_leave_plane_coordinates_in_place() {
        let p = rotate_to_ecliptic(1.5, -0.25, 0.0, 0.0, 0.0);
        assert_eq!(p, Position { x: 1.5, y: -0.25, z: 0.0 });
    }

    #[test]
    fn rotation_preserves_length() {
        let p = rotate_to_ecliptic(0.3, 0.4, 1.1, 0.3, -2.0);
        assert_abs_diff_eq!(p.distance(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_node_swaps_axes() {
        let p = rotate_to_ecliptic(1.0, 0.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.angle_from_x_axis_deg(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn locate_all_is_table_ordered() {
        let all = locate_all(0.1).unwrap();
        assert_eq!(all.len(), 9);
        for (i, (planet, position)) in all.iter().enumerate() {
            assert_eq!(planet.index(), i);
            assert_eq!(*position, compute_position(i as i64, 0.1).unwrap());
        }
    }

    #[test]
    fn typed_and_indexed_entry_points_agree() {
        let typed = Planet::Saturn.position_at(-0.37).unwrap();
        let indexed = compute_position(5, -0.37).unwrap();
        assert_eq!(typed, indexed);
    }
}
