//! Mean-to-eccentric anomaly conversion, kept in degrees throughout.
//!
//! Kepler's equation in degree form is `M = E − e*·sin E` with `e* = 180/π · e`.
//! The solver runs a fixed number of Newton corrections rather than iterating
//! to a tolerance, so its cost is bounded for every input.

use kepler_core::constants::PI;

/// Newton corrections applied after the initial estimate.
///
/// Five steps reach ~1e-6 degrees for every planet in the table.
pub const KEPLER_ITERATIONS: usize = 5;

/// Fold the mean anomaly down into (−180°, 180°] by subtracting whole turns.
///
/// Only values above 180° are corrected. Very negative anomalies are returned
/// unchanged; the trigonometric steps downstream are periodic so the position
/// is unaffected, but the returned angle is not a canonical one.
pub fn normalize_mean_anomaly(mut mean_anomaly_deg: f64) -> f64 {
    while mean_anomaly_deg > 180.0 {
        mean_anomaly_deg -= 360.0;
    }
    mean_anomaly_deg
}

/// First guess `E0 = M + e*·sin M` (degrees).
#[inline]
pub fn initial_eccentric_anomaly(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    mean_anomaly_deg + (eccentricity * 180.0 / PI) * (mean_anomaly_deg * PI / 180.0).sin()
}

/// One Newton correction of Kepler's equation, returning the improved `E` (degrees).
#[inline]
pub fn kepler_step(eccentric_anomaly_deg: f64, mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let ea = eccentric_anomaly_deg;
    let delta_m = mean_anomaly_deg - (ea - (eccentricity * 180.0 / PI) * (ea * PI / 180.0).sin());
    let delta_e = delta_m / (1.0 - eccentricity * (ea * PI / 180.0).cos());
    ea + delta_e
}

/// Solve for eccentric anomaly with exactly [`KEPLER_ITERATIONS`] corrections.
pub fn solve_eccentric_anomaly(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    solve_eccentric_anomaly_with(mean_anomaly_deg, eccentricity, KEPLER_ITERATIONS)
}

/// Solve for eccentric anomaly with a caller-chosen number of corrections.
pub fn solve_eccentric_anomaly_with(
    mean_anomaly_deg: f64,
    eccentricity: f64,
    iterations: usize,
) -> f64 {
    let mut eccentric_anomaly = initial_eccentric_anomaly(mean_anomaly_deg, eccentricity);
    for _ in 0..iterations {
        eccentric_anomaly = kepler_step(eccentric_anomaly, mean_anomaly_deg, eccentricity);
    }
    eccentric_anomaly
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn residual(eccentric_anomaly_deg: f64, mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
        let e_star = eccentricity * 180.0 / PI;
        eccentric_anomaly_deg - e_star * (eccentric_anomaly_deg * PI / 180.0).sin() - mean_anomaly_deg
    }

    #[test]
    fn exactly_180_is_left_alone() {
        assert_eq!(normalize_mean_anomaly(180.0), 180.0);
    }

    #[test]
    fn just_past_180_wraps_once() {
        let m = normalize_mean_anomaly(180.00001);
        assert_abs_diff_eq!(m, 180.00001 - 360.0, epsilon = 1e-12);
    }

    #[test]
    fn many_turns_are_removed() {
        let m = normalize_mean_anomaly(5_095.99);
        assert!(m > -180.0 && m <= 180.0, "m = {m}");
        assert_abs_diff_eq!(m, 5_095.99 - 14.0 * 360.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_anomalies_are_not_raised() {
        assert_eq!(normalize_mean_anomaly(-179.0), -179.0);
        assert_eq!(normalize_mean_anomaly(-900.0), -900.0);
    }

    #[test]
    fn circular_orbit_is_identity() {
        for m in [-170.0, -45.0, 0.0, 30.0, 179.0] {
            assert_eq!(solve_eccentric_anomaly(m, 0.0), m);
        }
    }

    #[test]
    fn solution_satisfies_keplers_equation() {
        for e in [0.00677672, 0.01671123, 0.0933941, 0.20563593, 0.2488273] {
            for m in [-150.0, -60.0, -1.0, 0.5, 36.6, 120.0, 175.0] {
                let ea = solve_eccentric_anomaly(m, e);
                assert_abs_diff_eq!(residual(ea, m, e), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn zero_iterations_returns_initial_guess() {
        let m = 42.0;
        let e = 0.2;
        assert_eq!(
            solve_eccentric_anomaly_with(m, e, 0),
            initial_eccentric_anomaly(m, e)
        );
    }

    #[test]
    fn extra_iterations_change_little() {
        for e in [0.01671123, 0.20563593, 0.2488273] {
            for m in [-179.0, -90.0, 10.0, 90.0, 179.0] {
                let five = solve_eccentric_anomaly(m, e);
                let twenty = solve_eccentric_anomaly_with(m, e, 20);
                assert!((five - twenty).abs() < 1e-6, "e={e} m={m}");
            }
        }
    }
}
