//! Mean orbital elements and their secular rates.

use kepler_core::constants::PI;

/// Base elements at J2000 plus linear rates per Julian century for one planet.
///
/// Angles are in degrees, `a` in AU, `e` dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElementSet {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub longitude_of_periapsis_deg: f64,
    pub longitude_of_ascending_node_deg: f64,

    pub semi_major_axis_rate: f64,
    pub eccentricity_rate: f64,
    pub inclination_rate: f64,
    pub mean_longitude_rate: f64,
    pub longitude_of_periapsis_rate: f64,
    pub longitude_of_ascending_node_rate: f64,
}

/// Elements interpolated to a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub longitude_of_periapsis_deg: f64,
    pub longitude_of_ascending_node_deg: f64,
}

impl OrbitalElementSet {
    const fn new(base: [f64; 6], rates: [f64; 6]) -> Self {
        Self {
            semi_major_axis_au: base[0],
            eccentricity: base[1],
            inclination_deg: base[2],
            mean_longitude_deg: base[3],
            longitude_of_periapsis_deg: base[4],
            longitude_of_ascending_node_deg: base[5],
            semi_major_axis_rate: rates[0],
            eccentricity_rate: rates[1],
            inclination_rate: rates[2],
            mean_longitude_rate: rates[3],
            longitude_of_periapsis_rate: rates[4],
            longitude_of_ascending_node_rate: rates[5],
        }
    }

    /// Evaluate `base + rate * time` for all six elements.
    pub fn at(&self, centuries: f64) -> InstantElements {
        InstantElements {
            semi_major_axis_au: self.semi_major_axis_au + self.semi_major_axis_rate * centuries,
            eccentricity: self.eccentricity + self.eccentricity_rate * centuries,
            inclination_deg: self.inclination_deg + self.inclination_rate * centuries,
            mean_longitude_deg: self.mean_longitude_deg + self.mean_longitude_rate * centuries,
            longitude_of_periapsis_deg: self.longitude_of_periapsis_deg
                + self.longitude_of_periapsis_rate * centuries,
            longitude_of_ascending_node_deg: self.longitude_of_ascending_node_deg
                + self.longitude_of_ascending_node_rate * centuries,
        }
    }
}

impl InstantElements {
    /// ω = ϖ − Ω (degrees).
    #[inline]
    pub fn argument_of_periapsis_deg(&self) -> f64 {
        self.longitude_of_periapsis_deg - self.longitude_of_ascending_node_deg
    }

    /// M = L − ϖ (degrees, not normalized).
    #[inline]
    pub fn mean_anomaly_deg(&self) -> f64 {
        self.mean_longitude_deg - self.longitude_of_periapsis_deg
    }

    /// Eccentricity scaled into degrees, e* = 180/π · e.
    #[inline]
    pub fn eccentricity_deg(&self) -> f64 {
        self.eccentricity * 180.0 / PI
    }

    /// a(1 − e), the closest heliocentric distance on this ellipse.
    #[inline]
    pub fn perihelion_distance(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    /// a(1 + e), the farthest heliocentric distance on this ellipse.
    #[inline]
    pub fn aphelion_distance(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Whether the instantaneous orbit is still a closed ellipse.
    #[inline]
    pub fn is_elliptical(&self) -> bool {
        self.eccentricity < 1.0
    }
}

/// JPL approximate elements (Table 1, valid 1800–2050), Mercury through Pluto.
///
/// Columns: a [AU], e, I [deg], L [deg], ϖ [deg], Ω [deg]; rates per Julian century.
/// Index 2 is the Earth–Moon barycenter.
pub static ELEMENT_TABLE: [OrbitalElementSet; 9] = [
    OrbitalElementSet::new(
        [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
        [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
    ),
    OrbitalElementSet::new(
        [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
        [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
    ),
    OrbitalElementSet::new(
        [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
        [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
    ),
    OrbitalElementSet::new(
        [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
        [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
    ),
    OrbitalElementSet::new(
        [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
        [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
    ),
    OrbitalElementSet::new(
        [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
        [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
    ),
    OrbitalElementSet::new(
        [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503],
        [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
    ),
    OrbitalElementSet::new(
        [30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574],
        [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
    ),
    OrbitalElementSet::new(
        [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
        [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_returns_base_values_exactly() {
        for set in &ELEMENT_TABLE {
            let now = set.at(0.0);
            assert_eq!(now.semi_major_axis_au, set.semi_major_axis_au);
            assert_eq!(now.eccentricity, set.eccentricity);
            assert_eq!(now.inclination_deg, set.inclination_deg);
            assert_eq!(now.mean_longitude_deg, set.mean_longitude_deg);
            assert_eq!(now.longitude_of_periapsis_deg, set.longitude_of_periapsis_deg);
            assert_eq!(
                now.longitude_of_ascending_node_deg,
                set.longitude_of_ascending_node_deg
            );
        }
    }

    #[test]
    fn rates_apply_linearly() {
        let mars = &ELEMENT_TABLE[3];
        let later = mars.at(1.0);
        assert!((later.mean_longitude_deg - (-4.55343205 + 19140.30268499)).abs() < 1e-9);
        assert!((later.eccentricity - (0.09339410 + 0.00007882)).abs() < 1e-12);
    }

    #[test]
    fn eccentricities_stay_elliptical_across_validity_window() {
        for set in &ELEMENT_TABLE {
            for t in [-2.0, -1.0, 0.0, 0.5] {
                assert!(set.at(t).is_elliptical());
            }
        }
    }

    #[test]
    fn derived_angles() {
        let earth = ELEMENT_TABLE[2].at(0.0);
        assert!((earth.argument_of_periapsis_deg() - 102.93768193).abs() < 1e-12);
        assert!((earth.mean_anomaly_deg() - (100.46457166 - 102.93768193)).abs() < 1e-12);
        assert!(earth.perihelion_distance() < 1.0 && earth.aphelion_distance() > 1.0);
    }
}
