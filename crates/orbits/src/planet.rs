//! Planet identifiers in element-table order.

use std::fmt;
use std::str::FromStr;

use crate::elements::{ELEMENT_TABLE, OrbitalElementSet};
use crate::propagator::PropagationError;

/// The nine bodies covered by the element table, indexed 0 (Mercury) to 8 (Pluto).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Mercury,
    Venus,
    /// Earth–Moon barycenter.
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// All planets in table order.
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Position of this planet in the element table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a planet by table index, rejecting anything outside 0..=8.
    pub fn from_index(index: i64) -> Result<Self, PropagationError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(PropagationError::PlanetIndexOutOfRange { index })
    }

    /// Display name used by reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Constant elements and rates for this planet.
    #[inline]
    pub fn elements(self) -> &'static OrbitalElementSet {
        &ELEMENT_TABLE[self.index()]
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = PropagationError;

    /// Accepts a case-insensitive name or a table index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Self::from_index(index);
        }
        let upper = trimmed.to_ascii_uppercase();
        let name = upper.strip_suffix(" BARYCENTER").unwrap_or(&upper);
        Self::ALL
            .iter()
            .copied()
            .find(|planet| planet.name().eq_ignore_ascii_case(name))
            .or_else(|| (name == "EARTH-MOON" || name == "EMB").then_some(Planet::Earth))
            .ok_or_else(|| PropagationError::UnknownPlanet {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_table_order() {
        for (i, planet) in Planet::ALL.iter().enumerate() {
            assert_eq!(planet.index(), i);
            assert_eq!(Planet::from_index(i as i64).unwrap(), *planet);
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        for index in [-1, 9, i64::MIN, i64::MAX] {
            match Planet::from_index(index) {
                Err(PropagationError::PlanetIndexOutOfRange { index: got }) => {
                    assert_eq!(got, index)
                }
                other => panic!("expected out-of-range error, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_names_and_indices() {
        assert_eq!("mars".parse::<Planet>().unwrap(), Planet::Mars);
        assert_eq!(" PLUTO ".parse::<Planet>().unwrap(), Planet::Pluto);
        assert_eq!("Earth Barycenter".parse::<Planet>().unwrap(), Planet::Earth);
        assert_eq!("emb".parse::<Planet>().unwrap(), Planet::Earth);
        assert_eq!("4".parse::<Planet>().unwrap(), Planet::Jupiter);
        assert!(matches!(
            "9".parse::<Planet>(),
            Err(PropagationError::PlanetIndexOutOfRange { index: 9 })
        ));
        assert!(matches!(
            "Ceres".parse::<Planet>(),
            Err(PropagationError::UnknownPlanet { .. })
        ));
    }

    #[test]
    fn display_uses_report_names() {
        assert_eq!(Planet::Earth.to_string(), "Earth");
        assert_eq!(Planet::Neptune.elements(), &ELEMENT_TABLE[7]);
    }
}
