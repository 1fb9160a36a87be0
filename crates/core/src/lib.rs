//! Core units, constants, and shared primitives for the Keplerian planet locator workspace.

/// Astronomical and angular constants.
pub mod constants {
    pub use std::f64::consts::PI;
    /// Days per Julian century.
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
    /// Calendar year of the J2000.0 epoch.
    pub const J2000_YEAR: i32 = 2000;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::PI;

    /// Convert degrees to radians.
    ///
    /// Evaluated as `v * PI / 180` (multiply first) so results match the
    /// reference pipeline bit for bit.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * PI / 180.0
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / PI
    }
}

/// Time conversions into Julian centuries past J2000.0.
///
/// The locator takes its time argument as `(year - 2000) / 100 + day_of_year / 36525`,
/// where `day_of_year` is the ordinal day (42 for February 11th).
pub mod time {
    use chrono::{Datelike, NaiveDate};

    use super::constants::{DAYS_PER_JULIAN_CENTURY, J2000_YEAR};

    /// Sample epoch used by the demonstration driver (mid November 2013).
    pub const MID_NOVEMBER_2013: f64 = 0.138767;

    /// Earliest epoch (in centuries) covered by the element table's fit.
    pub const VALID_FROM_CENTURIES: f64 = -2.0;
    /// Latest epoch (in centuries) covered by the element table's fit.
    pub const VALID_UNTIL_CENTURIES: f64 = 0.5;

    /// Convert a calendar year plus ordinal day into centuries past J2000.
    #[inline]
    pub fn centuries_from_year_day(year: i32, day_of_year: f64) -> f64 {
        f64::from(year - J2000_YEAR) / 100.0 + day_of_year / DAYS_PER_JULIAN_CENTURY
    }

    /// Convert a calendar date into centuries past J2000 using its ordinal day.
    pub fn centuries_from_date(date: NaiveDate) -> f64 {
        centuries_from_year_day(date.year(), f64::from(date.ordinal()))
    }

    /// Convert days to Julian centuries.
    #[inline]
    pub fn days_to_centuries(days: f64) -> f64 {
        days / DAYS_PER_JULIAN_CENTURY
    }

    /// Convert Julian centuries to days.
    #[inline]
    pub fn centuries_to_days(centuries: f64) -> f64 {
        centuries * DAYS_PER_JULIAN_CENTURY
    }

    /// Whether `centuries` lies inside the 1800–2050 window the elements were fitted to.
    #[inline]
    pub fn within_validity_window(centuries: f64) -> bool {
        (VALID_FROM_CENTURIES..=VALID_UNTIL_CENTURIES).contains(&centuries)
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in AU.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }
}
