//! Derived orbital elements.
//!
//! Pure arithmetic from a validated [`Tle`] to the quantities the scene
//! description needs. The formulas follow Grant Hutchison's Celestia orbit
//! spreadsheet, quirks included, so generated orbits line up with catalogs
//! produced from it.

use super::Tle;

/// Kepler's third-law constant for Earth: mu * s_per_day^2 / (4 pi^2),
/// quoted so that `(period_days^2 * K)^(1/3)` lands in kilometres.
const KEPLER_EARTH: f64 = 7.5371e13;

/// Julian date of the J2000.0 reference epoch.
const J2000_JD: f64 = 2451545.0;

/// The orbital elements of one satellite, ready for formatting.
///
/// All angles are in degrees, the period in days, the semi-major axis in
/// kilometres, and the epoch a Julian date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub epoch_jd: f64,
    pub period_days: f64,
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub arg_of_pericenter_deg: f64,
    pub mean_anomaly_deg: f64,
    pub rotation_offset_deg: f64,
}

impl OrbitalElements {
    /// Derive all elements from a validated TLE.
    pub fn from_tle(tle: &Tle) -> Self {
        let period_days = 1.0 / tle.mean_motion();

        Self {
            epoch_jd: julian_epoch(tle.epoch_year(), tle.epoch_day()),
            period_days,
            semi_major_axis_km: semi_major_axis(period_days),
            eccentricity: tle.eccentricity(),
            inclination_deg: tle.inclination_deg(),
            ascending_node_deg: tle.ascending_node_deg(),
            arg_of_pericenter_deg: tle.arg_of_pericenter_deg(),
            mean_anomaly_deg: tle.mean_anomaly_deg(),
            rotation_offset_deg: rotation_offset(
                tle.arg_of_pericenter_deg(),
                tle.mean_anomaly_deg(),
                tle.epoch_day(),
                period_days,
            ),
        }
    }
}

/// Julian date of a TLE epoch given the full year and fractional day of
/// year (day 1.0 is January 1, 00:00 UT).
///
/// The Gregorian leap-year corrections use floor toward negative infinity,
/// not truncation.
fn julian_epoch(year: i32, day_of_year: f64) -> f64 {
    let y = (year - 1) as f64;
    1721424.5 - (y / 100.0).floor() + (y / 400.0).floor() + (365.25 * y).floor() + day_of_year
}

/// Semi-major axis in kilometres from the orbital period in days.
fn semi_major_axis(period_days: f64) -> f64 {
    (period_days * period_days * KEPLER_EARTH).powf(1.0 / 3.0)
}

/// Phase correction aligning the orbit with the J2000.0 reference epoch.
///
/// `epoch_day` is the raw fractional day of year, not the Julian epoch;
/// the spreadsheet differences it against the J2000 Julian date directly,
/// and that behaviour is part of the output contract. The result is
/// reduced with a Euclidean modulo, so it is in [0, 360) even when the day
/// difference is negative.
fn rotation_offset(
    arg_of_pericenter_deg: f64,
    mean_anomaly_deg: f64,
    epoch_day: f64,
    period_days: f64,
) -> f64 {
    let revolutions = (J2000_JD - epoch_day) / period_days;
    let phase = revolutions - revolutions.floor();
    (arg_of_pericenter_deg + mean_anomaly_deg + 360.0 * phase).rem_euclid(360.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The rotation offset is always within [0, 360) for valid element
        /// ranges.
        #[test]
        fn rotation_offset_in_range(
            arg in 0.0f64..360.0,
            anomaly in 0.0f64..360.0,
            epoch_day in 1.0f64..367.0,
            mean_motion in 0.1f64..20.0,
        ) {
            let offset = rotation_offset(arg, anomaly, epoch_day, 1.0 / mean_motion);
            prop_assert!((0.0..360.0).contains(&offset));
        }

        /// Faster orbits are smaller: the semi-major axis decreases as mean
        /// motion increases.
        #[test]
        fn semi_major_axis_shrinks_with_mean_motion(mm in 1.0f64..20.0) {
            let slower = semi_major_axis(1.0 / mm);
            let faster = semi_major_axis(1.0 / (mm + 0.5));
            prop_assert!(faster < slower);
        }

        /// The Julian epoch is strictly increasing in the epoch day.
        #[test]
        fn julian_epoch_monotonic_in_day(year in 1957i32..2057, day in 1.0f64..366.0) {
            prop_assert!(julian_epoch(year, day + 0.5) > julian_epoch(year, day));
        }
    }
}
