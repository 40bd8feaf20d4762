//! Two-line element set parsing.
//!
//! TLE lines are fixed-column records; every physical quantity lives in a
//! known half-open column range. Parsing validates all ranges up front so
//! downstream orbit maths never sees a malformed line.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Two-digit epoch years at or below this map to 2000+, above to 1900+.
const EPOCH_YEAR_PIVOT: i32 = 56;

/// Error returned when a TLE pair is malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TleError {
    /// A data line is shorter than a required field's column range
    #[error("TLE line {line} too short for {field} (columns {start}..{end})")]
    LineTooShort {
        line: u8,
        field: &'static str,
        start: usize,
        end: usize,
    },

    /// A field did not parse as a number
    #[error("TLE line {line} has invalid {field}: {value:?}")]
    BadField {
        line: u8,
        field: &'static str,
        value: String,
    },

    /// Mean motion must be positive for the orbit to have a period
    #[error("TLE mean motion must be positive, got {0}")]
    NonPositiveMeanMotion(f64),
}

/// A validated two-line element set.
///
/// Construction via [`Tle::parse`] guarantees every field was present and
/// numeric, and that the mean motion is positive.
///
/// # Examples
///
/// ```
/// use orbit_translate::domain::Tle;
///
/// let tle = Tle::parse(
///     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
///     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
/// )
/// .unwrap();
///
/// assert_eq!(tle.epoch_year(), 2008);
/// assert_eq!(tle.inclination_deg(), 51.6416);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tle {
    epoch_year: i32,
    epoch_day: f64,
    inclination_deg: f64,
    ascending_node_deg: f64,
    eccentricity: f64,
    arg_of_pericenter_deg: f64,
    mean_anomaly_deg: f64,
    mean_motion: f64,
}

impl Tle {
    /// Parse a TLE pair.
    pub fn parse(line1: &str, line2: &str) -> Result<Self, TleError> {
        let raw_year = int_field(line1, 1, "epoch year", 18, 20)?;
        let epoch_year = if raw_year <= EPOCH_YEAR_PIVOT {
            2000 + raw_year
        } else {
            1900 + raw_year
        };
        let epoch_day = num_field(line1, 1, "epoch day", 20, 32)?;

        let inclination_deg = num_field(line2, 2, "inclination", 8, 16)?;
        let ascending_node_deg = num_field(line2, 2, "ascending node", 17, 25)?;
        let eccentricity = ecc_field(line2)?;
        let arg_of_pericenter_deg = num_field(line2, 2, "argument of pericenter", 34, 42)?;
        let mean_anomaly_deg = num_field(line2, 2, "mean anomaly", 43, 51)?;

        let mean_motion = num_field(line2, 2, "mean motion", 52, 64)?;
        if mean_motion <= 0.0 {
            return Err(TleError::NonPositiveMeanMotion(mean_motion));
        }

        Ok(Self {
            epoch_year,
            epoch_day,
            inclination_deg,
            ascending_node_deg,
            eccentricity,
            arg_of_pericenter_deg,
            mean_anomaly_deg,
            mean_motion,
        })
    }

    /// Full epoch year (the two-digit field widened through the 1957..2056
    /// window).
    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    /// Fractional day of year of the epoch; day 1.0 is January 1, 00:00 UT.
    pub fn epoch_day(&self) -> f64 {
        self.epoch_day
    }

    /// Orbital inclination in degrees.
    pub fn inclination_deg(&self) -> f64 {
        self.inclination_deg
    }

    /// Right ascension of the ascending node in degrees.
    pub fn ascending_node_deg(&self) -> f64 {
        self.ascending_node_deg
    }

    /// Eccentricity (the field's implied leading `0.` applied).
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Argument of pericenter in degrees.
    pub fn arg_of_pericenter_deg(&self) -> f64 {
        self.arg_of_pericenter_deg
    }

    /// Mean anomaly in degrees.
    pub fn mean_anomaly_deg(&self) -> f64 {
        self.mean_anomaly_deg
    }

    /// Mean motion in revolutions per day. Always positive.
    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    /// The epoch as a calendar datetime, for diagnostics.
    ///
    /// Returns `None` for epochs outside chrono's representable range
    /// (a day-of-year of zero, for instance).
    pub fn epoch_datetime(&self) -> Option<DateTime<Utc>> {
        let jan1 = NaiveDate::from_ymd_opt(self.epoch_year, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let offset_ms = ((self.epoch_day - 1.0) * 86_400_000.0).round() as i64;
        let datetime = jan1.checked_add_signed(Duration::milliseconds(offset_ms))?;
        Some(Utc.from_utc_datetime(&datetime))
    }
}

/// Extract a column range from a line, or report which field was cut off.
fn field<'a>(
    line: &'a str,
    lineno: u8,
    name: &'static str,
    start: usize,
    end: usize,
) -> Result<&'a str, TleError> {
    line.get(start..end).ok_or(TleError::LineTooShort {
        line: lineno,
        field: name,
        start,
        end,
    })
}

fn num_field(
    line: &str,
    lineno: u8,
    name: &'static str,
    start: usize,
    end: usize,
) -> Result<f64, TleError> {
    let raw = field(line, lineno, name, start, end)?.trim();
    raw.parse().map_err(|_| TleError::BadField {
        line: lineno,
        field: name,
        value: raw.to_string(),
    })
}

fn int_field(
    line: &str,
    lineno: u8,
    name: &'static str,
    start: usize,
    end: usize,
) -> Result<i32, TleError> {
    let raw = field(line, lineno, name, start, end)?.trim();
    raw.parse().map_err(|_| TleError::BadField {
        line: lineno,
        field: name,
        value: raw.to_string(),
    })
}

/// Eccentricity is stored with an implied leading decimal point: the field
/// `0006703` means `0.0006703`.
fn ecc_field(line2: &str) -> Result<f64, TleError> {
    let raw = field(line2, 2, "eccentricity", 26, 33)?.trim();
    format!("0.{raw}").parse().map_err(|_| TleError::BadField {
        line: 2,
        field: "eccentricity",
        value: raw.to_string(),
    })
}
