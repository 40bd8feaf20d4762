//! Scene-description output.
//!
//! Renders orbital elements as an ssc catalog object. The block layout is
//! the consuming tool's input format and is reproduced byte for byte,
//! including the fixed header comments and the `Obliquity` /
//! `EquatorAscendingNode` fields, which repeat the inclination and
//! ascending node by longstanding convention.

use std::fmt;

use crate::domain::OrbitalElements;

/// One renderable ssc catalog object.
///
/// # Examples
///
/// ```
/// use orbit_translate::domain::{OrbitalElements, Tle};
/// use orbit_translate::ssc::SscObject;
///
/// let tle = Tle::parse(
///     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
///     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
/// )
/// .unwrap();
///
/// let object = SscObject::new("ISS (ZARYA)", OrbitalElements::from_tle(&tle));
/// assert!(object.to_string().contains("EllipticalOrbit{"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SscObject {
    /// Satellite identifier, used as the object name
    pub name: String,
    pub elements: OrbitalElements,
    /// Optional mesh file reference
    pub mesh: Option<String>,
    /// Optional radius in kilometres
    pub radius: Option<f64>,
    /// Optional orientation, format `a b c d`; quote characters are
    /// stripped on output
    pub orientation: Option<String>,
}

impl SscObject {
    /// Create an object with no decorations.
    pub fn new(name: impl Into<String>, elements: OrbitalElements) -> Self {
        Self {
            name: name.into(),
            elements,
            mesh: None,
            radius: None,
            orientation: None,
        }
    }
}

impl fmt::Display for SscObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;

        writeln!(f, "# Generated by orbit_translate python module version 1.0")?;
        writeln!(f, "# Based on data from http://celestrak.com/NORAD/elements/")?;
        writeln!(f)?;
        writeln!(f, "\"{}\" \"Sol/Earth\" {{", self.name)?;
        writeln!(f, "  Class \"spacecraft\"")?;
        if let Some(mesh) = &self.mesh {
            writeln!(f, "  Mesh \"{mesh}\"")?;
        }
        if let Some(radius) = self.radius {
            writeln!(f, "  Radius {radius}")?;
        }
        writeln!(f, "  EllipticalOrbit{{")?;
        writeln!(f, "    Epoch {}", e.epoch_jd)?;
        writeln!(f, "    Period {}", e.period_days)?;
        writeln!(f, "    SemiMajorAxis {}", e.semi_major_axis_km)?;
        writeln!(f, "    Eccentricity {}", e.eccentricity)?;
        writeln!(f, "    Inclination {}", e.inclination_deg)?;
        writeln!(f, "    AscendingNode {}", e.ascending_node_deg)?;
        writeln!(f, "    ArgOfPericenter {}", e.arg_of_pericenter_deg)?;
        writeln!(f, "    MeanAnomaly {}", e.mean_anomaly_deg)?;
        writeln!(f, "  }}")?;
        writeln!(f, "  Obliquity {}", e.inclination_deg)?;
        writeln!(f, "  EquatorAscendingNode {}", e.ascending_node_deg)?;
        writeln!(f, "  RotationOffset {}", e.rotation_offset_deg)?;
        if let Some(orientation) = &self.orientation {
            writeln!(f, "  Orientation {}", orientation.replace('"', ""))?;
        }
        write!(f, "}}")
    }
}
