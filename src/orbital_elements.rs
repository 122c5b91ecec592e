//! # Orbital elements
//!
//! This module defines [`OrbitalElements`](crate::orbital_elements::OrbitalElements), the
//! five-parameter state that drives the orbit curve, and
//! [`ElementName`](crate::orbital_elements::ElementName), the key used by a control surface to
//! address a single element.
//!
//! ## The five elements
//!
//! 1. **a** – Semi-major axis (Earth radii)
//! 2. **e** – Eccentricity (unitless)
//! 3. **inc** – Inclination (degrees)
//! 4. **AOP** – Argument of periapsis (degrees)
//! 5. **RAAN** – Right ascension of the ascending node (degrees)
//!
//! There is no epoch and no anomaly: the curve is a static ellipse, not a propagated position.
//!
//! ## Validity domain
//!
//! | element | accepted values |
//! |---------|-----------------|
//! | `a`     | `a > 0` and `round(a · 6371/1737) ≥ 1` |
//! | `e`     | `0 ≤ e < 1` |
//! | `inc`   | `0 ≤ inc ≤ 180` |
//! | `AOP`   | `0 ≤ AOP < 360` |
//! | `RAAN`  | `0 ≤ RAAN < 360` |
//!
//! Non-finite values are always rejected. Rejected updates never modify the stored element.
//!
//! ## Control ranges
//!
//! Each element also carries the range and label a slider would expose
//! ([`ElementName::control_range`](crate::orbital_elements::ElementName::control_range),
//! [`ElementName::label`](crate::orbital_elements::ElementName::label)). Control ranges are a
//! subset of the validity domain.
//!
//! ## Example
//!
//! ```rust
//! use keplerview::orbital_elements::{ElementName, OrbitalElements};
//!
//! let mut elements = OrbitalElements::default();
//! elements.set(ElementName::Eccentricity, 0.2).unwrap();
//!
//! // Out of range: rejected, previous value kept.
//! assert!(elements.set("e".parse().unwrap(), 1.0).is_err());
//! assert_eq!(elements.eccentricity, 0.2);
//! ```

use std::{fmt, str::FromStr};

use crate::{
    constants::{Degree, EarthRadii},
    ellipse::scale_semi_major_axis,
    orbit_errors::OrbitError,
};

/// Key of a single orbital element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementName {
    SemiMajorAxis,
    Eccentricity,
    Inclination,
    PeriapsisArgument,
    AscendingNodeLongitude,
}

/// Slider range for one element.
///
/// `max_inclusive` is `false` for angles that wrap at 360°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub max_inclusive: bool,
}

impl ControlRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min
            && if self.max_inclusive {
                value <= self.max
            } else {
                value < self.max
            }
    }
}

impl ElementName {
    pub const ALL: [ElementName; 5] = [
        ElementName::SemiMajorAxis,
        ElementName::Eccentricity,
        ElementName::Inclination,
        ElementName::PeriapsisArgument,
        ElementName::AscendingNodeLongitude,
    ];

    /// Short key, as used by the control surface (`a`, `e`, `inc`, `AOP`, `RAAN`).
    pub fn key(&self) -> &'static str {
        match self {
            ElementName::SemiMajorAxis => "a",
            ElementName::Eccentricity => "e",
            ElementName::Inclination => "inc",
            ElementName::PeriapsisArgument => "AOP",
            ElementName::AscendingNodeLongitude => "RAAN",
        }
    }

    /// Human readable label with unit.
    pub fn label(&self) -> &'static str {
        match self {
            ElementName::SemiMajorAxis => "Semi-Major Axis (R_earth)",
            ElementName::Eccentricity => "Eccentricity (-)",
            ElementName::Inclination => "Inclination (deg)",
            ElementName::PeriapsisArgument => "AOP (deg)",
            ElementName::AscendingNodeLongitude => "RAAN (deg)",
        }
    }

    /// Range exposed to an interactive control for this element.
    pub fn control_range(&self) -> ControlRange {
        let (min, max, max_inclusive) = match self {
            ElementName::SemiMajorAxis => (1.0, 20.0, true),
            ElementName::Eccentricity => (0.0, 0.99, true),
            ElementName::Inclination => (0.0, 180.0, true),
            ElementName::PeriapsisArgument => (0.0, 360.0, false),
            ElementName::AscendingNodeLongitude => (0.0, 360.0, false),
        };
        ControlRange {
            min,
            max,
            max_inclusive,
        }
    }

    /// Check `value` against the validity domain of this element.
    ///
    /// Arguments
    /// ---------
    /// * `value` – candidate value, in the element's user-facing unit.
    ///
    /// Return
    /// ------
    /// * `Ok(())` if the value is accepted, [`OrbitError::InvalidElement`] otherwise.
    pub fn validate(&self, value: f64) -> Result<(), OrbitError> {
        let reject = |reason: &str| {
            Err(OrbitError::InvalidElement {
                name: self.key(),
                value,
                reason: reason.to_string(),
            })
        };

        if !value.is_finite() {
            return reject("value must be finite");
        }

        match self {
            ElementName::SemiMajorAxis => {
                if value <= 0.0 {
                    return reject("semi-major axis must be strictly positive");
                }
                let scaled = scale_semi_major_axis(value);
                if scaled < 1.0 {
                    return reject("semi-major axis rounds to zero Moon radii");
                }
                if !scaled.powi(2).is_finite() {
                    return reject("semi-major axis too large");
                }
            }
            ElementName::Eccentricity => {
                if !(0.0..1.0).contains(&value) {
                    return reject("eccentricity must lie in [0, 1)");
                }
            }
            ElementName::Inclination => {
                if !(0.0..=180.0).contains(&value) {
                    return reject("inclination must lie in [0, 180] degrees");
                }
            }
            ElementName::PeriapsisArgument | ElementName::AscendingNodeLongitude => {
                if !(0.0..360.0).contains(&value) {
                    return reject("angle must lie in [0, 360) degrees");
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementName {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "semi_major_axis" => Ok(ElementName::SemiMajorAxis),
            "e" | "eccentricity" => Ok(ElementName::Eccentricity),
            "inc" | "i" | "inclination" => Ok(ElementName::Inclination),
            "AOP" | "aop" | "periapsis_argument" => Ok(ElementName::PeriapsisArgument),
            "RAAN" | "raan" | "ascending_node_longitude" => {
                Ok(ElementName::AscendingNodeLongitude)
            }
            _ => Err(OrbitError::UnknownElement(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ElementName {
    type Error = OrbitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The five orbital elements shaping the displayed ellipse.
///
/// Units
/// -----
/// * `semi_major_axis`: Earth radii.
/// * `eccentricity`: unitless.
/// * `inclination`: degrees.
/// * `periapsis_argument`: degrees (AOP).
/// * `ascending_node_longitude`: degrees (RAAN).
///
/// The fields are public for reading; writes from a control surface should go through
/// [`OrbitalElements::set`] so that the validity domain is enforced.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OrbitalElements {
    pub semi_major_axis: EarthRadii,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub periapsis_argument: Degree,
    pub ascending_node_longitude: Degree,
}

impl Default for OrbitalElements {
    /// `a = 5`, `e = 0.5`, `inc = 45`, `AOP = 0`, `RAAN = 45`.
    fn default() -> Self {
        OrbitalElements {
            semi_major_axis: 5.0,
            eccentricity: 0.5,
            inclination: 45.0,
            periapsis_argument: 0.0,
            ascending_node_longitude: 45.0,
        }
    }
}

impl OrbitalElements {
    /// Build a validated element set.
    ///
    /// Return
    /// ------
    /// * The element set, or the first [`OrbitError::InvalidElement`] encountered
    ///   (checked in the order `a`, `e`, `inc`, `AOP`, `RAAN`).
    pub fn new(
        semi_major_axis: EarthRadii,
        eccentricity: f64,
        inclination: Degree,
        periapsis_argument: Degree,
        ascending_node_longitude: Degree,
    ) -> Result<Self, OrbitError> {
        let elements = OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            periapsis_argument,
            ascending_node_longitude,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Validate every element.
    pub fn validate(&self) -> Result<(), OrbitError> {
        ElementName::ALL
            .iter()
            .try_for_each(|name| name.validate(self.get(*name)))
    }

    pub fn get(&self, name: ElementName) -> f64 {
        match name {
            ElementName::SemiMajorAxis => self.semi_major_axis,
            ElementName::Eccentricity => self.eccentricity,
            ElementName::Inclination => self.inclination,
            ElementName::PeriapsisArgument => self.periapsis_argument,
            ElementName::AscendingNodeLongitude => self.ascending_node_longitude,
        }
    }

    /// Set a single element after validating it.
    ///
    /// On rejection the element set is left untouched.
    pub fn set(&mut self, name: ElementName, value: f64) -> Result<(), OrbitError> {
        name.validate(value)?;
        let slot = match name {
            ElementName::SemiMajorAxis => &mut self.semi_major_axis,
            ElementName::Eccentricity => &mut self.eccentricity,
            ElementName::Inclination => &mut self.inclination,
            ElementName::PeriapsisArgument => &mut self.periapsis_argument,
            ElementName::AscendingNodeLongitude => &mut self.ascending_node_longitude,
        };
        *slot = value;
        Ok(())
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a    (semi-major axis)       = {:.6} R_earth",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e    (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  inc  (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  AOP  (argument of periapsis) = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(
            f,
            "  RAAN (ascending node)        = {:.6}°",
            self.ascending_node_longitude
        )
    }
}
