//! # Constants and type definitions for keplerview
//!
//! This module centralizes the **physical constants**, **scene scale factors**, and **unit type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Earth and Moon radii, Earth–Moon distance (kilometers)
//! - Derived scene constants expressed in **Moon radii**, the rendering unit
//! - Unit aliases for angles and lengths
//! - Defaults for the orbit curve (sample count, entity name)
//!
//! The scene is laid out in Moon radii: the Earth sits at the origin and the Moon is displaced
//! along −X by [`EARTH_DISPLACEMENT`]. Orbital semi-major axes are entered in Earth radii and
//! rescaled with [`EARTH_TO_MOON_RADII`].

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: Kilometer = 6371.0;

/// Mean Moon radius in kilometers
pub const MOON_RADIUS_KM: Kilometer = 1737.0;

/// Mean Earth–Moon distance in kilometers
pub const MOON_TO_EARTH_KM: Kilometer = 384_470.0;

/// Earth radius → Moon radius ratio (unrounded)
pub const EARTH_TO_MOON_RADII: f64 = EARTH_RADIUS_KM / MOON_RADIUS_KM;

// -------------------------------------------------------------------------------------------------
// Scene constants (Moon radii)
// -------------------------------------------------------------------------------------------------

/// Earth–Moon distance in whole Moon radii, `round(384470 / 1737) = 221`
pub const EARTH_DISPLACEMENT: MoonRadii = 221.0;

/// Earth radius in whole Moon radii, `round(6371 / 1737) = 4`
pub const EARTH_RADIUS_MOONS: MoonRadii = 4.0;

/// Extra offset applied to the Moon placement along −X
pub const MOON_PLACEMENT_OFFSET: MoonRadii = 0.5;

/// Earth spin per rendered frame (radians)
pub const EARTH_SPIN_PER_FRAME: Radian = 0.001 * 6.5;

/// Moon spin per rendered frame (radians)
pub const MOON_SPIN_PER_FRAME: Radian = 0.001;

// -------------------------------------------------------------------------------------------------
// Orbit curve defaults
// -------------------------------------------------------------------------------------------------

/// Number of samples along the orbit ellipse
pub const ORBIT_SAMPLE_COUNT: usize = 100;

/// Smallest sample count accepted for a closed curve
pub const MIN_SAMPLE_COUNT: usize = 3;

/// Name under which the orbit curve is attached to the scene
pub const ORBIT_CURVE_NAME: &str = "orbitLine";

/// Name under which the reference triad is attached to the scene
pub const TRIAD_NAME: &str = "triad";

/// Default line colour of the orbit curve (RGB hex)
pub const ORBIT_CURVE_COLOR: u32 = 0xffffff;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in Earth radii (user-facing unit of the semi-major axis)
pub type EarthRadii = f64;
/// Distance in Moon radii (rendering unit)
pub type MoonRadii = f64;

/// Degrees → radians, evaluated as `deg · π / 180`.
#[inline]
pub fn deg_to_rad(deg: Degree) -> Radian {
    deg * std::f64::consts::PI / 180.0
}
