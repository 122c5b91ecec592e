//! # Ellipse geometry
//!
//! Discretization of the orbit ellipse in its own plane.
//!
//! The semi-major axis is entered in Earth radii and rescaled to whole Moon radii with
//! [`scale_semi_major_axis`]; the rounding keeps the orbit on an integer grid of rendering units
//! and must be reproduced exactly by anyone comparing point buffers.
//!
//! With `a` the rescaled semi-major axis and `e` the eccentricity:
//!
//! ```text
//! b = a · √(1 − e²)        semi-minor axis
//! c = √(a² − b²)           center-to-focus distance
//! P(θ) = (−c + a·cos θ, b·sin θ)
//! ```
//!
//! The ellipse is centered at `(−c, 0)` so that its near focus (the orbited body) sits at the
//! origin and periapsis lies on +X. Samples are taken at `θᵢ = i · 2π / N` for `i ∈ [0, N)`:
//! the loop is closed implicitly, the last sample is not a copy of the first.

use nalgebra::Point2;

use crate::constants::{EarthRadii, MoonRadii, Radian, DPI, EARTH_RADIUS_KM, MOON_RADIUS_KM};

/// Rescale a semi-major axis from Earth radii to whole Moon radii: `round(a · 6371 / 1737)`.
#[inline]
pub fn scale_semi_major_axis(a: EarthRadii) -> MoonRadii {
    (a * EARTH_RADIUS_KM / MOON_RADIUS_KM).round()
}

/// Parametric angle of sample `index` out of `count`.
#[inline]
pub fn sample_angle(index: usize, count: usize) -> Radian {
    index as f64 * DPI / count as f64
}

/// Axes of an ellipse in rendering units, with its near focus at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub semi_major_axis: MoonRadii,
    pub semi_minor_axis: MoonRadii,
    pub focal_offset: MoonRadii,
}

impl EllipseShape {
    /// Build the shape from an already rescaled semi-major axis.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis` – `a` in Moon radii.
    /// * `eccentricity` – `e ∈ [0, 1)`; callers validate beforehand.
    pub fn new(semi_major_axis: MoonRadii, eccentricity: f64) -> Self {
        let a = semi_major_axis;
        let b = a * (1.0 - eccentricity.powi(2)).sqrt();
        // b ≤ a analytically; a non-positive gap is rounding residue for e ≈ 0
        let gap = a.powi(2) - b.powi(2);
        let c = if gap > 0.0 { gap.sqrt() } else { 0.0 };
        EllipseShape {
            semi_major_axis: a,
            semi_minor_axis: b,
            focal_offset: c,
        }
    }

    /// Build the shape from a semi-major axis in Earth radii.
    pub fn from_elements(semi_major_axis: EarthRadii, eccentricity: f64) -> Self {
        Self::new(scale_semi_major_axis(semi_major_axis), eccentricity)
    }

    /// Center of the ellipse in its own plane.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(-self.focal_offset, 0.0)
    }

    /// Point of the ellipse at parametric angle `theta`.
    #[inline]
    pub fn point_at(&self, theta: Radian) -> Point2<f64> {
        Point2::new(
            -self.focal_offset + self.semi_major_axis * theta.cos(),
            self.semi_minor_axis * theta.sin(),
        )
    }

    /// Periapsis distance from the focus, `a − c`.
    pub fn periapsis(&self) -> MoonRadii {
        self.semi_major_axis - self.focal_offset
    }

    /// Apoapsis distance from the focus, `a + c`.
    pub fn apoapsis(&self) -> MoonRadii {
        self.semi_major_axis + self.focal_offset
    }

    /// Sample `count` points at ascending, equally spaced parametric angles.
    pub fn sample(&self, count: usize) -> Vec<Point2<f64>> {
        (0..count)
            .map(|i| self.point_at(sample_angle(i, count)))
            .collect()
    }

    /// Overwrite `out` with `out.len()` samples, without reallocating.
    pub fn sample_into(&self, out: &mut [Point2<f64>]) {
        let count = out.len();
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.point_at(sample_angle(i, count));
        }
    }
}

/// Generate `count` points of the orbit ellipse for `(a, e)`, focus at the origin.
///
/// Arguments
/// ---------
/// * `semi_major_axis` – `a` in Earth radii (rescaled internally).
/// * `eccentricity` – `e ∈ [0, 1)`.
/// * `count` – number of samples `N`.
///
/// Return
/// ------
/// * `N` points, point `i` at parametric angle `i · 2π / N`.
pub fn generate(semi_major_axis: EarthRadii, eccentricity: f64, count: usize) -> Vec<Point2<f64>> {
    EllipseShape::from_elements(semi_major_axis, eccentricity).sample(count)
}

/// In-place variant of [`generate`]; the sample count is `out.len()`.
pub fn generate_into(semi_major_axis: EarthRadii, eccentricity: f64, out: &mut [Point2<f64>]) {
    EllipseShape::from_elements(semi_major_axis, eccentricity).sample_into(out)
}
