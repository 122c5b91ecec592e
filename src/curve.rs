//! # Orbit curve entity
//!
//! [`OrbitCurve`] is the scene object holding the discretized orbit: a fixed-size buffer of points
//! in the orbit's local plane (z = 0) plus the orientation that places that plane in the world.
//!
//! The buffer size is chosen at construction and never changes; updates overwrite it entry by
//! entry and raise the `needs_update` flag so a renderer knows to re-upload it.

use itertools::Itertools;
use nalgebra::{Point2, Point3, Rotation3};

use crate::{orbit_errors::OrbitError, orientation::RotationSequence};

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCurve {
    name: String,
    color: u32,
    local_points: Vec<Point3<f64>>,
    orientation: Rotation3<f64>,
    needs_update: bool,
}

impl OrbitCurve {
    /// Create a curve from planar points, with identity orientation.
    pub fn new(name: impl Into<String>, color: u32, points: &[Point2<f64>]) -> Self {
        OrbitCurve {
            name: name.into(),
            color,
            local_points: points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
            orientation: Rotation3::identity(),
            needs_update: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn len(&self) -> usize {
        self.local_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local_points.is_empty()
    }

    pub fn local_points(&self) -> &[Point3<f64>] {
        &self.local_points
    }

    pub fn orientation(&self) -> &Rotation3<f64> {
        &self.orientation
    }

    /// Overwrite the point buffer in place.
    ///
    /// Arguments
    /// ---------
    /// * `points` – new planar points, exactly [`OrbitCurve::len`] of them.
    ///
    /// Return
    /// ------
    /// * [`OrbitError::BufferSizeMismatch`] if the count differs; the buffer is then untouched.
    pub fn overwrite_points(&mut self, points: &[Point2<f64>]) -> Result<(), OrbitError> {
        if points.len() != self.local_points.len() {
            return Err(OrbitError::BufferSizeMismatch {
                expected: self.local_points.len(),
                actual: points.len(),
            });
        }
        for (slot, p) in self.local_points.iter_mut().zip_eq(points) {
            slot.x = p.x;
            slot.y = p.y;
            slot.z = 0.0;
        }
        self.needs_update = true;
        Ok(())
    }

    pub fn reset_orientation(&mut self) {
        self.orientation = Rotation3::identity();
    }

    /// Replay `sequence` on top of the current orientation.
    pub fn apply_rotations(&mut self, sequence: &RotationSequence) {
        sequence.apply_to(&mut self.orientation);
    }

    /// Points in the world frame (orientation applied).
    pub fn world_points(&self) -> Vec<Point3<f64>> {
        self.local_points
            .iter()
            .map(|p| self.orientation * p)
            .collect()
    }

    /// Flat `xyz` buffer of the local points, as uploaded to a GPU.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.local_points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Return the dirty flag and clear it.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }

    /// Largest distance between the focus (local origin) and a point of the curve.
    pub fn max_focus_distance(&self) -> f64 {
        self.local_points
            .iter()
            .map(|p| p.coords.norm())
            .fold(0.0, f64::max)
    }
}
