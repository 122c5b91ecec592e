//! # Reference triad
//!
//! Three fixed axis segments drawn at the origin as a visual reference. Each segment is a thin
//! cylinder whose own axis is local +Y, centered at `position` and rotated by `rotation`, so that
//! it spans from the origin to `length` along its world direction.
//!
//! | segment | colour | world direction |
//! |---------|--------|-----------------|
//! | X | red `0xff0000`   | +X |
//! | Y | blue `0x0000ff`  | +Z |
//! | Z | green `0x00ff00` | +Y (up) |
//!
//! The Y/Z swap is inherited from a Y-up renderer: the orbital "Z" axis is drawn vertically.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Point3, Rotation3, Vector3};

use crate::{
    constants::{MoonRadii, EARTH_RADIUS_MOONS},
    orientation::{Axis, AxisRotation, RotationSequence},
};

/// Default segment length, three Earth radii.
pub const TRIAD_LENGTH: MoonRadii = 3.0 * EARTH_RADIUS_MOONS;

/// Default segment thickness.
pub const TRIAD_THICKNESS: MoonRadii = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSegment {
    pub axis: Axis,
    pub color: u32,
    pub length: MoonRadii,
    pub thickness: MoonRadii,
    pub position: Point3<f64>,
    pub rotation: Rotation3<f64>,
}

impl AxisSegment {
    /// Unit direction of the cylinder axis in the world frame.
    pub fn direction(&self) -> Vector3<f64> {
        self.rotation * Vector3::y()
    }

    /// Both ends of the segment, in the order (−half, +half) along the cylinder axis.
    pub fn endpoints(&self) -> (Point3<f64>, Point3<f64>) {
        let half = self.direction() * (self.length / 2.0);
        (self.position - half, self.position + half)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTriad {
    pub segments: [AxisSegment; 3],
}

impl Default for ReferenceTriad {
    fn default() -> Self {
        ReferenceTriad::build(TRIAD_LENGTH, TRIAD_THICKNESS)
    }
}

impl ReferenceTriad {
    /// Build the triad for a given segment length and thickness.
    pub fn build(length: MoonRadii, thickness: MoonRadii) -> Self {
        let half = length / 2.0;
        let segment = |axis, color, position, steps: Vec<AxisRotation>| AxisSegment {
            axis,
            color,
            length,
            thickness,
            position,
            rotation: RotationSequence::new(steps).compose(),
        };

        ReferenceTriad {
            segments: [
                segment(
                    Axis::X,
                    0xff0000,
                    Point3::new(half, 0.0, 0.0),
                    vec![AxisRotation::new(Axis::Z, FRAC_PI_2)],
                ),
                segment(
                    Axis::Y,
                    0x0000ff,
                    Point3::new(0.0, 0.0, half),
                    vec![
                        AxisRotation::new(Axis::X, FRAC_PI_2),
                        AxisRotation::new(Axis::Y, FRAC_PI_2),
                    ],
                ),
                segment(Axis::Z, 0x00ff00, Point3::new(0.0, half, 0.0), vec![]),
            ],
        }
    }

    pub fn segment(&self, axis: Axis) -> &AxisSegment {
        match axis {
            Axis::X => &self.segments[0],
            Axis::Y => &self.segments[1],
            Axis::Z => &self.segments[2],
        }
    }
}

#[cfg(test)]
mod triad_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn span(segment: &AxisSegment) -> (Point3<f64>, Point3<f64>) {
        // order the ends so that the first is the one at the origin
        let (a, b) = segment.endpoints();
        if a.coords.norm() < b.coords.norm() {
            (a, b)
        } else {
            (b, a)
        }
    }

    #[test]
    fn test_default_dimensions() {
        let triad = ReferenceTriad::default();
        for s in &triad.segments {
            assert_eq!(s.length, 12.0);
            assert_eq!(s.thickness, 0.05);
        }
    }

    #[test]
    fn test_segments_start_at_origin() {
        let triad = ReferenceTriad::default();
        let expected = [
            (Axis::X, Point3::new(12.0, 0.0, 0.0), 0xff0000),
            (Axis::Y, Point3::new(0.0, 0.0, 12.0), 0x0000ff),
            (Axis::Z, Point3::new(0.0, 12.0, 0.0), 0x00ff00),
        ];
        for (axis, tip, color) in expected {
            let segment = triad.segment(axis);
            let (base, end) = span(segment);
            assert_abs_diff_eq!(base, Point3::origin(), epsilon = 1e-12);
            assert_abs_diff_eq!(end, tip, epsilon = 1e-12);
            assert_eq!(segment.color, color);
        }
    }
}
