#![allow(dead_code)]

use approx::assert_relative_eq;
use keplerview::curve::OrbitCurve;
use nalgebra::Point3;

/// Assert two curves hold the same points and orientation.
pub fn assert_curve_close(actual: &OrbitCurve, expected: &OrbitCurve, epsilon: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.local_points().iter().zip(expected.local_points()) {
        assert_point_close(a, e, epsilon);
    }
    assert_relative_eq!(
        *actual.orientation(),
        *expected.orientation(),
        epsilon = epsilon
    );
}

pub fn assert_point_close(actual: &Point3<f64>, expected: &Point3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Every coordinate of every world point is finite.
pub fn all_finite(curve: &OrbitCurve) -> bool {
    curve
        .world_points()
        .iter()
        .all(|p| p.coords.iter().all(|c| c.is_finite()))
}
