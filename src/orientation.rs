//! # Orbit plane orientation
//!
//! Maps the ellipse plane (local XY, periapsis on +X) into the world frame as an ordered list of
//! elementary axis rotations.
//!
//! ## Composition rule
//!
//! Every step rotates about an axis of the **local** frame of the object, as it stands after the
//! previous steps (intrinsic rotations). The composed rotation is therefore the right product
//!
//! ```text
//! R = R₁ · R₂ · … · Rₙ        world = R · local
//! ```
//!
//! Reordering the steps changes the result, and with it the handedness of the orbit plane.
//!
//! ## Conventions
//!
//! Two rotation orders are supported, one for building the curve and one for refreshing it:
//!
//! | convention | steps |
//! |------------|-------|
//! | [`OrientationConvention::BuildTime`]   | `X(90°)`, `Z(RAAN)`, `X(inc)`, `Z(AOP)` |
//! | [`OrientationConvention::RefreshTime`] | `Y(RAAN)`, `X(inc + 90°)`, `Z(−AOP)` |
//!
//! Both give the same orientation when all three angles are zero and diverge otherwise. The
//! [`OrientationPolicy`] decides which convention is applied at build and at refresh time;
//! the default, [`OrientationPolicy::Unified`] with `BuildTime`, uses one convention everywhere
//! so that editing an element never makes the orbit jump to a different plane.

use std::{f64::consts::FRAC_PI_2, fmt, str::FromStr};

use nalgebra::{Point2, Point3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{deg_to_rad, Degree, Radian},
    orbit_errors::OrbitError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(&self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// One elementary rotation of `angle` radians about a local axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    pub axis: Axis,
    pub angle: Radian,
}

impl AxisRotation {
    pub fn new(axis: Axis, angle: Radian) -> Self {
        AxisRotation { axis, angle }
    }

    /// Rotation matrix of this step (right-handed, counter-clockwise for positive angles).
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&self.axis.unit(), self.angle)
    }
}

/// Ordered list of intrinsic rotations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RotationSequence {
    steps: Vec<AxisRotation>,
}

impl RotationSequence {
    pub fn new(steps: Vec<AxisRotation>) -> Self {
        RotationSequence { steps }
    }

    pub fn steps(&self) -> &[AxisRotation] {
        &self.steps
    }

    /// Replay the steps on top of an existing orientation.
    ///
    /// Arguments
    /// ---------
    /// * `base` – current orientation of the object, updated in place.
    pub fn apply_to(&self, base: &mut Rotation3<f64>) {
        for step in &self.steps {
            *base *= step.rotation();
        }
    }

    /// Compose the steps starting from the identity.
    pub fn compose(&self) -> Rotation3<f64> {
        let mut rot = Rotation3::identity();
        self.apply_to(&mut rot);
        rot
    }
}

/// Rotation order used to orient the orbit plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationConvention {
    /// `X(90°)`, `Z(RAAN)`, `X(inc)`, `Z(AOP)`
    BuildTime,
    /// `Y(RAAN)`, `X(inc + 90°)`, `Z(−AOP)`
    RefreshTime,
}

impl OrientationConvention {
    /// Rotation steps for the given angles.
    ///
    /// Arguments
    /// ---------
    /// * `inclination` – inc, degrees.
    /// * `periapsis_argument` – AOP, degrees.
    /// * `ascending_node_longitude` – RAAN, degrees.
    ///
    /// Return
    /// ------
    /// * The ordered [`RotationSequence`]; compose it with [`RotationSequence::compose`].
    pub fn sequence(
        &self,
        inclination: Degree,
        periapsis_argument: Degree,
        ascending_node_longitude: Degree,
    ) -> RotationSequence {
        let aop = deg_to_rad(periapsis_argument);
        let raan = deg_to_rad(ascending_node_longitude);
        let steps = match self {
            OrientationConvention::BuildTime => vec![
                AxisRotation::new(Axis::X, FRAC_PI_2),
                AxisRotation::new(Axis::Z, raan),
                AxisRotation::new(Axis::X, deg_to_rad(inclination)),
                AxisRotation::new(Axis::Z, aop),
            ],
            OrientationConvention::RefreshTime => vec![
                AxisRotation::new(Axis::Y, raan),
                AxisRotation::new(Axis::X, deg_to_rad(inclination + 90.0)),
                AxisRotation::new(Axis::Z, -aop),
            ],
        };
        RotationSequence::new(steps)
    }
}

impl fmt::Display for OrientationConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationConvention::BuildTime => write!(f, "build-time"),
            OrientationConvention::RefreshTime => write!(f, "refresh-time"),
        }
    }
}

/// Which convention is used when the curve is built and when it is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationPolicy {
    /// The same convention at both call sites.
    Unified(OrientationConvention),
    /// `BuildTime` when building, `RefreshTime` when refreshing.
    LegacyParity,
}

impl Default for OrientationPolicy {
    fn default() -> Self {
        OrientationPolicy::Unified(OrientationConvention::BuildTime)
    }
}

impl OrientationPolicy {
    pub fn build_convention(&self) -> OrientationConvention {
        match self {
            OrientationPolicy::Unified(c) => *c,
            OrientationPolicy::LegacyParity => OrientationConvention::BuildTime,
        }
    }

    pub fn refresh_convention(&self) -> OrientationConvention {
        match self {
            OrientationPolicy::Unified(c) => *c,
            OrientationPolicy::LegacyParity => OrientationConvention::RefreshTime,
        }
    }
}

impl FromStr for OrientationPolicy {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unified" | "unified-build" => Ok(OrientationPolicy::Unified(
                OrientationConvention::BuildTime,
            )),
            "unified-refresh" => Ok(OrientationPolicy::Unified(
                OrientationConvention::RefreshTime,
            )),
            "legacy" | "legacy-parity" => Ok(OrientationPolicy::LegacyParity),
            _ => Err(OrbitError::InvalidOrientationPolicy(s.to_string())),
        }
    }
}

impl TryFrom<&str> for OrientationPolicy {
    type Error = OrbitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lift planar points to z = 0 and rotate them into the world frame.
pub fn orient(points: &[Point2<f64>], rotation: &Rotation3<f64>) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| rotation * Point3::new(p.x, p.y, 0.0))
        .collect()
}

#[cfg(test)]
mod orientation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axis_rotation_is_right_handed() {
        let rz = AxisRotation::new(Axis::Z, FRAC_PI_2).rotation();
        assert_abs_diff_eq!(rz * Vector3::x(), Vector3::y(), epsilon = 1e-15);
        let rx = AxisRotation::new(Axis::X, FRAC_PI_2).rotation();
        assert_abs_diff_eq!(rx * Vector3::y(), Vector3::z(), epsilon = 1e-15);
        let ry = AxisRotation::new(Axis::Y, FRAC_PI_2).rotation();
        assert_abs_diff_eq!(ry * Vector3::z(), Vector3::x(), epsilon = 1e-15);
    }

    #[test]
    fn test_composition_is_intrinsic() {
        let seq = RotationSequence::new(vec![
            AxisRotation::new(Axis::X, FRAC_PI_2),
            AxisRotation::new(Axis::Z, FRAC_PI_2),
        ]);
        let expected = AxisRotation::new(Axis::X, FRAC_PI_2).rotation()
            * AxisRotation::new(Axis::Z, FRAC_PI_2).rotation();
        assert_abs_diff_eq!(seq.compose(), expected, epsilon = 1e-15);
        // +X → Z(90°) → +Y → X(90°) → +Z
        assert_abs_diff_eq!(seq.compose() * Vector3::x(), Vector3::z(), epsilon = 1e-15);
    }

    #[test]
    fn test_build_time_lifts_plane_into_xz() {
        let rot = OrientationConvention::BuildTime
            .sequence(0.0, 0.0, 0.0)
            .compose();
        let p = rot * Point3::new(9.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Point3::new(9.0, 0.0, 0.0), epsilon = 1e-12);
        let q = rot * Point3::new(0.0, 5.0, 0.0);
        assert_abs_diff_eq!(q, Point3::new(0.0, 0.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn test_conventions_agree_at_zero_angles_only() {
        let b = OrientationConvention::BuildTime.sequence(0.0, 0.0, 0.0).compose();
        let r = OrientationConvention::RefreshTime
            .sequence(0.0, 0.0, 0.0)
            .compose();
        assert_abs_diff_eq!(b, r, epsilon = 1e-15);

        let b = OrientationConvention::BuildTime
            .sequence(45.0, 0.0, 45.0)
            .compose();
        let r = OrientationConvention::RefreshTime
            .sequence(45.0, 0.0, 45.0)
            .compose();
        assert!((b.matrix() - r.matrix()).norm() > 1e-3);
    }

    #[test]
    fn test_step_order() {
        let seq = OrientationConvention::RefreshTime.sequence(10.0, 20.0, 30.0);
        let axes: Vec<Axis> = seq.steps().iter().map(|s| s.axis).collect();
        assert_eq!(axes, vec![Axis::Y, Axis::X, Axis::Z]);
        assert_eq!(seq.steps()[1].angle, deg_to_rad(100.0));
        assert_eq!(seq.steps()[2].angle, -deg_to_rad(20.0));

        let seq = OrientationConvention::BuildTime.sequence(10.0, 20.0, 30.0);
        let axes: Vec<Axis> = seq.steps().iter().map(|s| s.axis).collect();
        assert_eq!(axes, vec![Axis::X, Axis::Z, Axis::X, Axis::Z]);
        assert_eq!(seq.steps()[0].angle, FRAC_PI_2);
    }

    #[test]
    fn test_orient_preserves_distances() {
        let rot = OrientationConvention::BuildTime
            .sequence(180.0, 270.0, 359.0)
            .compose();
        let points = vec![Point2::new(9.0, 0.0), Point2::new(-3.0, 4.0)];
        let oriented = orient(&points, &rot);
        assert_eq!(oriented.len(), 2);
        assert_abs_diff_eq!(oriented[0].coords.norm(), 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(oriented[1].coords.norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "unified".parse::<OrientationPolicy>(),
            Ok(OrientationPolicy::default())
        );
        assert_eq!(
            OrientationPolicy::try_from("legacy"),
            Ok(OrientationPolicy::LegacyParity)
        );
        assert_eq!(
            "sideways".parse::<OrientationPolicy>(),
            Err(OrbitError::InvalidOrientationPolicy("sideways".into()))
        );
        let legacy = OrientationPolicy::LegacyParity;
        assert_eq!(legacy.build_convention(), OrientationConvention::BuildTime);
        assert_eq!(
            legacy.refresh_convention(),
            OrientationConvention::RefreshTime
        );
    }
}
