//! # Orbit curve controller
//!
//! [`OrbitCurveController`] owns the orbit curve entity and is its only writer. It is a two-state
//! machine:
//!
//! ```text
//!              build()                      refresh()
//! Uninitialized ───────▶ Active(handle) ◀──────────┐
//!                              └───────────────────┘
//! ```
//!
//! * `build` generates the ellipse, orients it with the policy's build convention, attaches the
//!   new [`OrbitCurve`] to the scene and keeps its [`EntityHandle`]. Calling it again fails with
//!   [`OrbitError::AlreadyInitialized`].
//! * `refresh` regenerates the ellipse into a scratch buffer, overwrites the attached curve's
//!   buffer entry by entry, resets the orientation to identity and replays the policy's refresh
//!   convention. Calling it before `build` fails with [`OrbitError::NotInitialized`].
//!
//! Elements are validated before any geometry is computed, and nothing is clamped. The sample
//! count is fixed when the controller is created, so the curve buffer never reallocates.

use nalgebra::Point2;
use tracing::{debug, info};

use crate::{
    config::ViewConfig,
    curve::OrbitCurve,
    ellipse::EllipseShape,
    orbit_errors::OrbitError,
    orbital_elements::OrbitalElements,
    orientation::{OrientationConvention, OrientationPolicy, RotationSequence},
    scene::{EntityHandle, SceneAttachment, SceneEntity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveState {
    Uninitialized,
    Active(EntityHandle),
}

#[derive(Debug, Clone)]
pub struct OrbitCurveController {
    state: CurveState,
    curve_name: String,
    curve_color: u32,
    policy: OrientationPolicy,
    scratch: Vec<Point2<f64>>,
}

impl OrbitCurveController {
    /// Create an uninitialized controller.
    ///
    /// Return
    /// ------
    /// * [`OrbitError::InvalidSampleCount`] if the configuration asks for fewer than 3 samples.
    pub fn new(config: &ViewConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        Ok(OrbitCurveController {
            state: CurveState::Uninitialized,
            curve_name: config.curve_name.clone(),
            curve_color: config.curve_color,
            policy: config.orientation_policy,
            scratch: vec![Point2::origin(); config.sample_count],
        })
    }

    pub fn state(&self) -> CurveState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CurveState::Active(_))
    }

    /// Handle of the attached curve, once built.
    pub fn handle(&self) -> Option<EntityHandle> {
        match self.state {
            CurveState::Active(h) => Some(h),
            CurveState::Uninitialized => None,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.scratch.len()
    }

    pub fn policy(&self) -> OrientationPolicy {
        self.policy
    }

    /// Create the curve and attach it to `scene`.
    ///
    /// Arguments
    /// ---------
    /// * `scene` – attachment capability receiving the new entity.
    /// * `elements` – orbital elements; validated first.
    ///
    /// Return
    /// ------
    /// * The handle of the attached curve.
    /// * [`OrbitError::AlreadyInitialized`] if the curve already exists.
    /// * [`OrbitError::InvalidElement`] if an element is out of range; nothing is attached.
    pub fn build<S>(
        &mut self,
        scene: &mut S,
        elements: &OrbitalElements,
    ) -> Result<EntityHandle, OrbitError>
    where
        S: SceneAttachment + ?Sized,
    {
        if self.is_active() {
            return Err(OrbitError::AlreadyInitialized);
        }
        elements.validate()?;

        let shape = self.regenerate(elements);
        let convention = self.policy.build_convention();
        let mut curve = OrbitCurve::new(self.curve_name.as_str(), self.curve_color, &self.scratch);
        curve.apply_rotations(&orientation_steps(convention, elements));

        let handle = scene.add(SceneEntity::Curve(curve));
        self.state = CurveState::Active(handle);

        debug!(
            a_internal = shape.semi_major_axis,
            b = shape.semi_minor_axis,
            c = shape.focal_offset,
            %convention,
            "orbit curve generated"
        );
        info!(name = %self.curve_name, handle = handle.index(), "orbit curve attached");
        Ok(handle)
    }

    /// Recompute the attached curve in place.
    ///
    /// Return
    /// ------
    /// * [`OrbitError::NotInitialized`] before [`OrbitCurveController::build`].
    /// * [`OrbitError::InvalidElement`] if an element is out of range; the curve is untouched.
    /// * [`OrbitError::EntityNotFound`] if the scene no longer holds the curve.
    pub fn refresh<S>(&mut self, scene: &mut S, elements: &OrbitalElements) -> Result<(), OrbitError>
    where
        S: SceneAttachment + ?Sized,
    {
        let handle = self.handle().ok_or(OrbitError::NotInitialized)?;
        elements.validate()?;

        let shape = self.regenerate(elements);
        let curve = scene
            .get_mut(handle)
            .and_then(SceneEntity::as_curve_mut)
            .ok_or_else(|| OrbitError::EntityNotFound(self.curve_name.clone()))?;
        curve.overwrite_points(&self.scratch)?;

        let convention = self.policy.refresh_convention();
        curve.reset_orientation();
        curve.apply_rotations(&orientation_steps(convention, elements));

        debug!(
            a_internal = shape.semi_major_axis,
            b = shape.semi_minor_axis,
            c = shape.focal_offset,
            %convention,
            "orbit curve refreshed"
        );
        Ok(())
    }

    /// Borrow the attached curve from `scene`.
    pub fn curve<'s, S>(&self, scene: &'s S) -> Result<&'s OrbitCurve, OrbitError>
    where
        S: SceneAttachment + ?Sized,
    {
        let handle = self.handle().ok_or(OrbitError::NotInitialized)?;
        scene
            .get(handle)
            .and_then(SceneEntity::as_curve)
            .ok_or_else(|| OrbitError::EntityNotFound(self.curve_name.clone()))
    }

    fn regenerate(&mut self, elements: &OrbitalElements) -> EllipseShape {
        let shape = EllipseShape::from_elements(elements.semi_major_axis, elements.eccentricity);
        shape.sample_into(&mut self.scratch);
        shape
    }
}

fn orientation_steps(
    convention: OrientationConvention,
    elements: &OrbitalElements,
) -> RotationSequence {
    convention.sequence(
        elements.inclination,
        elements.periapsis_argument,
        elements.ascending_node_longitude,
    )
}
