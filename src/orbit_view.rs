//! # OrbitView: elements, orbit curve and scene wiring
//!
//! This module defines [`OrbitView`](crate::orbit_view::OrbitView), the façade a host application
//! talks to. It wires together:
//!
//! 1. **Orbital elements** ([`OrbitalElements`]) – the live state edited by a control surface.
//! 2. **Orbit curve controller** ([`OrbitCurveController`]) – the only writer of the curve entity.
//! 3. **Scene attachment** ([`SceneAttachment`]) – supplied by the host through
//!    [`attach_to`](crate::orbit_view::OrbitView::attach_to) before the first build.
//! 4. **Reference triad** ([`ReferenceTriad`]) – built once when the view turns interactive.
//!
//! ## Typical usage
//!
//! ```rust
//! use keplerview::config::ViewConfig;
//! use keplerview::orbit_view::OrbitView;
//! use keplerview::scene::Scene;
//!
//! let mut view = OrbitView::new(ViewConfig::default()).unwrap();
//! view.attach_to(Scene::with_bodies()).unwrap();
//! view.enter_interactive_phase().unwrap();
//!
//! // A slider moved: validated, stored, curve refreshed.
//! view.set_orbital_element("e", 0.2).unwrap();
//!
//! // Out of range: rejected, previous value kept.
//! assert!(view.set_orbital_element("e", 1.0).is_err());
//! assert_eq!(view.elements().eccentricity, 0.2);
//! ```
//!
//! ## Update semantics
//!
//! [`set_orbital_element`](crate::orbit_view::OrbitView::set_orbital_element) is transactional:
//! the element is validated on a copy, the curve is built (first call) or refreshed (later calls)
//! from that copy, and the copy is committed only if every step succeeded. Any failure leaves the
//! stored elements unchanged and is returned to the caller; nothing is retried.
//!
//! All operations run to completion synchronously, so a render pass following a call always
//! observes a fully rewritten buffer and orientation.

use tracing::{info, warn};

use crate::{
    config::ViewConfig,
    controller::OrbitCurveController,
    curve::OrbitCurve,
    orbit_errors::OrbitError,
    orbital_elements::{ElementName, OrbitalElements},
    scene::{EntityHandle, Scene, SceneAttachment, SceneEntity},
    triad::ReferenceTriad,
};

#[derive(Debug, Clone)]
pub struct OrbitView<S: SceneAttachment = Scene> {
    config: ViewConfig,
    elements: OrbitalElements,
    controller: OrbitCurveController,
    scene: Option<S>,
    triad: Option<EntityHandle>,
}

impl<S: SceneAttachment> OrbitView<S> {
    /// Construct a view with default elements and no scene attached.
    ///
    /// Return
    /// ------
    /// * [`OrbitError::InvalidSampleCount`] if `config` is invalid.
    pub fn new(config: ViewConfig) -> Result<Self, OrbitError> {
        Self::with_elements(config, OrbitalElements::default())
    }

    /// Construct a view with custom starting elements.
    pub fn with_elements(config: ViewConfig, elements: OrbitalElements) -> Result<Self, OrbitError> {
        elements.validate()?;
        let controller = OrbitCurveController::new(&config)?;
        Ok(OrbitView {
            config,
            elements,
            controller,
            scene: None,
            triad: None,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn controller(&self) -> &OrbitCurveController {
        &self.controller
    }

    pub fn scene(&self) -> Option<&S> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut S> {
        self.scene.as_mut()
    }

    /// Supply the scene the curve will be attached to.
    ///
    /// Must be called before the first build. Replacing the scene once the curve exists would
    /// orphan the controller's handle and is refused with [`OrbitError::AlreadyInitialized`].
    pub fn attach_to(&mut self, scene: S) -> Result<(), OrbitError> {
        if self.controller.is_active() {
            return Err(OrbitError::AlreadyInitialized);
        }
        self.scene = Some(scene);
        Ok(())
    }

    /// Build the orbit curve from the current elements.
    pub fn build_orbit(&mut self) -> Result<EntityHandle, OrbitError> {
        let scene = self.scene.as_mut().ok_or(OrbitError::SceneNotAttached)?;
        self.controller.build(scene, &self.elements)
    }

    /// Refresh the orbit curve from the current elements.
    pub fn refresh_orbit(&mut self) -> Result<(), OrbitError> {
        let scene = self.scene.as_mut().ok_or(OrbitError::SceneNotAttached)?;
        self.controller.refresh(scene, &self.elements)
    }

    /// Build the orbit curve (unless an element update already did), then the reference triad.
    ///
    /// This is the transition into the interactive phase; it can happen only once.
    pub fn enter_interactive_phase(&mut self) -> Result<(), OrbitError> {
        if self.triad.is_some() {
            return Err(OrbitError::AlreadyInitialized);
        }
        if !self.controller.is_active() {
            self.build_orbit()?;
        }

        let triad = ReferenceTriad::build(self.config.triad_length, self.config.triad_thickness);
        let scene = self.scene.as_mut().ok_or(OrbitError::SceneNotAttached)?;
        let handle = scene.add(SceneEntity::Triad(triad));
        self.triad = Some(handle);
        info!(handle = handle.index(), "reference triad attached");
        Ok(())
    }

    /// Set one element by its control-surface key (`a`, `e`, `inc`, `AOP`, `RAAN`).
    ///
    /// Arguments
    /// ---------
    /// * `name` – element key, parsed into an [`ElementName`].
    /// * `value` – new value in the element's user-facing unit.
    ///
    /// Return
    /// ------
    /// * `Ok(())` once the element is stored and the curve rebuilt or refreshed.
    /// * A validation, state or not-found [`OrbitError`]; stored elements are then unchanged.
    pub fn set_orbital_element(&mut self, name: &str, value: f64) -> Result<(), OrbitError> {
        let element = name.parse::<ElementName>().inspect_err(|err| {
            warn!(%err, "orbital element update rejected");
        })?;
        self.set_element(element, value)
    }

    /// Typed variant of [`OrbitView::set_orbital_element`].
    pub fn set_element(&mut self, name: ElementName, value: f64) -> Result<(), OrbitError> {
        let mut candidate = self.elements;
        let result = candidate.set(name, value).and_then(|_| {
            let scene = self.scene.as_mut().ok_or(OrbitError::SceneNotAttached)?;
            if self.controller.is_active() {
                self.controller.refresh(scene, &candidate)
            } else {
                self.controller.build(scene, &candidate).map(|_| ())
            }
        });

        match result {
            Ok(()) => {
                self.elements = candidate;
                Ok(())
            }
            Err(err) => {
                warn!(element = %name, value, %err, "orbital element update rejected");
                Err(err)
            }
        }
    }

    /// Borrow the orbit curve from the attached scene.
    pub fn orbit_curve(&self) -> Result<&OrbitCurve, OrbitError> {
        let scene = self.scene.as_ref().ok_or(OrbitError::SceneNotAttached)?;
        self.controller.curve(scene)
    }

    pub fn triad_handle(&self) -> Option<EntityHandle> {
        self.triad
    }

    /// Consume the view and hand the scene back to the host.
    pub fn into_scene(self) -> Option<S> {
        self.scene
    }
}
