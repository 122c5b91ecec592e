//! # View configuration
//!
//! [`ViewConfig`] gathers the knobs of an [`OrbitView`](crate::orbit_view::OrbitView): curve
//! resolution, scene names, colours, triad geometry and the [`OrientationPolicy`]. It is
//! `serde`-(de)serializable so a host can keep it next to its own settings; missing fields take
//! their default.
//!
//! ```rust
//! use keplerview::config::ViewConfig;
//! use keplerview::orientation::OrientationPolicy;
//!
//! let config = ViewConfig {
//!     sample_count: 256,
//!     orientation_policy: "legacy".parse().unwrap(),
//!     ..ViewConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.orientation_policy, OrientationPolicy::LegacyParity);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::{MoonRadii, MIN_SAMPLE_COUNT, ORBIT_CURVE_COLOR, ORBIT_CURVE_NAME, ORBIT_SAMPLE_COUNT},
    orbit_errors::OrbitError,
    orientation::OrientationPolicy,
    triad::{TRIAD_LENGTH, TRIAD_THICKNESS},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Number of points of the orbit curve, fixed for the lifetime of a view.
    pub sample_count: usize,
    pub curve_name: String,
    pub curve_color: u32,
    pub orientation_policy: OrientationPolicy,
    pub triad_length: MoonRadii,
    pub triad_thickness: MoonRadii,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            sample_count: ORBIT_SAMPLE_COUNT,
            curve_name: ORBIT_CURVE_NAME.to_string(),
            curve_color: ORBIT_CURVE_COLOR,
            orientation_policy: OrientationPolicy::default(),
            triad_length: TRIAD_LENGTH,
            triad_thickness: TRIAD_THICKNESS,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), OrbitError> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(OrbitError::InvalidSampleCount(self.sample_count));
        }
        Ok(())
    }

    pub fn with_orientation_policy(mut self, policy: OrientationPolicy) -> Self {
        self.orientation_policy = policy;
        self
    }
}
