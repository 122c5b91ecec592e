//! # keplerview
//!
//! Geometry core of an interactive Earth–Moon orbit viewer: five orbital elements in, one
//! discretized and oriented ellipse out, kept up to date as the elements are edited.
//!
//! ## Pipeline
//!
//! ```text
//! OrbitalElements ──▶ ellipse (a, e → N planar points, focus at origin)
//!                 ──▶ orientation (inc, AOP, RAAN → rotation sequence)
//!                 ──▶ OrbitCurveController ──▶ OrbitCurve attached to the scene
//! ```
//!
//! Rendering, asset loading, lighting and camera work are left to the host, which only provides
//! a [`scene::SceneAttachment`] and forwards control-surface edits to
//! [`orbit_view::OrbitView::set_orbital_element`].

pub mod config;
pub mod constants;
pub mod controller;
pub mod curve;
pub mod ellipse;
pub mod orbit_errors;
pub mod orbit_view;
pub mod orbital_elements;
pub mod orientation;
pub mod scene;
pub mod triad;
