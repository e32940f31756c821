//! Skwircle engine crate.
//!
//! Renderer-agnostic squircle geometry and paint:
//! - `shape`: superellipse outlines and nested border/background/ring geometry
//! - `style`: roundness levels, color tokens, gradient and shadow presets
//! - `scene`: draw list with clip and opacity scopes
//! - `render`: SVG backend for draw lists

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shape;
pub mod style;
pub mod time;
