//! Skwircle UI: retained squircle widgets on top of `skwircle-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use skwircle_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut root = Element::new(
//!     Grid::new(2)
//!         .gap(16.0)
//!         .child(Squircle::preset(ShapePreset::Card))
//!         .child(Squircle::preset(ShapePreset::Avatar)),
//! );
//!
//! // Once per animation frame:
//! let draw_list = scene.frame(&mut root, viewport, &UiInput::away(), dt);
//! let svg = SvgDocument::new().render(draw_list, viewport.into());
//! ```
//!
//! # Pipeline
//!
//! `observer` publishes measured sizes once per frame, `Squircle` turns them
//! into outlines (`skwircle_engine::shape`), `compose` stacks the fill layers,
//! and `mount` decides when the result becomes visible.

pub mod compose;
pub mod config;
pub mod constraints;
pub mod event;
pub mod mount;
pub mod observer;
pub mod painter;
pub mod presets;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend shape trees.
pub mod prelude {
    pub use crate::compose::{compose, ComposedShape, Layer, LayerRole, ResolvedStyle};
    pub use crate::config::{BackgroundConfig, BorderConfig, Overflow, RingConfig, ShapeConfig};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::mount::{classify, MountGate, MountPolicy, SizeHint, SizingHints, FADE_DURATION};
    pub use crate::observer::{DimensionUpdate, ElementId, ObserverHandle, ObserverService};
    pub use crate::painter::Painter;
    pub use crate::presets::ShapePreset;
    pub use crate::scene::{UiInput, UiScene, UpdateCtx};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{grid::Grid, squircle::Squircle, swatch::Swatch};

    // Engine primitives everyone needs.
    pub use skwircle_engine::coords::{Dimensions, Rect, Vec2};
    pub use skwircle_engine::paint::{Color, Paint};
    pub use skwircle_engine::render::SvgDocument;
    pub use skwircle_engine::shape::PerformanceTier;
    pub use skwircle_engine::style::{
        ColorSource, ColorToken, DefaultPalette, GradientPreset, GradientSpec, HoverState, Roundness,
        RoundnessLevel, ShadowPreset, ShadowSpec, TokenPalette,
    };
}
