// File: crates/hoverline-core/src/lib.rs
// Summary: Core library entry point; exports the chart session, color assignment and pointer tracking.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod geometry;
pub mod render;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod tracker;
pub mod types;

pub use chart::{LineChart, PointerEvent, PointerOutcome};
pub use color::{qualitative_colors, ColorAssigner, ColorAssignment, ColorTable, HexColor, Hue, DEFAULT_HUE_ORDER};
pub use config::ChartConfig;
pub use curve::{Curve, PathCommand};
pub use data::{DataPoint, Dataset, Selection, XValue};
pub use error::ChartError;
pub use geometry::{ChartGeometry, ProjectedPoint};
pub use render::{paint_scene, DrawSurface};
pub use scale::{XScaleKind, YScaleKind};
pub use scene::Scene;
pub use svg::SvgSurface;
pub use theme::{BlendMode, Theme, VisualStyle};
pub use tracker::{nearest_index, HighlightState, HoverUpdate, PointerTracker, TrackerState};
pub use types::{Insets, Point, SurfaceSize};
