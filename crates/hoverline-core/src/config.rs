// File: crates/hoverline-core/src/config.rs
// Summary: Chart configuration (scales, margins, curve, colors, visual constants), JSON-loadable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::is_valid_time_pattern;
use crate::color::{ColorAssigner, Hue, DEFAULT_HUE_ORDER};
use crate::curve::Curve;
use crate::error::{ChartError, Result};
use crate::scale::{XScaleKind, YScaleKind};
use crate::theme::{self, BlendMode, Theme, VisualStyle};
use crate::types::Insets;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub x_scale: XScaleKind,
    pub y_scale: YScaleKind,
    pub margin: Insets,
    pub curve: Curve,
    /// Hue cycling order for series colors.
    pub color_order: Vec<Hue>,
    pub style: VisualStyle,
    /// Blend mode for idle lines; lifted while the pointer is over the chart.
    pub mix_blend_mode: Option<BlendMode>,
    pub tick_count: usize,
    /// Fixed x domain `[min, max]`; epoch milliseconds for time scales. Ignored by ordinal scales.
    pub x_domain: Option<(f64, f64)>,
    /// Fixed y domain `[min, max]`; overrides `y_include_zero`.
    pub y_domain: Option<(f64, f64)>,
    /// Categories to draw, in any order. Points of other categories are left out of
    /// lines, markers, hit testing and domain computation.
    pub z_domain: Option<Vec<String>>,
    /// Title drawn above the y axis, flush with the left edge of the surface.
    pub y_label: Option<String>,
    /// strftime pattern for x tick labels on time scales, e.g. `"%-m/%-d"`.
    pub x_tick_format: Option<String>,
    /// Extend the y domain to include zero (ignored by log scales).
    pub y_include_zero: bool,
    /// Keep the tooltip inside the surface bounds.
    pub tooltip_clamp: bool,
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_scale: XScaleKind::default(),
            y_scale: YScaleKind::default(),
            margin: Insets::default(),
            curve: Curve::default(),
            color_order: DEFAULT_HUE_ORDER.to_vec(),
            style: VisualStyle::default(),
            mix_blend_mode: Some(BlendMode::Multiply),
            tick_count: crate::axis::TICK_COUNT,
            x_domain: None,
            y_domain: None,
            z_domain: None,
            y_label: None,
            x_tick_format: None,
            y_include_zero: false,
            tooltip_clamp: true,
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks fields serde cannot: the x tick pattern must be valid strftime.
    pub fn validate(&self) -> Result<()> {
        match &self.x_tick_format {
            Some(pattern) if !is_valid_time_pattern(pattern) => Err(ChartError::InvalidTickFormat(pattern.clone())),
            _ => Ok(()),
        }
    }

    /// Color assigner for `color_order`; fails when the order is empty.
    pub fn color_assigner(&self) -> Result<ColorAssigner> {
        ColorAssigner::with_hue_order(self.color_order.clone())
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
