// File: crates/hoverline-core/src/theme.rs
// Summary: Visual constants (idle vs. active) and light/dark color themes.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Compositing mode applied to idle, overlapping lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Multiply,
    Screen,
    Darken,
    Lighten,
}

impl BlendMode {
    /// CSS `mix-blend-mode` keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
        }
    }
}

/// Default and active sizes/opacities for lines, markers and the tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualStyle {
    pub line_width: f32,
    pub active_line_width: f32,
    pub point_radius: f32,
    pub active_point_radius: f32,
    pub opacity: f32,
    pub inactive_opacity: f32,
    /// Vertical gap between the hovered point and the tooltip's bottom edge.
    pub tooltip_gap: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            active_line_width: 2.0,
            point_radius: 3.0,
            active_point_radius: 4.0,
            opacity: 1.0,
            inactive_opacity: 0.1,
            tooltip_gap: 17.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: HexColor,
    pub grid: HexColor,
    pub axis_label: HexColor,
    pub x_label_size: f32,
    pub y_label_size: f32,
    pub tooltip_background: HexColor,
    pub tooltip_border: HexColor,
    pub tooltip_text: HexColor,
    pub tooltip_text_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: HexColor(0xFFFFFF),
            grid: HexColor(0xEFF1F8),
            axis_label: HexColor(0x4B5563),
            x_label_size: 12.0,
            y_label_size: 14.0,
            tooltip_background: HexColor(0xFFFFFF),
            tooltip_border: HexColor(0xD1D5DB),
            tooltip_text: HexColor(0x111827),
            tooltip_text_size: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: HexColor(0x121214),
            grid: HexColor(0x28282D),
            axis_label: HexColor(0xB4B4BE),
            x_label_size: 12.0,
            y_label_size: 14.0,
            tooltip_background: HexColor(0x1F1F24),
            tooltip_border: HexColor(0x3C3C46),
            tooltip_text: HexColor(0xEBEBF5),
            tooltip_text_size: 12.0,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
