// File: crates/hoverline-core/src/scene.rs
// Summary: Resolved, backend-neutral marks (lines, markers, axes, tooltip) with draw order.

use crate::axis::Axis;
use crate::color::{ColorTable, HexColor};
use crate::config::ChartConfig;
use crate::curve::PathCommand;
use crate::data::{Dataset, XValue};
use crate::geometry::{ChartGeometry, RectF};
use crate::theme::{BlendMode, VisualStyle};
use crate::tooltip::Tooltip;
use crate::tracker::HighlightState;
use crate::types::{Point, SurfaceSize};

// Used only if a label is somehow missing from the color table.
const FALLBACK_COLOR: HexColor = HexColor(0x20C4F4);

/// One path per series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    pub label: String,
    pub color: HexColor,
    pub path: Vec<PathCommand>,
    pub opacity: f32,
    pub stroke_width: f32,
    pub blend_mode: Option<BlendMode>,
}

/// One marker per projected data point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    /// Dataset index of the point.
    pub index: usize,
    pub label: String,
    pub x: XValue,
    pub center: Point,
    pub color: HexColor,
    pub opacity: f32,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub size: SurfaceSize,
    pub plot: RectF,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub lines: Vec<LineMark>,
    pub points: Vec<PointMark>,
    pub tooltip: Tooltip,
    pub tooltip_gap: f32,
    pub tooltip_clamp: bool,
    line_order: Vec<usize>,
    point_order: Vec<usize>,
}

impl Scene {
    pub fn build(data: &Dataset, geometry: &ChartGeometry, colors: &ColorTable, config: &ChartConfig) -> Self {
        let style = &config.style;
        let color_of = |label: &str| colors.get(label).map(|c| c.color).unwrap_or(FALLBACK_COLOR);

        let lines: Vec<LineMark> = data
            .select(config.z_domain.as_deref())
            .groups()
            .into_iter()
            .map(|(label, indices)| {
                let points: Vec<Point> = indices.iter().filter_map(|&i| geometry.position(i)).collect();
                LineMark {
                    label: label.to_string(),
                    color: color_of(label),
                    path: config.curve.path(&points),
                    opacity: style.opacity,
                    stroke_width: style.line_width,
                    blend_mode: config.mix_blend_mode,
                }
            })
            .collect();

        let points: Vec<PointMark> = geometry
            .projected()
            .iter()
            .filter_map(|p| {
                let d = data.get(p.index)?;
                Some(PointMark {
                    index: p.index,
                    label: d.z.clone(),
                    x: d.x.clone(),
                    center: p.screen,
                    color: color_of(&d.z),
                    opacity: style.opacity,
                    radius: style.point_radius,
                })
            })
            .collect();

        Self {
            size: geometry.size,
            plot: geometry.plot,
            x_axis: geometry.x_axis.clone(),
            y_axis: geometry.y_axis.clone(),
            line_order: (0..lines.len()).collect(),
            point_order: (0..points.len()).collect(),
            lines,
            points,
            tooltip: Tooltip::default(),
            tooltip_gap: style.tooltip_gap,
            tooltip_clamp: config.tooltip_clamp,
        }
    }

    /// Indices into `lines`, back to front.
    pub fn line_order(&self) -> &[usize] { &self.line_order }
    /// Indices into `points`, back to front.
    pub fn point_order(&self) -> &[usize] { &self.point_order }

    pub fn lines_in_draw_order(&self) -> impl Iterator<Item = &LineMark> + '_ {
        self.line_order.iter().filter_map(|&i| self.lines.get(i))
    }

    pub fn points_in_draw_order(&self) -> impl Iterator<Item = &PointMark> + '_ {
        self.point_order.iter().filter_map(|&i| self.points.get(i))
    }

    /// Emphasize the highlighted series: full opacity and active width for its line, dimmed
    /// elsewhere, larger radius only for the exact hovered marker. Matching marks are raised.
    pub fn apply_highlight(&mut self, highlight: &HighlightState, style: &VisualStyle) {
        for line in &mut self.lines {
            let hit = highlight.matches_label(&line.label);
            line.opacity = if hit { style.opacity } else { style.inactive_opacity };
            line.stroke_width = if hit { style.active_line_width } else { style.line_width };
        }
        for point in &mut self.points {
            point.opacity = if highlight.matches_label(&point.label) { style.opacity } else { style.inactive_opacity };
            point.radius = if highlight.matches_point(&point.label, &point.x) {
                style.active_point_radius
            } else {
                style.point_radius
            };
        }
        let lines = &self.lines;
        raise(&mut self.line_order, |i| highlight.matches_label(&lines[i].label));
        let points = &self.points;
        raise(&mut self.point_order, |i| highlight.matches_label(&points[i].label));
    }

    /// Back to idle: full opacity, normal widths and radii, `blend_mode` on every line.
    pub fn reset_highlight(&mut self, style: &VisualStyle, blend_mode: Option<BlendMode>) {
        for line in &mut self.lines {
            line.opacity = style.opacity;
            line.stroke_width = style.line_width;
            line.blend_mode = blend_mode;
        }
        for point in &mut self.points {
            point.opacity = style.opacity;
            point.radius = style.point_radius;
        }
    }

    pub fn set_blend_mode(&mut self, blend_mode: Option<BlendMode>) {
        for line in &mut self.lines {
            line.blend_mode = blend_mode;
        }
    }
}

/// Move entries selected by `pred` to the top (end) of `order`, keeping relative order.
fn raise(order: &mut Vec<usize>, pred: impl Fn(usize) -> bool) {
    let (mut rest, top): (Vec<usize>, Vec<usize>) = order.iter().partition(|&&i| !pred(i));
    rest.extend(top);
    *order = rest;
}
