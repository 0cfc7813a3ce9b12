// File: crates/hoverline-core/src/render.rs
// Summary: Drawing seam: explicit draw calls over resolved attributes, and the scene painter.

use crate::axis::AxisOrient;
use crate::color::HexColor;
use crate::curve::PathCommand;
use crate::geometry::RectF;
use crate::scene::Scene;
use crate::theme::{BlendMode, Theme};
use crate::types::{Point, SurfaceSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: HexColor,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: HexColor,
    pub width: f32,
    pub opacity: f32,
    pub blend_mode: Option<BlendMode>,
}

impl Stroke {
    pub fn solid(color: HexColor, width: f32) -> Self {
        Self { color, width, opacity: 1.0, blend_mode: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: HexColor,
    pub opacity: f32,
}

/// A drawable surface (raster canvas or vector document).
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;
    fn clear(&mut self, color: HexColor);
    fn draw_rule(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);
    /// Advance width of `text` at font `size`, in pixels.
    fn measure_text(&self, text: &str, size: f32) -> f32;
    fn draw_path(&mut self, path: &[PathCommand], stroke: &Stroke);
    fn draw_circle(&mut self, center: Point, radius: f32, fill: &Fill);
    fn draw_tooltip_box(&mut self, rect: RectF, fill: &Fill, border: &Stroke);
}

/// Baseline of the y axis title, from the top of the surface.
const AXIS_TITLE_BASELINE: f32 = 10.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TOOLTIP_LINE_GAP: f32 = 5.0;

/// Paint `scene` back to front: background, gridlines, tick labels, lines, markers, tooltip.
pub fn paint_scene<S: DrawSurface + ?Sized>(scene: &Scene, theme: &Theme, surface: &mut S) {
    surface.clear(theme.background);
    paint_axes(scene, theme, surface);

    for line in scene.lines_in_draw_order() {
        if line.path.is_empty() {
            continue;
        }
        let stroke = Stroke {
            color: line.color,
            width: line.stroke_width,
            opacity: line.opacity,
            blend_mode: line.blend_mode,
        };
        surface.draw_path(&line.path, &stroke);
    }

    for point in scene.points_in_draw_order() {
        surface.draw_circle(point.center, point.radius, &Fill { color: point.color, opacity: point.opacity });
    }

    paint_tooltip(scene, theme, surface);
}

fn paint_axes<S: DrawSurface + ?Sized>(scene: &Scene, theme: &Theme, surface: &mut S) {
    for axis in [&scene.y_axis, &scene.x_axis] {
        if let Some((x0, x1)) = axis.grid_span {
            let grid = Stroke::solid(theme.grid, 1.0);
            for tick in &axis.ticks {
                surface.draw_rule(Point::new(x0, tick.position), Point::new(x1, tick.position), &grid);
            }
        }
        let style = match axis.orient {
            AxisOrient::Bottom => TextStyle {
                size: theme.x_label_size,
                color: theme.axis_label,
                align: TextAlign::Center,
                baseline: TextBaseline::Top,
            },
            AxisOrient::Left => TextStyle {
                size: theme.y_label_size,
                color: theme.axis_label,
                align: TextAlign::Right,
                baseline: TextBaseline::Middle,
            },
        };
        for tick in &axis.ticks {
            let (x, y) = axis.label_anchor(tick);
            surface.draw_text(&tick.label, Point::new(x, y), &style);
        }
        if let Some(title) = &axis.title {
            let style = TextStyle { align: TextAlign::Left, baseline: TextBaseline::Bottom, ..style };
            surface.draw_text(title, Point::new(0.0, AXIS_TITLE_BASELINE), &style);
        }
    }
}

fn paint_tooltip<S: DrawSurface + ?Sized>(scene: &Scene, theme: &Theme, surface: &mut S) {
    let Some(content) = scene.tooltip.content() else { return };
    let size = theme.tooltip_text_size;
    let text_w = surface
        .measure_text(&content.title, size)
        .max(surface.measure_text(&content.subtitle, size));
    let box_w = text_w + 2.0 * TOOLTIP_PADDING;
    let box_h = 2.0 * size + TOOLTIP_LINE_GAP + 2.0 * TOOLTIP_PADDING;
    let clamp_to = scene.tooltip_clamp.then_some(surface.size());
    let Some(top_left) = scene.tooltip.placement(box_w, box_h, scene.tooltip_gap, clamp_to) else { return };

    let rect = RectF::from_ltwh(top_left.x, top_left.y, box_w, box_h);
    surface.draw_tooltip_box(
        rect,
        &Fill { color: theme.tooltip_background, opacity: 0.95 },
        &Stroke::solid(theme.tooltip_border, 1.0),
    );
    let style = TextStyle { size, color: theme.tooltip_text, align: TextAlign::Left, baseline: TextBaseline::Top };
    let x = rect.left + TOOLTIP_PADDING;
    let y = rect.top + TOOLTIP_PADDING;
    surface.draw_text(&content.title, Point::new(x, y), &style);
    surface.draw_text(&content.subtitle, Point::new(x, y + size + TOOLTIP_LINE_GAP), &style);
}
