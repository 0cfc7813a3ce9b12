// File: crates/hoverline-core/src/svg.rs
// Summary: Vector backend: a `DrawSurface` that accumulates an SVG document.

use std::fmt::Write as _;

use crate::color::HexColor;
use crate::curve::PathCommand;
use crate::geometry::RectF;
use crate::render::{DrawSurface, Fill, Stroke, TextAlign, TextBaseline, TextStyle};
use crate::types::{Point, SurfaceSize};

/// Average glyph advance as a fraction of the font size; SVG has no layout engine here.
const GLYPH_ADVANCE: f32 = 0.6;

pub struct SvgSurface {
    size: SurfaceSize,
    body: String,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size, body: String::new() }
    }

    /// Close the document and return the SVG text.
    pub fn finish(self) -> String {
        let (w, h) = (self.size.width, self.size.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"Poppins, sans-serif\">\n{}</svg>\n",
            self.body
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn path_data(path: &[PathCommand]) -> String {
    let mut d = String::new();
    for cmd in path {
        match *cmd {
            PathCommand::MoveTo(p) => { let _ = write!(d, "M{:.2},{:.2}", p.x, p.y); }
            PathCommand::LineTo(p) => { let _ = write!(d, "L{:.2},{:.2}", p.x, p.y); }
            PathCommand::CubicTo(c1, c2, p) => {
                let _ = write!(d, "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}", c1.x, c1.y, c2.x, c2.y, p.x, p.y);
            }
        }
    }
    d
}

fn blend_style(stroke: &Stroke) -> String {
    stroke
        .blend_mode
        .map(|m| format!(" style=\"mix-blend-mode:{}\"", m.css_name()))
        .unwrap_or_default()
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> SurfaceSize { self.size }

    fn clear(&mut self, color: HexColor) {
        self.body.clear();
        let _ = writeln!(self.body, "<rect width=\"100%\" height=\"100%\" fill=\"{color}\"/>");
    }

    fn draw_rule(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"/>",
            from.x, from.y, to.x, to.y, stroke.color, stroke.width, stroke.opacity
        );
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "text-after-edge",
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\">{}</text>",
            at.x, at.y, style.size, style.color, escape(text)
        );
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * GLYPH_ADVANCE
    }

    fn draw_path(&mut self, path: &[PathCommand], stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"{}/>",
            path_data(path),
            stroke.color,
            stroke.width,
            stroke.opacity,
            blend_style(stroke)
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f32, fill: &Fill) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
            center.x, center.y, radius, fill.color, fill.opacity
        );
    }

    fn draw_tooltip_box(&mut self, rect: RectF, fill: &Fill, border: &Stroke) {
        let _ = writeln!(
            self.body,
            "<rect class=\"tooltip\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            rect.left, rect.top, rect.width(), rect.height(), fill.color, fill.opacity, border.color, border.width
        );
    }
}
