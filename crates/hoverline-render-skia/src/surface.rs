// File: crates/hoverline-render-skia/src/surface.rs
// Summary: `DrawSurface` over a Skia CPU raster surface, with RGBA readback.

use hoverline_core::curve::PathCommand;
use hoverline_core::geometry::RectF;
use hoverline_core::render::{DrawSurface, Fill, Stroke, TextStyle};
use hoverline_core::{BlendMode, ChartError, HexColor, Point, SurfaceSize};
use skia_safe as skia;

use crate::text::TextShaper;

/// Glyph advance estimate used when labels are disabled and no shaper exists.
const GLYPH_ADVANCE: f32 = 0.6;

fn color(c: HexColor) -> skia::Color {
    skia::Color::from_rgb(c.r(), c.g(), c.b())
}

fn blend(mode: BlendMode) -> skia::BlendMode {
    match mode {
        BlendMode::Multiply => skia::BlendMode::Multiply,
        BlendMode::Screen => skia::BlendMode::Screen,
        BlendMode::Darken => skia::BlendMode::Darken,
        BlendMode::Lighten => skia::BlendMode::Lighten,
    }
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    paint.set_alpha_f(stroke.opacity.clamp(0.0, 1.0));
    if let Some(mode) = stroke.blend_mode {
        paint.set_blend_mode(blend(mode));
    }
    paint
}

fn fill_paint(fill: &Fill) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(fill.color));
    paint.set_alpha_f(fill.opacity.clamp(0.0, 1.0));
    paint
}

pub struct SkiaSurface {
    surface: skia::Surface,
    size: SurfaceSize,
    // None when labels are turned off
    shaper: Option<TextShaper>,
}

impl SkiaSurface {
    /// Allocate a CPU raster surface of `size`.
    pub fn new(size: SurfaceSize, draw_labels: bool) -> Result<Self, ChartError> {
        let name = format!("raster {}x{}", size.width, size.height);
        if size.is_empty() {
            return Err(ChartError::setup(name, "surface has zero area"));
        }
        let dims = (
            i32::try_from(size.width).map_err(|_| ChartError::setup(name.clone(), "width out of range"))?,
            i32::try_from(size.height).map_err(|_| ChartError::setup(name.clone(), "height out of range"))?,
        );
        let surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| ChartError::setup(name, "failed to create raster surface"))?;
        Ok(Self { surface, size, shaper: draw_labels.then(TextShaper::new) })
    }

    /// Read back unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn read_rgba8(&mut self) -> anyhow::Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.size.width, self.size.height);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read {}x{} pixels from raster surface", w, h);
        }
        Ok((pixels, w, h, row_bytes))
    }
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> SurfaceSize { self.size }

    fn clear(&mut self, c: HexColor) {
        self.surface.canvas().clear(color(c));
    }

    fn draw_rule(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let Some(shaper) = &self.shaper else { return };
        shaper.draw(
            self.surface.canvas(),
            text,
            at.x,
            at.y,
            style.size,
            color(style.color),
            style.align,
            style.baseline,
        );
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        match &self.shaper {
            Some(shaper) => shaper.measure_width(text, size),
            None => text.chars().count() as f32 * size * GLYPH_ADVANCE,
        }
    }

    fn draw_path(&mut self, commands: &[PathCommand], stroke: &Stroke) {
        let mut path = skia::Path::new();
        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo(p) => { path.move_to((p.x, p.y)); }
                PathCommand::LineTo(p) => { path.line_to((p.x, p.y)); }
                PathCommand::CubicTo(c1, c2, p) => { path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (p.x, p.y)); }
            }
        }
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, fill: &Fill) {
        let paint = fill_paint(fill);
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_tooltip_box(&mut self, rect: RectF, fill: &Fill, border: &Stroke) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        let canvas = self.surface.canvas();
        canvas.draw_round_rect(r, 4.0, 4.0, &fill_paint(fill));
        canvas.draw_round_rect(r, 4.0, 4.0, &stroke_paint(border));
    }
}
