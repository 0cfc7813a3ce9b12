// File: crates/hoverline-render-skia/src/lib.rs
// Summary: Skia raster backend for hoverline charts: RGBA buffers for window blits and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use hoverline_core::LineChart;
use log::debug;

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shape and draw tick labels and tooltip text. Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

/// Raster output for a chart session at its current surface size.
pub trait SkiaRender {
    /// Paint into unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)>;

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl SkiaRender for LineChart {
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = SkiaSurface::new(self.geometry().size, opts.draw_labels)?;
        self.paint(&mut surface);
        surface.read_rgba8()
    }
}
