// File: crates/hoverline-render-skia/src/text.rs
// Summary: Tick and tooltip text shaping via Skia textlayout, aligned to an anchor point.

use hoverline_core::render::{TextAlign, TextBaseline};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

const FAMILIES: [&str; 6] = ["Poppins", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&FAMILIES);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` so that the anchor `(x, y)` sits at the requested alignment and baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };
        // Paragraph paints from its top-left corner.
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - h / 2.0,
            TextBaseline::Bottom => y - h,
        };
        p.paint(canvas, (left, top));
    }
}
