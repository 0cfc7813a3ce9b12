// File: crates/hoverline-core/src/tooltip.rs
// Summary: Tooltip visibility, content and placement above the hovered point.

use crate::data::DataPoint;
use crate::geometry::clamp;
use crate::types::{Point, SurfaceSize};

/// Two-line tooltip text: `"{series}: {y}"` over the x value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub title: String,
    pub subtitle: String,
}

impl TooltipContent {
    pub fn for_point(point: &DataPoint) -> Self {
        Self { title: format!("{}: {}", point.z, point.y), subtitle: point.x.to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    content: Option<TooltipContent>,
    anchor: Option<Point>,
}

impl Tooltip {
    pub fn show(&mut self) { self.visible = true; }

    pub fn hide(&mut self) {
        self.visible = false;
        self.content = None;
        self.anchor = None;
    }

    /// Point the tooltip at `anchor` (the hovered point's screen position).
    pub fn update(&mut self, content: TooltipContent, anchor: Point) {
        self.content = Some(content);
        self.anchor = Some(anchor);
    }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn content(&self) -> Option<&TooltipContent> { self.content.as_ref() }
    pub fn anchor(&self) -> Option<Point> { self.anchor }

    /// Top-left corner of a `box_w` x `box_h` tooltip: horizontally centered on the anchor,
    /// bottom edge `gap` pixels above it. With `clamp_to` the box is kept inside the surface.
    pub fn placement(&self, box_w: f32, box_h: f32, gap: f32, clamp_to: Option<SurfaceSize>) -> Option<Point> {
        if !self.visible || self.content.is_none() {
            return None;
        }
        let anchor = self.anchor?;
        let mut left = anchor.x - box_w / 2.0;
        let mut top = anchor.y - box_h - gap;
        if let Some(size) = clamp_to {
            left = clamp(left, 0.0, (size.width as f32 - box_w).max(0.0));
            top = clamp(top, 0.0, (size.height as f32 - box_h).max(0.0));
        }
        Some(Point::new(left, top))
    }
}
