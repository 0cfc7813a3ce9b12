// File: crates/hoverline-core/src/tracker.rs
// Summary: Nearest-point hit testing and the Idle/Hovering pointer state machine.
// Notes:
// - The tracker owns the only mutable hover memory of a chart session. A pointer move that
//   resolves to the remembered index is a no-op: callers must not restyle or redraw.

use log::trace;

use crate::data::{DataPoint, XValue};
use crate::geometry::ProjectedPoint;
use crate::types::Point;

/// Index (into the dataset) of the projected point closest to `pointer`.
///
/// Ties keep the first point in iteration order. Returns `None` for an empty set or a
/// pointer with a non-finite coordinate.
pub fn nearest_index(pointer: Point, points: &[ProjectedPoint]) -> Option<usize> {
    if !pointer.is_finite() {
        return None;
    }
    let mut best: Option<(usize, f32)> = None;
    for p in points {
        let d = pointer.distance(p.screen);
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((p.index, d)),
        }
    }
    best.map(|(index, _)| index)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerState {
    #[default]
    Idle,
    Hovering(usize),
}

/// Result of feeding one pointer position to a [`PointerTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverUpdate {
    /// No point is nearest (empty set or a non-finite pointer); state is untouched.
    NoPoint,
    /// The nearest point is the one already hovered.
    Unchanged,
    /// A different point (dataset index) is now hovered.
    Changed(usize),
}

/// Remembers the last reported nearest point between pointer events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    state: TrackerState,
}

impl PointerTracker {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> TrackerState { self.state }

    /// Currently hovered dataset index, if any.
    pub fn hovered(&self) -> Option<usize> {
        match self.state {
            TrackerState::Idle => None,
            TrackerState::Hovering(i) => Some(i),
        }
    }

    /// Resolve the nearest point and report it as changed only when it differs from the
    /// remembered one.
    pub fn pointer_moved(&mut self, pointer: Point, points: &[ProjectedPoint]) -> HoverUpdate {
        let Some(nearest) = nearest_index(pointer, points) else { return HoverUpdate::NoPoint };
        if self.state == TrackerState::Hovering(nearest) {
            return HoverUpdate::Unchanged;
        }
        trace!("hover {:?} -> {}", self.state, nearest);
        self.state = TrackerState::Hovering(nearest);
        HoverUpdate::Changed(nearest)
    }

    /// Forget the hovered point. Returns whether anything was hovered.
    pub fn pointer_left(&mut self) -> bool {
        let was_hovering = self.state != TrackerState::Idle;
        self.state = TrackerState::Idle;
        was_hovering
    }
}

/// Series and x of the hovered point; drives per-mark opacity, width and radius.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
    pub active_label: Option<String>,
    pub active_x: Option<XValue>,
}

impl HighlightState {
    pub fn for_point(point: &DataPoint) -> Self {
        Self { active_label: Some(point.z.clone()), active_x: Some(point.x.clone()) }
    }

    pub fn is_active(&self) -> bool { self.active_label.is_some() }

    /// Whether a line or marker of series `label` belongs to the highlighted series.
    pub fn matches_label(&self, label: &str) -> bool {
        self.active_label.as_deref() == Some(label)
    }

    /// Whether the marker at (`label`, `x`) is the exact hovered point.
    pub fn matches_point(&self, label: &str, x: &XValue) -> bool {
        self.matches_label(label) && self.active_x.as_ref() == Some(x)
    }
}
