// File: crates/hoverline-core/src/axis.rs
// Summary: Axis model: positioned tick labels, gridlines and tick label formatting.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::data::XValue;
use crate::scale::{TimeStep, XScale, YScale};

/// Default number of ticks requested per axis.
pub const TICK_COUNT: usize = 5;
/// Gap between the plot edge and tick labels, in pixels.
pub const TICK_PADDING: f32 = 10.0;

/// A labelled tick at a pixel position along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub label: String,
    /// Domain value at the tick; times for time scales, keys for ordinal scales.
    pub value: XValue,
}

/// Caller-supplied tick label formatter.
pub type TickFormat = Box<dyn Fn(&XValue) -> String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Everything needed to draw one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub ticks: Vec<Tick>,
    /// Pixel coordinate of the axis baseline (y for bottom, x for left).
    pub baseline: f32,
    /// Gridlines span this interval across the plot (x span for horizontal gridlines).
    pub grid_span: Option<(f32, f32)>,
    pub title: Option<String>,
}

impl Axis {
    pub fn bottom(scale: &XScale, count: usize, baseline: f32) -> Self {
        Self { orient: AxisOrient::Bottom, ticks: scale.ticks(count), baseline, grid_span: None, title: None }
    }

    /// Left axis whose ticks extend as gridlines over `grid_span`.
    pub fn left(scale: &YScale, count: usize, baseline: f32, grid_span: (f32, f32)) -> Self {
        Self {
            orient: AxisOrient::Left,
            ticks: scale.ticks(count),
            baseline,
            grid_span: Some(grid_span),
            title: None,
        }
    }

    /// Replace every tick label with `format` of the tick value.
    pub fn relabel(&mut self, format: impl Fn(&XValue) -> String) {
        for tick in &mut self.ticks {
            tick.label = format(&tick.value);
        }
    }

    /// Anchor point of the label for `tick`, before text alignment.
    pub fn label_anchor(&self, tick: &Tick) -> (f32, f32) {
        match self.orient {
            AxisOrient::Bottom => (tick.position, self.baseline + TICK_PADDING),
            AxisOrient::Left => (self.baseline - TICK_PADDING, tick.position),
        }
    }
}

const SI_PREFIXES: [(i32, &str); 6] = [(3, "k"), (6, "M"), (9, "G"), (12, "T"), (15, "P"), (18, "E")];

/// Format a tick value; values of a thousand and up use SI prefixes (`1.5k`, `20M`).
/// `step` is the spacing between neighbouring ticks and decides the precision.
pub fn format_number(value: f64, step: f64) -> String {
    let value = value + 0.0; // normalise -0
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    let exponent = if magnitude >= 1000.0 { (magnitude.log10() / 3.0).floor() as i32 * 3 } else { 0 };
    let (scale, suffix) = SI_PREFIXES
        .iter()
        .rev()
        .find(|(e, _)| *e <= exponent)
        .map(|(e, s)| (10f64.powi(*e), *s))
        .unwrap_or((1.0, ""));
    let scaled = value / scale;
    let rel_step = (step / scale).abs();
    let decimals = if rel_step > 0.0 && rel_step.is_finite() {
        (-rel_step.log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        0
    };
    let mut text = format!("{scaled:.decimals$}");
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    format!("{text}{suffix}")
}

/// Format an epoch-millisecond tick according to the granularity of `step`.
pub fn format_time(ms: i64, step: TimeStep) -> String {
    let Some(t) = DateTime::<Utc>::from_timestamp_millis(ms) else { return ms.to_string() };
    let pattern = match step {
        TimeStep::Fixed(s) if s < 60_000 => "%H:%M:%S",
        TimeStep::Fixed(s) if s < 86_400_000 => "%H:%M",
        TimeStep::Fixed(_) => "%b %d",
        TimeStep::Months(_) => "%b %Y",
        TimeStep::Years(_) => "%Y",
    };
    t.format(pattern).to_string()
}

/// Whether `pattern` is a strftime pattern chrono can format with.
pub fn is_valid_time_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
