// File: crates/hoverline-core/src/geometry.rs
// Summary: Plot rectangle, scales and projected screen positions for one render session.

use log::warn;

use crate::axis::{is_valid_time_pattern, Axis};
use crate::config::ChartConfig;
use crate::data::{DataPoint, Dataset, Selection, XValue};
use crate::scale::{ContinuousScale, PointScale, TimeScale, XScale, XScaleKind, YScale, YScaleKind};
use crate::types::{Insets, Point, SurfaceSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Screen position of the data point at `index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub index: usize,
    pub screen: Point,
}

const DAY_MS: f64 = 86_400_000.0;

/// Scales, axes and projected points derived from a dataset and a surface size.
#[derive(Clone, Debug)]
pub struct ChartGeometry {
    pub size: SurfaceSize,
    pub margin: Insets,
    pub plot: RectF,
    pub x_scale: XScale,
    pub y_scale: YScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    projected: Vec<ProjectedPoint>,
    // dataset index -> projected position, None when the point cannot be placed
    positions: Vec<Option<Point>>,
}

impl ChartGeometry {
    /// Lay out `data` on a surface of `size`. Points outside `config.z_domain` get no position.
    pub fn new(data: &Dataset, size: SurfaceSize, config: &ChartConfig) -> Self {
        let margin = config.margin;
        // margins wider than the surface collapse the plot to an empty rect
        let plot = RectF::from_ltwh(
            margin.left as f32,
            margin.top as f32,
            size.width.saturating_sub(margin.hsum()) as f32,
            size.height.saturating_sub(margin.vsum()) as f32,
        );
        let x_range = (plot.left, plot.right);
        let y_range = (plot.bottom, plot.top);

        let selection = data.select(config.z_domain.as_deref());
        let x_scale = build_x_scale(&selection, config, x_range);
        let y_scale = build_y_scale(&selection, config, y_range);

        let mut x_axis = Axis::bottom(&x_scale, config.tick_count, plot.bottom);
        let mut y_axis = Axis::left(&y_scale, config.tick_count, plot.left, (plot.left, plot.right));
        y_axis.title = config.y_label.clone();
        if let (XScale::Time(_), Some(pattern)) = (&x_scale, &config.x_tick_format) {
            if is_valid_time_pattern(pattern) {
                x_axis.relabel(|v| match v {
                    XValue::Time(t) => t.format(pattern).to_string(),
                    other => other.to_string(),
                });
            } else {
                warn!("ignoring invalid x tick format `{pattern}`");
            }
        }

        let positions: Vec<Option<Point>> = data
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| if selection.contains(i) { project(&x_scale, &y_scale, p) } else { None })
            .collect();
        let projected: Vec<ProjectedPoint> = positions
            .iter()
            .enumerate()
            .filter_map(|(index, pos)| pos.map(|screen| ProjectedPoint { index, screen }))
            .collect();
        if projected.len() < selection.len() {
            warn!("{} of {} points have no screen position", selection.len() - projected.len(), selection.len());
        }

        Self { size, margin, plot, x_scale, y_scale, x_axis, y_axis, projected, positions }
    }

    /// Projected points in dataset order; points without a position are absent.
    pub fn projected(&self) -> &[ProjectedPoint] { &self.projected }

    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied().flatten()
    }
}

fn project(x_scale: &XScale, y_scale: &YScale, p: &DataPoint) -> Option<Point> {
    let screen = Point::new(x_scale.map(&p.x)?, y_scale.map(p.y)?);
    screen.is_finite().then_some(screen)
}

fn positive_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

fn build_x_scale(selection: &Selection<'_>, config: &ChartConfig, range: (f32, f32)) -> XScale {
    let fixed = config.x_domain;
    match config.x_scale {
        XScaleKind::Linear => {
            let domain = fixed.or_else(|| selection.x_extent()).unwrap_or((0.0, 1.0));
            XScale::Continuous(ContinuousScale::new_linear(domain, range))
        }
        XScaleKind::Log => {
            let domain = fixed.or_else(|| positive_extent(selection.iter().filter_map(|(_, p)| p.x.as_f64())));
            XScale::Continuous(ContinuousScale::new_log10(domain.unwrap_or((1.0, 10.0)), range))
        }
        XScaleKind::Time => {
            let domain = fixed.or_else(|| selection.x_extent()).unwrap_or((0.0, DAY_MS));
            XScale::Time(TimeScale::new(domain, range))
        }
        XScaleKind::Ordinal => XScale::Point(PointScale::new(selection.x_categories(), range)),
    }
}

fn build_y_scale(selection: &Selection<'_>, config: &ChartConfig, range: (f32, f32)) -> YScale {
    match config.y_scale {
        YScaleKind::Linear => {
            if let Some(domain) = config.y_domain {
                return ContinuousScale::new_linear(domain, range);
            }
            let (mut lo, mut hi) = selection.y_extent().unwrap_or((0.0, 1.0));
            if config.y_include_zero {
                lo = lo.min(0.0);
                hi = hi.max(0.0);
            }
            ContinuousScale::new_linear((lo, hi), range)
        }
        YScaleKind::Log => {
            let domain = config.y_domain.or_else(|| positive_extent(selection.iter().map(|(_, p)| p.y)));
            ContinuousScale::new_log10(domain.unwrap_or((1.0, 10.0)), range)
        }
    }
}
