// File: crates/hoverline-core/src/curve.rs
// Summary: Line interpolation: turns projected points into path commands.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Backend-neutral path command in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// Interpolation between consecutive points of a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    #[default]
    Linear,
    /// Step changing value halfway between points.
    Step,
    StepBefore,
    StepAfter,
    /// Cubic spline preserving monotonicity in y, assuming monotone x.
    MonotoneX,
}

impl Curve {
    pub fn path(self, points: &[Point]) -> Vec<PathCommand> {
        let Some((&first, rest)) = points.split_first() else { return Vec::new() };
        let mut out = Vec::with_capacity(points.len() * 2);
        out.push(PathCommand::MoveTo(first));
        match self {
            Curve::Linear => out.extend(rest.iter().map(|&p| PathCommand::LineTo(p))),
            Curve::Step => step(points, 0.5, &mut out),
            Curve::StepBefore => step(points, 0.0, &mut out),
            Curve::StepAfter => step(points, 1.0, &mut out),
            Curve::MonotoneX => monotone_x(points, &mut out),
        }
        out
    }
}

fn step(points: &[Point], t: f32, out: &mut Vec<PathCommand>) {
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= 0.0 {
            out.push(PathCommand::LineTo(Point::new(a.x, b.y)));
            out.push(PathCommand::LineTo(b));
        } else {
            let xm = a.x * (1.0 - t) + b.x * t;
            out.push(PathCommand::LineTo(Point::new(xm, a.y)));
            out.push(PathCommand::LineTo(Point::new(xm, b.y)));
        }
    }
    if t > 0.0 && t < 1.0 && points.len() >= 2 {
        out.push(PathCommand::LineTo(points[points.len() - 1]));
    }
}

fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `b` from its two neighbours (Steffen's method).
fn slope3(a: Point, b: Point, c: Point) -> f32 {
    let h0 = b.x - a.x;
    let h1 = c.x - b.x;
    let s0 = if h0 != 0.0 { (b.y - a.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (c.y - b.y) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// One-sided tangent for an end point given the tangent at its neighbour.
fn slope2(a: Point, b: Point, t: f32) -> f32 {
    let h = b.x - a.x;
    if h != 0.0 { (3.0 * (b.y - a.y) / h - t) / 2.0 } else { t }
}

fn monotone_x(points: &[Point], out: &mut Vec<PathCommand>) {
    let n = points.len();
    if n < 3 {
        out.extend(points.iter().skip(1).map(|&p| PathCommand::LineTo(p)));
        return;
    }
    let mut tangents = vec![0.0f32; n];
    for i in 1..n - 1 {
        tangents[i] = slope3(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = slope2(points[0], points[1], tangents[1]);
    tangents[n - 1] = slope2(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        out.push(PathCommand::CubicTo(
            Point::new(a.x + dx, a.y + dx * tangents[i]),
            Point::new(b.x - dx, b.y - dx * tangents[i + 1]),
            b,
        ));
    }
}
