// File: crates/hoverline-core/tests/render.rs
// Purpose: Curve path shapes, paint order through a recording surface, and SVG output.

use hoverline_core::geometry::RectF;
use hoverline_core::render::{Fill, Stroke, TextStyle};
use hoverline_core::{
    paint_scene, ChartConfig, Curve, DataPoint, Dataset, DrawSurface, HexColor, LineChart, PathCommand, Point,
    SurfaceSize,
};

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[test]
fn linear_and_step_paths() {
    let pts = [p(0.0, 0.0), p(10.0, 10.0)];
    assert_eq!(
        Curve::Linear.path(&pts),
        vec![PathCommand::MoveTo(p(0.0, 0.0)), PathCommand::LineTo(p(10.0, 10.0))]
    );
    assert_eq!(
        Curve::Step.path(&pts),
        vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(5.0, 0.0)),
            PathCommand::LineTo(p(5.0, 10.0)),
            PathCommand::LineTo(p(10.0, 10.0)),
        ]
    );
    assert_eq!(
        Curve::StepAfter.path(&pts),
        vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(10.0, 0.0)),
            PathCommand::LineTo(p(10.0, 10.0)),
        ]
    );
    assert_eq!(
        Curve::StepBefore.path(&pts),
        vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(0.0, 10.0)),
            PathCommand::LineTo(p(10.0, 10.0)),
        ]
    );
    assert!(Curve::Linear.path(&[]).is_empty());
    assert_eq!(Curve::Step.path(&[p(1.0, 1.0)]), vec![PathCommand::MoveTo(p(1.0, 1.0))]);
}

#[test]
fn monotone_curve_passes_through_points() {
    let pts = [p(0.0, 0.0), p(10.0, 5.0), p(20.0, 5.0), p(30.0, 20.0)];
    let path = Curve::MonotoneX.path(&pts);
    assert_eq!(path.len(), pts.len());
    assert_eq!(path[0], PathCommand::MoveTo(pts[0]));
    for (cmd, want) in path[1..].iter().zip(&pts[1..]) {
        match cmd {
            PathCommand::CubicTo(c1, c2, end) => {
                assert_eq!(end, want);
                assert!(c1.y.is_finite() && c2.y.is_finite());
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }
    // flat segment between equal values stays flat
    if let PathCommand::CubicTo(c1, c2, _) = path[2] {
        assert!((c1.y - 5.0).abs() < 1e-4 && (c2.y - 5.0).abs() < 1e-4, "{c1:?} {c2:?}");
    }
    // two points degrade to a straight segment
    assert_eq!(Curve::MonotoneX.path(&pts[..2])[1], PathCommand::LineTo(pts[1]));
}

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Rule,
    Text(String),
    Path(HexColor, f32),
    Circle(usize),
    Tooltip,
}

struct Recorder {
    size: SurfaceSize,
    ops: Vec<Op>,
    circles: usize,
}

impl DrawSurface for Recorder {
    fn size(&self) -> SurfaceSize { self.size }
    fn clear(&mut self, _color: HexColor) { self.ops.push(Op::Clear); }
    fn draw_rule(&mut self, _from: Point, _to: Point, _stroke: &Stroke) { self.ops.push(Op::Rule); }
    fn draw_text(&mut self, text: &str, _at: Point, _style: &TextStyle) { self.ops.push(Op::Text(text.to_string())); }
    fn measure_text(&self, text: &str, size: f32) -> f32 { text.len() as f32 * size * 0.5 }
    fn draw_path(&mut self, _path: &[PathCommand], stroke: &Stroke) {
        self.ops.push(Op::Path(stroke.color, stroke.opacity));
    }
    fn draw_circle(&mut self, _center: Point, _radius: f32, _fill: &Fill) {
        self.ops.push(Op::Circle(self.circles));
        self.circles += 1;
    }
    fn draw_tooltip_box(&mut self, _rect: RectF, _fill: &Fill, _border: &Stroke) { self.ops.push(Op::Tooltip); }
}

fn chart() -> LineChart {
    let data = Dataset::new(vec![
        DataPoint::new(0.0, 1.0, "a"),
        DataPoint::new(1.0, 2.0, "a"),
        DataPoint::new(0.0, 2.0, "b"),
        DataPoint::new(1.0, 1.0, "b"),
    ]);
    LineChart::new(data, ChartConfig::default(), SurfaceSize::new(300, 200)).unwrap()
}

#[test]
fn paints_back_to_front() {
    let mut c = chart();
    c.pointer_entered();
    c.pointer_moved(Point::new(40.0, 170.0)); // series a, first point

    let mut rec = Recorder { size: SurfaceSize::new(300, 200), ops: Vec::new(), circles: 0 };
    paint_scene(c.scene(), c.theme(), &mut rec);

    assert_eq!(rec.ops.first(), Some(&Op::Clear));
    let first_path = rec.ops.iter().position(|o| matches!(o, Op::Path(..))).unwrap();
    let last_rule = rec.ops.iter().rposition(|o| matches!(o, Op::Rule)).unwrap();
    let first_circle = rec.ops.iter().position(|o| matches!(o, Op::Circle(_))).unwrap();
    let tooltip = rec.ops.iter().position(|o| matches!(o, Op::Tooltip)).unwrap();
    assert!(last_rule < first_path && first_path < first_circle && first_circle < tooltip);

    // highlighted series a is drawn last among the lines
    let a_color = c.colors()["a"].color;
    let paths: Vec<&Op> = rec.ops.iter().filter(|o| matches!(o, Op::Path(..))).collect();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[1], &Op::Path(a_color, 1.0));

    assert_eq!(&rec.ops[tooltip + 1..], &[Op::Text("a: 1".into()), Op::Text("0".into())]);
}

#[test]
fn hidden_tooltip_is_not_painted() {
    let mut c = chart();
    c.pointer_moved(Point::new(40.0, 170.0));
    let mut rec = Recorder { size: SurfaceSize::new(300, 200), ops: Vec::new(), circles: 0 };
    c.paint(&mut rec);
    assert!(!rec.ops.contains(&Op::Tooltip));
    assert_eq!(rec.circles, 4);
}

#[test]
fn svg_reflects_blend_mode_and_tooltip() {
    let mut c = chart();
    let idle = c.to_svg();
    assert!(idle.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"200\""));
    assert_eq!(idle.matches("mix-blend-mode:multiply").count(), 2);
    assert_eq!(idle.matches("<circle").count(), 4);
    assert!(!idle.contains("class=\"tooltip\""));

    c.pointer_entered();
    c.pointer_moved(Point::new(40.0, 170.0));
    let hover = c.to_svg();
    assert!(!hover.contains("mix-blend-mode"));
    assert!(hover.contains("class=\"tooltip\""));
    assert!(hover.contains(">a: 1</text>"));
    assert!(hover.contains("opacity=\"0.1\""));
}

#[test]
fn svg_escapes_labels() {
    let data = Dataset::new(vec![DataPoint::new(0.0, 1.0, "<q&a>"), DataPoint::new(1.0, 2.0, "<q&a>")]);
    let mut c = LineChart::new(data, ChartConfig::default(), SurfaceSize::new(300, 200)).unwrap();
    c.pointer_entered();
    c.pointer_moved(Point::new(40.0, 170.0));
    let svg = c.to_svg();
    assert!(svg.contains("&lt;q&amp;a&gt;: 1"));
    assert!(!svg.contains("<q&a>"));
}

#[test]
fn y_axis_title_is_painted_with_the_axes() {
    let data = Dataset::new(vec![DataPoint::new(0.0, 1.0, "a"), DataPoint::new(1.0, 2.0, "a")]);
    let config = ChartConfig { y_label: Some("Revenue".into()), ..ChartConfig::default() };
    let c = LineChart::new(data, config, SurfaceSize::new(300, 200)).unwrap();
    let mut rec = Recorder { size: SurfaceSize::new(300, 200), ops: Vec::new(), circles: 0 };
    c.paint(&mut rec);

    let title = rec.ops.iter().position(|o| *o == Op::Text("Revenue".into())).unwrap();
    let first_path = rec.ops.iter().position(|o| matches!(o, Op::Path(..))).unwrap();
    assert!(title < first_path);
    assert_eq!(rec.ops.iter().filter(|o| **o == Op::Text("Revenue".into())).count(), 1);

    let svg = c.to_svg();
    assert!(svg.contains("<text x=\"0.00\" y=\"10.00\""));
    assert!(svg.contains("text-anchor=\"start\" dominant-baseline=\"text-after-edge\">Revenue</text>"));
}
