// File: crates/hoverline-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG with labels and a visible tooltip.

use hoverline_core::{ChartConfig, DataPoint, Dataset, LineChart, Point, SurfaceSize};
use hoverline_render_skia::{RenderOptions, SkiaRender};

#[test]
fn render_smoke_png() {
    let data: Dataset = (0..5)
        .flat_map(|i| {
            let x = i as f64;
            [DataPoint::new(x, x.sin() * 3.0 + 4.0, "north"), DataPoint::new(x, x * 0.8, "south")]
        })
        .collect();
    let mut chart = LineChart::new(data, ChartConfig::default(), SurfaceSize::new(320, 200)).unwrap();
    chart.pointer_entered();
    chart.pointer_moved(Point::new(160.0, 100.0));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/hoverline_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));
}
