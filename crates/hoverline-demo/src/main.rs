// File: crates/hoverline-demo/src/main.rs
// Summary: Interactive hover demo: renders a hoverline chart to a window via RGBA blit (CPU)
// using winit + softbuffer, or exports PNG/SVG headlessly.

mod load;

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hoverline_core::{ChartConfig, LineChart, PointerEvent, SurfaceSize};
use hoverline_render_skia::{RenderOptions, SkiaRender};
use log::{debug, error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::load::{infer_x_scale, load_csv, Columns};

#[derive(Parser, Debug)]
#[command(name = "hoverline-demo", about = "Multi-series line chart with nearest-point hover")]
struct Args {
    /// CSV file with x, y and category columns
    #[arg(default_value = "crates/hoverline-demo/data/sales.csv")]
    csv: PathBuf,
    /// JSON chart configuration; x scale is guessed from the data when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// x column name
    #[arg(long)]
    x: Option<String>,
    /// y column name
    #[arg(long)]
    y: Option<String>,
    /// category column name
    #[arg(long)]
    z: Option<String>,
    /// Only draw these series (repeatable)
    #[arg(long = "series")]
    series: Vec<String>,
    /// Title above the y axis
    #[arg(long)]
    y_label: Option<String>,
    /// strftime pattern for time x tick labels, e.g. "%-m/%-d"
    #[arg(long)]
    x_tick_format: Option<String>,
    #[arg(long, default_value_t = hoverline_core::types::WIDTH)]
    width: u32,
    #[arg(long, default_value_t = hoverline_core::types::HEIGHT)]
    height: u32,
    /// Write a PNG and exit
    #[arg(long)]
    png: Option<PathBuf>,
    /// Write an SVG and exit
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let columns = Columns { x: args.x.clone(), y: args.y.clone(), z: args.z.clone() };
    let data = load_csv(&args.csv, &columns)?;
    let mut config = match &args.config {
        Some(path) => ChartConfig::from_path(path).with_context(|| format!("load config {}", path.display()))?,
        None => ChartConfig { x_scale: infer_x_scale(&data), ..ChartConfig::default() },
    };
    if !args.series.is_empty() {
        config.z_domain = Some(args.series.clone());
    }
    if args.y_label.is_some() {
        config.y_label = args.y_label.clone();
    }
    if args.x_tick_format.is_some() {
        config.x_tick_format = args.x_tick_format.clone();
    }
    let chart = LineChart::new(data, config, SurfaceSize::new(args.width, args.height))?;
    for (label, c) in chart.colors() {
        debug!("series {label} -> {}", c.color);
    }

    if args.png.is_some() || args.svg.is_some() {
        return export(&chart, &args);
    }
    run_window(chart, args.width, args.height)
}

fn export(chart: &LineChart, args: &Args) -> Result<()> {
    if let Some(path) = &args.png {
        chart.render_to_png(&RenderOptions::default(), path)?;
        info!("wrote {}", path.display());
    }
    if let Some(path) = &args.svg {
        std::fs::write(path, chart.to_svg()).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn run_window(mut chart: LineChart, width: u32, height: u32) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Hoverline Demo")
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;
    let opts = RenderOptions::default();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let outcome = match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = chart.resize(SurfaceSize::new(size.width, size.height)) {
                            // minimised windows report a zero size
                            debug!("skip resize: {e}");
                            return;
                        }
                        window.request_redraw();
                        None
                    }
                    WindowEvent::CursorEntered { .. } => Some(chart.handle(PointerEvent::Enter)),
                    WindowEvent::CursorMoved { position, .. } => {
                        Some(chart.handle(PointerEvent::Move { x: position.x as f32, y: position.y as f32 }))
                    }
                    WindowEvent::CursorLeft { .. } => Some(chart.handle(PointerEvent::Leave)),
                    _ => None,
                };
                if outcome.is_some_and(|o| o.needs_redraw()) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&chart, &opts, &mut surface) {
                    error!("redraw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

/// Render to RGBA and blit as 0RGB u32 for softbuffer.
fn present(chart: &LineChart, opts: &RenderOptions, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = chart.render_to_rgba8(opts)?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
