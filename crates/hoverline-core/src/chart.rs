// File: crates/hoverline-core/src/chart.rs
// Summary: Line chart session: colors + geometry + scene, driven by pointer events.

use log::debug;

use crate::axis::TickFormat;
use crate::color::ColorTable;
use crate::config::ChartConfig;
use crate::data::{Dataset, XValue};
use crate::error::{ChartError, Result};
use crate::geometry::ChartGeometry;
use crate::render::{paint_scene, DrawSurface};
use crate::scene::Scene;
use crate::svg::SvgSurface;
use crate::theme::Theme;
use crate::tooltip::TooltipContent;
use crate::tracker::{HighlightState, HoverUpdate, PointerTracker, TrackerState};
use crate::types::{Point, SurfaceSize};

/// Pointer input in surface-local coordinates, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter,
    Move { x: f32, y: f32 },
    Leave,
}

/// What a pointer event did to the chart. Anything but `Unchanged`/`NoPoint` needs a redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Same nearest point as before; nothing changed.
    Unchanged,
    /// Nothing to hover: no projected points, or a pointer that cannot be placed.
    NoPoint,
    /// A new point (dataset index) is highlighted.
    Highlighted(usize),
    Entered,
    Reset,
}

impl PointerOutcome {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, PointerOutcome::Unchanged | PointerOutcome::NoPoint)
    }
}

/// One interactive multi-series line chart bound to a surface of known size.
pub struct LineChart {
    data: Dataset,
    config: ChartConfig,
    theme: Theme,
    colors: ColorTable,
    geometry: ChartGeometry,
    scene: Scene,
    tracker: PointerTracker,
    highlight: HighlightState,
    // pointer is over the surface (between Enter and Leave)
    inside: bool,
    x_format: Option<TickFormat>,
    y_format: Option<TickFormat>,
}

impl LineChart {
    /// Build a chart session. Fails before touching the data when the surface is unusable
    /// or the configuration names no hues.
    pub fn new(data: Dataset, config: ChartConfig, size: SurfaceSize) -> Result<Self> {
        if size.is_empty() {
            return Err(ChartError::setup(
                format!("{}x{}", size.width, size.height),
                "surface has zero area",
            ));
        }
        let assigner = config.color_assigner()?;
        config.validate()?;
        let colors = assigner.assign(data.labels());
        let geometry = ChartGeometry::new(&data, size, &config);
        let scene = Scene::build(&data, &geometry, &colors, &config);
        debug!(
            "chart session: {} points, {} series, {} hoverable, surface {}x{}",
            data.len(),
            colors.len(),
            geometry.projected().len(),
            size.width,
            size.height
        );
        Ok(Self {
            theme: config.theme(),
            data,
            config,
            colors,
            geometry,
            scene,
            tracker: PointerTracker::new(),
            highlight: HighlightState::default(),
            inside: false,
            x_format: None,
            y_format: None,
        })
    }

    /// Recompute geometry for a new surface size. The hovered point is forgotten, but a
    /// pointer still over the surface keeps the tooltip shown and the blend mode lifted.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<()> {
        if size.is_empty() {
            return Err(ChartError::setup(format!("{}x{}", size.width, size.height), "surface has zero area"));
        }
        self.geometry = ChartGeometry::new(&self.data, size, &self.config);
        self.apply_tick_formats();
        self.scene = Scene::build(&self.data, &self.geometry, &self.colors, &self.config);
        self.tracker = PointerTracker::new();
        self.highlight = HighlightState::default();
        if self.inside {
            self.scene.tooltip.show();
            self.scene.set_blend_mode(None);
        }
        Ok(())
    }

    /// Label x ticks with `format` of their value. Survives `resize`.
    pub fn set_x_tick_format(&mut self, format: impl Fn(&XValue) -> String + 'static) {
        self.x_format = Some(Box::new(format));
        self.apply_tick_formats();
    }

    /// Label y ticks with `format` of their value (always `XValue::Number`). Survives `resize`.
    pub fn set_y_tick_format(&mut self, format: impl Fn(&XValue) -> String + 'static) {
        self.y_format = Some(Box::new(format));
        self.apply_tick_formats();
    }

    fn apply_tick_formats(&mut self) {
        if let Some(format) = &self.x_format {
            self.geometry.x_axis.relabel(format);
            self.scene.x_axis = self.geometry.x_axis.clone();
        }
        if let Some(format) = &self.y_format {
            self.geometry.y_axis.relabel(format);
            self.scene.y_axis = self.geometry.y_axis.clone();
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> PointerOutcome {
        match event {
            PointerEvent::Enter => self.pointer_entered(),
            PointerEvent::Move { x, y } => self.pointer_moved(Point::new(x, y)),
            PointerEvent::Leave => self.pointer_left(),
        }
    }

    /// Highlight the series of the point nearest to `pointer` and move the tooltip onto it.
    pub fn pointer_moved(&mut self, pointer: Point) -> PointerOutcome {
        if self.geometry.projected().is_empty() {
            return PointerOutcome::NoPoint;
        }
        let index = match self.tracker.pointer_moved(pointer, self.geometry.projected()) {
            HoverUpdate::NoPoint => return PointerOutcome::NoPoint,
            HoverUpdate::Unchanged => return PointerOutcome::Unchanged,
            HoverUpdate::Changed(index) => index,
        };
        let (Some(point), Some(anchor)) = (self.data.get(index), self.geometry.position(index)) else {
            return PointerOutcome::NoPoint;
        };
        self.highlight = HighlightState::for_point(point);
        self.scene.apply_highlight(&self.highlight, &self.config.style);
        self.scene.tooltip.update(TooltipContent::for_point(point), anchor);
        PointerOutcome::Highlighted(index)
    }

    /// Reveal the tooltip and lift the idle blend mode.
    pub fn pointer_entered(&mut self) -> PointerOutcome {
        self.inside = true;
        self.scene.tooltip.show();
        self.scene.set_blend_mode(None);
        PointerOutcome::Entered
    }

    /// Restore idle styling, hide the tooltip and forget the hovered point.
    pub fn pointer_left(&mut self) -> PointerOutcome {
        self.inside = false;
        self.scene.reset_highlight(&self.config.style, self.config.mix_blend_mode);
        self.scene.tooltip.hide();
        self.tracker.pointer_left();
        self.highlight = HighlightState::default();
        PointerOutcome::Reset
    }

    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        paint_scene(&self.scene, &self.theme, surface);
    }

    /// Render the current state as an SVG document.
    pub fn to_svg(&self) -> String {
        let mut surface = SvgSurface::new(self.geometry.size);
        self.paint(&mut surface);
        surface.finish()
    }

    pub fn data(&self) -> &Dataset { &self.data }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn colors(&self) -> &ColorTable { &self.colors }
    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn highlight(&self) -> &HighlightState { &self.highlight }
    pub fn tracker_state(&self) -> TrackerState { self.tracker.state() }
}
