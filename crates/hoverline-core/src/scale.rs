// File: crates/hoverline-core/src/scale.rs
// Summary: Domain -> pixel scales (linear, log10, time, point) and their tick generators.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::axis::{format_number, format_time, Tick};
use crate::data::XValue;

/// Scale family for the horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XScaleKind {
    #[default]
    Linear,
    Log,
    Time,
    Ordinal,
}

/// Scale family for the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YScaleKind {
    #[default]
    Linear,
    Log,
}

/// Continuous numeric scale mapping `[d0, d1]` onto `[r0, r1]` pixels.
///
/// A zero-width domain maps every value to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ContinuousScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1, log: false, log_min: 0.0, log_max: 0.0 }
    }

    /// Base-10 log scale. Non-positive domain endpoints are replaced by a small epsilon.
    pub fn new_log10(domain: (f64, f64), range: (f32, f32)) -> Self {
        let eps = 1e-12;
        let d0 = if domain.0 <= eps { eps } else { domain.0 };
        let d1 = if domain.1 < d0 { d0 } else { domain.1 };
        Self { d0, d1, r0: range.0, r1: range.1, log: true, log_min: d0.log10(), log_max: d1.log10() }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }

    /// Whether the domain has no width; a narrow but non-empty domain still spreads values.
    pub fn is_degenerate(&self) -> bool {
        let (lo, hi) = if self.log { (self.log_min, self.log_max) } else { (self.d0, self.d1) };
        let span = hi - lo;
        span == 0.0 || !span.is_finite()
    }

    fn midpoint(&self) -> f32 { (self.r0 + self.r1) * 0.5 }

    /// Pixel position of `v`, or `None` when `v` has no position on this scale.
    #[inline]
    pub fn map(&self, v: f64) -> Option<f32> {
        if !v.is_finite() || (self.log && v <= 0.0) {
            return None;
        }
        if self.is_degenerate() {
            return Some(self.midpoint());
        }
        let t = if self.log {
            (v.log10() - self.log_min) / (self.log_max - self.log_min)
        } else {
            (v - self.d0) / (self.d1 - self.d0)
        };
        Some(self.r0 + t as f32 * (self.r1 - self.r0))
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![self.d0];
        }
        if self.log {
            let lo = self.log_min.min(self.log_max).ceil() as i32;
            let hi = self.log_min.max(self.log_max).floor() as i32;
            if hi - lo >= 1 {
                return (lo..=hi).map(|e| 10f64.powi(e)).collect();
            }
        }
        linear_ticks(self.d0.min(self.d1), self.d0.max(self.d1), count)
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let values = self.tick_values(count);
        let step = tick_step(&values);
        values
            .into_iter()
            .filter_map(|v| {
                let position = self.map(v)?;
                Some(Tick { position, label: format_number(v, step), value: XValue::Number(v) })
            })
            .collect()
    }
}

/// Nice tick values in `[start, stop]`, spaced by 1, 2 or 5 times a power of ten.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        // Work with the inverse step to keep small decimals exact.
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start { i1 += 1.0; }
        if i2 / inc > stop { i2 -= 1.0; }
        let n = (i2 - i1) as i64;
        (0..=n.max(-1)).map(|k| (i1 + k as f64) / inc).collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        let n = (i2 - i1) as i64;
        (0..=n.max(-1)).map(|k| (i1 + k as f64) * inc).collect()
    }
}

fn tick_step(values: &[f64]) -> f64 {
    match values {
        [a, b, ..] => (b - a).abs(),
        [a] => a.abs().max(1.0),
        [] => 1.0,
    }
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;
// 1970-01-01 was a Thursday; weeks start on Sunday.
const WEEK_OFFSET: i64 = 3 * DAY;

/// Calendar step used by time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeStep {
    Fixed(i64),
    Months(u32),
    Years(i32),
}

impl TimeStep {
    fn approx_ms(self) -> i64 {
        match self {
            TimeStep::Fixed(ms) => ms,
            TimeStep::Months(n) => n as i64 * MONTH,
            TimeStep::Years(n) => n as i64 * YEAR,
        }
    }
}

const TIME_STEPS: [TimeStep; 19] = [
    TimeStep::Fixed(SECOND),
    TimeStep::Fixed(5 * SECOND),
    TimeStep::Fixed(15 * SECOND),
    TimeStep::Fixed(30 * SECOND),
    TimeStep::Fixed(MINUTE),
    TimeStep::Fixed(5 * MINUTE),
    TimeStep::Fixed(15 * MINUTE),
    TimeStep::Fixed(30 * MINUTE),
    TimeStep::Fixed(HOUR),
    TimeStep::Fixed(3 * HOUR),
    TimeStep::Fixed(6 * HOUR),
    TimeStep::Fixed(12 * HOUR),
    TimeStep::Fixed(DAY),
    TimeStep::Fixed(2 * DAY),
    TimeStep::Fixed(WEEK),
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Years(1),
    TimeStep::Years(2),
];

/// Time scale: linear over epoch milliseconds with calendar-aware ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub inner: ContinuousScale,
}

impl TimeScale {
    pub fn new(domain_ms: (f64, f64), range: (f32, f32)) -> Self {
        Self { inner: ContinuousScale::new_linear(domain_ms, range) }
    }

    pub fn map(&self, ms: f64) -> Option<f32> { self.inner.map(ms) }

    /// Step whose size is closest (in ratio) to the span divided by `count`.
    pub fn step_for(&self, count: usize) -> TimeStep {
        let span = (self.inner.d1 - self.inner.d0).abs();
        let target = span / count.max(1) as f64;
        let best = TIME_STEPS
            .iter()
            .copied()
            .min_by(|a, b| {
                let da = (a.approx_ms() as f64 / target).ln().abs();
                let db = (b.approx_ms() as f64 / target).ln().abs();
                da.total_cmp(&db)
            })
            .unwrap_or(TimeStep::Fixed(DAY));
        if target > 2.0 * YEAR as f64 {
            let years = linear_ticks(0.0, span / YEAR as f64, count);
            let step = tick_step(&years).max(1.0).round() as i32;
            return TimeStep::Years(step);
        }
        best
    }

    pub fn tick_values(&self, count: usize) -> (TimeStep, Vec<i64>) {
        let step = self.step_for(count);
        if self.inner.is_degenerate() {
            return (step, vec![self.inner.d0 as i64]);
        }
        let lo = self.inner.d0.min(self.inner.d1) as i64;
        let hi = self.inner.d0.max(self.inner.d1) as i64;
        let values = match step {
            TimeStep::Fixed(ms) => {
                let offset = if ms == WEEK { WEEK_OFFSET } else { 0 };
                let first = (lo - offset).div_euclid(ms) * ms + offset;
                let first = if first < lo { first + ms } else { first };
                std::iter::successors(Some(first), |t| Some(t + ms)).take_while(|t| *t <= hi).collect()
            }
            TimeStep::Months(n) => calendar_ticks(lo, hi, |y, m| {
                let idx = y * 12 + m as i32 - 1 + n as i32;
                (idx.div_euclid(12), (idx.rem_euclid(12) + 1) as u32)
            }, |_, m| (m - 1) % n == 0),
            TimeStep::Years(n) => calendar_ticks(lo, hi, |y, _| (y + n, 1), |y, m| m == 1 && y.rem_euclid(n) == 0),
        };
        (step, values)
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let (step, values) = self.tick_values(count);
        values
            .into_iter()
            .filter_map(|ms| {
                let position = self.map(ms as f64)?;
                let value = DateTime::<Utc>::from_timestamp_millis(ms).map_or(XValue::Number(ms as f64), XValue::Time);
                Some(Tick { position, label: format_time(ms, step), value })
            })
            .collect()
    }
}

fn month_start_ms(year: i32, month: u32) -> Option<i64> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

/// Walk first-of-month instants from the month containing `lo`, keeping those accepted by `keep`.
fn calendar_ticks(
    lo: i64,
    hi: i64,
    next: impl Fn(i32, u32) -> (i32, u32),
    keep: impl Fn(i32, u32) -> bool,
) -> Vec<i64> {
    let Some(start) = DateTime::<Utc>::from_timestamp_millis(lo) else { return Vec::new() };
    let (mut year, mut month) = (start.year(), start.month());
    // Align the cursor onto an accepted month.
    let mut guard = 0;
    while !keep(year, month) && guard < 240 {
        let idx = year * 12 + month as i32;
        year = idx.div_euclid(12);
        month = (idx.rem_euclid(12) + 1) as u32;
        guard += 1;
    }
    let mut out = Vec::new();
    while let Some(ms) = month_start_ms(year, month) {
        if ms > hi {
            break;
        }
        if ms >= lo {
            out.push(ms);
        }
        (year, month) = next(year, month);
    }
    out
}

/// Ordinal point scale: distinct keys spread evenly across the range, first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct PointScale {
    keys: IndexSet<String>,
    pub r0: f32,
    pub r1: f32,
}

impl PointScale {
    pub fn new(keys: IndexSet<String>, range: (f32, f32)) -> Self {
        Self { keys, r0: range.0, r1: range.1 }
    }

    pub fn keys(&self) -> &IndexSet<String> { &self.keys }

    /// Distance between adjacent keys, zero with fewer than two keys.
    pub fn step(&self) -> f32 {
        if self.keys.len() < 2 { 0.0 } else { (self.r1 - self.r0) / (self.keys.len() - 1) as f32 }
    }

    pub fn map_key(&self, key: &str) -> Option<f32> {
        let i = self.keys.get_index_of(key)?;
        if self.keys.len() == 1 {
            return Some((self.r0 + self.r1) * 0.5);
        }
        Some(self.r0 + i as f32 * self.step())
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let max_labels = count.max(1) * 2;
        let stride = self.keys.len().div_ceil(max_labels).max(1);
        self.keys
            .iter()
            .step_by(stride)
            .filter_map(|k| {
                let position = self.map_key(k)?;
                Some(Tick { position, label: k.clone(), value: XValue::Category(k.clone()) })
            })
            .collect()
    }
}

/// Horizontal scale over heterogeneous x values.
#[derive(Clone, Debug, PartialEq)]
pub enum XScale {
    Continuous(ContinuousScale),
    Time(TimeScale),
    Point(PointScale),
}

impl XScale {
    pub fn map(&self, x: &XValue) -> Option<f32> {
        match self {
            XScale::Continuous(s) => s.map(x.as_f64()?),
            XScale::Time(s) => s.map(x.as_f64()?),
            XScale::Point(s) => s.map_key(&x.ordinal_key()),
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        match self {
            XScale::Continuous(s) => s.ticks(count),
            XScale::Time(s) => s.ticks(count),
            XScale::Point(s) => s.ticks(count),
        }
    }
}

/// Vertical scales are always numeric.
pub type YScale = ContinuousScale;
