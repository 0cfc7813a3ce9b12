// File: crates/hoverline-demo/src/load.rs
// Summary: CSV loading into a `Dataset` with header lookup and x value detection.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use hoverline_core::{DataPoint, Dataset, XScaleKind, XValue};
use log::{info, warn};

const X_NAMES: [&str; 5] = ["x", "date", "time", "timestamp", "day"];
const Y_NAMES: [&str; 5] = ["y", "value", "sales", "close", "count"];
const Z_NAMES: [&str; 6] = ["z", "series", "label", "category", "store", "name"];

/// Explicit column names; `None` falls back to common header names.
#[derive(Clone, Debug, Default)]
pub struct Columns {
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
}

fn find_column(headers: &[String], explicit: Option<&str>, names: &[&str]) -> Option<usize> {
    match explicit {
        Some(want) => headers.iter().position(|h| h.eq_ignore_ascii_case(want)),
        None => names.iter().find_map(|want| headers.iter().position(|h| h == want)),
    }
}

/// Number, then RFC 3339 timestamp, then `YYYY-MM-DD` date, else a category.
pub fn parse_x(raw: &str) -> XValue {
    let s = raw.trim();
    if let Ok(v) = s.parse::<f64>() {
        return XValue::Number(v);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return XValue::Time(t.with_timezone(&Utc));
    }
    if let Some(t) = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return XValue::Time(t.and_utc());
    }
    XValue::Category(s.to_string())
}

pub fn load_csv(path: &Path, columns: &Columns) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open csv {}", path.display()))?;
    let headers: Vec<String> = rdr.headers().context("read csv headers")?.iter().map(|h| h.trim().to_lowercase()).collect();

    let i_x = find_column(&headers, columns.x.as_deref(), &X_NAMES).context("no x column")?;
    let i_y = find_column(&headers, columns.y.as_deref(), &Y_NAMES).context("no y column")?;
    // without a category column everything is one series
    let i_z = find_column(&headers, columns.z.as_deref(), &Z_NAMES);

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec.context("read csv record")?;
        let y = rec.get(i_y).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(x), Some(y)) = (rec.get(i_x), y) else {
            skipped += 1;
            continue;
        };
        let z = i_z.and_then(|i| rec.get(i)).unwrap_or("series").trim();
        points.push(DataPoint::new(parse_x(x), y, z));
    }
    if skipped > 0 {
        warn!("skipped {skipped} rows without a numeric y value");
    }
    info!("loaded {} points from {}", points.len(), path.display());
    Ok(Dataset::new(points))
}

/// Scale family suggested by the loaded x values.
pub fn infer_x_scale(data: &Dataset) -> XScaleKind {
    let points = data.points();
    if points.iter().any(|p| matches!(p.x, XValue::Category(_))) {
        XScaleKind::Ordinal
    } else if !points.is_empty() && points.iter().all(|p| matches!(p.x, XValue::Time(_))) {
        XScaleKind::Time
    } else {
        XScaleKind::Linear
    }
}
