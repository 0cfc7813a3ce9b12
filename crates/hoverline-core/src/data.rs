// File: crates/hoverline-core/src/data.rs
// Summary: Observation model (x, y, category) and the ordered dataset a chart session reads.
// Notes:
// - Index position inside a `Dataset` is the identity of a point for a whole render session;
//   projected points, markers and the pointer tracker all refer to points by this index.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Horizontal value of an observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Time(DateTime<Utc>),
    Category(String),
}

impl XValue {
    /// Numeric view used by continuous scales. Times map to epoch milliseconds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            XValue::Number(v) => v.is_finite().then_some(*v),
            XValue::Time(t) => Some(t.timestamp_millis() as f64),
            XValue::Category(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Key used by ordinal scales.
    pub fn ordinal_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Number(v) => write!(f, "{v}"),
            XValue::Time(t) => {
                if t.hour() == 0 && t.minute() == 0 && t.second() == 0 {
                    write!(f, "{}", t.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", t.format("%Y-%m-%d %H:%M"))
                }
            }
            XValue::Category(s) => f.write_str(s),
        }
    }
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self { XValue::Number(v) }
}

impl From<DateTime<Utc>> for XValue {
    fn from(t: DateTime<Utc>) -> Self { XValue::Time(t) }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self { XValue::Category(s.to_string()) }
}

/// One observation: x, y and the category label `z` naming its series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    pub z: String,
}

impl DataPoint {
    pub fn new(x: impl Into<XValue>, y: f64, z: impl Into<String>) -> Self {
        Self { x: x.into(), y, z: z.into() }
    }
}

/// Ordered, immutable collection of observations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Build a dataset from arbitrary records through x/y/z accessors.
    pub fn from_records<T, FX, FY, FZ>(records: &[T], x: FX, y: FY, z: FZ) -> Self
    where
        FX: Fn(&T) -> XValue,
        FY: Fn(&T) -> f64,
        FZ: Fn(&T) -> String,
    {
        Self { points: records.iter().map(|r| DataPoint { x: x(r), y: y(r), z: z(r) }).collect() }
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }

    /// Points whose category is listed in `z_domain`; every point when `None`.
    pub fn select<'a>(&'a self, z_domain: Option<&[String]>) -> Selection<'a> {
        let keep = self
            .points
            .iter()
            .map(|p| z_domain.map_or(true, |domain| domain.iter().any(|z| *z == p.z)))
            .collect();
        Selection { data: self, keep }
    }

    /// Distinct category labels in first-seen order.
    pub fn labels(&self) -> IndexSet<&str> {
        self.select(None).labels()
    }

    /// Point indices grouped by category, groups and members in dataset order.
    pub fn groups(&self) -> IndexMap<&str, Vec<usize>> {
        self.select(None).groups()
    }

    /// Min/max of the finite y values.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.select(None).y_extent()
    }

    /// Min/max of the x values that have a numeric view.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.select(None).x_extent()
    }

    /// Distinct ordinal x keys in first-seen order.
    pub fn x_categories(&self) -> IndexSet<String> {
        self.select(None).x_categories()
    }
}

/// A subset of a dataset's points chosen by category. Indices stay dataset indices.
#[derive(Clone, Debug)]
pub struct Selection<'a> {
    data: &'a Dataset,
    keep: Vec<bool>,
}

impl<'a> Selection<'a> {
    pub fn contains(&self, index: usize) -> bool {
        self.keep.get(index).copied().unwrap_or(false)
    }

    /// Selected `(index, point)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a DataPoint)> + '_ {
        self.data.points.iter().enumerate().filter(|(i, _)| self.contains(*i))
    }

    pub fn len(&self) -> usize {
        self.keep.iter().filter(|k| **k).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn labels(&self) -> IndexSet<&'a str> {
        self.iter().map(|(_, p)| p.z.as_str()).collect()
    }

    pub fn groups(&self) -> IndexMap<&'a str, Vec<usize>> {
        let mut groups: IndexMap<&'a str, Vec<usize>> = IndexMap::new();
        for (i, p) in self.iter() {
            groups.entry(p.z.as_str()).or_default().push(i);
        }
        groups
    }

    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.iter().map(|(_, p)| p.y))
    }

    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.iter().filter_map(|(_, p)| p.x.as_f64()))
    }

    pub fn x_categories(&self) -> IndexSet<String> {
        self.iter().map(|(_, p)| p.x.ordinal_key()).collect()
    }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
