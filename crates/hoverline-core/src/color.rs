// File: crates/hoverline-core/src/color.rs
// Summary: Static qualitative palette and deterministic label -> color assignment.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub u32);

impl HexColor {
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for HexColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 {
            return Err(ChartError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| ChartError::InvalidColor(s.to_string()))
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Named hue group of the qualitative palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Red,
    Yellow,
    Teal,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// Number of shades every hue carries.
pub const SHADES_PER_HUE: usize = 5;

const RED: [HexColor; SHADES_PER_HUE] =
    [HexColor(0xFF4438), HexColor(0xEC6858), HexColor(0xBB3020), HexColor(0xEF8F8C), HexColor(0x8C1A11)];
const YELLOW: [HexColor; SHADES_PER_HUE] =
    [HexColor(0xFFC629), HexColor(0xF9D961), HexColor(0xE7B33D), HexColor(0xFBE595), HexColor(0xD68E32)];
const TEAL: [HexColor; SHADES_PER_HUE] =
    [HexColor(0x00E8AB), HexColor(0x83FBD4), HexColor(0x5CC99D), HexColor(0xA6FCEC), HexColor(0x439782)];
const CYAN: [HexColor; SHADES_PER_HUE] =
    [HexColor(0x20C4F4), HexColor(0x47DAFF), HexColor(0x0094C7), HexColor(0x8FE8FF), HexColor(0x005D8F)];
const BLUE: [HexColor; SHADES_PER_HUE] =
    [HexColor(0x0D09FF), HexColor(0x5858FF), HexColor(0x0000CC), HexColor(0x9898FF), HexColor(0x000099)];
const PURPLE: [HexColor; SHADES_PER_HUE] =
    [HexColor(0xB020F4), HexColor(0xC04EF6), HexColor(0x8A1AD8), HexColor(0xDB8EF8), HexColor(0x6C12BB)];
const PINK: [HexColor; SHADES_PER_HUE] =
    [HexColor(0xF420DF), HexColor(0xEB56D4), HexColor(0xC128B8), HexColor(0xF095CF), HexColor(0x991E8C)];

impl Hue {
    pub const ALL: [Hue; 7] = [Hue::Red, Hue::Yellow, Hue::Teal, Hue::Cyan, Hue::Blue, Hue::Purple, Hue::Pink];

    pub fn name(self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Yellow => "yellow",
            Hue::Teal => "teal",
            Hue::Cyan => "cyan",
            Hue::Blue => "blue",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
        }
    }

    /// Shades of this hue, most saturated first.
    pub fn shades(self) -> &'static [HexColor] {
        match self {
            Hue::Red => &RED,
            Hue::Yellow => &YELLOW,
            Hue::Teal => &TEAL,
            Hue::Cyan => &CYAN,
            Hue::Blue => &BLUE,
            Hue::Purple => &PURPLE,
            Hue::Pink => &PINK,
        }
    }
}

impl FromStr for Hue {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hue::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownHue(s.to_string()))
    }
}

/// Default hue cycling order.
pub const DEFAULT_HUE_ORDER: [Hue; 7] =
    [Hue::Cyan, Hue::Yellow, Hue::Teal, Hue::Red, Hue::Blue, Hue::Purple, Hue::Pink];

/// True when `color` is one of the palette's shades.
pub fn in_palette(color: HexColor) -> bool {
    Hue::ALL.iter().any(|h| h.shades().contains(&color))
}

/// Color record for one category label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorAssignment {
    pub id: String,
    pub label: String,
    pub color: HexColor,
    /// Reserved selection flag; never set by the assigner.
    pub value: bool,
}

/// Read-only label -> assignment table, in first-seen label order.
pub type ColorTable = IndexMap<String, ColorAssignment>;

/// Maps category labels onto the palette by walking hues first, then shade tiers.
#[derive(Clone, Debug)]
pub struct ColorAssigner {
    hue_order: Vec<Hue>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self { hue_order: DEFAULT_HUE_ORDER.to_vec() }
    }
}

impl ColorAssigner {
    pub fn new() -> Self { Self::default() }

    /// Use a custom hue cycling order. Must name at least one hue.
    pub fn with_hue_order(hue_order: Vec<Hue>) -> Result<Self, ChartError> {
        if hue_order.is_empty() {
            return Err(ChartError::EmptyHueOrder);
        }
        Ok(Self { hue_order })
    }

    pub fn hue_order(&self) -> &[Hue] { &self.hue_order }

    /// Assign a color to every distinct label.
    ///
    /// Labels get shade 0 of each hue in order, then shade 1 of each hue, and so on. As soon
    /// as the current hue has no shade at the current tier the whole cycle restarts at
    /// hue 0 shade 0. A repeated label keeps the record (and `id`) of its first occurrence.
    pub fn assign<I, S>(&self, labels: I) -> ColorTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = ColorTable::new();
        let mut hue_index = 0usize;
        let mut shade_index = 0usize;

        for (i, label) in labels.into_iter().enumerate() {
            let label = label.as_ref();
            if table.contains_key(label) {
                continue;
            }
            if self.hue_order[hue_index].shades().get(shade_index).is_none() {
                hue_index = 0;
                shade_index = 0;
            }
            let color = self.hue_order[hue_index].shades()[shade_index];
            table.insert(
                label.to_string(),
                ColorAssignment { id: i.to_string(), label: label.to_string(), color, value: false },
            );

            hue_index += 1;
            if hue_index > self.hue_order.len() - 1 {
                hue_index = 0;
                shade_index += 1;
            }
        }
        table
    }
}

/// Convenience wrapper over [`ColorAssigner::assign`] with the default hue order.
pub fn qualitative_colors<I, S>(labels: I) -> ColorTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ColorAssigner::default().assign(labels)
}
