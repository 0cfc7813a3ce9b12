// File: crates/hoverline-core/src/error.rs
// Summary: Error taxonomy for chart setup and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The drawable surface (or its rendering context) could not be obtained.
    /// Fatal to chart construction.
    #[error("unable to obtain drawing surface `{surface}`: {reason}")]
    Setup { surface: String, reason: String },

    #[error("hue order must name at least one hue")]
    EmptyHueOrder,

    #[error("unknown hue `{0}`")]
    UnknownHue(String),

    #[error("invalid color `{0}`, expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid x tick format `{0}`")]
    InvalidTickFormat(String),

    #[error("invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub fn setup(surface: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Setup { surface: surface.into(), reason: reason.into() }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
