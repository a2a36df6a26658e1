//! Frame construction options and their file loaders.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::border::{BorderOption, Corner};
use crate::padding::Padding;
use crate::style::FrameStyle;
use crate::text::Align;

/// Titles embedded in the top and bottom border lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Titles {
    pub top_left: String,
    pub top_center: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_center: String,
    pub bottom_right: String,
}

/// Which border line a title set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRow {
    Top,
    Bottom,
}

impl TitleRow {
    /// Corners that bracket this border line, left then right.
    pub fn corners(self) -> (Corner, Corner) {
        match self {
            Self::Top => (Corner::TopLeft, Corner::TopRight),
            Self::Bottom => (Corner::BottomLeft, Corner::BottomRight),
        }
    }
}

impl Titles {
    pub fn top_left(title: impl Into<String>) -> Self {
        Self {
            top_left: title.into(),
            ..Self::default()
        }
    }

    /// Left, center and right titles of one border line.
    pub fn row(&self, row: TitleRow) -> [&str; 3] {
        match row {
            TitleRow::Top => [&self.top_left, &self.top_center, &self.top_right],
            TitleRow::Bottom => [&self.bottom_left, &self.bottom_center, &self.bottom_right],
        }
    }

    pub fn is_empty(&self) -> bool {
        [TitleRow::Top, TitleRow::Bottom]
            .into_iter()
            .all(|row| self.row(row).iter().all(|title| title.is_empty()))
    }
}

/// Everything that shapes a frame besides its content.
///
/// Deserializes from YAML or JSON with every key optional; unknown keys are
/// rejected so typos do not silently fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameOptions {
    /// Row of the top edge; setting it (or `left`) switches to positioned output.
    /// Rows below screen row 65535 cannot be addressed and are not drawn.
    pub top: Option<u16>,
    /// Column of the left edge; side glyphs past column 65535 are not drawn
    pub left: Option<u16>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub align: Align,
    pub padding: Padding,
    pub title: Titles,
    pub border: BorderOption,
    pub style: FrameStyle,
    /// When false every style is a no-op
    pub enable_color: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            top: None,
            left: None,
            width: None,
            height: None,
            align: Align::default(),
            padding: Padding::default(),
            title: Titles::default(),
            border: BorderOption::default(),
            style: FrameStyle::default(),
            enable_color: true,
        }
    }
}

impl FrameOptions {
    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Load options from a `.json` file, or YAML for any other extension.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read frame config {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let options = if is_json {
            Self::from_json_str(&raw)?
        } else {
            Self::from_yaml_str(&raw)?
        };
        Ok(options)
    }

    pub fn is_positioned(&self) -> bool {
        self.top.is_some() || self.left.is_some()
    }
}
