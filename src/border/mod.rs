//! Border glyph tables and edge/corner configuration.
//!
//! A border option is either a bare type tag (`"thick"`) or a structured
//! configuration that toggles edges and swaps corner glyphs. Both resolve
//! into a [`Border`] whose glyphs are fixed at construction.

mod glyphs;

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FrameError;

pub use glyphs::{GlyphRole, GlyphTable, ASCII_GLYPHS, LIGHT_GLYPHS, ROUND_GLYPHS, THICK_GLYPHS};

/// Available border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BorderKind {
    /// `+`, `-` and `|` only
    Ascii,
    /// Single box-drawing lines
    #[default]
    Light,
    /// Double box-drawing lines
    Thick,
    /// Light lines with rounded corners
    Round,
}

impl BorderKind {
    /// Parse a border type tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ascii" => Some(Self::Ascii),
            "light" => Some(Self::Light),
            "thick" => Some(Self::Thick),
            "round" => Some(Self::Round),
            _ => None,
        }
    }

    pub fn glyphs(self) -> &'static GlyphTable {
        match self {
            Self::Ascii => &ASCII_GLYPHS,
            Self::Light => &LIGHT_GLYPHS,
            Self::Thick => &THICK_GLYPHS,
            Self::Round => &ROUND_GLYPHS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Right, Edge::Bottom];

    fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }

    /// Glyph used when the corner is simply switched on.
    pub fn default_role(self) -> GlyphRole {
        match self {
            Self::TopLeft => GlyphRole::CornerTopLeft,
            Self::TopRight => GlyphRole::CornerTopRight,
            Self::BottomLeft => GlyphRole::CornerBottomLeft,
            Self::BottomRight => GlyphRole::CornerBottomRight,
        }
    }

    /// The two edges meeting at this corner.
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Self::TopLeft => (Edge::Top, Edge::Left),
            Self::TopRight => (Edge::Top, Edge::Right),
            Self::BottomLeft => (Edge::Bottom, Edge::Left),
            Self::BottomRight => (Edge::Bottom, Edge::Right),
        }
    }
}

/// Value of a single structured border key.
///
/// Edges only care whether they are enabled; corners also accept a glyph
/// role so a divider can stand in for the corner glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSetting {
    Toggle(bool),
    Role(GlyphRole),
}

impl Default for BorderSetting {
    fn default() -> Self {
        Self::Toggle(true)
    }
}

impl BorderSetting {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Toggle(false))
    }

    fn parse(key: &str, value: &Value) -> Result<Self, FrameError> {
        match value {
            Value::Bool(flag) => Ok(Self::Toggle(*flag)),
            Value::String(name) => GlyphRole::from_name(name)
                .map(Self::Role)
                .ok_or_else(|| FrameError::invalid_border_entry(key, value.to_string())),
            other => Err(FrameError::invalid_border_entry(key, other.to_string())),
        }
    }
}

impl From<bool> for BorderSetting {
    fn from(flag: bool) -> Self {
        Self::Toggle(flag)
    }
}

impl From<GlyphRole> for BorderSetting {
    fn from(role: GlyphRole) -> Self {
        Self::Role(role)
    }
}

/// Structured border configuration. Every edge and corner defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderConfig {
    pub kind: BorderKind,
    pub top: BorderSetting,
    pub left: BorderSetting,
    pub right: BorderSetting,
    pub bottom: BorderSetting,
    pub top_left: BorderSetting,
    pub top_right: BorderSetting,
    pub bottom_left: BorderSetting,
    pub bottom_right: BorderSetting,
}

impl BorderConfig {
    pub fn new(kind: BorderKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_edge(mut self, edge: Edge, enabled: bool) -> Self {
        *self.edge_mut(edge) = BorderSetting::Toggle(enabled);
        self
    }

    pub fn with_corner(mut self, corner: Corner, setting: impl Into<BorderSetting>) -> Self {
        *self.corner_mut(corner) = setting.into();
        self
    }

    pub fn edge(&self, edge: Edge) -> BorderSetting {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn corner(&self, corner: Corner) -> BorderSetting {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut BorderSetting {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
        }
    }

    fn corner_mut(&mut self, corner: Corner) -> &mut BorderSetting {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }

    fn from_map(map: &serde_json::Map<String, Value>) -> Result<Self, FrameError> {
        let mut config = Self::default();
        for (key, value) in map {
            if key == "type" {
                config.kind = value
                    .as_str()
                    .and_then(BorderKind::from_name)
                    .ok_or_else(|| FrameError::invalid_border_entry(key, value.to_string()))?;
            } else if let Some(edge) = Edge::ALL.into_iter().find(|edge| edge.key() == key.as_str()) {
                *config.edge_mut(edge) = BorderSetting::parse(key, value)?;
            } else if let Some(corner) = Corner::ALL.into_iter().find(|c| c.key() == key.as_str()) {
                *config.corner_mut(corner) = BorderSetting::parse(key, value)?;
            } else {
                return Err(FrameError::invalid_border_entry(key, value.to_string()));
            }
        }
        Ok(config)
    }
}

/// User-facing border option: a type tag or a structured configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderOption {
    Kind(BorderKind),
    Custom(BorderConfig),
}

impl Default for BorderOption {
    fn default() -> Self {
        Self::Kind(BorderKind::Light)
    }
}

impl BorderOption {
    /// Validate a loosely typed border value (from a config file or CLI).
    pub fn parse(value: &Value) -> Result<Self, FrameError> {
        match value {
            Value::String(tag) => BorderKind::from_name(tag)
                .map(Self::Kind)
                .ok_or_else(|| FrameError::invalid_border(tag.as_str())),
            Value::Object(map) => BorderConfig::from_map(map).map(Self::Custom),
            other => Err(FrameError::invalid_border(other.to_string())),
        }
    }

    /// Expand a bare tag into a structured configuration.
    pub fn into_config(self) -> BorderConfig {
        match self {
            Self::Kind(kind) => BorderConfig::new(kind),
            Self::Custom(config) => config,
        }
    }
}

impl From<BorderKind> for BorderOption {
    fn from(kind: BorderKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<BorderConfig> for BorderOption {
    fn from(config: BorderConfig) -> Self {
        Self::Custom(config)
    }
}

/// Accepts a bare tag (`thick`) or an inline JSON object (`{"top": false}`).
impl FromStr for BorderOption {
    type Err = FrameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.starts_with('{') {
            let value: Value = serde_json::from_str(trimmed)
                .map_err(|_| FrameError::invalid_border(trimmed))?;
            return Self::parse(&value);
        }
        Self::parse(&Value::String(trimmed.to_string()))
    }
}

impl<'de> Deserialize<'de> for BorderOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// A border resolved against its glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    kind: BorderKind,
    edges: [bool; 4],
    corners: [Option<char>; 4],
}

impl Default for Border {
    fn default() -> Self {
        Self::resolve(&BorderOption::default())
    }
}

impl Border {
    pub fn resolve(option: &BorderOption) -> Self {
        let config = option.into_config();
        let glyphs = config.kind.glyphs();
        let edges = Edge::ALL.map(|edge| config.edge(edge).is_enabled());
        let corners = Corner::ALL.map(|corner| {
            let (a, b) = corner.edges();
            let visible = edges[edge_index(a)] && edges[edge_index(b)];
            match config.corner(corner) {
                _ if !visible => None,
                BorderSetting::Toggle(false) => None,
                BorderSetting::Toggle(true) => Some(glyphs.glyph(corner.default_role())),
                BorderSetting::Role(role) => Some(glyphs.glyph(role)),
            }
        });
        Self {
            kind: config.kind,
            edges,
            corners,
        }
    }

    /// Validate and resolve in one step.
    pub fn parse(value: &Value) -> Result<Self, FrameError> {
        BorderOption::parse(value).map(|option| Self::resolve(&option))
    }

    pub fn kind(&self) -> BorderKind {
        self.kind
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges[edge_index(edge)]
    }

    pub fn edge_size(&self, edge: Edge) -> usize {
        usize::from(self.has_edge(edge))
    }

    /// Combined width of the left and right edges.
    pub fn horizontal_size(&self) -> usize {
        self.edge_size(Edge::Left) + self.edge_size(Edge::Right)
    }

    /// Combined height of the top and bottom edges.
    pub fn vertical_size(&self) -> usize {
        self.edge_size(Edge::Top) + self.edge_size(Edge::Bottom)
    }

    /// `None` unless the corner and both adjacent edges are enabled.
    pub fn corner_glyph(&self, corner: Corner) -> Option<char> {
        self.corners[corner_index(corner)]
    }

    pub fn corner_size(&self, corner: Corner) -> usize {
        usize::from(self.corner_glyph(corner).is_some())
    }

    pub fn line_glyph(&self) -> char {
        self.kind.glyphs().glyph(GlyphRole::Line)
    }

    pub fn pipe_glyph(&self) -> char {
        self.kind.glyphs().glyph(GlyphRole::Pipe)
    }
}

fn edge_index(edge: Edge) -> usize {
    match edge {
        Edge::Top => 0,
        Edge::Left => 1,
        Edge::Right => 2,
        Edge::Bottom => 3,
    }
}

fn corner_index(corner: Corner) -> usize {
    match corner {
        Corner::TopLeft => 0,
        Corner::TopRight => 1,
        Corner::BottomLeft => 2,
        Corner::BottomRight => 3,
    }
}
