/// Symbolic name of a glyph slot; the discriminant indexes [`GlyphTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    CornerBottomRight = 0,
    CornerTopRight = 1,
    CornerTopLeft = 2,
    CornerBottomLeft = 3,
    DividerLeft = 4,
    DividerUp = 5,
    DividerDown = 6,
    DividerRight = 7,
    Line = 8,
    Pipe = 9,
    Cross = 10,
}

pub const GLYPH_COUNT: usize = 11;

impl GlyphRole {
    pub const ALL: [GlyphRole; GLYPH_COUNT] = [
        GlyphRole::CornerBottomRight,
        GlyphRole::CornerTopRight,
        GlyphRole::CornerTopLeft,
        GlyphRole::CornerBottomLeft,
        GlyphRole::DividerLeft,
        GlyphRole::DividerUp,
        GlyphRole::DividerDown,
        GlyphRole::DividerRight,
        GlyphRole::Line,
        GlyphRole::Pipe,
        GlyphRole::Cross,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CornerBottomRight => "corner_bottom_right",
            Self::CornerTopRight => "corner_top_right",
            Self::CornerTopLeft => "corner_top_left",
            Self::CornerBottomLeft => "corner_bottom_left",
            Self::DividerLeft => "divider_left",
            Self::DividerUp => "divider_up",
            Self::DividerDown => "divider_down",
            Self::DividerRight => "divider_right",
            Self::Line => "line",
            Self::Pipe => "pipe",
            Self::Cross => "cross",
        }
    }

    /// Parse a role name; `-` and `_` are interchangeable.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|role| role.name() == normalized)
    }
}

/// The eleven glyphs of one border type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable([char; GLYPH_COUNT]);

impl GlyphTable {
    pub const fn glyph(&self, role: GlyphRole) -> char {
        self.0[role as usize]
    }
}

pub const ASCII_GLYPHS: GlyphTable =
    GlyphTable(['+', '+', '+', '+', '+', '+', '+', '+', '-', '|', '+']);

pub const LIGHT_GLYPHS: GlyphTable =
    GlyphTable(['┘', '┐', '┌', '└', '┤', '┴', '┬', '├', '─', '│', '┼']);

pub const THICK_GLYPHS: GlyphTable =
    GlyphTable(['╝', '╗', '╔', '╚', '╣', '╩', '╦', '╠', '═', '║', '╬']);

pub const ROUND_GLYPHS: GlyphTable =
    GlyphTable(['╯', '╮', '╭', '╰', '┤', '┴', '┬', '├', '─', '│', '┼']);
