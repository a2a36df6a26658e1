//! Named colors and the SGR styler applied to frame fragments.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

const RESET: &str = "\x1b[0m";

/// The sixteen ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name; `bright_blue`, `bright-blue` and `BrightBlue` all match.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        let color = match normalized.as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "brightblack" | "grey" | "gray" => Self::BrightBlack,
            "brightred" => Self::BrightRed,
            "brightgreen" => Self::BrightGreen,
            "brightyellow" => Self::BrightYellow,
            "brightblue" => Self::BrightBlue,
            "brightmagenta" => Self::BrightMagenta,
            "brightcyan" => Self::BrightCyan,
            "brightwhite" => Self::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// SGR parameter for this color as a foreground.
    pub fn fg_code(self) -> u8 {
        let (base, offset) = self.parts();
        base + offset
    }

    /// SGR parameter for this color as a background.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    fn parts(self) -> (u8, u8) {
        match self {
            Self::Black => (30, 0),
            Self::Red => (30, 1),
            Self::Green => (30, 2),
            Self::Yellow => (30, 3),
            Self::Blue => (30, 4),
            Self::Magenta => (30, 5),
            Self::Cyan => (30, 6),
            Self::White => (30, 7),
            Self::BrightBlack => (90, 0),
            Self::BrightRed => (90, 1),
            Self::BrightGreen => (90, 2),
            Self::BrightYellow => (90, 3),
            Self::BrightBlue => (90, 4),
            Self::BrightMagenta => (90, 5),
            Self::BrightCyan => (90, 6),
            Self::BrightWhite => (90, 7),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_name(input).ok_or_else(|| format!("unknown color `{input}`"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A foreground/background pair; either side may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Paint {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Paint {
    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { fg, bg }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// Content colors plus an independent pair for the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub border: Paint,
}

impl FrameStyle {
    /// Same colors for content and border.
    pub const fn uniform(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            border: Paint::new(Some(fg), Some(bg)),
        }
    }

    pub fn content(&self) -> Paint {
        Paint::new(self.fg, self.bg)
    }
}

/// Wraps text in SGR sequences. A disabled styler passes text through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Styler {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, paint: Paint) -> String {
        let mut out = String::with_capacity(text.len() + 16);
        self.paint_into(&mut out, text, paint);
        out
    }

    /// Append `bg(fg(text))` to `out`; empty text is never wrapped.
    pub fn paint_into(&self, out: &mut String, text: &str, paint: Paint) {
        if !self.enabled || text.is_empty() || paint.is_plain() {
            out.push_str(text);
            return;
        }
        if let Some(bg) = paint.bg {
            out.push_str(&format!("\x1b[{}m", bg.bg_code()));
        }
        if let Some(fg) = paint.fg {
            out.push_str(&format!("\x1b[{}m", fg.fg_code()));
        }
        out.push_str(text);
        if paint.fg.is_some() {
            out.push_str(RESET);
        }
        if paint.bg.is_some() {
            out.push_str(RESET);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_codes() {
        assert_eq!(Color::Red.fg_code(), 31);
        assert_eq!(Color::Blue.bg_code(), 44);
        assert_eq!(Color::BrightYellow.fg_code(), 93);
        assert_eq!(Color::BrightBlue.bg_code(), 104);
    }

    #[test]
    fn names_are_forgiving() {
        assert_eq!(Color::from_name("bright_yellow"), Some(Color::BrightYellow));
        assert_eq!(Color::from_name("bright-yellow"), Some(Color::BrightYellow));
        assert_eq!(Color::from_name("BrightYellow"), Some(Color::BrightYellow));
        assert_eq!(Color::from_name("purple"), None);
    }

    #[test]
    fn paints_background_outside_foreground() {
        let styler = Styler::default();
        let paint = Paint::new(Some(Color::BrightYellow), Some(Color::Blue));
        assert_eq!(
            styler.paint("╔", paint),
            "\x1b[44m\x1b[93m╔\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn single_layer_has_single_reset() {
        let styler = Styler::default();
        assert_eq!(
            styler.paint("hi", Paint::new(Some(Color::Green), None)),
            "\x1b[32mhi\x1b[0m"
        );
    }

    #[test]
    fn empty_text_and_plain_paint_pass_through() {
        let styler = Styler::default();
        let paint = Paint::new(Some(Color::Red), None);
        assert_eq!(styler.paint("", paint), "");
        assert_eq!(styler.paint("x", Paint::default()), "x");
    }

    #[test]
    fn disabled_styler_is_identity() {
        let styler = Styler::new(false);
        let paint = Paint::new(Some(Color::Red), Some(Color::White));
        assert_eq!(styler.paint("text", paint), "text");
        assert!(!styler.is_enabled());
    }

    #[test]
    fn frame_style_deserializes_nested_border() {
        let style: FrameStyle =
            serde_json::from_str(r#"{"fg": "bright_yellow", "bg": "blue", "border": {"fg": "red"}}"#)
                .expect("style");
        assert_eq!(style.content(), Paint::new(Some(Color::BrightYellow), Some(Color::Blue)));
        assert_eq!(style.border, Paint::new(Some(Color::Red), None));
        assert!(serde_json::from_str::<FrameStyle>(r#"{"fg": "purple"}"#).is_err());
    }
}
