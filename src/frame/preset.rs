//! Message presets: a thick, padded, colored frame with an icon title.

use crate::border::{BorderKind, BorderOption};
use crate::config::{FrameOptions, Titles};
use crate::padding::Padding;
use crate::style::{Color, FrameStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FramePreset {
    Info,
    Warn,
    Success,
    Error,
}

impl FramePreset {
    pub fn title(self) -> &'static str {
        match self {
            Self::Info => " ℹ INFO ",
            Self::Warn => " ⚠ WARNING ",
            Self::Success => " ✔ OK ",
            Self::Error => " ⨯ ERROR ",
        }
    }

    /// Foreground and background shared by content and border.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Self::Info => (Color::Black, Color::BrightBlue),
            Self::Warn => (Color::Black, Color::BrightYellow),
            Self::Success => (Color::Black, Color::BrightGreen),
            Self::Error => (Color::BrightWhite, Color::Red),
        }
    }

    /// Base options for this preset. Override fields with struct update
    /// syntax: `FrameOptions { width: Some(40), ..preset.options() }`.
    pub fn options(self) -> FrameOptions {
        let (fg, bg) = self.colors();
        FrameOptions {
            title: Titles::top_left(self.title()),
            border: BorderOption::Kind(BorderKind::Thick),
            padding: Padding::uniform(1),
            style: FrameStyle::uniform(fg, bg),
            ..FrameOptions::default()
        }
    }
}
