//! Bordered text frames.
//!
//! A [`Frame`] resolves its geometry and formats its content once, at
//! construction. Rendering is a pure function of that state, so a frame can
//! be rendered any number of times, from any thread, with identical output.

mod border_line;
mod layout;
mod preset;
mod render;

use tracing::debug;

use crate::border::Border;
use crate::config::{FrameOptions, Titles};
use crate::style::{FrameStyle, Styler};
use crate::text::Align;

pub use preset::FramePreset;

use layout::{detect_separator, format_content, natural_width, resolve_width, split_lines, NEWLINE};

/// A frame ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    top: Option<u16>,
    left: Option<u16>,
    width: usize,
    height: usize,
    content_width: usize,
    content_height: usize,
    align: Align,
    title: Titles,
    border: Border,
    style: FrameStyle,
    styler: Styler,
    separator: &'static str,
    lines: Vec<String>,
}

impl Frame {
    /// Frame one or more content strings; several strings become several lines.
    pub fn new<S: AsRef<str>>(content: &[S], options: FrameOptions) -> Self {
        let text = match content {
            [] => String::new(),
            [single] => single.as_ref().to_string(),
            many => many
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(NEWLINE),
        };
        Self::build(&text, options)
    }

    /// Frame the string produced by `content`.
    pub fn with_content<F>(options: FrameOptions, content: F) -> Self
    where
        F: FnOnce() -> String,
    {
        Self::build(&content(), options)
    }

    /// Frame content with one of the message presets.
    pub fn preset<S: AsRef<str>>(preset: FramePreset, content: &[S]) -> Self {
        Self::new(content, preset.options())
    }

    fn build(text: &str, options: FrameOptions) -> Self {
        let border = Border::resolve(&options.border);
        let padding = options.padding;
        let separator = detect_separator(text);
        let raw_lines = split_lines(text, separator);

        let natural = natural_width(&raw_lines, &border, padding);
        let width = resolve_width(options.width, natural, &border, &options.title);
        let content_width = width
            .saturating_sub(border.horizontal_size())
            .saturating_sub(padding.horizontal());

        let lines = format_content(&raw_lines, content_width, options.align, padding);
        let height = options
            .height
            .unwrap_or(border.vertical_size() + lines.len());
        let content_height = height
            .saturating_sub(border.vertical_size())
            .saturating_sub(padding.vertical());

        debug!(
            width,
            height,
            content_width,
            content_height,
            positioned = options.is_positioned(),
            "resolved frame geometry"
        );

        Self {
            top: options.top,
            left: options.left,
            width,
            height,
            content_width,
            content_height,
            align: options.align,
            title: options.title,
            border,
            style: options.style,
            styler: Styler::new(options.enable_color),
            separator,
            lines,
        }
    }

    pub fn top(&self) -> Option<u16> {
        self.top
    }

    pub fn left(&self) -> Option<u16> {
        self.left
    }

    /// Total width including border and padding.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height including border and padding.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn content_width(&self) -> usize {
        self.content_width
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn title(&self) -> &Titles {
        &self.title
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    /// Formatted display lines (wrapped, aligned and padded).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line break used between rows in streamed output.
    pub fn separator(&self) -> &str {
        self.separator
    }

    /// Whether output is cursor-addressed rather than newline-joined.
    pub fn is_positioned(&self) -> bool {
        self.top.is_some() || self.left.is_some()
    }

    pub fn has_content_style(&self) -> bool {
        !self.style.content().is_plain()
    }
}
