//! Dimension inference and content formatting.

use tracing::trace;

use crate::border::Border;
use crate::config::{TitleRow, Titles};
use crate::padding::Padding;
use crate::text::{align, pad, visible_width, wrap, Align};

use super::border_line::title_space;

pub(super) const NEWLINE: &str = "\n";

/// Line break style of the content: the first `\r\n`, `\r` or `\n` found.
pub(super) fn detect_separator(text: &str) -> &'static str {
    match text.find(|c: char| c == '\r' || c == '\n') {
        Some(idx) if text[idx..].starts_with("\r\n") => "\r\n",
        Some(idx) if text[idx..].starts_with('\r') => "\r",
        _ => NEWLINE,
    }
}

/// Split on `separator`, dropping trailing empty lines.
pub(super) fn split_lines<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut lines: Vec<&str> = text.split(separator).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Widest content line in cells; an empty frame still reserves one column.
fn raw_content_width(lines: &[&str]) -> usize {
    lines
        .iter()
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(1)
}

/// Width the frame needs to hold its content untouched.
pub(super) fn natural_width(lines: &[&str], border: &Border, padding: Padding) -> usize {
    border.horizontal_size() + padding.horizontal() + raw_content_width(lines)
}

/// Final frame width: the explicit or natural width, grown to fit titles.
pub(super) fn resolve_width(
    explicit: Option<usize>,
    natural: usize,
    border: &Border,
    titles: &Titles,
) -> usize {
    let requested = explicit.unwrap_or(natural);
    requested
        .max(title_space(border, titles, TitleRow::Top))
        .max(title_space(border, titles, TitleRow::Bottom))
}

/// Wrap, align and pad every content line to `content_width`.
pub(super) fn format_content(
    lines: &[&str],
    content_width: usize,
    direction: Align,
    padding: Padding,
) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }
    let mut formatted = Vec::with_capacity(lines.len());
    for line in lines {
        let wrapped = wrap(line, content_width);
        formatted.extend(align(&wrapped, content_width, direction));
    }
    let padded = pad(formatted, padding, content_width);
    trace!(lines = padded.len(), content_width, "formatted frame content");
    padded
}
