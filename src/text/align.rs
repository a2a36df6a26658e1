//! Horizontal alignment and padding of display lines.

use serde::Deserialize;

use super::visible_width;
use crate::padding::Padding;

/// Horizontal placement of content inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Fill `line` with spaces up to `width` cells. Wider lines are returned as-is.
pub fn align_line(line: &str, width: usize, direction: Align) -> String {
    let fill = width.saturating_sub(visible_width(line));
    if fill == 0 {
        return line.to_string();
    }
    let (before, after) = match direction {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    let mut out = String::with_capacity(line.len() + fill);
    out.push_str(&" ".repeat(before));
    out.push_str(line);
    out.push_str(&" ".repeat(after));
    out
}

pub fn align(lines: &[String], width: usize, direction: Align) -> Vec<String> {
    lines
        .iter()
        .map(|line| align_line(line, width, direction))
        .collect()
}

/// Surround lines already `width` cells wide with padding.
///
/// Blank rows span the padded width so a background color fills them.
pub fn pad(lines: Vec<String>, padding: Padding, width: usize) -> Vec<String> {
    if padding.is_empty() {
        return lines;
    }
    let blank = " ".repeat(padding.left + width + padding.right);
    let left = " ".repeat(padding.left);
    let right = " ".repeat(padding.right);

    let mut out = Vec::with_capacity(lines.len() + padding.vertical());
    out.extend(std::iter::repeat(blank.clone()).take(padding.top));
    out.extend(
        lines
            .into_iter()
            .map(|line| format!("{left}{line}{right}")),
    );
    out.extend(std::iter::repeat(blank).take(padding.bottom));
    out
}
