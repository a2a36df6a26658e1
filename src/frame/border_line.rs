//! Top and bottom border lines with embedded titles.

use crate::border::Border;
use crate::config::{TitleRow, Titles};
use crate::style::{Paint, Styler};
use crate::text::visible_width;

/// Cells taken by the corners and titles of one border line.
pub(super) fn title_space(border: &Border, titles: &Titles, row: TitleRow) -> usize {
    let (left, right) = row.corners();
    let titles_width: usize = titles.row(row).iter().map(|t| visible_width(t)).sum();
    border.corner_size(left) + titles_width + border.corner_size(right)
}

/// Split leftover fill around the center title; odd space goes after it.
pub(super) fn split_fill(available: usize) -> (usize, usize) {
    let before = available / 2;
    (before, available - before)
}

/// Append one styled border line of `width` cells to `out`.
///
/// Layout: corner, left title, fill, center title, fill, right title, corner.
pub(super) fn push_border_line(
    out: &mut String,
    border: &Border,
    titles: &Titles,
    row: TitleRow,
    width: usize,
    styler: &Styler,
    paint: Paint,
) {
    let (left_corner, right_corner) = row.corners();
    let [left, center, right] = titles.row(row);
    let available = width.saturating_sub(title_space(border, titles, row));
    let (before, after) = split_fill(available);
    let line = border.line_glyph();

    let corner = |glyph: Option<char>| glyph.map(String::from).unwrap_or_default();

    styler.paint_into(out, &corner(border.corner_glyph(left_corner)), paint);
    styler.paint_into(out, left, paint);
    styler.paint_into(out, &line.to_string().repeat(before), paint);
    styler.paint_into(out, center, paint);
    styler.paint_into(out, &line.to_string().repeat(after), paint);
    styler.paint_into(out, right, paint);
    styler.paint_into(out, &corner(border.corner_glyph(right_corner)), paint);
}
