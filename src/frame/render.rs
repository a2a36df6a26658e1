//! Streamed and cursor-addressed output.

use crossterm::cursor::MoveTo;
use crossterm::Command;
use tracing::debug;

use crate::border::Edge;
use crate::config::TitleRow;
use crate::text::visible_width;

use super::border_line::push_border_line;
use super::Frame;

/// Append an absolute cursor move to (`col`, `row`), both 0-based.
///
/// Returns false, writing nothing, when the cell is past the last
/// addressable row or column.
fn push_move_to(out: &mut String, col: usize, row: usize) -> bool {
    let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
        return false;
    };
    // Writing into a String cannot fail.
    let _ = MoveTo(col, row).write_ansi(out);
    true
}

/// Whether part of a frame at (`col`, `row`) of this size cannot be addressed.
fn exceeds_screen(col: usize, row: usize, width: usize, height: usize) -> bool {
    let limit = usize::from(u16::MAX);
    (col + width).saturating_sub(1) > limit || (row + height).saturating_sub(1) > limit
}

impl Frame {
    /// Render the frame.
    ///
    /// Streamed frames end every row, the last one included, with the
    /// content's line break. Positioned frames emit no line breaks; each row
    /// and each side glyph is preceded by its own cursor move instead.
    ///
    /// Trailing filler spaces are emitted only when the content is styled or
    /// the frame is positioned.
    ///
    /// Fragments of a positioned frame that fall past row or column 65535
    /// are left out instead of being drawn over the last addressable cell.
    pub fn render(&self) -> String {
        let positioned = self.is_positioned();
        let fill_rows = positioned || self.has_content_style();
        let origin_col = usize::from(self.left.unwrap_or(0));
        let origin_row = usize::from(self.top.unwrap_or(0));
        let border = &self.border;
        let border_paint = self.style.border;
        let content_paint = self.style.content();
        let top_size = border.edge_size(Edge::Top);
        let bottom_size = border.edge_size(Edge::Bottom);
        let pipe = border.pipe_glyph().to_string();

        if positioned && exceeds_screen(origin_col, origin_row, self.width, self.height) {
            debug!(
                top = origin_row,
                left = origin_col,
                width = self.width,
                height = self.height,
                "frame extends past the addressable screen; clipping"
            );
        }

        let mut out = String::with_capacity(self.height * (self.width * 4 + 16));
        let end_row = |out: &mut String| {
            if !positioned {
                out.push_str(self.separator);
            }
        };

        if border.has_edge(Edge::Top)
            && (!positioned || push_move_to(&mut out, origin_col, origin_row))
        {
            self.push_border(&mut out, TitleRow::Top);
            end_row(&mut out);
        }

        let rows = self.height.saturating_sub(top_size + bottom_size);
        for idx in 0..rows {
            let row = origin_row + top_size + idx;
            if positioned && !push_move_to(&mut out, origin_col, row) {
                continue;
            }
            if border.has_edge(Edge::Left) {
                self.styler.paint_into(&mut out, &pipe, border_paint);
            }

            let mut filler = self.width.saturating_sub(border.horizontal_size());
            if let Some(line) = self.lines.get(idx) {
                self.styler.paint_into(&mut out, line, content_paint);
                filler = filler.saturating_sub(visible_width(line));
            }
            if fill_rows {
                self.styler
                    .paint_into(&mut out, &" ".repeat(filler), content_paint);
            }

            let right_col = origin_col + self.width.saturating_sub(border.edge_size(Edge::Right));
            if border.has_edge(Edge::Right) && (!positioned || push_move_to(&mut out, right_col, row))
            {
                self.styler.paint_into(&mut out, &pipe, border_paint);
            }
            end_row(&mut out);
        }

        let bottom_row = origin_row + self.height.saturating_sub(bottom_size);
        if border.has_edge(Edge::Bottom)
            && (!positioned || push_move_to(&mut out, origin_col, bottom_row))
        {
            self.push_border(&mut out, TitleRow::Bottom);
            end_row(&mut out);
        }

        out
    }

    fn push_border(&self, out: &mut String, row: TitleRow) {
        push_border_line(
            out,
            &self.border,
            &self.title,
            row,
            self.width,
            &self.styler,
            self.style.border,
        );
    }
}
