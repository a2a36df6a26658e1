//! Escape-aware text measurement and the wrap/align/pad helpers built on it.
//!
//! Every place that needs the on-screen width of a string goes through
//! [`visible_width`], so embedded SGR codes never count as columns.

mod align;
mod wrap;

pub use align::{align, align_line, pad, Align};
pub use wrap::wrap;

use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

const ESC: char = '\x1b';

/// Remove escape sequences, keeping only printable text.
pub fn strip_style(text: &str) -> String {
    if !text.contains(ESC) {
        return text.to_string();
    }
    strip_ansi_escapes::strip_str(text)
}

/// Terminal cell width of `text`, ignoring escape sequences.
///
/// Measured per printed character, the same way [`wrap`] measures, so a
/// line that wrap considers full is exactly `width` cells here too.
pub fn visible_width(text: &str) -> usize {
    if !text.contains(ESC) {
        return text.chars().map(char_width).sum();
    }
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Char(ch) => char_width(ch),
            Segment::Escape(_) => 0,
        })
        .sum()
}

pub(crate) fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// A piece of styled text: a run of escape or control bytes, or one
/// printed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Escape(&'a str),
    Char(char),
}

/// Records whether the last byte fed to the parser printed a character.
#[derive(Default)]
struct PrintCapture {
    printed: Option<char>,
}

impl Perform for PrintCapture {
    fn print(&mut self, c: char) {
        self.printed = Some(c);
    }
}

/// Split `text` into printed characters and the escape runs between them.
///
/// Uses the same vte state machine as [`strip_style`], so anything stripped
/// there is a zero-width [`Segment::Escape`] here. Adjacent sequences share
/// one segment; an unterminated sequence runs to the end of the text.
pub(crate) fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut parser = Parser::new();
    let mut capture = PrintCapture::default();
    let mut out = Vec::with_capacity(text.len());
    let mut escape_start: Option<usize> = None;
    let mut buf = [0u8; 4];

    for (idx, ch) in text.char_indices() {
        capture.printed = None;
        parser.advance(&mut capture, ch.encode_utf8(&mut buf).as_bytes());
        match capture.printed {
            Some(printed) => {
                if let Some(start) = escape_start.take() {
                    out.push(Segment::Escape(&text[start..idx]));
                }
                out.push(Segment::Char(printed));
            }
            None => {
                escape_start.get_or_insert(idx);
            }
        }
    }
    if let Some(start) = escape_start {
        out.push(Segment::Escape(&text[start..]));
    }
    out
}
