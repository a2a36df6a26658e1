//! Word wrapping that keeps escape codes intact.

use super::{char_width, segments, visible_width, Segment};

/// Wrap one logical line to `width` cells.
///
/// Breaks at spaces; a space that still fits stays at the end of the broken
/// line, and spaces left over at a break are dropped rather than starting the
/// next line. Words wider than `width` are split by character. Escape codes
/// are zero-width and travel with the text that follows them. An empty line
/// wraps to a single empty line.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 || visible_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut wrapper = Wrapper::new(width);
    for segment in segments(line) {
        match segment {
            Segment::Escape(seq) => wrapper.word.push_str(seq),
            Segment::Char(' ') => wrapper.push_space(),
            Segment::Char(ch) => {
                wrapper.word.push(ch);
                wrapper.word_width += char_width(ch);
            }
        }
    }
    wrapper.finish()
}

struct Wrapper {
    width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
    word: String,
    word_width: usize,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
            word: String::new(),
            word_width: 0,
        }
    }

    fn push_space(&mut self) {
        self.flush_word();
        if self.at_break() {
            return;
        }
        if self.current_width < self.width {
            self.current.push(' ');
            self.current_width += 1;
        } else {
            self.break_line();
        }
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let word_width = std::mem::take(&mut self.word_width);
        if self.current_width + word_width <= self.width {
            self.current.push_str(&word);
            self.current_width += word_width;
        } else if word_width <= self.width {
            self.break_line();
            self.current = word;
            self.current_width = word_width;
        } else {
            self.split_word(&word);
        }
    }

    fn split_word(&mut self, word: &str) {
        for segment in segments(word) {
            match segment {
                Segment::Escape(seq) => self.current.push_str(seq),
                Segment::Char(ch) => {
                    let ch_width = char_width(ch);
                    if self.current_width > 0 && self.current_width + ch_width > self.width {
                        self.break_line();
                    }
                    self.current.push(ch);
                    self.current_width += ch_width;
                }
            }
        }
    }

    /// A line was just broken and nothing visible follows yet.
    fn at_break(&self) -> bool {
        self.current_width == 0 && !self.lines.is_empty()
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_word();
        match self.lines.last_mut() {
            // trailing escape codes (usually a reset) belong to the last line
            Some(last) if self.current_width == 0 => last.push_str(&self.current),
            _ => self.lines.push(self.current),
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap("Hello world!", 12), vec!["Hello world!"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn breaks_at_word_boundaries_keeping_trailing_space() {
        assert_eq!(
            wrap("Drawing a box in terminal emulator", 18),
            vec!["Drawing a box in ", "terminal emulator"]
        );
        assert_eq!(
            wrap("Drawing a box in terminal emulator", 24),
            vec!["Drawing a box in ", "terminal emulator"]
        );
    }

    #[test]
    fn drops_space_that_does_not_fit() {
        assert_eq!(wrap("Hello new world", 6), vec!["Hello ", "new ", "world"]);
        assert_eq!(wrap("abc def", 3), vec!["abc", "def"]);
    }

    #[test]
    fn splits_words_wider_than_width() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("ab cdefgh", 4), vec!["ab c", "defg", "h"]);
    }

    #[test]
    fn wide_glyphs_never_straddle_a_break() {
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn escape_codes_are_preserved_and_zero_width() {
        let lines = wrap("\x1b[31mred words here\x1b[0m", 9);
        assert_eq!(lines, vec!["\x1b[31mred words", "here\x1b[0m"]);
        for line in &lines {
            assert!(visible_width(line) <= 9);
        }
    }

    #[test]
    fn charset_reset_is_zero_width() {
        let line = "ab cd\x1b(B ef";
        let lines = wrap(line, 5);
        assert_eq!(lines, vec!["ab cd\x1b(B", "ef"]);
        assert_eq!(visible_width(&lines[0]), 5);

        let lines = wrap("\x1b(B\x1b[mtput reset words", 10);
        assert_eq!(lines, vec!["\x1b(B\x1b[mtput reset", "words"]);
    }

    #[test]
    fn hyperlink_wraps_as_its_label() {
        let link = "\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\";
        let lines = wrap(&format!("see the {link} page"), 8);
        assert_eq!(lines, vec!["see the ".to_string(), format!("{link} "), "page".to_string()]);
        for line in &lines {
            assert!(visible_width(line) <= 8, "{line:?}");
        }
    }

    #[test]
    fn spaces_at_a_break_do_not_start_a_line() {
        assert_eq!(wrap("ab  cd", 2), vec!["ab", "cd"]);
        assert_eq!(wrap("abc    de", 3), vec!["abc", "de"]);
        assert_eq!(wrap("  ab cd", 4), vec!["  ab", "cd"]);
    }

    #[test]
    fn every_line_fits() {
        let text = "The quick brown fox jumps over the lazy dog again and again";
        for width in 1..20 {
            for line in wrap(text, width) {
                assert!(visible_width(&line) <= width, "{line:?} > {width}");
            }
        }
    }
}
