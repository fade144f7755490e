//! Sequential line reading and indentation depth.

use std::iter::Peekable;
use std::str::Lines;

/// Columns per indentation step. A tab counts as one full step.
pub const INDENT_WIDTH: usize = 4;

/// Indentation depth of a line: leading whitespace width divided by four.
///
/// Blank lines have no depth. `None` orders below every `Some`, so a loop
/// that stops when the depth drops also stops on blank lines and end of input.
pub fn depth(line: &str) -> Option<usize> {
    if line.trim().is_empty() {
        return None;
    }

    let width: usize = line
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
        .sum();

    Some(width / INDENT_WIDTH)
}

/// Split a line into its key and the rest of the line after the first
/// whitespace run. A line with no value yields an empty value.
pub fn split_key_value(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((key, rest)) => (key, rest.trim()),
        None => (trimmed, ""),
    }
}

/// Forward-only reader over source lines with one line of lookahead.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Peekable<Lines<'a>>,
    current: Option<&'a str>,
    line_number: usize,
    exhausted: bool,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            lines: source.lines().peekable(),
            current: None,
            line_number: 0,
            exhausted: false,
        }
    }

    /// Move to the next line and return it. Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<&'a str> {
        if !self.exhausted {
            self.line_number += 1;
        }
        self.current = self.lines.next();
        self.exhausted = self.current.is_none();
        self.current
    }

    /// The line most recently returned by `advance`.
    pub fn current(&self) -> Option<&'a str> {
        self.current
    }

    /// Look at the line after the current one without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.lines.peek().copied()
    }

    /// Depth of the current line (`None` when blank or past the end).
    pub fn current_depth(&self) -> Option<usize> {
        self.current.and_then(depth)
    }

    /// Depth of the lookahead line.
    pub fn peek_depth(&mut self) -> Option<usize> {
        self.peek().and_then(depth)
    }

    /// 1-indexed number of the current line. Past the end this is one more
    /// than the last line, which is where a missing token was expected.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_spaces() {
        assert_eq!(depth("Name"), Some(0));
        assert_eq!(depth("    Name"), Some(1));
        assert_eq!(depth("        Name"), Some(2));
        assert_eq!(depth("       Name"), Some(1));
    }

    #[test]
    fn test_depth_tab_is_four_columns() {
        assert_eq!(depth("\t\tX"), depth("        X"));
        assert_eq!(depth("\t    X"), Some(2));
        assert_eq!(depth("\t  \t  X"), Some(3));
    }

    #[test]
    fn test_blank_depth_is_below_any_depth() {
        assert_eq!(depth(""), None);
        assert_eq!(depth("   \t  "), None);
        assert!(depth("") < depth("X"));
        assert!(depth("  \t") < Some(0));
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(split_key_value("\t\tName \"cloud out small\""), ("Name", "\"cloud out small\""));
        assert_eq!(split_key_value("    EmitRate\t20.000000  "), ("EmitRate", "20.000000"));
        assert_eq!(split_key_value("\tEmitterContents"), ("EmitterContents", ""));
    }

    #[test]
    fn test_cursor_advance_and_peek() {
        let mut cursor = LineCursor::new("a\n\tb\nc");

        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), Some("a"));
        assert_eq!(cursor.line_number(), 1);
        assert_eq!(cursor.peek(), Some("\tb"));
        assert_eq!(cursor.peek_depth(), Some(1));
        assert_eq!(cursor.advance(), Some("\tb"));
        assert_eq!(cursor.current_depth(), Some(1));
        assert_eq!(cursor.advance(), Some("c"));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn test_cursor_end_of_input() {
        let mut cursor = LineCursor::new("only\n");

        cursor.advance();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.line_number(), 2);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.line_number(), 2);
        assert_eq!(cursor.current_depth(), None);
    }

    #[test]
    fn test_cursor_strips_bom_and_crlf() {
        let mut cursor = LineCursor::new("\u{feff}TXT\r\nnext\r\n");

        assert_eq!(cursor.advance(), Some("TXT"));
        assert_eq!(cursor.advance(), Some("next"));
    }
}
