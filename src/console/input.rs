//! Line-based console input.

use std::io::{self, BufRead};

/// Reads one line at a time from any buffered source.
#[derive(Debug)]
pub struct InputReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> InputReader<R> {
    /// Wrap a buffered reader.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        let text = self.line.trim_end_matches(['\n', '\r']);
        Ok(Some(text.to_string()))
    }
}

/// Parse a whole line as a signed integer, ignoring surrounding whitespace.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Convert a 1-based id typed by the player into a 0-based index.
#[must_use]
pub fn parse_id(text: &str) -> Option<usize> {
    parse_int(text)
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|n| n.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = InputReader::new(Cursor::new("Red\r\nBrazil\nlast"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("Red"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("Brazil"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_keeps_blank_lines() {
        let mut input = InputReader::new(Cursor::new("\n"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("3 troops"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_parse_id_is_one_based() {
        assert_eq!(parse_id("1"), Some(0));
        assert_eq!(parse_id("5"), Some(4));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("x"), None);
    }
}
