use std::iter::FusedIterator;

use super::dialect::Separator;

// ---------------------------------------------------------------------------
// Field tokenizer
// ---------------------------------------------------------------------------

/// Lazy iterator over the raw fields of one line.
///
/// A field ends at the separator, `\n`, `\r` or the end of the line. After
/// each field every following separator and `\r` is skipped, so runs of
/// separators collapse into one boundary: `a,,b` yields `a`, `b`. There is no
/// quoting; a separator inside quotes still splits. Iteration stops at `\n`.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    line: &'a str,
    separator: u8,
    cursor: usize,
}

/// Split `line` into fields using `separator`.
pub fn fields(line: &str, separator: Separator) -> Fields<'_> {
    Fields {
        line,
        separator: separator.byte(),
        cursor: 0,
    }
}

impl<'a> Fields<'a> {
    /// Rewind to the first field of the line.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    fn ends_field(&self, b: u8) -> bool {
        b == self.separator || b == b'\n' || b == b'\r'
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.line.as_bytes();
        match bytes.get(self.cursor) {
            None | Some(b'\n') => return None,
            Some(_) => {}
        }

        let start = self.cursor;
        while let Some(&b) = bytes.get(self.cursor) {
            if self.ends_field(b) {
                break;
            }
            self.cursor += 1;
        }
        // Separators are ASCII, so both ends sit on char boundaries.
        let field = &self.line[start..self.cursor];

        while let Some(&b) = bytes.get(self.cursor) {
            if b != self.separator && b != b'\r' {
                break;
            }
            self.cursor += 1;
        }

        Some(field)
    }
}

impl FusedIterator for Fields<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str, separator: Separator) -> Vec<&str> {
        fields(line, separator).collect()
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(split("a,,b", Separator::Comma), vec!["a", "b"]);
        assert_eq!(split("1  2   3", Separator::Space), vec!["1", "2", "3"]);
    }

    #[test]
    fn trailing_separators_and_carriage_return_are_skipped() {
        assert_eq!(split("1;2;;\r", Separator::Semicolon), vec!["1", "2"]);
        assert_eq!(split("1\t2\r\n", Separator::Tab), vec!["1", "2"]);
    }

    #[test]
    fn leading_separator_yields_one_empty_field() {
        assert_eq!(split(",1,2", Separator::Comma), vec!["", "1", "2"]);
    }

    #[test]
    fn stops_at_newline() {
        assert_eq!(split("1,2\n3,4", Separator::Comma), vec!["1", "2"]);
        assert!(split("", Separator::Comma).is_empty());
        assert!(split("\n", Separator::Comma).is_empty());
    }

    #[test]
    fn quotes_are_not_honoured() {
        assert_eq!(
            split("\"a,b\",c", Separator::Comma),
            vec!["\"a", "b\"", "c"]
        );
    }

    #[test]
    fn other_separators_stay_inside_fields() {
        assert_eq!(split("1,5;2,5", Separator::Semicolon), vec!["1,5", "2,5"]);
    }

    #[test]
    fn restart_rewinds_to_first_field() {
        let mut it = fields("x y z", Separator::Space);
        assert_eq!(it.next(), Some("x"));
        assert_eq!(it.next(), Some("y"));
        it.restart();
        assert_eq!(it.collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(split("Zeit,Größe", Separator::Comma), vec!["Zeit", "Größe"]);
    }
}
