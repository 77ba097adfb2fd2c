use crate::Position;

/// Read position over the raw source text.
///
/// `pos` is a byte offset into `source` and always sits on a char boundary.
/// `line` starts at 1; `column` counts the characters consumed since the last
/// newline, so it is the 0-based column of the next character.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(source: String) -> Cursor {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn read_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> String {
        let mut result = String::new();

        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }

        result
    }

    /// Consumes `lexeme`, which must be a prefix of the remainder.
    pub fn consume(&mut self, lexeme: &str) {
        for _ in lexeme.chars() {
            self.advance();
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd".to_string());
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 2);

        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_read_while_stops_at_predicate() {
        let mut cursor = Cursor::new("123abc".to_string());
        assert_eq!(cursor.read_while(|ch| ch.is_ascii_digit()), "123");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.remainder(), "abc");
    }

    #[test]
    fn test_multibyte_characters_count_as_one_column() {
        let mut cursor = Cursor::new("né x".to_string());
        cursor.consume("né");
        assert_eq!(cursor.position().column, 2);
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("a".to_string());
        assert!(!cursor.at_eof());
        cursor.advance();
        assert!(cursor.at_eof());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
    }
}
