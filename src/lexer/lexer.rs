use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, LexError},
    Position,
};

use super::{
    cursor::Cursor,
    tokens::{Token, OPERATOR_LOOKUP, PUNCTUATION_LOOKUP, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&str, Position) -> Result<Token, LexError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored, so a match is always at the cursor. Multi-character lexemes only;
    // operators and punctuation are single characters and go through the lookups.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\p{L}[\p{L}0-9]*").unwrap(), handler: symbol_handler },
        // A second '.' is left behind and must start the next token on its own.
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(), handler: number_handler },
    ];
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn symbol_handler(lexeme: &str, _start: Position) -> Result<Token, LexError> {
    if let Some(keyword) = RESERVED_LOOKUP.get(lexeme) {
        Ok(Token::Keyword(*keyword))
    } else {
        Ok(Token::Identifier(lexeme.to_string()))
    }
}

fn number_handler(lexeme: &str, start: Position) -> Result<Token, LexError> {
    let invalid = || LexError::InvalidNumber {
        lexeme: lexeme.to_string(),
        line: start.line,
        column: start.column,
    };

    if lexeme.contains('.') {
        lexeme
            .parse::<f64>()
            .map(Token::DoubleLiteral)
            .map_err(|_| invalid())
    } else {
        lexeme
            .parse::<i32>()
            .map(Token::IntLiteral)
            .map_err(|_| invalid())
    }
}

/// Lazy tokenizer with a single token of lookahead.
///
/// Tokens are produced on demand by [`Scanner::peek`] and [`Scanner::next_token`];
/// end of input is `Ok(None)`, never an error.
#[derive(Debug, Clone)]
pub struct Scanner {
    cursor: Cursor,
    /// `Some(None)` caches a peeked end of input.
    current: Option<Option<Token>>,
    token_start: Position,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Scanner {
        Scanner {
            cursor: Cursor::new(source.into()),
            current: None,
            token_start: Position::start(),
        }
    }

    pub fn peek(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(token) = &self.current {
            return Ok(token.clone());
        }

        let token = self.read_next()?;
        self.current = Some(token.clone());
        Ok(token)
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        match self.current.take() {
            Some(token) => Ok(token),
            None => self.read_next(),
        }
    }

    /// Start of the most recently scanned token, or the end of input once it is reached.
    pub fn token_position(&self) -> Position {
        self.token_start
    }

    fn skip_trivia(&mut self) -> Option<char> {
        loop {
            self.cursor.read_while(is_whitespace);

            match self.cursor.peek() {
                Some('#') => {
                    self.cursor.read_while(|ch| ch != '\n');
                }
                other => return other,
            }
        }
    }

    fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        let next_char = self.skip_trivia();
        self.token_start = self.cursor.position();

        let Some(ch) = next_char else {
            trace!("end of input at {}", self.token_start);
            return Ok(None);
        };

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(self.cursor.remainder()) {
                let lexeme = found.as_str().to_string();
                let token = (pattern.handler)(&lexeme, self.token_start)?;
                self.cursor.consume(&lexeme);

                trace!("scanned {:?} at {}", token, self.token_start);
                return Ok(Some(token));
            }
        }

        let token = if let Some(punctuation) = PUNCTUATION_LOOKUP.get(&ch) {
            Token::Punctuation(*punctuation)
        } else if let Some(operator) = OPERATOR_LOOKUP.get(&ch) {
            Token::Operator(*operator)
        } else {
            return Err(LexError::UnrecognisedCharacter {
                character: ch,
                line: self.token_start.line,
                column: self.token_start.column,
            });
        };
        self.cursor.advance();

        trace!("scanned {:?} at {}", token, self.token_start);
        Ok(Some(token))
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Scans the whole source eagerly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(Scanner::new(source).collect::<Result<Vec<Token>, LexError>>()?)
}
