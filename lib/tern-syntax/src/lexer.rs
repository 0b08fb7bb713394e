use crate::SyntaxError;
use memchr::memchr;
use std::ops::Range;

/// A single token of the terse syntax: a statement delimiter or an opaque
/// term span borrowed from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// The `.` statement terminator.
    Dot,
    /// The `;` predicate-list separator.
    Semicolon,
    /// Any other run of characters, quote-aware.
    Term(&'a str),
}

impl Token<'_> {
    pub(crate) fn description(&self) -> String {
        match self {
            Self::Dot => "`.`".into(),
            Self::Semicolon => "`;`".into(),
            Self::Term(text) => format!("`{text}`"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TokenWithPosition<'a> {
    pub token: Token<'a>,
    pub position: Range<usize>,
}

/// Splits terse-syntax text into delimiter and term tokens.
///
/// Whitespace separates tokens and is never emitted. `.` and `;` are
/// single-character delimiter tokens even with no surrounding whitespace,
/// unless they occur inside a `"`-quoted or `<`-bracketed span. Quote state
/// toggles on every `"` with no escape handling, and a term keeps scanning
/// across whitespace and delimiters while a quote is open.
///
/// Tokens are zero-copy views into the buffer handed to [`Lexer::new`].
pub(crate) struct Lexer<'a> {
    data: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(data: &'a str) -> Self {
        Self { data, position: 0 }
    }

    /// Byte length of the buffer, used to position end-of-input errors.
    pub(crate) fn end_position(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn read_next(&mut self) -> Option<Result<TokenWithPosition<'a>, SyntaxError>> {
        self.skip_whitespace();
        let start = self.position;
        let byte = *self.data.as_bytes().get(start)?;
        Some(match byte {
            b'.' => {
                self.position = start + 1;
                Ok(TokenWithPosition {
                    token: Token::Dot,
                    position: start..self.position,
                })
            }
            b';' => {
                self.position = start + 1;
                Ok(TokenWithPosition {
                    token: Token::Semicolon,
                    position: start..self.position,
                })
            }
            _ => self.read_term(start),
        })
    }

    fn read_term(&mut self, start: usize) -> Result<TokenWithPosition<'a>, SyntaxError> {
        let bytes = self.data.as_bytes();
        let mut i = start;
        let mut in_iri = false;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    // Everything up to the matching quote, whitespace and
                    // delimiters included, belongs to this term.
                    let Some(length) = memchr(b'"', &bytes[i + 1..]) else {
                        self.position = bytes.len();
                        return Err(SyntaxError::UnterminatedQuote { position: i });
                    };
                    i += length + 2;
                }
                b'<' => {
                    in_iri = true;
                    i += 1;
                }
                b'>' => {
                    in_iri = false;
                    i += 1;
                }
                b'.' | b';' if !in_iri => break,
                byte if byte.is_ascii_whitespace() => break,
                _ => i += 1,
            }
        }
        self.position = i;
        Ok(TokenWithPosition {
            token: Token::Term(&self.data[start..i]),
            position: start..i,
        })
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.data.as_bytes();
        while let Some(byte) = bytes.get(self.position) {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }
}
