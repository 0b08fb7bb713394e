//! A parser for the terse prefix-based triple syntax implemented by
//! [`TerseParser`].

use crate::lexer::{Lexer, Token, TokenWithPosition};
use crate::vocab::rdf;
use crate::{SyntaxError, Triple};
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// A parser for the terse triple syntax: `@prefix` declarations, bracketed
/// IRIs, prefixed names, quoted literals, `;`-separated predicate lists,
/// `.`-terminated statements and the `a` shorthand for `rdf:type`.
///
/// Blank nodes, collections, numeric shorthand, base IRIs and comments are
/// not part of this dialect.
///
/// ```
/// use tern_syntax::{TerseParser, Triple};
///
/// let file = r#"@prefix schema: <http://schema.org/> .
/// <http://example.com/foo> a schema:Person ;
///     schema:name "Foo" ."#;
///
/// let triples = TerseParser::new()
///     .parse_str(file)
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(
///     triples,
///     [
///         Triple::new(
///             "<http://example.com/foo>",
///             "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>",
///             "<http://schema.org/Person>",
///         ),
///         Triple::new(
///             "<http://example.com/foo>",
///             "<http://schema.org/name>",
///             "\"Foo\"",
///         ),
///     ]
/// );
/// # Result::<_, tern_syntax::SyntaxError>::Ok(())
/// ```
#[derive(Default)]
#[must_use]
pub struct TerseParser;

impl TerseParser {
    /// Builds a new [`TerseParser`].
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete in-memory document.
    ///
    /// The returned reader carries all parser state: prefix bindings do not
    /// survive from one `parse_str` call to the next.
    pub fn parse_str(self, data: &str) -> TerseReader<'_> {
        TerseReader {
            lexer: Lexer::new(data),
            prefixes: HashMap::new(),
            subject: None,
            done: false,
        }
    }
}

/// Iterator over the triples of a terse document, in document order.
///
/// The first error ends the iteration: no statement after a malformed one is
/// recovered.
#[must_use]
pub struct TerseReader<'a> {
    lexer: Lexer<'a>,
    prefixes: HashMap<String, String>,
    subject: Option<String>,
    done: bool,
}

impl<'a> TerseReader<'a> {
    /// The prefix bindings encountered so far.
    ///
    /// Iterates over `(name, namespace IRI)` pairs, names without the
    /// trailing `:` and namespaces without brackets. If a prefix was
    /// redeclared, only the latest binding is returned.
    pub fn prefixes(&self) -> Iter<'_, String, String> {
        self.prefixes.iter()
    }

    fn next_triple(&mut self) -> Option<Result<Triple, SyntaxError>> {
        loop {
            let Some(subject) = self.subject.clone() else {
                let token = match self.lexer.read_next()? {
                    Ok(token) => token,
                    Err(e) => return Some(Err(e)),
                };
                match token.token {
                    Token::Term("@prefix") => {
                        if let Err(e) = self.read_prefix_declaration() {
                            return Some(Err(e));
                        }
                    }
                    Token::Term(term) => match self.expand(term, token.position.start) {
                        Ok(subject) => self.subject = Some(subject),
                        Err(e) => return Some(Err(e)),
                    },
                    Token::Dot | Token::Semicolon => {
                        return Some(Err(SyntaxError::unexpected(
                            "a statement subject or `@prefix`",
                            token.token.description(),
                            token.position.start,
                        )));
                    }
                }
                continue;
            };
            return Some(self.read_pair(subject));
        }
    }

    /// Reads one predicate/object pair of the current statement block plus
    /// the delimiter behind it: `;` keeps the block's subject for the next
    /// pair, `.` ends the block.
    fn read_pair(&mut self, subject: String) -> Result<Triple, SyntaxError> {
        let (predicate, predicate_position) = self.read_term_token("a predicate")?;
        // The raw text `a` always stands for rdf:type, whatever is bound.
        let predicate = if predicate == "a" {
            format!("<{}>", rdf::TYPE)
        } else {
            self.expand(predicate, predicate_position)?
        };
        let (object, object_position) = self.read_term_token("an object")?;
        let object = self.expand(object, object_position)?;
        match self.lexer.read_next() {
            Some(Ok(TokenWithPosition {
                token: Token::Dot, ..
            })) => self.subject = None,
            Some(Ok(TokenWithPosition {
                token: Token::Semicolon,
                ..
            })) => (),
            Some(Ok(token)) => {
                return Err(SyntaxError::unexpected(
                    "`.` or `;`",
                    token.token.description(),
                    token.position.start,
                ));
            }
            Some(Err(e)) => return Err(e),
            None => {
                return Err(SyntaxError::unexpected(
                    "`.` or `;`",
                    "end of input",
                    self.lexer.end_position(),
                ));
            }
        }
        Ok(Triple {
            subject,
            predicate,
            object,
        })
    }

    /// Reads the `name: <iri> .` tail of an `@prefix` declaration and stores
    /// the binding, overwriting any prior one for the same name.
    fn read_prefix_declaration(&mut self) -> Result<(), SyntaxError> {
        let (name, name_position) = self.read_term_token("a prefix name ending with `:`")?;
        let Some(name) = name.strip_suffix(':') else {
            return Err(SyntaxError::unexpected(
                "a prefix name ending with `:`",
                format!("`{name}`"),
                name_position,
            ));
        };
        let (value, value_position) = self.read_term_token("a `<`-bracketed namespace IRI")?;
        let Some(iri) = value
            .strip_prefix('<')
            .and_then(|value| value.strip_suffix('>'))
        else {
            return Err(SyntaxError::unexpected(
                "a `<`-bracketed namespace IRI",
                format!("`{value}`"),
                value_position,
            ));
        };
        match self.lexer.read_next() {
            Some(Ok(TokenWithPosition {
                token: Token::Dot, ..
            })) => (),
            Some(Ok(token)) => {
                return Err(SyntaxError::unexpected(
                    "`.` after the prefix declaration",
                    token.token.description(),
                    token.position.start,
                ));
            }
            Some(Err(e)) => return Err(e),
            None => {
                return Err(SyntaxError::unexpected(
                    "`.` after the prefix declaration",
                    "end of input",
                    self.lexer.end_position(),
                ));
            }
        }
        self.prefixes.insert(name.to_owned(), iri.to_owned());
        Ok(())
    }

    fn read_term_token(
        &mut self,
        expected: &'static str,
    ) -> Result<(&'a str, usize), SyntaxError> {
        match self.lexer.read_next() {
            Some(Ok(TokenWithPosition {
                token: Token::Term(text),
                position,
            })) => Ok((text, position.start)),
            Some(Ok(token)) => Err(SyntaxError::unexpected(
                expected,
                token.token.description(),
                token.position.start,
            )),
            Some(Err(e)) => Err(e),
            None => Err(SyntaxError::unexpected(
                expected,
                "end of input",
                self.lexer.end_position(),
            )),
        }
    }

    /// Applies namespace expansion to a term: the value and the optional
    /// `^^` datatype suffix are rewritten independently.
    fn expand(&self, term: &str, position: usize) -> Result<String, SyntaxError> {
        match term.split_once("^^") {
            Some((value, datatype)) => Ok(format!(
                "{}^^{}",
                self.expand_part(value, position)?,
                self.expand_part(datatype, position)?
            )),
            None => self.expand_part(term, position),
        }
    }

    /// Rewrites a leading `prefix:` pattern (a maximal alphabetic run
    /// followed by `:`) to its bound namespace, bracketing the result. Parts
    /// without the pattern, like bracketed IRIs and quoted literals, pass
    /// through unchanged.
    fn expand_part(&self, part: &str, position: usize) -> Result<String, SyntaxError> {
        let alphabetic = part
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if alphabetic == 0 || part.as_bytes().get(alphabetic) != Some(&b':') {
            return Ok(part.to_owned());
        }
        let prefix = &part[..alphabetic];
        let Some(namespace) = self.prefixes.get(prefix) else {
            return Err(SyntaxError::UndefinedPrefix {
                prefix: prefix.to_owned(),
                position,
            });
        };
        Ok(format!("<{namespace}{}>", &part[alphabetic + 1..]))
    }
}

impl Iterator for TerseReader<'_> {
    type Item = Result<Triple, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_triple();
        if matches!(result, Some(Err(_))) {
            self.done = true;
        }
        result
    }
}
