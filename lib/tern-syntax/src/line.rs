//! A reader and a serializer for the line-oriented triple format, one
//! `subject predicate object .` statement per line, implemented by
//! [`LineParser`] and [`LineSerializer`].

use crate::{SyntaxError, Triple};
use std::io::{self, Write};
use std::str::Lines;

/// A parser for the line-oriented format: one statement per line, fields
/// separated by whitespace, terminated by a lone `.` field. Blank lines are
/// skipped.
///
/// ```
/// use tern_syntax::LineParser;
///
/// let file = "<http://example.com/s> <http://example.com/p> <http://example.com/o> .
///
/// <http://example.com/s> <http://example.com/p> \"o\" .";
///
/// let triples = LineParser::new()
///     .parse_str(file)
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(triples.len(), 2);
/// # Result::<_, tern_syntax::SyntaxError>::Ok(())
/// ```
#[derive(Default)]
#[must_use]
pub struct LineParser;

impl LineParser {
    /// Builds a new [`LineParser`].
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete in-memory document.
    pub fn parse_str(self, data: &str) -> LineReader<'_> {
        LineReader {
            lines: data.lines(),
            line_number: 0,
            done: false,
        }
    }
}

/// Iterator over the triples of a line-oriented document, in document order.
///
/// The first error ends the iteration.
#[must_use]
pub struct LineReader<'a> {
    lines: Lines<'a>,
    line_number: usize,
    done: bool,
}

impl Iterator for LineReader<'_> {
    type Item = Result<Triple, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            match parse_line(line, self.line_number) {
                Ok(Some(triple)) => return Some(Ok(triple)),
                Ok(None) => (),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<Option<Triple>, SyntaxError> {
    let mut fields = line.split_whitespace();
    let Some(subject) = fields.next() else {
        return Ok(None);
    };
    let Some(predicate) = fields.next() else {
        return Err(SyntaxError::MissingPredicate { line: line_number });
    };
    let Some(object) = fields.next() else {
        return Err(SyntaxError::MissingObject { line: line_number });
    };
    if fields.next() != Some(".") || fields.next().is_some() {
        return Err(SyntaxError::MissingDot { line: line_number });
    }
    Ok(Some(Triple::new(subject, predicate, object)))
}

/// A serializer for the line-oriented format.
///
/// ```
/// use tern_syntax::{LineSerializer, Triple};
///
/// let mut serializer = LineSerializer::new().serialize_to_write(Vec::new());
/// serializer.write_triple(&Triple::new(
///     "<http://example.com/s>",
///     "<http://example.com/p>",
///     "<http://example.com/o>",
/// ))?;
/// assert_eq!(
///     "<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n",
///     String::from_utf8(serializer.finish()).unwrap()
/// );
/// # Result::<_, std::io::Error>::Ok(())
/// ```
#[derive(Default)]
#[must_use]
pub struct LineSerializer;

impl LineSerializer {
    /// Builds a new [`LineSerializer`].
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Writes a line-oriented file to a [`Write`] implementation.
    pub fn serialize_to_write<W: Write>(self, write: W) -> WriterLineSerializer<W> {
        WriterLineSerializer { write }
    }
}

/// Writes triples to a [`Write`] implementation, one statement per line. Can
/// be built using [`LineSerializer::serialize_to_write`].
#[must_use]
pub struct WriterLineSerializer<W: Write> {
    write: W,
}

impl<W: Write> WriterLineSerializer<W> {
    /// Writes one statement.
    pub fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        writeln!(self.write, "{triple} .")
    }

    /// Ends the serialization and returns the underlying [`Write`].
    pub fn finish(self) -> W {
        self.write
    }
}
