use std::fmt;

/// A parsed statement: subject, predicate and object kept in surface syntax,
/// with IRIs wrapped in `<>` and literals quoted, optionally followed by a
/// `^^<datatype-iri>` suffix.
///
/// The default string formatter returns the statement body in the
/// line-oriented syntax:
/// ```
/// use tern_syntax::Triple;
///
/// assert_eq!(
///     "<http://example.com/s> <http://example.com/p> \"o\"",
///     Triple::new("<http://example.com/s>", "<http://example.com/p>", "\"o\"").to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Triple {
    /// The subject, a bracketed IRI.
    pub subject: String,
    /// The predicate, a bracketed IRI.
    pub predicate: String,
    /// The object, a bracketed IRI or a quoted literal.
    pub object: String,
}

impl Triple {
    /// Builds a triple from its three surface-syntax terms.
    #[inline]
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
