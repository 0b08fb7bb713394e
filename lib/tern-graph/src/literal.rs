use std::fmt;

/// A literal object value: the quote-stripped lexical form plus the optional
/// bracket-stripped datatype IRI that followed a `^^` separator in the
/// surface syntax.
///
/// The default string formatter returns the surface form:
/// ```
/// use tern_graph::Literal;
///
/// assert_eq!("\"Alice\"", Literal::new_simple("Alice").to_string());
/// assert_eq!(
///     "\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>",
///     Literal::new_typed("5", "http://www.w3.org/2001/XMLSchema#integer").to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Literal {
    value: String,
    datatype: Option<String>,
}

impl Literal {
    /// Builds a literal without a datatype.
    #[inline]
    pub fn new_simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// Builds a literal with a datatype IRI, given without brackets.
    #[inline]
    pub fn new_typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// The lexical form of the literal.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI, if the surface form carried a `^^` annotation.
    #[inline]
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// Splits a surface-syntax object (`"value"` or `"value"^^<datatype>`)
    /// into its parts. Malformed content is not validated: surrounding
    /// markers are stripped when the pair is present and everything else is
    /// kept verbatim.
    pub(crate) fn from_surface(object: &str) -> Self {
        match object.split_once("^^") {
            Some((value, datatype)) => Self {
                value: strip_pair(value, '"', '"').to_owned(),
                datatype: Some(strip_pair(datatype, '<', '>').to_owned()),
            },
            None => Self {
                value: strip_pair(object, '"', '"').to_owned(),
                datatype: None,
            },
        }
    }
}

impl fmt::Display for Literal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")?;
        }
        Ok(())
    }
}

/// Removes one matching pair of surrounding markers, if both are present.
pub(crate) fn strip_pair(term: &str, open: char, close: char) -> &str {
    term.strip_prefix(open)
        .and_then(|term| term.strip_suffix(close))
        .unwrap_or(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_form_splits_on_the_datatype_separator() {
        assert_eq!(Literal::from_surface("\"Alice\""), Literal::new_simple("Alice"));
        assert_eq!(
            Literal::from_surface("\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>"),
            Literal::new_typed("5", "http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn embedded_whitespace_is_kept() {
        assert_eq!(
            Literal::from_surface("\"hello world\""),
            Literal::new_simple("hello world")
        );
    }

    #[test]
    fn malformed_quoting_is_not_validated() {
        // Unbalanced markers stay verbatim: the gap is accepted, not an error.
        assert_eq!(Literal::from_surface("\"open"), Literal::new_simple("\"open"));
        assert_eq!(
            Literal::from_surface("\"5\"^^unbracketed"),
            Literal::new_typed("5", "unbracketed")
        );
    }
}
