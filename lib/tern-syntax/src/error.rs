/// An error in the syntax of a parsed document.
///
/// Errors are fatal to the parse call that raised them: the first error
/// aborts the whole document and no statement-level recovery is attempted.
/// Positions are byte offsets into the input buffer for the terse syntax and
/// 1-based line numbers for the line-oriented format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The buffer ended while a `"`-quoted span was still open.
    #[error("unterminated quoted literal opened at byte {position}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A token of the wrong kind or shape where a specific one is required.
    #[error("expected {expected}, found {found} at byte {position}")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: &'static str,
        /// What was actually read, or `end of input`.
        found: String,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// A prefixed name used a prefix that no `@prefix` declaration bound.
    #[error("prefix `{prefix}:` is not bound to a namespace at byte {position}")]
    UndefinedPrefix {
        /// The unbound prefix name, without the trailing `:`.
        prefix: String,
        /// Byte offset of the term using the prefix.
        position: usize,
    },
    /// A line-format statement with a subject but no predicate field.
    #[error("missing predicate on line {line}")]
    MissingPredicate {
        /// 1-based line number.
        line: usize,
    },
    /// A line-format statement with no object field.
    #[error("missing object on line {line}")]
    MissingObject {
        /// 1-based line number.
        line: usize,
    },
    /// A line-format statement without its terminating `.` field.
    #[error("missing ending dot on line {line}")]
    MissingDot {
        /// 1-based line number.
        line: usize,
    },
}

impl SyntaxError {
    pub(crate) fn unexpected(
        expected: &'static str,
        found: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::UnexpectedToken {
            expected,
            found: found.into(),
            position,
        }
    }
}
