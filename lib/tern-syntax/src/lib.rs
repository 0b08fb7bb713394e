//! Tern syntax provides parsers and serializers for the two textual triple
//! formats understood by the Tern toolkit: a line-oriented format with one
//! `subject predicate object .` statement per line ([`LineParser`]) and a
//! terse prefix-based syntax with `@prefix` declarations and `;` predicate
//! lists ([`TerseParser`]).
//!
//! Both parsers emit the same [`Triple`] representation, with every term in
//! surface syntax: IRIs wrapped in `<>`, literals quoted and optionally
//! followed by `^^<datatype-iri>`.
//!
//! Count the number of people:
//! ```
//! use tern_syntax::TerseParser;
//! use tern_syntax::vocab::rdf;
//!
//! let file = r#"@prefix schema: <http://schema.org/> .
//! <http://example.com/foo> a schema:Person ;
//!     schema:name "Foo" .
//! <http://example.com/bar> a schema:Person ;
//!     schema:name "Bar" ."#;
//!
//! let rdf_type = format!("<{}>", rdf::TYPE);
//! let mut count = 0;
//! for triple in TerseParser::new().parse_str(file) {
//!     let triple = triple?;
//!     if triple.predicate == rdf_type && triple.object == "<http://schema.org/Person>" {
//!         count += 1;
//!     }
//! }
//! assert_eq!(2, count);
//! # Result::<_, tern_syntax::SyntaxError>::Ok(())
//! ```

mod error;
mod lexer;
pub mod line;
pub mod terse;
mod triple;
pub mod vocab;

pub use crate::error::SyntaxError;
pub use crate::line::{LineParser, LineSerializer};
pub use crate::terse::TerseParser;
pub use crate::triple::Triple;
