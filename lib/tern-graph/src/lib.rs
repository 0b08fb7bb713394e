//! Tern graph is an in-memory directed graph assembled from parsed RDF
//! triples, with automatic node deduplication: every term naming the same
//! entity resolves to the same [`Node`], and each node keeps its outgoing
//! relations in triple arrival order.
//!
//! Usage example:
//! ```
//! use tern_graph::{Format, Graph, Term};
//!
//! let file = r#"@prefix foaf: <http://xmlns.com/foaf/0.1/> .
//! <http://example.org/person#Alice>
//!     a foaf:Person ;
//!     foaf:name "Alice" ."#;
//!
//! let mut graph = Graph::new();
//! graph.load_from_str(Format::Terse, file)?;
//!
//! let alice = graph.iter().next().unwrap();
//! assert_eq!(alice.name(), "http://example.org/person#Alice");
//! assert_eq!(alice.relations().len(), 2);
//! match alice.relations()[1].term() {
//!     Term::Literal(name) => assert_eq!(name.value(), "Alice"),
//!     Term::Node(_) => unreachable!(),
//! }
//! # Result::<_, tern_graph::SyntaxError>::Ok(())
//! ```

mod graph;
mod literal;

pub use crate::graph::{Format, Graph, Iter, Node, NodeId, Relation, Term};
pub use crate::literal::Literal;
pub use tern_syntax::{SyntaxError, Triple};
