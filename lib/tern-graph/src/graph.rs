//! In-memory graph construction from parsed triples.

use crate::literal::{Literal, strip_pair};
use rustc_hash::FxHashMap;
use std::fmt;
use tern_syntax::{LineParser, SyntaxError, TerseParser, Triple};

/// The textual formats [`Graph::load_from_str`] can ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// One `subject predicate object .` statement per line.
    Line,
    /// The terse prefix-based syntax with `@prefix` declarations and `;`
    /// predicate lists.
    Terse,
}

/// Identifier of a [`Node`] inside its owning [`Graph`].
///
/// Ids are indices into the graph's node table and stay valid for the whole
/// lifetime of the graph: nodes are never removed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A deduplicated graph entity, identified by its unbound name.
#[derive(Debug)]
pub struct Node {
    name: String,
    relations: Vec<Relation>,
}

impl Node {
    /// The bracket-stripped name identifying this node. Two nodes of a graph
    /// never share a name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The outgoing relations, in triple arrival order and not deduplicated.
    #[inline]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

/// One outgoing edge of a [`Node`]: a predicate paired with its object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    predicate: String,
    term: Term,
}

impl Relation {
    /// The bracket-stripped predicate IRI.
    #[inline]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// The object of the relation.
    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// The object of a [`Relation`]: a reference to another node of the same
/// graph, or an owned literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A reference into the owning graph's node table.
    Node(NodeId),
    /// An owned literal.
    Literal(Literal),
}

/// An in-memory graph of deduplicated nodes built from parsed triples.
///
/// The graph owns every node and string loaded into it and grows
/// monotonically: separate successful [`Graph::load_from_str`] calls
/// accumulate, and everything is released together when the graph is
/// dropped.
///
/// Usage example:
/// ```
/// use tern_graph::{Format, Graph};
///
/// let mut graph = Graph::new();
/// graph.load_from_str(
///     Format::Line,
///     "<http://example.com/a> <http://example.com/p> <http://example.com/b> .",
/// )?;
///
/// let a = graph.node_named("http://example.com/a").unwrap();
/// assert_eq!(a.relations()[0].predicate(), "http://example.com/p");
/// # Result::<_, tern_graph::SyntaxError>::Ok(())
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    ids: FxHashMap<String, NodeId>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph, whatever their role.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the graph contains no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node behind an id handed out by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Looks up a node by its unbound name.
    pub fn node_named(&self, name: &str) -> Option<&Node> {
        self.ids.get(name).map(|id| &self.nodes[id.0])
    }

    /// Iterates over all nodes in first-seen order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    /// Parses `data` in the given `format` and folds every parsed triple
    /// into the graph.
    ///
    /// The whole buffer is parsed before anything is inserted: on error the
    /// graph is left exactly as it was, keeping only the triples of earlier
    /// successful calls.
    ///
    /// ```
    /// use tern_graph::{Format, Graph};
    ///
    /// let mut graph = Graph::new();
    /// graph.load_from_str(
    ///     Format::Terse,
    ///     "@prefix foaf: <http://xmlns.com/foaf/0.1/> .
    ///     <http://example.org/alice> foaf:name \"Alice\" .",
    /// )?;
    /// assert_eq!(graph.len(), 1);
    /// # Result::<_, tern_graph::SyntaxError>::Ok(())
    /// ```
    pub fn load_from_str(&mut self, format: Format, data: &str) -> Result<(), SyntaxError> {
        let triples = match format {
            Format::Line => LineParser::new()
                .parse_str(data)
                .collect::<Result<Vec<_>, _>>()?,
            Format::Terse => TerseParser::new()
                .parse_str(data)
                .collect::<Result<Vec<_>, _>>()?,
        };
        for triple in &triples {
            self.add_triple(triple);
        }
        Ok(())
    }

    /// Folds one triple into the graph.
    ///
    /// The subject resolves to its node, created at the end of the node list
    /// on first sight. An object starting with `"` is stored as an owned
    /// [`Literal`]; anything else resolves to a node exactly like a subject.
    /// The resulting relation is appended to the subject's list without
    /// deduplication: adding the same triple twice yields two identical
    /// relations.
    pub fn add_triple(&mut self, triple: &Triple) {
        let subject = self.resolve(unbind(&triple.subject));
        let term = if triple.object.starts_with('"') {
            Term::Literal(Literal::from_surface(&triple.object))
        } else {
            Term::Node(self.resolve(unbind(&triple.object)))
        };
        self.nodes[subject.0].relations.push(Relation {
            predicate: strip_pair(&triple.predicate, '<', '>').to_owned(),
            term,
        });
    }

    fn resolve(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_owned(),
            relations: Vec::new(),
        });
        self.ids.insert(name.to_owned(), id);
        id
    }
}

impl fmt::Display for Graph {
    /// Renders each node owning relations as a terse statement block, in
    /// first-seen node order and insertion relation order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            if node.relations.is_empty() {
                continue;
            }
            write!(f, "<{}>", node.name)?;
            for (i, relation) in node.relations.iter().enumerate() {
                if i > 0 {
                    write!(f, " ;\n\t")?;
                } else {
                    write!(f, " ")?;
                }
                write!(f, "<{}> ", relation.predicate)?;
                match &relation.term {
                    Term::Node(id) => write!(f, "<{}>", self.nodes[id.0].name)?,
                    Term::Literal(literal) => write!(f, "{literal}")?,
                }
            }
            writeln!(f, " .")?;
        }
        Ok(())
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add_triple(&triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator returned by [`Graph::iter`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        self.inner.next()
    }
}

/// Strips the surface markers from a term: one `<>` pair or one `""` pair.
fn unbind(term: &str) -> &str {
    let stripped = strip_pair(term, '<', '>');
    if stripped.len() != term.len() {
        return stripped;
    }
    strip_pair(term, '"', '"')
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use tern_syntax::vocab::rdf;

    #[test]
    fn same_subject_resolves_to_the_same_node() {
        let mut graph = Graph::new();
        graph.add_triple(&Triple::new(
            "<http://example.com/s>",
            "<http://example.com/p>",
            "\"1\"",
        ));
        graph.add_triple(&Triple::new(
            "<http://example.com/s>",
            "<http://example.com/q>",
            "\"2\"",
        ));
        assert_eq!(graph.len(), 1);
        let node = graph.node_named("http://example.com/s").unwrap();
        assert_eq!(node.relations().len(), 2);
        assert_eq!(node.relations()[0].predicate(), "http://example.com/p");
        assert_eq!(node.relations()[1].predicate(), "http://example.com/q");
    }

    #[test]
    fn object_nodes_share_the_subject_table() {
        let mut graph = Graph::new();
        graph.add_triple(&Triple::new(
            "<http://example.com/a>",
            "<http://example.com/p>",
            "<http://example.com/b>",
        ));
        graph.add_triple(&Triple::new(
            "<http://example.com/b>",
            "<http://example.com/p>",
            "<http://example.com/a>",
        ));
        assert_eq!(graph.len(), 2);
        let a = graph.node_named("http://example.com/a").unwrap();
        match a.relations()[0].term() {
            Term::Node(id) => assert_eq!(graph.node(*id).name(), "http://example.com/b"),
            Term::Literal(_) => panic!("expected a node reference"),
        }
    }

    #[test]
    fn nodes_keep_first_seen_order() {
        let mut graph = Graph::new();
        graph.add_triple(&Triple::new(
            "<http://example.com/b>",
            "<http://example.com/p>",
            "<http://example.com/c>",
        ));
        graph.add_triple(&Triple::new(
            "<http://example.com/a>",
            "<http://example.com/p>",
            "<http://example.com/b>",
        ));
        assert_eq!(
            graph.iter().map(Node::name).collect::<Vec<_>>(),
            [
                "http://example.com/b",
                "http://example.com/c",
                "http://example.com/a",
            ]
        );
    }

    #[test]
    fn quoted_objects_are_literals_even_when_a_node_matches() {
        let mut graph = Graph::new();
        graph.add_triple(&Triple::new(
            "<http://example.com/s>",
            "<http://example.com/p>",
            "<http://example.com/s>",
        ));
        graph.add_triple(&Triple::new(
            "<http://example.com/s>",
            "<http://example.com/p>",
            "\"http://example.com/s\"",
        ));
        assert_eq!(graph.len(), 1);
        let relations = graph.node_named("http://example.com/s").unwrap().relations();
        assert!(matches!(relations[0].term(), Term::Node(_)));
        assert_eq!(
            relations[1].term(),
            &Term::Literal(Literal::new_simple("http://example.com/s"))
        );
    }

    #[test]
    fn identical_triples_append_identical_relations() {
        let triple = Triple::new(
            "<http://example.com/s>",
            "<http://example.com/p>",
            "\"v\"",
        );
        let mut graph = Graph::new();
        graph.add_triple(&triple);
        graph.add_triple(&triple);
        let relations = graph.node_named("http://example.com/s").unwrap().relations();
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0], relations[1]);
    }

    #[test]
    fn failed_loads_commit_nothing() {
        let mut graph = Graph::new();
        graph
            .load_from_str(
                Format::Line,
                "<http://example.com/a> <http://example.com/p> <http://example.com/b> .",
            )
            .unwrap();
        let error = graph
            .load_from_str(
                Format::Line,
                "<http://example.com/c> <http://example.com/p> <http://example.com/d> .\n<http://example.com/e> <http://example.com/p>",
            )
            .unwrap_err();
        assert_eq!(error, SyntaxError::MissingObject { line: 2 });
        assert_eq!(graph.len(), 2);
        assert!(graph.node_named("http://example.com/c").is_none());
    }

    #[test]
    fn separate_successful_loads_accumulate() {
        let mut graph = Graph::new();
        graph
            .load_from_str(
                Format::Line,
                "<http://example.com/a> <http://example.com/p> \"1\" .",
            )
            .unwrap();
        graph
            .load_from_str(
                Format::Terse,
                "<http://example.com/a> <http://example.com/p> \"2\" .",
            )
            .unwrap();
        assert_eq!(
            graph
                .node_named("http://example.com/a")
                .unwrap()
                .relations()
                .len(),
            2
        );
    }

    #[test]
    fn terse_load_end_to_end() {
        let file = "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n<http://example.org/person#Alice>\n    a foaf:Person ;\n    foaf:name \"Alice\" .";
        let mut graph = Graph::new();
        graph.load_from_str(Format::Terse, file).unwrap();

        assert_eq!(graph.len(), 2);
        let alice = graph.iter().next().unwrap();
        assert_eq!(alice.name(), "http://example.org/person#Alice");
        assert_eq!(alice.relations().len(), 2);
        assert_eq!(alice.relations()[0].predicate(), rdf::TYPE);
        match alice.relations()[0].term() {
            Term::Node(id) => {
                assert_eq!(graph.node(*id).name(), "http://xmlns.com/foaf/0.1/Person");
            }
            Term::Literal(_) => panic!("expected a node reference"),
        }
        assert_eq!(
            alice.relations()[1].predicate(),
            "http://xmlns.com/foaf/0.1/name"
        );
        match alice.relations()[1].term() {
            Term::Literal(literal) => {
                assert_eq!(literal.value(), "Alice");
                assert_eq!(literal.datatype(), None);
            }
            Term::Node(_) => panic!("expected a literal"),
        }
    }

    #[test]
    fn display_renders_statement_blocks() {
        let graph = [
            Triple::new(
                "<http://example.com/s>",
                "<http://example.com/p>",
                "<http://example.com/o>",
            ),
            Triple::new("<http://example.com/s>", "<http://example.com/q>", "\"v\""),
        ]
        .into_iter()
        .collect::<Graph>();
        assert_eq!(
            graph.to_string(),
            "<http://example.com/s> <http://example.com/p> <http://example.com/o> ;\n\t<http://example.com/q> \"v\" .\n"
        );
    }
}
