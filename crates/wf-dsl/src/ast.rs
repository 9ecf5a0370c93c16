/// Source span as a byte range.
pub type Span = std::ops::Range<usize>;

/// An AST node with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    /// The wrapped AST node.
    pub node: T,
    /// The byte range of this node in the source text.
    pub span: Span,
}

/// A parsed entities file: one top-level graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Optional graph identifier (`digraph layout { ... }`).
    pub name: Option<Spanned<String>>,
    /// Statements in the graph body.
    pub statements: Vec<Spanned<Statement>>,
}

impl Graph {
    /// Subgraphs directly inside the graph body.
    pub fn subgraphs(&self) -> impl Iterator<Item = &Subgraph> {
        subgraphs_of(&self.statements)
    }
}

/// A statement inside a graph or subgraph body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `subgraph`.
    Subgraph(Subgraph),
    /// A node declaration, e.g. `cabin [description = "..."]`.
    Node(NodeStmt),
    /// An edge chain, e.g. `cabin -> forest`.
    Edge(EdgeStmt),
    /// Layout-only statements (`node [...]`, `graph [...]`, `rankdir = LR`).
    Ignored,
}

/// A `subgraph name { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Subgraph {
    /// The subgraph identifier, if any.
    pub name: Option<Spanned<String>>,
    /// Statements in the subgraph body.
    pub statements: Vec<Spanned<Statement>>,
    /// Span of the whole block.
    pub span: Span,
}

impl Subgraph {
    /// The subgraph name, or `""` for anonymous subgraphs.
    pub fn name_str(&self) -> &str {
        self.name.as_ref().map_or("", |n| n.node.as_str())
    }

    /// Span of the name, falling back to the whole block.
    pub fn name_span(&self) -> Span {
        self.name
            .as_ref()
            .map_or_else(|| self.span.clone(), |n| n.span.clone())
    }

    /// Subgraphs directly inside this body.
    pub fn subgraphs(&self) -> impl Iterator<Item = &Subgraph> {
        subgraphs_of(&self.statements)
    }

    /// Node declarations directly inside this body.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeStmt> {
        self.statements.iter().filter_map(|s| match &s.node {
            Statement::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Edge chains directly inside this body.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeStmt> {
        self.statements.iter().filter_map(|s| match &s.node {
            Statement::Edge(edge) => Some(edge),
            _ => None,
        })
    }
}

fn subgraphs_of(statements: &[Spanned<Statement>]) -> impl Iterator<Item = &Subgraph> {
    statements.iter().filter_map(|s| match &s.node {
        Statement::Subgraph(sub) => Some(sub),
        _ => None,
    })
}

/// A `key = value` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name.
    pub key: String,
    /// Attribute value, unquoted.
    pub value: String,
}

/// A node declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStmt {
    /// The node identifier.
    pub id: Spanned<String>,
    /// Attributes from the bracketed list.
    pub attributes: Vec<Attribute>,
}

impl NodeStmt {
    /// Value of the attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key.eq_ignore_ascii_case(key))
            .map(|a| a.value.as_str())
    }
}

/// An edge chain: `a -> b -> c` connects each consecutive pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStmt {
    /// Node identifiers in chain order; always at least two.
    pub nodes: Vec<Spanned<String>>,
    /// Attributes from the bracketed list.
    pub attributes: Vec<Attribute>,
}
