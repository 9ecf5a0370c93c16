use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::ast::*;
use crate::lexer::Token;

type Span = SimpleSpan;

/// Parse error with source span.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Byte range of the offending token.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of what was expected.
    pub message: String,
}

fn spanned<T>(node: T, span: Span) -> Spanned<T> {
    Spanned {
        node,
        span: span.into_range(),
    }
}

/// Build the graph parser.
///
/// DOT keywords are case-insensitive and are not reserved as node names
/// anywhere except at the start of a statement.
fn graph_parser<'a, I>() -> impl Parser<'a, I, Graph, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    let kw = |k: &'static str| {
        select! { Token::Ident(ref w) if w.eq_ignore_ascii_case(k) => () }.labelled(k)
    };
    let id = select! {
        Token::Ident(w) => w,
        Token::Str(s) => s,
    }
    .labelled("identifier");
    let spanned_id = {
        let id = id.clone();
        move || id.clone().map_with(|s, e| spanned(s, e.span()))
    };

    // [a = b, c = d; e = f]
    let attribute = id
        .clone()
        .then_ignore(just(Token::Equals))
        .then(id.clone())
        .then_ignore(choice((just(Token::Comma), just(Token::Semi))).or_not())
        .map(|(key, value)| Attribute { key, value })
        .labelled("attribute");
    let attr_list = attribute
        .repeated()
        .collect::<Vec<_>>()
        .delimited_by(just(Token::LBracket), just(Token::RBracket))
        .repeated()
        .collect::<Vec<_>>()
        .map(|lists| lists.into_iter().flatten().collect::<Vec<_>>());

    let statement = recursive(|stmt| {
        let body = stmt
            .repeated()
            .collect::<Vec<Spanned<Statement>>>()
            .delimited_by(just(Token::LBrace), just(Token::RBrace));

        let subgraph = kw("subgraph")
            .ignore_then(spanned_id().or_not())
            .or_not()
            .then(body)
            .map_with(|(name, statements), e| {
                let span: Span = e.span();
                Statement::Subgraph(Subgraph {
                    name: name.flatten(),
                    statements,
                    span: span.into_range(),
                })
            })
            .labelled("subgraph");

        let defaults = choice((kw("node"), kw("edge"), kw("graph")))
            .then(attr_list.clone())
            .to(Statement::Ignored)
            .labelled("attribute defaults");

        let edge_op = choice((just(Token::Arrow), just(Token::DashDash)));
        let edge = spanned_id()
            .then(
                edge_op
                    .ignore_then(spanned_id())
                    .repeated()
                    .at_least(1)
                    .collect::<Vec<_>>(),
            )
            .then(attr_list.clone())
            .map(|((first, rest), attributes)| {
                let mut nodes = Vec::with_capacity(rest.len() + 1);
                nodes.push(first);
                nodes.extend(rest);
                Statement::Edge(EdgeStmt { nodes, attributes })
            })
            .labelled("edge");

        let assignment = id
            .clone()
            .then_ignore(just(Token::Equals))
            .then(id.clone())
            .to(Statement::Ignored);

        let node = spanned_id()
            .then(attr_list.clone())
            .map(|(id, attributes)| Statement::Node(NodeStmt { id, attributes }))
            .labelled("node");

        choice((subgraph, defaults, edge, assignment, node))
            .map_with(|stmt, e| spanned(stmt, e.span()))
            .then_ignore(just(Token::Semi).or_not())
    });

    kw("strict")
        .or_not()
        .ignore_then(choice((kw("digraph"), kw("graph"))))
        .ignore_then(spanned_id().or_not())
        .then(
            statement
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::LBrace), just(Token::RBrace)),
        )
        .then_ignore(end())
        .map(|(name, statements)| Graph { name, statements })
}

/// Parse a token stream into a graph.
pub fn parse(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<Graph, Vec<ParseError>> {
    let token_iter = tokens
        .iter()
        .map(|(tok, span)| (tok.clone(), Span::from(span.clone())));

    let len = tokens.last().map_or(0, |(_, s)| s.end);
    let eoi: Span = (len..len).into();
    let stream = Stream::from_iter(token_iter).map(eoi, |(t, s): (_, _)| (t, s));

    let (output, errors) = graph_parser().parse(stream).into_output_errors();

    if let Some(graph) = output
        && errors.is_empty()
    {
        return Ok(graph);
    }

    Err(errors
        .into_iter()
        .map(|e| ParseError {
            span: e.span().into_range(),
            message: e.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_source(source: &str) -> Result<Graph, Vec<ParseError>> {
        let (tokens, lex_errors) = lexer::lex(source);
        assert!(lex_errors.is_empty(), "lex errors: {lex_errors:?}");
        parse(&tokens)
    }

    #[test]
    fn parse_empty_digraph() {
        let graph = parse_source("digraph layout { }").unwrap();
        assert_eq!(graph.name.unwrap().node, "layout");
        assert!(graph.statements.is_empty());
    }

    #[test]
    fn parse_nested_subgraphs() {
        let graph = parse_source(
            r#"digraph layout {
                subgraph locations {
                    subgraph cluster001 {
                        node [shape = "none"];
                        cabin [description = "A log cabin"];
                        subgraph artefacts {
                            potion [description = "Magic potion"]
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let locations: Vec<_> = graph.subgraphs().collect();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name_str(), "locations");

        let cluster = locations[0].subgraphs().next().unwrap();
        assert_eq!(cluster.name_str(), "cluster001");
        let cabin = cluster.nodes().next().unwrap();
        assert_eq!(cabin.id.node, "cabin");
        assert_eq!(cabin.attribute("description"), Some("A log cabin"));

        let artefacts = cluster.subgraphs().next().unwrap();
        assert_eq!(artefacts.name_str(), "artefacts");
        assert_eq!(artefacts.nodes().count(), 1);
    }

    #[test]
    fn parse_edge_chain() {
        let graph = parse_source("digraph { subgraph paths { a -> b -> c; d -- e } }").unwrap();
        let paths = graph.subgraphs().next().unwrap();
        let edges: Vec<_> = paths.edges().collect();
        assert_eq!(edges.len(), 2);
        let names: Vec<_> = edges[0].nodes.iter().map(|n| n.node.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn layout_statements_are_ignored() {
        let graph =
            parse_source("strict digraph g { rankdir = LR; edge [color = red]; graph [a = b] }")
                .unwrap();
        assert!(
            graph
                .statements
                .iter()
                .all(|s| s.node == Statement::Ignored)
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let graph = parse_source("DiGraph g { SubGraph s { x } }").unwrap();
        assert_eq!(graph.subgraphs().next().unwrap().name_str(), "s");
    }

    #[test]
    fn multiple_attribute_lists_merge() {
        let graph = parse_source("digraph { sword [description = x][weight = heavy] }").unwrap();
        match &graph.statements[0].node {
            Statement::Node(node) => {
                assert_eq!(node.attributes.len(), 2);
                assert_eq!(node.attribute("weight"), Some("heavy"));
            }
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn subgraph_span_covers_its_body() {
        let source = "digraph { subgraph s { x } }";
        let graph = parse_source(source).unwrap();
        let span = graph.subgraphs().next().unwrap().span.clone();
        assert_eq!(&source[span], "subgraph s { x }");
    }

    #[test]
    fn anonymous_subgraph_has_empty_name() {
        let graph = parse_source("digraph { { a } }").unwrap();
        assert_eq!(graph.subgraphs().next().unwrap().name_str(), "");
    }

    #[test]
    fn missing_closing_brace_is_an_error() {
        let errors = parse_source("digraph { subgraph locations { cabin }").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn trailing_tokens_are_an_error() {
        assert!(parse_source("digraph { } extra").is_err());
    }

    #[test]
    fn error_span_points_at_bad_token() {
        let errors = parse_source("digraph { a -> ; }").unwrap_err();
        assert!(errors[0].span.start >= 12, "span: {:?}", errors[0].span);
    }
}
