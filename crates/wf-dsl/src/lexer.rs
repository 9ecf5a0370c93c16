use logos::Logos;
use std::fmt;

/// Token type for entities files (a subset of Graphviz DOT).
///
/// Keywords such as `digraph`, `subgraph` and `node` are lexed as
/// `Token::Ident`; the parser recognizes them by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`.
    LBrace,
    /// Right brace `}`.
    RBrace,
    /// Left bracket `[`.
    LBracket,
    /// Right bracket `]`.
    RBracket,
    /// Statement terminator `;`.
    Semi,
    /// Attribute separator `,`.
    Comma,
    /// Attribute assignment `=`.
    Equals,
    /// Directed edge `->`.
    Arrow,
    /// Undirected edge `--`.
    DashDash,
    /// Double-quoted string literal, unescaped.
    Str(String),
    /// Bare identifier or numeral.
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Semi => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
            Token::Arrow => write!(f, "->"),
            Token::DashDash => write!(f, "--"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Ident(w) => write!(f, "{w}"),
        }
    }
}

/// Internal logos token. Converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semi,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("->")]
    Arrow,

    #[token("--")]
    DashDash,

    #[token("/*")]
    BlockCommentStart,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"-?(\.[0-9]+|[0-9]+(\.[0-9]*)?)")]
    Numeral,
}

/// A lexer error with source location.
#[derive(Debug, Clone)]
pub struct LexError {
    /// Byte range of the erroneous input in the source.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the lexer error.
    pub message: String,
}

/// Lex source text into a sequence of `(Token, Span)` pairs.
///
/// Returns the token stream and any lexer errors. Lexing continues past
/// errors so every problem in a file is reported at once.
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token = match raw {
                    RawToken::LBrace => Token::LBrace,
                    RawToken::RBrace => Token::RBrace,
                    RawToken::LBracket => Token::LBracket,
                    RawToken::RBracket => Token::RBracket,
                    RawToken::Semi => Token::Semi,
                    RawToken::Comma => Token::Comma,
                    RawToken::Equals => Token::Equals,
                    RawToken::Arrow => Token::Arrow,
                    RawToken::DashDash => Token::DashDash,
                    RawToken::BlockCommentStart => {
                        match lexer.remainder().find("*/") {
                            Some(end_idx) => lexer.bump(end_idx + 2),
                            None => {
                                errors.push(LexError {
                                    span: span.clone(),
                                    message: "unterminated comment (missing closing */)"
                                        .to_string(),
                                });
                                lexer.bump(lexer.remainder().len());
                            }
                        }
                        continue;
                    }
                    RawToken::Str => {
                        let slice = lexer.slice();
                        Token::Str(unescape(&slice[1..slice.len() - 1]))
                    }
                    RawToken::Ident | RawToken::Numeral => Token::Ident(lexer.slice().to_string()),
                };
                tokens.push((token, span));
            }
            Err(()) => {
                errors.push(LexError {
                    span: span.clone(),
                    message: format!("unexpected character: {:?}", &source[span.clone()]),
                });
            }
        }
    }

    (tokens, errors)
}

/// Process escape sequences in a string literal.
///
/// DOT only defines `\"`; a backslash before anything else is kept.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('"') => out.push('"'),
                Some('\n') => {}
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
