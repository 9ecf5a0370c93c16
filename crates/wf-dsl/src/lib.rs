//! Loaders for Wayfarer worlds.
//!
//! A world is described by two files: a Graphviz DOT entities file holding
//! locations, their entities and the paths between them, and an XML actions
//! file holding the custom actions players can trigger.

/// XML actions file reader.
pub mod actions;
/// Syntax tree for entities files.
pub mod ast;
/// Entities graph to world compiler.
pub mod compiler;
/// Diagnostics with source spans and ariadne rendering.
pub mod diagnostics;
/// Loader error types.
pub mod error;
/// DOT tokenizer.
pub mod lexer;
/// DOT parser producing the syntax tree.
pub mod parser;

use std::path::Path;

use wf_core::GameState;

/// Re-export the actions reader.
pub use actions::parse_actions;
/// Re-export the compile result.
pub use compiler::CompileResult;
/// Re-export diagnostic types.
pub use diagnostics::{Diagnostic, Severity, render_diagnostics};
/// Re-export error types.
pub use error::{LoadError, LoadResult};

/// Compile entities source text into a world without actions.
///
/// Lexer and parser errors come back as diagnostics on an empty world, so
/// callers always get every problem in the file at once.
pub fn compile_entities(source: &str) -> CompileResult {
    let (tokens, lex_errors) = lexer::lex(source);

    let mut diagnostics: Vec<Diagnostic> = lex_errors
        .into_iter()
        .map(|e| Diagnostic::error(e.span, e.message))
        .collect();

    let graph = match parser::parse(&tokens) {
        Ok(graph) => graph,
        Err(parse_errors) => {
            diagnostics.extend(
                parse_errors
                    .into_iter()
                    .map(|e| Diagnostic::error(e.span, e.message)),
            );
            return CompileResult {
                state: GameState::new(""),
                diagnostics,
            };
        }
    };

    let mut result = compiler::compile(&graph);
    result.diagnostics.extend(diagnostics);
    result
}

/// Parse entities source text, failing on any error diagnostic.
///
/// Warnings are logged and otherwise dropped.
pub fn parse_entities(source: &str) -> LoadResult<GameState> {
    let result = compile_entities(source);
    if result.has_errors() {
        return Err(LoadError::Entities {
            diagnostics: result.diagnostics,
            source_text: source.to_string(),
        });
    }
    for warning in &result.diagnostics {
        tracing::warn!(span = ?warning.span, "{}", warning.message);
    }
    Ok(result.state)
}

/// Build a complete world from entities and actions source text.
///
/// The result has passed [`GameState::validate`].
pub fn build_world(entities: &str, actions: &str) -> LoadResult<GameState> {
    let mut state = parse_entities(entities)?;
    for action in parse_actions(actions)? {
        state.add_action(action);
    }
    state.validate()?;
    tracing::info!(
        start = state.start_location(),
        locations = state.locations().count(),
        actions = state.actions().len(),
        "world loaded"
    );
    Ok(state)
}

/// Read both files from disk and build the world.
pub fn load_world(entities: &Path, actions: &Path) -> LoadResult<GameState> {
    let entities_text = read(entities)?;
    let actions_text = read(actions)?;
    build_world(&entities_text, &actions_text)
}

fn read(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
