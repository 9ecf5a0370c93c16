use wf_core::{Entity, EntityKind, GameState, Location};

use crate::ast::*;
use crate::diagnostics::{Diagnostic, Severity};

const LOCATIONS_SECTION: &str = "locations";
const PATHS_SECTION: &str = "paths";
const DESCRIPTION: &str = "description";

/// Result of compiling an entities graph into a world.
#[derive(Debug)]
pub struct CompileResult {
    /// The compiled world (may be partial if errors occurred).
    pub state: GameState,
    /// Errors and warnings produced during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileResult {
    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Compile a parsed entities graph into a world without actions.
///
/// The graph holds a `locations` section and a `paths` section; when they
/// are not named so, the first and second top-level subgraphs are used.
/// Each location cluster's first node is the location itself, and the
/// first cluster is where players start.
///
/// The compilation happens in two passes:
/// 1. **Location pass**: create every location with its entities
/// 2. **Path pass**: connect locations, now that every name is known
pub fn compile(graph: &Graph) -> CompileResult {
    let mut compiler = Compiler::default();
    let state = compiler.compile(graph);
    CompileResult {
        state,
        diagnostics: compiler.diagnostics,
    }
}

#[derive(Default)]
struct Compiler {
    diagnostics: Vec<Diagnostic>,
}

impl Compiler {
    fn compile(&mut self, graph: &Graph) -> GameState {
        let sections: Vec<&Subgraph> = graph.subgraphs().collect();
        let locations = find_section(&sections, LOCATIONS_SECTION, 0);
        let paths = find_section(&sections, PATHS_SECTION, 1);

        let Some(locations) = locations else {
            self.diagnostics.push(
                Diagnostic::error(0..0, "entities file declares no locations")
                    .with_label("expected a `subgraph locations { ... }` section"),
            );
            return GameState::new("");
        };

        // Pass 1: locations and their entities
        let compiled: Vec<(Location, Span)> = locations
            .subgraphs()
            .filter_map(|cluster| self.compile_location(cluster))
            .collect();

        let Some((start, _)) = compiled.first() else {
            self.diagnostics.push(
                Diagnostic::error(locations.name_span(), "no location clusters declared")
                    .with_label("the first cluster is the start location"),
            );
            return GameState::new("");
        };

        let mut state = GameState::new(start.name());
        for (location, span) in compiled {
            if let Err(e) = state.add_location(location) {
                self.diagnostics.push(Diagnostic::error(span, e.to_string()));
            }
        }

        // Pass 2: paths
        match paths {
            Some(paths) => {
                for edge in paths.edges() {
                    for pair in edge.nodes.windows(2) {
                        self.compile_path(&mut state, &pair[0], &pair[1]);
                    }
                }
            }
            None => tracing::debug!("entities file declares no paths"),
        }

        state
    }

    fn compile_location(&mut self, cluster: &Subgraph) -> Option<(Location, Span)> {
        let mut nodes = cluster.nodes();
        let Some(head) = nodes.next() else {
            self.diagnostics.push(
                Diagnostic::error(cluster.name_span(), "location cluster has no location node")
                    .with_label("the first node of a cluster names the location"),
            );
            return None;
        };
        for extra in nodes {
            self.diagnostics.push(
                Diagnostic::warning(extra.id.span.clone(), "extra node in location cluster")
                    .with_label("ignored; entities belong in an artefacts, furniture or characters subgraph"),
            );
        }

        let mut location = Location::new(
            head.id.node.clone(),
            head.attribute(DESCRIPTION).unwrap_or_default(),
        );

        for group in cluster.subgraphs() {
            let Some(kind) = EntityKind::parse(group.name_str()) else {
                self.diagnostics.push(
                    Diagnostic::error(
                        group.name_span(),
                        format!("unknown entity type '{}'", group.name_str()),
                    )
                    .with_label("expected artefacts, furniture or characters"),
                );
                continue;
            };
            for node in group.nodes() {
                location.add_entity(compile_entity(kind, node));
            }
        }

        Some((location, head.id.span.clone()))
    }

    fn compile_path(&mut self, state: &mut GameState, from: &Spanned<String>, to: &Spanned<String>) {
        if let Err(e) = state.add_path(&from.node, &to.node) {
            let culprit = if state.is_location_name(&from.node) {
                to
            } else {
                from
            };
            self.diagnostics.push(
                Diagnostic::error(culprit.span.clone(), e.to_string())
                    .with_label("not declared in the locations section"),
            );
        }
    }
}

fn find_section<'g>(sections: &[&'g Subgraph], name: &str, index: usize) -> Option<&'g Subgraph> {
    sections
        .iter()
        .find(|s| s.name_str().eq_ignore_ascii_case(name))
        .or_else(|| sections.get(index))
        .copied()
}

fn compile_entity(kind: EntityKind, node: &NodeStmt) -> Entity {
    let description = node.attribute(DESCRIPTION).unwrap_or_default();
    node.attributes
        .iter()
        .filter(|a| !a.key.eq_ignore_ascii_case(DESCRIPTION))
        .fold(
            Entity::new(kind, node.id.node.clone(), description),
            |entity, a| entity.with_attribute(a.key.clone(), a.value.clone()),
        )
}
