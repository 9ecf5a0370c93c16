use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use wf_core::{EntityKind, GameState, Location};

use crate::config::WorldArgs;

/// What `check` reports. Locations serialize as the loaded world holds
/// them, entities and paths included.
#[derive(Debug, Serialize)]
struct WorldSummary<'a> {
    start: &'a str,
    locations: Vec<&'a Location>,
    actions: usize,
    triggers: Vec<&'a str>,
}

impl<'a> WorldSummary<'a> {
    fn of(state: &'a GameState) -> Self {
        Self {
            start: state.start_location(),
            locations: state.locations().collect(),
            actions: state.actions().len(),
            triggers: state.actions().triggers().collect(),
        }
    }

    fn entity_count(&self) -> usize {
        self.locations
            .iter()
            .flat_map(|l| EntityKind::ALL.map(|kind| l.entities(kind).len()))
            .sum()
    }
}

fn names(location: &Location, kind: EntityKind) -> String {
    location.entities(kind).names().collect::<Vec<_>>().join(", ")
}

pub fn run(world: &WorldArgs, json: bool) -> Result<(), String> {
    let state = super::load_world(world)?;
    let summary = WorldSummary::of(&state);

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Artefacts", "Furniture", "Characters", "Paths"]);
    for location in &summary.locations {
        table.add_row(vec![
            location.name().to_string(),
            names(location, EntityKind::Artefact),
            names(location, EntityKind::Furniture),
            names(location, EntityKind::Character),
            location.paths().join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {}", "All checks passed.".green().bold());
    println!(
        "  {} locations, {} entities, {} actions (start: {})",
        summary.locations.len(),
        summary.entity_count(),
        summary.actions,
        summary.start.bold()
    );

    Ok(())
}
