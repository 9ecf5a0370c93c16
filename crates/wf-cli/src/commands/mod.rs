pub mod check;
pub mod play;
pub mod serve;

use wf_core::GameState;
use wf_dsl::{LoadError, render_diagnostics};

use crate::config::WorldArgs;

/// Load the world, printing any entities-file diagnostics to stderr.
fn load_world(args: &WorldArgs) -> Result<GameState, String> {
    match wf_dsl::load_world(&args.entities, &args.actions) {
        Ok(state) => Ok(state),
        Err(LoadError::Entities {
            diagnostics,
            source_text,
        }) => {
            let filename = args.entities.display().to_string();
            eprint!("{}", render_diagnostics(&source_text, &filename, &diagnostics));

            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            Err(format!(
                "{filename}: {errors} error{}",
                if errors == 1 { "" } else { "s" }
            ))
        }
        Err(e) => Err(e.to_string()),
    }
}
