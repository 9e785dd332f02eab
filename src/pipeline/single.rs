//! Single-asset adapter: the batch orchestrator run over a one-element catalog.

use std::path::Path;

use crate::catalog::id::ExerciseId;
use crate::engine::SceneEngine;
use crate::foundation::error::RepcueResult;
use crate::pipeline::batch::{Catalog, run};
use crate::pipeline::config::BatchConfig;
use crate::pipeline::report::BatchResult;

/// Per-run classification overrides. `None` keeps whatever the config says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleOverrides {
    /// Force membership in the static-hold set.
    pub is_static: Option<bool>,
    /// Force membership in the floor-camera set.
    pub is_floor: Option<bool>,
}

/// Result of one single-asset run plus a one-line message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleOutcome {
    /// Underlying one-element batch result.
    pub result: BatchResult,
    /// User-facing summary line.
    pub message: String,
}

impl SingleOutcome {
    /// `true` when all three aspects rendered.
    pub fn is_rendered(&self) -> bool {
        !self.result.rendered.is_empty()
    }
}

fn set_membership(
    set: &mut std::collections::BTreeSet<ExerciseId>,
    id: &ExerciseId,
    member: Option<bool>,
) {
    match member {
        Some(true) => {
            set.insert(id.clone());
        }
        Some(false) => {
            set.remove(id);
        }
        None => {}
    }
}

/// Render all three aspects of `id` from `catalog_root`.
///
/// Batch-fatal conditions still come back as `Err`; a skip is reported through the message.
pub fn run_single(
    catalog_root: &Path,
    id: &ExerciseId,
    config: &BatchConfig,
    overrides: SingleOverrides,
    engine: &mut dyn SceneEngine,
) -> RepcueResult<SingleOutcome> {
    let mut config = config.clone();
    set_membership(&mut config.static_ids, id, overrides.is_static);
    set_membership(&mut config.floor_ids, id, overrides.is_floor);

    let catalog = Catalog::new(catalog_root, vec![id.clone()]);
    let result = run(&catalog, &config, engine)?;

    let message = match result.skipped.first() {
        Some(skip) => format!("Skipped '{id}' ({}): {}", skip.kind, skip.message),
        None => format!("Rendered all three aspect ratios for '{id}'."),
    };
    Ok(SingleOutcome { result, message })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/single.rs"]
mod tests;
