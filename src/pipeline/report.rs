use std::path::PathBuf;

use crate::catalog::id::ExerciseId;
use crate::foundation::error::{RepcueError, RepcueResult, SkipKind};

/// An exercise whose three jobs all rendered.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderedExercise {
    /// Exercise id.
    pub id: ExerciseId,
    /// Written files, in aspect order.
    pub outputs: Vec<PathBuf>,
}

/// An exercise that was skipped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkippedExercise {
    /// Exercise id.
    pub id: ExerciseId,
    /// Reason tag.
    pub kind: SkipKind,
    /// Error text.
    pub message: String,
}

/// Outcome of a batch run, in catalog order.
///
/// Only grows while the run is in progress; every catalog id ends up in exactly one list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchResult {
    /// Exercises that rendered all jobs.
    pub rendered: Vec<RenderedExercise>,
    /// Exercises that were skipped.
    pub skipped: Vec<SkippedExercise>,
}

impl BatchResult {
    /// Append a rendered exercise.
    pub fn record_rendered(&mut self, id: ExerciseId, outputs: Vec<PathBuf>) {
        self.rendered.push(RenderedExercise { id, outputs });
    }

    /// Append a skipped exercise.
    pub fn record_skipped(&mut self, id: ExerciseId, kind: SkipKind, message: impl Into<String>) {
        self.skipped.push(SkippedExercise {
            id,
            kind,
            message: message.into(),
        });
    }

    /// Rendered ids in catalog order.
    pub fn rendered_ids(&self) -> impl Iterator<Item = &ExerciseId> {
        self.rendered.iter().map(|r| &r.id)
    }

    /// `true` when `id` rendered.
    pub fn is_rendered(&self, id: &ExerciseId) -> bool {
        self.rendered.iter().any(|r| &r.id == id)
    }

    /// Skip entry for `id`, if it was skipped.
    pub fn skip_for(&self, id: &ExerciseId) -> Option<&SkippedExercise> {
        self.skipped.iter().find(|s| &s.id == id)
    }

    /// Total ids accounted for.
    pub fn len(&self) -> usize {
        self.rendered.len() + self.skipped.len()
    }

    /// `true` when no id was processed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed JSON report.
    pub fn to_json_pretty(&self) -> RepcueResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RepcueError::serde(e.to_string()))
    }
}

impl std::fmt::Display for BatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "rendered {} exercise(s), skipped {}",
            self.rendered.len(),
            self.skipped.len()
        )?;
        for r in &self.rendered {
            writeln!(f, "  [ok]   {} ({} files)", r.id, r.outputs.len())?;
        }
        for s in &self.skipped {
            writeln!(f, "  [skip] {} {}: {}", s.id, s.kind, s.message)?;
        }
        Ok(())
    }
}
