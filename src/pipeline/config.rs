use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::catalog::classify::DurationSettings;
use crate::catalog::id::ExerciseId;
use crate::engine::SceneSetup;
use crate::foundation::core::Fps;
use crate::foundation::error::{RepcueError, RepcueResult};
use crate::render::jobs::ContainerFormat;

/// Settings for one batch run.
///
/// `static_ids` selects the hold duration and `floor_ids` the floor camera. The two sets are
/// independent; membership in one says nothing about the other.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Scene frame rate.
    pub fps: u32,
    /// Loop length for cyclic reps.
    pub rep_seconds: f64,
    /// Loop length for static holds.
    pub static_seconds: f64,
    /// Ids rendered as static holds.
    pub static_ids: BTreeSet<ExerciseId>,
    /// Ids framed with the floor camera.
    pub floor_ids: BTreeSet<ExerciseId>,
    /// Root of the `<id>/<id>_v1_<W>x<H>.<ext>` output tree.
    pub output_root: PathBuf,
    /// Container written for every job.
    pub container: ContainerFormat,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            rep_seconds: 2.2,
            static_seconds: 10.0,
            static_ids: BTreeSet::new(),
            floor_ids: BTreeSet::new(),
            output_root: PathBuf::from("videos"),
            container: ContainerFormat::Mp4,
        }
    }
}

impl BatchConfig {
    /// Parse a config from a JSON reader. Missing keys take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> RepcueResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RepcueError::config(format!("parse batch config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RepcueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RepcueError::config(format!("open batch config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject a zero frame rate, non-positive durations and an empty output root.
    pub fn validate(&self) -> RepcueResult<()> {
        if self.fps == 0 {
            return Err(RepcueError::config("fps must be > 0"));
        }
        for (name, secs) in [
            ("rep_seconds", self.rep_seconds),
            ("static_seconds", self.static_seconds),
        ] {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(RepcueError::config(format!(
                    "{name} must be a positive number of seconds, got {secs}"
                )));
            }
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(RepcueError::config("output_root must be set"));
        }
        Ok(())
    }

    /// `fps` as an [`Fps`].
    pub fn frame_rate(&self) -> RepcueResult<Fps> {
        Fps::integer(self.fps).map_err(|e| RepcueError::config(e.to_string()))
    }

    /// Timing inputs for the duration classifier.
    pub fn duration_settings(&self) -> RepcueResult<DurationSettings> {
        Ok(DurationSettings {
            fps: self.frame_rate()?,
            rep_seconds: self.rep_seconds,
            static_seconds: self.static_seconds,
        })
    }

    /// Settings applied on every scene reset.
    pub fn scene_setup(&self) -> RepcueResult<SceneSetup> {
        Ok(SceneSetup {
            fps: self.frame_rate()?,
            container: self.container,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
