use std::path::{Path, PathBuf};

use crate::catalog::id::ExerciseId;
use crate::foundation::error::RepcueError;

/// Version tag baked into every output file name.
pub const OUTPUT_VERSION: &str = "v1";

/// One of the three fixed output framings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectProfile {
    /// 1080x1080.
    Square,
    /// 1080x1920.
    Portrait,
    /// 1920x1080.
    Landscape,
}

impl AspectProfile {
    /// Every profile, in render order.
    pub const ALL: [AspectProfile; 3] = [
        AspectProfile::Square,
        AspectProfile::Portrait,
        AspectProfile::Landscape,
    ];

    /// Lower-case profile name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// `(width, height)` in pixels.
    pub fn resolution(self) -> (u32, u32) {
        match self {
            Self::Square => (1080, 1080),
            Self::Portrait => (1080, 1920),
            Self::Landscape => (1920, 1080),
        }
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.resolution().0
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.resolution().1
    }
}

impl std::fmt::Display for AspectProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.resolution();
        write!(f, "{} ({w}x{h})", self.name())
    }
}

impl std::str::FromStr for AspectProfile {
    type Err = RepcueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RepcueError::validation(format!(
                    "unknown aspect '{s}' (expected square, portrait or landscape)"
                ))
            })
    }
}

/// Video container written for every job.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContainerFormat {
    /// H.264 in MPEG-4.
    #[default]
    Mp4,
}

impl ContainerFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
        }
    }
}

impl std::str::FromStr for ContainerFormat {
    type Err = RepcueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            other => Err(RepcueError::validation(format!(
                "unsupported container format '{other}'"
            ))),
        }
    }
}

/// A single (exercise, aspect) render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderJob {
    /// Exercise being rendered.
    pub exercise_id: ExerciseId,
    /// Output framing.
    pub aspect: AspectProfile,
    /// Final video path.
    pub output_path: PathBuf,
}

/// Output path for one job: `<root>/<id>/<id>_v1_<W>x<H>.<ext>`.
pub fn output_path(
    output_root: &Path,
    id: &ExerciseId,
    aspect: AspectProfile,
    container: ContainerFormat,
) -> PathBuf {
    let (w, h) = aspect.resolution();
    output_root.join(id.as_str()).join(format!(
        "{id}_{OUTPUT_VERSION}_{w}x{h}.{}",
        container.extension()
    ))
}

/// Expand `id` into its three jobs (square, portrait, landscape) writing MP4.
pub fn expand(id: &ExerciseId, output_root: &Path) -> [RenderJob; 3] {
    expand_for(id, output_root, ContainerFormat::default())
}

/// [`expand`] for an explicit container format.
///
/// Paths depend only on the arguments, so re-expanding overwrites the same files.
pub fn expand_for(
    id: &ExerciseId,
    output_root: &Path,
    container: ContainerFormat,
) -> [RenderJob; 3] {
    AspectProfile::ALL.map(|aspect| RenderJob {
        exercise_id: id.clone(),
        aspect,
        output_path: output_path(output_root, id, aspect, container),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/jobs.rs"]
mod tests;
