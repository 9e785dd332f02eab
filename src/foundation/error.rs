use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Convenience result type used across repcue.
pub type RepcueResult<T> = Result<T, RepcueError>;

/// Top-level error taxonomy used by the pipeline.
///
/// Per-exercise failures ([`AssetNotFound`](Self::AssetNotFound),
/// [`UnsupportedFormat`](Self::UnsupportedFormat), [`Import`](Self::Import),
/// [`RenderEngine`](Self::RenderEngine)) are caught by the batch orchestrator and recorded as
/// skips. Everything else escaping a batch run is fatal for the whole run.
#[derive(thiserror::Error, Debug)]
pub enum RepcueError {
    /// No asset file with a supported extension exists for the exercise.
    #[error("asset not found for '{id}' in '{}'", root.display())]
    AssetNotFound {
        /// Exercise id that was looked up.
        id: String,
        /// Catalog root that was searched.
        root: PathBuf,
    },

    /// The asset resolved to a file the scene engine cannot import.
    #[error("unsupported asset format '{ext}': {}", path.display())]
    UnsupportedFormat {
        /// Path of the offending asset.
        path: PathBuf,
        /// Lower-cased extension without the dot.
        ext: String,
    },

    /// The asset exists and is supported but could not be imported.
    #[error("import error: {0}")]
    Import(String),

    /// The scene engine failed while configuring or rendering a job.
    #[error("render engine failure: {0}")]
    RenderEngine(String),

    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or transforming animation curves.
    #[error("animation error: {0}")]
    Animation(String),

    /// Batch misconfiguration (unwritable output root, unreadable config).
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reason tag recorded in a batch report for a skipped exercise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// The resolver found no asset file.
    AssetNotFound,
    /// The resolved asset has a format the engine cannot import.
    UnsupportedFormat,
    /// The asset could not be imported or its animation was unusable.
    ImportFailed,
    /// The engine failed while rendering; remaining jobs of the exercise were abandoned.
    RenderEngineFailure,
}

impl std::fmt::Display for SkipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AssetNotFound => "AssetNotFound",
            Self::UnsupportedFormat => "UnsupportedFormat",
            Self::ImportFailed => "ImportFailed",
            Self::RenderEngineFailure => "RenderEngineFailure",
        };
        f.write_str(s)
    }
}

impl RepcueError {
    /// Build a [`RepcueError::AssetNotFound`] value.
    pub fn asset_not_found(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self::AssetNotFound {
            id: id.into(),
            root: root.into(),
        }
    }

    /// Build a [`RepcueError::UnsupportedFormat`] value from the asset path.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        Self::UnsupportedFormat { path, ext }
    }

    /// Build a [`RepcueError::Import`] value.
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Build a [`RepcueError::RenderEngine`] value.
    pub fn render_engine(msg: impl Into<String>) -> Self {
        Self::RenderEngine(msg.into())
    }

    /// Build a [`RepcueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RepcueError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`RepcueError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RepcueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Skip tag for errors that are recoverable at batch level.
    ///
    /// Returns `None` for errors that must abort the whole batch.
    pub fn skip_kind(&self) -> Option<SkipKind> {
        match self {
            Self::AssetNotFound { .. } => Some(SkipKind::AssetNotFound),
            Self::UnsupportedFormat { .. } => Some(SkipKind::UnsupportedFormat),
            Self::Import(_) | Self::Animation(_) | Self::Serde(_) => Some(SkipKind::ImportFailed),
            Self::RenderEngine(_) => Some(SkipKind::RenderEngineFailure),
            Self::Validation(_) | Self::Config(_) | Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
