//! Asset lookup for catalog entries.
//!
//! An exercise `<id>` is backed by exactly one file `<catalog_root>/<id>.<ext>`. When several
//! formats coexist for the same id, the first extension in [`AssetFormat::SEARCH_ORDER`] wins.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::catalog::id::ExerciseId;
use crate::foundation::error::{RepcueError, RepcueResult};

/// Container format of a motion asset, identified by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetFormat {
    /// Autodesk FBX (`.fbx`).
    Fbx,
    /// Binary glTF (`.glb`).
    Glb,
    /// Text glTF (`.gltf`).
    Gltf,
    /// Blender library file (`.blend`).
    Blend,
    /// Native motion clip JSON (`.json`).
    MotionJson,
}

impl AssetFormat {
    /// Extensions tried by [`resolve`], in priority order.
    pub const SEARCH_ORDER: [AssetFormat; 5] = [
        AssetFormat::Fbx,
        AssetFormat::Glb,
        AssetFormat::Gltf,
        AssetFormat::Blend,
        AssetFormat::MotionJson,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Fbx => "fbx",
            Self::Glb => "glb",
            Self::Gltf => "gltf",
            Self::Blend => "blend",
            Self::MotionJson => "json",
        }
    }

    /// Format for an exact, lower-case extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|f| f.extension() == ext)
    }
}

/// A located asset for one exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetReference {
    /// Exercise the asset belongs to.
    pub exercise_id: ExerciseId,
    /// Existing file on disk.
    pub resolved_path: PathBuf,
    /// Format derived from the matched extension.
    pub format: AssetFormat,
}

/// Find the asset file for `id` under `catalog_root`.
///
/// Returns `None` when no supported file exists; this never fails.
pub fn resolve(catalog_root: &Path, id: &ExerciseId) -> Option<AssetReference> {
    AssetFormat::SEARCH_ORDER.into_iter().find_map(|format| {
        let candidate = catalog_root.join(format!("{id}.{}", format.extension()));
        candidate.is_file().then(|| AssetReference {
            exercise_id: id.clone(),
            resolved_path: candidate,
            format,
        })
    })
}

/// List every exercise id that has at least one supported asset under `catalog_root`.
///
/// Ids are sorted and unique. Files whose stem is not a valid id are ignored.
pub fn discover_catalog(catalog_root: &Path) -> RepcueResult<Vec<ExerciseId>> {
    let entries = std::fs::read_dir(catalog_root).map_err(|e| {
        RepcueError::config(format!(
            "read catalog root '{}': {e}",
            catalog_root.display()
        ))
    })?;

    let mut ids = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            RepcueError::config(format!(
                "read catalog root '{}': {e}",
                catalog_root.display()
            ))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if AssetFormat::from_extension(ext).is_none() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Ok(id) = ExerciseId::new(stem) {
            ids.insert(id);
        }
    }
    Ok(ids.into_iter().collect())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/resolve.rs"]
mod tests;
