//! Importer for the native motion clip format.
//!
//! A motion clip is a JSON document naming the rig and carrying at most one action:
//!
//! ```json
//! {
//!   "rig": "Armature",
//!   "action": {
//!     "name": "Squat",
//!     "frame_range": { "first_frame": 1, "last_frame": 48 },
//!     "curves": [
//!       { "data_path": "pose.bones[\"hips\"].location", "index": 2,
//!         "keys": [ { "time": 1, "value": 0.0 }, { "time": 24, "value": -0.4 } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! Keys may carry `handle_left`/`handle_right` (`{ "time", "value" }`) and an `interpolation`
//! of `constant`, `linear` or `bezier`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::curve::{Action, AnimationCurve, Keyframe, SourceRange};
use crate::catalog::resolve::{AssetFormat, AssetReference};
use crate::engine::ImportedAsset;
use crate::foundation::error::{RepcueError, RepcueResult};

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct MotionClipDef {
    #[serde(default)]
    rig: Option<String>,
    #[serde(default)]
    action: Option<ActionDef>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionDef {
    name: String,
    #[serde(default)]
    frame_range: Option<SourceRange>,
    #[serde(default)]
    curves: Vec<CurveDef>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveDef {
    data_path: String,
    #[serde(default)]
    index: u32,
    #[serde(default)]
    keys: Vec<Keyframe>,
}

/// Parse a motion clip from a JSON reader.
pub fn read_motion_clip<R: std::io::Read>(r: R) -> RepcueResult<ImportedAsset> {
    let def: MotionClipDef = serde_json::from_reader(r)
        .map_err(|e| RepcueError::import(format!("parse motion clip JSON: {e}")))?;

    let action = match def.action {
        Some(a) => {
            let mut action = Action::new(
                a.name,
                a.curves
                    .into_iter()
                    .map(|c| AnimationCurve::new(c.data_path, c.index, c.keys))
                    .collect(),
            );
            action.frame_range = a.frame_range;
            action.validate()?;
            // A keyless action is treated the same as no action at all.
            (!action.is_empty()).then_some(action)
        }
        None => None,
    };

    Ok(ImportedAsset {
        rig: def.rig,
        action,
    })
}

/// Parse a motion clip JSON file.
pub fn load_motion_clip(path: &Path) -> RepcueResult<ImportedAsset> {
    let f = File::open(path).map_err(|e| {
        RepcueError::import(format!("open motion clip '{}': {e}", path.display()))
    })?;
    read_motion_clip(BufReader::new(f))
}

/// Import `asset` if it is in a format this crate can read natively.
///
/// Interchange formats (FBX, glTF, .blend) need a host engine importer and are rejected with
/// [`RepcueError::UnsupportedFormat`].
pub fn import_native(asset: &AssetReference) -> RepcueResult<ImportedAsset> {
    match asset.format {
        AssetFormat::MotionJson => load_motion_clip(&asset.resolved_path),
        AssetFormat::Fbx | AssetFormat::Glb | AssetFormat::Gltf | AssetFormat::Blend => Err(
            RepcueError::unsupported_format(asset.resolved_path.clone()),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/import.rs"]
mod tests;
