use std::path::{Path, PathBuf};

use crate::animation::curve::Action;
use crate::catalog::classify::{CameraClass, CameraPlacement};
use crate::catalog::resolve::AssetReference;
use crate::engine::{ImportedAsset, SceneEngine, SceneSetup, import};
use crate::foundation::core::TargetRange;
use crate::foundation::error::RepcueResult;

/// One call received by a [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    /// `reset_scene` with its setup.
    ResetScene(SceneSetup),
    /// `import_asset` with the resolved path.
    ImportAsset(PathBuf),
    /// `bind_action` with the rig and a copy of the bound action.
    BindAction {
        /// Target rig, if any.
        rig: Option<String>,
        /// Action as bound.
        action: Action,
    },
    /// `place_camera` with the camera class.
    PlaceCamera(CameraClass),
    /// `set_output_resolution(width, height)`.
    SetOutputResolution(u32, u32),
    /// `set_frame_range`.
    SetFrameRange(TargetRange),
    /// `render_to_file` with the output path.
    RenderToFile(PathBuf),
}

/// Engine that imports motion clips natively, records every call and writes nothing.
///
/// Backs `--dry-run` and the pipeline tests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    /// Engine with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Paths passed to `render_to_file`, in call order.
    pub fn rendered_paths(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::RenderToFile(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of scene resets, one per processed exercise.
    pub fn reset_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, EngineCall::ResetScene(_)))
            .count()
    }
}

impl SceneEngine for RecordingEngine {
    fn reset_scene(&mut self, setup: &SceneSetup) -> RepcueResult<()> {
        self.calls.push(EngineCall::ResetScene(*setup));
        Ok(())
    }

    fn import_asset(&mut self, asset: &AssetReference) -> RepcueResult<ImportedAsset> {
        self.calls
            .push(EngineCall::ImportAsset(asset.resolved_path.clone()));
        import::import_native(asset)
    }

    fn bind_action(&mut self, rig: Option<&str>, action: &Action) -> RepcueResult<()> {
        self.calls.push(EngineCall::BindAction {
            rig: rig.map(str::to_string),
            action: action.clone(),
        });
        Ok(())
    }

    fn place_camera(
        &mut self,
        camera: CameraClass,
        _placement: CameraPlacement,
    ) -> RepcueResult<()> {
        self.calls.push(EngineCall::PlaceCamera(camera));
        Ok(())
    }

    fn set_output_resolution(&mut self, width: u32, height: u32) -> RepcueResult<()> {
        self.calls.push(EngineCall::SetOutputResolution(width, height));
        Ok(())
    }

    fn set_frame_range(&mut self, range: TargetRange) -> RepcueResult<()> {
        self.calls.push(EngineCall::SetFrameRange(range));
        Ok(())
    }

    fn render_to_file(&mut self, path: &Path) -> RepcueResult<()> {
        self.calls.push(EngineCall::RenderToFile(path.to_path_buf()));
        Ok(())
    }
}
