//! Scene engine boundary.
//!
//! The pipeline never builds scenes, imports rigs or encodes video itself; it drives a
//! [`SceneEngine`] through a fixed sequence of calls per exercise. The engine is a single
//! active scene with no concurrent-access contract, so every call takes `&mut self` and a
//! [`SceneHandle`] is created (and the scene reset) once per exercise.

use std::path::Path;

use crate::animation::curve::Action;
use crate::catalog::classify::{CameraClass, CameraPlacement};
use crate::catalog::resolve::AssetReference;
use crate::foundation::core::{Fps, TargetRange};
use crate::foundation::error::RepcueResult;
use crate::render::jobs::ContainerFormat;

/// Native motion clip importer.
pub mod import;
/// ffmpeg-backed preview engine.
pub mod preview;
/// Call-recording engine for dry runs.
pub mod recording;

/// Scene-wide settings applied when a scene is reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSetup {
    /// Scene frame rate.
    pub fps: Fps,
    /// Container every job is encoded into.
    pub container: ContainerFormat,
}

/// What an import produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportedAsset {
    /// Name of the imported armature, if the asset has one.
    pub rig: Option<String>,
    /// First action found on the rig, if any.
    pub action: Option<Action>,
}

/// Host scene/render engine driven by the batch pipeline.
pub trait SceneEngine {
    /// Discard everything from the previous exercise and rebuild the base scene.
    fn reset_scene(&mut self, setup: &SceneSetup) -> RepcueResult<()>;
    /// Import an asset into the current scene.
    fn import_asset(&mut self, asset: &AssetReference) -> RepcueResult<ImportedAsset>;
    /// Make `action` the active animation of `rig` (or of the scene when `rig` is `None`).
    fn bind_action(&mut self, rig: Option<&str>, action: &Action) -> RepcueResult<()>;
    /// Position the scene camera for `camera`.
    fn place_camera(&mut self, camera: CameraClass, placement: CameraPlacement)
    -> RepcueResult<()>;
    /// Set the pixel size of subsequent renders.
    fn set_output_resolution(&mut self, width: u32, height: u32) -> RepcueResult<()>;
    /// Set the inclusive timeline range that is rendered.
    fn set_frame_range(&mut self, range: TargetRange) -> RepcueResult<()>;
    /// Render the configured frame range to `path`, blocking until the file is complete.
    fn render_to_file(&mut self, path: &Path) -> RepcueResult<()>;
}

/// Exclusive access to a freshly reset scene for the duration of one exercise.
pub struct SceneHandle<'e> {
    engine: &'e mut dyn SceneEngine,
}

impl<'e> SceneHandle<'e> {
    /// Reset the engine's scene and hand out a handle to it.
    pub fn fresh(engine: &'e mut dyn SceneEngine, setup: &SceneSetup) -> RepcueResult<Self> {
        engine.reset_scene(setup)?;
        Ok(Self { engine })
    }

    /// See [`SceneEngine::import_asset`].
    pub fn import_asset(&mut self, asset: &AssetReference) -> RepcueResult<ImportedAsset> {
        self.engine.import_asset(asset)
    }

    /// See [`SceneEngine::bind_action`].
    pub fn bind_action(&mut self, rig: Option<&str>, action: &Action) -> RepcueResult<()> {
        self.engine.bind_action(rig, action)
    }

    /// Place the camera at the standard [`CameraPlacement`] for `camera`.
    pub fn place_camera(&mut self, camera: CameraClass) -> RepcueResult<()> {
        self.engine
            .place_camera(camera, CameraPlacement::for_class(camera))
    }

    /// See [`SceneEngine::set_output_resolution`].
    pub fn set_output_resolution(&mut self, width: u32, height: u32) -> RepcueResult<()> {
        self.engine.set_output_resolution(width, height)
    }

    /// See [`SceneEngine::set_frame_range`].
    pub fn set_frame_range(&mut self, range: TargetRange) -> RepcueResult<()> {
        self.engine.set_frame_range(range)
    }

    /// See [`SceneEngine::render_to_file`].
    pub fn render_to_file(&mut self, path: &Path) -> RepcueResult<()> {
        self.engine.render_to_file(path)
    }
}
