use std::path::Path;

use crate::animation::curve::Action;
use crate::catalog::classify::{CameraClass, CameraPlacement};
use crate::catalog::resolve::AssetReference;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::engine::{ImportedAsset, SceneEngine, SceneSetup, import};
use crate::foundation::core::{FrameIndex, TargetRange};
use crate::foundation::error::{RepcueError, RepcueResult};
use crate::render::frame::{FrameRGBA, PreviewPainter, PreviewStyle};

/// Encoder settings for [`PreviewEngine`].
#[derive(Clone, Debug)]
pub struct PreviewEngineOpts {
    /// x264 constant rate factor.
    pub crf: u8,
    /// x264 preset name.
    pub preset: String,
    /// Preview colors.
    pub style: PreviewStyle,
}

impl Default for PreviewEngineOpts {
    fn default() -> Self {
        Self {
            crf: 20,
            preset: "medium".to_string(),
            style: PreviewStyle::default(),
        }
    }
}

#[derive(Default)]
struct PreviewScene {
    setup: Option<SceneSetup>,
    action: Option<Action>,
    camera: Option<CameraClass>,
    resolution: Option<(u32, u32)>,
    range: Option<TargetRange>,
}

/// Self-contained engine that imports motion clips and renders schematic motion previews
/// through the system `ffmpeg`.
#[derive(Default)]
pub struct PreviewEngine {
    opts: PreviewEngineOpts,
    scene: PreviewScene,
}

impl PreviewEngine {
    /// Engine with an empty scene; call `reset_scene` before anything else.
    pub fn new(opts: PreviewEngineOpts) -> Self {
        Self {
            opts,
            scene: PreviewScene::default(),
        }
    }

    fn painter(&self) -> RepcueResult<(PreviewPainter<'_>, SceneSetup, TargetRange)> {
        let s = &self.scene;
        let setup = s
            .setup
            .ok_or_else(|| RepcueError::render_engine("scene was not reset before rendering"))?;
        let range = s
            .range
            .ok_or_else(|| RepcueError::render_engine("frame range not set"))?;
        let (width, height) = s
            .resolution
            .ok_or_else(|| RepcueError::render_engine("output resolution not set"))?;
        let painter = PreviewPainter::new(
            width,
            height,
            s.camera.unwrap_or(CameraClass::Standing),
            range,
            s.action.as_ref(),
            self.opts.style,
        );
        Ok((painter, setup, range))
    }

    /// Paint a single frame of the current scene.
    pub fn render_frame(&self, frame: FrameIndex) -> RepcueResult<FrameRGBA> {
        let (painter, _, _) = self.painter()?;
        Ok(painter.paint(frame))
    }

    /// Stream every frame of the configured range into `sink`. Returns the frame count.
    pub fn render_into(&self, sink: &mut dyn FrameSink) -> RepcueResult<u64> {
        let (painter, setup, range) = self.painter()?;
        let (width, height) = self.scene.resolution.unwrap_or_default();
        sink.begin(SinkConfig {
            width,
            height,
            fps: setup.fps,
        })?;
        let mut count = 0;
        for idx in range.frames() {
            sink.push_frame(idx, &painter.paint(idx))?;
            count += 1;
        }
        sink.end()?;
        Ok(count)
    }
}

impl SceneEngine for PreviewEngine {
    fn reset_scene(&mut self, setup: &SceneSetup) -> RepcueResult<()> {
        self.scene = PreviewScene {
            setup: Some(*setup),
            ..PreviewScene::default()
        };
        Ok(())
    }

    fn import_asset(&mut self, asset: &AssetReference) -> RepcueResult<ImportedAsset> {
        import::import_native(asset)
    }

    fn bind_action(&mut self, _rig: Option<&str>, action: &Action) -> RepcueResult<()> {
        self.scene.action = Some(action.clone());
        Ok(())
    }

    fn place_camera(
        &mut self,
        camera: CameraClass,
        _placement: CameraPlacement,
    ) -> RepcueResult<()> {
        self.scene.camera = Some(camera);
        Ok(())
    }

    fn set_output_resolution(&mut self, width: u32, height: u32) -> RepcueResult<()> {
        if width == 0 || height == 0 {
            return Err(RepcueError::render_engine(format!(
                "invalid output resolution {width}x{height}"
            )));
        }
        self.scene.resolution = Some((width, height));
        Ok(())
    }

    fn set_frame_range(&mut self, range: TargetRange) -> RepcueResult<()> {
        self.scene.range = Some(range);
        Ok(())
    }

    fn render_to_file(&mut self, path: &Path) -> RepcueResult<()> {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts {
            out_path: path.to_path_buf(),
            crf: self.opts.crf,
            preset: self.opts.preset.clone(),
        });
        let frames = self.render_into(&mut sink).map_err(|e| match e {
            RepcueError::RenderEngine(_) => e,
            other => RepcueError::render_engine(other.to_string()),
        })?;
        tracing::debug!(path = %path.display(), frames, "encoded preview");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/preview.rs"]
mod tests;
