//! RepCue renders exercise demonstration clips in bulk.
//!
//! For every exercise id in a catalog the batch pipeline resolves a motion asset, fits its
//! animation to a fixed loop length (or synthesizes an idle sway for holds), and renders the
//! clip once per aspect profile through a [`SceneEngine`]:
//!
//! - Build a [`Catalog`] and a [`BatchConfig`]
//! - Pick an engine ([`PreviewEngine`] to encode, [`RecordingEngine`] for dry runs)
//! - Call [`run`] and inspect the [`BatchResult`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Keyframe curves, retiming and idle synthesis.
pub mod animation;
/// Exercise ids, asset resolution and classification.
pub mod catalog;
pub mod encode;
/// Scene engine boundary and the built-in engines.
pub mod engine;
/// Batch orchestration, configuration and reports.
pub mod pipeline;
/// Render jobs and preview frames.
pub mod render;

pub use crate::foundation::core::{Fps, FrameIndex, TargetRange};
pub use crate::foundation::error::{RepcueError, RepcueResult, SkipKind};

pub use crate::animation::curve::{
    Action, AnimationCurve, HandlePoint, Interpolation, Keyframe, SourceRange,
};
pub use crate::animation::retime::{RetimeTransform, RetimedAction, retime};
pub use crate::catalog::classify::{
    CameraClass, CameraPlacement, DurationClass, DurationSettings, ExerciseClass, classify,
};
pub use crate::catalog::id::ExerciseId;
pub use crate::catalog::resolve::{AssetFormat, AssetReference, discover_catalog, resolve};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::engine::preview::{PreviewEngine, PreviewEngineOpts};
pub use crate::engine::recording::{EngineCall, RecordingEngine};
pub use crate::engine::{ImportedAsset, SceneEngine, SceneHandle, SceneSetup};
pub use crate::pipeline::batch::{
    AnimationSource, Catalog, ExercisePlan, PreparedExercise, plan, prepare_exercise, run,
};
pub use crate::pipeline::config::BatchConfig;
pub use crate::pipeline::report::{BatchResult, RenderedExercise, SkippedExercise};
pub use crate::pipeline::single::{SingleOutcome, SingleOverrides, run_single};
pub use crate::render::frame::{FrameRGBA, PreviewStyle};
pub use crate::render::jobs::{AspectProfile, ContainerFormat, RenderJob, expand};
